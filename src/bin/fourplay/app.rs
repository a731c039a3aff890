//! FourPlay - application builder and runner

use std::io::stdout;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::{execute, terminal::SetTitle};
use rtrb::RingBuffer;

use fourplay::{
    io::output,
    playback::PlaybackController,
    synth::{engine::SCOPE_RING_CAPACITY, Engine, OscillatorBank, Waveforms},
    Config, MAX_VOICES,
};

use super::ui::ScopeApp;

const TITLE: &str = "FourPlay";

/// Main application builder
pub struct FourPlay {
    config: Config,
}

impl FourPlay {
    /// Create a new instance with the default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the amplitude of every voice
    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.config = self.config.amplitude(amplitude);
        self
    }

    /// Set all voice frequencies (0.0 leaves a slot silent)
    pub fn chord(mut self, frequencies: [f32; MAX_VOICES]) -> Self {
        self.config = self.config.chord(frequencies);
        self
    }

    /// Run the application (takes over the terminal, plays audio)
    pub fn run(self) -> EyreResult<()> {
        let config = self.config;
        config.validate().wrap_err("invalid configuration")?;

        log::info!(
            "voices: {:?} Hz at amplitude {}",
            config.frequencies,
            config.amplitude
        );

        // Audio thread -> UI: complete waveform snapshots, never shared buffers
        let (scope_tx, scope_rx) = RingBuffer::<Waveforms>::new(SCOPE_RING_CAPACITY);
        let engine = Engine::new(OscillatorBank::from_config(&config), scope_tx);

        // Fail before touching the terminal so the report stays readable
        let output = output::open(&config, engine).wrap_err("failed to open audio output")?;
        let controller = PlaybackController::new(output);

        let mut terminal = ratatui::init();
        if let Err(err) = execute!(stdout(), SetTitle(TITLE)) {
            log::debug!("could not set terminal title: {err}");
        }

        let result = ScopeApp::new(scope_rx, controller, &config).run(&mut terminal);

        ratatui::restore();
        log::info!("stopped");
        result
    }
}

impl Default for FourPlay {
    fn default() -> Self {
        Self::new()
    }
}
