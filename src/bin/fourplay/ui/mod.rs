//! TUI module for fourplay
//!
//! Full-screen oscilloscope of the combined chord and each of its voices.

mod transport;
mod waveform;

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use rtrb::Consumer;

use fourplay::{
    playback::{Command, PlaybackController, Transport},
    synth::Waveforms,
    Config, MAX_VOICES,
};

use transport::render_transport;
use waveform::render_waveforms;

/// UI application state
pub struct ScopeApp<T: Transport> {
    /// Ring buffer receiver for waveform snapshots
    scope_rx: Consumer<Waveforms>,
    /// Latest snapshot received (boxed, it is ~20 KiB)
    waveforms: Box<Waveforms>,
    /// Play/pause/quit state and the audio transport it drives
    controller: PlaybackController<T>,
    sample_rate: u32,
    frequencies: [f32; MAX_VOICES],
    frame_interval: Duration,
    paused_poll_interval: Duration,
}

impl<T: Transport> ScopeApp<T> {
    pub fn new(
        scope_rx: Consumer<Waveforms>,
        controller: PlaybackController<T>,
        config: &Config,
    ) -> Self {
        Self {
            scope_rx,
            waveforms: Box::new(Waveforms::new()),
            controller,
            sample_rate: config.sample_rate,
            frequencies: config.frequencies,
            frame_interval: config.frame_interval,
            paused_poll_interval: config.paused_poll_interval,
        }
    }

    /// Run the UI event loop until a quit command
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.controller.is_terminated() {
            let timeout = if self.controller.is_playing() {
                self.poll_scope();
                terminal.draw(|frame| self.render(frame))?;
                self.frame_interval
            } else {
                // Paused: nothing new to show, just wait for input
                self.paused_poll_interval
            };

            // Handle keyboard input (non-blocking, doubles as frame pacing)
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(command) = command_for_key(key) {
                        let state = self.controller.handle(command)?;
                        log::debug!("{command:?} -> {state:?}");
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep only the newest snapshot from the ring buffer
    fn poll_scope(&mut self) {
        while let Ok(waveforms) = self.scope_rx.pop() {
            *self.waveforms = waveforms;
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),    // Scope
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        render_waveforms(frame, chunks[0], &self.waveforms);
        render_transport(
            frame,
            chunks[1],
            &self.waveforms,
            self.sample_rate,
            &self.frequencies,
        );
    }
}

/// Map a key press to a playback command
fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        // Raw mode swallows SIGINT; treat it like closing the window
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn space_toggles_pause() {
        assert_eq!(command_for_key(press(KeyCode::Char(' '))), Some(Command::TogglePause));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            command_for_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn releases_and_other_keys_are_ignored() {
        assert_eq!(
            command_for_key(key(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release)),
            None
        );
        assert_eq!(
            command_for_key(key(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Repeat)),
            None
        );
        assert_eq!(command_for_key(press(KeyCode::Char('c'))), None);
        assert_eq!(command_for_key(press(KeyCode::Enter)), None);
    }
}
