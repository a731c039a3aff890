//! Playback control: pause, resume and quit.
//!
//! Pausing suspends the audio device itself, so while paused the driver
//! stops asking the oscillator bank for blocks.

use color_eyre::eyre::Result as EyreResult;

/// Something that can start and stop pulling audio.
pub trait Transport {
    /// Start (or restart) pulling blocks from the generator.
    fn resume(&mut self) -> EyreResult<()>;

    /// Stop pulling blocks until the next `resume`.
    fn suspend(&mut self) -> EyreResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    /// Terminal state: the program is shutting down.
    Terminated,
}

/// Commands sent from the input loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle play/pause
    TogglePause,
    /// Shut down
    Quit,
}

/// Two-state play/pause machine with a terminal `Terminated` state.
pub struct PlaybackController<T: Transport> {
    transport: T,
    state: PlaybackState,
}

impl<T: Transport> PlaybackController<T> {
    /// Wrap a transport that is already playing.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: PlaybackState::Playing,
        }
    }

    /// Apply a command and return the resulting state.
    ///
    /// If the transport fails to pause or resume, the state is left unchanged
    /// and the error is returned.
    pub fn handle(&mut self, command: Command) -> EyreResult<PlaybackState> {
        self.state = match (self.state, command) {
            (PlaybackState::Terminated, _) => PlaybackState::Terminated,
            (_, Command::Quit) => PlaybackState::Terminated,
            (PlaybackState::Playing, Command::TogglePause) => {
                self.transport.suspend()?;
                PlaybackState::Paused
            }
            (PlaybackState::Paused, Command::TogglePause) => {
                self.transport.resume()?;
                PlaybackState::Playing
            }
        };
        Ok(self.state)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_terminated(&self) -> bool {
        self.state == PlaybackState::Terminated
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
