//! fourplay - four-voice sine chord with a terminal oscilloscope
//!
//! Run with: cargo run
//! Keys: [Space] pause/resume, [Esc]/[Q]/[Ctrl+C] quit

mod app;
mod ui;

use app::FourPlay;
use fourplay::{AMPLITUDE, CHORD};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    FourPlay::new().amplitude(AMPLITUDE).chord(CHORD).run()
}
