//! Audio device output
//!
//! Opens the default output device as a mono, 44.1 kHz, signed 32-bit stream
//! with a fixed 1024-frame buffer and drives it from an [`Engine`].

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    BufferSize, Device, SampleFormat, SampleRate, StreamConfig,
};

use crate::{playback::Transport, Config, BUFFER_SIZE};
#[cfg(feature = "rtrb")]
use crate::synth::Engine;

/// A running output stream.
pub struct AudioOutput {
    stream: cpal::Stream,
}

/// The exact stream shape the engine writes.
pub fn stream_config(config: &Config) -> StreamConfig {
    StreamConfig {
        channels: 1,
        sample_rate: SampleRate(config.sample_rate),
        buffer_size: BufferSize::Fixed(BUFFER_SIZE as u32),
    }
}

/// Open the default output device and start playing.
///
/// Any failure here is fatal: there is no silent fallback.
#[cfg(feature = "rtrb")]
pub fn open(config: &Config, mut engine: Engine) -> EyreResult<AudioOutput> {
    let host = cpal::default_host();
    log::info!("cpal host: {}", host.id().name());
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    match device.name() {
        Ok(name) => log::info!("cpal device: {}", name),
        Err(_) => log::info!("cpal device: (no name)"),
    }

    let stream_config = stream_config(config);
    if !supports(&device, &stream_config) {
        log::warn!(
            "device does not advertise mono i32 at {} Hz; trying anyway",
            config.sample_rate
        );
    }
    log::info!("sample format: {}", SampleFormat::I32);
    log::info!("sample rate: {}", stream_config.sample_rate.0);
    log::info!("buffer size: {} frames", BUFFER_SIZE);

    let stream = device
        .build_output_stream(
            &stream_config,
            move |data: &mut [i32], _: &cpal::OutputCallbackInfo| engine.process(data),
            |err| log::error!("stream error: {}", err),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;

    Ok(AudioOutput { stream })
}

fn supports(device: &Device, wanted: &StreamConfig) -> bool {
    let Ok(mut configs) = device.supported_output_configs() else {
        return false;
    };
    configs.any(|range| {
        range.channels() == wanted.channels
            && range.sample_format() == SampleFormat::I32
            && range.min_sample_rate() <= wanted.sample_rate
            && wanted.sample_rate <= range.max_sample_rate()
    })
}

impl Transport for AudioOutput {
    fn resume(&mut self) -> EyreResult<()> {
        self.stream.play().wrap_err("failed to resume output stream")
    }

    fn suspend(&mut self) -> EyreResult<()> {
        self.stream.pause().wrap_err("failed to pause output stream")
    }
}
