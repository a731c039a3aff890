//! Engine - the body of the audio callback
//!
//! Turns a device buffer request into oscillator bank blocks, writes the
//! converted samples, and publishes a copy of each block's waveforms to the UI
//! through a lock-free ring. The UI never touches the bank's own buffers.

use rtrb::{Producer, PushError};

use crate::{io::converter::write_i32, synth::OscillatorBank, synth::Waveforms, BUFFER_SIZE};

/// Capacity in snapshots for the audio→UI ring.
pub const SCOPE_RING_CAPACITY: usize = 4;

pub struct Engine {
    bank: OscillatorBank,
    scope_tx: Producer<Waveforms>,
    dropped_snapshots: u64,
}

impl Engine {
    pub fn new(bank: OscillatorBank, scope_tx: Producer<Waveforms>) -> Self {
        Self {
            bank,
            scope_tx,
            dropped_snapshots: 0,
        }
    }

    /// Fill a mono `i32` device buffer.
    ///
    /// Requests longer than `BUFFER_SIZE` are rendered block by block so the
    /// bank never writes past its fixed buffers.
    pub fn process(&mut self, data: &mut [i32]) {
        for chunk in data.chunks_mut(BUFFER_SIZE) {
            self.bank.render_block(chunk.len());
            write_i32(self.bank.waveforms().combined(), chunk);
            self.publish();
        }
    }

    /// Push the latest waveforms to the UI, non-blocking (drop on overflow)
    fn publish(&mut self) {
        if let Err(PushError::Full(_)) = self.scope_tx.push(*self.bank.waveforms()) {
            self.dropped_snapshots += 1;
        }
    }

    pub fn bank(&self) -> &OscillatorBank {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut OscillatorBank {
        &mut self.bank
    }

    /// Snapshots discarded because the UI had not drained the ring.
    pub fn dropped_snapshots(&self) -> u64 {
        self.dropped_snapshots
    }
}
