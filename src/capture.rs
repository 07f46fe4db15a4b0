//! Interrupt-driven pulse-width capture.
//!
//! Each RC channel pairs an [`EdgeTimer`] (owned by the edge-handler
//! context) with a [`SampleCell`] (shared with the control loop). The
//! cell is a single-producer/single-consumer handoff: the handler is
//! the only writer of the width and the only side that sets the ready
//! flag, the control loop is the only side that clears it. A release
//! store on the flag after the width write, matched by an acquire load
//! before the width read, makes the measurement visible as a unit, so
//! the consumer can never observe a half-written sample.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::mapper::NEUTRAL_PULSE_US;

/// A GPIO logic-level transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

impl Edge {
    /// Classify an edge from the pin level observed after it.
    #[inline]
    #[must_use]
    pub const fn from_level(high: bool) -> Self {
        if high {
            Edge::Rising
        } else {
            Edge::Falling
        }
    }
}

/// What feeding one edge to an [`EdgeTimer`] did.
///
/// None of these are errors. `StaleStart` and `Overrun` are the
/// documented degradation paths: the edge is dropped and the previous
/// output simply holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureEvent {
    /// Rising edge recorded; a measurement is now in flight.
    Armed,
    /// Falling edge completed a measurement and published this width.
    Published(u32),
    /// Falling edge with no recorded rising edge; ignored.
    StaleStart,
    /// Previous sample not yet consumed; this measurement was dropped.
    Overrun,
}

/// Per-channel shared sample buffer: latest pulse width plus a ready
/// flag, handed from the edge handler to the control loop.
///
/// At most one sample is in flight per channel. While the flag is set
/// the producer refuses new widths, so the buffered value stays intact
/// until the consumer takes it (latest-wins-after-consumption).
pub struct SampleCell {
    width_us: AtomicU32,
    ready: AtomicBool,
}

impl SampleCell {
    /// Create an idle cell holding the neutral width.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width_us: AtomicU32::new(NEUTRAL_PULSE_US),
            ready: AtomicBool::new(false),
        }
    }

    /// Producer side: offer a completed measurement.
    ///
    /// Returns `false` without touching the buffer if the previous
    /// sample is still unconsumed. Called only from the channel's edge
    /// handler.
    pub fn publish(&self, width_us: u32) -> bool {
        if self.ready.load(Ordering::Acquire) {
            return false;
        }
        self.width_us.store(width_us, Ordering::Relaxed);
        self.ready.store(true, Ordering::Release);
        true
    }

    /// Consumer side: take the pending sample, if any, clearing the
    /// ready flag. `None` is the normal idle answer.
    pub fn take(&self) -> Option<u32> {
        if !self.ready.load(Ordering::Acquire) {
            return None;
        }
        let width = self.width_us.load(Ordering::Relaxed);
        self.ready.store(false, Ordering::Release);
        Some(width)
    }

    /// Whether a sample is waiting to be consumed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

impl Default for SampleCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-channel edge state machine. Lives entirely in the edge-handler
/// context; only the [`SampleCell`] crosses into the control loop.
///
/// A start timestamp of 0 means no measurement is in flight. Rising
/// edges always overwrite the start, so a missed falling edge
/// resynchronizes on the next pulse instead of producing a bogus
/// multi-frame width.
pub struct EdgeTimer {
    start_us: u64,
}

impl EdgeTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self { start_us: 0 }
    }

    /// Feed one edge with its monotonic microsecond timestamp.
    ///
    /// Must be short and non-blocking; it runs in the edge-handler
    /// context. Mutates only this channel's state.
    pub fn on_edge(&mut self, edge: Edge, now_us: u64, cell: &SampleCell) -> CaptureEvent {
        match edge {
            Edge::Rising => {
                self.start_us = now_us;
                CaptureEvent::Armed
            }
            Edge::Falling => {
                if self.start_us == 0 {
                    return CaptureEvent::StaleStart;
                }
                let width = now_us
                    .saturating_sub(self.start_us)
                    .min(u32::MAX as u64) as u32;
                if cell.publish(width) {
                    self.start_us = 0;
                    CaptureEvent::Published(width)
                } else {
                    // Start stays armed; the next rising edge rewrites it anyway.
                    CaptureEvent::Overrun
                }
            }
        }
    }
}

impl Default for EdgeTimer {
    fn default() -> Self {
        Self::new()
    }
}
