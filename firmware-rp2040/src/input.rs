//! Per-channel GPIO edge watcher.
//!
//! Awaits every logic-level change on an RC input pin, classifies the
//! edge from the level behind it and feeds it with an
//! `embassy_time::Instant` microsecond timestamp into the channel's
//! [`EdgeTimer`].

use defmt::trace;
use embassy_rp::gpio::Input;
use embassy_time::Instant;
use rc_lights::{CaptureEvent, Edge, EdgeTimer, SampleCell};

/// Watch one RC channel pin forever, publishing completed pulse
/// widths into `cell`.
///
/// This function is the single producer for its cell. Dropped edges
/// (overruns, falling edges without a recorded start) are expected
/// under normal operation and only surface at `trace` level.
///
/// `channel` is the zero-based channel index, used for log prefixes.
pub async fn watch_edges(channel: usize, mut pin: Input<'static>, cell: &'static SampleCell) -> ! {
    let mut timer = EdgeTimer::new();

    loop {
        pin.wait_for_any_edge().await;
        let edge = Edge::from_level(pin.is_high());
        let now_us = Instant::now().as_micros();

        match timer.on_edge(edge, now_us, cell) {
            CaptureEvent::Overrun => {
                trace!("[CH{}] overrun, pulse dropped", channel + 1);
            }
            CaptureEvent::StaleStart => {
                trace!("[CH{}] falling edge without start", channel + 1);
            }
            CaptureEvent::Armed | CaptureEvent::Published(_) => {}
        }
    }
}
