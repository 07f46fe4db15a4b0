//! Platform-agnostic RC PWM pulse capture and LED effect mapping.
//!
//! This crate holds the core of a three-channel radio-control light
//! controller without any platform-specific dependencies. It can be
//! used both in embedded `no_std` environments and on host for
//! testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`capture`]: edge-timed pulse measurement ([`EdgeTimer`]) and the
//!   per-channel producer/consumer handoff ([`SampleCell`])
//! - [`mapper`]: pulse-width to actuation mapping ([`switch_on`],
//!   [`brightness_from_pulse`], [`color_trigger`])
//! - [`types`]: the RGB triple and cyclic color state ([`Rgb`],
//!   [`ColorCycle`])
//! - [`output`]: actuator seam ([`LightOutputs`])
//! - [`controller`]: the polling consumer loop ([`LightController`])
//!
//! # Data flow
//!
//! A GPIO edge handler feeds each transition with its timestamp into
//! that channel's [`EdgeTimer`]; a completed high pulse is published
//! into the channel's [`SampleCell`]. The single-threaded
//! [`LightController`] drains the cells at a bounded cadence and
//! drives the outputs. The cell holds at most one sample: a new pulse
//! arriving before consumption is dropped, so only the latest stick
//! position ever matters.
//!
//! # Example
//!
//! ```
//! use rc_lights::{brightness_from_pulse, Edge, EdgeTimer, SampleCell};
//!
//! let cell = SampleCell::new();
//! let mut timer = EdgeTimer::new();
//!
//! // A 1500 us high pulse, timestamped by a monotonic microsecond clock.
//! timer.on_edge(Edge::Rising, 40_000, &cell);
//! timer.on_edge(Edge::Falling, 41_500, &cell);
//!
//! assert_eq!(cell.take(), Some(1_500));
//! assert_eq!(brightness_from_pulse(1_500), 127);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.
//! The shared channel state uses `portable-atomic` load/store only, so
//! it also works on targets without atomic compare-and-swap.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod capture;
pub mod controller;
pub mod mapper;
pub mod output;
pub mod types;

// Re-export main types at crate root
pub use capture::{CaptureEvent, Edge, EdgeTimer, SampleCell};
pub use controller::{LightController, CHANNEL_COUNT, POLL_INTERVAL_MS};
pub use mapper::{
    brightness_from_pulse, color_trigger, switch_on, COLOR_TRIGGER_THRESHOLD_US, DUTY_MAX,
    NEUTRAL_PULSE_US, PULSE_MAX_US, PULSE_MIN_US, SWITCH_ON_THRESHOLD_US,
};
pub use output::LightOutputs;
pub use types::{ColorCycle, Rgb};
