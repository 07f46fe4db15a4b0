//! RC receiver PWM to LED controller for RP2040.
//!
//! This crate provides the embedded implementation of a three-channel
//! RC light controller. The firmware runs on a Raspberry Pi Pico
//! (RP2040) and:
//!
//! 1. Measures the high-pulse width of three standard RC PWM inputs
//!    (1000-2000 us at ~50 Hz) by timestamping GPIO edges
//! 2. Hands each completed measurement to the control loop through a
//!    per-channel lock-free sample cell
//! 3. Drives an on/off LED, a brightness LED and an RGB element
//!
//! # Hardware Configuration
//!
//! | Function        | GPIO | Description                       |
//! |-----------------|------|-----------------------------------|
//! | CH1 input       | 10   | Switch channel (pull-up)          |
//! | CH2 input       | 11   | Brightness channel (pull-up)      |
//! | CH3 input       | 12   | Color trigger channel (pull-up)   |
//! | Switch LED      | 25   | On-board LED, on/off              |
//! | Brightness LED  | 2    | PWM slice 1A                      |
//! | RGB red/green   | 4/5  | PWM slice 2 A/B                   |
//! | RGB blue        | 6    | PWM slice 3A                      |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with four tasks: one
//! edge-capture task per channel plus the control task. Each capture
//! task is the single producer for its channel's
//! [`SampleCell`](rc_lights::SampleCell); the control task is the
//! single consumer. The cell's release/acquire flag protocol replaces
//! the `volatile` globals a bare-metal port of this design would use,
//! and drops a new pulse rather than overwriting an unconsumed one.
//!
//! # Modules
//!
//! - [`input`]: per-channel GPIO edge watcher ([`watch_edges`](input::watch_edges))
//! - [`output`]: GPIO/PWM actuators ([`PwmLightOutputs`](output::PwmLightOutputs))
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports all public items from [`rc_lights`] for
//! convenience, so consumers only need to depend on this crate.

#![no_std]

// Re-export core types for convenience
pub use rc_lights::{
    brightness_from_pulse, color_trigger, switch_on, CaptureEvent, ColorCycle, Edge, EdgeTimer,
    LightController, LightOutputs, Rgb, SampleCell, CHANNEL_COUNT, COLOR_TRIGGER_THRESHOLD_US,
    DUTY_MAX, NEUTRAL_PULSE_US, POLL_INTERVAL_MS, PULSE_MAX_US, PULSE_MIN_US,
    SWITCH_ON_THRESHOLD_US,
};

pub mod input;
pub mod output;

pub use input::watch_edges;
pub use output::{duty_config, PwmLightOutputs};
