//! Actuator seam consumed by the control loop.

use crate::types::Rgb;

/// The three physical light outputs.
///
/// This trait abstracts the actuators so the control loop can be
/// exercised on the host with a recording mock. Unlike a transport
/// sink the methods are synchronous and infallible: a duty-cycle
/// write is a register update that cannot block or fail.
pub trait LightOutputs {
    /// Drive the on/off LED (channel 1).
    fn set_switch(&mut self, on: bool);

    /// Drive the brightness LED duty cycle, 0-255 (channel 2).
    fn set_brightness(&mut self, duty: u8);

    /// Drive the RGB element, one duty cycle per component (channel 3).
    fn set_rgb(&mut self, color: Rgb);
}
