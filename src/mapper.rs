//! Pulse-width to actuation mapping.
//!
//! Standard RC PWM carries a 1000-2000 µs high pulse at ~50 Hz. These
//! functions turn a measured pulse width into the three channel
//! effects: a binary switch, a linear brightness duty and a color-step
//! trigger. All of them are total over `u32`, so out-of-range widths
//! from signal loss or glitches degrade to a clamped or thresholded
//! output instead of failing.

/// Shortest nominal RC pulse (stick at minimum).
pub const PULSE_MIN_US: u32 = 1000;

/// Longest nominal RC pulse (stick at maximum).
pub const PULSE_MAX_US: u32 = 2000;

/// Centered/neutral pulse width.
pub const NEUTRAL_PULSE_US: u32 = 1500;

/// Pulses strictly above this turn the switch channel on.
pub const SWITCH_ON_THRESHOLD_US: u32 = 1600;

/// Pulses strictly above this advance the color cycle.
pub const COLOR_TRIGGER_THRESHOLD_US: u32 = 1700;

/// Full-scale duty-cycle unit for the brightness and RGB outputs.
pub const DUTY_MAX: u8 = 255;

/// Switch channel: on iff the pulse is strictly above 1600 µs.
///
/// Binary, no hysteresis.
#[inline]
#[must_use]
pub fn switch_on(pulse_us: u32) -> bool {
    pulse_us > SWITCH_ON_THRESHOLD_US
}

/// Dimmer channel: rescale [1000, 2000] µs linearly to [0, 255].
///
/// The pulse is clamped to the nominal domain first, so a glitched
/// width can never wrap or overshoot the duty range. Integer
/// arithmetic truncates (1500 µs maps to 127).
#[inline]
#[must_use]
pub fn brightness_from_pulse(pulse_us: u32) -> u8 {
    let clamped = pulse_us.clamp(PULSE_MIN_US, PULSE_MAX_US);
    ((clamped - PULSE_MIN_US) * DUTY_MAX as u32 / (PULSE_MAX_US - PULSE_MIN_US)) as u8
}

/// Trigger channel: fires iff the pulse is strictly above 1700 µs.
#[inline]
#[must_use]
pub fn color_trigger(pulse_us: u32) -> bool {
    pulse_us > COLOR_TRIGGER_THRESHOLD_US
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_boundary() {
        assert!(!switch_on(0));
        assert!(!switch_on(SWITCH_ON_THRESHOLD_US));
        assert!(switch_on(SWITCH_ON_THRESHOLD_US + 1));
        assert!(switch_on(5000));
    }

    #[test]
    fn test_brightness_endpoints() {
        assert_eq!(brightness_from_pulse(PULSE_MIN_US), 0);
        assert_eq!(brightness_from_pulse(PULSE_MAX_US), 255);
    }

    #[test]
    fn test_brightness_truncates() {
        // Integer division, no rounding.
        assert_eq!(brightness_from_pulse(NEUTRAL_PULSE_US), 127);
        assert_eq!(brightness_from_pulse(1001), 0);
        assert_eq!(brightness_from_pulse(1999), 254);
    }

    #[test]
    fn test_brightness_clamps_out_of_range() {
        assert_eq!(brightness_from_pulse(500), 0);
        assert_eq!(brightness_from_pulse(2500), 255);
        assert_eq!(brightness_from_pulse(0), 0);
        assert_eq!(brightness_from_pulse(u32::MAX), 255);
    }

    #[test]
    fn test_brightness_monotonic_in_domain() {
        let mut last = 0;
        for pulse in PULSE_MIN_US..=PULSE_MAX_US {
            let duty = brightness_from_pulse(pulse);
            assert!(duty >= last);
            last = duty;
        }
    }

    #[test]
    fn test_trigger_boundary() {
        assert!(!color_trigger(COLOR_TRIGGER_THRESHOLD_US));
        assert!(color_trigger(COLOR_TRIGGER_THRESHOLD_US + 1));
    }
}
