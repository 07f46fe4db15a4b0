//! LightController: drains channel samples and drives the outputs.

use crate::capture::SampleCell;
use crate::mapper::{brightness_from_pulse, color_trigger, switch_on};
use crate::output::LightOutputs;
use crate::types::ColorCycle;

/// Number of decoded RC channels. Fixed topology.
pub const CHANNEL_COUNT: usize = 3;

/// Delay between control-loop cycles. A rate limiter for output and
/// log traffic, not a correctness requirement.
pub const POLL_INTERVAL_MS: u64 = 50;

/// The consumer side of the system: polls each channel's sample cell,
/// maps ready widths to actuation values and drives the outputs.
///
/// Channel roles are fixed: 0 is the on/off switch, 1 the dimmer,
/// 2 the color-cycle trigger. The color state lives here: it is
/// touched only by this single-threaded consumer, so it needs no
/// synchronization.
pub struct LightController<'a, O> {
    channels: &'a [SampleCell; CHANNEL_COUNT],
    colors: ColorCycle,
    outputs: O,
}

impl<'a, O: LightOutputs> LightController<'a, O> {
    /// Create a controller over the shared channel cells.
    pub fn new(channels: &'a [SampleCell; CHANNEL_COUNT], outputs: O) -> Self {
        Self {
            channels,
            colors: ColorCycle::new(),
            outputs,
        }
    }

    /// Run one polling cycle: for each channel with a ready sample,
    /// consume it, clear the flag and dispatch the channel's mapping.
    ///
    /// Returns the widths processed this cycle so the caller can log
    /// them. An all-`None` result is the normal steady state, not an
    /// error; the caller simply polls again next cycle.
    pub fn poll_once(&mut self) -> [Option<u32>; CHANNEL_COUNT] {
        let mut processed = [None; CHANNEL_COUNT];

        if let Some(width) = self.channels[0].take() {
            self.outputs.set_switch(switch_on(width));
            processed[0] = Some(width);
        }

        if let Some(width) = self.channels[1].take() {
            self.outputs.set_brightness(brightness_from_pulse(width));
            processed[1] = Some(width);
        }

        if let Some(width) = self.channels[2].take() {
            if color_trigger(width) {
                let color = self.colors.advance();
                self.outputs.set_rgb(color);
            }
            processed[2] = Some(width);
        }

        processed
    }

    /// Current position in the color sequence.
    pub fn color_index(&self) -> usize {
        self.colors.index()
    }

    /// Get a reference to the outputs.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Get a mutable reference to the outputs.
    pub fn outputs_mut(&mut self) -> &mut O {
        &mut self.outputs
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::capture::{CaptureEvent, Edge, EdgeTimer};
    use crate::types::Rgb;

    /// Recording mock for the output seam.
    #[derive(Default)]
    struct MockLights {
        switch: Vec<bool>,
        brightness: Vec<u8>,
        rgb: Vec<Rgb>,
    }

    impl LightOutputs for MockLights {
        fn set_switch(&mut self, on: bool) {
            self.switch.push(on);
        }

        fn set_brightness(&mut self, duty: u8) {
            self.brightness.push(duty);
        }

        fn set_rgb(&mut self, color: Rgb) {
            self.rgb.push(color);
        }
    }

    fn cells() -> [SampleCell; CHANNEL_COUNT] {
        [SampleCell::new(), SampleCell::new(), SampleCell::new()]
    }

    #[test]
    fn test_idle_cycle_touches_nothing() {
        let channels = cells();
        let mut controller = LightController::new(&channels, MockLights::default());

        assert_eq!(controller.poll_once(), [None, None, None]);
        assert!(controller.outputs().switch.is_empty());
        assert!(controller.outputs().brightness.is_empty());
        assert!(controller.outputs().rgb.is_empty());
    }

    #[test]
    fn test_switch_channel_thresholds() {
        let channels = cells();
        let mut controller = LightController::new(&channels, MockLights::default());

        channels[0].publish(1800);
        assert_eq!(controller.poll_once(), [Some(1800), None, None]);
        channels[0].publish(1600);
        assert_eq!(controller.poll_once(), [Some(1600), None, None]);

        assert_eq!(controller.outputs().switch, [true, false]);
        // Consuming clears the flag.
        assert!(!channels[0].is_ready());
    }

    #[test]
    fn test_dimmer_channel_maps_linearly() {
        let channels = cells();
        let mut controller = LightController::new(&channels, MockLights::default());

        for width in [1000, 1500, 2000, 2500] {
            channels[1].publish(width);
            controller.poll_once();
        }

        assert_eq!(controller.outputs().brightness, [0, 127, 255, 255]);
    }

    #[test]
    fn test_trigger_channel_advances_colors() {
        let channels = cells();
        let mut controller = LightController::new(&channels, MockLights::default());

        // Below and at the threshold: sample consumed, no color change.
        channels[2].publish(1500);
        assert_eq!(controller.poll_once(), [None, None, Some(1500)]);
        channels[2].publish(1700);
        assert_eq!(controller.poll_once(), [None, None, Some(1700)]);
        assert!(controller.outputs().rgb.is_empty());
        assert_eq!(controller.color_index(), 0);

        // Strictly above: exactly one step per sample.
        channels[2].publish(1701);
        controller.poll_once();
        assert_eq!(controller.outputs().rgb, [Rgb::GREEN]);
        assert_eq!(controller.color_index(), 1);
    }

    #[test]
    fn test_full_trigger_cycle_wraps_to_red() {
        let channels = cells();
        let mut controller = LightController::new(&channels, MockLights::default());

        for _ in 0..6 {
            channels[2].publish(1900);
            controller.poll_once();
        }

        assert_eq!(
            controller.outputs().rgb,
            [
                Rgb::GREEN,
                Rgb::BLUE,
                Rgb::YELLOW,
                Rgb::CYAN,
                Rgb::MAGENTA,
                Rgb::RED
            ]
        );
        assert_eq!(controller.color_index(), 0);
    }

    #[test]
    fn test_end_to_end_edge_to_switch() {
        let channels = cells();
        let mut timer = EdgeTimer::new();

        // Rising at t=0 sentinel-collides with "no start", so use a
        // running clock as a live system would.
        assert_eq!(timer.on_edge(Edge::Rising, 20_000, &channels[0]), CaptureEvent::Armed);
        assert_eq!(
            timer.on_edge(Edge::Falling, 21_800, &channels[0]),
            CaptureEvent::Published(1800)
        );
        assert!(channels[0].is_ready());

        let mut controller = LightController::new(&channels, MockLights::default());
        assert_eq!(controller.poll_once(), [Some(1800), None, None]);
        assert_eq!(controller.outputs().switch, [true]);
        assert!(!channels[0].is_ready());
    }

    #[test]
    fn test_overrun_holds_earlier_sample_end_to_end() {
        let channels = cells();
        let mut timer = EdgeTimer::new();
        let mut controller = LightController::new(&channels, MockLights::default());

        timer.on_edge(Edge::Rising, 20_000, &channels[1]);
        timer.on_edge(Edge::Falling, 21_000, &channels[1]);
        // Second frame lands before the loop runs; it is dropped.
        timer.on_edge(Edge::Rising, 40_000, &channels[1]);
        timer.on_edge(Edge::Falling, 42_000, &channels[1]);

        assert_eq!(controller.poll_once(), [None, Some(1000), None]);
        assert_eq!(controller.outputs().brightness, [0]);
    }
}
