//! GPIO and PWM actuators behind the [`LightOutputs`] seam.

use embassy_rp::gpio::Output;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use rc_lights::{LightOutputs, Rgb, DUTY_MAX};

/// Base configuration for every LED PWM slice: `top = 255` so the
/// compare register is the [0, 255] duty unit directly, edge aligned.
#[must_use]
pub fn duty_config() -> PwmConfig {
    let mut cfg = PwmConfig::default();
    cfg.top = DUTY_MAX as u16;
    cfg.phase_correct = false;
    cfg.enable = true;
    cfg
}

/// The physical light outputs: on/off LED on a plain GPIO, brightness
/// LED and RGB element on PWM slices.
///
/// Each slice keeps its [`PwmConfig`] stored so duty updates only
/// touch the compare registers instead of rebuilding a default config
/// (which would reset the divider). Red and green share one slice
/// (channels A and B); blue sits on its own slice.
pub struct PwmLightOutputs<'d> {
    switch_led: Output<'d>,
    dimmer: Pwm<'d>,
    dimmer_cfg: PwmConfig,
    rgb_rg: Pwm<'d>,
    rgb_rg_cfg: PwmConfig,
    rgb_b: Pwm<'d>,
    rgb_b_cfg: PwmConfig,
}

impl<'d> PwmLightOutputs<'d> {
    /// Wrap the actuators. The PWM slices must have been created with
    /// [`duty_config`]; everything starts dark.
    pub fn new(switch_led: Output<'d>, dimmer: Pwm<'d>, rgb_rg: Pwm<'d>, rgb_b: Pwm<'d>) -> Self {
        let mut outputs = Self {
            switch_led,
            dimmer,
            dimmer_cfg: duty_config(),
            rgb_rg,
            rgb_rg_cfg: duty_config(),
            rgb_b,
            rgb_b_cfg: duty_config(),
        };
        outputs.set_switch(false);
        outputs.set_brightness(0);
        outputs.set_rgb(Rgb::new(0, 0, 0));
        outputs
    }
}

impl LightOutputs for PwmLightOutputs<'_> {
    fn set_switch(&mut self, on: bool) {
        if on {
            self.switch_led.set_high();
        } else {
            self.switch_led.set_low();
        }
    }

    fn set_brightness(&mut self, duty: u8) {
        self.dimmer_cfg.compare_a = duty as u16;
        self.dimmer.set_config(&self.dimmer_cfg);
    }

    fn set_rgb(&mut self, color: Rgb) {
        self.rgb_rg_cfg.compare_a = color.r as u16;
        self.rgb_rg_cfg.compare_b = color.g as u16;
        self.rgb_rg.set_config(&self.rgb_rg_cfg);

        self.rgb_b_cfg.compare_a = color.b as u16;
        self.rgb_b.set_config(&self.rgb_b_cfg);
    }
}
