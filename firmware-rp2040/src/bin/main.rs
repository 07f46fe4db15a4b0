#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use embassy_time::Timer;
use rc_lights_rp2040::{
    duty_config, watch_edges, LightController, PwmLightOutputs, SampleCell, CHANNEL_COUNT,
    POLL_INTERVAL_MS,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

/// One handoff cell per RC channel, shared between that channel's
/// edge-capture task (producer) and the control task (consumer).
static CHANNELS: [SampleCell; CHANNEL_COUNT] =
    [SampleCell::new(), SampleCell::new(), SampleCell::new()];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("RC 3-channel LED controller starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // RC receiver inputs, pulled up so an unconnected channel idles at
    // a stable level instead of floating.
    let ch1 = Input::new(p.PIN_10, Pull::Up);
    let ch2 = Input::new(p.PIN_11, Pull::Up);
    let ch3 = Input::new(p.PIN_12, Pull::Up);

    // Actuators: on-board LED for the switch channel, PWM slices for
    // the brightness LED and the RGB element.
    let switch_led = Output::new(p.PIN_25, Level::Low);
    let dimmer = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, duty_config());
    let rgb_rg = Pwm::new_output_ab(p.PWM_SLICE2, p.PIN_4, p.PIN_5, duty_config());
    let rgb_b = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_6, duty_config());
    let outputs = PwmLightOutputs::new(switch_led, dimmer, rgb_rg, rgb_b);

    spawner.spawn(edge_task(0, ch1, &CHANNELS[0])).unwrap();
    spawner.spawn(edge_task(1, ch2, &CHANNELS[1])).unwrap();
    spawner.spawn(edge_task(2, ch3, &CHANNELS[2])).unwrap();
    spawner.spawn(control_task(outputs)).unwrap();

    info!("RC 3-channel LED controller initialized, waiting for pulses...");
}

/// Edge-capture task - one instance per RC channel.
#[embassy_executor::task(pool_size = 3)]
async fn edge_task(channel: usize, pin: Input<'static>, cell: &'static SampleCell) {
    watch_edges(channel, pin, cell).await
}

/// Control task - drains ready samples at a bounded cadence, drives
/// the outputs and logs each processed width.
#[embassy_executor::task]
async fn control_task(outputs: PwmLightOutputs<'static>) {
    let mut controller = LightController::new(&CHANNELS, outputs);

    loop {
        let processed = controller.poll_once();
        for (i, width) in processed.iter().enumerate() {
            if let Some(width) = width {
                info!("[CH{}] PWM: {}", i + 1, width);
            }
        }
        // Rate limiter for output and log traffic only; correctness
        // does not depend on the cadence.
        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}
