use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use micro_dsp::ToneSource;
use micro_viz::{tuning::FFT_SIZE, SpectrumVisualizer};
use std::{process::ExitCode, thread, time::Duration};

pub const WIDTH: u32 = 64;
pub const HEIGHT: u32 = 32;
pub const FRAME_DELAY_MS: u64 = 16;

const SAMPLE_RATE_HZ: f32 = 44_100.0;
const SWEEP_START_HZ: f32 = 60.0;
/// Multiplicative step per frame; one sweep up to Nyquist takes ~10 s.
const SWEEP_RATIO: f32 = 1.0095;

fn main() -> ExitCode {
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(WIDTH, HEIGHT));
    let mut window = Window::new(
        "Spectrum Simulator",
        &OutputSettingsBuilder::new().scale(8).build(),
    );

    let mut visualizer = match SpectrumVisualizer::with_defaults() {
        Ok(visualizer) => visualizer,
        Err(e) => {
            eprintln!("Invalid spectrum configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "{} point FFT, {} bands, {} Hz per bin",
        FFT_SIZE,
        visualizer.num_bands(),
        SAMPLE_RATE_HZ / FFT_SIZE as f32
    );

    // A sine sweeping from bass to Nyquist stands in for the microphone.
    let mut tone = ToneSource::new(SWEEP_START_HZ, 1 << 28, SAMPLE_RATE_HZ);

    loop {
        if let Err(e) = visualizer.render_frame(&mut tone, &mut display) {
            match e {}
        }
        window.update(&display);

        let next = tone.frequency_hz() * SWEEP_RATIO;
        tone.set_frequency_hz(if next >= SAMPLE_RATE_HZ / 2.0 { SWEEP_START_HZ } else { next });

        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));

        if window.events().any(|event| matches!(event, SimulatorEvent::Quit)) {
            break;
        }
    }

    ExitCode::SUCCESS
}
