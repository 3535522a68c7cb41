//! Frame loop demo driving the speedometer with a simulated actor.
//!
//! The actor accelerates past its max speed, coasts, and brakes, while a
//! console sink prints what a HUD would draw. A zip speed is captured
//! halfway through.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example frame_loop
//! RUST_LOG=debug cargo run --example frame_loop   # show color transitions
//! ```

use std::convert::Infallible;

use env_logger::Env;
use log::info;
use speedo_hud::hal::MockActor;
use speedo_hud::{
    DeferredOutline, DisplayMode, LabelSlot, Outline, Rgba, SpeedDisplayController,
    SpeedometerConfig, SpeedometerSink,
};

/// Frames per simulated second.
const TICK_HZ: u32 = 10;

/// Prints the readout as text: a 20-cell bar and the labels.
///
/// One line is printed per live label update, which closes each frame.
#[derive(Default)]
struct ConsoleSink {
    fill: f32,
    color: &'static str,
    live: String,
    zip: String,
}

impl ConsoleSink {
    fn bar(fill: f32) -> String {
        let cells = (fill.clamp(0.0, 1.0) * 20.0).round() as usize;
        format!("[{}{}]", "#".repeat(cells), ".".repeat(20 - cells))
    }
}

impl SpeedometerSink for ConsoleSink {
    type Error = Infallible;

    fn set_fill(&mut self, ratio: f32) -> Result<(), Infallible> {
        self.fill = ratio;
        Ok(())
    }

    fn set_bar_color(&mut self, color: Rgba) -> Result<(), Infallible> {
        self.color = if color == Rgba::DEFAULT_OVER_MAX {
            "OVER"
        } else {
            "normal"
        };
        Ok(())
    }

    fn set_label(&mut self, slot: LabelSlot, text: &str) -> Result<(), Infallible> {
        match slot {
            LabelSlot::Live => {
                self.live = text.to_string();
                println!(
                    "{} {:>5.2} {:<8} {:<12} {}",
                    Self::bar(self.fill),
                    self.fill,
                    self.color,
                    self.live,
                    self.zip
                );
            }
            LabelSlot::Zip => self.zip = format!("zip {text}"),
        }
        Ok(())
    }

    fn set_label_outline(&mut self, slot: LabelSlot, outline: Outline) -> Result<(), Infallible> {
        info!("outline {:.3} applied to {} label", outline.width, slot.as_str());
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = SpeedometerConfig::default()
        .with_display_mode(DisplayMode::KilometersPerHour)
        .with_display_zip_speed(true);
    info!("starting speedometer demo, mode {}", config.display_mode.as_str());

    let mut outline = DeferredOutline::for_config(&config);
    let mut controller = SpeedDisplayController::new(config, ConsoleSink::default());
    controller.init()?;

    let mut actor = MockActor::new(12.0);
    let dt = 1.0 / TICK_HZ as f32;
    let mut speed = 0.0_f32;

    for tick in 0..(8 * TICK_HZ) {
        let t = tick as f32 * dt;
        let accel = match t {
            t if t < 3.0 => 5.0,
            t if t < 5.0 => 0.0,
            _ => -6.0,
        };
        speed = (speed + accel * dt).max(0.0);
        actor.set_speeds(speed * 0.9, speed);

        controller.update(&actor)?;

        if tick == 4 * TICK_HZ {
            controller.capture_zip(speed)?;
        }

        if let Some(task) = outline.as_mut() {
            task.poll(controller.sink_mut())?;
        }
    }

    let state = controller.state();
    info!(
        "done: {:.1} m/s, fill {:.2}, {:?}, zip {:.1} m/s",
        state.speed, state.fill, state.color_state, state.zip_speed
    );
    Ok(())
}
