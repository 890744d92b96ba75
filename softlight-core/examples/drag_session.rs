//! Example: drive the controller through a simulated drag session.
//!
//! Run with: `cargo run --example drag_session`

use softlight_core::{LightController, MockDisplay};
use std::time::Instant;

fn main() {
    // Initialize logging (optional)
    env_logger::init();

    let mut controller = LightController::new(MockDisplay::new());
    controller.activate(Instant::now());
    println!("start    -> {}", controller.status_line());

    // Drag up and to the left across a 800x600 view: brighter and warmer.
    controller.begin_gesture();
    for step in 1..=5 {
        let translation = f64::from(step) * -40.0;
        controller.update_gesture(translation, translation, 800.0, 600.0);
        println!("step {}   -> {}", step, controller.status_line());
    }
    controller.end_gesture();

    // A second gesture picks up where the first one ended.
    controller.begin_gesture();
    controller.update_gesture(400.0, 0.0, 800.0, 600.0);
    controller.end_gesture();
    println!("snap back-> {}", controller.status_line());

    controller.deactivate();
    println!(
        "host saw {} brightness writes",
        controller.host().brightness_writes.len()
    );
}
