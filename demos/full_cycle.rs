//! Full Cycle Walkthrough
//!
//! This example narrates one complete trip around the lemonade cycle.
//!
//! Key concepts:
//! - Circular state machine (no final step, the cycle repeats)
//! - Randomized squeeze counter gating the exit from Squeeze
//! - Seeded RNG for a reproducible run
//!
//! Run with: cargo run --example full_cycle

use lemonade::core::Step;
use lemonade::presentation::content;
use lemonade::session::StepController;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("=== Lemonade Full Cycle ===\n");

    let mut controller = StepController::with_rng(StdRng::seed_from_u64(2024));

    println!("Initial step: {}", controller.current_step().name());
    println!("  \"{}\"\n", content(controller.current_step()).label);

    let mut taps = 0;
    loop {
        let step = controller.on_activate();
        taps += 1;
        match step {
            Step::Squeeze => println!(
                "tap {taps}: {} ({} squeezes to go)",
                step.name(),
                controller.squeezes_remaining()
            ),
            _ => println!("tap {taps}: {}", step.name()),
        }
        if step == Step::SelectLemon {
            break;
        }
    }

    println!("\nBack at {} after {taps} taps.", controller.current_step().name());
    println!("Path: {:?}", controller.history().get_path());

    println!("\n=== Walkthrough Complete ===");
}
