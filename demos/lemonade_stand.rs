//! Interactive Lemonade Stand
//!
//! This example drives the cycle from the console through the Presenter
//! seam: press enter to tap the current control, `q` to close the stand.
//!
//! Run with: cargo run --example lemonade_stand

use lemonade::presentation::{run_with, Presenter};
use lemonade::session::StepController;
use std::io::{self, Write};

struct ConsoleStand;

impl Presenter for ConsoleStand {
    fn render_text(&mut self, text: &str) {
        println!("{text}");
    }

    fn render_image(&mut self, image: &str, description: &str) {
        println!("\n[{image}] {description}");
    }

    fn poll_activation(&mut self) -> bool {
        print!("(enter = tap, q = quit) > ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => false,
            Ok(_) => line.trim() != "q",
            Err(_) => false,
        }
    }
}

fn main() {
    println!("=== Lemonade Stand ===");

    let mut controller = StepController::new();
    let mut stand = ConsoleStand;
    run_with(&mut controller, &mut stand);

    println!(
        "\nStand closed after {} taps. Bye!",
        controller.history().records().len()
    );
}
