//! Presentation seam for the lemonade cycle.
//!
//! The controller only supplies a [`Step`] discriminant; everything a
//! host displays for it lives here as a static lookup table, and the
//! rendering itself happens behind the [`Presenter`] trait. No toolkit
//! binding, no inheritance hierarchy - one trait with the capability set
//! {render text, render image, handle activation}.

use crate::core::Step;
use crate::session::StepController;
use rand::Rng;

/// The display triple for one step: label text, image asset name, and an
/// accessible description of the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepContent {
    pub label: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

const SELECT_LEMON: StepContent = StepContent {
    label: "Tap the lemon tree to select a lemon",
    image: "lemon_tree",
    description: "Lemon tree",
};

const SQUEEZE: StepContent = StepContent {
    label: "Keep tapping the lemon to squeeze it",
    image: "lemon_squeeze",
    description: "Lemon",
};

const DRINK: StepContent = StepContent {
    label: "Tap the lemonade to drink it",
    image: "lemon_drink",
    description: "Glass of lemonade",
};

const EMPTY_GLASS: StepContent = StepContent {
    label: "Tap the empty glass to start again",
    image: "lemon_restart",
    description: "Empty glass",
};

/// Look up the display triple for a step.
///
/// One static entry per step; the table never changes at runtime.
pub fn content(step: Step) -> &'static StepContent {
    match step {
        Step::SelectLemon => &SELECT_LEMON,
        Step::Squeeze => &SQUEEZE,
        Step::Drink => &DRINK,
        Step::EmptyGlass => &EMPTY_GLASS,
    }
}

/// Capability seam a host implements to display the cycle.
///
/// Implementations decide what "text" and "image" mean for their medium
/// (a console demo prints them; a GUI would draw them). `poll_activation`
/// blocks or polls for the next user activation and returns `false` when
/// the session should end.
pub trait Presenter {
    /// Render the step's label text.
    fn render_text(&mut self, text: &str);

    /// Render the step's image, identified by asset name, with its
    /// accessible description.
    fn render_image(&mut self, image: &str, description: &str);

    /// Wait for the next activation. `false` ends the session loop.
    fn poll_activation(&mut self) -> bool;
}

/// Push one step's display triple through a presenter.
pub fn present<P: Presenter + ?Sized>(step: Step, presenter: &mut P) {
    let triple = content(step);
    presenter.render_image(triple.image, triple.description);
    presenter.render_text(triple.label);
}

/// Drive a session: render, wait for an activation, apply it, repeat.
///
/// Runs entirely on the calling thread; each activation is fully applied
/// before the next poll, matching the controller's sequential contract.
pub fn run_with<R: Rng, P: Presenter>(controller: &mut StepController<R>, presenter: &mut P) {
    present(controller.current_step(), presenter);
    while presenter.poll_activation() {
        let step = controller.on_activate();
        present(step, presenter);
    }
}
