//! Liskov Substitution: a subtype must keep every promise of the type it
//! stands in for.
//!
//! Flight is not something every bird can do, so it is not part of [`Bird`].
//! It lives in [`FlyingBird`], and ostriches get [`RunningBird`] instead of a
//! `fly` that fails. The compiler then refuses the bad substitution:
//!
//! ```compile_fail
//! use solid::console::Transcript;
//! use solid::liskov_substitution::{make_bird_fly, Ostrich};
//!
//! let mut out = Transcript::new();
//! make_bird_fly(&Ostrich, &mut out);
//! ```

use crate::config::DemoConfig;
use crate::console::Console;

/// What every bird can honestly do.
pub trait Bird {
    fn name(&self) -> &str;
}

pub trait FlyingBird: Bird {
    /// Actually flies. Never a no-op, never an error.
    fn fly(&self, out: &mut dyn Console);
}

pub trait RunningBird: Bird {
    fn run(&self, out: &mut dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn name(&self) -> &str {
        "Sparrow"
    }
}

impl FlyingBird for Sparrow {
    fn fly(&self, out: &mut dyn Console) {
        out.emit(self.name(), "Sparrow is flying");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Ostrich;

impl Bird for Ostrich {
    fn name(&self) -> &str {
        "Ostrich"
    }
}

impl RunningBird for Ostrich {
    fn run(&self, out: &mut dyn Console) {
        out.emit(self.name(), "Ostrich is running");
    }
}

pub fn make_bird_fly(bird: &dyn FlyingBird, out: &mut dyn Console) {
    tracing::debug!(bird = bird.name(), "fly");
    bird.fly(out);
}

pub fn make_bird_run(bird: &dyn RunningBird, out: &mut dyn Console) {
    tracing::debug!(bird = bird.name(), "run");
    bird.run(out);
}

/// Works for any bird, flying or not.
pub fn introduce(bird: &dyn Bird, out: &mut dyn Console) {
    tracing::debug!(bird = bird.name(), "introduce");
    out.emit(bird.name(), &format!("{} is a bird", bird.name()));
}

pub fn demo(_config: &DemoConfig, out: &mut dyn Console) {
    introduce(&Sparrow, out);
    make_bird_fly(&Sparrow, out);
    introduce(&Ostrich, out);
    make_bird_run(&Ostrich, out);
}
