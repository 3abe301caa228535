//! # SOLID Principles
//!
//! Small, runnable demonstrations of the five SOLID design principles, each
//! expressed with traits and dynamic dispatch.
//!
//! ## Principles Covered
//!
//! 1. **Single Responsibility** - one reason to change per type
//! 2. **Open/Closed** - add variants, never edit consumers
//! 3. **Liskov Substitution** - implementations keep the trait's promise
//! 4. **Interface Segregation** - small capability traits instead of one fat one
//! 5. **Dependency Inversion** - business logic owns the abstraction
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin single_responsibility
//! cargo run --bin open_closed
//! cargo run --bin liskov_substitution
//! cargo run --bin interface_segregation
//! cargo run --bin dependency_inversion
//!
//! # All five, in order
//! cargo run --bin solid_tour
//!
//! # Custom values, debug logs, no color
//! SOLID_CONFIG=demo.toml RUST_LOG=debug NO_COLOR=1 cargo run --bin solid_tour
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums
//! - `serde` + `toml` - optional demo configuration
//! - `colored` - terminal headings
//! - `tracing` - debug events at every dispatch

pub mod config;
pub mod console;
pub mod error;
pub mod telemetry;

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;

pub use config::DemoConfig;
pub use console::{Console, Line, Stdout, Transcript};
pub use error::{CapabilityError, ConfigError, TelemetryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open/Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        }
    }

    pub fn run(self, config: &DemoConfig, out: &mut dyn Console) {
        tracing::info!(principle = self.title(), "running demo");
        match self {
            Principle::SingleResponsibility => single_responsibility::demo(config, out),
            Principle::OpenClosed => open_closed::demo(config, out),
            Principle::LiskovSubstitution => liskov_substitution::demo(config, out),
            Principle::InterfaceSegregation => interface_segregation::demo(config, out),
            Principle::DependencyInversion => dependency_inversion::demo(config, out),
        }
    }
}

/// Entry point shared by the binaries: logging, config, then each demo under
/// its own heading.
pub fn run_demos(principles: &[Principle]) -> anyhow::Result<()> {
    telemetry::try_init();
    let config = DemoConfig::load()?;
    let mut out = Stdout::new(config.color);

    for principle in principles {
        out.heading(principle.title());
        principle.run(&config, &mut out);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_principle_produces_output() {
        let config = DemoConfig::default();
        for principle in Principle::ALL {
            let mut out = Transcript::new();
            principle.run(&config, &mut out);
            assert!(!out.is_empty(), "{} printed nothing", principle.title());
        }
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<_> = Principle::ALL.iter().map(|p| p.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 5);
    }
}
