//! Where variant operations send their one line of output.
//!
//! Variants never print directly. They are handed a `&mut dyn Console`, so the
//! binaries can write to stdout while tests keep a [`Transcript`] of who said
//! what.

use colored::Colorize;

pub trait Console {
    /// Emit one line of text produced by `origin`.
    fn emit(&mut self, origin: &str, text: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Clone, Copy)]
pub struct Stdout {
    color: bool,
}

impl Stdout {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// The text of one output line. The origin tag is always present and is
    /// only dimmed when color is on.
    pub fn render(&self, origin: &str, text: &str) -> String {
        let tag = format!("[{origin}]");
        if self.color {
            format!("{} {}", tag.dimmed(), text)
        } else {
            format!("{tag} {text}")
        }
    }

    /// Section header in the course's "=== Title ===" style.
    pub fn heading(&mut self, title: &str) {
        let header = format!("=== {title} ===");
        if self.color {
            println!("\n{}", header.bold());
        } else {
            println!("\n{header}");
        }
    }
}

impl Console for Stdout {
    fn emit(&mut self, origin: &str, text: &str) {
        tracing::trace!(origin, text, "emit");
        println!("{}", self.render(origin, text));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub origin: String,
    pub text: String,
}

/// In-memory console that remembers every line in emission order.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn origins(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.origin.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for Transcript {
    fn emit(&mut self, origin: &str, text: &str) {
        self.lines.push(Line {
            origin: origin.to_string(),
            text: text.to_string(),
        });
    }
}
