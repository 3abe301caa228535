//! Interface Segregation: no type should be forced to implement methods it
//! does not use.
//!
//! Printing, scanning and faxing are three separate capabilities. A plain
//! printer implements one of them and simply has no `scan` or `fax`:
//!
//! ```compile_fail
//! use solid::console::Transcript;
//! use solid::interface_segregation::{Scanner, SimplePrinter};
//!
//! let mut out = Transcript::new();
//! SimplePrinter.scan("document", &mut out);
//! ```
//!
//! ```compile_fail
//! use solid::console::Transcript;
//! use solid::interface_segregation::{send_fax, SimplePrinter};
//!
//! let mut out = Transcript::new();
//! send_fax(&SimplePrinter, "accounts", &mut out);
//! ```

use crate::config::DemoConfig;
use crate::console::Console;

pub trait Printer {
    fn name(&self) -> &str;

    fn print(&self, document: &str, out: &mut dyn Console);
}

pub trait Scanner {
    fn name(&self) -> &str;

    fn scan(&self, document: &str, out: &mut dyn Console);
}

pub trait Faxer {
    fn name(&self) -> &str;

    fn fax(&self, recipient: &str, out: &mut dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimplePrinter;

impl SimplePrinter {
    pub const NAME: &'static str = "SimplePrinter";
}

impl Printer for SimplePrinter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn print(&self, document: &str, out: &mut dyn Console) {
        out.emit(Self::NAME, &format!("Printing {document}"));
    }
}

/// Multifunction device: every capability, each one real.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdvancedMachine;

impl AdvancedMachine {
    pub const NAME: &'static str = "AdvancedMachine";
}

impl Printer for AdvancedMachine {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn print(&self, document: &str, out: &mut dyn Console) {
        out.emit(Self::NAME, &format!("Printing {document}"));
    }
}

impl Scanner for AdvancedMachine {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn scan(&self, document: &str, out: &mut dyn Console) {
        out.emit(Self::NAME, &format!("Scanning {document}"));
    }
}

impl Faxer for AdvancedMachine {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn fax(&self, recipient: &str, out: &mut dyn Console) {
        out.emit(Self::NAME, &format!("Sending fax to {recipient}"));
    }
}

pub fn print_document(printer: &dyn Printer, document: &str, out: &mut dyn Console) {
    tracing::debug!(printer = printer.name(), document, "print");
    printer.print(document, out);
}

pub fn scan_document(scanner: &dyn Scanner, document: &str, out: &mut dyn Console) {
    tracing::debug!(scanner = scanner.name(), document, "scan");
    scanner.scan(document, out);
}

pub fn send_fax(faxer: &dyn Faxer, recipient: &str, out: &mut dyn Console) {
    tracing::debug!(faxer = faxer.name(), recipient, "fax");
    faxer.fax(recipient, out);
}

pub fn demo(_config: &DemoConfig, out: &mut dyn Console) {
    print_document(&SimplePrinter, "document", out);

    let machine = AdvancedMachine;
    print_document(&machine, "document", out);
    scan_document(&machine, "document", out);
    send_fax(&machine, "head office", out);
}
