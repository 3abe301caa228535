//! Designs that break a principle, kept only as fixtures.
//!
//! Each one shows the failure mode the library's real modules avoid. None of
//! this is reachable from the library or the binaries.

use solid::console::{Console, Transcript};
use solid::CapabilityError;

// =============================================================================
// Fat interface: every machine must print, scan and fax
// =============================================================================

trait Machine {
    fn print(&self, out: &mut dyn Console) -> Result<(), CapabilityError>;
    fn scan(&self, out: &mut dyn Console) -> Result<(), CapabilityError>;
    fn fax(&self, out: &mut dyn Console) -> Result<(), CapabilityError>;
}

struct BasicPrinter;

impl Machine for BasicPrinter {
    fn print(&self, out: &mut dyn Console) -> Result<(), CapabilityError> {
        out.emit("BasicPrinter", "Printing document");
        Ok(())
    }

    fn scan(&self, _out: &mut dyn Console) -> Result<(), CapabilityError> {
        Err(CapabilityError::unsupported("BasicPrinter", "scan"))
    }

    fn fax(&self, _out: &mut dyn Console) -> Result<(), CapabilityError> {
        Err(CapabilityError::unsupported("BasicPrinter", "fax"))
    }
}

fn office_run(machine: &dyn Machine, out: &mut dyn Console) -> Result<(), CapabilityError> {
    machine.print(out)?;
    machine.scan(out)?;
    machine.fax(out)
}

#[test]
fn fat_interface_forces_unsupported_operations() {
    let mut out = Transcript::new();
    let err = office_run(&BasicPrinter, &mut out).unwrap_err();

    assert_eq!(err, CapabilityError::unsupported("BasicPrinter", "scan"));
    assert_eq!(out.texts(), vec!["Printing document"]);
}

#[test]
fn fat_interface_never_silently_succeeds() {
    let mut out = Transcript::new();
    assert!(BasicPrinter.fax(&mut out).is_err());
    assert!(out.is_empty());
}

// =============================================================================
// Flightless bird behind a flying contract
// =============================================================================

trait Bird {
    fn fly(&self, out: &mut dyn Console) -> Result<(), CapabilityError>;
}

struct Penguin;

impl Bird for Penguin {
    fn fly(&self, _out: &mut dyn Console) -> Result<(), CapabilityError> {
        Err(CapabilityError::unsupported("Penguin", "fly"))
    }
}

#[test]
fn substituting_a_flightless_bird_breaks_callers() {
    let mut out = Transcript::new();
    let err = Penguin.fly(&mut out).unwrap_err();
    assert_eq!(err.to_string(), "Penguin does not support fly");
}

// =============================================================================
// Type switch on a method name
// =============================================================================

fn process_payment(
    method: &str,
    amount: f64,
    out: &mut dyn Console,
) -> Result<(), CapabilityError> {
    // Every new method means editing this function.
    let text = match method {
        "credit" => format!("Processing credit card payment of {amount:.2}"),
        "paypal" => format!("Processing PayPal payment of {amount:.2}"),
        "upi" => format!("Processing UPI payment of {amount:.2}"),
        _ => return Err(CapabilityError::unsupported("PaymentProcessor", "payment method")),
    };
    out.emit("PaymentProcessor", &text);
    Ok(())
}

#[test]
fn type_switch_rejects_methods_it_was_not_edited_for() {
    let mut out = Transcript::new();
    process_payment("credit", 1000.0, &mut out).unwrap();
    process_payment("paypal", 2000.0, &mut out).unwrap();

    assert!(process_payment("crypto", 1.0, &mut out).is_err());
    assert_eq!(out.len(), 2);
    assert!(out.origins().iter().all(|o| *o == "PaymentProcessor"));
}
