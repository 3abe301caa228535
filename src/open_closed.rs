//! Open/Closed: open for extension, closed for modification.
//!
//! A new notification channel or payment method is a new type implementing
//! an existing trait. Neither the trait nor the functions that consume it
//! change. [`SlackService`] was added exactly that way.

use crate::config::DemoConfig;
use crate::console::Console;

pub trait Notification {
    fn name(&self) -> &str;

    /// Deliver the notification. Exactly one line of output.
    fn send(&self, out: &mut dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailService;

impl Notification for EmailService {
    fn name(&self) -> &str {
        "EmailService"
    }

    fn send(&self, out: &mut dyn Console) {
        out.emit(self.name(), "Sending email...");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SmsService;

impl Notification for SmsService {
    fn name(&self) -> &str {
        "SmsService"
    }

    fn send(&self, out: &mut dyn Console) {
        out.emit(self.name(), "Sending SMS...");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SlackService;

impl Notification for SlackService {
    fn name(&self) -> &str {
        "SlackService"
    }

    fn send(&self, out: &mut dyn Console) {
        out.emit(self.name(), "Sending Slack notification...");
    }
}

pub fn send_notification(notification: &dyn Notification, out: &mut dyn Console) {
    tracing::debug!(channel = notification.name(), "sending notification");
    notification.send(out);
}

/// Sends through every channel, in order.
pub fn broadcast(channels: &[&dyn Notification], out: &mut dyn Console) {
    for channel in channels {
        send_notification(*channel, out);
    }
}

/// Replaces a `match` on a method string: each method knows how to charge.
pub trait PaymentMethod {
    fn name(&self) -> &str;

    fn process(&self, amount: f64, out: &mut dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCard;

impl PaymentMethod for CreditCard {
    fn name(&self) -> &str {
        "CreditCard"
    }

    fn process(&self, amount: f64, out: &mut dyn Console) {
        out.emit(
            self.name(),
            &format!("Processing credit card payment of {amount:.2}"),
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPal;

impl PaymentMethod for PayPal {
    fn name(&self) -> &str {
        "PayPal"
    }

    fn process(&self, amount: f64, out: &mut dyn Console) {
        out.emit(self.name(), &format!("Processing PayPal payment of {amount:.2}"));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Upi;

impl PaymentMethod for Upi {
    fn name(&self) -> &str {
        "Upi"
    }

    fn process(&self, amount: f64, out: &mut dyn Console) {
        out.emit(self.name(), &format!("Processing UPI payment of {amount:.2}"));
    }
}

pub fn process_payment(method: &dyn PaymentMethod, amount: f64, out: &mut dyn Console) {
    tracing::debug!(method = method.name(), amount, "processing payment");
    method.process(amount, out);
}

pub fn demo(config: &DemoConfig, out: &mut dyn Console) {
    send_notification(&EmailService, out);
    send_notification(&SmsService, out);
    send_notification(&SlackService, out);

    let methods: [&dyn PaymentMethod; 3] = [&CreditCard, &PayPal, &Upi];
    for method in methods {
        process_payment(method, config.payment.amount, out);
    }
}
