//! Single Responsibility: each type has exactly one reason to change.
//!
//! Saving, charging, emailing and invoicing live in four collaborators.
//! [`OrderService`] only decides the order in which they run.

use crate::config::DemoConfig;
use crate::console::Console;

/// Persists orders. Changes only when storage changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderRepository;

impl OrderRepository {
    pub const NAME: &'static str = "OrderRepository";

    pub fn save(&self, order_id: u32, out: &mut dyn Console) {
        out.emit(Self::NAME, &format!("Saving order {order_id} to database"));
    }
}

/// Charges the customer. Changes only when the payment gateway changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentService;

impl PaymentService {
    pub const NAME: &'static str = "PaymentService";

    pub fn process(&self, amount: f64, out: &mut dyn Console) {
        out.emit(Self::NAME, &format!("Processing payment of {amount:.2}"));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailService;

impl EmailService {
    pub const NAME: &'static str = "EmailService";

    pub fn send(&self, out: &mut dyn Console) {
        out.emit(Self::NAME, "Sending confirmation email");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceService;

impl InvoiceService {
    pub const NAME: &'static str = "InvoiceService";

    pub fn generate(&self, order_id: u32, out: &mut dyn Console) {
        out.emit(Self::NAME, &format!("Generating invoice for order {order_id}"));
    }
}

/// Coordinates the order workflow and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderService {
    repo: OrderRepository,
    payment: PaymentService,
    email: EmailService,
    invoice: InvoiceService,
}

impl OrderService {
    pub fn new(
        repo: OrderRepository,
        payment: PaymentService,
        email: EmailService,
        invoice: InvoiceService,
    ) -> Self {
        Self {
            repo,
            payment,
            email,
            invoice,
        }
    }

    /// Save, pay, email, invoice. Always in that order.
    pub fn place_order(&self, order_id: u32, amount: u32, out: &mut dyn Console) {
        tracing::debug!(order_id, amount, "placing order");
        self.repo.save(order_id, out);
        self.payment.process(f64::from(amount), out);
        self.email.send(out);
        self.invoice.generate(order_id, out);
    }
}

pub fn demo(config: &DemoConfig, out: &mut dyn Console) {
    let service = OrderService::default();
    service.place_order(config.order.id, config.order.amount, out);
}
