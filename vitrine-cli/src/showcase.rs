//! The storefront walkthrough printed by the `vitrine` binary.
//!
//! Each section returns the lines it would print so the whole trace can be
//! asserted on without capturing stdout.

use vitrine_core::client::{
    ClientDataAdapter, LegacyClientAdapter, LegacyClientRecord, PartnerClientAdapter,
    PartnerClientRecord,
};
use vitrine_core::payment::{
    PayPalAdapter, PayPalPayment, PaymentProcessor, SquareAdapter, SquarePayment, StripeAdapter,
    StripePayment,
};
use vitrine_catalog::PricedItem;
use vitrine_store::app_config::{DocumentsConfig, OrderConfig, PaymentsConfig};
use vitrine_store::documents::{CloudStorage, DatabaseStorage, LocalStorage};
use vitrine_store::{Config, Document, DocumentKind};

use crate::error::ShowcaseError;

pub const SEPARATOR: &str = "------------------------------------------------------";

pub fn adapter_payments(payments: &PaymentsConfig) -> Result<Vec<String>, ShowcaseError> {
    let charges: [(Box<dyn PaymentProcessor>, f64); 3] = [
        (Box::new(PayPalAdapter::new(PayPalPayment)), payments.paypal_amount),
        (Box::new(StripeAdapter::new(StripePayment)), payments.stripe_amount),
        (Box::new(SquareAdapter::new(SquarePayment)), payments.square_amount),
    ];

    let mut lines = Vec::with_capacity(charges.len());
    for (processor, amount) in &charges {
        let receipt = processor.process_payment(*amount)?;
        tracing::info!(provider = %receipt.provider, id = %receipt.id, "charged");
        lines.push(receipt.message);
    }
    Ok(lines)
}

pub fn adapter_clients() -> Vec<String> {
    let adapters: [Box<dyn ClientDataAdapter>; 2] = [
        Box::new(LegacyClientAdapter::new(LegacyClientRecord {
            name: "John Doe".to_string(),
            residence: "123 Main St".to_string(),
            contact_number: "555-1234".to_string(),
            mail: "john@example.com".to_string(),
        })),
        Box::new(PartnerClientAdapter::new(PartnerClientRecord {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            postal_address: "456 Oak Ave".to_string(),
            phone: "555-5678".to_string(),
            email_address: "jane.smith@example.com".to_string(),
        })),
    ];

    adapters
        .iter()
        .flat_map(|adapter| {
            let client = adapter.convert();
            client.to_string().lines().map(str::to_string).collect::<Vec<_>>()
        })
        .collect()
}

pub fn bridge_documents(config: &DocumentsConfig) -> Result<Vec<String>, ShowcaseError> {
    let content = config.content.as_str();
    let documents = [
        Document::with_content(DocumentKind::Text, content, Box::new(LocalStorage)),
        Document::with_content(DocumentKind::Pdf, content, Box::new(CloudStorage)),
        Document::with_content(DocumentKind::Xml, content, Box::new(DatabaseStorage)),
    ];

    documents
        .iter()
        .map(|doc| -> Result<String, ShowcaseError> {
            let receipt = doc.save()?;
            tracing::info!(document = ?doc.kind(), backend = %receipt.backend, "saved");
            Ok(receipt.message)
        })
        .collect()
}

pub fn decorator_orders(order: &OrderConfig) -> Result<Vec<String>, ShowcaseError> {
    let (item, trace) = order.builder()?.build_with_trace()?;
    tracing::info!(
        quote = %serde_json::json!({
            "description": item.description(),
            "total_cost": item.total_cost(),
        }),
        "final order"
    );
    Ok(trace.iter().map(ToString::to_string).collect())
}

/// Every section in order, with headers and separators
pub fn run(config: &Config) -> Result<Vec<String>, ShowcaseError> {
    let mut lines = vec!["Adapter 1".to_string()];
    lines.extend(adapter_payments(&config.payments)?);

    lines.push(SEPARATOR.to_string());
    lines.push("Adapter 2".to_string());
    lines.extend(adapter_clients());

    lines.push(SEPARATOR.to_string());
    lines.push("Bridge".to_string());
    lines.extend(bridge_documents(&config.documents)?);

    lines.push(SEPARATOR.to_string());
    lines.push("Decorator".to_string());
    lines.extend(decorator_orders(&config.order)?);

    Ok(lines)
}
