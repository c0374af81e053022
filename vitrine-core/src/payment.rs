use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use std::fmt;

use crate::{format_amount, CoreError, CoreResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentProvider {
    PayPal,
    Stripe,
    Square,
}

impl fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentProvider::PayPal => "PayPal",
            PaymentProvider::Stripe => "Stripe",
            PaymentProvider::Square => "Square",
        };
        f.write_str(name)
    }
}

/// What a gateway hands back from its own API
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayReceipt {
    pub amount: f64,
    pub confirmation: String,
}

impl GatewayReceipt {
    fn new(provider: PaymentProvider, amount: f64) -> Self {
        Self {
            amount,
            confirmation: format!(
                "Processing payment through {}: ${}",
                provider,
                format_amount(amount)
            ),
        }
    }
}

/// PayPal's SDK entry point
#[derive(Debug, Default)]
pub struct PayPalPayment;

impl PayPalPayment {
    pub fn process_payment(&self, amount: f64) -> GatewayReceipt {
        GatewayReceipt::new(PaymentProvider::PayPal, amount)
    }
}

/// Stripe's SDK entry point
#[derive(Debug, Default)]
pub struct StripePayment;

impl StripePayment {
    pub fn make_payment(&self, amount: f64) -> GatewayReceipt {
        GatewayReceipt::new(PaymentProvider::Stripe, amount)
    }
}

/// Square's SDK entry point
#[derive(Debug, Default)]
pub struct SquarePayment;

impl SquarePayment {
    pub fn charge(&self, amount: f64) -> GatewayReceipt {
        GatewayReceipt::new(PaymentProvider::Square, amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: Uuid,
    pub provider: PaymentProvider,
    pub amount: f64,
    pub message: String,
    pub processed_at: DateTime<Utc>,
}

/// Uniform checkout interface over every supported gateway
pub trait PaymentProcessor: Send + Sync {
    fn provider(&self) -> PaymentProvider;

    /// Charge `amount` through the underlying gateway
    fn process_payment(&self, amount: f64) -> CoreResult<PaymentReceipt>;
}

fn validate_amount(amount: f64) -> CoreResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "payment amount must be a positive number, got {}",
            amount
        )));
    }
    Ok(())
}

fn settle(provider: PaymentProvider, receipt: GatewayReceipt) -> PaymentReceipt {
    let receipt = PaymentReceipt {
        id: Uuid::new_v4(),
        provider,
        amount: receipt.amount,
        message: receipt.confirmation,
        processed_at: Utc::now(),
    };
    tracing::debug!(provider = %provider, amount = receipt.amount, id = %receipt.id, "payment processed");
    receipt
}

pub struct PayPalAdapter {
    gateway: PayPalPayment,
}

impl PayPalAdapter {
    pub fn new(gateway: PayPalPayment) -> Self {
        Self { gateway }
    }
}

impl PaymentProcessor for PayPalAdapter {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::PayPal
    }

    fn process_payment(&self, amount: f64) -> CoreResult<PaymentReceipt> {
        validate_amount(amount)?;
        Ok(settle(self.provider(), self.gateway.process_payment(amount)))
    }
}

pub struct StripeAdapter {
    gateway: StripePayment,
}

impl StripeAdapter {
    pub fn new(gateway: StripePayment) -> Self {
        Self { gateway }
    }
}

impl PaymentProcessor for StripeAdapter {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::Stripe
    }

    fn process_payment(&self, amount: f64) -> CoreResult<PaymentReceipt> {
        validate_amount(amount)?;
        Ok(settle(self.provider(), self.gateway.make_payment(amount)))
    }
}

pub struct SquareAdapter {
    gateway: SquarePayment,
}

impl SquareAdapter {
    pub fn new(gateway: SquarePayment) -> Self {
        Self { gateway }
    }
}

impl PaymentProcessor for SquareAdapter {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::Square
    }

    fn process_payment(&self, amount: f64) -> CoreResult<PaymentReceipt> {
        validate_amount(amount)?;
        Ok(settle(self.provider(), self.gateway.charge(amount)))
    }
}
