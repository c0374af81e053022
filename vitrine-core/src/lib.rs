pub mod amount;
pub mod payment;
pub mod client;

pub use amount::format_amount;
pub use payment::{PaymentProcessor, PaymentProvider, PaymentReceipt};
pub use client::{ClientData, ClientDataAdapter};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
