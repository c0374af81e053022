use vitrine_catalog::PricingError;
use vitrine_core::CoreError;
use vitrine_store::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error("Payment failed: {0}")]
    Payment(#[from] CoreError),

    #[error("Document storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Order pricing failed: {0}")]
    Pricing(#[from] PricingError),
}
