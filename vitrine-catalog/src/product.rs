use serde::Serialize;
use std::fmt;

pub const BASIC_ORDER_COST: f64 = 50.0;
pub const BASIC_ORDER_DESCRIPTION: &str = "Basic Order";

/// Anything that can sit on an order and be priced.
///
/// Items are immutable once constructed. A bare [`Modifier`](crate::Modifier)
/// chain may carry a negative total; chains from
/// [`OrderBuilder`](crate::OrderBuilder) never do. Sharing one chain between threads
/// is sound only because every query is read-only; implementors must keep it
/// that way (no interior mutability).
pub trait PricedItem: fmt::Debug + Send + Sync {
    /// Cost of this item including every layer it wraps
    fn total_cost(&self) -> f64;

    /// Description of this item including every layer it wraps
    fn description(&self) -> String;
}

impl<T: PricedItem + ?Sized> PricedItem for Box<T> {
    fn total_cost(&self) -> f64 {
        (**self).total_cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Leaf of a pricing chain: fixed cost, fixed description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseItem {
    cost: f64,
    description: String,
}

impl BaseItem {
    pub fn new(cost: f64, description: impl Into<String>) -> Result<Self, PricingError> {
        let description = description.into();

        if !cost.is_finite() {
            tracing::warn!(cost, "rejected base item with non-finite cost");
            return Err(PricingError::NonFiniteAmount(cost));
        }
        if cost < 0.0 {
            tracing::warn!(cost, "rejected base item with negative cost");
            return Err(PricingError::NegativeCost(cost));
        }
        if description.trim().is_empty() {
            return Err(PricingError::EmptyDescription);
        }

        Ok(Self { cost, description })
    }

    /// The stock order every storefront scenario starts from
    pub fn basic_order() -> Self {
        Self {
            cost: BASIC_ORDER_COST,
            description: BASIC_ORDER_DESCRIPTION.to_string(),
        }
    }
}

impl PricedItem for BaseItem {
    fn total_cost(&self) -> f64 {
        self.cost
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// Errors raised while assembling a pricing chain
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Cost must not be negative: {0}")]
    NegativeCost(f64),

    #[error("Amount must be a finite number: {0}")]
    NonFiniteAmount(f64),

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Order total must not be negative: {0}")]
    NegativeTotal(f64),
}
