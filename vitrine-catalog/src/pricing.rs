use serde::{Deserialize, Serialize};
use std::fmt;
use vitrine_core::format_amount;

use crate::product::{PricedItem, PricingError};

/// Extras a customer can add on top of an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Extra {
    GiftWrap,
    ExpressDelivery,
    Warranty,
    Insurance,
}

impl Extra {
    pub const ALL: [Extra; 4] = [
        Extra::GiftWrap,
        Extra::ExpressDelivery,
        Extra::Warranty,
        Extra::Insurance,
    ];

    /// Flat fee added to the order total
    pub fn fee(&self) -> f64 {
        match self {
            Extra::GiftWrap => 5.0,
            Extra::ExpressDelivery => 20.0,
            Extra::Warranty => 25.0,
            Extra::Insurance => 30.0,
        }
    }

    /// Text appended to the order description
    pub fn suffix(&self) -> &'static str {
        match self {
            Extra::GiftWrap => " with Gift Wrap",
            Extra::ExpressDelivery => " with Express Delivery",
            Extra::Warranty => " with Warranty",
            Extra::Insurance => " with Insurance",
        }
    }
}

/// Wraps exactly one priced item and layers a fee and a description
/// suffix on top of it.
///
/// Any finite delta is accepted, so discounts may take an intermediate
/// layer below zero; [`crate::OrderBuilder`] checks the finished total.
/// The wrapped item is owned; dropping the modifier drops the whole chain
/// beneath it. `I` defaults to a boxed trait object so chains assembled at
/// runtime can be wrapped again without naming their concrete type.
#[derive(Debug, Clone)]
pub struct Modifier<I = Box<dyn PricedItem>> {
    inner: I,
    delta: f64,
    suffix: String,
}

impl<I: PricedItem> Modifier<I> {
    pub fn new(inner: I, delta: f64, suffix: impl Into<String>) -> Result<Self, PricingError> {
        if !delta.is_finite() {
            tracing::warn!(delta, "rejected modifier with non-finite delta");
            return Err(PricingError::NonFiniteAmount(delta));
        }

        let suffix = suffix.into();
        tracing::debug!(delta, suffix = %suffix, "wrapped priced item");

        Ok(Self { inner, delta, suffix })
    }

    pub fn from_extra(inner: I, extra: Extra) -> Result<Self, PricingError> {
        Self::new(inner, extra.fee(), extra.suffix())
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Peel off this layer and hand back the item it wrapped
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: PricedItem> PricedItem for Modifier<I> {
    fn total_cost(&self) -> f64 {
        self.inner.total_cost() + self.delta
    }

    fn description(&self) -> String {
        let mut description = self.inner.description();
        description.push_str(&self.suffix);
        description
    }
}

/// Fluent wrapping for any priced item
pub trait PricedItemExt: PricedItem + Sized {
    fn with_extra(self, extra: Extra) -> Result<Modifier<Self>, PricingError> {
        Modifier::from_extra(self, extra)
    }

    fn with_modifier(
        self,
        delta: f64,
        suffix: impl Into<String>,
    ) -> Result<Modifier<Self>, PricingError> {
        Modifier::new(self, delta, suffix)
    }

    fn boxed(self) -> Box<dyn PricedItem>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: PricedItem> PricedItemExt for T {}

/// Point-in-time snapshot of a priced item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub description: String,
    pub total_cost: f64,
}

impl PriceQuote {
    pub fn of<P: PricedItem + ?Sized>(item: &P) -> Self {
        Self {
            description: item.description(),
            total_cost: item.total_cost(),
        }
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.description, format_amount(self.total_cost))
    }
}
