pub mod product;
pub mod pricing;
pub mod builder;

pub use product::{BaseItem, PricedItem, PricingError};
pub use pricing::{Extra, Modifier, PriceQuote, PricedItemExt};
pub use builder::OrderBuilder;
