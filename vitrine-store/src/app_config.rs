use serde::Deserialize;
use std::env;
use vitrine_catalog::{BaseItem, Extra, OrderBuilder, PricingError};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub order: OrderConfig,
    pub payments: PaymentsConfig,
    pub documents: DocumentsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OrderConfig {
    pub base_description: String,
    pub base_cost: f64,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

impl OrderConfig {
    /// Builder for the configured base order with its extras queued in order
    pub fn builder(&self) -> Result<OrderBuilder, PricingError> {
        let base = BaseItem::new(self.base_cost, self.base_description.clone())?;
        Ok(OrderBuilder::new(base).extras(self.extras.iter().copied()))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentsConfig {
    pub paypal_amount: f64,
    pub stripe_amount: f64,
    pub square_amount: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentsConfig {
    pub content: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        Self::load_layered(dir, run_mode, Self::environment())
    }

    /// `VITRINE__*` overrides. `VITRINE__ORDER__BASE_COST=60` sets
    /// `order.base_cost`; `order.extras` takes a comma separated list such
    /// as `VITRINE__ORDER__EXTRAS=WARRANTY,GIFT_WRAP`.
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("VITRINE")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("order.extras")
    }

    /// Layer, lowest priority first: built-in defaults, `<dir>/default`,
    /// `<dir>/<run_mode>`, `<dir>/local`, then `environment`.
    pub fn load_layered(
        dir: &str,
        run_mode: &str,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("order.base_description", "Basic Order")?
            .set_default("order.base_cost", 50.0)?
            .set_default(
                "order.extras",
                vec!["GIFT_WRAP", "EXPRESS_DELIVERY", "WARRANTY", "INSURANCE"],
            )?
            .set_default("payments.paypal_amount", 150.75)?
            .set_default("payments.stripe_amount", 200.00)?
            .set_default("payments.square_amount", 300.50)?
            .set_default("documents.content", "Document content here...")?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Local overrides, never checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::PricedItem;

    #[test]
    fn test_defaults_reproduce_reference_order() {
        let config = Config::load_layered(
            "does-not-exist",
            "test",
            Config::environment().source(Some(config::Map::new())),
        )
        .unwrap();

        assert_eq!(config.order.base_description, "Basic Order");
        assert_eq!(config.order.base_cost, 50.0);
        assert_eq!(config.order.extras, Extra::ALL.to_vec());
        assert_eq!(config.payments.paypal_amount, 150.75);
        assert_eq!(config.documents.content, "Document content here...");

        let order = config.order.builder().unwrap().build().unwrap();
        assert_eq!(order.total_cost(), 130.0);
    }

    #[test]
    fn test_environment_overrides_order() {
        let mut vars = config::Map::new();
        vars.insert("VITRINE__ORDER__BASE_COST".to_string(), "60".to_string());
        vars.insert("VITRINE__ORDER__EXTRAS".to_string(), "WARRANTY,GIFT_WRAP".to_string());
        vars.insert("VITRINE__PAYMENTS__SQUARE_AMOUNT".to_string(), "12.5".to_string());

        let config = Config::load_layered(
            "does-not-exist",
            "test",
            Config::environment().source(Some(vars)),
        )
        .unwrap();

        assert_eq!(config.order.base_cost, 60.0);
        assert_eq!(config.order.extras, vec![Extra::Warranty, Extra::GiftWrap]);
        assert_eq!(config.payments.square_amount, 12.5);
        assert_eq!(config.payments.paypal_amount, 150.75);

        let order = config.order.builder().unwrap().build().unwrap();
        assert_eq!(order.total_cost(), 90.0);
        assert_eq!(order.description(), "Basic Order with Warranty with Gift Wrap");
    }

    #[test]
    fn test_invalid_base_cost_surfaces_pricing_error() {
        let order = OrderConfig {
            base_description: "Basic Order".to_string(),
            base_cost: -3.0,
            extras: vec![],
        };
        assert_eq!(order.builder().unwrap_err(), PricingError::NegativeCost(-3.0));
    }
}
