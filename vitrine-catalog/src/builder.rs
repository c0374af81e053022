use crate::pricing::{Extra, Modifier, PriceQuote, PricedItemExt};
use crate::product::{BaseItem, PricedItem, PricingError};

#[derive(Debug, Clone, PartialEq)]
struct Layer {
    delta: f64,
    suffix: String,
}

/// Assembles a pricing chain from a base item and an ordered list of layers.
///
/// Layers are applied in the order they were added, so the last one added
/// ends up outermost and contributes the last description suffix. Only the
/// finished total has to be finite and non-negative, so whether a chain
/// builds never depends on the order of its layers.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    base: BaseItem,
    layers: Vec<Layer>,
}

impl OrderBuilder {
    pub fn new(base: BaseItem) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    pub fn extra(self, extra: Extra) -> Self {
        self.modifier(extra.fee(), extra.suffix())
    }

    pub fn extras(self, extras: impl IntoIterator<Item = Extra>) -> Self {
        extras.into_iter().fold(self, Self::extra)
    }

    pub fn modifier(mut self, delta: f64, suffix: impl Into<String>) -> Self {
        self.layers.push(Layer {
            delta,
            suffix: suffix.into(),
        });
        self
    }

    pub fn build(self) -> Result<Box<dyn PricedItem>, PricingError> {
        self.build_with_trace().map(|(item, _)| item)
    }

    /// Build the chain and record a quote after every wrapping step,
    /// starting with the bare base item.
    pub fn build_with_trace(self) -> Result<(Box<dyn PricedItem>, Vec<PriceQuote>), PricingError> {
        let mut trace = Vec::with_capacity(self.layers.len() + 1);
        let mut item = self.base.boxed();
        trace.push(PriceQuote::of(&item));

        for layer in self.layers {
            item = Modifier::new(item, layer.delta, layer.suffix)?.boxed();
            trace.push(PriceQuote::of(&item));
        }

        let total = item.total_cost();
        if !total.is_finite() {
            return Err(PricingError::NonFiniteAmount(total));
        }
        if total < 0.0 {
            tracing::warn!(total, "rejected order with a negative total");
            return Err(PricingError::NegativeTotal(total));
        }

        tracing::debug!(layers = trace.len() - 1, total, "built order");
        Ok((item, trace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_trace() {
        let (order, trace) = OrderBuilder::new(BaseItem::basic_order())
            .extras(Extra::ALL)
            .build_with_trace()
            .unwrap();

        let lines: Vec<String> = trace.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Basic Order: $50",
                "Basic Order with Gift Wrap: $55",
                "Basic Order with Gift Wrap with Express Delivery: $75",
                "Basic Order with Gift Wrap with Express Delivery with Warranty: $100",
                "Basic Order with Gift Wrap with Express Delivery with Warranty with Insurance: $130",
            ]
        );
        assert_eq!(PriceQuote::of(&order), trace[4]);
    }

    #[test]
    fn test_permuted_extras_keep_cost_change_description() {
        let forward = OrderBuilder::new(BaseItem::basic_order())
            .extras([Extra::Warranty, Extra::GiftWrap, Extra::Insurance])
            .build()
            .unwrap();
        let backward = OrderBuilder::new(BaseItem::basic_order())
            .extras([Extra::Insurance, Extra::GiftWrap, Extra::Warranty])
            .build()
            .unwrap();

        assert_eq!(forward.total_cost(), backward.total_cost());
        assert_ne!(forward.description(), backward.description());
        assert_eq!(
            backward.description(),
            "Basic Order with Insurance with Gift Wrap with Warranty"
        );
    }

    #[test]
    fn test_no_layers_yields_base() {
        let (order, trace) = OrderBuilder::new(BaseItem::basic_order())
            .build_with_trace()
            .unwrap();

        assert_eq!(trace.len(), 1);
        assert_eq!(order.description(), "Basic Order");
    }

    #[test]
    fn test_invalid_layer_aborts_build() {
        let result = OrderBuilder::new(BaseItem::basic_order())
            .extra(Extra::GiftWrap)
            .modifier(-100.0, " with Broken Coupon")
            .build();

        assert_eq!(result.unwrap_err(), PricingError::NegativeTotal(-45.0));
    }

    #[test]
    fn test_discount_before_fee_builds() {
        let forward = OrderBuilder::new(BaseItem::new(10.0, "Order").unwrap())
            .modifier(-15.0, " with Coupon")
            .modifier(10.0, " with Fee")
            .build()
            .unwrap();
        let backward = OrderBuilder::new(BaseItem::new(10.0, "Order").unwrap())
            .modifier(10.0, " with Fee")
            .modifier(-15.0, " with Coupon")
            .build()
            .unwrap();

        assert_eq!(forward.total_cost(), 5.0);
        assert_eq!(backward.total_cost(), 5.0);
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let result = OrderBuilder::new(BaseItem::new(f64::MAX, "Yacht").unwrap())
            .modifier(f64::MAX, " with Crew")
            .build();

        assert!(matches!(result, Err(PricingError::NonFiniteAmount(_))));
    }

    fn integral_deltas() -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(-200i32..200, 0..8)
    }

    proptest! {
        #[test]
        fn test_build_outcome_ignores_layer_order(
            base in 0i32..300,
            deltas in integral_deltas()
        ) {
            // Whole-number amounts keep every partial sum exact.
            let build = |deltas: &[i32]| {
                deltas
                    .iter()
                    .fold(OrderBuilder::new(BaseItem::new(base as f64, "Order").unwrap()), |b, d| {
                        b.modifier(*d as f64, " with Adjustment")
                    })
                    .build()
            };
            let reversed: Vec<i32> = deltas.iter().rev().copied().collect();
            let forward = build(&deltas);
            let backward = build(&reversed);
            let expected = base + deltas.iter().sum::<i32>();

            prop_assert_eq!(forward.is_ok(), expected >= 0);
            prop_assert_eq!(backward.is_ok(), expected >= 0);
            if let (Ok(f), Ok(b)) = (forward, backward) {
                prop_assert_eq!(f.total_cost(), expected as f64);
                prop_assert_eq!(b.total_cost(), expected as f64);
            }
        }
    }
}
