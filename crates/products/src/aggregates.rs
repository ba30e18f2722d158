//! Read-only aggregates over a validated product list.

use grocer_core::{DomainError, DomainResult};

use crate::product::Product;

/// Total cost per item name, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCosts {
    entries: Vec<(String, f64)>,
}

impl ItemCosts {
    pub fn get(&self, item: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, item: &str, cost: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == item) {
            Some((_, total)) => *total += cost,
            None => self.entries.push((item.to_string(), cost)),
        }
    }
}

/// Sum of `weight` (or `quantity`) over records whose `item` is `name`.
///
/// Returns zero when nothing matches.
pub fn count_amount_by_item_name(products: &[Product], name: &str) -> DomainResult<f64> {
    products
        .iter()
        .filter(|product| product.is_item(name))
        .map(|product| {
            product
                .amount()
                .ok_or_else(|| DomainError::missing_field(product.item(), "weight or quantity"))
        })
        .sum()
}

pub fn line_cost(product: &Product) -> DomainResult<f64> {
    product.line_cost()
}

/// Line costs summed per `item`.
pub fn cost_by_item_name(products: &[Product]) -> DomainResult<ItemCosts> {
    let mut costs = ItemCosts::default();
    for product in products {
        let item = product
            .item()
            .ok_or_else(|| DomainError::missing_field(None, "item"))?;
        costs.add(item, product.line_cost()?);
    }
    Ok(costs)
}

/// Varieties of `item_name` sold at the lowest price per kilo, joined with `", "`.
///
/// Tied varieties are all listed, in input order.
pub fn cheapest_variant_names(products: &[Product], item_name: &str) -> DomainResult<String> {
    let priced = products
        .iter()
        .filter(|product| product.is_item(item_name))
        .map(|product| {
            product
                .price_per_kilo
                .as_ref()
                .map(|price| (product, price.amount()))
                .ok_or_else(|| DomainError::missing_field(product.item(), "pricePerKilo"))
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let lowest = priced
        .iter()
        .map(|(_, price)| *price)
        .min_by(f64::total_cmp)
        .ok_or_else(|| DomainError::item_not_found(item_name))?;

    let names: Vec<&str> = priced
        .iter()
        .filter(|(_, price)| *price == lowest)
        .filter_map(|(product, _)| product.variety().filter(|variety| !variety.is_empty()))
        .collect();

    tracing::debug!(item = item_name, lowest, matches = names.len(), "cheapest variants resolved");
    Ok(names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn price(text: &str) -> Price {
        Price::parse(text).unwrap()
    }

    fn apple(weight: f64, per_kilo: &str) -> Product {
        Product {
            item: Some("apple".to_string()),
            weight: Some(weight),
            price_per_kilo: Some(price(per_kilo)),
            ..Product::default()
        }
    }

    fn orange(variety: &str, per_kilo: &str) -> Product {
        Product {
            item: Some("orange".to_string()),
            variety: Some(variety.to_string()),
            price_per_kilo: Some(price(per_kilo)),
            ..Product::default()
        }
    }

    #[test]
    fn counts_weight_of_matching_records() {
        let products = vec![apple(2.0, "$1,50"), apple(1.0, "$1,50")];
        assert_eq!(count_amount_by_item_name(&products, "apple"), Ok(3.0));
    }

    #[test]
    fn counts_quantity_when_no_weight() {
        let products = vec![
            Product::discrete("watermelon", "crimson", 2.0, price("$4")),
            Product::discrete("watermelon", "sugar baby", 5.0, price("$3")),
            apple(9.0, "$1"),
        ];
        assert_eq!(count_amount_by_item_name(&products, "watermelon"), Ok(7.0));
    }

    #[test]
    fn count_without_matches_is_zero() {
        let products = vec![apple(2.0, "$1,50")];
        assert_eq!(count_amount_by_item_name(&products, "kiwi"), Ok(0.0));
        assert_eq!(count_amount_by_item_name(&[], "apple"), Ok(0.0));
    }

    #[test]
    fn count_reports_matching_record_without_amount() {
        let products = vec![orange("navel", "$0,90")];
        assert!(matches!(
            count_amount_by_item_name(&products, "orange"),
            Err(DomainError::MissingField { .. })
        ));
    }

    #[test]
    fn cost_by_item_sums_line_costs() {
        let products = vec![apple(2.0, "$1,50"), apple(1.0, "$1,50")];
        let costs = cost_by_item_name(&products).unwrap();
        assert_eq!(costs.get("apple"), Some(4.5));
        assert_eq!(costs.len(), 1);
    }

    #[test]
    fn cost_by_item_keeps_first_appearance_order() {
        let products = vec![
            Product::discrete("watermelon", "crimson", 1.0, price("$4")),
            apple(1.0, "$2"),
            Product::discrete("watermelon", "crimson", 1.0, price("$4")),
            Product::discrete("pineapple", "queen", 2.0, price("$3")),
        ];
        let costs = cost_by_item_name(&products).unwrap();
        let order: Vec<(&str, f64)> = costs.iter().collect();
        assert_eq!(order, vec![("watermelon", 8.0), ("apple", 2.0), ("pineapple", 6.0)]);
        assert_eq!(costs.get("kiwi"), None);
    }

    #[test]
    fn cost_by_item_of_empty_list_is_empty() {
        assert!(cost_by_item_name(&[]).unwrap().is_empty());
    }

    #[test]
    fn cost_by_item_rejects_unnamed_records() {
        let unnamed = Product {
            weight: Some(1.0),
            price_per_kilo: Some(price("$1")),
            ..Product::default()
        };
        assert_eq!(
            cost_by_item_name(&[unnamed]),
            Err(DomainError::missing_field(None, "item"))
        );
    }

    #[test]
    fn cheapest_lists_all_tied_varieties() {
        let products = vec![
            orange("navel", "$0,90"),
            orange("blood", "$0,90"),
            orange("valencia", "$1,10"),
        ];
        assert_eq!(
            cheapest_variant_names(&products, "orange"),
            Ok("navel, blood".to_string())
        );
    }

    #[test]
    fn cheapest_skips_blank_varieties() {
        let products = vec![orange("navel", "$0,90"), orange("", "$0,90")];
        assert_eq!(
            cheapest_variant_names(&products, "orange"),
            Ok("navel".to_string())
        );
    }

    #[test]
    fn cheapest_single_winner() {
        let products = vec![
            orange("valencia", "$1,10"),
            apple(1.0, "$0,10"),
            orange("cara cara", "$1,05"),
        ];
        assert_eq!(
            cheapest_variant_names(&products, "orange"),
            Ok("cara cara".to_string())
        );
    }

    #[test]
    fn cheapest_of_unknown_item_is_not_found() {
        let products = vec![orange("navel", "$0,90")];
        assert_eq!(
            cheapest_variant_names(&products, "kiwi"),
            Err(DomainError::item_not_found("kiwi"))
        );
    }

    #[test]
    fn cheapest_requires_price_per_kilo() {
        let products = vec![Product::discrete("orange", "navel", 3.0, price("$0,50"))];
        assert_eq!(
            cheapest_variant_names(&products, "orange"),
            Err(DomainError::missing_field(Some("orange"), "pricePerKilo"))
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn product() -> impl Strategy<Value = Product> {
            (
                prop::sample::select(vec!["apple", "orange", "pear"]),
                0u32..500,
                1u32..2000,
            )
                .prop_map(|(item, weight, cents)| Product {
                    item: Some(item.to_string()),
                    weight: Some(f64::from(weight)),
                    price_per_kilo: Some(price(&format!("${},{:02}", cents / 100, cents % 100))),
                    ..Product::default()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the count is the exact sum over matching records.
            #[test]
            fn count_is_sum_of_matching_amounts(products in prop::collection::vec(product(), 0..40)) {
                let expected: f64 = products
                    .iter()
                    .filter(|p| p.is_item("apple"))
                    .filter_map(|p| p.weight)
                    .sum();
                prop_assert_eq!(count_amount_by_item_name(&products, "apple"), Ok(expected));
            }

            /// Property: per-item totals add up the line costs of that item's records.
            #[test]
            fn item_totals_match_line_costs(products in prop::collection::vec(product(), 0..40)) {
                let costs = cost_by_item_name(&products).unwrap();
                for (item, total) in costs.iter() {
                    let expected: f64 = products
                        .iter()
                        .filter(|p| p.is_item(item))
                        .map(|p| p.line_cost().unwrap())
                        .sum();
                    prop_assert_eq!(total, expected);
                }
                let distinct = products
                    .iter()
                    .filter_map(Product::item)
                    .collect::<std::collections::HashSet<_>>()
                    .len();
                prop_assert_eq!(costs.len(), distinct);
            }
        }
    }
}
