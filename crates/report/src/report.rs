//! Report assembly and rendering.

use grocer_core::DomainResult;
use grocer_products::{
    cheapest_variant_names, cost_by_item_name, count_amount_by_item_name, sorted_by_cost,
    sorted_by_items, ItemCosts, Product,
};

const WATERMELON: &str = "watermelon";
const APPLE: &str = "apple";
const ORANGE: &str = "orange";

/// Every value the report prints, computed from one validated list.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub watermelons: f64,
    pub apples: f64,
    pub by_items: Vec<Product>,
    pub by_cost: Vec<Product>,
    pub cheapest_oranges: String,
    pub costs: ItemCosts,
}

impl Report {
    pub fn build(products: &[Product]) -> DomainResult<Self> {
        let report = Self {
            watermelons: count_amount_by_item_name(products, WATERMELON)?,
            apples: count_amount_by_item_name(products, APPLE)?,
            by_items: sorted_by_items(products),
            by_cost: sorted_by_cost(products)?,
            cheapest_oranges: cheapest_variant_names(products, ORANGE)?,
            costs: cost_by_item_name(products)?,
        };
        tracing::debug!(items = report.costs.len(), "report built");
        Ok(report)
    }

    /// Output lines, in print order. Sorted lists are rendered as pretty JSON.
    pub fn render(&self) -> serde_json::Result<Vec<String>> {
        let mut lines = vec![
            format!("Watermelons - {}", self.watermelons),
            format!("Apples - {}", self.apples),
            serde_json::to_string_pretty(&self.by_items)?,
            serde_json::to_string_pretty(&self.by_cost)?,
            format!("The cheapest orange type is: {}", self.cheapest_oranges),
        ];
        lines.extend(
            self.costs
                .iter()
                .map(|(item, cost)| format!("{}s - {cost}", capitalize(item))),
        );
        Ok(lines)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
