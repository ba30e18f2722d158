//! Products domain module.
//!
//! Schema validation, aggregates and sorts over an in-memory list of product
//! records, implemented purely as deterministic domain logic (no IO).

pub mod aggregates;
pub mod collate;
pub mod price;
pub mod product;
pub mod schema;
pub mod sort;

pub use aggregates::{
    cheapest_variant_names, cost_by_item_name, count_amount_by_item_name, line_cost, ItemCosts,
};
pub use price::{InvalidPrice, Price};
pub use product::{Product, SaleUnit};
pub use schema::{
    parse_products, parse_products_with, validate, validate_with, Field, RawRecord, ValidationMode,
};
pub use sort::{sort_by_cost, sort_by_items, sorted_by_cost, sorted_by_items};
