//! Reordered views of the product list.
//!
//! Both sorts are stable: records with equal keys keep their input order.

use core::cmp::Ordering;

use grocer_core::DomainResult;

use crate::collate::locale_cmp;
use crate::product::Product;

fn compare_items(a: &Product, b: &Product) -> Ordering {
    match (a.item(), b.item()) {
        (Some(a), Some(b)) => locale_cmp(a, b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort by `item` in locale order. Records without an item come first.
pub fn sort_by_items(products: &mut [Product]) {
    products.sort_by(compare_items);
}

/// Sort by line cost, ascending.
///
/// Costs are computed up front; if any record has no cost the slice is left
/// untouched and the error is returned.
pub fn sort_by_cost(products: &mut [Product]) -> DomainResult<()> {
    let costs = products
        .iter()
        .map(Product::line_cost)
        .collect::<DomainResult<Vec<f64>>>()?;

    let mut order: Vec<usize> = (0..products.len()).collect();
    order.sort_by(|&a, &b| costs[a].total_cmp(&costs[b]));

    let sorted: Vec<Product> = order.iter().map(|&index| products[index].clone()).collect();
    products.clone_from_slice(&sorted);
    Ok(())
}

pub fn sorted_by_items(products: &[Product]) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sort_by_items(&mut sorted);
    sorted
}

pub fn sorted_by_cost(products: &[Product]) -> DomainResult<Vec<Product>> {
    let mut sorted = products.to_vec();
    sort_by_cost(&mut sorted)?;
    Ok(sorted)
}
