use serde::Serialize;

use grocer_core::{DomainError, DomainResult, ValueObject};

use crate::price::Price;

/// How a record is sold: by weight (per kilo) or by count (per item).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleUnit {
    Bulk,
    Discrete,
}

/// A single product record.
///
/// Built only through [`crate::schema::parse_record`]; serialization uses the
/// source field names.
///
/// Every field is optional at this level: the lenient schema only checks what is
/// present. Strict validation (see [`crate::schema::ValidationMode`]) guarantees
/// `item`, `type`, one amount and one matching price.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_kilo: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_item: Option<Price>,
}

impl ValueObject for Product {}

impl Product {
    /// Bulk good: `weight` kilos at `price` per kilo.
    pub fn bulk(item: impl Into<String>, variety: impl Into<String>, weight: f64, price: Price) -> Self {
        Self {
            item: Some(item.into()),
            variety: Some(variety.into()),
            weight: Some(weight),
            price_per_kilo: Some(price),
            ..Self::default()
        }
    }

    /// Discrete good: `quantity` items at `price` each.
    pub fn discrete(
        item: impl Into<String>,
        variety: impl Into<String>,
        quantity: f64,
        price: Price,
    ) -> Self {
        Self {
            item: Some(item.into()),
            variety: Some(variety.into()),
            quantity: Some(quantity),
            price_per_item: Some(price),
            ..Self::default()
        }
    }

    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    pub fn variety(&self) -> Option<&str> {
        self.variety.as_deref()
    }

    pub fn is_item(&self, name: &str) -> bool {
        self.item() == Some(name)
    }

    /// `weight` when present (zero included), otherwise `quantity`.
    pub fn amount(&self) -> Option<f64> {
        self.weight.or(self.quantity)
    }

    /// `pricePerKilo` when present, otherwise `pricePerItem`.
    pub fn unit_price(&self) -> Option<&Price> {
        self.price_per_kilo.as_ref().or(self.price_per_item.as_ref())
    }

    pub fn sale_unit(&self) -> Option<SaleUnit> {
        match (self.weight, self.quantity) {
            (Some(_), None) => Some(SaleUnit::Bulk),
            (None, Some(_)) => Some(SaleUnit::Discrete),
            _ => None,
        }
    }

    /// Line cost: amount times unit price.
    pub fn line_cost(&self) -> DomainResult<f64> {
        let amount = self
            .amount()
            .ok_or_else(|| DomainError::missing_field(self.item(), "weight or quantity"))?;
        let price = self
            .unit_price()
            .ok_or_else(|| DomainError::missing_field(self.item(), "pricePerKilo or pricePerItem"))?;
        Ok(amount * price.amount())
    }
}
