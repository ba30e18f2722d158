//! Product record schema.
//!
//! Each allowed field name maps to one [`FieldRule`]; anything else is rejected.
//! Validation and conversion to [`Product`] happen in the same pass, and the
//! first failing field (in document order) aborts the whole batch.

use serde_json::{Map, Value};

use grocer_core::{ValidationError, ValidationReason};

use crate::price::Price;
use crate::product::Product;

/// A record as decoded from JSON, before validation.
pub type RawRecord = Map<String, Value>;

/// How much of the record shape is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Only the fields present are checked; unknown fields are rejected.
    #[default]
    Lenient,
    /// Lenient checks plus presence, exclusivity and kilo/item pairing.
    Strict,
}

/// Type rule for one field value.
pub trait FieldRule {
    type Output;

    /// Reported when [`FieldRule::parse`] rejects a value.
    const REASON: ValidationReason;

    fn parse(value: &Value) -> Option<Self::Output>;
}

pub struct Text;

impl FieldRule for Text {
    type Output = String;
    const REASON: ValidationReason = ValidationReason::MustBeString;

    fn parse(value: &Value) -> Option<String> {
        value.as_str().map(str::to_owned)
    }
}

pub struct Number;

impl FieldRule for Number {
    type Output = f64;
    const REASON: ValidationReason = ValidationReason::MustBeNumber;

    fn parse(value: &Value) -> Option<f64> {
        value.as_f64()
    }
}

/// `$`-prefixed currency text.
pub struct Currency;

impl FieldRule for Currency {
    type Output = Price;
    const REASON: ValidationReason = ValidationReason::MustBePrice;

    fn parse(value: &Value) -> Option<Price> {
        value.as_str().and_then(|text| Price::parse(text).ok())
    }
}

/// The allowed fields of a product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Item,
    Type,
    Weight,
    Quantity,
    PricePerKilo,
    PricePerItem,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Item,
        Field::Type,
        Field::Weight,
        Field::Quantity,
        Field::PricePerKilo,
        Field::PricePerItem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Item => "item",
            Field::Type => "type",
            Field::Weight => "weight",
            Field::Quantity => "quantity",
            Field::PricePerKilo => "pricePerKilo",
            Field::PricePerItem => "pricePerItem",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    fn apply(self, product: &mut Product, record: usize, value: &Value) -> Result<(), ValidationError> {
        match self {
            Field::Item => product.item = Some(check::<Text>(record, self, value)?),
            Field::Type => product.variety = Some(check::<Text>(record, self, value)?),
            Field::Weight => product.weight = Some(check::<Number>(record, self, value)?),
            Field::Quantity => product.quantity = Some(check::<Number>(record, self, value)?),
            Field::PricePerKilo => {
                product.price_per_kilo = Some(check::<Currency>(record, self, value)?)
            }
            Field::PricePerItem => {
                product.price_per_item = Some(check::<Currency>(record, self, value)?)
            }
        }
        Ok(())
    }
}

fn check<R: FieldRule>(record: usize, field: Field, value: &Value) -> Result<R::Output, ValidationError> {
    R::parse(value).ok_or_else(|| ValidationError::new(record, field.name(), R::REASON))
}

/// Validate and convert one record (lenient rules).
pub fn parse_record(index: usize, raw: &RawRecord) -> Result<Product, ValidationError> {
    let mut product = Product::default();
    for (name, value) in raw {
        let field = Field::from_name(name)
            .ok_or_else(|| ValidationError::new(index, name.as_str(), ValidationReason::NotAllowed))?;
        field.apply(&mut product, index, value)?;
    }
    Ok(product)
}

/// Strict shape check on an already-converted record.
pub fn check_complete(index: usize, product: &Product) -> Result<(), ValidationError> {
    let fail = |field: &str, reason| Err(ValidationError::new(index, field, reason));

    if product.item.is_none() {
        return fail(Field::Item.name(), ValidationReason::Required);
    }
    if product.variety.is_none() {
        return fail(Field::Type.name(), ValidationReason::Required);
    }

    match (product.weight, product.quantity) {
        (Some(_), Some(_)) => {
            return fail(Field::Quantity.name(), ValidationReason::Conflicts("weight"));
        }
        (None, None) => return fail("weight or quantity", ValidationReason::Required),
        _ => {}
    }
    match (&product.price_per_kilo, &product.price_per_item) {
        (Some(_), Some(_)) => {
            return fail(Field::PricePerItem.name(), ValidationReason::Conflicts("pricePerKilo"));
        }
        (None, None) => return fail("pricePerKilo or pricePerItem", ValidationReason::Required),
        _ => {}
    }

    if product.weight.is_some() && product.price_per_kilo.is_none() {
        return fail(Field::Weight.name(), ValidationReason::Unpaired("pricePerKilo"));
    }
    if product.quantity.is_some() && product.price_per_item.is_none() {
        return fail(Field::Quantity.name(), ValidationReason::Unpaired("pricePerItem"));
    }
    Ok(())
}

/// Validate and convert a whole batch.
pub fn parse_products_with(
    records: &[RawRecord],
    mode: ValidationMode,
) -> Result<Vec<Product>, ValidationError> {
    records
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let product = parse_record(index, raw)?;
            if mode == ValidationMode::Strict {
                check_complete(index, &product)?;
            }
            Ok(product)
        })
        .collect::<Result<Vec<_>, ValidationError>>()
        .inspect_err(|err| {
            tracing::debug!(record = err.record, field = %err.field, reason = %err.reason, "record rejected");
        })
}

pub fn parse_products(records: &[RawRecord]) -> Result<Vec<Product>, ValidationError> {
    parse_products_with(records, ValidationMode::Lenient)
}

pub fn validate_with(records: &[RawRecord], mode: ValidationMode) -> Result<(), ValidationError> {
    parse_products_with(records, mode).map(drop)
}

/// Check every record against the schema; fails on the first bad field.
///
/// A record with no fields at all is valid.
pub fn validate(records: &[RawRecord]) -> Result<(), ValidationError> {
    validate_with(records, ValidationMode::Lenient)
}
