//! Value object trait: equality by value, not identity.
//!
//! Product records carry no identity of their own. Everything in this domain
//! (prices, amounts, whole records) is compared by the values it holds.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price { text: String, amount: f64 }
///
/// impl ValueObject for Price {}
///
/// let a: Price = "$1,50".parse()?;
/// let b: Price = "$1,50".parse()?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
