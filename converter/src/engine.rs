use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{ConversionError, Result};
use crate::registry::UnitRegistry;
use crate::unit::{Category, Scale, UnitDef};

/// Outcome of a successful conversion, ready for display or
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub category: Category,
    pub value: f64,
    pub result: f64,
}

/// Converts values between canonical unit keys of a [`UnitRegistry`].
///
/// ```
/// use converter::Converter;
///
/// let conv = Converter::new();
/// let c = conv.convert("F", "C", 212.0)?;
/// assert_eq!(c, 100.0);
/// # Ok::<(), converter::ConversionError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    registry: &'static UnitRegistry,
}

impl Converter {
    /// Converter over the global registry.
    pub fn new() -> Self {
        Self::with_registry(UnitRegistry::global())
    }

    pub fn with_registry(registry: &'static UnitRegistry) -> Self {
        Self { registry }
    }

    // ── Core operation ──────────────────────────────────────────────

    /// Convert `value` from one canonical key to another.
    ///
    /// Keys are expected to be normalized already (see
    /// [`UnitRegistry::normalize`]).  Each key resolves to at most one
    /// definition, so the category is decided by the keys alone.
    ///
    /// A known source unit whose category lacks the target key is
    /// [`IncompatibleUnits`](ConversionError::IncompatibleUnits), even
    /// when the target is unknown; an unknown source is
    /// [`UnknownUnit`](ConversionError::UnknownUnit).
    pub fn convert(&self, from_unit: &str, to_unit: &str, value: f64) -> Result<f64> {
        self.dispatch(from_unit, to_unit, value).map(|(_, result)| result)
    }

    /// Like [`convert`](Self::convert), but returns the full record.
    pub fn conversion(&self, from_unit: &str, to_unit: &str, value: f64) -> Result<Conversion> {
        let (category, result) = self.dispatch(from_unit, to_unit, value)?;
        Ok(Conversion {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
            category,
            value,
            result,
        })
    }

    fn dispatch(&self, from_unit: &str, to_unit: &str, value: f64) -> Result<(Category, f64)> {
        let from = self.registry.lookup(from_unit);
        let to = self.registry.lookup(to_unit);
        trace!(from_unit, to_unit, ?from, ?to, "looked up units");

        match (from, to) {
            (Some(f), Some(t)) if f.category == t.category => {
                debug!(category = %f.category, from_unit, to_unit, value, "converting");
                apply(f, t, value).map(|result| (f.category, result))
            }
            (Some(f), Some(t)) => Err(incompatible(f, t)),
            (Some(f), None) => Err(ConversionError::IncompatibleUnits {
                from: f.key.to_string(),
                to: to_unit.to_string(),
                from_category: f.category,
                to_category: None,
            }),
            (None, _) => Err(ConversionError::UnknownUnit {
                from: from_unit.to_string(),
                to: to_unit.to_string(),
            }),
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Both units belong to the same category.
fn apply(from: &UnitDef, to: &UnitDef, value: f64) -> Result<f64> {
    match (from.scale, to.scale) {
        // Ratio first: a unit converted to itself is multiplied by 1.0 exactly.
        (Scale::Linear { factor: f }, Scale::Linear { factor: t }) => Ok(value * (f / t)),
        (Scale::Affine(f), Scale::Affine(t)) if f == t => Ok(value),
        (Scale::Affine(f), Scale::Affine(t)) => Ok(t.from_celsius(f.to_celsius(value))),
        _ => Err(incompatible(from, to)),
    }
}

fn incompatible(from: &UnitDef, to: &UnitDef) -> ConversionError {
    ConversionError::IncompatibleUnits {
        from: from.key.to_string(),
        to: to.key.to_string(),
        from_category: from.category,
        to_category: Some(to.category),
    }
}

/// [`Converter::convert`] on the global registry.
pub fn convert(from_unit: &str, to_unit: &str, value: f64) -> Result<f64> {
    Converter::new().convert(from_unit, to_unit, value)
}
