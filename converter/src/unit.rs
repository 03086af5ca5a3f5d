use serde::Serialize;
use std::fmt;

// ────────────────────────────────────────────────────────────────────
//  Category
// ────────────────────────────────────────────────────────────────────

/// Physical quantity a unit measures.  Conversion is only defined
/// between units of the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: meter
    Length,
    /// Base unit: kilogram
    Mass,
    /// Base unit: liter
    Volume,
    /// Pivot scale: Celsius
    Temperature,
}

impl Category {
    /// Lookup order used by the conversion engine.
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Mass,
        Category::Volume,
        Category::Temperature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length      => "length",
            Category::Mass        => "mass",
            Category::Volume      => "volume",
            Category::Temperature => "temperature",
        }
    }

    /// Canonical key of the unit every other unit is expressed against.
    pub fn base_unit(self) -> &'static str {
        match self {
            Category::Length      => "m",
            Category::Mass        => "kg",
            Category::Volume      => "L",
            Category::Temperature => "C",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ────────────────────────────────────────────────────────────────────
//  Temperature scales
// ────────────────────────────────────────────────────────────────────

/// Temperature scale.  Scales are affine, not proportional, so they
/// convert through Celsius instead of a factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    /// Degrees Celsius (pivot)
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl TemperatureScale {
    /// This scale → °C
    pub fn to_celsius(self, t: f64) -> f64 {
        match self {
            TemperatureScale::Celsius    => t,
            TemperatureScale::Fahrenheit => (t - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin     => t - 273.15,
        }
    }

    /// °C → this scale
    pub fn from_celsius(self, c: f64) -> f64 {
        match self {
            TemperatureScale::Celsius    => c,
            TemperatureScale::Fahrenheit => c * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin     => c + 273.15,
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Unit definitions
// ────────────────────────────────────────────────────────────────────

/// How a unit relates to its category's base representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// `1 unit = factor × base unit`.  Always strictly positive.
    Linear { factor: f64 },
    /// Offset scale, converted through Celsius.
    Affine(TemperatureScale),
}

/// A canonical unit key together with its category and scale.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDef {
    pub key: &'static str,
    pub category: Category,
    pub scale: Scale,
}

impl UnitDef {
    pub const fn linear(key: &'static str, category: Category, factor: f64) -> Self {
        Self { key, category, scale: Scale::Linear { factor } }
    }

    pub const fn affine(key: &'static str, scale: TemperatureScale) -> Self {
        Self { key, category: Category::Temperature, scale: Scale::Affine(scale) }
    }
}
