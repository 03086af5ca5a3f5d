//! Static unit tables and alias resolution.
//!
//! The registry is built once, on first use, and is read-only from then
//! on.  Every canonical key belongs to exactly one [`Category`].

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::unit::{Category, Scale, TemperatureScale, UnitDef};

// ── Tables ──────────────────────────────────────────────────────────

const LENGTH: &[(&str, f64)] = &[
    ("m",  1.0),
    ("cm", 0.01),
    ("mm", 0.001),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("km", 1000.0),
    ("mi", 1609.34),
];

const MASS: &[(&str, f64)] = &[
    ("kg", 1.0),
    ("g",  0.001),
    ("lb", 0.453592),
    ("oz", 0.0283495),
];

const VOLUME: &[(&str, f64)] = &[
    ("L",    1.0),
    ("l",    1.0),
    ("mL",   0.001),
    ("ml",   0.001),
    ("uL",   0.000001),
    ("ul",   0.000001),
    ("gal",  3.78541),      // US gallon
    ("qt",   0.946353),     // US quart
    ("pt",   0.473176),     // US pint
    ("cup",  0.24),         // metric cup
    ("floz", 0.0295735),    // US fluid ounce
    ("tbsp", 0.0147868),
    ("tsp",  0.00492892),
    ("m3",   1000.0),
    ("cm3",  0.001),
    ("cc",   0.001),
    ("in3",  0.0163871),
    ("ft3",  28.3168),
];

const TEMPERATURE: &[(&str, TemperatureScale)] = &[
    ("C", TemperatureScale::Celsius),
    ("F", TemperatureScale::Fahrenheit),
    ("K", TemperatureScale::Kelvin),
];

/// Lower-case spelling → canonical key.
const ALIASES: &[(&str, &str)] = &[
    // length
    ("meter", "m"), ("meters", "m"),
    ("metre", "m"), ("metres", "m"),
    ("kilometer", "km"), ("kilometers", "km"),
    ("kilometre", "km"), ("kilometres", "km"),
    ("foot", "ft"), ("feet", "ft"),
    ("yard", "yd"), ("yards", "yd"),
    ("mile", "mi"), ("miles", "mi"),
    // mass
    ("kilogram", "kg"), ("kilograms", "kg"),
    ("gram", "g"), ("grams", "g"),
    ("pound", "lb"), ("pounds", "lb"),
    ("lbs", "lb"),
    ("ounce", "oz"), ("ounces", "oz"),
    // volume
    ("liter", "L"), ("liters", "L"),
    ("litre", "L"), ("litres", "L"),
    ("milliliter", "mL"), ("milliliters", "mL"),
    ("millilitre", "mL"), ("millilitres", "mL"),
    ("cup", "cup"), ("cups", "cup"),
    ("tablespoon", "tbsp"), ("tablespoons", "tbsp"),
    ("teaspoon", "tsp"), ("teaspoons", "tsp"),
    // temperature
    ("c", "C"), ("celsius", "C"), ("centigrade", "C"),
    ("f", "F"), ("fahrenheit", "F"),
    ("k", "K"), ("kelvin", "K"),
];

static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::build);

// ── Registry ────────────────────────────────────────────────────────

/// Immutable set of unit definitions and aliases.
///
/// Obtain the shared instance with [`UnitRegistry::global`].
#[derive(Debug)]
pub struct UnitRegistry {
    /// Definitions in table order (length, mass, volume, temperature).
    defs: Vec<UnitDef>,
    index: HashMap<&'static str, usize>,
    aliases: HashMap<&'static str, &'static str>,
}

impl UnitRegistry {
    /// The process-wide registry, built on first access.
    pub fn global() -> &'static UnitRegistry {
        &REGISTRY
    }

    fn build() -> Self {
        let linear = [
            (Category::Length, LENGTH),
            (Category::Mass, MASS),
            (Category::Volume, VOLUME),
        ];

        let mut defs: Vec<UnitDef> = linear
            .iter()
            .flat_map(|&(category, table)| {
                table
                    .iter()
                    .map(move |&(key, factor)| UnitDef::linear(key, category, factor))
            })
            .collect();
        defs.extend(
            TEMPERATURE
                .iter()
                .map(|&(key, scale)| UnitDef::affine(key, scale)),
        );

        let index = defs.iter().enumerate().map(|(i, d)| (d.key, i)).collect();
        let aliases = ALIASES.iter().copied().collect();

        let registry = Self { defs, index, aliases };
        debug_assert_eq!(registry.validate(), Ok(()));
        registry
    }

    // ── Lookups ─────────────────────────────────────────────────────

    /// Resolve a user-typed unit to a canonical key.
    ///
    /// The input is lower-cased before the alias lookup.  When no alias
    /// matches, the *original* string is returned untouched, so keys
    /// whose casing matters (`"mL"`, `"L"`) still resolve later on.
    pub fn normalize(&self, raw: &str) -> String {
        let lower = raw.to_lowercase();
        match self.aliases.get(lower.as_str()) {
            Some(&canonical) => {
                debug!(raw, canonical, "resolved unit alias");
                canonical.to_string()
            }
            None => raw.to_string(),
        }
    }

    /// Full definition for a canonical key.
    pub fn lookup(&self, unit: &str) -> Option<&UnitDef> {
        self.index.get(unit).map(|&i| &self.defs[i])
    }

    /// Category owning a canonical key, if any.
    pub fn lookup_category(&self, unit: &str) -> Option<Category> {
        self.lookup(unit).map(|d| d.category)
    }

    pub fn contains(&self, category: Category, unit: &str) -> bool {
        self.lookup_category(unit) == Some(category)
    }

    /// Definitions of one category, in table order.
    pub fn units(&self, category: Category) -> impl Iterator<Item = &UnitDef> {
        self.defs.iter().filter(move |d| d.category == category)
    }

    /// `(alias, canonical key)` pairs, in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.aliases.iter().map(|(&a, &c)| (a, c))
    }

    // ── Invariants ──────────────────────────────────────────────────

    /// Check the data invariants the engine relies on.
    fn validate(&self) -> Result<(), String> {
        if self.index.len() != self.defs.len() {
            return Err("a unit key appears in more than one table".into());
        }
        for def in &self.defs {
            match (def.category, def.scale) {
                (Category::Temperature, Scale::Affine(_)) => {}
                (Category::Temperature, Scale::Linear { .. }) | (_, Scale::Affine(_)) => {
                    return Err(format!("unit '{}' has the wrong scale kind", def.key));
                }
                (_, Scale::Linear { factor }) if !(factor.is_finite() && factor > 0.0) => {
                    return Err(format!("unit '{}' has factor {factor}", def.key));
                }
                _ => {}
            }
        }
        for (alias, canonical) in self.aliases() {
            if alias.to_lowercase() != alias {
                return Err(format!("alias '{alias}' is not lower-case"));
            }
            if self.lookup(canonical).is_none() {
                return Err(format!("alias '{alias}' points to unknown key '{canonical}'"));
            }
        }
        for def in &self.defs {
            let lower = def.key.to_lowercase();
            if let Some(&canonical) = self.aliases.get(lower.as_str()) {
                if canonical != def.key {
                    return Err(format!("key '{}' is shadowed by alias '{lower}'", def.key));
                }
            }
        }
        Ok(())
    }
}

// ── Shortcut ────────────────────────────────────────────────────────

/// [`UnitRegistry::normalize`] on the global registry.
pub fn normalize(raw: &str) -> String {
    UnitRegistry::global().normalize(raw)
}

/// [`UnitRegistry::lookup_category`] on the global registry.
pub fn lookup_category(unit: &str) -> Option<Category> {
    UnitRegistry::global().lookup_category(unit)
}
