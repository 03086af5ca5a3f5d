//! Unit registry and conversion engine.
//!
//! Converts a value between two units of the same physical quantity.
//! Linear quantities go through a base unit; temperature goes through
//! Celsius.
//!
//! | Category    | Base | Units                                            |
//! |-------------|------|--------------------------------------------------|
//! | length      | m    | m cm mm ft yd km mi                              |
//! | mass        | kg   | kg g lb oz                                       |
//! | volume      | L    | L l mL ml uL ul gal qt pt cup floz tbsp tsp m3 cm3 cc in3 ft3 |
//! | temperature | C    | C F K                                            |
//!
//! # Example
//!
//! ```
//! use converter::{convert, normalize};
//!
//! let from = normalize("Kilometres");   // "km"
//! let to = normalize("miles");          // "mi"
//! let mi = convert(&from, &to, 1.0)?;
//! assert!((mi - 0.621371).abs() < 1e-5);
//! # Ok::<(), converter::ConversionError>(())
//! ```

mod engine;
mod error;
mod registry;
mod unit;

pub use engine::{Conversion, Converter, convert};
pub use error::{ConversionError, Result};
pub use registry::{UnitRegistry, lookup_category, normalize};
pub use unit::{Category, Scale, TemperatureScale, UnitDef};
