use thiserror::Error;

use crate::unit::Category;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The source key is not a canonical unit of any category.
    #[error("Unknown unit(s): from='{from}', to='{to}'")]
    UnknownUnit { from: String, to: String },

    /// The source unit's category does not contain the target key.
    /// `to_category` is `None` when the target is not a known unit.
    #[error(
        "Incompatible unit types: '{from}' is {from_category}, '{to}' is {}",
        describe(.to_category)
    )]
    IncompatibleUnits {
        from: String,
        to: String,
        from_category: Category,
        to_category: Option<Category>,
    },
}

fn describe(category: &Option<Category>) -> &'static str {
    category.map_or("not a known unit", Category::name)
}

pub type Result<T> = std::result::Result<T, ConversionError>;
