use converter::ConversionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The value token is not a finite number.
    #[error("Value must be a valid number, got '{0}'")]
    InvalidNumber(String),

    /// From-unit, to-unit or value was not supplied.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Unknown or incompatible units.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// JSON rendering failed.
    #[error("Could not render JSON output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Stable identifier used in JSON error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidNumber(_) => "invalid_number",
            Error::MissingArgument(_) => "missing_argument",
            Error::Conversion(ConversionError::UnknownUnit { .. }) => "unknown_unit",
            Error::Conversion(ConversionError::IncompatibleUnits { .. }) => "incompatible_units",
            Error::Serialize(_) => "serialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
