//! Error definitions for the fallible surface of the crate.
//! Name resolution itself is total; only parameter parsing can fail.
use thiserror::Error;

//==================================================================================PARAM_ERROR
#[derive(Debug, Error, PartialEq, Eq)]
/// Errors returned while parsing the plugin parameter string.
pub enum ParamError {
    /// The entry has no `=` or an empty value.
    #[error("[MESSAGE]:Missing value for parameter [PARAM]:{param}")]
    MissingValue { param: String },

    /// The value is not one of the accepted values for this key.
    #[error("[MESSAGE]:Invalid value for parameter [PARAM]:{param}, [VALUE]:{value}")]
    InvalidValue { param: String, value: String },
}
