#![warn(missing_docs)]
#![deny(unsafe_code)]
#![doc = include_str!("../README.md")]

pub(crate) mod coerce;
pub(crate) mod config;
pub(crate) mod config_value;
pub(crate) mod error;
pub(crate) mod line;
pub(crate) mod parser;

use camino::Utf8PathBuf;

pub use coerce::coerce;
pub use config::{Config, Group};
pub use config_value::ConfigValue;
pub use error::ParseError;
pub use parser::{Overrides, Parser};

/// Load a configuration file with no overrides enabled.
///
/// Override lines in the file are still accepted as valid syntax, they
/// just produce no settings.
pub fn load_config(path: impl Into<Utf8PathBuf>) -> Result<Config, ParseError> {
    Parser::new(path).load()
}

/// Load a configuration file with the given override names enabled.
///
/// ```rust,ignore
/// let config = confit::load_config_with("settings.conf", ["production", "ubuntu"])?;
/// ```
pub fn load_config_with<I, S>(path: impl Into<Utf8PathBuf>, overrides: I) -> Result<Config, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Parser::new(path).overrides(overrides).load()
}
