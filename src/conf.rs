//! Naming constants and plugin parameters used by the resolver.
use std::collections::BTreeMap;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ParamError;

//==================================================================================CONF
/// Separator placed between a parent name and a child segment.
pub const NAME_SEPARATOR: char = '_';
/// Replacement for a leading underscore in a declared name.
pub const LEADING_UNDERSCORE: char = 'X';
/// Suffix of the generated server-side service type.
pub const SERVER_SUFFIX: &str = "Server";
/// Suffix of the generated client-side service type.
pub const CLIENT_SUFFIX: &str = "Client";
/// Suffix appended to a protected identifier.
pub const PROTECTED_SUFFIX: &str = "_";

/// Parameter key overriding the import path of every generated file.
pub(crate) const IMPORT_PATH_KEY: &str = "import_path";
/// Parameter key selecting the output path layout.
pub(crate) const PATHS_KEY: &str = "paths";
/// Prefix of the per-file import mapping parameters (`Mfoo.proto=path`).
pub(crate) const MAPPING_PREFIX: char = 'M';

//==================================================================================PARAMS
/// Output path layout requested by the caller. Stored for the output layers,
/// the resolver itself never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathsMode {
    /// Files are laid out by their import path (default).
    #[default]
    Import,
    /// Files are laid out next to their source `.proto`.
    SourceRelative,
}

impl FromStr for PathsMode {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "import" => Ok(Self::Import),
            "source_relative" => Ok(Self::SourceRelative),
            _ => Err(ParamError::InvalidValue {
                param: PATHS_KEY.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Plugin parameters that influence package naming.
///
/// Parsed from the raw protoc parameter string:
///
/// ```
/// use pgsgo_names::conf::Params;
///
/// let params: Params = "import_path=example.com/foo,Mbar.proto=example.com/bar;bar"
///     .parse()
///     .unwrap();
///
/// assert_eq!(params.import_path.as_deref(), Some("example.com/foo"));
/// assert_eq!(params.mapping("bar.proto"), Some("example.com/bar;bar"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Import path used for files that carry no `go_package` option.
    pub import_path: Option<String>,
    /// `M` overrides: proto input path -> Go import path.
    pub mappings: BTreeMap<String, String>,
    /// Output path layout.
    pub paths: PathsMode,
    /// Parameters meant for other consumers of the plugin string
    /// (`plugins=grpc`, ...). Bare keys map to an empty value.
    pub other: BTreeMap<String, String>,
}

impl Params {
    /// Returns the `M` override registered for a proto input path.
    pub fn mapping(&self, input_path: &str) -> Option<&str> {
        self.mappings.get(input_path).map(String::as_str)
    }
}

impl FromStr for Params {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut params = Self::default();

        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry.split_once('=').unwrap_or((entry, ""));
            let is_mapping = key.len() > 1 && key.starts_with(MAPPING_PREFIX);
            let is_known = is_mapping || key == IMPORT_PATH_KEY || key == PATHS_KEY;

            if !is_known {
                debug!("parameter `{key}` is not used for naming, keeping it aside");
                params.other.insert(key.to_string(), value.to_string());
                continue;
            }

            if value.is_empty() {
                return Err(ParamError::MissingValue {
                    param: key.to_string(),
                });
            }

            match key {
                IMPORT_PATH_KEY => params.import_path = Some(value.to_string()),
                PATHS_KEY => params.paths = value.parse()?,
                _ => {
                    params
                        .mappings
                        .insert(key[1..].to_string(), value.to_string());
                }
            }
        }

        Ok(params)
    }
}
