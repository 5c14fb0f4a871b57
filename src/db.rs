use indexmap::IndexMap;
use serde::Deserialize;

use crate::types::Variant;

// ---------------------------------------------------------------------------
// YAML configuration file
//
// Keys mirror the host's string-keyed settings so the same names work in
// both surfaces.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub resolutions: Resolutions,
    pub cookie_name: String,
    #[serde(default)]
    pub mobile_first: bool,
    #[serde(default)]
    pub max_width: Option<u32>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub variant: Variant,
}

/// Breakpoints may be written as a YAML list or as the comma-separated
/// string form used by the settings surface.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Resolutions {
    List(Vec<u32>),
    Csv(String),
}

// ---------------------------------------------------------------------------
// Host settings
//
// Format: flat mapping  key → raw string value, as handed over by the host's
// settings store (`resolutions`, `mobileFirst`, `cookieName`, `database`,
// `maxWidth`, `variant`).
// ---------------------------------------------------------------------------

/// Raw string-keyed settings. Uses IndexMap so diagnostics follow the
/// host's own key order.
pub type Settings = IndexMap<String, String>;
