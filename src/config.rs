use std::path::Path;

use indexmap::IndexSet;

use crate::db::{ConfigFile, Resolutions, Settings};
use crate::error::{Error, Result};
use crate::types::Variant;

/// Configured breakpoint widths.
///
/// Keeps the first-seen configuration order (duplicates collapse) alongside
/// an ascending copy. Density-scaled lookups walk the configured order,
/// plain lookups walk the ascending one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    configured: IndexSet<u32>,
    ascending: Vec<u32>,
}

impl Breakpoints {
    pub fn new(widths: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut configured = IndexSet::new();
        for width in widths {
            if width == 0 {
                return Err(Error::InvalidBreakpoint(width.to_string()));
            }
            configured.insert(width);
        }
        if configured.is_empty() {
            return Err(Error::EmptyBreakpoints);
        }
        let mut ascending: Vec<u32> = configured.iter().copied().collect();
        ascending.sort_unstable();
        Ok(Self {
            configured,
            ascending,
        })
    }

    /// Parse the comma-separated form, e.g. `"1382, 992,768,480"`.
    /// Blank tokens are skipped; anything else that is not a positive
    /// integer is rejected.
    pub fn parse(csv: &str) -> Result<Self> {
        let widths = csv
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| match token.parse::<u32>() {
                Ok(width) if width > 0 => Ok(width),
                _ => Err(Error::InvalidBreakpoint(token.to_string())),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(widths)
    }

    pub fn min(&self) -> u32 {
        self.ascending[0]
    }

    pub fn max(&self) -> u32 {
        self.ascending[self.ascending.len() - 1]
    }

    pub fn ascending(&self) -> impl Iterator<Item = u32> + '_ {
        self.ascending.iter().copied()
    }

    pub fn configured(&self) -> impl Iterator<Item = u32> + '_ {
        self.configured.iter().copied()
    }

    pub fn contains(&self, width: u32) -> bool {
        self.configured.contains(&width)
    }

    pub fn len(&self) -> usize {
        self.ascending.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Immutable resolver configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    breakpoints: Breakpoints,
    max_width: Option<u32>,
    mobile_first: bool,
    cookie_name: String,
    database: Option<String>,
    variant: Variant,
}

impl Config {
    pub fn builder(breakpoints: Breakpoints, cookie_name: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            breakpoints,
            cookie_name: cookie_name.into(),
            max_width: None,
            mobile_first: false,
            database: None,
            variant: Variant::default(),
        }
    }

    /// Build from the host's string-keyed settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let resolutions = settings
            .get("resolutions")
            .ok_or(Error::MissingSetting("resolutions"))?;
        let breakpoints = Breakpoints::parse(resolutions)?;

        let cookie_name = settings
            .get("cookieName")
            .ok_or(Error::MissingSetting("cookieName"))?;

        let mobile_first = match non_blank(settings, "mobileFirst") {
            None => false,
            Some(v) if v.eq_ignore_ascii_case("true") => true,
            Some(v) if v.eq_ignore_ascii_case("false") => false,
            Some(v) => return Err(invalid("mobileFirst", v)),
        };

        let max_width = match non_blank(settings, "maxWidth") {
            None => None,
            Some(v) => match v.parse::<u32>() {
                Ok(w) if w > 0 => Some(w),
                _ => return Err(invalid("maxWidth", v)),
            },
        };

        let variant = match non_blank(settings, "variant") {
            None => Variant::default(),
            Some(v) => Variant::from_str(v).ok_or_else(|| invalid("variant", v))?,
        };

        Self::builder(breakpoints, cookie_name.as_str())
            .mobile_first(mobile_first)
            .max_width(max_width)
            .database(non_blank(settings, "database").map(str::to_string))
            .variant(variant)
            .build()
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let breakpoints = match file.resolutions {
            Resolutions::List(widths) => Breakpoints::new(widths)?,
            Resolutions::Csv(csv) => Breakpoints::parse(&csv)?,
        };
        Self::builder(breakpoints, file.cookie_name)
            .mobile_first(file.mobile_first)
            .max_width(file.max_width)
            .database(file.database.filter(|db| !db.trim().is_empty()))
            .variant(file.variant)
            .build()
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Width cap, only meaningful for the extended variant.
    pub fn max_width(&self) -> Option<u32> {
        match self.variant {
            Variant::Extended => self.max_width,
            Variant::Legacy => None,
        }
    }

    pub fn mobile_first(&self) -> bool {
        self.mobile_first
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Database the rewrite is restricted to, only meaningful for the
    /// extended variant.
    pub fn database(&self) -> Option<&str> {
        match self.variant {
            Variant::Extended => self.database.as_deref(),
            Variant::Legacy => None,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
}

/// Programmatic construction of a [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    breakpoints: Breakpoints,
    cookie_name: String,
    max_width: Option<u32>,
    mobile_first: bool,
    database: Option<String>,
    variant: Variant,
}

impl ConfigBuilder {
    pub fn mobile_first(mut self, mobile_first: bool) -> Self {
        self.mobile_first = mobile_first;
        self
    }

    pub fn max_width(mut self, max_width: Option<u32>) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn database(mut self, database: Option<String>) -> Self {
        self.database = database;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn build(self) -> Result<Config> {
        let cookie_name = self.cookie_name.trim().to_string();
        if cookie_name.is_empty() {
            return Err(invalid("cookieName", &self.cookie_name));
        }
        if self.max_width == Some(0) {
            return Err(invalid("maxWidth", "0"));
        }
        if self.variant == Variant::Legacy {
            if let Some(max_width) = self.max_width {
                tracing::warn!(max_width, "maxWidth is ignored by the legacy variant");
            }
            if let Some(database) = &self.database {
                tracing::warn!(%database, "database gating is ignored by the legacy variant");
            }
        }
        Ok(Config {
            breakpoints: self.breakpoints,
            max_width: self.max_width,
            mobile_first: self.mobile_first,
            cookie_name,
            database: self.database,
            variant: self.variant,
        })
    }
}

fn non_blank<'a>(settings: &'a Settings, key: &str) -> Option<&'a str> {
    settings
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn invalid(key: &'static str, value: &str) -> Error {
    Error::InvalidSetting {
        key,
        value: value.to_string(),
    }
}
