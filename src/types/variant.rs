use serde::Deserialize;

/// Which flavour of the resolver is active.
///
/// `Legacy` reproduces the original width-only behaviour: the density token
/// of the cookie is ignored, `maxWidth` has no effect and no database or
/// page-mode gating is applied. `Extended` honours all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Legacy,
    #[default]
    Extended,
}

impl Variant {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Some(Self::Legacy),
            "extended" => Some(Self::Extended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Extended => "extended",
        }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, Self::Extended)
    }
}
