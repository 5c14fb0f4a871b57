use super::Selection;

/// Why the provider left a media URL untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAnImage,
    DatabaseMismatch,
    NotNormalMode,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAnImage => "not an image",
            Self::DatabaseMismatch => "database mismatch",
            Self::NotNormalMode => "not in normal page mode",
        }
    }
}

/// Outcome of running a media URL build through the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Skipped(SkipReason),
    Applied(Selection),
}

impl Dispatch {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Applied(s) => Some(s),
            Self::Skipped(_) => None,
        }
    }
}
