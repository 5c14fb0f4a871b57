/// What the caller should do with the resolution cookie after a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CookieAction {
    #[default]
    Keep,
    /// The cookie value could not be parsed; the caller should expire it on
    /// its response so the client script can write a fresh one.
    Expire,
}

impl CookieAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Expire => "expire",
        }
    }
}

/// Result of a width selection.
///
/// `width == 0` means "no override": the host keeps whatever width its own
/// pipeline would have chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub width: u32,
    pub cookie: CookieAction,
}

impl Selection {
    pub(crate) fn width(width: u32) -> Self {
        Self {
            width,
            cookie: CookieAction::Keep,
        }
    }

    pub(crate) fn mangled() -> Self {
        Self {
            width: 0,
            cookie: CookieAction::Expire,
        }
    }

    pub fn is_override(&self) -> bool {
        self.width != 0
    }

    pub fn expires_cookie(&self) -> bool {
        self.cookie == CookieAction::Expire
    }
}
