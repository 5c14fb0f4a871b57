/// How the host is rendering the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    #[default]
    Normal,
    Edit,
    Preview,
}

impl PageMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "edit" | "editing" => Some(Self::Edit),
            "preview" => Some(Self::Preview),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Edit => "edit",
            Self::Preview => "preview",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
