#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("no breakpoints configured")]
    EmptyBreakpoints,
    #[error("invalid breakpoint {0:?}: expected a positive integer width")]
    InvalidBreakpoint(String),
    #[error("missing required setting `{0}`")]
    MissingSetting(&'static str),
    #[error("invalid value {value:?} for setting `{key}`")]
    InvalidSetting { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
