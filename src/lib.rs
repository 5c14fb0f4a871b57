//! Responsive image width selection for CMS media URLs.
//!
//! A client-side script stores the visitor's screen size (and pixel density)
//! in a cookie. For every image URL the host builds, [`MediaUrlProvider`]
//! asks [`BreakpointResolver`] for the smallest configured breakpoint that
//! covers that screen, and rewrites the URL's max width accordingly.

mod config;
mod cookie;
mod db;
mod desktop;
mod error;
mod provider;
mod resolver;
mod types;

pub use config::{Breakpoints, Config, ConfigBuilder};
pub use cookie::{client_script, ResolutionCookie};
pub use db::Settings;
pub use desktop::DESKTOP_MARKERS;
pub use error::{Error, Result};
pub use provider::{ImageRequest, MediaItem, MediaUrlOptions, MediaUrlProvider, WidthOverride};
pub use resolver::BreakpointResolver;
pub use types::*;
