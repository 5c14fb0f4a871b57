use super::config::Config;
use super::cookie::{client_script, ResolutionCookie};
use super::desktop::DesktopMarkers;
use super::error::Result;
use super::types::*;

/// Picks the image width to request for a client, given its resolution
/// cookie and user agent.
///
/// Built once from an immutable [`Config`]; every lookup is a pure function
/// of its arguments, so one resolver can be shared across request threads.
pub struct BreakpointResolver {
    config: Config,
    desktop: DesktopMarkers,
}

impl BreakpointResolver {
    pub fn new(config: Config) -> Result<Self> {
        let desktop = DesktopMarkers::build()?;
        tracing::debug!(
            breakpoints = config.breakpoints().len(),
            min = config.breakpoints().min(),
            max = config.breakpoints().max(),
            mobile_first = config.mobile_first(),
            variant = config.variant().as_str(),
            "breakpoint resolver ready"
        );
        Ok(Self { config, desktop })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cookie_name(&self) -> &str {
        self.config.cookie_name()
    }

    pub fn client_script(&self) -> String {
        client_script(self.config.cookie_name(), self.config.variant())
    }

    pub fn is_desktop_browser(&self, user_agent: Option<&str>) -> bool {
        self.desktop.matches(user_agent)
    }

    /// Select the max width for one image URL.
    ///
    /// `cookie` is the raw resolution cookie value, `None` when the client
    /// sent no such cookie. `requested_max_width` is the width the caller
    /// already asked for (0 = unset) and only matters when a cookie is
    /// present.
    pub fn select_width(
        &self,
        cookie: Option<&str>,
        user_agent: Option<&str>,
        requested_max_width: u32,
    ) -> Selection {
        // 1. No cookie: fall back on policy plus UA sniffing.
        let Some(raw) = cookie else {
            let width = self.fallback_width(user_agent);
            tracing::debug!(width, "no resolution cookie, using fallback breakpoint");
            return Selection::width(width);
        };

        // 2. Mangled cookie: ask the caller to drop it, no override.
        let Some(cookie) = ResolutionCookie::parse(raw, self.config.variant()) else {
            tracing::warn!(
                cookie = self.config.cookie_name(),
                value = raw,
                "mangled resolution cookie"
            );
            return Selection::mangled();
        };

        // 3. Breakpoint lookup, then merge with the caller's own width.
        let resolution = self.resolution_for(cookie);
        let mut width = requested_max_width;
        if requested_max_width == 0 || requested_max_width > resolution {
            width = resolution;
        }

        // 4. Nothing matched: fall back on the configured cap.
        if width == 0 {
            if let Some(max_width) = self.config.max_width() {
                width = max_width.saturating_mul(cookie.density);
            }
        }

        tracing::debug!(
            client_width = cookie.width,
            density = cookie.density,
            resolution,
            requested_max_width,
            width,
            "selected image width"
        );
        Selection::width(width)
    }

    fn fallback_width(&self, user_agent: Option<&str>) -> u32 {
        let breakpoints = self.config.breakpoints();
        if !self.config.mobile_first() || self.is_desktop_browser(user_agent) {
            breakpoints.max()
        } else {
            breakpoints.min()
        }
    }

    /// Breakpoint for a parsed cookie, 0 when none fits.
    fn resolution_for(&self, cookie: ResolutionCookie) -> u32 {
        let breakpoints = self.config.breakpoints();

        if cookie.density == 1 {
            return breakpoints
                .ascending()
                .find(|&bp| cookie.width <= bp)
                .unwrap_or(0);
        }

        // Dense screens walk the configured order and keep the last
        // breakpoint that fits, not the smallest one.
        let total_width = cookie.width.saturating_mul(cookie.density);
        let mut resolution = 0;
        for bp in breakpoints.configured() {
            if total_width <= bp {
                resolution = bp;
            }
        }
        if total_width > breakpoints.max() {
            resolution = resolution.saturating_mul(cookie.density);
        }
        resolution
    }
}
