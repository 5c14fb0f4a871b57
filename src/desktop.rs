use aho_corasick::AhoCorasick;

use super::error::Result;

/// User-agent fragments that identify a desktop browser.
pub const DESKTOP_MARKERS: [&str; 3] = ["macintosh", "x11", "windows nt"];

/// Desktop sniffing used when the resolution cookie is missing.
///
/// This is a fallback for clients that never ran the cookie script (scripting
/// disabled, first request of a session), not a device detector: a UA that
/// contains any marker, in any case, counts as desktop.
pub(crate) struct DesktopMarkers {
    matcher: AhoCorasick,
}

impl DesktopMarkers {
    pub fn build() -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(DESKTOP_MARKERS)?;
        Ok(Self { matcher })
    }

    pub fn matches(&self, ua: Option<&str>) -> bool {
        match ua {
            None => false,
            Some(ua) => self.matcher.is_match(ua),
        }
    }
}
