use super::resolver::BreakpointResolver;
use super::types::*;

/// Media item metadata the host hands over for a URL build.
#[derive(Debug, Clone, Copy)]
pub struct MediaItem<'a> {
    pub mime_type: &'a str,
}

/// Per-request inputs gathered by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRequest<'a> {
    /// Raw value of the resolution cookie, `None` if the client sent none.
    pub resolution_cookie: Option<&'a str>,
    pub user_agent: Option<&'a str>,
    /// Max width the caller already asked for, 0 when unset.
    pub requested_max_width: u32,
    /// Name of the database/context the page is served from.
    pub database: Option<&'a str>,
    pub page_mode: PageMode,
}

/// The host's mutable URL-build options. Only `max_width` is rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaUrlOptions {
    pub max_width: u32,
    pub allow_stretch: bool,
    pub scale: Option<u32>,
}

/// Capability behind the host's URL-building extension point: turn a
/// request into a width override.
pub trait WidthOverride {
    fn width_override(&self, request: &ImageRequest<'_>) -> Selection;
}

impl WidthOverride for BreakpointResolver {
    fn width_override(&self, request: &ImageRequest<'_>) -> Selection {
        self.select_width(
            request.resolution_cookie,
            request.user_agent,
            request.requested_max_width,
        )
    }
}

/// Adapter the host calls for every media URL it builds.
pub struct MediaUrlProvider {
    resolver: BreakpointResolver,
}

impl MediaUrlProvider {
    pub fn new(resolver: BreakpointResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &BreakpointResolver {
        &self.resolver
    }

    /// Decide whether the rewrite applies to `item` and, if so, set
    /// `options.max_width` to the selected width. A zero selection leaves
    /// the options as the caller built them.
    ///
    /// When the returned selection asks for it, the caller must expire the
    /// cookie named by [`BreakpointResolver::cookie_name`] on its response.
    pub fn apply(
        &self,
        item: &MediaItem<'_>,
        request: &ImageRequest<'_>,
        options: &mut MediaUrlOptions,
    ) -> Dispatch {
        if let Some(reason) = self.skip_reason(item, request) {
            tracing::debug!(
                mime_type = item.mime_type,
                reason = reason.as_str(),
                "media url left untouched"
            );
            return Dispatch::Skipped(reason);
        }

        let selection = self.resolver.width_override(request);
        if selection.is_override() {
            options.max_width = selection.width;
        }
        Dispatch::Applied(selection)
    }

    fn skip_reason(&self, item: &MediaItem<'_>, request: &ImageRequest<'_>) -> Option<SkipReason> {
        if !item.mime_type.to_ascii_lowercase().contains("image") {
            return Some(SkipReason::NotAnImage);
        }

        let config = self.resolver.config();
        if !config.variant().is_extended() {
            return None;
        }
        if let Some(database) = config.database() {
            let matches = request
                .database
                .map_or(false, |db| db.eq_ignore_ascii_case(database));
            if !matches {
                return Some(SkipReason::DatabaseMismatch);
            }
        }
        if !request.page_mode.is_normal() {
            return Some(SkipReason::NotNormalMode);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Breakpoints, Config};

    fn provider(database: Option<&str>, variant: Variant) -> MediaUrlProvider {
        let config = Config::builder(Breakpoints::new([320, 768, 1280]).unwrap(), "resolution")
            .database(database.map(str::to_string))
            .variant(variant)
            .build()
            .unwrap();
        MediaUrlProvider::new(BreakpointResolver::new(config).unwrap())
    }

    fn request(cookie: Option<&str>) -> ImageRequest<'_> {
        ImageRequest {
            resolution_cookie: cookie,
            database: Some("web"),
            ..Default::default()
        }
    }

    #[test]
    fn non_images_are_skipped() {
        let p = provider(None, Variant::Extended);
        let mut options = MediaUrlOptions {
            max_width: 640,
            ..Default::default()
        };
        let d = p.apply(
            &MediaItem {
                mime_type: "application/pdf",
            },
            &request(Some("500")),
            &mut options,
        );
        assert_eq!(d, Dispatch::Skipped(SkipReason::NotAnImage));
        assert_eq!(options.max_width, 640);
    }

    #[test]
    fn images_get_rewritten() {
        let p = provider(None, Variant::Extended);
        let mut options = MediaUrlOptions::default();
        let d = p.apply(&MediaItem { mime_type: "image/jpeg" }, &request(Some("500")), &mut options);
        assert!(d.is_applied());
        assert_eq!(options.max_width, 768);
        assert_eq!(d.selection().map(|s| s.width), Some(768));
    }

    #[test]
    fn database_gate() {
        let p = provider(Some("web"), Variant::Extended);
        let image = MediaItem { mime_type: "IMAGE/PNG" };
        let mut options = MediaUrlOptions::default();

        let on_web = p.apply(&image, &request(Some("500")), &mut options);
        assert!(on_web.is_applied());

        let mut master = request(Some("500"));
        master.database = Some("master");
        assert_eq!(
            p.apply(&image, &master, &mut options),
            Dispatch::Skipped(SkipReason::DatabaseMismatch)
        );

        master.database = None;
        assert_eq!(
            p.apply(&image, &master, &mut options),
            Dispatch::Skipped(SkipReason::DatabaseMismatch)
        );
    }

    #[test]
    fn page_mode_gate() {
        let p = provider(None, Variant::Extended);
        let mut editing = request(Some("500"));
        editing.page_mode = PageMode::Edit;
        let mut options = MediaUrlOptions::default();
        assert_eq!(
            p.apply(&MediaItem { mime_type: "image/gif" }, &editing, &mut options),
            Dispatch::Skipped(SkipReason::NotNormalMode)
        );
        assert_eq!(options.max_width, 0);
    }

    #[test]
    fn legacy_has_no_gating() {
        let p = provider(Some("web"), Variant::Legacy);
        let mut req = request(Some("500"));
        req.database = Some("master");
        req.page_mode = PageMode::Preview;
        let mut options = MediaUrlOptions::default();
        let d = p.apply(&MediaItem { mime_type: "image/jpeg" }, &req, &mut options);
        assert!(d.is_applied());
        assert_eq!(options.max_width, 768);
    }

    #[test]
    fn mangled_cookie_reported_to_caller() {
        let p = provider(None, Variant::Extended);
        let mut options = MediaUrlOptions {
            max_width: 900,
            ..Default::default()
        };
        let d = p.apply(&MediaItem { mime_type: "image/jpeg" }, &request(Some("abc")), &mut options);
        assert_eq!(d.selection().map(|s| s.cookie), Some(CookieAction::Expire));
        assert_eq!(options.max_width, 900);
        assert_eq!(p.resolver().cookie_name(), "resolution");
    }
}
