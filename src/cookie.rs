use crate::types::Variant;

/// Parsed value of the resolution cookie written by [`client_script`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionCookie {
    /// Largest screen dimension in CSS pixels.
    pub width: u32,
    /// Device pixel ratio, always at least 1.
    pub density: u32,
}

impl ResolutionCookie {
    /// Parse `"<width>"` or `"<width>,<density>"`.
    ///
    /// Returns `None` when the width token is not a non-negative integer (a
    /// mangled cookie). A missing, zero or unparsable density becomes 1, and
    /// the legacy variant ignores the density token altogether.
    pub fn parse(raw: &str, variant: Variant) -> Option<Self> {
        let mut tokens = raw.split(',').map(str::trim);
        let width = tokens.next()?.parse::<u32>().ok()?;
        let density = match variant {
            Variant::Legacy => 1,
            Variant::Extended => tokens
                .next()
                .and_then(|d| d.parse::<u32>().ok())
                .filter(|&d| d > 0)
                .unwrap_or(1),
        };
        Some(Self { width, density })
    }
}

/// One-line script that records the client's screen size in a session
/// cookie on path `/`. Hosts inject it at the top of `<head>` so it runs
/// before anything requests an image.
pub fn client_script(cookie_name: &str, variant: Variant) -> String {
    let density = match variant {
        Variant::Legacy => "",
        Variant::Extended => "+','+(window.devicePixelRatio||1)",
    };
    format!(
        "document.cookie='{}='+Math.max(screen.width,screen.height){}+'; path=/';",
        cookie_name, density
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_only() {
        assert_eq!(
            ResolutionCookie::parse("1024", Variant::Extended),
            Some(ResolutionCookie {
                width: 1024,
                density: 1
            })
        );
    }

    #[test]
    fn width_and_density() {
        assert_eq!(
            ResolutionCookie::parse(" 375 , 3", Variant::Extended),
            Some(ResolutionCookie {
                width: 375,
                density: 3
            })
        );
    }

    #[test]
    fn bad_density_defaults_to_one() {
        for raw in ["375,", "375,x", "375,1.5", "375,0", "375,-2"] {
            assert_eq!(
                ResolutionCookie::parse(raw, Variant::Extended).map(|c| c.density),
                Some(1),
                "cookie {:?}",
                raw
            );
        }
    }

    #[test]
    fn legacy_ignores_density() {
        assert_eq!(
            ResolutionCookie::parse("375,3", Variant::Legacy),
            Some(ResolutionCookie {
                width: 375,
                density: 1
            })
        );
    }

    #[test]
    fn mangled_width() {
        for raw in ["abc", "", ",2", "-5", "12px"] {
            assert_eq!(ResolutionCookie::parse(raw, Variant::Extended), None, "cookie {:?}", raw);
        }
    }

    #[test]
    fn scripts() {
        assert_eq!(
            client_script("resolution", Variant::Legacy),
            "document.cookie='resolution='+Math.max(screen.width,screen.height)+'; path=/';"
        );
        assert_eq!(
            client_script("res", Variant::Extended),
            "document.cookie='res='+Math.max(screen.width,screen.height)+','+(window.devicePixelRatio||1)+'; path=/';"
        );
    }
}
