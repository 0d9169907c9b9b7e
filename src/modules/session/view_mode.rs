use url::Url;

//
// ──────────────────────────────────────────────────────────
// View mode
// ──────────────────────────────────────────────────────────
//
// Two states, resolved exactly once from the navigation location when the
// session opens. `Edit` is the default; `View` means the session renders a
// read-only published snapshot. The mode never changes for the lifetime of
// the session — reopening is the only transition.
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Edit,
    View { slug: String },
}

impl ViewMode {
    pub fn is_view(&self) -> bool {
        matches!(self, ViewMode::View { .. })
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            ViewMode::View { slug } => Some(slug),
            ViewMode::Edit => None,
        }
    }
}

// Path segments owned by the application router; a location like
// `/profile` is an app page, not a published portfolio.
const RESERVED_ROUTES: [&str; 5] = ["templates", "create", "edit", "profile", "portfolio"];

/// Derive the session mode from a navigation location.
///
/// Recognized published-slug markers, in precedence order (all forms are
/// kept working because previously generated links use different ones):
/// - `?share={slug}` query parameter
/// - `/portfolio/{slug}` path
/// - bare `/{slug}` single segment that is not a reserved route
pub fn resolve(location: &Url) -> ViewMode {
    if let Some(slug) = location
        .query_pairs()
        .find(|(key, _)| key == "share")
        .map(|(_, value)| value.into_owned())
    {
        if !slug.is_empty() {
            return ViewMode::View { slug };
        }
    }

    let segments: Vec<&str> = location
        .path_segments()
        .map(|parts| parts.filter(|part| !part.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        ["portfolio", slug, ..] => ViewMode::View {
            slug: (*slug).to_string(),
        },
        [slug] if !RESERVED_ROUTES.contains(slug) => ViewMode::View {
            slug: (*slug).to_string(),
        },
        _ => ViewMode::Edit,
    }
}
