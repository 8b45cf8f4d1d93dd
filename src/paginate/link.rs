//! Page link construction.

/// Link target for page `index` under `base`.
///
/// The first page lives at `base` itself; later pages append their
/// number as a path segment (`/blog` → `/blog/2`, `/blog/3`, ...).
///
/// Any `index < 2` maps to `base`, so index `0` also yields the first
/// page even though pages are 1-based.
pub fn page_link(base: &str, index: usize) -> String {
    if index < 2 {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), index)
}
