// In-page navigation decisions, kept apart from the DOM calls that act on them.

/// How a resolved anchor target is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Fade the overlay in, jump at full cover, fade out.
    Overlay,
    /// Smooth `scrollIntoView`, block start.
    SmoothScroll,
}

pub fn navigation_for(has_overlay: bool, reduced_motion: bool) -> Navigation {
    if has_overlay && !reduced_motion {
        Navigation::Overlay
    } else {
        Navigation::SmoothScroll
    }
}

/// Selector for an in-page link; `None` for a bare `#` or anything that is
/// not a fragment.
pub fn anchor_selector(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return None;
    }
    Some(href)
}

/// Resolve `href` through `find`; missing targets come back as `None`.
pub fn anchor_target<T>(href: &str, find: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    anchor_selector(href).and_then(find)
}

/// Source to load into an image entering the viewport. Images without a
/// usable `data-src` keep what they have.
pub fn lazy_source(is_intersecting: bool, data_src: Option<String>) -> Option<String> {
    if !is_intersecting {
        return None;
    }
    data_src.filter(|s| !s.trim().is_empty())
}
