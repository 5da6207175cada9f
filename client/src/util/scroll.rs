//! Window scroll helpers for the navbar and in-page anchors.

/// Current vertical scroll offset in CSS pixels, `0.0` on the server.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll to the element named by a `#fragment` href.
///
/// Returns `true` when a target was found. Non-fragment hrefs are left for
/// the browser to follow.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return false;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        let behavior = if crate::util::motion::prefers_reduced_motion() {
            web_sys::ScrollBehavior::Auto
        } else {
            web_sys::ScrollBehavior::Smooth
        };
        opts.set_behavior(behavior);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
