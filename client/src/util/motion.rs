//! Reduced-motion preference.

/// `true` when the visitor asked the OS to minimise animation.
///
/// Always `false` on the server; cosmetic animations are decided in the
/// browser after hydration.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
