//! Responsive viewport queries.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Whether the viewport currently matches the collapsed-navbar media query.
///
/// Outside a browser this is always `false`, i.e. desktop layout.
pub fn is_narrow_viewport() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| {
                w.match_media(crate::consts::NARROW_VIEWPORT_QUERY)
                    .ok()
                    .flatten()
            })
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
