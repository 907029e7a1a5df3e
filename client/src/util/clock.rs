//! Wall-clock access for display-only dates.

/// Current calendar year from the browser clock.
///
/// Returns `None` outside the browser. Callers read it from an effect so
/// SSR and hydration markup agree.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
