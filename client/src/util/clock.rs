//! Calendar year for copy that counts from the founding year.

/// Current calendar year: browser clock after hydration, UTC on the server.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(listings::content::COMPANY_FOUNDING_YEAR)
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        time::OffsetDateTime::now_utc().year()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        listings::content::COMPANY_FOUNDING_YEAR
    }
}
