//! Wall-clock milliseconds since the Unix epoch.

/// `Date.now()` in the browser, `SystemTime` elsewhere.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default()
    }
}
