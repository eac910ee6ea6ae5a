//! Wall-clock helpers.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Current time in milliseconds since the Unix epoch. Uses `Date.now()` in
/// the browser.
pub fn now_millis() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Today's UTC date as `YYYY-MM-DD`, the format the subscription service
/// expects for `start_date`. `None` only if the clock is out of range.
pub fn today_iso() -> Option<String> {
    iso_date_from_millis(now_millis())
}

/// Format the UTC calendar date containing `millis`.
pub fn iso_date_from_millis(millis: i64) -> Option<String> {
    let date = OffsetDateTime::from_unix_timestamp(millis.div_euclid(1000)).ok()?;
    date.format(format_description!("[year]-[month]-[day]")).ok()
}
