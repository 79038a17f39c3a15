use chrono::{SecondsFormat, Utc};

/// Current UTC wall clock as ISO-8601 with a trailing `Z`.
///
/// Every timestamp the API emits goes through here so all surfaces format
/// identically.
pub fn utc_now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
