// === SQLite Tuning ===
pub const SQLITE_BUSY_TIMEOUT_MS: u32 = 5_000;

// === Gateway ===
pub const GATEWAY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_GATEWAY_URL: &str = "https://api.fitmarket.app/v1";

// === Feed ===
pub const MAX_POST_LENGTH: usize = 2_000;

// === User-facing fallback messages ===
pub const MSG_NO_INVITE_TOKEN: &str = "No invite token provided";
pub const MSG_INVALID_INVITE: &str = "This invite link is invalid or has expired";
pub const MSG_JOIN_FAILED: &str = "Could not join this program. Please try again";

// === Schema ===
pub const SCHEMA_VERSION: u32 = 1;

/// Truncate a string at a char boundary (never panics mid-UTF-8).
pub fn truncate_safe(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
