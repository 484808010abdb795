//! Named failure policy per gateway operation.
//!
//! Some operations surface their failures to the user (resolve, subscribe);
//! others are fire-and-forget and only log (feed load, feed post,
//! analytics). Making the mapping explicit lets tests assert which
//! operations are allowed to fail invisibly.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOp {
    ResolveInvite,
    Subscribe,
    GetFeed,
    PostToFeed,
    GetAnalytics,
    MyPublished,
}

impl GatewayOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolveInvite => "resolve_invite",
            Self::Subscribe => "subscribe",
            Self::GetFeed => "get_feed",
            Self::PostToFeed => "post_to_feed",
            Self::GetAnalytics => "get_analytics",
            Self::MyPublished => "my_published",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Failure produces a user-visible message and a retry affordance.
    UserVisible,
    /// Failure is logged via tracing and otherwise swallowed.
    SilentLog,
}

pub fn failure_policy(op: GatewayOp) -> FailurePolicy {
    match op {
        GatewayOp::ResolveInvite | GatewayOp::Subscribe | GatewayOp::MyPublished => {
            FailurePolicy::UserVisible
        }
        GatewayOp::GetFeed | GatewayOp::PostToFeed | GatewayOp::GetAnalytics => {
            FailurePolicy::SilentLog
        }
    }
}

/// Log a failure under the silent-log policy. Operations with a
/// user-visible policy surface their message through flow state instead.
pub fn log_silent(op: GatewayOp, err: &crate::error::MarketError) {
    debug_assert_eq!(failure_policy(op), FailurePolicy::SilentLog);
    tracing::warn!(op = op.as_str(), error = %err, "Gateway operation failed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_visible_operations() {
        assert_eq!(failure_policy(GatewayOp::ResolveInvite), FailurePolicy::UserVisible);
        assert_eq!(failure_policy(GatewayOp::Subscribe), FailurePolicy::UserVisible);
        assert_eq!(failure_policy(GatewayOp::MyPublished), FailurePolicy::UserVisible);
    }

    #[test]
    fn test_silent_log_operations() {
        assert_eq!(failure_policy(GatewayOp::GetFeed), FailurePolicy::SilentLog);
        assert_eq!(failure_policy(GatewayOp::PostToFeed), FailurePolicy::SilentLog);
        assert_eq!(failure_policy(GatewayOp::GetAnalytics), FailurePolicy::SilentLog);
    }
}
