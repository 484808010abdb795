//! Marketplace gateway abstraction and host-side collaborator traits.

pub mod http;

pub use http::HttpGateway;

use crate::analytics::CreatorAnalytics;
use crate::error::MarketResult;
use crate::post::FeedPost;
use crate::program::{CustomProgramRecord, ProgramSummary};

/// Remote marketplace boundary: program discovery, subscriptions, feeds
/// and analytics. Implementations own transport and serialization.
pub trait MarketplaceGateway: Send + Sync {
    /// Resolve an opaque invite token to at most one program.
    /// `Ok(None)` means invalid/expired; resolution failure is terminal
    /// for that token.
    fn resolve_invite(&self, token: &str) -> MarketResult<Option<ProgramSummary>>;

    /// Create a subscription between the current user and a program.
    fn subscribe(&self, program_id: i64) -> MarketResult<()>;

    /// Fetch the raw post collection for a program. An empty feed is an
    /// empty vector, not an error.
    fn get_feed(&self, program_id: i64) -> MarketResult<Vec<FeedPost>>;

    /// Append a message to a program's feed.
    fn post_to_feed(&self, program_id: i64, message: &str) -> MarketResult<()>;

    /// Richer creator analytics. `Ok(None)` means the gateway does not
    /// support the capability; callers must treat that as a defined
    /// outcome, not a crash.
    fn get_analytics(&self) -> MarketResult<Option<CreatorAnalytics>> {
        Ok(None)
    }

    /// Programs the current creator has published.
    fn my_published(&self) -> MarketResult<Vec<ProgramSummary>>;
}

/// Callbacks a host application supplies to the flows. All default to
/// no-ops so hosts only implement what they care about.
pub trait MarketplaceHost {
    fn on_back(&mut self) {}
    fn on_joined(&mut self, _program: &ProgramSummary) {}
    fn on_select_program(&mut self, _program: &ProgramSummary) {}
}

/// No-op host for flows driven without callbacks (tests, scripts).
pub struct NullHost;

impl MarketplaceHost for NullHost {}

/// Local-persistence collaborator: keeps copies of joined programs so
/// they remain usable offline. Best-effort cache, never required for a
/// join to succeed.
pub trait ProgramCache {
    fn save_custom_program(&self, record: &CustomProgramRecord) -> MarketResult<()>;
}
