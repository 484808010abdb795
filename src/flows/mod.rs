//! Self-contained marketplace flows. The host application picks one per
//! view, hands it the gateway plus context, and hears back only through
//! `MarketplaceHost` callbacks.

pub mod dashboard;
pub mod feed;
pub mod invite;

pub use dashboard::CreatorDashboard;
pub use feed::FeedController;
pub use invite::{InviteFlow, InviteState};
