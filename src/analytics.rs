//! Creator analytics — derived aggregation over published programs, plus
//! the optional richer payload some gateways provide.

use serde::{Deserialize, Serialize};

use crate::program::ProgramSummary;

/// Richer analytics payload fetched from the gateway when the capability
/// exists. Absence of the capability is a defined outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorAnalytics {
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub joins_this_month: u32,
    #[serde(default)]
    pub engagement: Vec<ProgramEngagement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramEngagement {
    pub program_id: i64,
    #[serde(default)]
    pub active_subscribers: u32,
    #[serde(default)]
    pub posts_last_week: u32,
}

/// Derived totals computed client-side from the published set. Never
/// persisted; recomputed on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsAggregate {
    pub total_subscribers: u32,
    pub total_ratings: u32,
    pub avg_rating: f64,
    /// Maximum subscriber count across programs, floored at 1 so bar
    /// widths always have a non-zero divisor.
    pub max_subscribers: u32,
}

/// Aggregate a creator's published programs. Missing counts contribute 0;
/// the average divides by the number of programs that actually carry a
/// rating (a zero rating counts as unrated).
pub fn aggregate(programs: &[ProgramSummary]) -> AnalyticsAggregate {
    let total_subscribers = programs.iter().map(|p| p.subscriber_count).sum();
    let total_ratings = programs.iter().map(|p| p.rating_count).sum();

    let rating_sum: f64 = programs.iter().filter_map(|p| p.avg_rating).sum();
    let rated_count = programs.iter().filter(|p| p.display_rating().is_some()).count();
    let avg_rating = if rated_count == 0 {
        0.0
    } else {
        rating_sum / rated_count as f64
    };

    let max_subscribers = programs
        .iter()
        .map(|p| p.subscriber_count)
        .max()
        .unwrap_or(0)
        .max(1);

    AnalyticsAggregate {
        total_subscribers,
        total_ratings,
        avg_rating,
        max_subscribers,
    }
}

/// Engagement bar width as a percentage of the widest bar.
pub fn bar_width_pct(subscriber_count: u32, max_subscribers: u32) -> f64 {
    subscriber_count as f64 / max_subscribers.max(1) as f64 * 100.0
}
