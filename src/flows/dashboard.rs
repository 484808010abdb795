//! Creator analytics dashboard: pure aggregation over the creator's
//! published programs plus an optional richer gateway fetch.

use crate::analytics::{aggregate, AnalyticsAggregate, CreatorAnalytics};
use crate::gateway::{MarketplaceGateway, MarketplaceHost};
use crate::policy::{log_silent, GatewayOp};
use crate::program::ProgramSummary;

pub struct CreatorDashboard {
    published: Vec<ProgramSummary>,
    analytics: Option<CreatorAnalytics>,
    loading: bool,
}

impl CreatorDashboard {
    /// Build the dashboard over a caller-supplied published set.
    pub fn new(published: Vec<ProgramSummary>) -> Self {
        Self {
            published,
            analytics: None,
            loading: false,
        }
    }

    /// Fetch the published set from the gateway, then build the dashboard.
    pub fn from_gateway(gateway: &dyn MarketplaceGateway) -> crate::MarketResult<Self> {
        Ok(Self::new(gateway.my_published()?))
    }

    pub fn published(&self) -> &[ProgramSummary] {
        &self.published
    }

    pub fn analytics(&self) -> Option<&CreatorAnalytics> {
        self.analytics.as_ref()
    }

    /// The dashboard renders even with zero programs: stat cards show
    /// zeros and the host shows a dedicated empty-state for the list
    /// section only.
    pub fn is_empty(&self) -> bool {
        self.published.is_empty()
    }

    /// Optional richer analytics. An unsupported capability or a thrown
    /// error is non-fatal: logged, and previously fetched values stay in
    /// place (silent-log policy).
    pub fn load_analytics(&mut self, gateway: &dyn MarketplaceGateway) {
        if self.loading {
            return;
        }
        self.loading = true;
        match gateway.get_analytics() {
            Ok(Some(analytics)) => self.analytics = Some(analytics),
            Ok(None) => {
                tracing::debug!("Gateway does not support creator analytics");
            }
            Err(e) => {
                log_silent(GatewayOp::GetAnalytics, &e);
            }
        }
        self.loading = false;
    }

    /// Derived totals for the stat cards, recomputed on demand.
    pub fn stats(&self) -> AnalyticsAggregate {
        aggregate(&self.published)
    }

    /// Engagement bar width for one published program, as a percentage
    /// of the widest bar.
    pub fn bar_width(&self, program: &ProgramSummary) -> f64 {
        crate::analytics::bar_width_pct(program.subscriber_count, self.stats().max_subscribers)
    }

    /// Hand a program to the host (e.g. to open its feed).
    pub fn select_program(&self, index: usize, host: &mut dyn MarketplaceHost) {
        if let Some(program) = self.published.get(index) {
            host.on_select_program(program);
        }
    }
}
