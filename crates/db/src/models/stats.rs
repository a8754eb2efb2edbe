//! Dashboard aggregate over the project collection.

use anken_core::pricing::{format_revenue, sum_prices};
use anken_core::schedule::is_urgent;
use anken_core::status::AnkenStatus;
use anken_core::types::Timestamp;
use serde::Serialize;

use crate::models::anken::Anken;

/// Summary figures shown on the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnkenStats {
    #[serde(rename = "totalProjects")]
    pub total_count: usize,
    /// Projects with status in-progress.
    #[serde(rename = "activeProjects")]
    pub active_count: usize,
    /// Projects whose end date falls within the next 30 days.
    #[serde(rename = "urgentProjects")]
    pub urgent_count: usize,
    /// Sum of in-progress prices, rendered like `"¥7.5M"`.
    #[serde(rename = "monthlyRevenue")]
    pub monthly_revenue: String,
}

impl AnkenStats {
    /// Compute the aggregate over `items` as of `now`.
    ///
    /// Unparseable end dates and prices are excluded or counted as zero
    /// rather than failing the aggregate.
    pub fn compute(items: &[Anken], now: Timestamp) -> Self {
        let in_progress = Some(AnkenStatus::InProgress.id());

        let active_count = items
            .iter()
            .filter(|a| a.fields.status == in_progress)
            .count();

        let urgent_count = items
            .iter()
            .filter(|a| is_urgent(a.fields.end_date.as_deref(), now))
            .count();

        let revenue = sum_prices(
            items
                .iter()
                .filter(|a| a.fields.status == in_progress)
                .filter_map(|a| a.fields.price.as_deref()),
        );

        AnkenStats {
            total_count: items.len(),
            active_count,
            urgent_count,
            monthly_revenue: format_revenue(revenue),
        }
    }
}
