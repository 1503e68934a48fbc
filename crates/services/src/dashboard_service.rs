use std::sync::Arc;

use tracing::{debug, warn};

use backpack_core::model::{UserProfile, UserStatistics};

use crate::api::{AuthApi, StatsApi};
use crate::error::CatalogError;

/// Everything the dashboard renders in one value.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub user: UserProfile,
    pub statistics: UserStatistics,
}

/// Profile and statistics for the dashboard, fetched in parallel.
#[derive(Clone)]
pub struct DashboardService {
    auth: Arc<dyn AuthApi>,
    stats: Arc<dyn StatsApi>,
}

impl DashboardService {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, stats: Arc<dyn StatsApi>) -> Self {
        Self { auth, stats }
    }

    /// Fan out to `/auth/me` and the statistics endpoint, then merge.
    ///
    /// The profile is load-bearing (its failure is the view's failure, and a
    /// 401 sends the user back to login); statistics degrade to zeroes so
    /// the banner still greets the user.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the profile fetch fails.
    pub async fn overview(&self) -> Result<DashboardData, CatalogError> {
        debug!("loading dashboard overview");
        let (user, statistics) = tokio::join!(self.auth.current_user(), self.stats.statistics());

        let user = user?;
        let statistics = match statistics {
            Ok(statistics) => statistics,
            Err(err) => {
                warn!("statistics unavailable, rendering empty tiles: {err}");
                UserStatistics::default()
            }
        };

        Ok(DashboardData { user, statistics })
    }
}
