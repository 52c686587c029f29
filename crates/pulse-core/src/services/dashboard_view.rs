//! Dashboard loading, gated on the integration link.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::{ConnectionState, DashboardSnapshot};
use crate::ports::RemoteGatewayPort;
use crate::services::ConnectionLifecycle;

/// Shown when the snapshot fetch fails for a reason other than absence.
pub const DASHBOARD_UNAVAILABLE_MESSAGE: &str =
    "Unable to load dashboard data. Please try refreshing the page.";

/// What the dashboard should render.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// No usable integration; ask the user to connect.
    ConnectPrompt,
    /// The snapshot could not be loaded.
    Unavailable { message: String },
    Ready(Arc<DashboardSnapshot>),
}

/// Loads and holds the latest dashboard snapshot.
///
/// Each successful load replaces the held snapshot whole.
pub struct DashboardView {
    gateway: Arc<dyn RemoteGatewayPort>,
    snapshot: Mutex<Option<Arc<DashboardSnapshot>>>,
}

impl DashboardView {
    pub fn new(gateway: Arc<dyn RemoteGatewayPort>) -> Self {
        Self {
            gateway,
            snapshot: Mutex::new(None),
        }
    }

    /// Refresh the link status, then load the dashboard for the result.
    pub async fn load(&self, lifecycle: &ConnectionLifecycle) -> DashboardState {
        let state = lifecycle.refresh_status().await;
        self.load_for(state).await
    }

    /// Load the dashboard given an already-derived connection state.
    ///
    /// The snapshot is only requested while the link is usable.
    pub async fn load_for(&self, state: ConnectionState) -> DashboardState {
        if !state.is_connected() {
            debug!(%state, "Dashboard skipped: integration not usable");
            self.clear();
            return DashboardState::ConnectPrompt;
        }

        match self.gateway.get_dashboard_snapshot().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                *self.lock_snapshot() = Some(Arc::clone(&snapshot));
                DashboardState::Ready(snapshot)
            }
            Err(err) if err.is_not_found() => {
                debug!("Dashboard reports no integration");
                self.clear();
                DashboardState::ConnectPrompt
            }
            Err(err) => {
                warn!(error = %err, "Error fetching dashboard data");
                self.clear();
                DashboardState::Unavailable {
                    message: DASHBOARD_UNAVAILABLE_MESSAGE.to_string(),
                }
            }
        }
    }

    /// Last successfully loaded snapshot.
    pub fn snapshot(&self) -> Option<Arc<DashboardSnapshot>> {
        self.lock_snapshot().clone()
    }

    pub fn clear(&self) {
        *self.lock_snapshot() = None;
    }

    fn lock_snapshot(&self) -> MutexGuard<'_, Option<Arc<DashboardSnapshot>>> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
