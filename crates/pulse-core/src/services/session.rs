//! `PulseSession` - the composition root for one user session.
//!
//! Front ends build a gateway adapter, hand it to `PulseSession::new` with
//! validated settings, and reach every service through the accessors.

use std::sync::Arc;

use crate::ports::RemoteGatewayPort;
use crate::settings::PulseSettings;

use super::{ChatOrchestrator, ConnectionLifecycle, DashboardView};

/// Session facade.
///
/// All services share one gateway; each owns its own state for the
/// lifetime of the session.
pub struct PulseSession {
    chat: ChatOrchestrator,
    lifecycle: ConnectionLifecycle,
    dashboard: DashboardView,
}

impl PulseSession {
    /// Wire the services from `settings`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let gateway: Arc<dyn RemoteGatewayPort> = Arc::new(client);
    /// let session = PulseSession::new(gateway, &PulseSettings::with_defaults());
    /// let state = session.lifecycle().refresh_status().await;
    /// ```
    pub fn new(gateway: Arc<dyn RemoteGatewayPort>, settings: &PulseSettings) -> Self {
        let mut chat = ChatOrchestrator::new(Arc::clone(&gateway))
            .with_history_window(settings.history_window);
        if let Some(greeting) = settings.greeting.as_deref() {
            chat = chat.with_greeting(greeting);
        }

        Self {
            chat,
            lifecycle: ConnectionLifecycle::new(Arc::clone(&gateway))
                .with_reconcile_delay(settings.reconcile_delay()),
            dashboard: DashboardView::new(gateway),
        }
    }

    pub const fn chat(&self) -> &ChatOrchestrator {
        &self.chat
    }

    pub const fn lifecycle(&self) -> &ConnectionLifecycle {
        &self.lifecycle
    }

    pub const fn dashboard(&self) -> &DashboardView {
        &self.dashboard
    }
}
