//! Connection lifecycle manager for the Jira integration.
//!
//! Owns the last known `IntegrationStatus` and the client-local
//! "authorization in progress" flag, and derives `ConnectionState` from them.
//! All mutating actions are serialized behind one action lock: `connect` and
//! `disconnect` refuse to overlap (`LifecycleError::Busy`), while
//! `refresh_status` waits its turn so a reconciliation is never lost.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::integration::{NO_INTEGRATION_MESSAGE, STATUS_UNAVAILABLE_MESSAGE};
use crate::domain::{ConnectionState, IntegrationStatus};
use crate::ports::{GatewayError, OAuthInitiation, RemoteGatewayPort};
use crate::services::redirect::{RedirectOutcome, consume_redirect_marker};

/// Delay before re-reading status after an OAuth redirect, giving the
/// backend time to finish the token exchange.
pub const DEFAULT_RECONCILE_DELAY: Duration = Duration::from_millis(1000);

/// Errors reported by lifecycle actions.
///
/// The display strings are user-facing; the wrapped gateway error is only
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("Another integration action is already in progress")]
    Busy,

    #[error("Failed to initiate OAuth flow")]
    MissingAuthorizationUrl,

    #[error("Failed to initiate OAuth flow")]
    ConnectFailed(#[source] GatewayError),

    #[error("Failed to disconnect integration")]
    DisconnectFailed(#[source] GatewayError),
}

/// User answer to the "really disconnect?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Where the user has to go to authorize the integration.
///
/// Following this URL leaves the application; control only comes back via
/// the provider redirect, which starts a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationHandoff {
    pub authorization_url: String,
    pub state: Option<String>,
}

/// What happened while mounting the lifecycle on an inbound address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountReport {
    /// State after the initial status fetch.
    pub initial: ConnectionState,
    pub redirect: RedirectOutcome,
    /// State after the delayed reconciliation, if one ran.
    pub reconciled: Option<ConnectionState>,
}

impl MountReport {
    /// The most recent state observed during mount.
    #[must_use]
    pub fn current(&self) -> ConnectionState {
        self.reconciled.unwrap_or(self.initial)
    }
}

#[derive(Debug, Default)]
struct LinkState {
    status: Option<IntegrationStatus>,
    authorizing: bool,
}

/// Manages the Jira link for one session.
pub struct ConnectionLifecycle {
    gateway: Arc<dyn RemoteGatewayPort>,
    link: Mutex<LinkState>,
    actions: tokio::sync::Mutex<()>,
    reconcile_delay: Duration,
}

impl ConnectionLifecycle {
    /// Create a lifecycle in the `Unknown` state.
    pub fn new(gateway: Arc<dyn RemoteGatewayPort>) -> Self {
        Self {
            gateway,
            link: Mutex::new(LinkState::default()),
            actions: tokio::sync::Mutex::new(()),
            reconcile_delay: DEFAULT_RECONCILE_DELAY,
        }
    }

    /// Override the post-redirect reconciliation delay.
    #[must_use]
    pub const fn with_reconcile_delay(mut self, delay: Duration) -> Self {
        self.reconcile_delay = delay;
        self
    }

    /// Current derived state.
    pub fn state(&self) -> ConnectionState {
        let link = self.lock_link();
        ConnectionState::derive(link.status.as_ref(), link.authorizing)
    }

    /// Last status record, if any fetch has completed.
    pub fn status(&self) -> Option<IntegrationStatus> {
        self.lock_link().status.clone()
    }

    /// Re-read the status from the backend.
    ///
    /// Never fails: absence and errors both resolve to a disconnected record.
    pub async fn refresh_status(&self) -> ConnectionState {
        let _serial = self.actions.lock().await;
        self.refresh_locked().await
    }

    /// Start the OAuth flow.
    pub async fn connect(&self) -> Result<AuthorizationHandoff, LifecycleError> {
        let Ok(_serial) = self.actions.try_lock() else {
            return Err(LifecycleError::Busy);
        };

        self.lock_link().authorizing = true;
        let result = match self.gateway.initiate_oauth().await {
            Ok(OAuthInitiation {
                authorization_url: Some(url),
                state,
            }) if !url.trim().is_empty() => {
                info!("Jira authorization handoff ready");
                return Ok(AuthorizationHandoff {
                    authorization_url: url,
                    state,
                });
            }
            Ok(_) => {
                warn!("OAuth initiation returned no authorization URL");
                Err(LifecycleError::MissingAuthorizationUrl)
            }
            Err(err) => {
                warn!(error = %err, "Error initiating Jira OAuth");
                Err(LifecycleError::ConnectFailed(err))
            }
        };

        self.lock_link().authorizing = false;
        result
    }

    /// Remove the integration, then re-derive the state from the backend.
    ///
    /// Does nothing unless the user confirmed. A 404 from the backend means
    /// the link is already gone and counts as success.
    pub async fn disconnect(
        &self,
        confirmation: Confirmation,
    ) -> Result<ConnectionState, LifecycleError> {
        if confirmation == Confirmation::Declined {
            debug!("Disconnect declined by user");
            return Ok(self.state());
        }

        let Ok(_serial) = self.actions.try_lock() else {
            return Err(LifecycleError::Busy);
        };

        match self.gateway.disconnect_integration().await {
            Ok(()) => info!("Jira integration disconnected"),
            Err(err) if err.is_not_found() => {
                debug!("Jira integration already absent");
            }
            Err(err) => {
                warn!(error = %err, "Error disconnecting Jira integration");
                return Err(LifecycleError::DisconnectFailed(err));
            }
        }

        Ok(self.refresh_locked().await)
    }

    /// Initial load for a session that starts at `address`.
    ///
    /// Strips the OAuth redirect marker from `address`, fetches status, and
    /// after a successful redirect waits the reconciliation delay and fetches
    /// status exactly once more.
    pub async fn mount(&self, address: &mut Url) -> MountReport {
        let redirect = consume_redirect_marker(address);
        let initial = self.refresh_status().await;

        let reconciled = match redirect {
            RedirectOutcome::Connected => {
                debug!(
                    delay_ms = u64::try_from(self.reconcile_delay.as_millis()).unwrap_or(u64::MAX),
                    "Reconciling status after OAuth redirect"
                );
                tokio::time::sleep(self.reconcile_delay).await;
                Some(self.refresh_status().await)
            }
            RedirectOutcome::Failed => {
                warn!("OAuth redirect reported a failed token exchange");
                None
            }
            RedirectOutcome::Absent => None,
        };

        MountReport {
            initial,
            redirect,
            reconciled,
        }
    }

    async fn refresh_locked(&self) -> ConnectionState {
        let status = match self.gateway.get_integration_status().await {
            Ok(status) => status,
            Err(err) if err.is_not_found() => {
                debug!("No Jira integration for this user");
                IntegrationStatus::disconnected(NO_INTEGRATION_MESSAGE)
            }
            Err(err) => {
                warn!(error = %err, "Error fetching Jira integration status");
                IntegrationStatus::disconnected(STATUS_UNAVAILABLE_MESSAGE)
            }
        };

        // A fresh server record supersedes any local authorization hand-off.
        let mut link = self.lock_link();
        link.status = Some(status);
        link.authorizing = false;
        ConnectionState::derive(link.status.as_ref(), link.authorizing)
    }

    fn lock_link(&self) -> MutexGuard<'_, LinkState> {
        self.link.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DashboardSnapshot;
    use crate::ports::{ChatTurnReply, ChatTurnRequest, GatewayResult};
    use async_trait::async_trait;

    /// Serves queued status responses and counts calls.
    #[derive(Default)]
    struct StatusGateway {
        statuses: Mutex<Vec<GatewayResult<IntegrationStatus>>>,
        oauth: Mutex<Option<GatewayResult<OAuthInitiation>>>,
        disconnect: Mutex<Option<GatewayResult<()>>>,
        status_calls: Mutex<usize>,
        disconnect_calls: Mutex<usize>,
    }

    impl StatusGateway {
        fn with_statuses(statuses: Vec<GatewayResult<IntegrationStatus>>) -> Self {
            Self {
                statuses: Mutex::new(statuses),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl RemoteGatewayPort for StatusGateway {
        async fn send_chat_turn(&self, _request: ChatTurnRequest) -> GatewayResult<ChatTurnReply> {
            unimplemented!("not used by lifecycle tests")
        }

        async fn get_integration_status(&self) -> GatewayResult<IntegrationStatus> {
            *self.status_calls.lock().unwrap() += 1;
            let mut statuses = self.statuses.lock().unwrap();
            if statuses.is_empty() {
                Err(GatewayError::NotFound {
                    resource: "integration".to_string(),
                })
            } else {
                statuses.remove(0)
            }
        }

        async fn initiate_oauth(&self) -> GatewayResult<OAuthInitiation> {
            self.oauth
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(OAuthInitiation::default()))
        }

        async fn disconnect_integration(&self) -> GatewayResult<()> {
            *self.disconnect_calls.lock().unwrap() += 1;
            self.disconnect.lock().unwrap().take().unwrap_or(Ok(()))
        }

        async fn get_dashboard_snapshot(&self) -> GatewayResult<DashboardSnapshot> {
            unimplemented!("not used by lifecycle tests")
        }
    }

    fn connected() -> IntegrationStatus {
        IntegrationStatus {
            is_connected: true,
            is_active: Some(true),
            site_name: Some("acme".to_string()),
            ..IntegrationStatus::default()
        }
    }

    #[tokio::test]
    async fn test_unknown_before_first_fetch() {
        let lifecycle = ConnectionLifecycle::new(Arc::new(StatusGateway::default()));
        assert_eq!(lifecycle.state(), ConnectionState::Unknown);
        assert!(lifecycle.status().is_none());
    }

    #[tokio::test]
    async fn test_not_found_is_disconnected() {
        let lifecycle = ConnectionLifecycle::new(Arc::new(StatusGateway::default()));
        assert_eq!(lifecycle.refresh_status().await, ConnectionState::Disconnected);

        let status = lifecycle.status().unwrap();
        assert!(!status.effective_connected());
        assert_eq!(status.message.as_deref(), Some(NO_INTEGRATION_MESSAGE));
    }

    #[tokio::test]
    async fn test_failure_is_disconnected_with_diagnostic_message() {
        let gateway = StatusGateway::with_statuses(vec![Err(GatewayError::Network {
            message: "timed out".to_string(),
        })]);
        let lifecycle = ConnectionLifecycle::new(Arc::new(gateway));

        assert_eq!(lifecycle.refresh_status().await, ConnectionState::Disconnected);
        assert_eq!(
            lifecycle.status().unwrap().message.as_deref(),
            Some(STATUS_UNAVAILABLE_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_expired_token_state() {
        let expired = IntegrationStatus {
            is_token_expired: true,
            ..connected()
        };
        let lifecycle =
            ConnectionLifecycle::new(Arc::new(StatusGateway::with_statuses(vec![Ok(expired)])));
        assert_eq!(
            lifecycle.refresh_status().await,
            ConnectionState::ExpiredOrInactive
        );
    }

    #[tokio::test]
    async fn test_connect_hands_off_url() {
        let gateway = StatusGateway::default();
        *gateway.oauth.lock().unwrap() = Some(Ok(OAuthInitiation {
            authorization_url: Some("https://auth.atlassian.com/authorize?x=1".to_string()),
            state: Some("abc".to_string()),
        }));
        let lifecycle = ConnectionLifecycle::new(Arc::new(gateway));

        let handoff = lifecycle.connect().await.unwrap();
        assert_eq!(
            handoff.authorization_url,
            "https://auth.atlassian.com/authorize?x=1"
        );
        assert_eq!(handoff.state.as_deref(), Some("abc"));
        assert_eq!(lifecycle.state(), ConnectionState::PendingAuthorization);
    }

    #[tokio::test]
    async fn test_connect_without_url_fails_and_keeps_state() {
        let lifecycle = ConnectionLifecycle::new(Arc::new(StatusGateway::default()));
        lifecycle.refresh_status().await;

        let err = lifecycle.connect().await.unwrap_err();
        assert_eq!(err, LifecycleError::MissingAuthorizationUrl);
        assert_eq!(err.to_string(), "Failed to initiate OAuth flow");
        assert_eq!(lifecycle.state(), ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn test_declined_disconnect_makes_no_call() {
        let gateway = Arc::new(StatusGateway::with_statuses(vec![Ok(connected())]));
        let lifecycle = ConnectionLifecycle::new(gateway.clone());
        lifecycle.refresh_status().await;

        let state = lifecycle.disconnect(Confirmation::Declined).await.unwrap();
        assert_eq!(state, ConnectionState::Connected);
        assert_eq!(*gateway.disconnect_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_disconnect_refreshes_status() {
        let gateway = Arc::new(StatusGateway::with_statuses(vec![Ok(connected())]));
        let lifecycle = ConnectionLifecycle::new(gateway.clone());
        assert_eq!(lifecycle.refresh_status().await, ConnectionState::Connected);

        // Next status fetch falls through to 404.
        let state = lifecycle.disconnect(Confirmation::Confirmed).await.unwrap();
        assert_eq!(state, ConnectionState::Disconnected);
        assert_eq!(*gateway.status_calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_disconnect_tolerates_not_found() {
        let gateway = StatusGateway::default();
        *gateway.disconnect.lock().unwrap() = Some(Err(GatewayError::NotFound {
            resource: "integration".to_string(),
        }));
        let lifecycle = ConnectionLifecycle::new(Arc::new(gateway));

        let state = lifecycle.disconnect(Confirmation::Confirmed).await.unwrap();
        assert_eq!(state, ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn test_failed_disconnect_keeps_prior_status() {
        let gateway = Arc::new(StatusGateway::with_statuses(vec![Ok(connected())]));
        *gateway.disconnect.lock().unwrap() = Some(Err(GatewayError::Api {
            status: 500,
            message: None,
        }));
        let lifecycle = ConnectionLifecycle::new(gateway.clone());
        lifecycle.refresh_status().await;

        let err = lifecycle
            .disconnect(Confirmation::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to disconnect integration");
        assert_eq!(lifecycle.state(), ConnectionState::Connected);
        assert_eq!(*gateway.status_calls.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_reconciles_after_success_redirect() {
        let gateway = Arc::new(StatusGateway::with_statuses(vec![
            Err(GatewayError::NotFound {
                resource: "integration".to_string(),
            }),
            Ok(connected()),
        ]));
        let lifecycle = ConnectionLifecycle::new(gateway.clone());
        let mut address =
            Url::parse("http://localhost:3000/integrations?jira_connected=success").unwrap();

        let report = lifecycle.mount(&mut address).await;

        assert_eq!(report.initial, ConnectionState::Disconnected);
        assert_eq!(report.redirect, RedirectOutcome::Connected);
        assert_eq!(report.reconciled, Some(ConnectionState::Connected));
        assert_eq!(report.current(), ConnectionState::Connected);
        assert_eq!(*gateway.status_calls.lock().unwrap(), 2);
        assert!(address.query().is_none());
    }

    #[tokio::test]
    async fn test_mount_without_marker_fetches_once() {
        let gateway = Arc::new(StatusGateway::with_statuses(vec![Ok(connected())]));
        let lifecycle = ConnectionLifecycle::new(gateway.clone());
        let mut address = Url::parse("http://localhost:3000/integrations").unwrap();

        let report = lifecycle.mount(&mut address).await;

        assert_eq!(report.redirect, RedirectOutcome::Absent);
        assert_eq!(report.reconciled, None);
        assert_eq!(*gateway.status_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mount_with_error_marker_does_not_reconcile() {
        let gateway = Arc::new(StatusGateway::default());
        let lifecycle = ConnectionLifecycle::new(gateway.clone());
        let mut address =
            Url::parse("http://localhost:3000/integrations?jira_connected=error").unwrap();

        let report = lifecycle.mount(&mut address).await;

        assert_eq!(report.redirect, RedirectOutcome::Failed);
        assert_eq!(report.reconciled, None);
        assert_eq!(*gateway.status_calls.lock().unwrap(), 1);
        assert!(address.query().is_none());
    }
}
