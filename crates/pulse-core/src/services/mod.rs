//! Core services - the session's behaviour layer.
//!
//! Services orchestrate between the gateway port and domain logic. They
//! don't know about concrete adapters and never surface transport errors
//! raw: every failure is turned into a transcript turn, a derived state or
//! a `LifecycleError` with a user-facing message.

mod busy;
mod chat_orchestrator;
mod connection_lifecycle;
mod dashboard_view;
mod redirect;
mod session;

pub use busy::{BusyGuard, BusyLatch};
pub use chat_orchestrator::{
    ChatOrchestrator, DEFAULT_GREETING, EMPTY_REPLY_FALLBACK, IgnoreReason, SEND_FAILURE_FALLBACK,
    SubmitOutcome,
};
pub use connection_lifecycle::{
    AuthorizationHandoff, Confirmation, ConnectionLifecycle, DEFAULT_RECONCILE_DELAY,
    LifecycleError, MountReport,
};
pub use dashboard_view::{DASHBOARD_UNAVAILABLE_MESSAGE, DashboardState, DashboardView};
pub use redirect::{REDIRECT_MARKER_PARAM, RedirectOutcome, consume_redirect_marker};
pub use session::PulseSession;
