//! Handler flows against an in-memory gateway.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pulse_cli::handlers;
use pulse_cli::presentation::render_dashboard;
use pulse_cli::{CliContext, CliError, bootstrap_with};
use pulse_core::{
    ChatTurnReply, ChatTurnRequest, DashboardSnapshot, DashboardState, GatewayError,
    GatewayResult, IntegrationStatus, OAuthInitiation, PulseSettings, RemoteGatewayPort,
};

#[derive(Default)]
struct ScriptedGateway {
    connected: bool,
    chat_fails: bool,
    calls: Mutex<Vec<&'static str>>,
}

impl ScriptedGateway {
    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteGatewayPort for ScriptedGateway {
    async fn send_chat_turn(&self, request: ChatTurnRequest) -> GatewayResult<ChatTurnReply> {
        self.record("chat");
        if self.chat_fails {
            return Err(GatewayError::Api {
                status: 500,
                message: Some("Failed to process chat message".to_string()),
            });
        }
        Ok(ChatTurnReply {
            response: Some(format!("You said {}", request.message)),
            function_calls: Some(1),
        })
    }

    async fn get_integration_status(&self) -> GatewayResult<IntegrationStatus> {
        self.record("status");
        if self.connected {
            Ok(IntegrationStatus {
                is_connected: true,
                is_active: Some(true),
                site_name: Some("acme".to_string()),
                ..IntegrationStatus::default()
            })
        } else {
            Err(GatewayError::NotFound {
                resource: "status".to_string(),
            })
        }
    }

    async fn initiate_oauth(&self) -> GatewayResult<OAuthInitiation> {
        self.record("connect");
        Ok(OAuthInitiation {
            authorization_url: Some("https://auth.atlassian.com/authorize?x=1".to_string()),
            state: Some("s".to_string()),
        })
    }

    async fn disconnect_integration(&self) -> GatewayResult<()> {
        self.record("disconnect");
        Ok(())
    }

    async fn get_dashboard_snapshot(&self) -> GatewayResult<DashboardSnapshot> {
        self.record("dashboard");
        Ok(DashboardSnapshot::default())
    }
}

fn context(gateway: Arc<ScriptedGateway>) -> CliContext {
    bootstrap_with(
        gateway,
        &PulseSettings::with_defaults(),
        "http://localhost:8000".to_string(),
    )
}

#[tokio::test]
async fn test_chat_respond_formats_reply_with_badge() {
    let ctx = context(Arc::new(ScriptedGateway::default()));

    let output = handlers::chat::respond(ctx.session().chat(), "hello")
        .await
        .unwrap();
    assert!(output.contains("(1 Jira call)"));
    assert!(output.ends_with("You said hello"));
    assert_eq!(ctx.session().chat().transcript().len(), 2);
}

#[tokio::test]
async fn test_chat_respond_ignores_blank_lines() {
    let gateway = Arc::new(ScriptedGateway::default());
    let ctx = context(gateway.clone());

    assert!(handlers::chat::respond(ctx.session().chat(), "   ").await.is_none());
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_ask_failure_is_an_error() {
    let ctx = context(Arc::new(ScriptedGateway {
        chat_fails: true,
        ..ScriptedGateway::default()
    }));

    let err = handlers::ask::execute(&ctx, &["hi".to_string()])
        .await
        .unwrap_err();
    let cli_err = err.downcast_ref::<CliError>().unwrap();
    assert_eq!(cli_err.exit_code(), 1);
    assert!(cli_err.to_string().contains("Failed to process chat message"));
}

#[tokio::test]
async fn test_dashboard_without_integration_prompts_to_connect() {
    let gateway = Arc::new(ScriptedGateway::default());
    let ctx = context(gateway.clone());

    handlers::dashboard::execute(&ctx).await.unwrap();
    assert_eq!(gateway.calls(), vec!["status"]);
}

#[tokio::test]
async fn test_dashboard_when_connected_fetches_snapshot() {
    let gateway = Arc::new(ScriptedGateway {
        connected: true,
        ..ScriptedGateway::default()
    });
    let ctx = context(gateway.clone());

    let session = ctx.session();
    let state = session.dashboard().load(session.lifecycle()).await;
    assert!(matches!(state, DashboardState::Ready(_)));
    assert!(render_dashboard(&state).starts_with("Dashboard"));
    assert_eq!(gateway.calls(), vec!["status", "dashboard"]);
}

#[tokio::test]
async fn test_confirmed_disconnect_refreshes_status() {
    let gateway = Arc::new(ScriptedGateway {
        connected: true,
        ..ScriptedGateway::default()
    });
    let ctx = context(gateway.clone());

    handlers::disconnect::execute(&ctx, true).await.unwrap();
    assert_eq!(gateway.calls(), vec!["disconnect", "status"]);
}

#[tokio::test]
async fn test_callback_rejects_unparseable_address() {
    let ctx = context(Arc::new(ScriptedGateway::default()));

    let err = handlers::callback::execute(&ctx, "not a url").await.unwrap_err();
    assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_callback_success_reconciles_once() {
    let gateway = Arc::new(ScriptedGateway {
        connected: true,
        ..ScriptedGateway::default()
    });
    let ctx = context(gateway.clone());

    handlers::callback::execute(
        &ctx,
        "http://localhost:3000/integrations?jira_connected=success&tab=jira",
    )
    .await
    .unwrap();
    assert_eq!(gateway.calls(), vec!["status", "status"]);
}

#[tokio::test]
async fn test_connect_prints_handoff() {
    let gateway = Arc::new(ScriptedGateway::default());
    let ctx = context(gateway.clone());

    handlers::connect::execute(&ctx).await.unwrap();
    assert_eq!(gateway.calls(), vec!["connect"]);
}
