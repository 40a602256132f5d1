use std::sync::Arc;

use models::LeaderInput;
use service::gate::{AdminGate, AdminView};
use service::screens::LoadState;
use service::session::{FileTokenStore, MemoryTokenStore};
use service::{ApiClient, Session};

#[tokio::test]
async fn starts_on_login_without_a_token() -> anyhow::Result<()> {
    let server = testkit::spawn().await?;
    let gate = AdminGate::new(Arc::new(ApiClient::new(server.base_url(), Session::in_memory()))).await?;
    assert!(!gate.is_authenticated());
    let form = gate.login_form().ok_or_else(|| anyhow::anyhow!("expected the login form"))?;
    assert_eq!(form.username, "admin");
    assert_eq!(form.error, None);
    Ok(())
}

#[tokio::test]
async fn stored_token_opens_the_dashboard() -> anyhow::Result<()> {
    let server = testkit::spawn().await?;
    let token = server.state.issue_token().await;
    let session = Session::new(Arc::new(MemoryTokenStore::with_token(token)));
    let gate = AdminGate::new(Arc::new(ApiClient::new(server.base_url(), session))).await?;
    assert!(matches!(gate.view(), AdminView::Dashboard(_)));
    Ok(())
}

#[tokio::test]
async fn wrong_password_stays_on_login() -> anyhow::Result<()> {
    let server = testkit::spawn().await?;
    let mut gate = AdminGate::new(Arc::new(ApiClient::new(server.base_url(), Session::in_memory()))).await?;

    let err = gate.login("admin", "guess").await;
    assert_eq!(err.map_err(|e| e.to_string()).err().as_deref(), Some("Login failed"));
    assert!(!gate.is_authenticated());
    assert_eq!(gate.login_form().and_then(|f| f.error.clone()).as_deref(), Some("Login failed"));
    Ok(())
}

#[tokio::test]
async fn empty_token_response_stays_on_login() -> anyhow::Result<()> {
    let server = testkit::spawn().await?;
    server.state.blank_login_token(true);
    let api = Arc::new(ApiClient::new(server.base_url(), Session::in_memory()));
    let mut gate = AdminGate::new(Arc::clone(&api)).await?;

    assert!(gate.login("admin", "change-me").await.is_err());
    assert!(!gate.is_authenticated());
    assert!(!api.session().is_authenticated().await?);
    assert_eq!(gate.login_form().and_then(|f| f.error.clone()).as_deref(), Some("Login failed"));
    Ok(())
}

#[tokio::test]
async fn login_mounts_a_dashboard_that_loads() -> anyhow::Result<()> {
    let server = testkit::spawn().await?;
    server.state.seed::<models::Leader>(LeaderInput { name: "Ada".into(), ..Default::default() }).await;
    let mut gate = AdminGate::new(Arc::new(ApiClient::new(server.base_url(), Session::in_memory()))).await?;

    gate.login("admin", "change-me").await?;
    let dashboard = gate.dashboard().ok_or_else(|| anyhow::anyhow!("expected the dashboard"))?;
    dashboard.load_all().await;

    assert_eq!(dashboard.leaders.snapshot().load, LoadState::Loaded);
    assert_eq!(dashboard.leaders.items().len(), 1);
    assert_eq!(dashboard.tickets.snapshot().load, LoadState::Loaded);
    // no about record yet
    assert_eq!(dashboard.about.snapshot().load, LoadState::LoadError("Failed to fetch about".into()));
    Ok(())
}

#[tokio::test]
async fn logout_clears_the_token_and_the_screens() -> anyhow::Result<()> {
    let server = testkit::spawn().await?;
    let api = Arc::new(ApiClient::new(server.base_url(), Session::in_memory()));
    let mut gate = AdminGate::new(Arc::clone(&api)).await?;
    gate.login("admin", "change-me").await?;

    if let Some(d) = gate.dashboard() {
        d.leaders.load().await?;
        d.leaders.begin_create();
    }
    gate.logout().await?;
    assert!(!gate.is_authenticated());
    assert_eq!(api.session().get_token().await?, None);

    gate.login("admin", "change-me").await?;
    let fresh = gate.dashboard().ok_or_else(|| anyhow::anyhow!("expected the dashboard"))?;
    assert_eq!(fresh.leaders.snapshot().load, LoadState::Idle);
    Ok(())
}

#[tokio::test]
async fn file_session_survives_a_restart() -> anyhow::Result<()> {
    let server = testkit::spawn().await?;
    let dir = std::env::temp_dir().join(format!("gate_session_{}", uuid::Uuid::new_v4()));
    let path = dir.join("session.json");

    let first = ApiClient::new(server.base_url(), Session::new(FileTokenStore::open(&path).await?));
    first.login("admin", "change-me").await?;

    let second = ApiClient::new(server.base_url(), Session::new(FileTokenStore::open(&path).await?));
    let gate = AdminGate::new(Arc::new(second)).await?;
    assert!(gate.is_authenticated());

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}
