use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::routes;
use crate::state::{Credentials, StubState};

/// A stub backend bound to an ephemeral localhost port.
/// The server task is aborted when this value is dropped.
pub struct StubServer {
    pub addr: SocketAddr,
    pub state: StubState,
    task: JoinHandle<()>,
}

impl StubServer {
    /// API base, e.g. `http://127.0.0.1:41234/api`.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Origin without the `/api` prefix, where `/upload/<category>` also lives.
    pub fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub async fn spawn() -> anyhow::Result<StubServer> {
    spawn_with(StubState::new(Credentials::default())).await
}

pub async fn spawn_with(state: StubState) -> anyhow::Result<StubServer> {
    let app = routes::build_router(state.clone());
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "stub api listening");

    let task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!(error = %e, "stub api stopped");
        }
    });
    Ok(StubServer { addr, state, task })
}

/// An address nothing listens on, for exercising transport failures.
pub async fn closed_base_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/api"))
}
