mod admin;
mod public;

use std::sync::Arc;

use anyhow::Context;
use configs::AppConfig;
use service::gate::AdminGate;
use service::ApiClient;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::{Cli, Command};

/// Execute one parsed command against the configured API.
pub async fn run(cli: Cli, mut cfg: AppConfig) -> anyhow::Result<()> {
    if let Some(url) = cli.api_url {
        cfg.api.base_url = url;
        cfg.normalize_and_validate()?;
    }
    let api = Arc::new(service::runtime::connect(&cfg).await?);
    info!(base_url = %api.base_url(), "api client ready");

    match cli.command {
        Command::Health => {
            let status = api.health().await?;
            println!("{status}");
        }
        Command::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => read_password().await?,
            };
            let mut gate = AdminGate::new(Arc::clone(&api)).await?;
            gate.login(&username, &password).await?;
            println!("Logged in as {username}");
        }
        Command::Logout => {
            let mut gate = AdminGate::new(Arc::clone(&api)).await?;
            gate.logout().await?;
            println!("Logged out");
        }
        Command::Status => {
            let state = if api.session().is_authenticated().await? { "logged in" } else { "not logged in" };
            println!("{} ({state})", api.base_url());
        }
        Command::Leaders(args) => admin::leaders(api, args.action).await?,
        Command::Services(args) => admin::services(api, args.action).await?,
        Command::Resources(args) => admin::resources(api, args.action).await?,
        Command::Partners(args) => admin::partners(api, args.action).await?,
        Command::About { action } => admin::about(api, action).await?,
        Command::Tickets => admin::tickets(api).await?,
        Command::Contact(args) => public::contact(&api, args).await?,
        Command::Site { section } => public::site(api, section).await?,
    }
    Ok(())
}

async fn read_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("reading password from stdin")?;
    Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Admin commands need a stored session.
async fn require_dashboard(api: Arc<ApiClient>) -> anyhow::Result<AdminGate<ApiClient>> {
    let gate = AdminGate::new(api).await?;
    if !gate.is_authenticated() {
        anyhow::bail!("not logged in; run `cms login` first");
    }
    Ok(gate)
}
