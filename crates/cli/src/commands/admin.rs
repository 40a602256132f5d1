use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use models::CollectionEntity;
use serde::de::DeserializeOwned;
use service::gate::Dashboard;
use service::screens::{CrudScreen, DeleteOutcome};
use service::{upload_into, ApiClient, CrudApi, ScreenError, UploadFile};

use super::{print_json, require_dashboard};
use crate::confirm::{self, Answer};
use crate::{AboutAction, EntityAction};

async fn attach_file<I: models::AssetField>(api: &ApiClient, input: &mut I, file: Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = file {
        let upload = UploadFile::from_path(&path).await.with_context(|| format!("reading {}", path.display()))?;
        let reference = upload_into(api, input, upload).await?;
        eprintln!("uploaded {} as {reference}", path.display());
    }
    Ok(())
}

async fn run_entity<E>(api: &ApiClient, screen: &CrudScreen<E, ApiClient>, action: EntityAction) -> anyhow::Result<()>
where
    E: CollectionEntity,
    E::Input: DeserializeOwned,
    ApiClient: CrudApi<E>,
{
    match action {
        EntityAction::List => {
            screen.load().await?;
            print_json(&screen.items())?;
        }
        EntityAction::Create { data, file } => {
            let mut input: E::Input = serde_json::from_str(&data).context("parsing --data")?;
            attach_file(api, &mut input, file).await?;
            screen.begin_create();
            let created = screen.submit_create(input).await?;
            print_json(&created)?;
        }
        EntityAction::Update { id, data, file } => {
            screen.load().await?;
            let current = screen
                .begin_edit(id)
                .with_context(|| format!("no {} with id {id}", E::SINGULAR))?;
            let mut input = match data {
                Some(d) => serde_json::from_str(&d).context("parsing --data")?,
                None => current,
            };
            attach_file(api, &mut input, file).await?;
            let updated = screen.submit_update(input).await?;
            print_json(&updated)?;
        }
        EntityAction::Delete { id, yes } => {
            let answer = yes || confirm::ask(&screen.delete_prompt()).await?;
            let outcome = screen.request_delete(id, &Answer(answer)).await?;
            match outcome {
                DeleteOutcome::Deleted => println!("Deleted {} {id}", E::SINGULAR),
                DeleteOutcome::Declined => println!("Cancelled"),
            }
        }
    }
    Ok(())
}

async fn dashboard(api: &Arc<ApiClient>) -> anyhow::Result<Box<Dashboard<ApiClient>>> {
    let gate = require_dashboard(Arc::clone(api)).await?;
    gate.into_dashboard().context("not logged in")
}

pub async fn leaders(api: Arc<ApiClient>, action: EntityAction) -> anyhow::Result<()> {
    let d = dashboard(&api).await?;
    run_entity(&api, &d.leaders, action).await
}

pub async fn services(api: Arc<ApiClient>, action: EntityAction) -> anyhow::Result<()> {
    let d = dashboard(&api).await?;
    run_entity(&api, &d.services, action).await
}

pub async fn resources(api: Arc<ApiClient>, action: EntityAction) -> anyhow::Result<()> {
    let d = dashboard(&api).await?;
    run_entity(&api, &d.resources, action).await
}

pub async fn partners(api: Arc<ApiClient>, action: EntityAction) -> anyhow::Result<()> {
    let d = dashboard(&api).await?;
    run_entity(&api, &d.partners, action).await
}

pub async fn about(api: Arc<ApiClient>, action: AboutAction) -> anyhow::Result<()> {
    let d = dashboard(&api).await?;
    match action {
        AboutAction::Show => {
            d.about.load().await?;
            print_json(&d.about.about())?;
        }
        AboutAction::Set { content, file } => {
            // only a missing record is tolerated; the PUT creates it
            match d.about.load().await {
                Ok(()) => {}
                Err(ScreenError::Api(e)) if e.status_code() == Some(404) => {}
                Err(e) => return Err(e.into()),
            }
            let mut input = d.about.begin_edit();
            if let Some(content) = content {
                input.content = content;
            }
            attach_file(&api, &mut input, file).await?;
            let saved = d.about.submit(input).await?;
            print_json(&saved)?;
        }
    }
    Ok(())
}

pub async fn tickets(api: Arc<ApiClient>) -> anyhow::Result<()> {
    let d = dashboard(&api).await?;
    d.tickets.load().await?;
    print_json(&d.tickets.tickets())
}
