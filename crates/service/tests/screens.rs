use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use models::{Leader, LeaderInput};
use service::screens::{CrudScreen, DeleteOutcome, LoadState, Mode};
use service::{ApiError, CrudApi, ScreenError};
use tokio::sync::Notify;

/// In-process leaders API with switches for failures and a held create.
#[derive(Default)]
struct FakeLeaders {
    rows: Mutex<Vec<Leader>>,
    next_id: AtomicI64,
    lists: AtomicUsize,
    creates: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
    fail_list: AtomicBool,
    fail_mutations: AtomicBool,
    hold_create: AtomicBool,
    entered: Notify,
    release: Notify,
}

impl FakeLeaders {
    fn with(names: &[&str]) -> Arc<Self> {
        let api = Self::default();
        for name in names {
            let id = api.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            api.rows.lock().unwrap().push(Leader { id, name: name.to_string(), photo: None, bio: None });
        }
        Arc::new(api)
    }
}

#[async_trait]
impl CrudApi<Leader> for FakeLeaders {
    async fn list(&self) -> Result<Vec<Leader>, ApiError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ApiError::status("Failed to fetch leaders", 500, ""));
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, input: &LeaderInput) -> Result<Leader, ApiError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.hold_create.load(Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(ApiError::status("Failed to create leader", 500, ""));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = Leader { id, name: input.name.clone(), photo: input.photo.clone(), bio: input.bio.clone() };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, input: &LeaderInput) -> Result<Leader, ApiError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(ApiError::status("Failed to update leader", 500, ""));
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|r| r.id == id).ok_or_else(|| ApiError::status("Failed to update leader", 404, ""))?;
        row.name = input.name.clone();
        row.photo = input.photo.clone();
        row.bio = input.bio.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(ApiError::status("Failed to delete leader", 500, ""));
        }
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(true)
    }
}

fn named(name: &str) -> LeaderInput {
    LeaderInput { name: name.into(), ..Default::default() }
}

#[tokio::test]
async fn load_fills_the_list_and_browses() -> anyhow::Result<()> {
    let api = FakeLeaders::with(&["Ada", "Grace"]);
    let screen = CrudScreen::<Leader, _>::new(Arc::clone(&api));
    assert_eq!(screen.snapshot().load, LoadState::Idle);

    screen.load().await?;
    let s = screen.snapshot();
    assert_eq!(s.load, LoadState::Loaded);
    assert_eq!(s.mode, Mode::Browsing);
    assert_eq!(s.items.len(), 2);
    Ok(())
}

#[tokio::test]
async fn failed_load_keeps_the_previous_list() -> anyhow::Result<()> {
    let api = FakeLeaders::with(&["Ada", "Grace"]);
    let screen = CrudScreen::<Leader, _>::new(Arc::clone(&api));
    screen.load().await?;

    api.fail_list.store(true, Ordering::SeqCst);
    assert!(screen.load().await.is_err());

    let s = screen.snapshot();
    assert_eq!(s.load, LoadState::LoadError("Failed to fetch leaders".into()));
    assert_eq!(s.error.as_deref(), Some("Failed to fetch leaders"));
    assert_eq!(s.items.len(), 2);
    Ok(())
}

#[tokio::test]
async fn create_closes_the_form_and_reloads() -> anyhow::Result<()> {
    let api = FakeLeaders::with(&[]);
    let screen = CrudScreen::<Leader, _>::new(Arc::clone(&api));
    screen.load().await?;
    screen.begin_create();
    assert_eq!(screen.mode(), Mode::Creating);

    let created = screen.submit_create(named("Ada")).await?;
    let s = screen.snapshot();
    assert_eq!(s.mode, Mode::Browsing);
    assert_eq!(s.items, vec![created]);
    assert_eq!(api.lists.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn failed_create_keeps_the_form_open() -> anyhow::Result<()> {
    let api = FakeLeaders::with(&["Ada"]);
    let screen = CrudScreen::<Leader, _>::new(Arc::clone(&api));
    screen.load().await?;
    screen.begin_create();
    api.fail_mutations.store(true, Ordering::SeqCst);

    let err = screen.submit_create(named("Grace")).await;
    assert!(matches!(err, Err(ScreenError::Api(_))));
    let s = screen.snapshot();
    assert_eq!(s.mode, Mode::Creating);
    assert_eq!(s.form_error.as_deref(), Some("Failed to create leader"));
    assert_eq!(s.items.len(), 1);
    Ok(())
}

#[tokio::test]
async fn invalid_input_never_reaches_the_api() -> anyhow::Result<()> {
    let api = FakeLeaders::with(&[]);
    let screen = CrudScreen::<Leader, _>::new(Arc::clone(&api));
    screen.begin_create();

    let err = screen.submit_create(named("  ")).await;
    assert!(matches!(err, Err(ScreenError::Validation(_))));
    assert_eq!(api.creates.load(Ordering::SeqCst), 0);
    assert_eq!(screen.snapshot().form_error.as_deref(), Some("validation error: name is required"));
    Ok(())
}

#[tokio::test]
async fn update_requires_an_open_edit() -> anyhow::Result<()> {
    let api = FakeLeaders::with(&["Ada"]);
    let screen = CrudScreen::<Leader, _>::new(Arc::clone(&api));
    screen.load().await?;

    assert!(matches!(screen.submit_update(named("X")).await, Err(ScreenError::NotEditing)));
    assert_eq!(api.updates.load(Ordering::SeqCst), 0);

    let mut input = screen.begin_edit(1).ok_or_else(|| anyhow::anyhow!("leader 1 not loaded"))?;
    assert_eq!(input.name, "Ada");
    input.bio = Some("Analyst".into());
    let updated = screen.submit_update(input).await?;
    assert_eq!(updated.bio.as_deref(), Some("Analyst"));
    assert_eq!(screen.mode(), Mode::Browsing);
    assert_eq!(screen.items()[0].bio.as_deref(), Some("Analyst"));

    assert!(screen.begin_edit(99).is_none());
    Ok(())
}

#[tokio::test]
async fn declined_delete_makes_no_call() -> anyhow::Result<()> {
    let api = FakeLeaders::with(&["Ada"]);
    let screen = CrudScreen::<Leader, _>::new(Arc::clone(&api));
    screen.load().await?;

    let prompts = Mutex::new(Vec::new());
    let decline = |p: &str| {
        prompts.lock().unwrap().push(p.to_string());
        false
    };
    assert_eq!(screen.request_delete(1, &decline).await?, DeleteOutcome::Declined);
    assert_eq!(api.deletes.load(Ordering::SeqCst), 0);
    assert_eq!(*prompts.lock().unwrap(), vec![screen.delete_prompt()]);
    assert_eq!(screen.delete_prompt(), "Delete this leader?");

    assert_eq!(screen.request_delete(1, &|_: &str| true).await?, DeleteOutcome::Deleted);
    assert!(screen.items().is_empty());
    Ok(())
}

#[tokio::test]
async fn failed_delete_keeps_the_list_and_reports() -> anyhow::Result<()> {
    let api = FakeLeaders::with(&["Ada"]);
    let screen = CrudScreen::<Leader, _>::new(Arc::clone(&api));
    screen.load().await?;
    api.fail_mutations.store(true, Ordering::SeqCst);

    assert!(screen.request_delete(1, &|_: &str| true).await.is_err());
    let s = screen.snapshot();
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.error.as_deref(), Some("Failed to delete leader"));
    Ok(())
}

#[tokio::test]
async fn second_mutation_while_busy_is_rejected() -> anyhow::Result<()> {
    let api = FakeLeaders::with(&["Ada"]);
    api.hold_create.store(true, Ordering::SeqCst);
    let screen = Arc::new(CrudScreen::<Leader, _>::new(Arc::clone(&api)));
    screen.load().await?;

    let first = tokio::spawn({
        let screen = Arc::clone(&screen);
        async move { screen.submit_create(named("Grace")).await }
    });
    api.entered.notified().await;
    assert!(screen.is_busy());

    assert!(matches!(screen.submit_create(named("Linus")).await, Err(ScreenError::Busy)));
    assert!(matches!(screen.request_delete(1, &|_: &str| true).await, Err(ScreenError::Busy)));
    assert_eq!(api.creates.load(Ordering::SeqCst), 1);
    assert_eq!(api.deletes.load(Ordering::SeqCst), 0);

    api.release.notify_one();
    let created = first.await??;
    assert_eq!(created.name, "Grace");
    assert!(!screen.is_busy());
    assert_eq!(screen.items().len(), 2);
    Ok(())
}
