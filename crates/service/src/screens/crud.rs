use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use models::{CollectionEntity, Validate};
use tracing::{info, warn};

use crate::api::CrudApi;
use crate::errors::ScreenError;
use crate::screens::{lock, BusyFlag, Confirm, LoadState};

#[derive(Clone, Debug, PartialEq)]
pub enum Mode<E> {
    Browsing,
    Creating,
    Editing(E),
}

/// Snapshot of a screen for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenState<E> {
    pub load: LoadState,
    pub items: Vec<E>,
    pub mode: Mode<E>,
    /// Last list-level failure (load or delete).
    pub error: Option<String>,
    /// Last create/update failure shown on the open form.
    pub form_error: Option<String>,
}

impl<E> Default for ScreenState<E> {
    fn default() -> Self {
        Self { load: LoadState::Idle, items: Vec::new(), mode: Mode::Browsing, error: None, form_error: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

/// List + create/edit/delete controller for one collection entity.
pub struct CrudScreen<E, A: ?Sized> {
    api: Arc<A>,
    state: Mutex<ScreenState<E>>,
    busy: BusyFlag,
    _entity: PhantomData<fn() -> E>,
}

impl<E, A> CrudScreen<E, A>
where
    E: CollectionEntity,
    A: CrudApi<E> + ?Sized,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api, state: Mutex::new(ScreenState::default()), busy: BusyFlag::default(), _entity: PhantomData }
    }

    pub fn snapshot(&self) -> ScreenState<E> {
        lock(&self.state).clone()
    }

    pub fn items(&self) -> Vec<E> {
        lock(&self.state).items.clone()
    }

    pub fn mode(&self) -> Mode<E> {
        lock(&self.state).mode.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    fn update<R>(&self, f: impl FnOnce(&mut ScreenState<E>) -> R) -> R {
        f(&mut lock(&self.state))
    }

    /// Fetch the list. A failure keeps whatever was loaded before.
    pub async fn load(&self) -> Result<(), ScreenError> {
        self.update(|s| s.load = LoadState::Loading);
        match self.api.list().await {
            Ok(items) => {
                self.update(|s| {
                    s.items = items;
                    s.load = LoadState::Loaded;
                    s.mode = Mode::Browsing;
                    s.error = None;
                });
                Ok(())
            }
            Err(e) => {
                let msg = e.to_string();
                warn!(entity = E::PATH, error = %msg, "load failed");
                self.update(|s| {
                    s.load = LoadState::LoadError(msg.clone());
                    s.error = Some(msg);
                });
                Err(e.into())
            }
        }
    }

    pub fn begin_create(&self) {
        self.update(|s| {
            s.mode = Mode::Creating;
            s.form_error = None;
        });
    }

    /// Open the edit form for a loaded entity; returns the prefilled input.
    pub fn begin_edit(&self, id: i64) -> Option<E::Input> {
        self.update(|s| {
            let entity = s.items.iter().find(|e| e.id() == id)?.clone();
            let input = entity.to_input();
            s.mode = Mode::Editing(entity);
            s.form_error = None;
            Some(input)
        })
    }

    pub fn cancel(&self) {
        self.update(|s| {
            s.mode = Mode::Browsing;
            s.form_error = None;
        });
    }

    fn reject_input(&self, input: &E::Input) -> Result<(), ScreenError> {
        if let Err(e) = input.validate() {
            self.update(|s| s.form_error = Some(e.to_string()));
            return Err(e.into());
        }
        Ok(())
    }

    /// Create, then leave the form and reload the list.
    pub async fn submit_create(&self, input: E::Input) -> Result<E, ScreenError> {
        let _busy = self.busy.acquire()?;
        self.reject_input(&input)?;
        match self.api.create(&input).await {
            Ok(created) => {
                self.update(|s| {
                    s.mode = Mode::Browsing;
                    s.form_error = None;
                });
                // a failed reload is recorded on the screen; the create itself succeeded
                let _ = self.load().await;
                Ok(created)
            }
            Err(e) => {
                self.update(|s| s.form_error = Some(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Update the entity being edited. Rejected when nothing is being edited.
    pub async fn submit_update(&self, input: E::Input) -> Result<E, ScreenError> {
        let _busy = self.busy.acquire()?;
        let id = match &lock(&self.state).mode {
            Mode::Editing(entity) => entity.id(),
            _ => return Err(ScreenError::NotEditing),
        };
        self.reject_input(&input)?;
        match self.api.update(id, &input).await {
            Ok(updated) => {
                self.update(|s| {
                    s.mode = Mode::Browsing;
                    s.form_error = None;
                });
                let _ = self.load().await;
                Ok(updated)
            }
            Err(e) => {
                self.update(|s| s.form_error = Some(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Question put to the [`Confirm`] collaborator before a delete.
    pub fn delete_prompt(&self) -> String {
        format!("Delete this {}?", E::SINGULAR)
    }

    /// Confirm, delete and reload. Declining makes no call.
    pub async fn request_delete(&self, id: i64, confirm: &dyn Confirm) -> Result<DeleteOutcome, ScreenError> {
        let _busy = self.busy.acquire()?;
        if !confirm.confirm(&self.delete_prompt()) {
            return Ok(DeleteOutcome::Declined);
        }
        match self.api.delete(id).await {
            Ok(_) => {
                info!(entity = E::SINGULAR, id, "removed from screen");
                let _ = self.load().await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                self.update(|s| s.error = Some(e.to_string()));
                Err(e.into())
            }
        }
    }
}
