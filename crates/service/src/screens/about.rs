use std::sync::{Arc, Mutex};

use models::{About, AboutInput, Validate};
use tracing::warn;

use crate::api::AboutApi;
use crate::errors::ScreenError;
use crate::screens::{lock, BusyFlag, LoadState};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AboutState {
    pub load: LoadState,
    pub about: Option<About>,
    pub editing: bool,
    pub error: Option<String>,
    pub form_error: Option<String>,
}

/// Controller for the singleton "About us" record.
pub struct AboutScreen<A: ?Sized> {
    api: Arc<A>,
    state: Mutex<AboutState>,
    busy: BusyFlag,
}

impl<A: AboutApi + ?Sized> AboutScreen<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api, state: Mutex::new(AboutState::default()), busy: BusyFlag::default() }
    }

    pub fn snapshot(&self) -> AboutState {
        lock(&self.state).clone()
    }

    pub fn about(&self) -> Option<About> {
        lock(&self.state).about.clone()
    }

    pub async fn load(&self) -> Result<(), ScreenError> {
        lock(&self.state).load = LoadState::Loading;
        match self.api.fetch_about().await {
            Ok(about) => {
                let mut s = lock(&self.state);
                s.about = Some(about);
                s.load = LoadState::Loaded;
                s.editing = false;
                s.error = None;
                Ok(())
            }
            Err(e) => {
                let msg = e.to_string();
                warn!(entity = "about", error = %msg, "load failed");
                let mut s = lock(&self.state);
                s.load = LoadState::LoadError(msg.clone());
                s.error = Some(msg);
                Err(e.into())
            }
        }
    }

    /// Open the form, prefilled from the loaded record when there is one.
    pub fn begin_edit(&self) -> AboutInput {
        let mut s = lock(&self.state);
        s.editing = true;
        s.form_error = None;
        s.about.as_ref().map(About::to_input).unwrap_or_default()
    }

    pub fn cancel(&self) {
        let mut s = lock(&self.state);
        s.editing = false;
        s.form_error = None;
    }

    /// Replace the record, then reload it.
    pub async fn submit(&self, input: AboutInput) -> Result<About, ScreenError> {
        let _busy = self.busy.acquire()?;
        if let Err(e) = input.validate() {
            lock(&self.state).form_error = Some(e.to_string());
            return Err(e.into());
        }
        match self.api.update_about(&input).await {
            Ok(updated) => {
                {
                    let mut s = lock(&self.state);
                    s.editing = false;
                    s.form_error = None;
                    s.about = Some(updated.clone());
                }
                let _ = self.load().await;
                Ok(updated)
            }
            Err(e) => {
                lock(&self.state).form_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}
