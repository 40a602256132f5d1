use std::sync::{Arc, Mutex};

use models::Ticket;
use tracing::warn;

use crate::api::TicketApi;
use crate::errors::ScreenError;
use crate::screens::{lock, LoadState};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketsState {
    pub load: LoadState,
    pub tickets: Vec<Ticket>,
    pub error: Option<String>,
}

/// Read-only list of submitted contact tickets.
pub struct TicketsPanel<A: ?Sized> {
    api: Arc<A>,
    state: Mutex<TicketsState>,
}

impl<A: TicketApi + ?Sized> TicketsPanel<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api, state: Mutex::new(TicketsState::default()) }
    }

    pub fn snapshot(&self) -> TicketsState {
        lock(&self.state).clone()
    }

    pub fn tickets(&self) -> Vec<Ticket> {
        lock(&self.state).tickets.clone()
    }

    pub async fn load(&self) -> Result<(), ScreenError> {
        lock(&self.state).load = LoadState::Loading;
        match self.api.list_tickets().await {
            Ok(tickets) => {
                let mut s = lock(&self.state);
                s.tickets = tickets;
                s.load = LoadState::Loaded;
                s.error = None;
                Ok(())
            }
            Err(e) => {
                let msg = e.to_string();
                warn!(entity = "tickets", error = %msg, "load failed");
                let mut s = lock(&self.state);
                s.load = LoadState::LoadError(msg.clone());
                s.error = Some(msg);
                Err(e.into())
            }
        }
    }
}
