use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use models::{Ticket, TicketInput};
use tracing::info;

use crate::auth::RequireToken;
use crate::state::StubState;

pub async fn list_tickets(_auth: RequireToken, State(state): State<StubState>) -> Json<Vec<Ticket>> {
    Json(state.tickets().await)
}

/// Anonymous; new tickets always start as `open`.
pub async fn create_ticket(State(state): State<StubState>, Json(input): Json<TicketInput>) -> (StatusCode, Json<Ticket>) {
    let mut db = state.db().write().await;
    let id = db.next_id();
    let ticket = Ticket {
        id,
        name: input.name,
        email: input.email,
        subject: input.subject,
        message: input.message,
        status: "open".into(),
    };
    db.tickets.insert(id, ticket.clone());
    info!(ticket_id = id, "stub ticket stored");
    (StatusCode::CREATED, Json(ticket))
}
