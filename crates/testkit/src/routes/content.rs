//! Generic collection handlers plus the About singleton.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::{About, AboutInput};
use serde::de::DeserializeOwned;

use crate::auth::RequireToken;
use crate::errors::StubError;
use crate::state::{StubState, Table};

pub async fn list<E: Table>(State(state): State<StubState>) -> Json<Vec<E>> {
    Json(state.rows::<E>().await)
}

pub async fn create<E>(
    _auth: RequireToken,
    State(state): State<StubState>,
    Json(input): Json<E::Input>,
) -> Result<(StatusCode, Json<E>), StubError>
where
    E: Table,
    E::Input: DeserializeOwned,
{
    let mut db = state.db().write().await;
    E::check(E::table(&mut db), None, &input).map_err(StubError::BadRequest)?;
    let id = db.next_id();
    let row = E::build(id, input);
    E::table(&mut db).insert(id, row.clone());
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update<E>(
    _auth: RequireToken,
    State(state): State<StubState>,
    Path(id): Path<i64>,
    Json(input): Json<E::Input>,
) -> Result<Json<E>, StubError>
where
    E: Table,
    E::Input: DeserializeOwned,
{
    let mut db = state.db().write().await;
    let rows = E::table(&mut db);
    if !rows.contains_key(&id) {
        return Err(StubError::NotFound(format!("{} not found", E::SINGULAR)));
    }
    E::check(rows, Some(id), &input).map_err(StubError::BadRequest)?;
    let row = E::build(id, input);
    rows.insert(id, row.clone());
    Ok(Json(row))
}

pub async fn remove<E: Table>(
    _auth: RequireToken,
    State(state): State<StubState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StubError> {
    let mut db = state.db().write().await;
    match E::table(&mut db).remove(&id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(StubError::NotFound(format!("{} not found", E::SINGULAR))),
    }
}

pub async fn get_about(State(state): State<StubState>) -> Result<Json<About>, StubError> {
    if state.about_reads_failing() {
        return Err(StubError::Internal("database unavailable".into()));
    }
    let db = state.db().read().await;
    db.about.clone().map(Json).ok_or_else(|| StubError::NotFound("About not found".into()))
}

pub async fn put_about(
    _auth: RequireToken,
    State(state): State<StubState>,
    Json(input): Json<AboutInput>,
) -> Json<About> {
    Json(state.set_about(input).await)
}
