use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

use super::domain::{Candidate, Gender, VoterId};
use super::repository::RecordStore;
use super::service::RegistryService;

/// Wire shape of a registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRequest {
    pub name: String,
    pub id: i64,
    pub age: u32,
    #[serde(default)]
    pub gender: Gender,
    pub alive: bool,
}

impl From<PersonRequest> for Candidate {
    fn from(request: PersonRequest) -> Self {
        Candidate::new(request.id, request.name, request.age, request.alive)
            .with_gender(request.gender)
    }
}

/// Router builder exposing registration and lookup endpoints.
pub fn registry_router<S>(service: Arc<RegistryService<S>>) -> Router
where
    S: RecordStore + ?Sized + 'static,
{
    Router::new()
        .route("/register", post(register_handler::<S>))
        .route("/register/:voter_id", get(lookup_handler::<S>))
        .with_state(service)
}

/// Responds with the outcome name as plain text; a `null` body is an absent candidate.
pub(crate) async fn register_handler<S>(
    State(service): State<Arc<RegistryService<S>>>,
    Json(request): Json<Option<PersonRequest>>,
) -> Response
where
    S: RecordStore + ?Sized + 'static,
{
    let candidate = request.map(Candidate::from);
    match service.evaluate(candidate.as_ref()) {
        Ok(outcome) => (StatusCode::OK, outcome.label()).into_response(),
        Err(failure) => AppError::from(failure).into_response(),
    }
}

pub(crate) async fn lookup_handler<S>(
    State(service): State<Arc<RegistryService<S>>>,
    Path(voter_id): Path<i64>,
) -> Response
where
    S: RecordStore + ?Sized + 'static,
{
    let id = VoterId(voter_id);
    match service.lookup(id) {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": format!("voter {id} not registered"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(failure) => AppError::from(failure).into_response(),
    }
}
