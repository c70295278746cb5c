use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{PageId, RecordId, RecordSubmission, UserRole, Viewer};
use super::rbac::{is_page_admin, ProfileDirectory};
use super::repository::{RecordRepository, RecordView, RepositoryError};
use super::service::{PrioritizationService, ServiceError};

/// Shared handler state: the service plus the collaborators that stand in
/// for the session layer (profile lookup and the page this matrix lives on).
pub struct MatrixState<R, P> {
    pub service: Arc<PrioritizationService<R>>,
    pub profiles: Arc<P>,
    pub page: PageId,
}

impl<R, P> Clone for MatrixState<R, P> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            profiles: self.profiles.clone(),
            page: self.page.clone(),
        }
    }
}

/// Router builder exposing HTTP endpoints for the prioritization matrix.
pub fn matrix_router<R, P>(state: MatrixState<R, P>) -> Router
where
    R: RecordRepository + 'static,
    P: ProfileDirectory + 'static,
{
    Router::new()
        .route(
            "/api/v1/prioritization/records",
            post(submit_handler::<R, P>).get(list_handler::<R, P>),
        )
        .route(
            "/api/v1/prioritization/records/:record_id",
            get(get_handler::<R, P>)
                .put(edit_handler::<R, P>)
                .delete(delete_handler::<R, P>),
        )
        .route(
            "/api/v1/prioritization/records/:record_id/approve",
            post(approve_handler::<R, P>),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitRequest {
    pub(crate) submitted_by: String,
    #[serde(flatten)]
    pub(crate) submission: RecordSubmission,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    pub(crate) identity: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EditRequest {
    pub(crate) editor: String,
    #[serde(flatten)]
    pub(crate) submission: RecordSubmission,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActorRequest {
    pub(crate) actor: String,
}

pub(crate) async fn submit_handler<R, P>(
    State(state): State<MatrixState<R, P>>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    R: RecordRepository + 'static,
    P: ProfileDirectory + 'static,
{
    match state.service.submit(request.submission, request.submitted_by) {
        Ok(record) => {
            let view = RecordView::from_record(&record);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R, P>(
    State(state): State<MatrixState<R, P>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: RecordRepository + 'static,
    P: ProfileDirectory + 'static,
{
    let viewer = resolve_viewer(&state, query.identity);
    match state.service.visible(&viewer) {
        Ok(records) => {
            let views: Vec<RecordView> = records.iter().map(RecordView::from_record).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R, P>(
    State(state): State<MatrixState<R, P>>,
    Path(record_id): Path<String>,
) -> Response
where
    R: RecordRepository + 'static,
    P: ProfileDirectory + 'static,
{
    match state.service.get(&RecordId(record_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn edit_handler<R, P>(
    State(state): State<MatrixState<R, P>>,
    Path(record_id): Path<String>,
    axum::Json(request): axum::Json<EditRequest>,
) -> Response
where
    R: RecordRepository + 'static,
    P: ProfileDirectory + 'static,
{
    let editor_is_admin = actor_is_page_admin(&state, &request.editor);
    match state
        .service
        .edit(&RecordId(record_id), request.submission, editor_is_admin)
    {
        Ok(record) => {
            let view = RecordView::from_record(&record);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn approve_handler<R, P>(
    State(state): State<MatrixState<R, P>>,
    Path(record_id): Path<String>,
    axum::Json(request): axum::Json<ActorRequest>,
) -> Response
where
    R: RecordRepository + 'static,
    P: ProfileDirectory + 'static,
{
    let actor_is_admin = actor_is_page_admin(&state, &request.actor);
    match state.service.approve(&RecordId(record_id), actor_is_admin) {
        Ok(record) => {
            let view = RecordView::from_record(&record);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R, P>(
    State(state): State<MatrixState<R, P>>,
    Path(record_id): Path<String>,
    Query(request): Query<ActorRequest>,
) -> Response
where
    R: RecordRepository + 'static,
    P: ProfileDirectory + 'static,
{
    let role = state
        .profiles
        .profile(&request.actor)
        .map(|profile| profile.role)
        .unwrap_or(UserRole::Student);
    match state.service.delete(&RecordId(record_id), role) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn resolve_viewer<R, P>(state: &MatrixState<R, P>, identity: Option<String>) -> Viewer
where
    P: ProfileDirectory,
{
    match identity {
        None => Viewer::anonymous(),
        Some(identity) => {
            let admin = actor_is_page_admin(state, &identity);
            Viewer::authenticated(identity, admin)
        }
    }
}

fn actor_is_page_admin<R, P>(state: &MatrixState<R, P>, identity: &str) -> bool
where
    P: ProfileDirectory,
{
    state
        .profiles
        .profile(identity)
        .map(|profile| is_page_admin(&profile, &state.page))
        .unwrap_or(false)
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Authorization(_) => StatusCode::FORBIDDEN,
        ServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
