//! Routes for the causes resource and its nested contribute action.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use causeway_core::cause::{Cause, CausePayload};
use causeway_core::donation::{Amount, Donation, DonationPayload};

use crate::envelope;
use crate::error::ApiError;
use crate::state::AppState;

const MSG_CAUSE_CREATED: &str = "Cause created";
const MSG_CAUSE_CREATE_FAILED: &str = "Cause create failed";
const MSG_CAUSES_RETRIEVED: &str = "Retrieve Causes Success";
const MSG_CAUSE_RETRIEVED: &str = "Retrieve Cause Success";
const MSG_CAUSE_UPDATED: &str = "Cause updated";
const MSG_CAUSE_UPDATE_FAILED: &str = "Cause update failed";
const MSG_CONTRIBUTION_CREATED: &str = "Contribution created";
const MSG_CONTRIBUTION_CREATE_FAILED: &str = "Contribution create failed";

/// A cause as presented in response bodies: no timestamps.
#[derive(Debug, Serialize)]
struct CauseBody {
    id: Uuid,
    title: String,
    description: String,
    image_url: String,
}

impl From<Cause> for CauseBody {
    fn from(cause: Cause) -> Self {
        Self {
            id: cause.id,
            title: cause.title,
            description: cause.description,
            image_url: cause.image_url,
        }
    }
}

/// A donation as presented in response bodies: no cause reference, no
/// timestamps.
#[derive(Debug, Serialize)]
struct DonationBody {
    id: Uuid,
    name: String,
    email: String,
    amount: Amount,
}

impl From<Donation> for DonationBody {
    fn from(donation: Donation) -> Self {
        Self {
            id: donation.id,
            name: donation.name,
            email: donation.email,
            amount: donation.amount,
        }
    }
}

/// An id that is not a UUID cannot resolve to a cause, so it reads as not
/// found rather than as a malformed request.
fn parse_cause_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::CauseNotFound)
}

/// POST /
#[instrument(skip(state, payload))]
async fn create_cause(
    State(state): State<AppState>,
    Json(payload): Json<CausePayload>,
) -> Result<Response, ApiError> {
    let draft = payload
        .validate()
        .map_err(|errors| ApiError::validation(MSG_CAUSE_CREATE_FAILED, errors))?;

    let cause = state
        .causes
        .create(draft)
        .await
        .map_err(|err| ApiError::from_domain(MSG_CAUSE_CREATE_FAILED, err))?;

    info!(cause_id = %cause.id, "cause created");
    Ok(envelope::success(
        StatusCode::CREATED,
        MSG_CAUSE_CREATED,
        &CauseBody::from(cause),
    ))
}

/// GET /
#[instrument(skip(state))]
async fn list_causes(State(state): State<AppState>) -> Result<Response, ApiError> {
    let causes = state.causes.list().await?;

    let bodies: Vec<CauseBody> = causes.into_iter().map(CauseBody::from).collect();
    Ok(envelope::success(
        StatusCode::OK,
        MSG_CAUSES_RETRIEVED,
        &bodies,
    ))
}

/// GET /{id}
#[instrument(skip(state))]
async fn retrieve_cause(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_cause_id(&id)?;
    let cause = state
        .causes
        .find(id)
        .await?
        .ok_or(ApiError::CauseNotFound)?;

    Ok(envelope::success(
        StatusCode::OK,
        MSG_CAUSE_RETRIEVED,
        &CauseBody::from(cause),
    ))
}

/// PUT /{id}
///
/// The cause is resolved before the payload is validated, so an unknown
/// cause id answers 404 even when the payload is also invalid.
#[instrument(skip(state, payload))]
async fn update_cause(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CausePayload>,
) -> Result<Response, ApiError> {
    let id = parse_cause_id(&id)?;
    state
        .causes
        .find(id)
        .await?
        .ok_or(ApiError::CauseNotFound)?;

    let draft = payload
        .validate()
        .map_err(|errors| ApiError::validation(MSG_CAUSE_UPDATE_FAILED, errors))?;

    let cause = state
        .causes
        .update(id, draft)
        .await
        .map_err(|err| ApiError::from_domain(MSG_CAUSE_UPDATE_FAILED, err))?
        .ok_or(ApiError::CauseNotFound)?;

    info!(cause_id = %cause.id, "cause updated");
    Ok(envelope::success(
        StatusCode::OK,
        MSG_CAUSE_UPDATED,
        &CauseBody::from(cause),
    ))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn delete_cause(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_cause_id(&id)?;
    let deleted = state.causes.delete(id).await?;

    if !deleted {
        return Err(ApiError::CauseNotFound);
    }

    info!(cause_id = %id, "cause deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// POST /{id}/contribute
///
/// The cause is resolved before the payload is validated, so an unknown
/// cause id answers 404 even when the payload is also invalid.
#[instrument(skip(state, payload))]
async fn contribute(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DonationPayload>,
) -> Result<Response, ApiError> {
    let id = parse_cause_id(&id)?;
    let cause = state
        .causes
        .find(id)
        .await?
        .ok_or(ApiError::CauseNotFound)?;

    let draft = payload
        .validate()
        .map_err(|errors| ApiError::validation(MSG_CONTRIBUTION_CREATE_FAILED, errors))?;

    let donation = state
        .donations
        .create(cause.id, draft)
        .await
        .map_err(|err| ApiError::from_domain(MSG_CONTRIBUTION_CREATE_FAILED, err))?;

    info!(donation_id = %donation.id, cause_id = %cause.id, "contribution recorded");
    Ok(envelope::success(
        StatusCode::CREATED,
        MSG_CONTRIBUTION_CREATED,
        &DonationBody::from(donation),
    ))
}

/// Returns the router for the causes resource.
///
/// Detail and contribute paths answer with and without a trailing slash;
/// axum does not redirect between the two forms.
pub fn router() -> Router<AppState> {
    let detail = get(retrieve_cause).put(update_cause).delete(delete_cause);
    Router::new()
        .route("/", get(list_causes).post(create_cause))
        .route("/{id}", detail.clone())
        .route("/{id}/", detail)
        .route("/{id}/contribute", post(contribute))
        .route("/{id}/contribute/", post(contribute))
}
