//! People handlers - registration, lookup, listing, updates and removal.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::dto::{
    CreatePersonRequest, ListPeopleQuery, ListPeopleResponse, PersonResponse, UpdatePersonRequest,
};
use crate::error::{ErrorBody, HttpError};
use crate::state::AppState;

/// Register a person; demographics are guessed from the first name.
#[utoipa::path(
    post,
    path = "/people",
    tag = "people",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person stored", body = PersonResponse),
        (status = 400, description = "Missing name or surname", body = ErrorBody),
        (status = 422, description = "No demographic guess for the name", body = ErrorBody),
        (status = 502, description = "Demographics service failed", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), HttpError> {
    let person = state.people.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(person.into())))
}

/// List people with optional exact-match filters and pagination.
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    params(ListPeopleQuery),
    responses(
        (status = 200, description = "One page of people", body = ListPeopleResponse),
        (status = 400, description = "Malformed filter", body = ErrorBody),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListPeopleQuery>,
) -> Result<Json<ListPeopleResponse>, HttpError> {
    let params = query.into_params()?;
    let page = state
        .people
        .list(params.filter, params.request)
        .await?
        .map(PersonResponse::from);

    Ok(Json(ListPeopleResponse {
        data: page.items,
        total: page.total,
        limit: params.limit,
        page: params.page,
    }))
}

/// Get a single person by ID.
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "people",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "The person", body = PersonResponse),
        (status = 404, description = "No such person", body = ErrorBody),
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PersonResponse>, HttpError> {
    Ok(Json(state.people.get(id).await?.into()))
}

/// Apply a partial update. Serves both PUT and PATCH.
#[utoipa::path(
    method(put, patch),
    path = "/people/{id}",
    tag = "people",
    params(("id" = i64, Path, description = "Person ID")),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "The updated person", body = PersonResponse),
        (status = 400, description = "Invalid field value", body = ErrorBody),
        (status = 404, description = "No such person", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePersonRequest>,
) -> Result<Json<PersonResponse>, HttpError> {
    Ok(Json(state.people.update(id, req.into()).await?.into()))
}

/// Remove a person.
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = "people",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 204, description = "Person removed"),
        (status = 404, description = "No such person", body = ErrorBody),
    )
)]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    state.people.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
