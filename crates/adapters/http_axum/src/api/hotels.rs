//! JSON REST handlers for hotels.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use innkeep_app::ports::HotelRepository;
use innkeep_domain::error::ValidationError;
use innkeep_domain::hotel::{Hotel, HotelPatch};
use innkeep_domain::id::HotelId;
use innkeep_domain::page::{Page, PageRequest};

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Query string accepted by the list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Zero-based page index. Negative values read as 0.
    pub page: Option<i64>,
    /// Page size. Defaults to 100, capped at 1000.
    pub size: Option<i64>,
    /// Echoed back in the response; does not change ordering.
    pub sort: Option<String>,
}

/// Request body for creating a hotel.
#[derive(Deserialize, ToSchema)]
pub struct CreateHotelRequest {
    pub city: String,
    pub description: String,
    pub name: String,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: i64,
}

/// Request body for a partial update. Omitted or `null` fields are left alone.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateHotelRequest {
    pub city: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: Option<i64>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Page<Hotel>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Hotel>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Hotel>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<HotelId, ApiError> {
    HotelId::from_str(id).map_err(|_| ValidationError::InvalidId(id.to_string()).into())
}

/// `GET /api/v1/hotels?page&size&sort` — one page of hotels.
#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = "Hotel Controller",
    summary = "Get a paginated list of all hotels.",
    params(ListParams),
    responses(
        (status = 200, description = "One page of hotels", body = Page<Hotel>),
        (status = 422, description = "Non-integer page or size", body = ErrorBody),
    )
)]
pub async fn list<R>(
    State(state): State<AppState<R>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: HotelRepository + Send + Sync + 'static,
{
    let Query(params) = params?;
    let request = PageRequest::new(params.page, params.size);
    let page = state
        .hotel_service
        .list_hotels(request, params.sort)
        .await?;
    Ok(ListResponse::Ok(Json(page)))
}

/// `POST /api/v1/hotels` — create a hotel.
#[utoipa::path(
    post,
    path = "/api/v1/hotels",
    tag = "Hotel Controller",
    summary = "Create a hotel resource.",
    request_body = CreateHotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = Hotel),
        (status = 422, description = "Invalid hotel", body = ErrorBody),
    )
)]
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateHotelRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: HotelRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let hotel = Hotel::builder()
        .city(req.city)
        .description(req.description)
        .name(req.name)
        .rating(req.rating)
        .build()?;

    let created = state.hotel_service.create_hotel(hotel).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /api/v1/hotels/:id` — get a single hotel.
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{id}",
    tag = "Hotel Controller",
    summary = "Get a single hotel.",
    params(("id" = i64, Path, description = "Hotel id")),
    responses(
        (status = 200, description = "The hotel", body = Hotel),
        (status = 404, description = "No hotel with this id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody),
    )
)]
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: HotelRepository + Send + Sync + 'static,
{
    let hotel_id = parse_id(&id)?;
    let hotel = state.hotel_service.get_hotel(hotel_id).await?;
    Ok(GetResponse::Ok(Json(hotel)))
}

/// `PUT /api/v1/hotels/:id` — partially update a hotel.
#[utoipa::path(
    put,
    path = "/api/v1/hotels/{id}",
    tag = "Hotel Controller",
    summary = "Update a hotel resource.",
    params(("id" = i64, Path, description = "Hotel id")),
    request_body = UpdateHotelRequest,
    responses(
        (status = 200, description = "The updated hotel", body = Hotel),
        (status = 404, description = "No hotel with this id", body = ErrorBody),
        (status = 422, description = "Invalid id or field", body = ErrorBody),
    )
)]
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateHotelRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    R: HotelRepository + Send + Sync + 'static,
{
    let hotel_id = parse_id(&id)?;
    let Json(req) = payload?;
    let patch = HotelPatch::new(req.city, req.description, req.name, req.rating)?;

    let updated = state.hotel_service.update_hotel(hotel_id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/hotels/:id` — delete a hotel.
#[utoipa::path(
    delete,
    path = "/api/v1/hotels/{id}",
    tag = "Hotel Controller",
    summary = "Delete a hotel resource.",
    params(("id" = i64, Path, description = "Hotel id")),
    responses(
        (status = 204, description = "Hotel deleted"),
        (status = 404, description = "No hotel with this id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody),
    )
)]
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: HotelRepository + Send + Sync + 'static,
{
    let hotel_id = parse_id(&id)?;
    state.hotel_service.delete_hotel(hotel_id).await?;
    Ok(DeleteResponse::NoContent)
}
