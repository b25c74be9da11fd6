// src/handlers/cnpjs.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::cnpj::Cnpj,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCnpjPayload {
    pub cliente_id: Uuid,

    #[validate(length(min = 14, message = "O CNPJ deve ter 14 dígitos"))]
    #[schema(example = "11.222.333/0001-81")]
    pub cnpj: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Acme Store")]
    pub nome_fantasia: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Acme Comércio Digital LTDA")]
    pub razao_social: String,

    pub endereco: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCnpjPayload {
    #[validate(length(min = 14, message = "O CNPJ deve ter 14 dígitos"))]
    pub cnpj: String,

    #[validate(length(min = 1, message = "required"))]
    pub nome_fantasia: String,

    #[validate(length(min = 1, message = "required"))]
    pub razao_social: String,

    pub endereco: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListCnpjsQuery {
    // Filtra pelos CNPJs de um cliente específico.
    pub cliente_id: Option<Uuid>,
}

// POST /api/cnpjs
#[utoipa::path(
    post,
    path = "/api/cnpjs",
    tag = "CNPJs",
    request_body = CreateCnpjPayload,
    responses(
        (status = 201, description = "CNPJ criado", body = Cnpj),
        (status = 400, description = "CNPJ inválido"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_cnpj(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateCnpjPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cnpj = app_state
        .cnpj_service
        .create(
            user.id,
            payload.cliente_id,
            &payload.cnpj,
            &payload.nome_fantasia,
            &payload.razao_social,
            payload.endereco.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(cnpj)))
}

// GET /api/cnpjs
#[utoipa::path(
    get,
    path = "/api/cnpjs",
    tag = "CNPJs",
    params(ListCnpjsQuery),
    responses(
        (status = 200, description = "Lista de CNPJs", body = Vec<Cnpj>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_cnpjs(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<ListCnpjsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let cnpjs = app_state.cnpj_service.list(user.id, query.cliente_id).await?;

    Ok((StatusCode::OK, Json(cnpjs)))
}

// GET /api/cnpjs/{id}
#[utoipa::path(
    get,
    path = "/api/cnpjs/{id}",
    tag = "CNPJs",
    params(("id" = Uuid, Path, description = "ID do CNPJ")),
    responses(
        (status = 200, description = "CNPJ encontrado", body = Cnpj),
        (status = 404, description = "CNPJ não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_cnpj(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let cnpj = app_state.cnpj_service.get(user.id, id).await?;

    Ok((StatusCode::OK, Json(cnpj)))
}

// PUT /api/cnpjs/{id}
#[utoipa::path(
    put,
    path = "/api/cnpjs/{id}",
    tag = "CNPJs",
    params(("id" = Uuid, Path, description = "ID do CNPJ")),
    request_body = UpdateCnpjPayload,
    responses(
        (status = 200, description = "CNPJ atualizado", body = Cnpj),
        (status = 404, description = "CNPJ não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_cnpj(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCnpjPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cnpj = app_state
        .cnpj_service
        .update(
            user.id,
            id,
            &payload.cnpj,
            &payload.nome_fantasia,
            &payload.razao_social,
            payload.endereco.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(cnpj)))
}

// DELETE /api/cnpjs/{id}
#[utoipa::path(
    delete,
    path = "/api/cnpjs/{id}",
    tag = "CNPJs",
    params(("id" = Uuid, Path, description = "ID do CNPJ")),
    responses(
        (status = 204, description = "CNPJ removido"),
        (status = 404, description = "CNPJ não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_cnpj(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cnpj_service.delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
