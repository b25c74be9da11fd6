// src/handlers/lojas.rs

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
    models::loja::{Loja, Marketplace},
};

fn default_ativa() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLojaPayload {
    pub cnpj_id: Uuid,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Acme Oficial")]
    pub nome: String,

    pub marketplace: Marketplace,

    #[schema(example = "https://shopee.com.br/acmeoficial")]
    pub url: Option<String>,

    #[serde(default = "default_ativa")]
    #[schema(example = true)]
    pub ativa: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLojaPayload {
    #[validate(length(min = 1, message = "required"))]
    pub nome: String,

    pub marketplace: Marketplace,
    pub url: Option<String>,

    #[serde(default = "default_ativa")]
    pub ativa: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListLojasQuery {
    pub cnpj_id: Option<Uuid>,
    pub cliente_id: Option<Uuid>,
}

// POST /api/lojas
#[utoipa::path(
    post,
    path = "/api/lojas",
    tag = "Lojas",
    request_body = CreateLojaPayload,
    responses(
        (status = 201, description = "Loja criada", body = Loja),
        (status = 404, description = "CNPJ não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_loja(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateLojaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let loja = app_state
        .loja_service
        .create(
            user.id,
            payload.cnpj_id,
            &payload.nome,
            payload.marketplace,
            payload.url.as_deref(),
            payload.ativa,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(loja)))
}

// GET /api/lojas
#[utoipa::path(
    get,
    path = "/api/lojas",
    tag = "Lojas",
    params(ListLojasQuery),
    responses(
        (status = 200, description = "Lista de lojas", body = Vec<Loja>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_lojas(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<ListLojasQuery>,
) -> Result<impl IntoResponse, AppError> {
    let lojas = app_state
        .loja_service
        .list(user.id, query.cnpj_id, query.cliente_id)
        .await?;

    Ok((StatusCode::OK, Json(lojas)))
}

// GET /api/lojas/{id}
#[utoipa::path(
    get,
    path = "/api/lojas/{id}",
    tag = "Lojas",
    params(("id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 200, description = "Loja encontrada", body = Loja),
        (status = 404, description = "Loja não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_loja(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let loja = app_state.loja_service.get(user.id, id).await?;

    Ok((StatusCode::OK, Json(loja)))
}

// PUT /api/lojas/{id}
#[utoipa::path(
    put,
    path = "/api/lojas/{id}",
    tag = "Lojas",
    params(("id" = Uuid, Path, description = "ID da loja")),
    request_body = UpdateLojaPayload,
    responses(
        (status = 200, description = "Loja atualizada", body = Loja),
        (status = 404, description = "Loja não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_loja(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLojaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let loja = app_state
        .loja_service
        .update(
            user.id,
            id,
            &payload.nome,
            payload.marketplace,
            payload.url.as_deref(),
            payload.ativa,
        )
        .await?;

    Ok((StatusCode::OK, Json(loja)))
}

// DELETE /api/lojas/{id}
#[utoipa::path(
    delete,
    path = "/api/lojas/{id}",
    tag = "Lojas",
    params(("id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 204, description = "Loja removida"),
        (status = 404, description = "Loja não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_loja(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.loja_service.delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
