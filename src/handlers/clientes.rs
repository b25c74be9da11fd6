// src/handlers/clientes.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::cliente::Cliente,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientePayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Acme Comércio Digital")]
    pub nome: String,

    #[validate(length(min = 14, message = "O CNPJ deve ter 14 dígitos"))]
    #[schema(example = "11.222.333/0001-81")]
    pub cnpj_principal: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "contato@acme.com.br")]
    pub email: String,

    pub telefone: Option<String>,
    pub endereco: Option<String>,
}

// POST /api/clientes
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    request_body = ClientePayload,
    responses(
        (status = 201, description = "Cliente criado", body = Cliente),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_cliente(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<ClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cliente = app_state
        .cliente_service
        .create(
            user.id,
            &payload.nome,
            &payload.cnpj_principal,
            &payload.email,
            payload.telefone.as_deref(),
            payload.endereco.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

// GET /api/clientes
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Lista de clientes do usuário", body = Vec<Cliente>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_clientes(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state.cliente_service.list(user.id).await?;

    Ok((StatusCode::OK, Json(clientes)))
}

// GET /api/clientes/{id}
#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = Cliente),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_cliente(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let cliente = app_state.cliente_service.get(user.id, id).await?;

    Ok((StatusCode::OK, Json(cliente)))
}

// PUT /api/clientes/{id}
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    request_body = ClientePayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = Cliente),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_cliente(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cliente = app_state
        .cliente_service
        .update(
            user.id,
            id,
            &payload.nome,
            &payload.cnpj_principal,
            &payload.email,
            payload.telefone.as_deref(),
            payload.endereco.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(cliente)))
}

// DELETE /api/clientes/{id}
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_cliente(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cliente_service.delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
