// src/handlers/dados_mensais.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::dados_mensais::{DadosMensais, TipoCampanha},
};

// ROAS e ACOS não entram no payload: são derivados no serviço a partir do
// faturamento e do investimento.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDadosPayload {
    pub loja_id: Uuid,

    #[validate(range(min = 1, max = 12, message = "O mês deve estar entre 1 e 12"))]
    #[schema(example = 3)]
    pub mes: i32,

    #[validate(range(min = 2000, max = 2100, message = "Ano fora da faixa aceita"))]
    #[schema(example = 2024)]
    pub ano: i32,

    #[schema(example = "10000.00")]
    pub faturamento_bruto: Decimal,

    #[schema(example = "2000.00")]
    pub investimento_ads: Decimal,

    #[validate(range(min = 0, message = "A quantidade não pode ser negativa"))]
    #[schema(example = 50)]
    pub itens_vendidos: i32,

    pub tipo_campanha: TipoCampanha,

    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDadosPayload {
    #[validate(range(min = 1, max = 12, message = "O mês deve estar entre 1 e 12"))]
    pub mes: i32,

    #[validate(range(min = 2000, max = 2100, message = "Ano fora da faixa aceita"))]
    pub ano: i32,

    pub faturamento_bruto: Decimal,
    pub investimento_ads: Decimal,

    #[validate(range(min = 0, message = "A quantidade não pode ser negativa"))]
    pub itens_vendidos: i32,

    pub tipo_campanha: TipoCampanha,
    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListDadosQuery {
    pub loja_id: Option<Uuid>,
    pub ano: Option<i32>,
}

// POST /api/dados-mensais
#[utoipa::path(
    post,
    path = "/api/dados-mensais",
    tag = "Dados Mensais",
    request_body = CreateDadosPayload,
    responses(
        (status = 201, description = "Dado mensal criado (ROAS/ACOS derivados)", body = DadosMensais),
        (status = 400, description = "Período inválido"),
        (status = 404, description = "Loja não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_dados(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateDadosPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let dado = app_state
        .dados_service
        .create(
            user.id,
            payload.loja_id,
            payload.mes,
            payload.ano,
            payload.faturamento_bruto,
            payload.investimento_ads,
            payload.itens_vendidos,
            payload.tipo_campanha,
            payload.observacoes.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(dado)))
}

// GET /api/dados-mensais
#[utoipa::path(
    get,
    path = "/api/dados-mensais",
    tag = "Dados Mensais",
    params(ListDadosQuery),
    responses(
        (status = 200, description = "Lista de dados mensais", body = Vec<DadosMensais>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_dados(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<ListDadosQuery>,
) -> Result<impl IntoResponse, AppError> {
    let dados = app_state
        .dados_service
        .list(user.id, query.loja_id, query.ano)
        .await?;

    Ok((StatusCode::OK, Json(dados)))
}

// GET /api/dados-mensais/{id}
#[utoipa::path(
    get,
    path = "/api/dados-mensais/{id}",
    tag = "Dados Mensais",
    params(("id" = Uuid, Path, description = "ID do dado mensal")),
    responses(
        (status = 200, description = "Dado mensal encontrado", body = DadosMensais),
        (status = 404, description = "Dado mensal não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_dados(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let dado = app_state.dados_service.get(user.id, id).await?;

    Ok((StatusCode::OK, Json(dado)))
}

// PUT /api/dados-mensais/{id}
#[utoipa::path(
    put,
    path = "/api/dados-mensais/{id}",
    tag = "Dados Mensais",
    params(("id" = Uuid, Path, description = "ID do dado mensal")),
    request_body = UpdateDadosPayload,
    responses(
        (status = 200, description = "Dado mensal atualizado", body = DadosMensais),
        (status = 404, description = "Dado mensal não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_dados(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDadosPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let dado = app_state
        .dados_service
        .update(
            user.id,
            id,
            payload.mes,
            payload.ano,
            payload.faturamento_bruto,
            payload.investimento_ads,
            payload.itens_vendidos,
            payload.tipo_campanha,
            payload.observacoes.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(dado)))
}

// DELETE /api/dados-mensais/{id}
#[utoipa::path(
    delete,
    path = "/api/dados-mensais/{id}",
    tag = "Dados Mensais",
    params(("id" = Uuid, Path, description = "ID do dado mensal")),
    responses(
        (status = 204, description = "Dado mensal removido"),
        (status = 404, description = "Dado mensal não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_dados(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.dados_service.delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
