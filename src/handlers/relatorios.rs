// src/handlers/relatorios.rs

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::relatorio::{Periodo, RelatorioConsolidadoInsights, RelatorioInsights},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioQuery {
    /// Mês do relatório (1 a 12)
    pub mes: i32,
    /// Ano do relatório
    pub ano: i32,
    /// Mês do período de comparação (opcional, vai junto com compararAno)
    pub comparar_mes: Option<i32>,
    /// Ano do período de comparação
    pub comparar_ano: Option<i32>,
}

impl RelatorioQuery {
    fn periodo(&self) -> Periodo {
        Periodo::new(self.mes, self.ano)
    }

    // A comparação só vale quando mês E ano vieram juntos.
    fn comparacao(&self) -> Option<Periodo> {
        match (self.comparar_mes, self.comparar_ano) {
            (Some(mes), Some(ano)) => Some(Periodo::new(mes, ano)),
            _ => None,
        }
    }
}

fn resposta_texto(texto: String) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        texto,
    )
        .into_response()
}

// Configura os headers para o navegador baixar o PDF
fn resposta_pdf(nome_arquivo: String, bytes: Vec<u8>) -> Response {
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", nome_arquivo),
        ),
    ];

    (headers, bytes).into_response()
}

// --- Relatórios de loja ---

// GET /api/relatorios/lojas/{loja_id}
#[utoipa::path(
    get,
    path = "/api/relatorios/lojas/{loja_id}",
    tag = "Relatórios",
    params(("loja_id" = Uuid, Path, description = "ID da loja"), RelatorioQuery),
    responses(
        (status = 200, description = "Insights calculados da loja no período", body = RelatorioInsights),
        (status = 400, description = "Período inválido"),
        (status = 404, description = "Loja não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn insights_loja(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(loja_id): Path<Uuid>,
    Query(query): Query<RelatorioQuery>,
) -> Result<impl IntoResponse, AppError> {
    let insights = app_state
        .relatorio_service
        .insights_loja(user.id, loja_id, query.periodo(), query.comparacao())
        .await?;

    Ok((StatusCode::OK, Json(insights)))
}

// GET /api/relatorios/lojas/{loja_id}/texto
#[utoipa::path(
    get,
    path = "/api/relatorios/lojas/{loja_id}/texto",
    tag = "Relatórios",
    params(("loja_id" = Uuid, Path, description = "ID da loja"), RelatorioQuery),
    responses(
        (status = 200, description = "Relatório formatado para colar no WhatsApp", body = String, content_type = "text/plain"),
        (status = 404, description = "Loja não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn texto_loja(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(loja_id): Path<Uuid>,
    Query(query): Query<RelatorioQuery>,
) -> Result<Response, AppError> {
    let texto = app_state
        .relatorio_service
        .texto_loja(user.id, loja_id, query.periodo(), query.comparacao())
        .await?;

    Ok(resposta_texto(texto))
}

// GET /api/relatorios/lojas/{loja_id}/pdf
#[utoipa::path(
    get,
    path = "/api/relatorios/lojas/{loja_id}/pdf",
    tag = "Relatórios",
    params(("loja_id" = Uuid, Path, description = "ID da loja"), RelatorioQuery),
    responses(
        (status = 200, description = "PDF do relatório da loja", body = Vec<u8>, content_type = "application/pdf"),
        (status = 404, description = "Loja não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn pdf_loja(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(loja_id): Path<Uuid>,
    Query(query): Query<RelatorioQuery>,
) -> Result<Response, AppError> {
    let (nome_arquivo, bytes) = app_state
        .relatorio_service
        .pdf_loja(user.id, loja_id, query.periodo(), query.comparacao())
        .await?;

    Ok(resposta_pdf(nome_arquivo, bytes))
}

// --- Relatórios consolidados ---

// GET /api/relatorios/clientes/{cliente_id}
#[utoipa::path(
    get,
    path = "/api/relatorios/clientes/{cliente_id}",
    tag = "Relatórios",
    params(("cliente_id" = Uuid, Path, description = "ID do cliente"), RelatorioQuery),
    responses(
        (status = 200, description = "Insights consolidados das lojas ativas do cliente", body = RelatorioConsolidadoInsights),
        (status = 400, description = "Período inválido"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn insights_cliente(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(cliente_id): Path<Uuid>,
    Query(query): Query<RelatorioQuery>,
) -> Result<impl IntoResponse, AppError> {
    let insights = app_state
        .relatorio_service
        .insights_cliente(user.id, cliente_id, query.periodo(), query.comparacao())
        .await?;

    Ok((StatusCode::OK, Json(insights)))
}

// GET /api/relatorios/clientes/{cliente_id}/texto
#[utoipa::path(
    get,
    path = "/api/relatorios/clientes/{cliente_id}/texto",
    tag = "Relatórios",
    params(("cliente_id" = Uuid, Path, description = "ID do cliente"), RelatorioQuery),
    responses(
        (status = 200, description = "Relatório consolidado para colar no WhatsApp", body = String, content_type = "text/plain"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn texto_cliente(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(cliente_id): Path<Uuid>,
    Query(query): Query<RelatorioQuery>,
) -> Result<Response, AppError> {
    let texto = app_state
        .relatorio_service
        .texto_cliente(user.id, cliente_id, query.periodo(), query.comparacao())
        .await?;

    Ok(resposta_texto(texto))
}

// GET /api/relatorios/clientes/{cliente_id}/pdf
#[utoipa::path(
    get,
    path = "/api/relatorios/clientes/{cliente_id}/pdf",
    tag = "Relatórios",
    params(("cliente_id" = Uuid, Path, description = "ID do cliente"), RelatorioQuery),
    responses(
        (status = 200, description = "PDF do relatório consolidado", body = Vec<u8>, content_type = "application/pdf"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn pdf_cliente(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(cliente_id): Path<Uuid>,
    Query(query): Query<RelatorioQuery>,
) -> Result<Response, AppError> {
    let (nome_arquivo, bytes) = app_state
        .relatorio_service
        .pdf_cliente(user.id, cliente_id, query.periodo(), query.comparacao())
        .await?;

    Ok(resposta_pdf(nome_arquivo, bytes))
}
