// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::dashboard::{MarketplaceResumo, PainelResumo},
};

// GET /api/dashboard/resumo
#[utoipa::path(
    get,
    path = "/api/dashboard/resumo",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contagens e totais gerais do usuário", body = PainelResumo),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_resumo(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let resumo = app_state.dashboard_service.get_resumo(user.id).await?;

    Ok((StatusCode::OK, Json(resumo)))
}

// GET /api/dashboard/marketplaces
#[utoipa::path(
    get,
    path = "/api/dashboard/marketplaces",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Faturamento e ROAS médio por marketplace", body = Vec<MarketplaceResumo>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_resumo_marketplaces(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let resumos = app_state
        .dashboard_service
        .get_resumo_marketplaces(user.id)
        .await?;

    Ok((StatusCode::OK, Json(resumos)))
}
