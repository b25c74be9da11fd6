// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::loja::Marketplace;

// 1. Resumo geral (os cards do topo do painel)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PainelResumo {
    pub total_clientes: i64,
    pub total_cnpjs: i64,
    pub total_lojas: i64,

    pub faturamento_total: Decimal,
    pub investimento_total: Decimal,

    // faturamento / investimento; 0 quando não houve investimento.
    pub roas_global: f64,
}

// 2. Agregação por marketplace
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceResumo {
    pub marketplace: Marketplace,
    pub faturamento: Option<Decimal>,
    pub investimento: Option<Decimal>,
    pub roas_medio: Option<Decimal>,
}
