// src/db/dashboard_repo.rs

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::dashboard::{MarketplaceResumo, PainelResumo},
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Resumo Geral (contagens + totais de todos os meses do usuário)
    pub async fn get_resumo(&self, user_id: Uuid) -> Result<PainelResumo, AppError> {
        // Transação só para ter um snapshot consistente das leituras.
        let mut tx = self.pool.begin().await?;

        let total_clientes: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM clientes WHERE created_by = $1")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;

        let total_cnpjs: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM cnpjs c
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE cl.created_by = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        let total_lojas: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM lojas l
            JOIN cnpjs c ON c.id = l.cnpj_id
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE cl.created_by = $1 AND l.ativa = true
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        let (faturamento_total, investimento_total): (Decimal, Decimal) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(d.faturamento_bruto), 0),
                   COALESCE(SUM(d.investimento_ads), 0)
            FROM dados_mensais d
            JOIN lojas l ON l.id = d.loja_id
            JOIN cnpjs c ON c.id = l.cnpj_id
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE cl.created_by = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let roas_global = if investimento_total > Decimal::ZERO {
            (faturamento_total / investimento_total)
                .to_f64()
                .unwrap_or(0.0)
        } else {
            0.0
        };

        Ok(PainelResumo {
            total_clientes,
            total_cnpjs,
            total_lojas,
            faturamento_total,
            investimento_total,
            roas_global,
        })
    }

    // 2. Agregação por marketplace (AVG ignora os ROAS nulos sozinho)
    pub async fn get_resumo_marketplaces(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MarketplaceResumo>, AppError> {
        let resumos = sqlx::query_as::<_, MarketplaceResumo>(
            r#"
            SELECT l.marketplace,
                   SUM(d.faturamento_bruto) AS faturamento,
                   SUM(d.investimento_ads) AS investimento,
                   AVG(d.roas) AS roas_medio
            FROM dados_mensais d
            JOIN lojas l ON l.id = d.loja_id
            JOIN cnpjs c ON c.id = l.cnpj_id
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE cl.created_by = $1
            GROUP BY l.marketplace
            ORDER BY faturamento DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(resumos)
    }
}
