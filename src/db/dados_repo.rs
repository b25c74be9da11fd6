// src/db/dados_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::dados_mensais::{DadosMensais, TipoCampanha},
};

#[derive(Clone)]
pub struct DadosMensaisRepository {
    pool: PgPool,
}

impl DadosMensaisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        loja_id: Uuid,
        mes: i32,
        ano: i32,
        faturamento_bruto: Decimal,
        investimento_ads: Decimal,
        itens_vendidos: i32,
        tipo_campanha: TipoCampanha,
        roas: Option<Decimal>,
        acos: Option<Decimal>,
        observacoes: Option<&str>,
    ) -> Result<DadosMensais, AppError> {
        let dado = sqlx::query_as::<_, DadosMensais>(
            r#"
            INSERT INTO dados_mensais
                (loja_id, mes, ano, faturamento_bruto, investimento_ads,
                 itens_vendidos, tipo_campanha, roas, acos, observacoes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(loja_id)
        .bind(mes)
        .bind(ano)
        .bind(faturamento_bruto)
        .bind(investimento_ads)
        .bind(itens_vendidos)
        .bind(tipo_campanha)
        .bind(roas)
        .bind(acos)
        .bind(observacoes)
        .fetch_one(&self.pool)
        .await?;

        Ok(dado)
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        loja_id: Option<Uuid>,
        ano: Option<i32>,
    ) -> Result<Vec<DadosMensais>, AppError> {
        let dados = sqlx::query_as::<_, DadosMensais>(
            r#"
            SELECT d.*
            FROM dados_mensais d
            JOIN lojas l ON l.id = d.loja_id
            JOIN cnpjs c ON c.id = l.cnpj_id
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE cl.created_by = $1
              AND ($2::uuid IS NULL OR d.loja_id = $2)
              AND ($3::int IS NULL OR d.ano = $3)
            ORDER BY d.ano DESC, d.mes DESC
            "#,
        )
        .bind(user_id)
        .bind(loja_id)
        .bind(ano)
        .fetch_all(&self.pool)
        .await?;

        Ok(dados)
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<DadosMensais>, AppError> {
        let dado = sqlx::query_as::<_, DadosMensais>(
            r#"
            SELECT d.*
            FROM dados_mensais d
            JOIN lojas l ON l.id = d.loja_id
            JOIN cnpjs c ON c.id = l.cnpj_id
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE d.id = $1 AND cl.created_by = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(dado)
    }

    // Histórico completo de uma loja, sem filtro de período: o motor de
    // insights é quem recorta o período.
    pub async fn list_por_loja(
        &self,
        user_id: Uuid,
        loja_id: Uuid,
    ) -> Result<Vec<DadosMensais>, AppError> {
        self.list(user_id, Some(loja_id), None).await
    }

    // Histórico de um conjunto de lojas de uma vez (relatório consolidado).
    // A posse das lojas já foi verificada por quem montou a lista de IDs.
    pub async fn list_por_lojas(&self, loja_ids: &[Uuid]) -> Result<Vec<DadosMensais>, AppError> {
        let dados = sqlx::query_as::<_, DadosMensais>(
            r#"
            SELECT *
            FROM dados_mensais
            WHERE loja_id = ANY($1)
            ORDER BY ano DESC, mes DESC
            "#,
        )
        .bind(loja_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(dados)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        mes: i32,
        ano: i32,
        faturamento_bruto: Decimal,
        investimento_ads: Decimal,
        itens_vendidos: i32,
        tipo_campanha: TipoCampanha,
        roas: Option<Decimal>,
        acos: Option<Decimal>,
        observacoes: Option<&str>,
    ) -> Result<Option<DadosMensais>, AppError> {
        let dado = sqlx::query_as::<_, DadosMensais>(
            r#"
            UPDATE dados_mensais
            SET mes = $1, ano = $2, faturamento_bruto = $3, investimento_ads = $4,
                itens_vendidos = $5, tipo_campanha = $6, roas = $7, acos = $8,
                observacoes = $9, updated_at = now()
            WHERE id = $10
              AND loja_id IN (
                  SELECT l.id FROM lojas l
                  JOIN cnpjs c ON c.id = l.cnpj_id
                  JOIN clientes cl ON cl.id = c.cliente_id
                  WHERE cl.created_by = $11
              )
            RETURNING *
            "#,
        )
        .bind(mes)
        .bind(ano)
        .bind(faturamento_bruto)
        .bind(investimento_ads)
        .bind(itens_vendidos)
        .bind(tipo_campanha)
        .bind(roas)
        .bind(acos)
        .bind(observacoes)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(dado)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM dados_mensais
            WHERE id = $1
              AND loja_id IN (
                  SELECT l.id FROM lojas l
                  JOIN cnpjs c ON c.id = l.cnpj_id
                  JOIN clientes cl ON cl.id = c.cliente_id
                  WHERE cl.created_by = $2
              )
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
