// src/db/loja_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::loja::{Loja, LojaRelatorio, Marketplace},
};

#[derive(Clone)]
pub struct LojaRepository {
    pool: PgPool,
}

impl LojaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        cnpj_id: Uuid,
        nome: &str,
        marketplace: Marketplace,
        url: Option<&str>,
        ativa: bool,
    ) -> Result<Loja, AppError> {
        let loja = sqlx::query_as::<_, Loja>(
            r#"
            INSERT INTO lojas (cnpj_id, nome, marketplace, url, ativa)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(cnpj_id)
        .bind(nome)
        .bind(marketplace)
        .bind(url)
        .bind(ativa)
        .fetch_one(&self.pool)
        .await?;

        Ok(loja)
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        cnpj_id: Option<Uuid>,
        cliente_id: Option<Uuid>,
    ) -> Result<Vec<Loja>, AppError> {
        let lojas = sqlx::query_as::<_, Loja>(
            r#"
            SELECT l.*
            FROM lojas l
            JOIN cnpjs c ON c.id = l.cnpj_id
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE cl.created_by = $1
              AND ($2::uuid IS NULL OR l.cnpj_id = $2)
              AND ($3::uuid IS NULL OR c.cliente_id = $3)
            ORDER BY l.nome
            "#,
        )
        .bind(user_id)
        .bind(cnpj_id)
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lojas)
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<Loja>, AppError> {
        let loja = sqlx::query_as::<_, Loja>(
            r#"
            SELECT l.*
            FROM lojas l
            JOIN cnpjs c ON c.id = l.cnpj_id
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE l.id = $1 AND cl.created_by = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(loja)
    }

    // A loja com CNPJ e cliente resolvidos, como os relatórios precisam.
    pub async fn find_relatorio(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<LojaRelatorio>, AppError> {
        let loja = sqlx::query_as::<_, LojaRelatorio>(
            r#"
            SELECT l.id, l.nome, l.marketplace, l.url, l.ativa,
                   l.cnpj_id, c.cnpj, c.nome_fantasia,
                   cl.id AS cliente_id, cl.nome AS cliente_nome
            FROM lojas l
            JOIN cnpjs c ON c.id = l.cnpj_id
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE l.id = $1 AND cl.created_by = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(loja)
    }

    // Todas as lojas ativas de um cliente, para o relatório consolidado.
    pub async fn list_ativas_do_cliente(
        &self,
        user_id: Uuid,
        cliente_id: Uuid,
    ) -> Result<Vec<LojaRelatorio>, AppError> {
        let lojas = sqlx::query_as::<_, LojaRelatorio>(
            r#"
            SELECT l.id, l.nome, l.marketplace, l.url, l.ativa,
                   l.cnpj_id, c.cnpj, c.nome_fantasia,
                   cl.id AS cliente_id, cl.nome AS cliente_nome
            FROM lojas l
            JOIN cnpjs c ON c.id = l.cnpj_id
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE cl.id = $1 AND cl.created_by = $2 AND l.ativa = true
            ORDER BY l.nome
            "#,
        )
        .bind(cliente_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lojas)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        nome: &str,
        marketplace: Marketplace,
        url: Option<&str>,
        ativa: bool,
    ) -> Result<Option<Loja>, AppError> {
        let loja = sqlx::query_as::<_, Loja>(
            r#"
            UPDATE lojas
            SET nome = $1, marketplace = $2, url = $3, ativa = $4, updated_at = now()
            WHERE id = $5
              AND cnpj_id IN (
                  SELECT c.id FROM cnpjs c
                  JOIN clientes cl ON cl.id = c.cliente_id
                  WHERE cl.created_by = $6
              )
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(marketplace)
        .bind(url)
        .bind(ativa)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(loja)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM lojas
            WHERE id = $1
              AND cnpj_id IN (
                  SELECT c.id FROM cnpjs c
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
