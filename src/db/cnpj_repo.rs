// src/db/cnpj_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::cnpj::Cnpj};

// Todas as consultas sobem até 'clientes' para garantir que o usuário só
// enxerga CNPJs dos próprios clientes.
#[derive(Clone)]
pub struct CnpjRepository {
    pool: PgPool,
}

impl CnpjRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        cliente_id: Uuid,
        cnpj: &str,
        nome_fantasia: &str,
        razao_social: &str,
        endereco: Option<&str>,
    ) -> Result<Cnpj, AppError> {
        let registro = sqlx::query_as::<_, Cnpj>(
            r#"
            INSERT INTO cnpjs (cliente_id, cnpj, nome_fantasia, razao_social, endereco)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(cliente_id)
        .bind(cnpj)
        .bind(nome_fantasia)
        .bind(razao_social)
        .bind(endereco)
        .fetch_one(&self.pool)
        .await?;

        Ok(registro)
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        cliente_id: Option<Uuid>,
    ) -> Result<Vec<Cnpj>, AppError> {
        let registros = sqlx::query_as::<_, Cnpj>(
            r#"
            SELECT c.*
            FROM cnpjs c
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE cl.created_by = $1
              AND ($2::uuid IS NULL OR c.cliente_id = $2)
            ORDER BY c.nome_fantasia
            "#,
        )
        .bind(user_id)
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registros)
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<Cnpj>, AppError> {
        let registro = sqlx::query_as::<_, Cnpj>(
            r#"
            SELECT c.*
            FROM cnpjs c
            JOIN clientes cl ON cl.id = c.cliente_id
            WHERE c.id = $1 AND cl.created_by = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registro)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        cnpj: &str,
        nome_fantasia: &str,
        razao_social: &str,
        endereco: Option<&str>,
    ) -> Result<Option<Cnpj>, AppError> {
        let registro = sqlx::query_as::<_, Cnpj>(
            r#"
            UPDATE cnpjs
            SET cnpj = $1, nome_fantasia = $2, razao_social = $3,
                endereco = $4, updated_at = now()
            WHERE id = $5
              AND cliente_id IN (SELECT id FROM clientes WHERE created_by = $6)
            RETURNING *
            "#,
        )
        .bind(cnpj)
        .bind(nome_fantasia)
        .bind(razao_social)
        .bind(endereco)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registro)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM cnpjs
            WHERE id = $1
              AND cliente_id IN (SELECT id FROM clientes WHERE created_by = $2)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
