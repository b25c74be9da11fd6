// src/db/cliente_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::cliente::Cliente};

#[derive(Clone)]
pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        nome: &str,
        cnpj_principal: &str,
        email: &str,
        telefone: Option<&str>,
        endereco: Option<&str>,
    ) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (nome, cnpj_principal, email, telefone, endereco, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(cnpj_principal)
        .bind(email)
        .bind(telefone)
        .bind(endereco)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes WHERE created_by = $1 ORDER BY nome",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes WHERE id = $1 AND created_by = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        nome: &str,
        cnpj_principal: &str,
        email: &str,
        telefone: Option<&str>,
        endereco: Option<&str>,
    ) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nome = $1, cnpj_principal = $2, email = $3, telefone = $4,
                endereco = $5, updated_at = now()
            WHERE id = $6 AND created_by = $7
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(cnpj_principal)
        .bind(email)
        .bind(telefone)
        .bind(endereco)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
