// src/models/cnpj.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Um registro fiscal (CNPJ) de um cliente. Uma mesma operação costuma ter
// vários CNPJs, cada um com suas lojas nos marketplaces.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cnpj {
    pub id: Uuid,

    pub cliente_id: Uuid,

    #[schema(example = "11222333000181")]
    pub cnpj: String,

    #[schema(example = "Acme Store")]
    pub nome_fantasia: String,

    #[schema(example = "Acme Comércio Digital LTDA")]
    pub razao_social: String,

    pub endereco: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
