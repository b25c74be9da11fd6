// src/models/cliente.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// O cliente é a entidade de topo: todo relatório consolidado é gerado
// para um cliente e tudo abaixo dele (CNPJs, lojas, dados) pertence a ele.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Acme Comércio Digital")]
    pub nome: String,

    #[schema(example = "11.222.333/0001-81")]
    pub cnpj_principal: String,

    #[schema(example = "contato@acme.com.br")]
    pub email: String,

    pub telefone: Option<String>,
    pub endereco: Option<String>,

    // Dono do cadastro: cada usuário só enxerga os próprios clientes.
    #[schema(ignore)]
    pub created_by: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
