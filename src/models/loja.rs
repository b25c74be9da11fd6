// src/models/loja.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "marketplace_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Marketplace {
    Shopee,
    MercadoLivre,
    TiktokShop,
    Shein,
    Magalu,
    Amazon,
    Outros,
}

impl Marketplace {
    /// Nome de exibição do canal, usado nos relatórios.
    pub fn rotulo(&self) -> &'static str {
        match self {
            Marketplace::Shopee => "Shopee",
            Marketplace::MercadoLivre => "Mercado Livre",
            Marketplace::TiktokShop => "TikTok Shop",
            Marketplace::Shein => "Shein",
            Marketplace::Magalu => "Magalu",
            Marketplace::Amazon => "Amazon",
            Marketplace::Outros => "Outros",
        }
    }
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Loja {
    pub id: Uuid,

    pub cnpj_id: Uuid,

    #[schema(example = "Acme Oficial")]
    pub nome: String,

    pub marketplace: Marketplace,

    #[schema(example = "https://shopee.com.br/acmeoficial")]
    pub url: Option<String>,

    // Lojas inativas continuam no cadastro, mas ficam fora dos
    // relatórios consolidados.
    #[schema(example = true)]
    pub ativa: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Linha "enriquecida" usada pelos relatórios: a loja com o CNPJ e o
// cliente aos quais ela pertence, resolvidos num único JOIN.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LojaRelatorio {
    pub id: Uuid,
    pub nome: String,
    pub marketplace: Marketplace,
    pub url: Option<String>,
    pub ativa: bool,

    pub cnpj_id: Uuid,
    pub cnpj: String,
    pub nome_fantasia: String,

    pub cliente_id: Uuid,
    pub cliente_nome: String,
}
