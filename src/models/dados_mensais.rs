// src/models/dados_mensais.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "campaign_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TipoCampanha {
    Organica, // Sem tráfego pago
    Paga,     // Só tráfego pago
    Ambas,    // Mistura das duas
}

// O desempenho de uma loja em um mês. Pode haver mais de uma linha para o
// mesmo (loja, mes, ano) quando a operação separa campanhas; os relatórios
// somam faturamento/investimento/itens e tiram a média de ROAS/ACOS.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosMensais {
    pub id: Uuid,

    pub loja_id: Uuid,

    #[schema(example = 3)]
    pub mes: i32,
    #[schema(example = 2024)]
    pub ano: i32,

    #[schema(example = "10000.00")]
    pub faturamento_bruto: Decimal,

    #[schema(example = "2000.00")]
    pub investimento_ads: Decimal,

    #[schema(example = 50)]
    pub itens_vendidos: i32,

    pub tipo_campanha: TipoCampanha,

    // ROAS e ACOS são derivados no cadastro; ficam nulos quando não há
    // investimento (nunca dividimos por zero). ACOS é guardado como fração.
    #[schema(example = "5.00")]
    pub roas: Option<Decimal>,
    #[schema(example = "0.2000")]
    pub acos: Option<Decimal>,

    pub observacoes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
