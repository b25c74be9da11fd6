// src/models/relatorio.rs

// Valores derivados dos relatórios. Nada daqui é persistido: os insights
// são recalculados a cada geração a partir dos dados mensais.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::dados_mensais::DadosMensais;
use crate::models::loja::{LojaRelatorio, Marketplace};

// --- Período ---

// O par (mes, ano) que identifica a janela do relatório. A comparação de
// período é sempre por igualdade exata, nunca por faixa de datas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Periodo {
    #[schema(example = 3)]
    pub mes: i32,
    #[schema(example = 2024)]
    pub ano: i32,
}

impl Periodo {
    pub fn new(mes: i32, ano: i32) -> Self {
        Self { mes, ano }
    }

    pub fn valido(&self) -> bool {
        (1..=12).contains(&self.mes) && (2000..=2100).contains(&self.ano)
    }

    /// Um dado mensal pertence a este período?
    pub fn contem(&self, dado: &DadosMensais) -> bool {
        dado.mes == self.mes && dado.ano == self.ano
    }
}

// --- Tendência ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tendencia {
    Alta,
    Baixa,
    Estavel,
}

impl Tendencia {
    /// Etiqueta usada no rodapé dos relatórios de texto.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Tendencia::Alta => "📈 ALTA",
            Tendencia::Baixa => "📉 BAIXA",
            Tendencia::Estavel => "➡️ ESTÁVEL",
        }
    }
}

// --- Insights de uma loja ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioInsights {
    #[schema(example = "13000.00")]
    pub total_vendas: Decimal,
    #[schema(example = "3500.00")]
    pub total_ads: Decimal,
    #[schema(example = 70)]
    pub total_itens: i64,

    #[schema(example = 3.5)]
    pub roas_media: f64,
    #[schema(example = 0.27)]
    pub acos_media: f64,

    // Só existem quando um período de comparação foi informado E havia
    // dados nesse período; os renderizadores omitem o bloco caso contrário.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crescimento_vendas: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crescimento_itens: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crescimento_ads: Option<f64>,

    pub tendencia: Tendencia,
    pub recomendacao: String,
}

// --- Insights consolidados (todas as lojas de um cliente) ---

// Linha do quadro por loja, usada no ranking do relatório consolidado.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoLoja {
    pub loja_id: Uuid,
    pub nome: String,
    pub marketplace: Marketplace,

    pub vendas: Decimal,
    pub ads: Decimal,
    pub itens: i64,
    pub roas_media: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioConsolidadoInsights {
    // Mesmo conjunto de métricas da loja, calculado sobre a união dos
    // dados de todas as lojas.
    #[serde(flatten)]
    pub geral: RelatorioInsights,

    pub total_cnpjs: i64,
    pub total_lojas: i64,
    pub total_marketplaces: i64,

    // Quadro por loja, já sem as lojas paradas no período (zero em tudo).
    pub desempenho_lojas: Vec<ResumoLoja>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub melhor_loja_vendas: Option<ResumoLoja>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub melhor_loja_roas: Option<ResumoLoja>,
}

// --- Contextos de geração ---

// Uma loja com seus dados mensais, sem filtro de período: quem filtra é o
// motor de insights.
#[derive(Debug, Clone)]
pub struct LojaComDados {
    pub loja: LojaRelatorio,
    pub dados: Vec<DadosMensais>,
}

// Tudo que os renderizadores precisam para o relatório de uma loja.
#[derive(Debug, Clone)]
pub struct RelatorioLoja {
    pub loja: LojaRelatorio,
    pub dados: Vec<DadosMensais>,
    pub periodo: Periodo,
    pub comparacao: Option<Periodo>,
}

// Idem, para o relatório consolidado de um cliente.
#[derive(Debug, Clone)]
pub struct RelatorioCliente {
    pub cliente_id: Uuid,
    pub cliente_nome: String,
    pub lojas: Vec<LojaComDados>,
    pub periodo: Periodo,
    pub comparacao: Option<Periodo>,
}
