// src/services/relatorio/mod.rs

// O serviço de relatórios: busca os dados pelos repositórios, roda o
// motor de insights (puro) e entrega o formato que o handler pedir:
// JSON, texto para o WhatsApp ou PDF para download.

pub mod insights;
pub mod pdf;
pub mod texto;

use chrono::Local;
use uuid::Uuid;

use crate::{
    common::{error::AppError, formato::nome_do_mes},
    db::{ClienteRepository, DadosMensaisRepository, LojaRepository},
    models::relatorio::{
        LojaComDados, Periodo, RelatorioCliente, RelatorioConsolidadoInsights, RelatorioInsights,
        RelatorioLoja,
    },
};

use insights::{calcular_insights, calcular_insights_consolidado};

#[derive(Clone)]
pub struct RelatorioService {
    cliente_repo: ClienteRepository,
    loja_repo: LojaRepository,
    dados_repo: DadosMensaisRepository,
}

impl RelatorioService {
    pub fn new(
        cliente_repo: ClienteRepository,
        loja_repo: LojaRepository,
        dados_repo: DadosMensaisRepository,
    ) -> Self {
        Self {
            cliente_repo,
            loja_repo,
            dados_repo,
        }
    }

    // --- Relatório de uma loja ---

    pub async fn insights_loja(
        &self,
        user_id: Uuid,
        loja_id: Uuid,
        periodo: Periodo,
        comparacao: Option<Periodo>,
    ) -> Result<RelatorioInsights, AppError> {
        let relatorio = self
            .montar_relatorio_loja(user_id, loja_id, periodo, comparacao)
            .await?;

        Ok(calcular_insights(
            &relatorio.dados,
            relatorio.periodo,
            relatorio.comparacao,
        ))
    }

    pub async fn texto_loja(
        &self,
        user_id: Uuid,
        loja_id: Uuid,
        periodo: Periodo,
        comparacao: Option<Periodo>,
    ) -> Result<String, AppError> {
        let relatorio = self
            .montar_relatorio_loja(user_id, loja_id, periodo, comparacao)
            .await?;
        let insights = calcular_insights(&relatorio.dados, relatorio.periodo, relatorio.comparacao);

        Ok(texto::gerar_texto_loja(&relatorio, &insights, Local::now()))
    }

    /// Devolve o nome do arquivo e os bytes do PDF.
    pub async fn pdf_loja(
        &self,
        user_id: Uuid,
        loja_id: Uuid,
        periodo: Periodo,
        comparacao: Option<Periodo>,
    ) -> Result<(String, Vec<u8>), AppError> {
        let relatorio = self
            .montar_relatorio_loja(user_id, loja_id, periodo, comparacao)
            .await?;
        let insights = calcular_insights(&relatorio.dados, relatorio.periodo, relatorio.comparacao);

        let nome_arquivo = format!(
            "relatorio-{}-{}-{}.pdf",
            relatorio.loja.nome,
            nome_do_mes(periodo.mes),
            periodo.ano
        );
        let bytes = pdf::gerar_pdf_loja(&relatorio, &insights, Local::now())?;

        Ok((nome_arquivo, bytes))
    }

    // --- Relatório consolidado de um cliente ---

    pub async fn insights_cliente(
        &self,
        user_id: Uuid,
        cliente_id: Uuid,
        periodo: Periodo,
        comparacao: Option<Periodo>,
    ) -> Result<RelatorioConsolidadoInsights, AppError> {
        let relatorio = self
            .montar_relatorio_cliente(user_id, cliente_id, periodo, comparacao)
            .await?;

        Ok(calcular_insights_consolidado(
            &relatorio.lojas,
            relatorio.periodo,
            relatorio.comparacao,
        ))
    }

    pub async fn texto_cliente(
        &self,
        user_id: Uuid,
        cliente_id: Uuid,
        periodo: Periodo,
        comparacao: Option<Periodo>,
    ) -> Result<String, AppError> {
        let relatorio = self
            .montar_relatorio_cliente(user_id, cliente_id, periodo, comparacao)
            .await?;
        let insights =
            calcular_insights_consolidado(&relatorio.lojas, relatorio.periodo, relatorio.comparacao);

        Ok(texto::gerar_texto_consolidado(
            &relatorio,
            &insights,
            Local::now(),
        ))
    }

    pub async fn pdf_cliente(
        &self,
        user_id: Uuid,
        cliente_id: Uuid,
        periodo: Periodo,
        comparacao: Option<Periodo>,
    ) -> Result<(String, Vec<u8>), AppError> {
        let relatorio = self
            .montar_relatorio_cliente(user_id, cliente_id, periodo, comparacao)
            .await?;
        let insights =
            calcular_insights_consolidado(&relatorio.lojas, relatorio.periodo, relatorio.comparacao);

        let nome_arquivo = format!(
            "relatorio-consolidado-{}-{}-{}.pdf",
            relatorio.cliente_nome,
            nome_do_mes(periodo.mes),
            periodo.ano
        );
        let bytes = pdf::gerar_pdf_consolidado(&relatorio, &insights, Local::now())?;

        Ok((nome_arquivo, bytes))
    }

    // --- Montagem dos contextos ---

    fn validar_periodos(periodo: Periodo, comparacao: Option<Periodo>) -> Result<(), AppError> {
        if !periodo.valido() || comparacao.is_some_and(|p| !p.valido()) {
            return Err(AppError::PeriodoInvalido);
        }
        Ok(())
    }

    async fn montar_relatorio_loja(
        &self,
        user_id: Uuid,
        loja_id: Uuid,
        periodo: Periodo,
        comparacao: Option<Periodo>,
    ) -> Result<RelatorioLoja, AppError> {
        Self::validar_periodos(periodo, comparacao)?;

        let loja = self
            .loja_repo
            .find_relatorio(user_id, loja_id)
            .await?
            .ok_or(AppError::LojaNotFound)?;

        // Histórico completo da loja; o recorte de período é do motor.
        let dados = self.dados_repo.list_por_loja(user_id, loja_id).await?;

        Ok(RelatorioLoja {
            loja,
            dados,
            periodo,
            comparacao,
        })
    }

    async fn montar_relatorio_cliente(
        &self,
        user_id: Uuid,
        cliente_id: Uuid,
        periodo: Periodo,
        comparacao: Option<Periodo>,
    ) -> Result<RelatorioCliente, AppError> {
        Self::validar_periodos(periodo, comparacao)?;

        let cliente = self
            .cliente_repo
            .find(user_id, cliente_id)
            .await?
            .ok_or(AppError::ClienteNotFound)?;

        let lojas = self
            .loja_repo
            .list_ativas_do_cliente(user_id, cliente_id)
            .await?;

        let loja_ids: Vec<Uuid> = lojas.iter().map(|l| l.id).collect();
        let dados = if loja_ids.is_empty() {
            Vec::new()
        } else {
            self.dados_repo.list_por_lojas(&loja_ids).await?
        };

        // Agrupa o histórico por loja.
        let lojas_com_dados = lojas
            .into_iter()
            .map(|loja| {
                let dados_da_loja = dados
                    .iter()
                    .filter(|d| d.loja_id == loja.id)
                    .cloned()
                    .collect();

                LojaComDados {
                    loja,
                    dados: dados_da_loja,
                }
            })
            .collect();

        Ok(RelatorioCliente {
            cliente_id: cliente.id,
            cliente_nome: cliente.nome,
            lojas: lojas_com_dados,
            periodo,
            comparacao,
        })
    }
}
