// src/services/relatorio/texto.rs

// Renderizador de texto: o bloco pronto para colar no WhatsApp. A ordem
// das seções é fixa; o que muda entre loja e consolidado são o título, as
// linhas de canal e o bloco de destaques.

use chrono::{DateTime, Local};

use crate::common::formato::{formatar_moeda, formatar_percentual, nome_do_mes, ultimo_dia_do_mes};
use crate::models::relatorio::{
    Periodo, RelatorioCliente, RelatorioConsolidadoInsights, RelatorioInsights, RelatorioLoja,
};

/// Relatório de texto de uma loja.
pub fn gerar_texto_loja(
    relatorio: &RelatorioLoja,
    insights: &RelatorioInsights,
    gerado_em: DateTime<Local>,
) -> String {
    let loja = &relatorio.loja;
    let periodo = relatorio.periodo;
    let mes_nome = nome_do_mes(periodo.mes);

    let mut texto = format!(
        "📊 Relatório de Vendas {} - {} {}\n\n",
        loja.cliente_nome, mes_nome, periodo.ano
    );
    texto.push_str(&linha_periodo(periodo));
    texto.push_str(&format!(
        "🌐 Canal: {} - {}\n\n",
        loja.marketplace.rotulo().to_uppercase(),
        loja.nome.to_uppercase()
    ));

    texto.push_str(&bloco_resumo(insights));
    texto.push_str(&bloco_metricas(insights));
    texto.push_str(&bloco_comparacao(insights, relatorio.comparacao));
    texto.push_str(&rodape(insights, gerado_em));

    texto
}

/// Relatório de texto consolidado de um cliente.
pub fn gerar_texto_consolidado(
    relatorio: &RelatorioCliente,
    insights: &RelatorioConsolidadoInsights,
    gerado_em: DateTime<Local>,
) -> String {
    let periodo = relatorio.periodo;
    let mes_nome = nome_do_mes(periodo.mes);

    let mut texto = format!(
        "📊 Relatório Consolidado {} - {} {}\n\n",
        relatorio.cliente_nome, mes_nome, periodo.ano
    );
    texto.push_str(&linha_periodo(periodo));

    // Canais: as 5 maiores lojas do período, por faturamento.
    let mut quadro = insights.desempenho_lojas.clone();
    quadro.sort_by(|a, b| b.vendas.cmp(&a.vendas));

    if !quadro.is_empty() {
        texto.push_str("🌐 Canais:\n");
        for resumo in quadro.iter().take(5) {
            texto.push_str(&format!(
                "• {} - {}\n",
                resumo.marketplace.rotulo().to_uppercase(),
                resumo.nome.to_uppercase()
            ));
        }
        texto.push('\n');
    }

    texto.push_str(&bloco_resumo(&insights.geral));
    texto.push_str(&format!(
        "🏢 CNPJs: {} | 🏬 Lojas: {} | 🌐 Marketplaces: {}\n\n",
        insights.total_cnpjs, insights.total_lojas, insights.total_marketplaces
    ));

    texto.push_str(&bloco_metricas(&insights.geral));
    texto.push_str(&bloco_comparacao(&insights.geral, relatorio.comparacao));

    // Destaques do portfólio.
    if let Some(melhor) = &insights.melhor_loja_vendas {
        texto.push_str("🏆 Destaques\n");
        texto.push_str(&format!(
            "⭐ Melhor loja em vendas: {} ({})\n",
            melhor.nome,
            formatar_moeda(melhor.vendas)
        ));

        if let Some(melhor_roas) = &insights.melhor_loja_roas {
            if melhor_roas.roas_media > 0.0 {
                texto.push_str(&format!(
                    "🎯 Melhor ROAS: {} ({:.2})\n",
                    melhor_roas.nome, melhor_roas.roas_media
                ));
            }
        }
        texto.push('\n');
    }

    texto.push_str(&rodape(&insights.geral, gerado_em));

    texto
}

fn linha_periodo(periodo: Periodo) -> String {
    let mes_nome = nome_do_mes(periodo.mes);
    format!(
        "🗓️ Período: 01 a {} de {}\n\n",
        ultimo_dia_do_mes(periodo.ano, periodo.mes),
        mes_nome
    )
}

fn bloco_resumo(insights: &RelatorioInsights) -> String {
    let mut bloco = String::from("📈 Resumo do Desempenho\n");
    bloco.push_str(&format!(
        "💰 Total de Vendas: {}\n",
        formatar_moeda(insights.total_vendas)
    ));
    bloco.push_str(&format!("📦 Unidades Vendidas: {}\n", insights.total_itens));
    bloco.push_str(&format!(
        "📣 Investimento em Ads: {}\n\n",
        formatar_moeda(insights.total_ads)
    ));
    bloco
}

// Só aparece quando houve ROAS no período.
fn bloco_metricas(insights: &RelatorioInsights) -> String {
    if insights.roas_media <= 0.0 {
        return String::new();
    }

    let mut bloco = String::from("📊 Métricas de Performance\n");
    bloco.push_str(&format!("🎯 ROAS Médio: {:.2}\n", insights.roas_media));
    bloco.push_str(&format!(
        "💸 ACOS Médio: {:.1}%\n\n",
        insights.acos_media * 100.0
    ));
    bloco
}

// Só aparece quando o crescimento foi calculado (período de comparação
// informado e com registros).
fn bloco_comparacao(insights: &RelatorioInsights, comparacao: Option<Periodo>) -> String {
    let (Some(crescimento_vendas), Some(comparacao)) = (insights.crescimento_vendas, comparacao)
    else {
        return String::new();
    };

    let mut bloco = format!(
        "📈 Comparação vs {} {}\n",
        nome_do_mes(comparacao.mes),
        comparacao.ano
    );
    bloco.push_str(&format!(
        "💰 Crescimento em Vendas: {}\n",
        formatar_percentual(crescimento_vendas)
    ));
    bloco.push_str(&format!(
        "📦 Crescimento em Unidades: {}\n",
        formatar_percentual(insights.crescimento_itens.unwrap_or(0.0))
    ));
    bloco.push_str(&format!(
        "📣 Variação em Ads: {}\n\n",
        formatar_percentual(insights.crescimento_ads.unwrap_or(0.0))
    ));
    bloco
}

fn rodape(insights: &RelatorioInsights, gerado_em: DateTime<Local>) -> String {
    let mut bloco = format!("💡 Insight: {}\n\n", insights.recomendacao);
    bloco.push_str(&format!("🏷️ Tendência: {}\n\n", insights.tendencia.etiqueta()));
    bloco.push_str("---\n");
    bloco.push_str(&format!(
        "Relatório gerado automaticamente em {}",
        gerado_em.format("%d/%m/%Y às %H:%M")
    ));
    bloco
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dados_mensais::{DadosMensais, TipoCampanha};
    use crate::models::loja::{LojaRelatorio, Marketplace};
    use crate::models::relatorio::LojaComDados;
    use crate::services::relatorio::insights::{calcular_insights, calcular_insights_consolidado};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn dado(mes: i32, ano: i32, faturamento: i64, ads: i64, itens: i32, roas: Option<Decimal>, acos: Option<Decimal>) -> DadosMensais {
        DadosMensais {
            id: Uuid::new_v4(),
            loja_id: Uuid::new_v4(),
            mes,
            ano,
            faturamento_bruto: Decimal::from(faturamento),
            investimento_ads: Decimal::from(ads),
            itens_vendidos: itens,
            tipo_campanha: TipoCampanha::Paga,
            roas,
            acos,
            observacoes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn loja(nome: &str, marketplace: Marketplace) -> LojaRelatorio {
        LojaRelatorio {
            id: Uuid::new_v4(),
            nome: nome.to_string(),
            marketplace,
            url: None,
            ativa: true,
            cnpj_id: Uuid::new_v4(),
            cnpj: "11222333000181".to_string(),
            nome_fantasia: "Acme Store".to_string(),
            cliente_id: Uuid::new_v4(),
            cliente_nome: "Acme Comércio Digital".to_string(),
        }
    }

    fn instante_fixo() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 4, 10, 15, 30, 0).unwrap()
    }

    #[test]
    fn relatorio_completo_de_loja() {
        let relatorio = RelatorioLoja {
            loja: loja("Acme Oficial", Marketplace::Shopee),
            dados: vec![
                dado(3, 2024, 5000, 1000, 40, Some(Decimal::from(5)), Some(Decimal::new(2, 1))),
                dado(2, 2024, 4000, 800, 30, None, None),
            ],
            periodo: Periodo::new(3, 2024),
            comparacao: Some(Periodo::new(2, 2024)),
        };
        let insights = calcular_insights(&relatorio.dados, relatorio.periodo, relatorio.comparacao);

        let texto = gerar_texto_loja(&relatorio, &insights, instante_fixo());

        let esperado = "\
📊 Relatório de Vendas Acme Comércio Digital - Março 2024

🗓️ Período: 01 a 31 de Março

🌐 Canal: SHOPEE - ACME OFICIAL

📈 Resumo do Desempenho
💰 Total de Vendas: R$ 5.000,00
📦 Unidades Vendidas: 40
📣 Investimento em Ads: R$ 1.000,00

📊 Métricas de Performance
🎯 ROAS Médio: 5.00
💸 ACOS Médio: 20.0%

📈 Comparação vs Fevereiro 2024
💰 Crescimento em Vendas: +25.0%
📦 Crescimento em Unidades: +33.3%
📣 Variação em Ads: +25.0%

💡 Insight: ROAS excelente! Considere aumentar o investimento em Ads.

🏷️ Tendência: 📈 ALTA

---
Relatório gerado automaticamente em 10/04/2024 às 15:30";

        assert_eq!(texto, esperado);
    }

    #[test]
    fn sem_roas_omite_bloco_de_metricas() {
        let relatorio = RelatorioLoja {
            loja: loja("Acme Oficial", Marketplace::Magalu),
            dados: vec![dado(3, 2024, 5000, 0, 40, None, None)],
            periodo: Periodo::new(3, 2024),
            comparacao: None,
        };
        let insights = calcular_insights(&relatorio.dados, relatorio.periodo, None);

        let texto = gerar_texto_loja(&relatorio, &insights, instante_fixo());

        assert!(!texto.contains("Métricas de Performance"));
        assert!(!texto.contains("Comparação vs"));
        // Houve venda sem ROAS lançado: a recomendação de ROAS baixo vale.
        assert!(texto.contains(
            "💡 Insight: ROAS baixo. Revise palavras-chave e segmentação dos anúncios."
        ));
        assert!(texto.contains("🏷️ Tendência: ➡️ ESTÁVEL"));
    }

    #[test]
    fn consolidado_lista_top_5_por_vendas() {
        let nomes = ["L1", "L2", "L3", "L4", "L5", "L6"];
        let lojas: Vec<LojaComDados> = nomes
            .iter()
            .enumerate()
            .map(|(i, nome)| LojaComDados {
                loja: loja(nome, Marketplace::Shopee),
                // L1 fatura 1000, L2 2000... L6 6000.
                dados: vec![dado(3, 2024, 1000 * (i as i64 + 1), 100, 10, None, None)],
            })
            .collect();

        let relatorio = RelatorioCliente {
            cliente_id: Uuid::new_v4(),
            cliente_nome: "Acme Comércio Digital".to_string(),
            lojas,
            periodo: Periodo::new(3, 2024),
            comparacao: None,
        };
        let insights =
            calcular_insights_consolidado(&relatorio.lojas, relatorio.periodo, relatorio.comparacao);

        let texto = gerar_texto_consolidado(&relatorio, &insights, instante_fixo());

        // As 5 maiores aparecem, em ordem decrescente; a menor fica de fora.
        let pos = |nome: &str| texto.find(&format!("- {}\n", nome)).unwrap_or(usize::MAX);
        assert!(texto.contains("• SHOPEE - L6"));
        assert!(pos("L6") < pos("L5"));
        assert!(pos("L5") < pos("L4"));
        assert!(pos("L4") < pos("L3"));
        assert!(pos("L3") < pos("L2"));
        assert!(!texto.contains("• SHOPEE - L1\n"));
    }

    #[test]
    fn consolidado_traz_contagens_e_destaques() {
        let lojas = vec![
            LojaComDados {
                loja: loja("Loja A", Marketplace::Shopee),
                dados: vec![dado(3, 2024, 10000, 2000, 50, Some(Decimal::from(5)), None)],
            },
            LojaComDados {
                loja: loja("Loja B", Marketplace::MercadoLivre),
                dados: vec![dado(3, 2024, 3000, 1500, 20, Some(Decimal::from(2)), None)],
            },
        ];

        let relatorio = RelatorioCliente {
            cliente_id: Uuid::new_v4(),
            cliente_nome: "Acme Comércio Digital".to_string(),
            lojas,
            periodo: Periodo::new(3, 2024),
            comparacao: None,
        };
        let insights =
            calcular_insights_consolidado(&relatorio.lojas, relatorio.periodo, relatorio.comparacao);

        let texto = gerar_texto_consolidado(&relatorio, &insights, instante_fixo());

        assert!(texto.starts_with("📊 Relatório Consolidado Acme Comércio Digital - Março 2024"));
        assert!(texto.contains("🏢 CNPJs: 2 | 🏬 Lojas: 2 | 🌐 Marketplaces: 2"));
        assert!(texto.contains("💰 Total de Vendas: R$ 13.000,00"));
        assert!(texto.contains("⭐ Melhor loja em vendas: Loja A (R$ 10.000,00)"));
        assert!(texto.contains("🎯 Melhor ROAS: Loja A (5.00)"));
        assert!(texto.contains("💡 Insight: Portfólio estável. Mantenha o bom trabalho!"));
    }

    #[test]
    fn consolidado_sem_atividade_omite_destaques() {
        let relatorio = RelatorioCliente {
            cliente_id: Uuid::new_v4(),
            cliente_nome: "Acme Comércio Digital".to_string(),
            lojas: vec![LojaComDados {
                loja: loja("Parada", Marketplace::Shopee),
                dados: vec![],
            }],
            periodo: Periodo::new(3, 2024),
            comparacao: None,
        };
        let insights =
            calcular_insights_consolidado(&relatorio.lojas, relatorio.periodo, relatorio.comparacao);

        let texto = gerar_texto_consolidado(&relatorio, &insights, instante_fixo());

        assert!(!texto.contains("🏆 Destaques"));
        assert!(!texto.contains("🌐 Canais:"));
    }
}
