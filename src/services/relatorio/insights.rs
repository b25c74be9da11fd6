// src/services/relatorio/insights.rs

// O motor de insights: funções puras que transformam dados mensais em
// totais, médias, crescimento e recomendação. Os dois motores (loja e
// consolidado) compartilham a mesma agregação; só mudam o escopo, o
// limiar de tendência e as mensagens.

use std::collections::HashSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{
    dados_mensais::DadosMensais,
    relatorio::{
        LojaComDados, Periodo, RelatorioConsolidadoInsights, RelatorioInsights, ResumoLoja,
        Tendencia,
    },
};

// Limiares de tendência: oscilações de portfólio são julgadas com mais
// conservadorismo do que as de uma loja só.
const LIMIAR_TENDENCIA_LOJA: f64 = 5.0;
const LIMIAR_TENDENCIA_CONSOLIDADO: f64 = 10.0;

// Limiares de ROAS, iguais nos dois motores.
const ROAS_ALTO: f64 = 4.0;
const ROAS_BAIXO: f64 = 2.0;

// Mensagens de recomendação de cada motor.
struct Mensagens {
    crescimento_alto: &'static str,
    crescimento_baixo: &'static str,
    roas_alto: &'static str,
    roas_baixo: &'static str,
    padrao: &'static str,
}

const MENSAGENS_LOJA: Mensagens = Mensagens {
    crescimento_alto: "Excelente crescimento! Continue investindo nesta estratégia.",
    crescimento_baixo: "Performance em declínio. Considere revisar a estratégia de marketing.",
    roas_alto: "ROAS excelente! Considere aumentar o investimento em Ads.",
    roas_baixo: "ROAS baixo. Revise palavras-chave e segmentação dos anúncios.",
    padrao: "Mantenha o bom trabalho!",
};

const MENSAGENS_CONSOLIDADO: Mensagens = Mensagens {
    crescimento_alto: "Excelente crescimento do portfólio! Continue investindo nesta estratégia.",
    crescimento_baixo: "Portfólio em declínio. Considere revisar a estratégia das lojas.",
    roas_alto: "ROAS excelente no portfólio! Considere aumentar o investimento em Ads.",
    roas_baixo: "ROAS baixo no portfólio. Revise palavras-chave e segmentação dos anúncios.",
    padrao: "Portfólio estável. Mantenha o bom trabalho!",
};

// Agregado de um conjunto de registros dentro de um período.
#[derive(Debug, Default)]
struct Totais {
    registros: usize,
    vendas: Decimal,
    ads: Decimal,
    itens: i64,
    roas_media: f64,
    acos_media: f64,
}

// A agregação genérica dos dois motores: soma faturamento/investimento/
// itens e tira a média dos ROAS/ACOS não nulos, só dos registros cujo
// (mes, ano) bate exatamente com o período.
fn totais_do_periodo<'a, I>(registros: I, periodo: Periodo) -> Totais
where
    I: IntoIterator<Item = &'a DadosMensais>,
{
    let mut totais = Totais::default();
    let mut soma_roas = Decimal::ZERO;
    let mut n_roas: i64 = 0;
    let mut soma_acos = Decimal::ZERO;
    let mut n_acos: i64 = 0;

    for dado in registros {
        if !periodo.contem(dado) {
            continue;
        }

        totais.registros += 1;
        totais.vendas += dado.faturamento_bruto;
        totais.ads += dado.investimento_ads;
        totais.itens += i64::from(dado.itens_vendidos);

        if let Some(roas) = dado.roas {
            soma_roas += roas;
            n_roas += 1;
        }
        if let Some(acos) = dado.acos {
            soma_acos += acos;
            n_acos += 1;
        }
    }

    totais.roas_media = media(soma_roas, n_roas);
    totais.acos_media = media(soma_acos, n_acos);
    totais
}

fn media(soma: Decimal, quantidade: i64) -> f64 {
    if quantidade > 0 {
        (soma / Decimal::from(quantidade)).to_f64().unwrap_or(0.0)
    } else {
        0.0
    }
}

/// Variação percentual total: (atual - anterior) / anterior * 100.
/// Base zero devolve 0 em vez de infinito; é uma decisão de produto, não
/// um percentual de verdade.
fn variacao_percentual(atual: Decimal, anterior: Decimal) -> f64 {
    if anterior > Decimal::ZERO {
        ((atual - anterior) / anterior * Decimal::from(100))
            .to_f64()
            .unwrap_or(0.0)
    } else {
        0.0
    }
}

// Monta o conjunto de insights a partir dos agregados. O crescimento só
// existe quando o período de comparação tinha pelo menos um registro, e a
// recomendação de ROAS sempre tem a palavra final sobre a de crescimento.
fn montar_insights(
    atual: Totais,
    comparacao: Option<Totais>,
    limiar: f64,
    mensagens: &Mensagens,
) -> RelatorioInsights {
    let mut insights = RelatorioInsights {
        total_vendas: atual.vendas,
        total_ads: atual.ads,
        total_itens: atual.itens,
        roas_media: atual.roas_media,
        acos_media: atual.acos_media,
        crescimento_vendas: None,
        crescimento_itens: None,
        crescimento_ads: None,
        tendencia: Tendencia::Estavel,
        recomendacao: mensagens.padrao.to_string(),
    };

    if let Some(base) = comparacao.filter(|b| b.registros > 0) {
        let crescimento_vendas = variacao_percentual(atual.vendas, base.vendas);

        insights.crescimento_vendas = Some(crescimento_vendas);
        insights.crescimento_itens = Some(variacao_percentual(
            Decimal::from(atual.itens),
            Decimal::from(base.itens),
        ));
        insights.crescimento_ads = Some(variacao_percentual(atual.ads, base.ads));

        if crescimento_vendas > limiar {
            insights.tendencia = Tendencia::Alta;
            insights.recomendacao = mensagens.crescimento_alto.to_string();
        } else if crescimento_vendas < -limiar {
            insights.tendencia = Tendencia::Baixa;
            insights.recomendacao = mensagens.crescimento_baixo.to_string();
        }
    }

    // Sobrescreve a mensagem de crescimento: o ROAS tem a palavra final.
    // Período sem registro nenhum fica na mensagem padrão; com registros,
    // ROAS médio abaixo de 2 reclama mesmo quando não houve ROAS lançado.
    if insights.roas_media > ROAS_ALTO {
        insights.recomendacao = mensagens.roas_alto.to_string();
    } else if atual.registros > 0 && insights.roas_media < ROAS_BAIXO {
        insights.recomendacao = mensagens.roas_baixo.to_string();
    }

    insights
}

/// Motor de insights de uma loja: recebe o histórico completo e recorta o
/// período alvo (e o de comparação, se houver).
pub fn calcular_insights(
    dados: &[DadosMensais],
    periodo: Periodo,
    comparacao: Option<Periodo>,
) -> RelatorioInsights {
    let atual = totais_do_periodo(dados, periodo);
    let base = comparacao.map(|p| totais_do_periodo(dados, p));

    montar_insights(atual, base, LIMIAR_TENDENCIA_LOJA, &MENSAGENS_LOJA)
}

/// Motor consolidado: a união dos dados de todas as lojas ativas de um
/// cliente, mais o quadro por loja e os rankings.
pub fn calcular_insights_consolidado(
    lojas: &[LojaComDados],
    periodo: Periodo,
    comparacao: Option<Periodo>,
) -> RelatorioConsolidadoInsights {
    let atual = totais_do_periodo(lojas.iter().flat_map(|l| &l.dados), periodo);
    let base = comparacao.map(|p| totais_do_periodo(lojas.iter().flat_map(|l| &l.dados), p));

    let geral = montar_insights(atual, base, LIMIAR_TENDENCIA_CONSOLIDADO, &MENSAGENS_CONSOLIDADO);

    let total_cnpjs = lojas
        .iter()
        .map(|l| l.loja.cnpj_id)
        .collect::<HashSet<_>>()
        .len() as i64;
    let total_marketplaces = lojas
        .iter()
        .map(|l| l.loja.marketplace)
        .collect::<HashSet<_>>()
        .len() as i64;

    // Quadro por loja. Lojas sem nenhuma atividade no período ficam de
    // fora do quadro, mas continuam contando em total_lojas.
    let desempenho_lojas: Vec<ResumoLoja> = lojas
        .iter()
        .filter_map(|l| {
            let totais = totais_do_periodo(&l.dados, periodo);
            let parada = totais.vendas.is_zero() && totais.ads.is_zero() && totais.itens == 0;
            if parada {
                return None;
            }

            Some(ResumoLoja {
                loja_id: l.loja.id,
                nome: l.loja.nome.clone(),
                marketplace: l.loja.marketplace,
                vendas: totais.vendas,
                ads: totais.ads,
                itens: totais.itens,
                roas_media: totais.roas_media,
            })
        })
        .collect();

    let melhor_loja_vendas = melhor_por(&desempenho_lojas, |r| r.vendas).cloned();
    let melhor_loja_roas = melhor_por(&desempenho_lojas, |r| r.roas_media).cloned();

    RelatorioConsolidadoInsights {
        geral,
        total_cnpjs,
        total_lojas: lojas.len() as i64,
        total_marketplaces,
        desempenho_lojas,
        melhor_loja_vendas,
        melhor_loja_roas,
    }
}

// Maior valor com comparação estrita: empate fica com a primeira loja na
// ordem de entrada.
fn melhor_por<K, F>(resumos: &[ResumoLoja], chave: F) -> Option<&ResumoLoja>
where
    K: PartialOrd,
    F: Fn(&ResumoLoja) -> K,
{
    let mut melhor: Option<&ResumoLoja> = None;

    for resumo in resumos {
        match melhor {
            Some(atual) if chave(resumo) > chave(atual) => melhor = Some(resumo),
            None => melhor = Some(resumo),
            _ => {}
        }
    }

    melhor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::loja::{LojaRelatorio, Marketplace};
    use chrono::Utc;
    use uuid::Uuid;

    fn dado(
        mes: i32,
        ano: i32,
        faturamento: i64,
        ads: i64,
        itens: i32,
        roas: Option<Decimal>,
        acos: Option<Decimal>,
    ) -> DadosMensais {
        DadosMensais {
            id: Uuid::new_v4(),
            loja_id: Uuid::new_v4(),
            mes,
            ano,
            faturamento_bruto: Decimal::from(faturamento),
            investimento_ads: Decimal::from(ads),
            itens_vendidos: itens,
            tipo_campanha: crate::models::dados_mensais::TipoCampanha::Paga,
            roas,
            acos,
            observacoes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn loja(nome: &str, marketplace: Marketplace, cnpj_id: Uuid) -> LojaRelatorio {
        LojaRelatorio {
            id: Uuid::new_v4(),
            nome: nome.to_string(),
            marketplace,
            url: None,
            ativa: true,
            cnpj_id,
            cnpj: "11222333000181".to_string(),
            nome_fantasia: "Fantasia".to_string(),
            cliente_id: Uuid::new_v4(),
            cliente_nome: "Cliente Teste".to_string(),
        }
    }

    const MARCO: Periodo = Periodo { mes: 3, ano: 2024 };
    const FEVEREIRO: Periodo = Periodo { mes: 2, ano: 2024 };

    #[test]
    fn sem_dados_tudo_zerado_e_mensagem_padrao() {
        let insights = calcular_insights(&[], MARCO, None);

        assert_eq!(insights.total_vendas, Decimal::ZERO);
        assert_eq!(insights.total_ads, Decimal::ZERO);
        assert_eq!(insights.total_itens, 0);
        assert_eq!(insights.roas_media, 0.0);
        assert_eq!(insights.acos_media, 0.0);
        assert_eq!(insights.tendencia, Tendencia::Estavel);
        assert_eq!(insights.recomendacao, "Mantenha o bom trabalho!");
        assert!(insights.crescimento_vendas.is_none());
    }

    #[test]
    fn soma_apenas_o_periodo_alvo() {
        let dados = vec![
            dado(3, 2024, 5000, 1000, 40, None, None),
            dado(2, 2024, 9999, 9999, 99, None, None),
            dado(3, 2023, 7777, 7777, 77, None, None),
        ];

        let insights = calcular_insights(&dados, MARCO, None);

        assert_eq!(insights.total_vendas, Decimal::from(5000));
        assert_eq!(insights.total_ads, Decimal::from(1000));
        assert_eq!(insights.total_itens, 40);
    }

    #[test]
    fn linhas_do_mesmo_mes_somam_e_roas_faz_media() {
        // Campanhas divididas: mesma loja, mesmo mês, duas linhas.
        let dados = vec![
            dado(3, 2024, 6000, 1000, 30, Some(Decimal::from(6)), None),
            dado(3, 2024, 4000, 2000, 20, Some(Decimal::from(2)), None),
        ];

        let insights = calcular_insights(&dados, MARCO, None);

        assert_eq!(insights.total_vendas, Decimal::from(10000));
        assert_eq!(insights.total_ads, Decimal::from(3000));
        assert_eq!(insights.total_itens, 50);
        assert_eq!(insights.roas_media, 4.0);
    }

    #[test]
    fn media_de_roas_ignora_nulos() {
        let dados = vec![
            dado(3, 2024, 1000, 0, 10, None, None),
            dado(3, 2024, 2000, 500, 15, Some(Decimal::from(4)), Some(Decimal::new(25, 2))),
            dado(3, 2024, 3000, 600, 20, Some(Decimal::from(5)), None),
        ];

        let insights = calcular_insights(&dados, MARCO, None);

        // Média só dos valores presentes: (4 + 5) / 2.
        assert_eq!(insights.roas_media, 4.5);
        // ACOS só tinha um valor presente.
        assert_eq!(insights.acos_media, 0.25);
    }

    #[test]
    fn so_roas_nulos_da_media_zero() {
        let dados = vec![
            dado(3, 2024, 1000, 0, 10, None, None),
            dado(3, 2024, 2000, 0, 20, None, None),
        ];

        let insights = calcular_insights(&dados, MARCO, None);

        assert_eq!(insights.roas_media, 0.0);
        // Com registros no período, média zero cai abaixo do limiar de 2 e
        // dispara a recomendação de ROAS baixo (só o período vazio escapa).
        assert_eq!(
            insights.recomendacao,
            "ROAS baixo. Revise palavras-chave e segmentação dos anúncios."
        );
    }

    #[test]
    fn comparacao_sem_registros_nao_define_crescimento() {
        let dados = vec![dado(3, 2024, 5000, 1000, 40, None, None)];

        let insights = calcular_insights(&dados, MARCO, Some(FEVEREIRO));

        assert!(insights.crescimento_vendas.is_none());
        assert!(insights.crescimento_itens.is_none());
        assert!(insights.crescimento_ads.is_none());
        assert_eq!(insights.tendencia, Tendencia::Estavel);
    }

    #[test]
    fn base_zerada_define_crescimento_zero() {
        // O registro de fevereiro existe, mas faturou zero: a política é
        // crescimento 0, nunca divisão por zero.
        let dados = vec![
            dado(3, 2024, 5000, 1000, 40, None, None),
            dado(2, 2024, 0, 0, 0, None, None),
        ];

        let insights = calcular_insights(&dados, MARCO, Some(FEVEREIRO));

        assert_eq!(insights.crescimento_vendas, Some(0.0));
        assert_eq!(insights.crescimento_itens, Some(0.0));
        assert_eq!(insights.crescimento_ads, Some(0.0));
        assert_eq!(insights.tendencia, Tendencia::Estavel);
    }

    #[test]
    fn crescimento_de_25_por_cento_vira_alta() {
        // ROAS 3 fica na faixa neutra e não sobrepõe a mensagem.
        let dados = vec![
            dado(3, 2024, 5000, 1000, 40, Some(Decimal::from(3)), None),
            dado(2, 2024, 4000, 800, 30, None, None),
        ];

        let insights = calcular_insights(&dados, MARCO, Some(FEVEREIRO));

        assert_eq!(insights.crescimento_vendas, Some(25.0));
        assert_eq!(insights.tendencia, Tendencia::Alta);
        assert_eq!(
            insights.recomendacao,
            "Excelente crescimento! Continue investindo nesta estratégia."
        );
    }

    #[test]
    fn queda_acima_do_limiar_vira_baixa() {
        let dados = vec![
            dado(3, 2024, 3000, 1000, 20, Some(Decimal::from(3)), None),
            dado(2, 2024, 4000, 800, 30, None, None),
        ];

        let insights = calcular_insights(&dados, MARCO, Some(FEVEREIRO));

        assert_eq!(insights.crescimento_vendas, Some(-25.0));
        assert_eq!(insights.tendencia, Tendencia::Baixa);
        assert_eq!(
            insights.recomendacao,
            "Performance em declínio. Considere revisar a estratégia de marketing."
        );
    }

    #[test]
    fn variacao_pequena_fica_estavel() {
        // +4% fica dentro do limiar de ±5 da loja.
        let dados = vec![
            dado(3, 2024, 5200, 1000, 40, None, None),
            dado(2, 2024, 5000, 800, 30, None, None),
        ];

        let insights = calcular_insights(&dados, MARCO, Some(FEVEREIRO));

        assert_eq!(insights.crescimento_vendas, Some(4.0));
        assert_eq!(insights.tendencia, Tendencia::Estavel);
    }

    #[test]
    fn roas_alto_sobrepoe_mensagem_de_crescimento() {
        // Crescimento de 25% escolheria a mensagem de alta, mas o ROAS > 4
        // tem a palavra final.
        let dados = vec![
            dado(3, 2024, 5000, 1000, 40, Some(Decimal::from(5)), None),
            dado(2, 2024, 4000, 800, 30, None, None),
        ];

        let insights = calcular_insights(&dados, MARCO, Some(FEVEREIRO));

        assert_eq!(insights.tendencia, Tendencia::Alta);
        assert_eq!(
            insights.recomendacao,
            "ROAS excelente! Considere aumentar o investimento em Ads."
        );
    }

    #[test]
    fn roas_baixo_sobrepoe_mensagem_de_crescimento() {
        let dados = vec![
            dado(3, 2024, 5000, 1000, 40, Some(Decimal::new(15, 1)), None),
            dado(2, 2024, 4000, 800, 30, None, None),
        ];

        let insights = calcular_insights(&dados, MARCO, Some(FEVEREIRO));

        assert_eq!(
            insights.recomendacao,
            "ROAS baixo. Revise palavras-chave e segmentação dos anúncios."
        );
    }

    #[test]
    fn consolidado_cenario_de_duas_lojas() {
        let cnpj_a = Uuid::new_v4();
        let cnpj_b = Uuid::new_v4();
        let loja_a = loja("Loja A", Marketplace::Shopee, cnpj_a);
        let loja_b = loja("Loja B", Marketplace::MercadoLivre, cnpj_b);

        let lojas = vec![
            LojaComDados {
                dados: vec![dado(3, 2024, 10000, 2000, 50, Some(Decimal::from(5)), None)],
                loja: loja_a.clone(),
            },
            LojaComDados {
                dados: vec![dado(3, 2024, 3000, 1500, 20, Some(Decimal::from(2)), None)],
                loja: loja_b,
            },
        ];

        let insights = calcular_insights_consolidado(&lojas, MARCO, None);

        assert_eq!(insights.geral.total_vendas, Decimal::from(13000));
        assert_eq!(insights.geral.total_ads, Decimal::from(3500));
        assert_eq!(insights.geral.total_itens, 70);
        assert_eq!(insights.geral.roas_media, 3.5);

        assert_eq!(insights.total_cnpjs, 2);
        assert_eq!(insights.total_lojas, 2);
        assert_eq!(insights.total_marketplaces, 2);

        let melhor_vendas = insights.melhor_loja_vendas.as_ref().unwrap();
        assert_eq!(melhor_vendas.loja_id, loja_a.id);

        let melhor_roas = insights.melhor_loja_roas.as_ref().unwrap();
        assert_eq!(melhor_roas.loja_id, loja_a.id);

        // ROAS médio 3.5 fica entre 2 e 4: recomendação neutra.
        assert_eq!(
            insights.geral.recomendacao,
            "Portfólio estável. Mantenha o bom trabalho!"
        );
    }

    #[test]
    fn consolidado_conta_cnpjs_e_marketplaces_distintos() {
        let cnpj = Uuid::new_v4();
        let lojas = vec![
            LojaComDados {
                loja: loja("Loja A", Marketplace::Shopee, cnpj),
                dados: vec![dado(3, 2024, 1000, 100, 5, None, None)],
            },
            LojaComDados {
                loja: loja("Loja B", Marketplace::Shopee, cnpj),
                dados: vec![dado(3, 2024, 2000, 200, 10, None, None)],
            },
        ];

        let insights = calcular_insights_consolidado(&lojas, MARCO, None);

        assert_eq!(insights.total_cnpjs, 1);
        assert_eq!(insights.total_lojas, 2);
        assert_eq!(insights.total_marketplaces, 1);
    }

    #[test]
    fn quadro_exclui_lojas_paradas_mas_conta_todas() {
        let lojas = vec![
            LojaComDados {
                loja: loja("Ativa", Marketplace::Shopee, Uuid::new_v4()),
                dados: vec![dado(3, 2024, 1000, 100, 5, None, None)],
            },
            LojaComDados {
                loja: loja("Parada", Marketplace::Amazon, Uuid::new_v4()),
                dados: vec![dado(3, 2024, 0, 0, 0, None, None)],
            },
            LojaComDados {
                loja: loja("Sem dados", Marketplace::Magalu, Uuid::new_v4()),
                dados: vec![],
            },
        ];

        let insights = calcular_insights_consolidado(&lojas, MARCO, None);

        assert_eq!(insights.total_lojas, 3);
        assert_eq!(insights.desempenho_lojas.len(), 1);
        assert_eq!(insights.desempenho_lojas[0].nome, "Ativa");
    }

    #[test]
    fn todas_as_lojas_paradas_nao_ha_melhor() {
        let lojas = vec![LojaComDados {
            loja: loja("Parada", Marketplace::Shopee, Uuid::new_v4()),
            dados: vec![],
        }];

        let insights = calcular_insights_consolidado(&lojas, MARCO, None);

        assert!(insights.desempenho_lojas.is_empty());
        assert!(insights.melhor_loja_vendas.is_none());
        assert!(insights.melhor_loja_roas.is_none());
    }

    #[test]
    fn empate_de_vendas_fica_com_a_primeira_loja() {
        let lojas = vec![
            LojaComDados {
                loja: loja("Primeira", Marketplace::Shopee, Uuid::new_v4()),
                dados: vec![dado(3, 2024, 5000, 100, 5, None, None)],
            },
            LojaComDados {
                loja: loja("Segunda", Marketplace::Amazon, Uuid::new_v4()),
                dados: vec![dado(3, 2024, 5000, 200, 10, None, None)],
            },
        ];

        let insights = calcular_insights_consolidado(&lojas, MARCO, None);

        assert_eq!(
            insights.melhor_loja_vendas.as_ref().unwrap().nome,
            "Primeira"
        );
    }

    #[test]
    fn limiar_consolidado_e_mais_conservador() {
        // +8% de crescimento: alta para uma loja (limiar 5), estável para
        // o portfólio (limiar 10).
        let dados_atual = dado(3, 2024, 5400, 100, 40, None, None);
        let dados_base = dado(2, 2024, 5000, 100, 30, None, None);

        let insights_loja =
            calcular_insights(&[dados_atual.clone(), dados_base.clone()], MARCO, Some(FEVEREIRO));
        assert_eq!(insights_loja.tendencia, Tendencia::Alta);

        let lojas = vec![LojaComDados {
            loja: loja("Loja", Marketplace::Shopee, Uuid::new_v4()),
            dados: vec![dados_atual, dados_base],
        }];
        let insights_portfolio = calcular_insights_consolidado(&lojas, MARCO, Some(FEVEREIRO));

        assert_eq!(insights_portfolio.geral.crescimento_vendas, Some(8.0));
        assert_eq!(insights_portfolio.geral.tendencia, Tendencia::Estavel);
    }

    #[test]
    fn consolidado_acima_do_limiar_vira_alta() {
        let lojas = vec![LojaComDados {
            loja: loja("Loja", Marketplace::Shopee, Uuid::new_v4()),
            dados: vec![
                dado(3, 2024, 6000, 100, 40, Some(Decimal::from(3)), None),
                dado(2, 2024, 5000, 100, 30, None, None),
            ],
        }];

        let insights = calcular_insights_consolidado(&lojas, MARCO, Some(FEVEREIRO));

        assert_eq!(insights.geral.crescimento_vendas, Some(20.0));
        assert_eq!(insights.geral.tendencia, Tendencia::Alta);
        assert_eq!(
            insights.geral.recomendacao,
            "Excelente crescimento do portfólio! Continue investindo nesta estratégia."
        );
    }
}
