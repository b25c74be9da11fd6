// src/services/relatorio/pdf.rs

// Renderizador de documento: o mesmo conteúdo do relatório de texto,
// paginado para impressão/download. Cada seção tem tamanho e cor próprios
// e o texto longo da recomendação é quebrado pelo próprio genpdf.

use chrono::{DateTime, Local};
use genpdf::{elements, style, Element};

use crate::common::error::AppError;
use crate::common::formato::{formatar_moeda, nome_do_mes};
use crate::models::relatorio::{
    RelatorioCliente, RelatorioConsolidadoInsights, RelatorioInsights, RelatorioLoja,
};

// Paleta das seções (mesmos tons do relatório antigo).
const COR_TEXTO: style::Color = style::Color::Rgb(51, 51, 51);
const COR_METRICAS: style::Color = style::Color::Rgb(0, 100, 200);
const COR_INSIGHTS: style::Color = style::Color::Rgb(0, 150, 0);
const COR_RODAPE: style::Color = style::Color::Rgb(128, 128, 128);

/// PDF do relatório de uma loja, pronto para download.
pub fn gerar_pdf_loja(
    relatorio: &RelatorioLoja,
    insights: &RelatorioInsights,
    gerado_em: DateTime<Local>,
) -> Result<Vec<u8>, AppError> {
    let loja = &relatorio.loja;
    let periodo = relatorio.periodo;

    let mut doc = novo_documento("Relatório Analítico de Vendas")?;

    doc.push(
        elements::Paragraph::new("Relatório Analítico de Vendas")
            .styled(style::Style::new().bold().with_font_size(20).with_color(COR_TEXTO)),
    );
    doc.push(elements::Break::new(1.5));

    // Informações da loja
    let estilo_info = style::Style::new().with_font_size(14).with_color(COR_TEXTO);
    doc.push(
        elements::Paragraph::new(format!("Cliente: {}", loja.cliente_nome)).styled(estilo_info),
    );
    doc.push(elements::Paragraph::new(format!("Loja: {}", loja.nome)).styled(estilo_info));
    doc.push(
        elements::Paragraph::new(format!("Marketplace: {}", loja.marketplace.rotulo()))
            .styled(estilo_info),
    );
    doc.push(
        elements::Paragraph::new(format!(
            "Período: {} {}",
            nome_do_mes(periodo.mes),
            periodo.ano
        ))
        .styled(estilo_info),
    );
    doc.push(elements::Break::new(2));

    escrever_metricas(&mut doc, insights);
    escrever_recomendacao(&mut doc, &insights.recomendacao);
    escrever_rodape(&mut doc, gerado_em);

    renderizar(doc)
}

/// PDF do relatório consolidado de um cliente.
pub fn gerar_pdf_consolidado(
    relatorio: &RelatorioCliente,
    insights: &RelatorioConsolidadoInsights,
    gerado_em: DateTime<Local>,
) -> Result<Vec<u8>, AppError> {
    let periodo = relatorio.periodo;

    let mut doc = novo_documento("Relatório Consolidado de Vendas")?;

    doc.push(
        elements::Paragraph::new("Relatório Consolidado de Vendas")
            .styled(style::Style::new().bold().with_font_size(20).with_color(COR_TEXTO)),
    );
    doc.push(elements::Break::new(1.5));

    let estilo_info = style::Style::new().with_font_size(14).with_color(COR_TEXTO);
    doc.push(
        elements::Paragraph::new(format!("Cliente: {}", relatorio.cliente_nome))
            .styled(estilo_info),
    );
    doc.push(
        elements::Paragraph::new(format!(
            "CNPJs: {} | Lojas: {} | Marketplaces: {}",
            insights.total_cnpjs, insights.total_lojas, insights.total_marketplaces
        ))
        .styled(estilo_info),
    );
    doc.push(
        elements::Paragraph::new(format!(
            "Período: {} {}",
            nome_do_mes(periodo.mes),
            periodo.ano
        ))
        .styled(estilo_info),
    );
    doc.push(elements::Break::new(2));

    escrever_metricas(&mut doc, &insights.geral);

    // Quadro por loja (sem as lojas paradas no período).
    if !insights.desempenho_lojas.is_empty() {
        doc.push(
            elements::Paragraph::new("Desempenho por Loja")
                .styled(style::Style::new().bold().with_font_size(16).with_color(COR_METRICAS)),
        );
        doc.push(elements::Break::new(1));

        // Pesos das colunas: Loja (3), Marketplace (2), Vendas (2), ROAS (1)
        let mut table = elements::TableLayout::new(vec![3, 2, 2, 1]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let style_bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("Loja").styled(style_bold))
            .element(elements::Paragraph::new("Marketplace").styled(style_bold))
            .element(elements::Paragraph::new("Vendas").styled(style_bold))
            .element(elements::Paragraph::new("ROAS").styled(style_bold))
            .push()
            .expect("Table error");

        for resumo in &insights.desempenho_lojas {
            table
                .row()
                .element(elements::Paragraph::new(resumo.nome.clone()))
                .element(elements::Paragraph::new(resumo.marketplace.rotulo()))
                .element(elements::Paragraph::new(formatar_moeda(resumo.vendas)))
                .element(elements::Paragraph::new(format!("{:.2}", resumo.roas_media)))
                .push()
                .expect("Table row error");
        }

        doc.push(table);
        doc.push(elements::Break::new(2));
    }

    // Destaques do portfólio
    if let Some(melhor) = &insights.melhor_loja_vendas {
        let estilo_destaque = style::Style::new().with_font_size(12).with_color(COR_TEXTO);
        doc.push(
            elements::Paragraph::new(format!(
                "Melhor loja em vendas: {} ({})",
                melhor.nome,
                formatar_moeda(melhor.vendas)
            ))
            .styled(estilo_destaque),
        );

        if let Some(melhor_roas) = &insights.melhor_loja_roas {
            if melhor_roas.roas_media > 0.0 {
                doc.push(
                    elements::Paragraph::new(format!(
                        "Melhor ROAS: {} ({:.2})",
                        melhor_roas.nome, melhor_roas.roas_media
                    ))
                    .styled(estilo_destaque),
                );
            }
        }
        doc.push(elements::Break::new(2));
    }

    escrever_recomendacao(&mut doc, &insights.geral.recomendacao);
    escrever_rodape(&mut doc, gerado_em);

    renderizar(doc)
}

// --- Blocos compartilhados ---

fn escrever_metricas(doc: &mut genpdf::Document, insights: &RelatorioInsights) {
    doc.push(
        elements::Paragraph::new("Resumo do Desempenho")
            .styled(style::Style::new().bold().with_font_size(16).with_color(COR_METRICAS)),
    );
    doc.push(elements::Break::new(1));

    let estilo_corpo = style::Style::new().with_font_size(12).with_color(COR_TEXTO);
    doc.push(
        elements::Paragraph::new(format!(
            "Total de Vendas: {}",
            formatar_moeda(insights.total_vendas)
        ))
        .styled(estilo_corpo),
    );
    doc.push(
        elements::Paragraph::new(format!("Unidades Vendidas: {}", insights.total_itens))
            .styled(estilo_corpo),
    );
    doc.push(
        elements::Paragraph::new(format!(
            "Investimento em Ads: {}",
            formatar_moeda(insights.total_ads)
        ))
        .styled(estilo_corpo),
    );

    if insights.roas_media > 0.0 {
        doc.push(
            elements::Paragraph::new(format!("ROAS Médio: {:.2}", insights.roas_media))
                .styled(estilo_corpo),
        );
        doc.push(
            elements::Paragraph::new(format!("ACOS Médio: {:.1}%", insights.acos_media * 100.0))
                .styled(estilo_corpo),
        );
    }

    doc.push(elements::Break::new(2));
}

fn escrever_recomendacao(doc: &mut genpdf::Document, recomendacao: &str) {
    doc.push(
        elements::Paragraph::new("Insights e Recomendações")
            .styled(style::Style::new().bold().with_font_size(16).with_color(COR_INSIGHTS)),
    );
    doc.push(elements::Break::new(1));

    // O genpdf quebra o parágrafo na largura útil da página sozinho.
    doc.push(
        elements::Paragraph::new(recomendacao)
            .styled(style::Style::new().with_font_size(10).with_color(COR_TEXTO)),
    );
    doc.push(elements::Break::new(2));
}

fn escrever_rodape(doc: &mut genpdf::Document, gerado_em: DateTime<Local>) {
    doc.push(
        elements::Paragraph::new(format!(
            "Relatório gerado em {}",
            gerado_em.format("%d/%m/%Y às %H:%M")
        ))
        .styled(style::Style::new().with_font_size(8).with_color(COR_RODAPE)),
    );
}

// --- Infraestrutura do documento ---

fn novo_documento(titulo: &str) -> Result<genpdf::Document, AppError> {
    // Carrega a fonte da pasta 'fonts/'
    let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None)
        .map_err(|_| AppError::FontNotFound("Fonte não encontrada na pasta ./fonts".to_string()))?;

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title(titulo);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    Ok(doc)
}

// Renderiza para buffer (memória), nunca para disco.
fn renderizar(doc: genpdf::Document) -> Result<Vec<u8>, AppError> {
    let mut buffer = Vec::new();
    doc.render(&mut buffer)
        .map_err(|e| AppError::InternalServerError(anyhow::Error::msg(e.to_string())))?;

    Ok(buffer)
}
