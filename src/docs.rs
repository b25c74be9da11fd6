// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Clientes ---
        handlers::clientes::create_cliente,
        handlers::clientes::list_clientes,
        handlers::clientes::get_cliente,
        handlers::clientes::update_cliente,
        handlers::clientes::delete_cliente,

        // --- CNPJs ---
        handlers::cnpjs::create_cnpj,
        handlers::cnpjs::list_cnpjs,
        handlers::cnpjs::get_cnpj,
        handlers::cnpjs::update_cnpj,
        handlers::cnpjs::delete_cnpj,

        // --- Lojas ---
        handlers::lojas::create_loja,
        handlers::lojas::list_lojas,
        handlers::lojas::get_loja,
        handlers::lojas::update_loja,
        handlers::lojas::delete_loja,

        // --- Dados Mensais ---
        handlers::dados_mensais::create_dados,
        handlers::dados_mensais::list_dados,
        handlers::dados_mensais::get_dados,
        handlers::dados_mensais::update_dados,
        handlers::dados_mensais::delete_dados,

        // --- Dashboard ---
        handlers::dashboard::get_resumo,
        handlers::dashboard::get_resumo_marketplaces,

        // --- Relatórios ---
        handlers::relatorios::insights_loja,
        handlers::relatorios::texto_loja,
        handlers::relatorios::pdf_loja,
        handlers::relatorios::insights_cliente,
        handlers::relatorios::texto_cliente,
        handlers::relatorios::pdf_cliente,
    ),
    components(
        schemas(
            models::auth::User,
            models::auth::AuthResponse,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            handlers::clientes::ClientePayload,
            handlers::cnpjs::CreateCnpjPayload,
            handlers::cnpjs::UpdateCnpjPayload,
            handlers::lojas::CreateLojaPayload,
            handlers::lojas::UpdateLojaPayload,
            handlers::dados_mensais::CreateDadosPayload,
            handlers::dados_mensais::UpdateDadosPayload,
            models::cliente::Cliente,
            models::cnpj::Cnpj,
            models::loja::Loja,
            models::loja::Marketplace,
            models::dados_mensais::DadosMensais,
            models::dados_mensais::TipoCampanha,
            models::dashboard::PainelResumo,
            models::dashboard::MarketplaceResumo,
            models::relatorio::Periodo,
            models::relatorio::Tendencia,
            models::relatorio::RelatorioInsights,
            models::relatorio::ResumoLoja,
            models::relatorio::RelatorioConsolidadoInsights,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registro e login"),
        (name = "Clientes", description = "Cadastro de clientes"),
        (name = "CNPJs", description = "Registros fiscais dos clientes"),
        (name = "Lojas", description = "Lojas nos marketplaces"),
        (name = "Dados Mensais", description = "Desempenho mensal das lojas"),
        (name = "Dashboard", description = "Visão geral do usuário"),
        (name = "Relatórios", description = "Insights, texto e PDF")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
