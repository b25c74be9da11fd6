pub mod auth;
pub mod cliente_service;
pub mod cnpj_service;
pub mod dados_service;
pub mod dashboard_service;
pub mod loja_service;
pub mod relatorio;
