pub mod auth;
pub mod clientes;
pub mod cnpjs;
pub mod dados_mensais;
pub mod dashboard;
pub mod lojas;
pub mod relatorios;
