pub mod auth;
pub mod cliente;
pub mod cnpj;
pub mod dados_mensais;
pub mod dashboard;
pub mod loja;
pub mod relatorio;
