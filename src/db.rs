pub mod user_repo;
pub use user_repo::UserRepository;
pub mod cliente_repo;
pub use cliente_repo::ClienteRepository;
pub mod cnpj_repo;
pub use cnpj_repo::CnpjRepository;
pub mod loja_repo;
pub use loja_repo::LojaRepository;
pub mod dados_repo;
pub use dados_repo::DadosMensaisRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
