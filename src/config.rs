// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        ClienteRepository, CnpjRepository, DadosMensaisRepository, DashboardRepository,
        LojaRepository, UserRepository,
    },
    services::{
        auth::AuthService, cliente_service::ClienteService, cnpj_service::CnpjService,
        dados_service::DadosMensaisService, dashboard_service::DashboardService,
        loja_service::LojaService, relatorio::RelatorioService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,

    pub auth_service: AuthService,
    pub cliente_service: ClienteService,
    pub cnpj_service: CnpjService,
    pub loja_service: LojaService,
    pub dados_service: DadosMensaisService,
    pub dashboard_service: DashboardService,
    pub relatorio_service: RelatorioService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let cliente_repo = ClienteRepository::new(db_pool.clone());
        let cnpj_repo = CnpjRepository::new(db_pool.clone());
        let loja_repo = LojaRepository::new(db_pool.clone());
        let dados_repo = DadosMensaisRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret);
        let cliente_service = ClienteService::new(cliente_repo.clone());
        let cnpj_service = CnpjService::new(cnpj_repo.clone(), cliente_repo.clone());
        let loja_service = LojaService::new(loja_repo.clone(), cnpj_repo);
        let dados_service = DadosMensaisService::new(dados_repo.clone(), loja_repo.clone());
        let dashboard_service = DashboardService::new(dashboard_repo);
        let relatorio_service = RelatorioService::new(cliente_repo, loja_repo, dados_repo);

        Ok(Self {
            db_pool,
            auth_service,
            cliente_service,
            cnpj_service,
            loja_service,
            dados_service,
            dashboard_service,
            relatorio_service,
        })
    }
}
