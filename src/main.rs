//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

// Importações principais
use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Define as rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Define as rotas de usuário (protegidas pelo middleware)
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me));

    let cliente_routes = Router::new()
        .route("/"
               ,post(handlers::clientes::create_cliente)
               .get(handlers::clientes::list_clientes)
        )
        .route("/{id}"
               ,get(handlers::clientes::get_cliente)
               .put(handlers::clientes::update_cliente)
               .delete(handlers::clientes::delete_cliente)
        );

    let cnpj_routes = Router::new()
        .route("/"
               ,post(handlers::cnpjs::create_cnpj)
               .get(handlers::cnpjs::list_cnpjs)
        )
        .route("/{id}"
               ,get(handlers::cnpjs::get_cnpj)
               .put(handlers::cnpjs::update_cnpj)
               .delete(handlers::cnpjs::delete_cnpj)
        );

    let loja_routes = Router::new()
        .route("/"
               ,post(handlers::lojas::create_loja)
               .get(handlers::lojas::list_lojas)
        )
        .route("/{id}"
               ,get(handlers::lojas::get_loja)
               .put(handlers::lojas::update_loja)
               .delete(handlers::lojas::delete_loja)
        );

    let dados_routes = Router::new()
        .route("/"
               ,post(handlers::dados_mensais::create_dados)
               .get(handlers::dados_mensais::list_dados)
        )
        .route("/{id}"
               ,get(handlers::dados_mensais::get_dados)
               .put(handlers::dados_mensais::update_dados)
               .delete(handlers::dados_mensais::delete_dados)
        );

    let dashboard_routes = Router::new()
        .route("/resumo", get(handlers::dashboard::get_resumo))
        .route("/marketplaces", get(handlers::dashboard::get_resumo_marketplaces));

    let relatorio_routes = Router::new()
        .route("/lojas/{loja_id}", get(handlers::relatorios::insights_loja))
        .route("/lojas/{loja_id}/texto", get(handlers::relatorios::texto_loja))
        .route("/lojas/{loja_id}/pdf", get(handlers::relatorios::pdf_loja))
        .route("/clientes/{cliente_id}", get(handlers::relatorios::insights_cliente))
        .route("/clientes/{cliente_id}/texto", get(handlers::relatorios::texto_cliente))
        .route("/clientes/{cliente_id}/pdf", get(handlers::relatorios::pdf_cliente));

    // Tudo que mexe com dados do usuário passa pelo auth_guard.
    let protected_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/clientes", cliente_routes)
        .nest("/cnpjs", cnpj_routes)
        .nest("/lojas", loja_routes)
        .nest("/dados-mensais", dados_routes)
        .nest("/dashboard", dashboard_routes)
        .nest("/relatorios", relatorio_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api", protected_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
