// src/services/dashboard_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{MarketplaceResumo, PainelResumo},
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn get_resumo(&self, user_id: Uuid) -> Result<PainelResumo, AppError> {
        self.repo.get_resumo(user_id).await
    }

    pub async fn get_resumo_marketplaces(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MarketplaceResumo>, AppError> {
        self.repo.get_resumo_marketplaces(user_id).await
    }
}
