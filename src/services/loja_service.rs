// src/services/loja_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CnpjRepository, LojaRepository},
    models::loja::{Loja, Marketplace},
};

#[derive(Clone)]
pub struct LojaService {
    repo: LojaRepository,
    cnpj_repo: CnpjRepository,
}

impl LojaService {
    pub fn new(repo: LojaRepository, cnpj_repo: CnpjRepository) -> Self {
        Self { repo, cnpj_repo }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        cnpj_id: Uuid,
        nome: &str,
        marketplace: Marketplace,
        url: Option<&str>,
        ativa: bool,
    ) -> Result<Loja, AppError> {
        // O CNPJ precisa pertencer a um cliente do usuário.
        self.cnpj_repo
            .find(user_id, cnpj_id)
            .await?
            .ok_or(AppError::CnpjNotFound)?;

        self.repo
            .create(cnpj_id, nome, marketplace, url, ativa)
            .await
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        cnpj_id: Option<Uuid>,
        cliente_id: Option<Uuid>,
    ) -> Result<Vec<Loja>, AppError> {
        self.repo.list(user_id, cnpj_id, cliente_id).await
    }

    pub async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Loja, AppError> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(AppError::LojaNotFound)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        nome: &str,
        marketplace: Marketplace,
        url: Option<&str>,
        ativa: bool,
    ) -> Result<Loja, AppError> {
        self.repo
            .update(user_id, id, nome, marketplace, url, ativa)
            .await?
            .ok_or(AppError::LojaNotFound)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(user_id, id).await? {
            return Err(AppError::LojaNotFound);
        }
        Ok(())
    }
}
