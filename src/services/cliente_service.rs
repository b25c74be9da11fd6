// src/services/cliente_service.rs

use uuid::Uuid;

use crate::{
    common::{cnpj::validar_cnpj, error::AppError},
    db::ClienteRepository,
    models::cliente::Cliente,
};

#[derive(Clone)]
pub struct ClienteService {
    repo: ClienteRepository,
}

impl ClienteService {
    pub fn new(repo: ClienteRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        nome: &str,
        cnpj_principal: &str,
        email: &str,
        telefone: Option<&str>,
        endereco: Option<&str>,
    ) -> Result<Cliente, AppError> {
        if !validar_cnpj(cnpj_principal) {
            return Err(AppError::CnpjInvalido);
        }

        self.repo
            .create(user_id, nome, cnpj_principal, email, telefone, endereco)
            .await
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Cliente>, AppError> {
        self.repo.list(user_id).await
    }

    pub async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Cliente, AppError> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(AppError::ClienteNotFound)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        nome: &str,
        cnpj_principal: &str,
        email: &str,
        telefone: Option<&str>,
        endereco: Option<&str>,
    ) -> Result<Cliente, AppError> {
        if !validar_cnpj(cnpj_principal) {
            return Err(AppError::CnpjInvalido);
        }

        self.repo
            .update(user_id, id, nome, cnpj_principal, email, telefone, endereco)
            .await?
            .ok_or(AppError::ClienteNotFound)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(user_id, id).await? {
            return Err(AppError::ClienteNotFound);
        }
        Ok(())
    }
}
