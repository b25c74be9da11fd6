// src/services/cnpj_service.rs

use uuid::Uuid;

use crate::{
    common::{
        cnpj::{limpar_cnpj, validar_cnpj},
        error::AppError,
    },
    db::{ClienteRepository, CnpjRepository},
    models::cnpj::Cnpj,
};

#[derive(Clone)]
pub struct CnpjService {
    repo: CnpjRepository,
    cliente_repo: ClienteRepository,
}

impl CnpjService {
    pub fn new(repo: CnpjRepository, cliente_repo: ClienteRepository) -> Self {
        Self { repo, cliente_repo }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        cliente_id: Uuid,
        cnpj: &str,
        nome_fantasia: &str,
        razao_social: &str,
        endereco: Option<&str>,
    ) -> Result<Cnpj, AppError> {
        // O cliente precisa existir E pertencer ao usuário.
        self.cliente_repo
            .find(user_id, cliente_id)
            .await?
            .ok_or(AppError::ClienteNotFound)?;

        if !validar_cnpj(cnpj) {
            return Err(AppError::CnpjInvalido);
        }

        // Guardamos só os dígitos; a formatação é problema de quem exibe.
        let numerico = limpar_cnpj(cnpj);

        self.repo
            .create(cliente_id, &numerico, nome_fantasia, razao_social, endereco)
            .await
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        cliente_id: Option<Uuid>,
    ) -> Result<Vec<Cnpj>, AppError> {
        self.repo.list(user_id, cliente_id).await
    }

    pub async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Cnpj, AppError> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(AppError::CnpjNotFound)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        cnpj: &str,
        nome_fantasia: &str,
        razao_social: &str,
        endereco: Option<&str>,
    ) -> Result<Cnpj, AppError> {
        if !validar_cnpj(cnpj) {
            return Err(AppError::CnpjInvalido);
        }

        let numerico = limpar_cnpj(cnpj);

        self.repo
            .update(user_id, id, &numerico, nome_fantasia, razao_social, endereco)
            .await?
            .ok_or(AppError::CnpjNotFound)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(user_id, id).await? {
            return Err(AppError::CnpjNotFound);
        }
        Ok(())
    }
}
