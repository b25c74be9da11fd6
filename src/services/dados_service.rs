// src/services/dados_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{DadosMensaisRepository, LojaRepository},
    models::{
        dados_mensais::{DadosMensais, TipoCampanha},
        relatorio::Periodo,
    },
};

#[derive(Clone)]
pub struct DadosMensaisService {
    repo: DadosMensaisRepository,
    loja_repo: LojaRepository,
}

/// Deriva ROAS e ACOS a partir do faturamento e do investimento.
/// Sem investimento não há métrica nenhuma (nunca dividimos por zero);
/// o ACOS ainda exige faturamento > 0 e é guardado como fração.
fn calcular_metricas(
    faturamento: Decimal,
    investimento: Decimal,
) -> (Option<Decimal>, Option<Decimal>) {
    if investimento <= Decimal::ZERO {
        return (None, None);
    }

    let roas = Some((faturamento / investimento).round_dp(2));
    let acos = if faturamento > Decimal::ZERO {
        Some((investimento / faturamento).round_dp(4))
    } else {
        None
    };

    (roas, acos)
}

impl DadosMensaisService {
    pub fn new(repo: DadosMensaisRepository, loja_repo: LojaRepository) -> Self {
        Self { repo, loja_repo }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: Uuid,
        loja_id: Uuid,
        mes: i32,
        ano: i32,
        faturamento_bruto: Decimal,
        investimento_ads: Decimal,
        itens_vendidos: i32,
        tipo_campanha: TipoCampanha,
        observacoes: Option<&str>,
    ) -> Result<DadosMensais, AppError> {
        self.loja_repo
            .find(user_id, loja_id)
            .await?
            .ok_or(AppError::LojaNotFound)?;

        if !Periodo::new(mes, ano).valido() {
            return Err(AppError::PeriodoInvalido);
        }

        let (roas, acos) = calcular_metricas(faturamento_bruto, investimento_ads);

        self.repo
            .create(
                loja_id,
                mes,
                ano,
                faturamento_bruto,
                investimento_ads,
                itens_vendidos,
                tipo_campanha,
                roas,
                acos,
                observacoes,
            )
            .await
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        loja_id: Option<Uuid>,
        ano: Option<i32>,
    ) -> Result<Vec<DadosMensais>, AppError> {
        self.repo.list(user_id, loja_id, ano).await
    }

    pub async fn get(&self, user_id: Uuid, id: Uuid) -> Result<DadosMensais, AppError> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(AppError::DadosNotFound)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        mes: i32,
        ano: i32,
        faturamento_bruto: Decimal,
        investimento_ads: Decimal,
        itens_vendidos: i32,
        tipo_campanha: TipoCampanha,
        observacoes: Option<&str>,
    ) -> Result<DadosMensais, AppError> {
        if !Periodo::new(mes, ano).valido() {
            return Err(AppError::PeriodoInvalido);
        }

        let (roas, acos) = calcular_metricas(faturamento_bruto, investimento_ads);

        self.repo
            .update(
                user_id,
                id,
                mes,
                ano,
                faturamento_bruto,
                investimento_ads,
                itens_vendidos,
                tipo_campanha,
                roas,
                acos,
                observacoes,
            )
            .await?
            .ok_or(AppError::DadosNotFound)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(user_id, id).await? {
            return Err(AppError::DadosNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metricas_derivadas_do_cadastro() {
        let (roas, acos) = calcular_metricas(Decimal::from(10000), Decimal::from(2000));
        assert_eq!(roas, Some(Decimal::from(5)));
        assert_eq!(acos, Some(Decimal::new(2, 1))); // 0.2 como fração
    }

    #[test]
    fn sem_investimento_nao_ha_metricas() {
        let (roas, acos) = calcular_metricas(Decimal::from(10000), Decimal::ZERO);
        assert_eq!(roas, None);
        assert_eq!(acos, None);
    }

    #[test]
    fn investimento_sem_faturamento() {
        // ROAS zero faz sentido; ACOS dividiria por zero, então fica nulo.
        let (roas, acos) = calcular_metricas(Decimal::ZERO, Decimal::from(500));
        assert_eq!(roas, Some(Decimal::ZERO));
        assert_eq!(acos, None);
    }
}
