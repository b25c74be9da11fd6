// src/common/formato.rs

// Primitivas de formatação compartilhadas pelos relatórios (texto e PDF).
// Tudo aqui é puro e determinístico: mesma entrada, mesma saída.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

// Nomes dos meses para títulos e períodos dos relatórios.
const MESES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

/// Nome do mês (1 a 12). Fora da faixa devolve "Mês inválido" em vez de
/// quebrar o relatório inteiro.
pub fn nome_do_mes(mes: i32) -> &'static str {
    if (1..=12).contains(&mes) {
        MESES[(mes - 1) as usize]
    } else {
        "Mês inválido"
    }
}

/// Último dia do calendário do mês: dia anterior ao dia 1 do mês seguinte.
pub fn ultimo_dia_do_mes(ano: i32, mes: i32) -> u32 {
    let (prox_ano, prox_mes) = if mes == 12 { (ano + 1, 1) } else { (ano, mes + 1) };

    NaiveDate::from_ymd_opt(prox_ano, prox_mes as u32, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Formata um valor como moeda brasileira: 1234.5 -> "R$ 1.234,50".
/// Ponto como separador de milhar, vírgula como separador decimal.
pub fn formatar_moeda(valor: Decimal) -> String {
    let arredondado = valor.round_dp(2);
    let negativo = arredondado.is_sign_negative() && !arredondado.is_zero();
    let texto = format!("{:.2}", arredondado.abs());

    let (inteiro, centavos) = texto.split_once('.').unwrap_or((texto.as_str(), "00"));

    // Agrupa os dígitos da parte inteira de trás pra frente, de 3 em 3.
    let mut agrupado: Vec<char> = Vec::with_capacity(inteiro.len() + inteiro.len() / 3);
    for (i, c) in inteiro.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(c);
    }
    let inteiro: String = agrupado.into_iter().rev().collect();

    let sinal = if negativo { "-" } else { "" };
    format!("{}R$ {},{}", sinal, inteiro, centavos)
}

/// Formata um percentual com uma casa decimal e sinal explícito:
/// 12.34 -> "+12.3%", -5.0 -> "-5.0%". Zero ganha "+": "+0.0%".
pub fn formatar_percentual(valor: f64) -> String {
    // IEEE tem -0.0 e o format! imprime o sinal dele; normaliza antes
    // para não sair "+-0.0%".
    let valor = if valor == 0.0 { 0.0 } else { valor };
    let sinal = if valor >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sinal, valor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moeda_com_milhar_e_centavos() {
        assert_eq!(formatar_moeda(Decimal::from(1000)), "R$ 1.000,00");
        assert_eq!(formatar_moeda(Decimal::new(12345, 1)), "R$ 1.234,50");
        assert_eq!(formatar_moeda(Decimal::from(1_000_000)), "R$ 1.000.000,00");
    }

    #[test]
    fn moeda_sem_milhar() {
        assert_eq!(formatar_moeda(Decimal::ZERO), "R$ 0,00");
        assert_eq!(formatar_moeda(Decimal::new(999, 1)), "R$ 99,90");
        assert_eq!(formatar_moeda(Decimal::from(100)), "R$ 100,00");
    }

    #[test]
    fn moeda_negativa() {
        assert_eq!(formatar_moeda(Decimal::from(-1500)), "-R$ 1.500,00");
    }

    #[test]
    fn percentual_com_sinal() {
        assert_eq!(formatar_percentual(12.34), "+12.3%");
        assert_eq!(formatar_percentual(-5.0), "-5.0%");
        assert_eq!(formatar_percentual(0.0), "+0.0%");
        assert_eq!(formatar_percentual(-12.34), "-12.3%");
    }

    #[test]
    fn percentual_zero_negativo() {
        // Valores em [-0.05, 0) arredondam para zero mas preservam o sinal,
        // igual ao comportamento de toFixed no app antigo.
        assert_eq!(formatar_percentual(-0.04), "-0.0%");
        // Já o -0.0 exato vira "+0.0%", não "+-0.0%".
        assert_eq!(formatar_percentual(-0.0), "+0.0%");
    }

    #[test]
    fn nomes_dos_meses() {
        assert_eq!(nome_do_mes(1), "Janeiro");
        assert_eq!(nome_do_mes(3), "Março");
        assert_eq!(nome_do_mes(12), "Dezembro");
        assert_eq!(nome_do_mes(0), "Mês inválido");
        assert_eq!(nome_do_mes(13), "Mês inválido");
    }

    #[test]
    fn ultimo_dia() {
        assert_eq!(ultimo_dia_do_mes(2024, 2), 29); // bissexto
        assert_eq!(ultimo_dia_do_mes(2023, 2), 28);
        assert_eq!(ultimo_dia_do_mes(2024, 3), 31);
        assert_eq!(ultimo_dia_do_mes(2024, 4), 30);
        assert_eq!(ultimo_dia_do_mes(2024, 12), 31);
    }
}
