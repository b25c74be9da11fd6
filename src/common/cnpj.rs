// src/common/cnpj.rs

// Validação e formatação de CNPJ.

/// Remove tudo que não for dígito.
pub fn limpar_cnpj(cnpj: &str) -> String {
    cnpj.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formata um CNPJ de 14 dígitos como XX.XXX.XXX/XXXX-XX.
/// Entradas fora desse formato voltam como vieram.
pub fn formatar_cnpj(cnpj: &str) -> String {
    let numerico = limpar_cnpj(cnpj);
    if numerico.len() != 14 {
        return cnpj.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &numerico[0..2],
        &numerico[2..5],
        &numerico[5..8],
        &numerico[8..12],
        &numerico[12..14]
    )
}

/// Valida os dois dígitos verificadores (módulo 11).
pub fn validar_cnpj(cnpj: &str) -> bool {
    let numerico = limpar_cnpj(cnpj);

    if numerico.len() != 14 {
        return false;
    }

    let digitos: Vec<u32> = numerico.chars().filter_map(|c| c.to_digit(10)).collect();

    // CNPJs com todos os dígitos iguais passam no módulo 11, mas não existem.
    if digitos.iter().all(|&d| d == digitos[0]) {
        return false;
    }

    digitos[12] == digito_verificador(&digitos[0..12], 5)
        && digitos[13] == digito_verificador(&digitos[0..13], 6)
}

fn digito_verificador(digitos: &[u32], peso_inicial: u32) -> u32 {
    let mut peso = peso_inicial;
    let mut soma = 0;

    for &d in digitos {
        soma += d * peso;
        peso = if peso == 2 { 9 } else { peso - 1 };
    }

    let resto = soma % 11;
    if resto < 2 { 0 } else { 11 - resto }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_cnpj_valido() {
        // CNPJ da Receita Federal, usado como exemplo canônico
        assert!(validar_cnpj("11.222.333/0001-81"));
        assert!(validar_cnpj("11222333000181"));
    }

    #[test]
    fn rejeita_digito_verificador_errado() {
        assert!(!validar_cnpj("11.222.333/0001-82"));
        assert!(!validar_cnpj("11222333000180"));
    }

    #[test]
    fn rejeita_tamanho_errado() {
        assert!(!validar_cnpj(""));
        assert!(!validar_cnpj("123"));
        assert!(!validar_cnpj("112223330001811"));
    }

    #[test]
    fn rejeita_digitos_repetidos() {
        assert!(!validar_cnpj("00000000000000"));
        assert!(!validar_cnpj("11111111111111"));
    }

    #[test]
    fn formata_cnpj_numerico() {
        assert_eq!(formatar_cnpj("11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn formatar_preserva_entrada_invalida() {
        assert_eq!(formatar_cnpj("123"), "123");
    }

    #[test]
    fn limpar_remove_pontuacao() {
        assert_eq!(limpar_cnpj("11.222.333/0001-81"), "11222333000181");
    }
}
