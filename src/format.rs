//! Display Formatting
//!
//! Fixed pt-BR formatting for dates, times, currency and file sizes.
//! Every function here is total: bad input degrades to a placeholder,
//! never a panic.

use chrono::{NaiveDate, NaiveTime};

/// Placeholder shown for missing optional fields
pub const NAO_INFORMADO: &str = "Não informado";

/// DD/MM/YYYY
pub fn formatar_data(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

/// HH:MM, or empty when the time is absent
pub fn formatar_hora(hora: Option<NaiveTime>) -> String {
    match hora {
        Some(h) => h.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// DD/MM/YYYY HH:MM, time defaulting to the calendar default (09:00)
pub fn formatar_data_hora(data: NaiveDate, hora: Option<NaiveTime>) -> String {
    let hora = hora.unwrap_or_else(crate::calendar::hora_padrao);
    format!("{} {}", formatar_data(data), hora.format("%H:%M"))
}

/// `R$ 1.234,56` — pt-BR grouping, two decimal places.
///
/// Non-finite amounts render as `R$ 0,00` rather than propagating NaN
/// into the page.
pub fn formatar_moeda(valor: f64) -> String {
    if !valor.is_finite() {
        return "R$ 0,00".to_string();
    }
    let negativo = valor < 0.0;
    let centavos = (valor.abs() * 100.0).round() as u64;
    let reais = centavos / 100;
    let resto = centavos % 100;

    // Group the integer part in threes, separated by '.'
    let digitos = reais.to_string();
    let mut agrupado = String::new();
    for (i, c) in digitos.chars().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(c);
    }

    let sinal = if negativo { "-" } else { "" };
    format!("R$ {}{},{:02}", sinal, agrupado, resto)
}

/// The value, or the "Não informado" placeholder when missing or blank
pub fn ou_nao_informado(valor: Option<&str>) -> String {
    match valor {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NAO_INFORMADO.to_string(),
    }
}

/// Pretty-print a file size for the import modal
pub fn formatar_tamanho(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatar_data_br() {
        let data = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(formatar_data(data), "07/03/2025");
    }

    #[test]
    fn test_formatar_data_hora_defaults_to_nine() {
        let data = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(formatar_data_hora(data, None), "07/03/2025 09:00");

        let hora = NaiveTime::from_hms_opt(14, 30, 0);
        assert_eq!(formatar_data_hora(data, hora), "07/03/2025 14:30");
    }

    #[test]
    fn test_formatar_moeda() {
        assert_eq!(formatar_moeda(0.0), "R$ 0,00");
        assert_eq!(formatar_moeda(50.0), "R$ 50,00");
        assert_eq!(formatar_moeda(1234.56), "R$ 1.234,56");
        assert_eq!(formatar_moeda(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(formatar_moeda(-35.5), "R$ -35,50");
    }

    #[test]
    fn test_formatar_moeda_never_nan() {
        assert_eq!(formatar_moeda(f64::NAN), "R$ 0,00");
        assert_eq!(formatar_moeda(f64::INFINITY), "R$ 0,00");
    }

    #[test]
    fn test_ou_nao_informado() {
        assert_eq!(ou_nao_informado(Some("Fórum Central")), "Fórum Central");
        assert_eq!(ou_nao_informado(Some("  ")), NAO_INFORMADO);
        assert_eq!(ou_nao_informado(None), NAO_INFORMADO);
    }

    #[test]
    fn test_formatar_tamanho() {
        assert_eq!(formatar_tamanho(512), "512 B");
        assert_eq!(formatar_tamanho(2048), "2.0 KB");
        assert_eq!(formatar_tamanho(3 * 1024 * 1024), "3.0 MB");
    }
}
