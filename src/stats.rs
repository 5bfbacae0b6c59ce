//! Derived Statistics
//!
//! Pure counts and sums over the collections for the dashboard and the
//! billing page. The current date is always a parameter, never read from
//! a hidden clock.

use chrono::NaiveDate;

use crate::models::{
    Audiencia, Diligencia, Faturamento, StatusAudiencia, StatusDiligencia, StatusFaturamento,
};

/// How many records the "upcoming"/"in progress" dashboard panels show
pub const LIMITE_PAINEL: usize = 5;

/// Hearings scheduled for today (plain calendar-date equality)
pub fn audiencias_no_dia(audiencias: &[Audiencia], hoje: NaiveDate) -> usize {
    audiencias.iter().filter(|a| a.data == hoje).count()
}

pub fn contar_audiencias(audiencias: &[Audiencia], status: StatusAudiencia) -> usize {
    audiencias.iter().filter(|a| a.status == status).count()
}

pub fn contar_diligencias(diligencias: &[Diligencia], status: StatusDiligencia) -> usize {
    diligencias.iter().filter(|d| d.status == status).count()
}

pub fn contar_faturamentos(faturamentos: &[Faturamento], status: StatusFaturamento) -> usize {
    faturamentos.iter().filter(|f| f.status == status).count()
}

/// Sum of all billing amounts (0 for an empty collection)
pub fn total_faturado(faturamentos: &[Faturamento]) -> f64 {
    faturamentos.iter().map(|f| f.valor).sum()
}

/// Sum of billing amounts in a given status
pub fn total_por_status(faturamentos: &[Faturamento], status: StatusFaturamento) -> f64 {
    faturamentos
        .iter()
        .filter(|f| f.status == status)
        .map(|f| f.valor)
        .sum()
}

/// Percentage of `parte` over `total`. A zero or non-finite total yields
/// 0.0, never NaN.
pub fn percentual(parte: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        0.0
    } else {
        (parte / total) * 100.0
    }
}

/// Up to five hearings on/after today, ascending by date. The sort is
/// stable, so same-day hearings keep their original relative order.
pub fn proximas_audiencias(audiencias: &[Audiencia], hoje: NaiveDate) -> Vec<Audiencia> {
    let mut proximas: Vec<Audiencia> = audiencias
        .iter()
        .filter(|a| a.data >= hoje)
        .cloned()
        .collect();
    proximas.sort_by_key(|a| a.data);
    proximas.truncate(LIMITE_PAINEL);
    proximas
}

/// Up to five in-progress tasks, in input order
pub fn diligencias_em_andamento(diligencias: &[Diligencia]) -> Vec<Diligencia> {
    diligencias
        .iter()
        .filter(|d| d.status == StatusDiligencia::EmAndamento)
        .take(LIMITE_PAINEL)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_audiencia(id: u64, data: NaiveDate, status: StatusAudiencia) -> Audiencia {
        Audiencia {
            id,
            cliente: format!("Cliente {}", id),
            parte_adversa: String::new(),
            processo: String::new(),
            orgao: String::new(),
            local: None,
            comarca: String::new(),
            uf: String::new(),
            data,
            hora: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            status,
            observacoes: String::new(),
            data_criacao: data,
        }
    }

    fn make_faturamento(id: u64, valor: f64, status: StatusFaturamento) -> Faturamento {
        Faturamento {
            id,
            cliente: format!("Cliente {}", id),
            descricao: String::new(),
            valor,
            data: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            status,
        }
    }

    fn d(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn test_audiencias_no_dia() {
        let hoje = d(2025, 6, 10);
        let audiencias = vec![
            make_audiencia(1, hoje, StatusAudiencia::Agendada),
            make_audiencia(2, d(2025, 6, 11), StatusAudiencia::Agendada),
            make_audiencia(3, hoje, StatusAudiencia::Cancelada),
        ];
        assert_eq!(audiencias_no_dia(&audiencias, hoje), 2);
        assert_eq!(audiencias_no_dia(&[], hoje), 0);
    }

    #[test]
    fn test_contagem_por_status() {
        let audiencias = vec![
            make_audiencia(1, d(2025, 6, 10), StatusAudiencia::Agendada),
            make_audiencia(2, d(2025, 6, 11), StatusAudiencia::Agendada),
            make_audiencia(3, d(2025, 6, 12), StatusAudiencia::Realizada),
        ];
        assert_eq!(contar_audiencias(&audiencias, StatusAudiencia::Agendada), 2);
        assert_eq!(contar_audiencias(&audiencias, StatusAudiencia::Cancelada), 0);
    }

    #[test]
    fn test_totais_e_percentuais() {
        let faturamentos = vec![
            make_faturamento(1, 100.0, StatusFaturamento::Pago),
            make_faturamento(2, 50.0, StatusFaturamento::Pendente),
        ];

        let total = total_faturado(&faturamentos);
        let pago = total_por_status(&faturamentos, StatusFaturamento::Pago);
        let pendente = total_por_status(&faturamentos, StatusFaturamento::Pendente);

        assert_eq!(total, 150.0);
        assert_eq!(pago, 100.0);
        assert_eq!(pendente, 50.0);
        assert!((percentual(pago, total) - 66.7).abs() < 0.1);
    }

    #[test]
    fn test_soma_independe_da_ordem() {
        let mut faturamentos = vec![
            make_faturamento(1, 10.25, StatusFaturamento::Pago),
            make_faturamento(2, 99.75, StatusFaturamento::Pago),
            make_faturamento(3, 0.50, StatusFaturamento::Pendente),
        ];
        let antes = total_faturado(&faturamentos);
        faturamentos.reverse();
        let depois = total_faturado(&faturamentos);
        assert!((antes - depois).abs() < 1e-9);
        assert_eq!(total_faturado(&[]), 0.0);
    }

    #[test]
    fn test_percentual_com_total_zero() {
        assert_eq!(percentual(100.0, 0.0), 0.0);
        assert_eq!(percentual(0.0, 0.0), 0.0);
        assert!(percentual(1.0, f64::NAN) == 0.0);
    }

    #[test]
    fn test_proximas_audiencias_ordenadas_e_limitadas() {
        let hoje = d(2025, 6, 10);
        let audiencias = vec![
            make_audiencia(1, d(2025, 6, 20), StatusAudiencia::Agendada),
            make_audiencia(2, d(2025, 6, 1), StatusAudiencia::Agendada), // past
            make_audiencia(3, d(2025, 6, 12), StatusAudiencia::Agendada),
            make_audiencia(4, d(2025, 6, 12), StatusAudiencia::Realizada), // tie with 3
            make_audiencia(5, hoje, StatusAudiencia::Agendada),
            make_audiencia(6, d(2025, 7, 1), StatusAudiencia::Agendada),
            make_audiencia(7, d(2025, 7, 2), StatusAudiencia::Agendada),
        ];

        let proximas = proximas_audiencias(&audiencias, hoje);

        assert_eq!(proximas.len(), LIMITE_PAINEL);
        // Non-decreasing by date
        for par in proximas.windows(2) {
            assert!(par[0].data <= par[1].data);
        }
        // Stable tie: id 3 appears before id 4
        let ids: Vec<u64> = proximas.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 3, 4, 1, 6]);
    }

    #[test]
    fn test_diligencias_em_andamento_limite() {
        let base = Diligencia {
            id: 0,
            prazo: d(2025, 6, 10),
            hora: None,
            processo: String::new(),
            solicitacao: String::new(),
            status: StatusDiligencia::EmAndamento,
            parte_adversa: String::new(),
            parte_contraria: String::new(),
            orgao: String::new(),
            local: None,
            comarca: String::new(),
            uf: String::new(),
            valor: 0.0,
            valor_mc: 0.0,
            cliente: None,
            solicitante: None,
            resumo_pedido: String::new(),
            observacao: None,
        };
        let mut diligencias: Vec<Diligencia> = (1..=8)
            .map(|id| Diligencia { id, ..base.clone() })
            .collect();
        diligencias[2].status = StatusDiligencia::Finalizada;

        let andamento = diligencias_em_andamento(&diligencias);
        assert_eq!(andamento.len(), LIMITE_PAINEL);
        assert_eq!(andamento.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2, 4, 5, 6]);
    }
}
