//! Calendar Projection
//!
//! Maps hearings into time-ranged calendar events and provides the
//! month-grid helpers the calendar view renders from.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::Audiencia;

/// Default start time when a hearing has no time of day
pub fn hora_padrao() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time")
}

/// Default event duration
pub const DURACAO_EVENTO_HORAS: i64 = 1;

/// pt-BR weekday headers, Sunday first
pub const DIAS_SEMANA: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// A hearing projected onto the calendar
#[derive(Debug, Clone, PartialEq)]
pub struct EventoCalendario {
    pub id: u64,
    pub titulo: String,
    pub inicio: NaiveDateTime,
    pub fim: NaiveDateTime,
    /// Source hearing, kept for the detail modal
    pub audiencia: Audiencia,
}

/// Order-preserving projection: exactly one event per hearing, one hour
/// long, starting at the hearing time (09:00 when absent).
pub fn projetar_eventos(audiencias: &[Audiencia]) -> Vec<EventoCalendario> {
    audiencias
        .iter()
        .map(|a| {
            let inicio = a.data.and_time(a.hora.unwrap_or_else(hora_padrao));
            EventoCalendario {
                id: a.id,
                titulo: a.cliente.clone(),
                inicio,
                fim: inicio + Duration::hours(DURACAO_EVENTO_HORAS),
                audiencia: a.clone(),
            }
        })
        .collect()
}

/// Events whose start falls on the given day, in projection order
pub fn eventos_do_dia(eventos: &[EventoCalendario], dia: NaiveDate) -> Vec<EventoCalendario> {
    eventos
        .iter()
        .filter(|e| e.inicio.date() == dia)
        .cloned()
        .collect()
}

/// The weeks of a month as rows of 7 cells, padded with `None` before the
/// first day and after the last (Sunday-first grid).
pub fn semanas_do_mes(ano: i32, mes: u32) -> Vec<Vec<Option<NaiveDate>>> {
    let Some(primeiro) = NaiveDate::from_ymd_opt(ano, mes, 1) else {
        return Vec::new();
    };
    let offset = primeiro.weekday().num_days_from_sunday() as usize;

    let mut celulas: Vec<Option<NaiveDate>> = vec![None; offset];
    let mut dia = primeiro;
    while dia.month() == mes {
        celulas.push(Some(dia));
        match dia.succ_opt() {
            Some(proximo) => dia = proximo,
            None => break,
        }
    }
    while celulas.len() % 7 != 0 {
        celulas.push(None);
    }

    celulas.chunks(7).map(|semana| semana.to_vec()).collect()
}

/// pt-BR month name (1-based; out-of-range yields an empty string)
pub fn nome_mes(mes: u32) -> &'static str {
    match mes {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "",
    }
}

pub fn mes_anterior(ano: i32, mes: u32) -> (i32, u32) {
    if mes == 1 {
        (ano - 1, 12)
    } else {
        (ano, mes - 1)
    }
}

pub fn proximo_mes(ano: i32, mes: u32) -> (i32, u32) {
    if mes == 12 {
        (ano + 1, 1)
    } else {
        (ano, mes + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusAudiencia;

    fn make_audiencia(id: u64, data: NaiveDate, hora: Option<NaiveTime>) -> Audiencia {
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
            hora,
            status: StatusAudiencia::Agendada,
            observacoes: String::new(),
            data_criacao: data,
        }
    }

    fn d(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn test_um_evento_por_audiencia_com_referencia() {
        let audiencias = vec![
            make_audiencia(1, d(2025, 6, 10), NaiveTime::from_hms_opt(14, 30, 0)),
            make_audiencia(2, d(2025, 6, 11), None),
        ];

        let eventos = projetar_eventos(&audiencias);

        assert_eq!(eventos.len(), audiencias.len());
        for (evento, audiencia) in eventos.iter().zip(&audiencias) {
            assert_eq!(evento.id, audiencia.id);
            assert_eq!(evento.titulo, audiencia.cliente);
            assert_eq!(&evento.audiencia, audiencia);
            assert!(evento.fim > evento.inicio);
        }
    }

    #[test]
    fn test_hora_ausente_vira_nove_e_dura_uma_hora() {
        let eventos = projetar_eventos(&[make_audiencia(1, d(2025, 6, 10), None)]);
        assert_eq!(eventos[0].inicio, d(2025, 6, 10).and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(eventos[0].fim, d(2025, 6, 10).and_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn test_hora_presente_define_inicio() {
        let hora = NaiveTime::from_hms_opt(15, 45, 0);
        let eventos = projetar_eventos(&[make_audiencia(1, d(2025, 6, 10), hora)]);
        assert_eq!(eventos[0].inicio.time(), hora.unwrap());
        assert_eq!(eventos[0].fim - eventos[0].inicio, Duration::hours(1));
    }

    #[test]
    fn test_eventos_do_dia() {
        let eventos = projetar_eventos(&[
            make_audiencia(1, d(2025, 6, 10), None),
            make_audiencia(2, d(2025, 6, 11), None),
            make_audiencia(3, d(2025, 6, 10), NaiveTime::from_hms_opt(16, 0, 0)),
        ]);
        let no_dia = eventos_do_dia(&eventos, d(2025, 6, 10));
        assert_eq!(no_dia.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_semanas_do_mes_junho_2025() {
        // June 2025 starts on a Sunday and has 30 days
        let semanas = semanas_do_mes(2025, 6);
        assert_eq!(semanas.len(), 5);
        assert_eq!(semanas[0][0], Some(d(2025, 6, 1)));
        assert_eq!(semanas[4][0], Some(d(2025, 6, 29)));
        assert_eq!(semanas[4][1], Some(d(2025, 6, 30)));
        assert_eq!(semanas[4][2], None);
        for semana in &semanas {
            assert_eq!(semana.len(), 7);
        }
    }

    #[test]
    fn test_semanas_do_mes_com_offset() {
        // May 2025 starts on a Thursday
        let semanas = semanas_do_mes(2025, 5);
        assert_eq!(semanas[0][3], None);
        assert_eq!(semanas[0][4], Some(d(2025, 5, 1)));
    }

    #[test]
    fn test_navegacao_de_meses() {
        assert_eq!(mes_anterior(2025, 1), (2024, 12));
        assert_eq!(mes_anterior(2025, 6), (2025, 5));
        assert_eq!(proximo_mes(2025, 12), (2026, 1));
        assert_eq!(proximo_mes(2025, 6), (2025, 7));
    }
}
