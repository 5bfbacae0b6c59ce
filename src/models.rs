//! Domain Models
//!
//! Record types for hearings (audiências), field tasks (diligências) and
//! billing entries (faturamento), plus their closed status enums.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Hearing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatusAudiencia {
    #[default]
    Agendada,
    Realizada,
    Cancelada,
}

impl StatusAudiencia {
    pub const TODOS: [StatusAudiencia; 3] = [
        StatusAudiencia::Agendada,
        StatusAudiencia::Realizada,
        StatusAudiencia::Cancelada,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusAudiencia::Agendada => "Agendada",
            StatusAudiencia::Realizada => "Realizada",
            StatusAudiencia::Cancelada => "Cancelada",
        }
    }

    /// Plural label for the filter buttons
    pub fn label_plural(&self) -> &'static str {
        match self {
            StatusAudiencia::Agendada => "Agendadas",
            StatusAudiencia::Realizada => "Realizadas",
            StatusAudiencia::Cancelada => "Canceladas",
        }
    }

    /// Calendar event color (hex), total over the enum
    pub fn cor(&self) -> &'static str {
        match self {
            StatusAudiencia::Agendada => "#10b981",
            StatusAudiencia::Realizada => "#6366f1",
            StatusAudiencia::Cancelada => "#ef4444",
        }
    }

    /// Badge CSS class
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusAudiencia::Agendada => "badge badge-green",
            StatusAudiencia::Realizada => "badge badge-blue",
            StatusAudiencia::Cancelada => "badge badge-red",
        }
    }
}

/// Field task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatusDiligencia {
    #[serde(rename = "Em Andamento")]
    #[default]
    EmAndamento,
    Pendente,
    Finalizada,
    Cancelada,
}

impl StatusDiligencia {
    pub const TODOS: [StatusDiligencia; 4] = [
        StatusDiligencia::EmAndamento,
        StatusDiligencia::Pendente,
        StatusDiligencia::Finalizada,
        StatusDiligencia::Cancelada,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusDiligencia::EmAndamento => "Em Andamento",
            StatusDiligencia::Pendente => "Pendente",
            StatusDiligencia::Finalizada => "Finalizada",
            StatusDiligencia::Cancelada => "Cancelada",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::TODOS.iter().copied().find(|st| st.label() == s)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusDiligencia::EmAndamento => "badge badge-yellow",
            StatusDiligencia::Pendente => "badge badge-red",
            StatusDiligencia::Finalizada => "badge badge-green",
            StatusDiligencia::Cancelada => "badge badge-gray",
        }
    }
}

/// Billing entry status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatusFaturamento {
    Pago,
    #[default]
    Pendente,
    Atrasado,
}

impl StatusFaturamento {
    pub const TODOS: [StatusFaturamento; 3] = [
        StatusFaturamento::Pago,
        StatusFaturamento::Pendente,
        StatusFaturamento::Atrasado,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFaturamento::Pago => "Pago",
            StatusFaturamento::Pendente => "Pendente",
            StatusFaturamento::Atrasado => "Atrasado",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::TODOS.iter().copied().find(|st| st.label() == s)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusFaturamento::Pago => "badge badge-green",
            StatusFaturamento::Pendente => "badge badge-yellow",
            StatusFaturamento::Atrasado => "badge badge-red",
        }
    }
}

/// Scheduled court hearing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audiencia {
    pub id: u64,
    pub cliente: String,
    pub parte_adversa: String,
    /// Case number, free-form (not validated)
    pub processo: String,
    pub orgao: String,
    pub local: Option<String>,
    pub comarca: String,
    pub uf: String,
    pub data: NaiveDate,
    pub hora: Option<NaiveTime>,
    pub status: StatusAudiencia,
    pub observacoes: String,
    pub data_criacao: NaiveDate,
}

/// Field task with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diligencia {
    pub id: u64,
    pub prazo: NaiveDate,
    pub hora: Option<NaiveTime>,
    pub processo: String,
    pub solicitacao: String,
    pub status: StatusDiligencia,
    pub parte_adversa: String,
    pub parte_contraria: String,
    pub orgao: String,
    pub local: Option<String>,
    pub comarca: String,
    pub uf: String,
    pub valor: f64,
    pub valor_mc: f64,
    pub cliente: Option<String>,
    pub solicitante: Option<String>,
    pub resumo_pedido: String,
    pub observacao: Option<String>,
}

/// Billing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faturamento {
    pub id: u64,
    pub cliente: String,
    pub descricao: String,
    pub valor: f64,
    pub data: NaiveDate,
    pub status: StatusFaturamento,
}

/// Fields collected by the "Nova Audiência" form
#[derive(Debug, Clone, PartialEq)]
pub struct CamposNovaAudiencia {
    pub titulo: String,
    pub tipo: String,
    pub comarca: String,
    pub uf: String,
    pub profissional: String,
    pub local: String,
    pub data: NaiveDate,
    pub hora: NaiveTime,
    pub descricao: String,
}

/// Synthesize a case number in the court's shape: `NNNNNNN-YYYY.8.04.NNNN`.
///
/// The 7- and 4-digit components are supplied by the caller (random in the
/// UI, fixed in tests).
pub fn numero_processo(num7: u32, num4: u32, ano: i32) -> String {
    format!("{:07}-{}.8.04.{:04}", num7 % 10_000_000, ano, num4 % 10_000)
}

impl Audiencia {
    /// Build a new hearing from the creation form, with a fresh id and a
    /// synthesized case number. Status starts as Agendada and the creation
    /// stamp is the current date.
    pub fn nova(id: u64, campos: CamposNovaAudiencia, processo: String, hoje: NaiveDate) -> Self {
        Audiencia {
            id,
            cliente: campos.titulo,
            parte_adversa: campos.profissional,
            processo,
            orgao: campos.tipo,
            local: Some(campos.local),
            comarca: campos.comarca,
            uf: campos.uf,
            data: campos.data,
            hora: Some(campos.hora),
            status: StatusAudiencia::Agendada,
            observacoes: campos.descricao,
            data_criacao: hoje,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numero_processo_shape() {
        let processo = numero_processo(1234567, 5678, 2025);
        assert_eq!(processo, "1234567-2025.8.04.5678");

        // Short components are zero-padded
        let processo = numero_processo(42, 7, 2025);
        assert_eq!(processo, "0000042-2025.8.04.0007");
    }

    #[test]
    fn test_status_from_label_round_trip() {
        for st in StatusDiligencia::TODOS {
            assert_eq!(StatusDiligencia::from_label(st.label()), Some(st));
        }
        for st in StatusFaturamento::TODOS {
            assert_eq!(StatusFaturamento::from_label(st.label()), Some(st));
        }
        assert_eq!(StatusDiligencia::from_label("Todos os Status"), None);
    }

    #[test]
    fn test_nova_audiencia_from_form() {
        let hoje = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let campos = CamposNovaAudiencia {
            titulo: "Teste".to_string(),
            tipo: "JEC".to_string(),
            comarca: "Manaus".to_string(),
            uf: "AM".to_string(),
            profissional: "ADVOGADO".to_string(),
            local: "Fórum Central".to_string(),
            data: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            hora: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            descricao: "Audiência de conciliação".to_string(),
        };
        let processo = numero_processo(9876543, 1234, 2025);

        let audiencia = Audiencia::nova(1, campos, processo.clone(), hoje);

        assert_eq!(audiencia.cliente, "Teste");
        assert_eq!(audiencia.status, StatusAudiencia::Agendada);
        assert_eq!(audiencia.processo, processo);
        assert!(!audiencia.processo.is_empty());
        assert_eq!(audiencia.data_criacao, hoje);
        assert_eq!(audiencia.hora, NaiveTime::from_hms_opt(10, 0, 0));
    }
}
