//! Sample Data
//!
//! Static in-memory collections the console starts with. Nothing here is
//! persisted; the store owns these records for the session.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{
    Audiencia, Diligencia, Faturamento, StatusAudiencia, StatusDiligencia, StatusFaturamento,
};

fn d(ano: i32, mes: u32, dia: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(ano, mes, dia).expect("valid sample date")
}

fn h(hora: u32, minuto: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hora, minuto, 0)
}

pub fn audiencias_exemplo() -> Vec<Audiencia> {
    vec![
        Audiencia {
            id: 1,
            cliente: "Maria das Graças Oliveira".to_string(),
            parte_adversa: "Banco Azul S.A.".to_string(),
            processo: "0654321-2025.8.04.0001".to_string(),
            orgao: "JEC".to_string(),
            local: Some("Fórum Ministro Henoch Reis, sala 3".to_string()),
            comarca: "Manaus".to_string(),
            uf: "AM".to_string(),
            data: d(2026, 9, 8),
            hora: h(9, 30),
            status: StatusAudiencia::Agendada,
            observacoes: "Audiência de conciliação. Levar documentos originais.".to_string(),
            data_criacao: d(2026, 8, 1),
        },
        Audiencia {
            id: 2,
            cliente: "José Ribamar Costa".to_string(),
            parte_adversa: "Construtora Rio Negro Ltda.".to_string(),
            processo: "0712345-2025.8.04.0203".to_string(),
            orgao: "2ª Vara Cível".to_string(),
            local: Some("Fórum Central".to_string()),
            comarca: "Manaus".to_string(),
            uf: "AM".to_string(),
            data: d(2026, 9, 15),
            hora: h(14, 0),
            status: StatusAudiencia::Agendada,
            observacoes: "Instrução e julgamento.".to_string(),
            data_criacao: d(2026, 8, 3),
        },
        Audiencia {
            id: 3,
            cliente: "Antônia Ferreira Lima".to_string(),
            parte_adversa: "Estado do Amazonas".to_string(),
            processo: "0891234-2024.8.04.0301".to_string(),
            orgao: "Vara da Fazenda Pública".to_string(),
            local: None,
            comarca: "Itacoatiara".to_string(),
            uf: "AM".to_string(),
            data: d(2026, 7, 22),
            hora: h(10, 0),
            status: StatusAudiencia::Realizada,
            observacoes: "Acordo homologado em audiência.".to_string(),
            data_criacao: d(2026, 6, 10),
        },
        Audiencia {
            id: 4,
            cliente: "Raimundo Nonato Souza".to_string(),
            parte_adversa: "Seguradora Solimões S.A.".to_string(),
            processo: "0567890-2025.8.04.0118".to_string(),
            orgao: "JEC".to_string(),
            local: Some("Juizado Especial Cível, sala 1".to_string()),
            comarca: "Parintins".to_string(),
            uf: "AM".to_string(),
            data: d(2026, 8, 12),
            hora: None,
            status: StatusAudiencia::Cancelada,
            observacoes: "Cancelada a pedido da parte adversa.".to_string(),
            data_criacao: d(2026, 7, 2),
        },
        Audiencia {
            id: 5,
            cliente: "Francisca Gomes do Nascimento".to_string(),
            parte_adversa: "Operadora Amazonas Telecom".to_string(),
            processo: "0234567-2025.8.04.0455".to_string(),
            orgao: "Juizado Especial Cível".to_string(),
            local: Some("Fórum de Tefé".to_string()),
            comarca: "Tefé".to_string(),
            uf: "AM".to_string(),
            data: d(2026, 10, 1),
            hora: h(8, 45),
            status: StatusAudiencia::Agendada,
            observacoes: String::new(),
            data_criacao: d(2026, 8, 20),
        },
    ]
}

pub fn diligencias_exemplo() -> Vec<Diligencia> {
    vec![
        Diligencia {
            id: 1,
            prazo: d(2026, 9, 5),
            hora: h(9, 0),
            processo: "0654321-2025.8.04.0001".to_string(),
            solicitacao: "Cópia integral dos autos".to_string(),
            status: StatusDiligencia::EmAndamento,
            parte_adversa: "Banco Azul S.A.".to_string(),
            parte_contraria: "Maria das Graças Oliveira".to_string(),
            orgao: "JEC".to_string(),
            local: Some("Fórum Ministro Henoch Reis".to_string()),
            comarca: "Manaus".to_string(),
            uf: "AM".to_string(),
            valor: 150.0,
            valor_mc: 80.0,
            cliente: Some("Maria das Graças Oliveira".to_string()),
            solicitante: Some("Dra. Camila Braga".to_string()),
            resumo_pedido: "Obter cópia integral dos autos para instruir recurso.".to_string(),
            observacao: None,
        },
        Diligencia {
            id: 2,
            prazo: d(2026, 9, 12),
            hora: None,
            processo: "0712345-2025.8.04.0203".to_string(),
            solicitacao: "Protocolo de petição".to_string(),
            status: StatusDiligencia::Pendente,
            parte_adversa: "Construtora Rio Negro Ltda.".to_string(),
            parte_contraria: "José Ribamar Costa".to_string(),
            orgao: "2ª Vara Cível".to_string(),
            local: None,
            comarca: "Manaus".to_string(),
            uf: "AM".to_string(),
            valor: 90.0,
            valor_mc: 45.0,
            cliente: None,
            solicitante: Some("Dr. Hélio Martins".to_string()),
            resumo_pedido: "Protocolar petição de juntada de documentos.".to_string(),
            observacao: Some("Aguardando guia de custas.".to_string()),
        },
        Diligencia {
            id: 3,
            prazo: d(2026, 8, 28),
            hora: h(14, 30),
            processo: "0891234-2024.8.04.0301".to_string(),
            solicitacao: "Acompanhamento de perícia".to_string(),
            status: StatusDiligencia::EmAndamento,
            parte_adversa: "Estado do Amazonas".to_string(),
            parte_contraria: "Antônia Ferreira Lima".to_string(),
            orgao: "Vara da Fazenda Pública".to_string(),
            local: Some("Secretaria da Vara".to_string()),
            comarca: "Itacoatiara".to_string(),
            uf: "AM".to_string(),
            valor: 300.0,
            valor_mc: 150.0,
            cliente: Some("Antônia Ferreira Lima".to_string()),
            solicitante: None,
            resumo_pedido: "Acompanhar perícia contábil e retirar laudo.".to_string(),
            observacao: None,
        },
        Diligencia {
            id: 4,
            prazo: d(2026, 7, 30),
            hora: None,
            processo: "0567890-2025.8.04.0118".to_string(),
            solicitacao: "Despacho com magistrado".to_string(),
            status: StatusDiligencia::Finalizada,
            parte_adversa: "Seguradora Solimões S.A.".to_string(),
            parte_contraria: "Raimundo Nonato Souza".to_string(),
            orgao: "JEC".to_string(),
            local: None,
            comarca: "Parintins".to_string(),
            uf: "AM".to_string(),
            valor: 200.0,
            valor_mc: 100.0,
            cliente: Some("Raimundo Nonato Souza".to_string()),
            solicitante: Some("Dra. Camila Braga".to_string()),
            resumo_pedido: "Despachar pedido de urgência.".to_string(),
            observacao: Some("Concluída no prazo.".to_string()),
        },
        Diligencia {
            id: 5,
            prazo: d(2026, 9, 20),
            hora: h(11, 0),
            processo: "0234567-2025.8.04.0455".to_string(),
            solicitacao: "Audiência por videoconferência".to_string(),
            status: StatusDiligencia::EmAndamento,
            parte_adversa: "Operadora Amazonas Telecom".to_string(),
            parte_contraria: "Francisca Gomes do Nascimento".to_string(),
            orgao: "Juizado Especial Cível".to_string(),
            local: Some("Sala virtual 2".to_string()),
            comarca: "Tefé".to_string(),
            uf: "AM".to_string(),
            valor: 250.0,
            valor_mc: 120.0,
            cliente: Some("Francisca Gomes do Nascimento".to_string()),
            solicitante: Some("Dr. Hélio Martins".to_string()),
            resumo_pedido: "Representar o cliente na audiência de conciliação remota.".to_string(),
            observacao: None,
        },
    ]
}

pub fn faturamentos_exemplo() -> Vec<Faturamento> {
    vec![
        Faturamento {
            id: 1,
            cliente: "Maria das Graças Oliveira".to_string(),
            descricao: "Honorários — ação contra Banco Azul".to_string(),
            valor: 2500.0,
            data: d(2026, 8, 5),
            status: StatusFaturamento::Pago,
        },
        Faturamento {
            id: 2,
            cliente: "José Ribamar Costa".to_string(),
            descricao: "Honorários iniciais — 2ª Vara Cível".to_string(),
            valor: 1800.0,
            data: d(2026, 8, 12),
            status: StatusFaturamento::Pendente,
        },
        Faturamento {
            id: 3,
            cliente: "Antônia Ferreira Lima".to_string(),
            descricao: "Êxito — acordo homologado".to_string(),
            valor: 4200.0,
            data: d(2026, 7, 25),
            status: StatusFaturamento::Pago,
        },
        Faturamento {
            id: 4,
            cliente: "Raimundo Nonato Souza".to_string(),
            descricao: "Consulta e parecer".to_string(),
            valor: 600.0,
            data: d(2026, 6, 30),
            status: StatusFaturamento::Atrasado,
        },
        Faturamento {
            id: 5,
            cliente: "Francisca Gomes do Nascimento".to_string(),
            descricao: "Honorários — Juizado Especial".to_string(),
            valor: 950.0,
            data: d(2026, 8, 22),
            status: StatusFaturamento::Pendente,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_unicos<I: Iterator<Item = u64>>(ids: I) -> bool {
        let mut vistos = std::collections::HashSet::new();
        ids.into_iter().all(|id| vistos.insert(id))
    }

    #[test]
    fn test_ids_unicos_por_colecao() {
        assert!(ids_unicos(audiencias_exemplo().iter().map(|a| a.id)));
        assert!(ids_unicos(diligencias_exemplo().iter().map(|d| d.id)));
        assert!(ids_unicos(faturamentos_exemplo().iter().map(|f| f.id)));
    }

    #[test]
    fn test_valores_nao_negativos() {
        assert!(diligencias_exemplo().iter().all(|d| d.valor >= 0.0 && d.valor_mc >= 0.0));
        assert!(faturamentos_exemplo().iter().all(|f| f.valor >= 0.0));
    }
}
