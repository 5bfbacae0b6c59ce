//! Filter/Search Engine
//!
//! Pure filtering over the in-memory collections: case-insensitive
//! substring search across each record kind's designated text fields,
//! combined (AND) with an optional exact status constraint. Input order
//! is preserved; re-run on every keystroke.

use crate::models::{
    Audiencia, Diligencia, Faturamento, StatusAudiencia, StatusDiligencia, StatusFaturamento,
};

/// Text fields a record kind exposes to the search box
pub trait TextSearch {
    fn haystacks(&self) -> Vec<&str>;
}

impl TextSearch for Audiencia {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.cliente, &self.parte_adversa, &self.processo, &self.comarca]
    }
}

impl TextSearch for Diligencia {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.processo, &self.parte_adversa, &self.solicitacao]
    }
}

impl TextSearch for Faturamento {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.cliente, &self.descricao]
    }
}

fn corresponde_busca<T: TextSearch>(registro: &T, busca_lower: &str) -> bool {
    busca_lower.is_empty()
        || registro
            .haystacks()
            .iter()
            .any(|campo| campo.to_lowercase().contains(busca_lower))
}

/// Generic filter: text match OR-ed across the designated fields, AND-ed
/// with the status constraint (`None` = all statuses).
fn filtrar<T, S>(registros: &[T], busca: &str, status: Option<S>, status_de: impl Fn(&T) -> S) -> Vec<T>
where
    T: TextSearch + Clone,
    S: PartialEq,
{
    let busca_lower = busca.to_lowercase();
    registros
        .iter()
        .filter(|r| corresponde_busca(*r, &busca_lower))
        .filter(|r| match &status {
            Some(s) => status_de(r) == *s,
            None => true,
        })
        .cloned()
        .collect()
}

pub fn filtrar_audiencias(
    audiencias: &[Audiencia],
    busca: &str,
    status: Option<StatusAudiencia>,
) -> Vec<Audiencia> {
    filtrar(audiencias, busca, status, |a| a.status)
}

pub fn filtrar_diligencias(
    diligencias: &[Diligencia],
    busca: &str,
    status: Option<StatusDiligencia>,
) -> Vec<Diligencia> {
    filtrar(diligencias, busca, status, |d| d.status)
}

pub fn filtrar_faturamentos(
    faturamentos: &[Faturamento],
    busca: &str,
    status: Option<StatusFaturamento>,
) -> Vec<Faturamento> {
    filtrar(faturamentos, busca, status, |f| f.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_audiencia(id: u64, cliente: &str, comarca: &str, status: StatusAudiencia) -> Audiencia {
        Audiencia {
            id,
            cliente: cliente.to_string(),
            parte_adversa: "Banco Azul S.A.".to_string(),
            processo: format!("{:07}-2025.8.04.0001", id),
            orgao: "JEC".to_string(),
            local: None,
            comarca: comarca.to_string(),
            uf: "AM".to_string(),
            data: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            hora: None,
            status,
            observacoes: String::new(),
            data_criacao: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    fn colecao() -> Vec<Audiencia> {
        vec![
            make_audiencia(1, "Maria Silva", "Manaus", StatusAudiencia::Agendada),
            make_audiencia(2, "João Souza", "Itacoatiara", StatusAudiencia::Realizada),
            make_audiencia(3, "Ana Pereira", "Manaus", StatusAudiencia::Cancelada),
        ]
    }

    #[test]
    fn test_sem_restricoes_e_identidade() {
        let audiencias = colecao();
        assert_eq!(filtrar_audiencias(&audiencias, "", None), audiencias);
    }

    #[test]
    fn test_busca_case_insensitive_em_qualquer_campo() {
        let audiencias = colecao();

        let por_cliente = filtrar_audiencias(&audiencias, "maria", None);
        assert_eq!(por_cliente.len(), 1);
        assert_eq!(por_cliente[0].id, 1);

        // Comarca is a designated field too
        let por_comarca = filtrar_audiencias(&audiencias, "MANAUS", None);
        assert_eq!(por_comarca.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);

        // Every excluded record really has no matching field
        for a in &audiencias {
            if !por_comarca.contains(a) {
                assert!(!a.haystacks().iter().any(|h| h.to_lowercase().contains("manaus")));
            }
        }
    }

    #[test]
    fn test_status_e_busca_combinados_com_and() {
        let audiencias = colecao();
        let resultado = filtrar_audiencias(&audiencias, "manaus", Some(StatusAudiencia::Cancelada));
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].id, 3);
    }

    #[test]
    fn test_filtro_status_com_busca_vazia() {
        let audiencias = colecao();
        let agendadas = filtrar_audiencias(&audiencias, "", Some(StatusAudiencia::Agendada));
        assert_eq!(agendadas.len(), 1);
        assert_eq!(agendadas[0].id, 1);
    }

    #[test]
    fn test_sem_resultado_retorna_vazio() {
        let audiencias = colecao();
        assert!(filtrar_audiencias(&audiencias, "inexistente", None).is_empty());
    }

    #[test]
    fn test_idempotencia() {
        let audiencias = colecao();
        let uma_vez = filtrar_audiencias(&audiencias, "manaus", Some(StatusAudiencia::Agendada));
        let duas_vezes = filtrar_audiencias(&uma_vez, "manaus", Some(StatusAudiencia::Agendada));
        assert_eq!(uma_vez, duas_vezes);
    }

    #[test]
    fn test_ordem_relativa_preservada() {
        let audiencias = colecao();
        let resultado = filtrar_audiencias(&audiencias, "a", None);
        let ids: Vec<u64> = resultado.iter().map(|a| a.id).collect();
        let mut ordenados = ids.clone();
        ordenados.sort_unstable();
        assert_eq!(ids, ordenados);
    }
}
