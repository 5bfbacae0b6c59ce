//! Simulated Batch Import
//!
//! The import modal accepts arbitrary files, classifies them by declared
//! MIME type and, after an artificial delay, fabricates one placeholder
//! hearing per file. The extraction step sits behind an injectable
//! strategy so tests run on deterministic fixtures; the real pipeline can
//! replace the strategy later without touching the modal.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::calendar::hora_padrao;
use crate::models::{numero_processo, Audiencia, StatusAudiencia};

/// Coarse file classification for the import list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoArquivo {
    Imagem,
    Planilha,
    Documento,
    Pdf,
    Csv,
    Outro,
}

impl TipoArquivo {
    /// Classify by the browser-declared MIME type. Total: anything
    /// unrecognized is Outro.
    pub fn do_mime(mime: &str) -> Self {
        match mime {
            m if m.starts_with("image/") => TipoArquivo::Imagem,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            | "application/vnd.ms-excel" => TipoArquivo::Planilha,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "application/msword" => TipoArquivo::Documento,
            "application/pdf" => TipoArquivo::Pdf,
            "text/csv" => TipoArquivo::Csv,
            _ => TipoArquivo::Outro,
        }
    }

    pub fn icone(&self) -> &'static str {
        match self {
            TipoArquivo::Imagem => "🖼️",
            TipoArquivo::Planilha => "📊",
            TipoArquivo::Documento => "📝",
            TipoArquivo::Pdf => "📄",
            TipoArquivo::Csv => "📈",
            TipoArquivo::Outro => "📎",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipoArquivo::Imagem => "Imagem",
            TipoArquivo::Planilha => "Excel",
            TipoArquivo::Documento => "Word",
            TipoArquivo::Pdf => "PDF",
            TipoArquivo::Csv => "CSV",
            TipoArquivo::Outro => "Arquivo",
        }
    }
}

/// Per-file pipeline state; each file moves pendente → processando →
/// concluído/erro, observable in that order.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusImportacao {
    Pendente,
    Processando,
    /// Number of hearings extracted
    Concluido(usize),
    Erro(String),
}

impl StatusImportacao {
    pub fn label(&self) -> String {
        match self {
            StatusImportacao::Pendente => "Pendente".to_string(),
            StatusImportacao::Processando => "Processando...".to_string(),
            StatusImportacao::Concluido(n) => format!("Concluído ({} audiência(s))", n),
            StatusImportacao::Erro(msg) => format!("Erro: {}", msg),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            StatusImportacao::Pendente => "import-status pendente",
            StatusImportacao::Processando => "import-status processando",
            StatusImportacao::Concluido(_) => "import-status concluido",
            StatusImportacao::Erro(_) => "import-status erro",
        }
    }
}

/// A file queued in the import modal
#[derive(Debug, Clone, PartialEq)]
pub struct ArquivoImportado {
    pub id: u64,
    pub nome: String,
    pub tipo: TipoArquivo,
    pub tamanho: u64,
    pub status: StatusImportacao,
}

/// The extraction step: per file, eventually zero or more hearings or an
/// error. Injectable so the modal can be driven by fixtures in tests.
pub trait ExtracaoStrategy {
    fn extrair(&self, id: u64, nome_arquivo: &str, hoje: NaiveDate) -> Result<Vec<Audiencia>, String>;
}

/// Stand-in for the future real extraction pipeline: fabricates one
/// hearing per file from injected pseudo-random draws.
///
/// `sorteio(min, max)` must return a value in `min..=max`.
pub struct ExtracaoSimulada<R: Fn(u32, u32) -> u32> {
    pub sorteio: R,
}

impl<R: Fn(u32, u32) -> u32> ExtracaoStrategy for ExtracaoSimulada<R> {
    fn extrair(&self, id: u64, nome_arquivo: &str, hoje: NaiveDate) -> Result<Vec<Audiencia>, String> {
        let sorteio = &self.sorteio;
        let base = nome_arquivo.split('.').next().unwrap_or(nome_arquivo);

        let processo = numero_processo(
            sorteio(1_000_000, 9_999_999),
            sorteio(1000, 9999),
            hoje.year(),
        );
        let data = hoje + Duration::days(sorteio(0, 30) as i64);
        let hora = NaiveTime::from_hms_opt(sorteio(8, 19), sorteio(0, 59), 0)
            .unwrap_or_else(hora_padrao);

        Ok(vec![Audiencia {
            id,
            cliente: format!("Cliente extraído de {}", base),
            parte_adversa: "Parte adversa extraída".to_string(),
            processo,
            orgao: "JEC".to_string(),
            local: Some("Fórum Central".to_string()),
            comarca: "Manaus".to_string(),
            uf: "AM".to_string(),
            data,
            hora: Some(hora),
            status: StatusAudiencia::Agendada,
            observacoes: format!("Dados extraídos automaticamente de {}", nome_arquivo),
            data_criacao: hoje,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic fixture: always yields the lower bound
    fn extrator_fixo() -> ExtracaoSimulada<impl Fn(u32, u32) -> u32> {
        ExtracaoSimulada { sorteio: |min, _max| min }
    }

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_classificacao_por_mime() {
        assert_eq!(TipoArquivo::do_mime("image/png"), TipoArquivo::Imagem);
        assert_eq!(TipoArquivo::do_mime("application/pdf"), TipoArquivo::Pdf);
        assert_eq!(TipoArquivo::do_mime("text/csv"), TipoArquivo::Csv);
        assert_eq!(
            TipoArquivo::do_mime("application/vnd.ms-excel"),
            TipoArquivo::Planilha
        );
        assert_eq!(
            TipoArquivo::do_mime("application/msword"),
            TipoArquivo::Documento
        );
        assert_eq!(TipoArquivo::do_mime("audio/mpeg"), TipoArquivo::Outro);
        assert_eq!(TipoArquivo::do_mime(""), TipoArquivo::Outro);
    }

    #[test]
    fn test_extracao_fabrica_uma_audiencia_agendada() {
        let extraidas = extrator_fixo()
            .extrair(42, "pauta-junho.pdf", hoje())
            .expect("simulated extraction never fails");

        assert_eq!(extraidas.len(), 1);
        let audiencia = &extraidas[0];
        assert_eq!(audiencia.id, 42);
        assert_eq!(audiencia.status, StatusAudiencia::Agendada);
        assert_eq!(audiencia.cliente, "Cliente extraído de pauta-junho");
        assert_eq!(audiencia.data_criacao, hoje());
        assert!(audiencia.data >= hoje());
    }

    #[test]
    fn test_extracao_gera_processo_no_formato() {
        let extraidas = extrator_fixo().extrair(1, "pauta.xlsx", hoje()).unwrap();
        let processo = &extraidas[0].processo;

        // NNNNNNN-YYYY.8.04.NNNN
        let partes: Vec<&str> = processo.split('-').collect();
        assert_eq!(partes.len(), 2);
        assert_eq!(partes[0].len(), 7);
        assert!(partes[0].chars().all(|c| c.is_ascii_digit()));
        let resto: Vec<&str> = partes[1].split('.').collect();
        assert_eq!(resto, vec!["2025", "8", "04", "1000"]);
    }

    #[test]
    fn test_nome_sem_extensao() {
        let extraidas = extrator_fixo().extrair(1, "pauta", hoje()).unwrap();
        assert_eq!(extraidas[0].cliente, "Cliente extraído de pauta");
    }

    #[test]
    fn test_labels_de_status() {
        assert_eq!(StatusImportacao::Pendente.label(), "Pendente");
        assert_eq!(StatusImportacao::Concluido(2).label(), "Concluído (2 audiência(s))");
        assert_eq!(
            StatusImportacao::Erro("arquivo ilegível".to_string()).label(),
            "Erro: arquivo ilegível"
        );
    }
}
