//! Importar Lote Modal
//!
//! Queue of user-picked files processed one at a time through the
//! simulated extraction strategy, with per-file pendente → processando →
//! concluído/erro status.

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::sorteio;
use crate::format::formatar_tamanho;
use crate::import::{
    ArquivoImportado, ExtracaoSimulada, ExtracaoStrategy, StatusImportacao, TipoArquivo,
};
use crate::store::{store_add_audiencias, use_app_store};

/// Hint grid shown above the file picker
const TIPOS_ACEITOS: [(&str, &str, &str); 5] = [
    ("🖼️", "Imagens", "JPG, PNG - Pautas escaneadas"),
    ("📊", "Excel", "XLSX, XLS - Planilhas de dados"),
    ("📝", "Word", "DOCX, DOC - Documentos"),
    ("📄", "PDF", "Pautas em PDF"),
    ("📈", "CSV", "Dados separados por vírgula"),
];

#[component]
pub fn ImportarLoteModal(
    aberto: ReadSignal<bool>,
    set_aberto: WriteSignal<bool>,
) -> impl IntoView {
    let store = use_app_store();
    let (arquivos, set_arquivos) = signal(Vec::<ArquivoImportado>::new());
    let (processando, set_processando) = signal(false);

    let selecionar = move |ev: web_sys::Event| {
        let Some(alvo) = ev.target() else { return };
        let Some(input) = alvo.dyn_ref::<web_sys::HtmlInputElement>() else { return };
        let Some(lista) = input.files() else { return };

        let base_id = js_sys::Date::now() as u64;
        let mut novos = Vec::new();
        for i in 0..lista.length() {
            if let Some(arquivo) = lista.get(i) {
                novos.push(ArquivoImportado {
                    id: base_id + i as u64,
                    nome: arquivo.name(),
                    tipo: TipoArquivo::do_mime(&arquivo.type_()),
                    tamanho: arquivo.size() as u64,
                    status: StatusImportacao::Pendente,
                });
            }
        }
        set_arquivos.update(|fila| fila.extend(novos));
        input.set_value("");
    };

    let remover = move |id: u64| {
        set_arquivos.update(|fila| fila.retain(|a| a.id != id));
    };

    let limpar_tudo = move |_| set_arquivos.set(Vec::new());

    // One extraction in flight at a time; each file's status transitions
    // stay observable in order.
    let processar = move |_| {
        if processando.get() || arquivos.get().is_empty() {
            return;
        }
        set_processando.set(true);

        spawn_local(async move {
            let fila: Vec<(u64, String)> = arquivos
                .get_untracked()
                .iter()
                .filter(|a| a.status == StatusImportacao::Pendente)
                .map(|a| (a.id, a.nome.clone()))
                .collect();
            let hoje = Local::now().date_naive();
            let extrator = ExtracaoSimulada { sorteio };

            for (id, nome) in fila {
                set_arquivos.update(|fila| {
                    if let Some(a) = fila.iter_mut().find(|a| a.id == id) {
                        a.status = StatusImportacao::Processando;
                    }
                });
                web_sys::console::log_1(
                    &format!("[Importar] Processando {}", nome).into(),
                );

                // Artificial extraction time, 2-5s
                TimeoutFuture::new(sorteio(2000, 5000)).await;

                match extrator.extrair(id, &nome, hoje) {
                    Ok(extraidas) => {
                        let quantidade = extraidas.len();
                        store_add_audiencias(&store, extraidas);
                        set_arquivos.update(|fila| {
                            if let Some(a) = fila.iter_mut().find(|a| a.id == id) {
                                a.status = StatusImportacao::Concluido(quantidade);
                            }
                        });
                    }
                    Err(erro) => {
                        web_sys::console::error_1(
                            &format!("[Importar] Erro em {}: {}", nome, erro).into(),
                        );
                        set_arquivos.update(|fila| {
                            if let Some(a) = fila.iter_mut().find(|a| a.id == id) {
                                a.status = StatusImportacao::Erro(erro.clone());
                            }
                        });
                    }
                }
            }

            set_processando.set(false);
        });
    };

    view! {
        <Show when=move || aberto.get()>
            <div class="modal-overlay">
                <div class="modal modal-wide">
                    <div class="modal-header">
                        <div>
                            <h3>"Importar Pauta em Lote"</h3>
                            <p class="modal-sub">
                                "Envie pautas e planilhas; cada arquivo gera audiências automaticamente."
                            </p>
                        </div>
                        <button class="modal-close" on:click=move |_| set_aberto.set(false)>
                            "×"
                        </button>
                    </div>

                    <div class="modal-body">
                        <div class="tipos-grid">
                            {TIPOS_ACEITOS.iter().map(|(icone, label, desc)| view! {
                                <div class="tipo-hint">
                                    <span class="tipo-icone">{*icone}</span>
                                    <div>
                                        <p class="tipo-label">{*label}</p>
                                        <p class="tipo-desc">{*desc}</p>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>

                        <label class="file-drop">
                            <span>"⬆ Selecionar arquivos"</span>
                            <input
                                type="file"
                                multiple
                                class="file-input"
                                on:change=selecionar
                            />
                        </label>

                        <div class="fila-arquivos">
                            <For
                                each=move || arquivos.get()
                                // Status is part of the key so rows re-render on transition
                                key=|a| (a.id, a.status.label())
                                children=move |a| {
                                    let id = a.id;
                                    let removivel = a.status == StatusImportacao::Pendente;
                                    view! {
                                        <div class="arquivo-row">
                                            <span class="arquivo-icone">{a.tipo.icone()}</span>
                                            <div class="arquivo-info">
                                                <p class="arquivo-nome">{a.nome.clone()}</p>
                                                <p class="arquivo-meta">
                                                    {format!("{} · {}", a.tipo.label(), formatar_tamanho(a.tamanho))}
                                                </p>
                                            </div>
                                            <span class=a.status.class()>{a.status.label()}</span>
                                            <Show when=move || removivel && !processando.get()>
                                                <button
                                                    class="card-btn danger"
                                                    title="Remover"
                                                    on:click=move |_| remover(id)
                                                >
                                                    "×"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                }
                            />
                        </div>

                        <Show when=move || arquivos.get().is_empty()>
                            <p class="empty">"Nenhum arquivo selecionado."</p>
                        </Show>

                        <div class="form-actions">
                            <button
                                type="button"
                                class="secondary-btn"
                                disabled=move || processando.get()
                                on:click=limpar_tudo
                            >
                                "Limpar tudo"
                            </button>
                            <button
                                type="button"
                                class="primary-btn"
                                disabled=move || processando.get() || arquivos.get().is_empty()
                                on:click=processar
                            >
                                {move || if processando.get() { "Processando..." } else { "Processar Arquivos" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
