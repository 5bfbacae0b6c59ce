//! Diligências Page
//!
//! Status select, search box, row list and the detail modal with
//! "Não informado" fallbacks for optional fields.

use leptos::prelude::*;

use crate::filter::filtrar_diligencias;
use crate::format::{formatar_data, formatar_moeda, ou_nao_informado};
use crate::models::{Diligencia, StatusDiligencia};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Diligencias() -> impl IntoView {
    let store = use_app_store();
    let (busca, set_busca) = signal(String::new());
    let (filtro, set_filtro) = signal::<Option<StatusDiligencia>>(None);
    let (selecionada, set_selecionada) = signal::<Option<Diligencia>>(None);

    let filtradas = Signal::derive(move || {
        filtrar_diligencias(&store.diligencias().get(), &busca.get(), filtro.get())
    });

    view! {
        <div class="diligencias-page">
            <div class="page-controls">
                <select
                    class="status-select"
                    on:change=move |ev| set_filtro.set(StatusDiligencia::from_label(&event_target_value(&ev)))
                >
                    <option value="all">"Todos os Status"</option>
                    {StatusDiligencia::TODOS.iter().map(|st| view! {
                        <option value=st.label()>{st.label()}</option>
                    }).collect_view()}
                </select>

                <input
                    type="text"
                    class="search-input"
                    placeholder="Buscar diligências..."
                    prop:value=move || busca.get()
                    on:input=move |ev| set_busca.set(event_target_value(&ev))
                />
            </div>

            <div class="lista-diligencias">
                <For
                    each=move || filtradas.get()
                    key=|d| d.id
                    children=move |d| {
                        let para_ver = d.clone();
                        view! {
                            <div class="diligencia-row">
                                <div class="row-main">
                                    <div class="row-head">
                                        <span class=d.status.badge_class()>{d.status.label()}</span>
                                        <h3>{d.solicitacao.clone()}</h3>
                                    </div>
                                    <div class="row-fields">
                                        <span><b>"Processo: "</b>{d.processo.clone()}</span>
                                        <span><b>"Parte Adversa: "</b>{d.parte_adversa.clone()}</span>
                                        <span><b>"Comarca: "</b>{format!("{} - {}", d.comarca, d.uf)}</span>
                                        <span><b>"Prazo: "</b>{formatar_data(d.prazo)}</span>
                                        <span><b>"Órgão: "</b>{d.orgao.clone()}</span>
                                        <span><b>"Valor MC: "</b>{formatar_moeda(d.valor_mc)}</span>
                                    </div>
                                    <p class="row-resumo">{d.resumo_pedido.clone()}</p>
                                </div>
                                <button
                                    class="card-btn"
                                    title="Visualizar"
                                    on:click=move |_| set_selecionada.set(Some(para_ver.clone()))
                                >
                                    "👁"
                                </button>
                            </div>
                        }
                    }
                />

                <Show when=move || filtradas.get().is_empty()>
                    <div class="empty-state">
                        <span class="empty-icon">"📋"</span>
                        <h3>"Nenhuma diligência encontrada"</h3>
                        <p>"Tente ajustar os filtros ou termos de busca."</p>
                    </div>
                </Show>
            </div>

            <DiligenciaModal diligencia=selecionada set_diligencia=set_selecionada/>
        </div>
    }
}

/// Detail modal for a single task
#[component]
fn DiligenciaModal(
    diligencia: ReadSignal<Option<Diligencia>>,
    set_diligencia: WriteSignal<Option<Diligencia>>,
) -> impl IntoView {
    view! {
        {move || diligencia.get().map(|d| {
            let hora = ou_nao_informado(
                d.hora.map(|h| h.format("%H:%M").to_string()).as_deref(),
            );
            let local = ou_nao_informado(d.local.as_deref());
            let cliente = ou_nao_informado(d.cliente.as_deref());
            let solicitante = ou_nao_informado(d.solicitante.as_deref());
            let observacao = d.observacao.clone().filter(|o| !o.trim().is_empty());

            view! {
                <div class="modal-overlay" on:click=move |_| set_diligencia.set(None)>
                    <div class="modal modal-wide" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h3>"Detalhes da Diligência"</h3>
                            <button class="modal-close" on:click=move |_| set_diligencia.set(None)>
                                "×"
                            </button>
                        </div>

                        <div class="modal-body">
                            <div class="detail-grid">
                                <div class="detail-field">
                                    <label>"Prazo"</label>
                                    <p>{formatar_data(d.prazo)}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Hora"</label>
                                    <p>{hora}</p>
                                </div>
                                <div class="detail-field wide">
                                    <label>"Processo"</label>
                                    <p class="mono">{d.processo.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Solicitação"</label>
                                    <p>{d.solicitacao.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Status"</label>
                                    <span class=d.status.badge_class()>{d.status.label()}</span>
                                </div>
                                <div class="detail-field">
                                    <label>"Parte Adversa"</label>
                                    <p>{d.parte_adversa.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Parte Contrária"</label>
                                    <p>{d.parte_contraria.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Órgão"</label>
                                    <p>{d.orgao.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Local"</label>
                                    <p>{local}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Comarca"</label>
                                    <p>{d.comarca.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"UF"</label>
                                    <p>{d.uf.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Valor"</label>
                                    <p>{formatar_moeda(d.valor)}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Valor MC"</label>
                                    <p>{formatar_moeda(d.valor_mc)}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Cliente"</label>
                                    <p>{cliente}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Solicitante"</label>
                                    <p>{solicitante}</p>
                                </div>
                                <div class="detail-field wide">
                                    <label>"Resumo do Pedido"</label>
                                    <p>{d.resumo_pedido.clone()}</p>
                                </div>
                                {observacao.map(|obs| view! {
                                    <div class="detail-field wide">
                                        <label>"Observação"</label>
                                        <p>{obs}</p>
                                    </div>
                                })}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
