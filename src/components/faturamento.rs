//! Faturamento Page
//!
//! Currency stat cards, filterable billing table and the period summary
//! with paid/pending percentages.

use leptos::prelude::*;

use crate::components::StatCard;
use crate::filter::filtrar_faturamentos;
use crate::format::{formatar_data, formatar_moeda};
use crate::models::StatusFaturamento;
use crate::stats::{percentual, total_faturado, total_por_status};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FaturamentoPage() -> impl IntoView {
    let store = use_app_store();
    let (busca, set_busca) = signal(String::new());
    let (filtro, set_filtro) = signal::<Option<StatusFaturamento>>(None);

    let filtrados = Signal::derive(move || {
        filtrar_faturamentos(&store.faturamentos().get(), &busca.get(), filtro.get())
    });

    let total = Signal::derive(move || total_faturado(&store.faturamentos().get()));
    let pago = Signal::derive(move || {
        total_por_status(&store.faturamentos().get(), StatusFaturamento::Pago)
    });
    let pendente = Signal::derive(move || {
        total_por_status(&store.faturamentos().get(), StatusFaturamento::Pendente)
    });

    let total_txt = Signal::derive(move || formatar_moeda(total.get()));
    let pago_txt = Signal::derive(move || formatar_moeda(pago.get()));
    let pendente_txt = Signal::derive(move || formatar_moeda(pendente.get()));

    view! {
        <div class="faturamento-page">
            <div class="stat-grid tres">
                <StatCard titulo="Total Faturado" valor=total_txt icone="💰" cor="azul"/>
                <StatCard titulo="Total Pago" valor=pago_txt icone="📈" cor="verde"/>
                <StatCard titulo="Total Pendente" valor=pendente_txt icone="📉" cor="amarelo"/>
            </div>

            <div class="page-controls">
                <select
                    class="status-select"
                    on:change=move |ev| set_filtro.set(StatusFaturamento::from_label(&event_target_value(&ev)))
                >
                    <option value="all">"Todos os Status"</option>
                    {StatusFaturamento::TODOS.iter().map(|st| view! {
                        <option value=st.label()>{st.label()}</option>
                    }).collect_view()}
                </select>

                <input
                    type="text"
                    class="search-input"
                    placeholder="Buscar faturamento..."
                    prop:value=move || busca.get()
                    on:input=move |ev| set_busca.set(event_target_value(&ev))
                />
            </div>

            <div class="tabela-container">
                <table class="tabela">
                    <thead>
                        <tr>
                            <th>"Cliente"</th>
                            <th>"Descrição"</th>
                            <th>"Valor"</th>
                            <th>"Data"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filtrados.get()
                            key=|f| f.id
                            children=move |f| view! {
                                <tr>
                                    <td class="celula-destaque">{f.cliente.clone()}</td>
                                    <td>{f.descricao.clone()}</td>
                                    <td class="celula-destaque">{formatar_moeda(f.valor)}</td>
                                    <td>{formatar_data(f.data)}</td>
                                    <td><span class=f.status.badge_class()>{f.status.label()}</span></td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || filtrados.get().is_empty()>
                    <div class="empty-state">
                        <span class="empty-icon">"💰"</span>
                        <h3>"Nenhum faturamento encontrado"</h3>
                        <p>"Tente ajustar os filtros ou termos de busca."</p>
                    </div>
                </Show>
            </div>

            <div class="panel">
                <div class="panel-header">
                    <h3>"Resumo do Período"</h3>
                </div>
                <div class="panel-body resumo-grid">
                    <div>
                        <h4>"Faturamento por Status"</h4>
                        <div class="resumo-linha">
                            <span>"Pago:"</span>
                            <span class="valor-verde">{move || formatar_moeda(pago.get())}</span>
                        </div>
                        <div class="resumo-linha">
                            <span>"Pendente:"</span>
                            <span class="valor-amarelo">{move || formatar_moeda(pendente.get())}</span>
                        </div>
                        <div class="resumo-linha total">
                            <span>"Total:"</span>
                            <span>{move || formatar_moeda(total.get())}</span>
                        </div>
                    </div>
                    <div>
                        <h4>"Taxa de Recebimento"</h4>
                        <div class="resumo-linha">
                            <span>"Recebido:"</span>
                            <span class="valor-verde">
                                {move || format!("{:.1}%", percentual(pago.get(), total.get()))}
                            </span>
                        </div>
                        <div class="resumo-linha">
                            <span>"Pendente:"</span>
                            <span class="valor-amarelo">
                                {move || format!("{:.1}%", percentual(pendente.get(), total.get()))}
                            </span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
