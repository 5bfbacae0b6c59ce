//! Audiências Page
//!
//! Cards/calendar toggle, search box, status filter buttons with counts,
//! detail modal and the creation/import entry points.

use leptos::prelude::*;

use crate::components::{
    AudienciaCard, AudienciaModal, CalendarView, ImportarLoteModal, NovaAudienciaModal,
};
use crate::filter::filtrar_audiencias;
use crate::models::{Audiencia, StatusAudiencia};
use crate::stats::contar_audiencias;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum Modo {
    Cards,
    Calendario,
}

#[component]
pub fn Audiencias() -> impl IntoView {
    let store = use_app_store();
    let (modo, set_modo) = signal(Modo::Cards);
    let (busca, set_busca) = signal(String::new());
    let (filtro, set_filtro) = signal::<Option<StatusAudiencia>>(None);
    let (selecionada, set_selecionada) = signal::<Option<Audiencia>>(None);
    let (mostrar_nova, set_mostrar_nova) = signal(false);
    let (mostrar_importar, set_mostrar_importar) = signal(false);

    let filtradas = Signal::derive(move || {
        filtrar_audiencias(&store.audiencias().get(), &busca.get(), filtro.get())
    });
    let total = move || store.audiencias().get().len();

    let on_view = Callback::new(move |a: Audiencia| set_selecionada.set(Some(a)));
    // Edit/delete are stubbed intents for now
    let on_edit = Callback::new(move |a: Audiencia| {
        web_sys::console::log_1(&format!("[Audiencias] Editar audiência {}", a.id).into());
    });
    let on_delete = Callback::new(move |a: Audiencia| {
        web_sys::console::log_1(&format!("[Audiencias] Excluir audiência {}", a.id).into());
    });

    view! {
        <div class="audiencias-page">
            <div class="page-controls">
                <div class="view-toggle">
                    <button
                        class=move || if modo.get() == Modo::Cards { "toggle-btn active" } else { "toggle-btn" }
                        on:click=move |_| set_modo.set(Modo::Cards)
                    >
                        "▦ Cards"
                    </button>
                    <button
                        class=move || if modo.get() == Modo::Calendario { "toggle-btn active" } else { "toggle-btn" }
                        on:click=move |_| set_modo.set(Modo::Calendario)
                    >
                        "📅 Calendário"
                    </button>
                </div>

                <div class="page-actions">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Buscar audiências..."
                        prop:value=move || busca.get()
                        on:input=move |ev| set_busca.set(event_target_value(&ev))
                    />
                    <button class="primary-btn" on:click=move |_| set_mostrar_nova.set(true)>
                        "+ Nova Audiência"
                    </button>
                    <button class="secondary-btn" on:click=move |_| set_mostrar_importar.set(true)>
                        "⬆ Importar Lote"
                    </button>
                </div>
            </div>

            <div class="status-filters">
                <button
                    class=move || if filtro.get().is_none() { "filter-btn active" } else { "filter-btn" }
                    on:click=move |_| set_filtro.set(None)
                >
                    "Todos os Status"
                    <span class="count-badge">{total}</span>
                </button>
                {StatusAudiencia::TODOS.iter().map(|st| {
                    let st = *st;
                    let ativo = move || filtro.get() == Some(st);
                    let contagem = move || contar_audiencias(&store.audiencias().get(), st);
                    view! {
                        <button
                            class=move || if ativo() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| set_filtro.set(Some(st))
                        >
                            {st.label_plural()}
                            <span class="count-badge">{contagem}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || match modo.get() {
                Modo::Cards => view! {
                    <div class="cards-section">
                        <p class="result-count">
                            {move || format!("Mostrando {} de {} audiências", filtradas.get().len(), total())}
                        </p>

                        <div class="cards-grid">
                            <For
                                each=move || filtradas.get()
                                key=|a| a.id
                                children=move |a| view! {
                                    <AudienciaCard
                                        audiencia=a
                                        on_view=on_view
                                        on_edit=on_edit
                                        on_delete=on_delete
                                    />
                                }
                            />
                        </div>

                        <Show when=move || filtradas.get().is_empty()>
                            <div class="empty-state">
                                <span class="empty-icon">"📅"</span>
                                <h3>"Nenhuma audiência encontrada"</h3>
                                <p>"Tente ajustar os filtros ou criar uma nova audiência."</p>
                            </div>
                        </Show>
                    </div>
                }.into_any(),
                Modo::Calendario => view! {
                    <CalendarView audiencias=filtradas/>
                }.into_any(),
            }}

            <AudienciaModal audiencia=selecionada set_audiencia=set_selecionada/>
            <NovaAudienciaModal aberto=mostrar_nova set_aberto=set_mostrar_nova/>
            <ImportarLoteModal aberto=mostrar_importar set_aberto=set_mostrar_importar/>
        </div>
    }
}
