//! Calendar View Component
//!
//! Month grid over the projected hearing events, with pt-BR labels,
//! status legend and prev/today/next navigation.

use chrono::{Datelike, Local};
use leptos::prelude::*;

use crate::calendar::{
    eventos_do_dia, mes_anterior, nome_mes, projetar_eventos, proximo_mes, semanas_do_mes,
    DIAS_SEMANA,
};
use crate::components::AudienciaModal;
use crate::models::{Audiencia, StatusAudiencia};

#[component]
pub fn CalendarView(#[prop(into)] audiencias: Signal<Vec<Audiencia>>) -> impl IntoView {
    let hoje = Local::now().date_naive();
    let (ano, set_ano) = signal(hoje.year());
    let (mes, set_mes) = signal(hoje.month());
    let (selecionada, set_selecionada) = signal::<Option<Audiencia>>(None);

    let eventos = Signal::derive(move || projetar_eventos(&audiencias.get()));

    let anterior = move |_| {
        let (a, m) = mes_anterior(ano.get(), mes.get());
        set_ano.set(a);
        set_mes.set(m);
    };
    let proximo = move |_| {
        let (a, m) = proximo_mes(ano.get(), mes.get());
        set_ano.set(a);
        set_mes.set(m);
    };
    let ir_hoje = move |_| {
        set_ano.set(hoje.year());
        set_mes.set(hoje.month());
    };

    view! {
        <div class="calendar-view">
            <div class="calendar-legend">
                {StatusAudiencia::TODOS.iter().map(|st| view! {
                    <span class="legend-item">
                        <span class="legend-dot" style=format!("background-color: {}", st.cor())></span>
                        {st.label()}
                    </span>
                }).collect_view()}
            </div>

            <div class="calendar-header">
                <div class="calendar-nav">
                    <button on:click=anterior>"‹ Anterior"</button>
                    <button on:click=ir_hoje>"Hoje"</button>
                    <button on:click=proximo>"Próximo ›"</button>
                </div>
                <h3>{move || format!("{} {}", nome_mes(mes.get()), ano.get())}</h3>
            </div>

            <div class="calendar-grid">
                <div class="calendar-weekdays">
                    {DIAS_SEMANA.iter().map(|dia| view! {
                        <div class="weekday">{*dia}</div>
                    }).collect_view()}
                </div>

                {move || semanas_do_mes(ano.get(), mes.get()).into_iter().map(|semana| view! {
                    <div class="calendar-week">
                        {semana.into_iter().map(|celula| match celula {
                            Some(dia) => {
                                let do_dia = eventos_do_dia(&eventos.get(), dia);
                                let classe = if dia == hoje { "calendar-day today" } else { "calendar-day" };
                                view! {
                                    <div class=classe>
                                        <span class="day-number">{dia.day()}</span>
                                        {do_dia.into_iter().map(|evento| {
                                            let audiencia = evento.audiencia.clone();
                                            let cor = evento.audiencia.status.cor();
                                            let hora = evento.inicio.time().format("%H:%M").to_string();
                                            view! {
                                                <button
                                                    class="calendar-event"
                                                    style=format!("background-color: {}", cor)
                                                    on:click=move |_| set_selecionada.set(Some(audiencia.clone()))
                                                >
                                                    <span class="event-title">{evento.titulo.clone()}</span>
                                                    <span class="event-time">{hora}</span>
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                }.into_any()
                            }
                            None => view! { <div class="calendar-day vazio"></div> }.into_any(),
                        }).collect_view()}
                    </div>
                }).collect_view()}
            </div>

            <Show when=move || eventos.get().is_empty()>
                <p class="empty">"Não há audiências neste período."</p>
            </Show>

            <AudienciaModal audiencia=selecionada set_audiencia=set_selecionada/>
        </div>
    }
}
