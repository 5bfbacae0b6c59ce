//! Dashboard Page
//!
//! Stat cards over the three collections plus the "próximas audiências"
//! and "diligências em andamento" panels.

use chrono::Local;
use leptos::prelude::*;

use crate::components::StatCard;
use crate::format::{formatar_data, formatar_hora};
use crate::models::{StatusAudiencia, StatusDiligencia, StatusFaturamento};
use crate::stats;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let hoje = Local::now().date_naive();

    let hoje_contagem = Signal::derive(move || {
        stats::audiencias_no_dia(&store.audiencias().get(), hoje).to_string()
    });
    let agendadas = Signal::derive(move || {
        stats::contar_audiencias(&store.audiencias().get(), StatusAudiencia::Agendada).to_string()
    });
    let em_andamento = Signal::derive(move || {
        stats::contar_diligencias(&store.diligencias().get(), StatusDiligencia::EmAndamento)
            .to_string()
    });
    let pendentes = Signal::derive(move || {
        stats::contar_faturamentos(&store.faturamentos().get(), StatusFaturamento::Pendente)
            .to_string()
    });

    let proximas = move || stats::proximas_audiencias(&store.audiencias().get(), hoje);
    let andamento = move || stats::diligencias_em_andamento(&store.diligencias().get());

    view! {
        <div class="dashboard">
            <div class="stat-grid">
                <StatCard titulo="Audiências Hoje" valor=hoje_contagem icone="📅" cor="azul"/>
                <StatCard titulo="Audiências Agendadas" valor=agendadas icone="🕐" cor="verde"/>
                <StatCard titulo="Diligências em Andamento" valor=em_andamento icone="📋" cor="amarelo"/>
                <StatCard titulo="Faturamento Pendente" valor=pendentes icone="💰" cor="vermelho"/>
            </div>

            <div class="panel-grid">
                <section class="panel">
                    <div class="panel-header">
                        <h3>"Próximas Audiências"</h3>
                    </div>
                    <div class="panel-body">
                        {move || {
                            let proximas = proximas();
                            if proximas.is_empty() {
                                view! { <p class="empty">"Nenhuma audiência agendada"</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="panel-list">
                                        {proximas.into_iter().map(|a| view! {
                                            <div class="panel-row">
                                                <div>
                                                    <p class="row-title">{a.cliente.clone()}</p>
                                                    <p class="row-sub">{a.parte_adversa.clone()}</p>
                                                    <p class="row-muted">{format!("{} - {}", a.comarca, a.uf)}</p>
                                                </div>
                                                <div class="row-right">
                                                    <p class="row-title">{formatar_data(a.data)}</p>
                                                    <p class="row-sub">{formatar_hora(a.hora)}</p>
                                                </div>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                }
                                .into_any()
                            }
                        }}
                    </div>
                </section>

                <section class="panel">
                    <div class="panel-header">
                        <h3>"Diligências em Andamento"</h3>
                    </div>
                    <div class="panel-body">
                        {move || {
                            let andamento = andamento();
                            if andamento.is_empty() {
                                view! { <p class="empty">"Nenhuma diligência em andamento"</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="panel-list">
                                        {andamento.into_iter().map(|d| view! {
                                            <div class="panel-row">
                                                <div>
                                                    <p class="row-title">{d.solicitacao.clone()}</p>
                                                    <p class="row-sub">{d.parte_adversa.clone()}</p>
                                                    <p class="row-muted">{format!("{} - {}", d.comarca, d.uf)}</p>
                                                </div>
                                                <div class="row-right">
                                                    <p class="row-title">{formatar_data(d.prazo)}</p>
                                                    <span class=d.status.badge_class()>{d.status.label()}</span>
                                                </div>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                }
                                .into_any()
                            }
                        }}
                    </div>
                </section>
            </div>
        </div>
    }
}
