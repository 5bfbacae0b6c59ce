//! Audiência Detail Modal
//!
//! Shared by the cards grid and the calendar view.

use leptos::prelude::*;

use crate::format::{formatar_data_hora, ou_nao_informado};
use crate::models::Audiencia;

#[component]
pub fn AudienciaModal(
    audiencia: ReadSignal<Option<Audiencia>>,
    set_audiencia: WriteSignal<Option<Audiencia>>,
) -> impl IntoView {
    view! {
        {move || audiencia.get().map(|a| {
            let local = ou_nao_informado(a.local.as_deref());
            let observacoes = Some(a.observacoes.clone()).filter(|o| !o.trim().is_empty());
            view! {
                <div class="modal-overlay" on:click=move |_| set_audiencia.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <div>
                                <h3>"Detalhes da Audiência"</h3>
                                <p class="modal-sub">"Informações completas do processo"</p>
                            </div>
                            <button class="modal-close" on:click=move |_| set_audiencia.set(None)>
                                "×"
                            </button>
                        </div>

                        <div class="modal-body">
                            <div class="detail-grid">
                                <div class="detail-field">
                                    <label>"Data e Hora"</label>
                                    <p>{formatar_data_hora(a.data, a.hora)}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Status"</label>
                                    <span class=a.status.badge_class()>{a.status.label()}</span>
                                </div>
                                <div class="detail-field">
                                    <label>"Cliente"</label>
                                    <p>{a.cliente.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Parte Adversa"</label>
                                    <p>{a.parte_adversa.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Processo"</label>
                                    <p class="mono">{a.processo.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Órgão"</label>
                                    <p>{a.orgao.clone()}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Comarca"</label>
                                    <p>{format!("{} - {}", a.comarca, a.uf)}</p>
                                </div>
                                <div class="detail-field">
                                    <label>"Local"</label>
                                    <p>{local}</p>
                                </div>
                            </div>

                            {observacoes.map(|obs| view! {
                                <div class="detail-field wide">
                                    <label>"Observações"</label>
                                    <p>{obs}</p>
                                </div>
                            })}
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
