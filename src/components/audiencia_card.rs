//! Audiência Card Component
//!
//! Status-colored card for the hearings grid, emitting view/edit/delete
//! intents through callbacks.

use leptos::prelude::*;

use crate::format::{formatar_data_hora, ou_nao_informado};
use crate::models::Audiencia;

#[component]
pub fn AudienciaCard(
    audiencia: Audiencia,
    #[prop(into)] on_view: Callback<Audiencia>,
    #[prop(into)] on_edit: Callback<Audiencia>,
    #[prop(into)] on_delete: Callback<Audiencia>,
) -> impl IntoView {
    let para_ver = audiencia.clone();
    let para_editar = audiencia.clone();
    let para_excluir = audiencia.clone();

    let borda = format!("border-left-color: {}", audiencia.status.cor());
    let local = ou_nao_informado(audiencia.local.as_deref());

    view! {
        <div class="audiencia-card" style=borda>
            <div class="card-top">
                <h3 class="card-title">{audiencia.cliente.clone()}</h3>
                <span class=audiencia.status.badge_class()>{audiencia.status.label()}</span>
            </div>

            <div class="card-fields">
                <p><span class="card-icon">"🕐"</span>{formatar_data_hora(audiencia.data, audiencia.hora)}</p>
                <p><span class="card-icon">"📄"</span><span class="mono">{audiencia.processo.clone()}</span></p>
                <p><span class="card-icon">"👤"</span>{audiencia.parte_adversa.clone()}</p>
                <p><span class="card-icon">"🏛️"</span>{audiencia.orgao.clone()}</p>
                <p><span class="card-icon">"📍"</span>{format!("{} - {}", audiencia.comarca, audiencia.uf)}</p>
                <p class="card-local">{local}</p>
            </div>

            <div class="card-actions">
                <button class="card-btn" title="Visualizar" on:click=move |_| on_view.run(para_ver.clone())>
                    "👁"
                </button>
                <button class="card-btn" title="Editar" on:click=move |_| on_edit.run(para_editar.clone())>
                    "✏️"
                </button>
                <button class="card-btn danger" title="Excluir" on:click=move |_| on_delete.run(para_excluir.clone())>
                    "🗑"
                </button>
            </div>
        </div>
    }
}
