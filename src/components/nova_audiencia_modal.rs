//! Nova Audiência Modal
//!
//! Creation form: required fields only (browser-level presence checks),
//! a synthesized case number and a creation stamp of today. Cancel resets
//! the fields without inserting.

use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use leptos::prelude::*;

use crate::components::sorteio;
use crate::models::{numero_processo, Audiencia, CamposNovaAudiencia};
use crate::store::{store_add_audiencia, use_app_store};

const TIPOS: [&str; 6] = [
    "JEC",
    "VARA CÍVEL",
    "VARA CRIMINAL",
    "VARA TRABALHISTA",
    "VARA DE FAMÍLIA",
    "JUIZADO ESPECIAL CÍVEL",
];

const PROFISSIONAIS: [&str; 3] = ["ADVOGADO", "CORRESPONDENTE", "ESTAGIÁRIO"];

#[component]
pub fn NovaAudienciaModal(
    aberto: ReadSignal<bool>,
    set_aberto: WriteSignal<bool>,
) -> impl IntoView {
    let store = use_app_store();

    let (titulo, set_titulo) = signal(String::new());
    let (tipo, set_tipo) = signal(String::new());
    let (comarca, set_comarca) = signal(String::new());
    let (uf, set_uf) = signal(String::new());
    let (profissional, set_profissional) = signal(String::new());
    let (local, set_local) = signal(String::new());
    let (data, set_data) = signal(String::new());
    let (hora, set_hora) = signal(String::new());
    let (descricao, set_descricao) = signal(String::new());

    let limpar = move || {
        set_titulo.set(String::new());
        set_tipo.set(String::new());
        set_comarca.set(String::new());
        set_uf.set(String::new());
        set_profissional.set(String::new());
        set_local.set(String::new());
        set_data.set(String::new());
        set_hora.set(String::new());
        set_descricao.set(String::new());
    };

    let cancelar = move |_| {
        limpar();
        set_aberto.set(false);
    };

    let submeter = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // The date/time inputs always emit these formats when non-empty
        let Ok(data_audiencia) = NaiveDate::parse_from_str(&data.get(), "%Y-%m-%d") else {
            return;
        };
        let Ok(hora_audiencia) = NaiveTime::parse_from_str(&hora.get(), "%H:%M") else {
            return;
        };

        let hoje = Local::now().date_naive();
        let campos = CamposNovaAudiencia {
            titulo: titulo.get(),
            tipo: tipo.get(),
            comarca: comarca.get(),
            uf: uf.get().to_uppercase(),
            profissional: profissional.get(),
            local: local.get(),
            data: data_audiencia,
            hora: hora_audiencia,
            descricao: descricao.get(),
        };
        let processo = numero_processo(
            sorteio(1_000_000, 9_999_999),
            sorteio(1000, 9999),
            hoje.year(),
        );
        let audiencia = Audiencia::nova(js_sys::Date::now() as u64, campos, processo, hoje);

        store_add_audiencia(&store, audiencia);
        limpar();
        set_aberto.set(false);
    };

    view! {
        <Show when=move || aberto.get()>
            <div class="modal-overlay">
                <div class="modal modal-wide">
                    <div class="modal-header">
                        <div>
                            <h3>"Criar demanda"</h3>
                            <p class="modal-sub">
                                "Descreva o que precisa e receba propostas de correspondentes da comarca."
                            </p>
                        </div>
                        <button class="modal-close" on:click=cancelar>"×"</button>
                    </div>

                    <form class="modal-body" on:submit=submeter>
                        <div class="form-grid">
                            <div class="form-field">
                                <label>"TÍTULO *"</label>
                                <input
                                    type="text"
                                    placeholder="Ex.: Audiência de conciliação — 2ª Vara Cível"
                                    required
                                    prop:value=move || titulo.get()
                                    on:input=move |ev| set_titulo.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-field">
                                <label>"TIPO *"</label>
                                <select
                                    required
                                    prop:value=move || tipo.get()
                                    on:change=move |ev| set_tipo.set(event_target_value(&ev))
                                >
                                    <option value="">"Selecione..."</option>
                                    {TIPOS.iter().map(|t| view! {
                                        <option value=*t>{*t}</option>
                                    }).collect_view()}
                                </select>
                            </div>

                            <div class="form-field">
                                <label>"COMARCA (CIDADE) *"</label>
                                <input
                                    type="text"
                                    placeholder="Digite ao menos 3 letras"
                                    required
                                    prop:value=move || comarca.get()
                                    on:input=move |ev| set_comarca.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-field">
                                <label>"UF *"</label>
                                <input
                                    type="text"
                                    placeholder="Ex.: AM"
                                    maxlength="2"
                                    required
                                    prop:value=move || uf.get()
                                    on:input=move |ev| set_uf.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-field">
                                <label>"PROFISSIONAL *"</label>
                                <select
                                    required
                                    prop:value=move || profissional.get()
                                    on:change=move |ev| set_profissional.set(event_target_value(&ev))
                                >
                                    <option value="">"Selecione..."</option>
                                    {PROFISSIONAIS.iter().map(|p| view! {
                                        <option value=*p>{*p}</option>
                                    }).collect_view()}
                                </select>
                            </div>

                            <div class="form-field">
                                <label>"LOCAL *"</label>
                                <input
                                    type="text"
                                    placeholder="Ex.: Fórum Central, sala 5"
                                    required
                                    prop:value=move || local.get()
                                    on:input=move |ev| set_local.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-field">
                                <label>"DATA *"</label>
                                <input
                                    type="date"
                                    required
                                    prop:value=move || data.get()
                                    on:input=move |ev| set_data.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-field">
                                <label>"HORA *"</label>
                                <input
                                    type="time"
                                    required
                                    prop:value=move || hora.get()
                                    on:input=move |ev| set_hora.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="form-field wide">
                            <label>"DESCRIÇÃO *"</label>
                            <textarea
                                placeholder="Detalhe a demanda: datas/horários, documentos, etapas, observações, etc."
                                rows="4"
                                required
                                prop:value=move || descricao.get()
                                on:input=move |ev| set_descricao.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="form-actions">
                            <button type="button" class="secondary-btn" on:click=cancelar>
                                "Cancelar"
                            </button>
                            <button type="submit" class="primary-btn">
                                "Publicar demanda"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
