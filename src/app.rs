//! Application Root
//!
//! Page routing over the four console pages; owns the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Audiencias, Dashboard, Diligencias, FaturamentoPage, Layout};
use crate::store::AppState;

/// Console pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pagina {
    Dashboard,
    Audiencias,
    Diligencias,
    Faturamento,
}

impl Pagina {
    pub fn titulo(&self) -> &'static str {
        match self {
            Pagina::Dashboard => "Dashboard",
            Pagina::Audiencias => "Audiências",
            Pagina::Diligencias => "Diligências",
            Pagina::Faturamento => "Faturamento",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // The store is the single owner of the record collections
    provide_context(Store::new(AppState::com_dados_exemplo()));

    let (pagina, set_pagina) = signal(Pagina::Dashboard);

    view! {
        <div class="env-banner">
            <span>"Sistema de Audiências — Ambiente de Desenvolvimento"</span>
            <span class="env-build">"build local"</span>
        </div>

        <Layout pagina=pagina set_pagina=set_pagina>
            {move || match pagina.get() {
                Pagina::Dashboard => view! { <Dashboard/> }.into_any(),
                Pagina::Audiencias => view! { <Audiencias/> }.into_any(),
                Pagina::Diligencias => view! { <Diligencias/> }.into_any(),
                Pagina::Faturamento => view! { <FaturamentoPage/> }.into_any(),
            }}
        </Layout>
    }
}
