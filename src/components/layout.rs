//! Layout Component
//!
//! Sidebar navigation plus the page header; the page body comes in as
//! children.

use leptos::prelude::*;

use crate::app::Pagina;

const MENU: [(Pagina, &str, &str); 4] = [
    (Pagina::Dashboard, "Dashboard", "🏠"),
    (Pagina::Audiencias, "Audiências", "📅"),
    (Pagina::Diligencias, "Diligências", "📋"),
    (Pagina::Faturamento, "Faturamento", "💰"),
];

#[component]
pub fn Layout(
    pagina: ReadSignal<Pagina>,
    set_pagina: WriteSignal<Pagina>,
    children: Children,
) -> impl IntoView {
    let (sidebar_aberta, set_sidebar_aberta) = signal(false);

    view! {
        <div class="app-layout">
            <aside class=move || if sidebar_aberta.get() { "sidebar open" } else { "sidebar" }>
                <div class="sidebar-header">
                    <h1>"SNC Audiências"</h1>
                    <button class="sidebar-close" on:click=move |_| set_sidebar_aberta.set(false)>
                        "✕"
                    </button>
                </div>
                <nav class="sidebar-nav">
                    {MENU.iter().map(|(destino, label, icone)| {
                        let destino = *destino;
                        let ativo = move || pagina.get() == destino;
                        view! {
                            <button
                                class=move || if ativo() { "nav-item active" } else { "nav-item" }
                                on:click=move |_| {
                                    set_pagina.set(destino);
                                    set_sidebar_aberta.set(false);
                                }
                            >
                                <span class="nav-icon">{*icone}</span>
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </aside>

            <div class="main-area">
                <header class="topbar">
                    <button class="menu-btn" on:click=move |_| set_sidebar_aberta.set(true)>
                        "☰"
                    </button>
                    <h2>{move || pagina.get().titulo()}</h2>
                </header>
                <main class="page-content">{children()}</main>
            </div>
        </div>
    }
}
