//! Stat Card Component
//!
//! Reusable dashboard/billing statistic card.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] titulo: String,
    #[prop(into)] valor: Signal<String>,
    #[prop(into)] icone: String,
    /// CSS class controlling the icon disc color
    #[prop(into)] cor: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class=format!("stat-icon {}", cor)>{icone}</div>
            <div class="stat-body">
                <p class="stat-title">{titulo}</p>
                <p class="stat-value">{move || valor.get()}</p>
            </div>
        </div>
    }
}
