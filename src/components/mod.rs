//! UI Components
//!
//! Leptos components for the console pages and modals.

mod audiencia_card;
mod audiencia_modal;
mod audiencias;
mod calendar_view;
mod dashboard;
mod diligencias;
mod faturamento;
mod importar_lote_modal;
mod layout;
mod nova_audiencia_modal;
mod stat_card;

pub use audiencia_card::AudienciaCard;
pub use audiencia_modal::AudienciaModal;
pub use audiencias::Audiencias;
pub use calendar_view::CalendarView;
pub use dashboard::Dashboard;
pub use diligencias::Diligencias;
pub use faturamento::FaturamentoPage;
pub use importar_lote_modal::ImportarLoteModal;
pub use layout::Layout;
pub use nova_audiencia_modal::NovaAudienciaModal;
pub use stat_card::StatCard;

/// Random integer in `min..=max`, drawn from `Math.random`
pub(crate) fn sorteio(min: u32, max: u32) -> u32 {
    min + (js_sys::Math::random() * (max - min + 1) as f64) as u32
}
