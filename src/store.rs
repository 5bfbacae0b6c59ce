//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the single owner of the three record collections; components hold only
//! derived views. No process-wide singleton: the store is created in App
//! and passed down through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::data;
use crate::models::{Audiencia, Diligencia, Faturamento};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All hearings
    pub audiencias: Vec<Audiencia>,
    /// All field tasks
    pub diligencias: Vec<Diligencia>,
    /// All billing entries
    pub faturamentos: Vec<Faturamento>,
}

impl AppState {
    /// Session state seeded with the sample collections
    pub fn com_dados_exemplo() -> Self {
        Self {
            audiencias: data::audiencias_exemplo(),
            diligencias: data::diligencias_exemplo(),
            faturamentos: data::faturamentos_exemplo(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a hearing to the store (creation form)
pub fn store_add_audiencia(store: &AppStore, audiencia: Audiencia) {
    store.audiencias().write().push(audiencia);
}

/// Add a batch of hearings to the store (simulated import)
pub fn store_add_audiencias(store: &AppStore, novas: Vec<Audiencia>) {
    store.audiencias().write().extend(novas);
}
