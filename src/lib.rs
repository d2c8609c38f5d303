// ============================================================================
// CLOTHING INVENTORY APP - NÚCLEO FRONTEND (RUST PURO)
// ============================================================================
// - Models: estructuras compartidas con el backend
// - Services: SOLO comunicación API
// - State: contenedores reactivos con Rc<RefCell> + notificaciones
// - Stores: estado compartido y observable (sesión, categorías, ropa, prendas)
// - ViewModels: derivaciones puras para la UI (columnas por rol)
// Las páginas (routing, plantillas, componentes de presentación) viven fuera
// de este crate: se suscriben a los stores y disparan sus operaciones.
// ============================================================================

pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::stores::AppStores;

// Instancia única de stores por proceso. Se construye explícitamente en el
// arranque; ningún módulo mantiene estado ambiental propio.
thread_local! {
    static STORES: RefCell<Option<AppStores>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Clothing Inventory App - núcleo de stores inicializado");

    STORES.with(|cell| {
        *cell.borrow_mut() = Some(AppStores::new());
    });

    Ok(())
}

/// Acceso a los stores compartidos. Devuelve None si el núcleo aún no se ha
/// inicializado (antes de `start`).
pub fn with_stores<R>(f: impl FnOnce(&AppStores) -> R) -> Option<R> {
    STORES.with(|cell| cell.borrow().as_ref().map(f))
}
