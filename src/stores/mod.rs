// ============================================================================
// STORES - Estado compartido y observable de la aplicación
// ============================================================================
// Cada store es la única vía de escritura de sus celdas reactivas; las
// páginas solo se suscriben y disparan operaciones de carga/mutación.
// ============================================================================

pub mod app_stores;
pub mod category_store;
pub mod garment_store;
pub mod session_store;
pub mod stock_mutator;
pub mod variant_store;

pub use app_stores::AppStores;
pub use category_store::CategoryStore;
pub use garment_store::GarmentStore;
pub use session_store::SessionStore;
pub use stock_mutator::StockMutator;
pub use variant_store::VariantStore;
