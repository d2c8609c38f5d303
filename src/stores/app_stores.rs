// ============================================================================
// APP STORES - Contenedor de los stores compartidos de la aplicación
// ============================================================================

use crate::services::ApiClient;
use crate::stores::{CategoryStore, GarmentStore, SessionStore, StockMutator, VariantStore};

/// Contenedor explícito de los stores de la aplicación. Se construye una
/// sola vez por proceso y se pasa por referencia a quien lo necesite, en
/// lugar de estado ambiental por módulo. Clonar el contenedor comparte los
/// mismos stores.
#[derive(Clone)]
pub struct AppStores {
    pub session: SessionStore,
    pub categories: CategoryStore,
    pub garments: GarmentStore,
    pub variants: VariantStore,
    pub stock: StockMutator,
}

impl AppStores {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }

    pub fn with_api(api: ApiClient) -> Self {
        let variants = VariantStore::new(api.clone());
        Self {
            session: SessionStore::new(api.clone()),
            categories: CategoryStore::new(api.clone()),
            garments: GarmentStore::new(api.clone()),
            stock: StockMutator::new(api, variants.clone()),
            variants,
        }
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::new()
    }
}
