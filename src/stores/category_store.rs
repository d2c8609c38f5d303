// ============================================================================
// CATEGORY STORE - Última lista de categorías obtenida del servidor
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::Category;
use crate::services::ApiClient;
use crate::state::{ReactiveValue, RequestSeq};

/// Store de categorías. La lista se muestra en el menú de la aplicación y se
/// reemplaza entera con cada carga (sin merges ni diffs).
#[derive(Clone)]
pub struct CategoryStore {
    api: ApiClient,
    categories: ReactiveValue<Vec<Category>>,
    seq: RequestSeq,
}

impl CategoryStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            categories: ReactiveValue::new(Vec::new()),
            seq: RequestSeq::new(),
        }
    }

    /// Última lista de categorías conocida. Con replay: un suscriptor tardío
    /// recibe la lista actual al suscribirse.
    pub fn categories(&self) -> &ReactiveValue<Vec<Category>> {
        &self.categories
    }

    /// Carga la lista de categorías del servidor. Fire-and-forget: si la
    /// petición falla, la lista anterior sigue visible y no se emite nada.
    pub fn load(&self) {
        let token = self.seq.begin();
        let api = self.api.clone();
        let store = self.clone();
        spawn_local(async move {
            store.apply(token, api.list_categories().await);
        });
    }

    fn apply(&self, token: u64, result: Result<Vec<Category>, String>) {
        if !self.seq.is_current(token) {
            log::debug!("📋 Respuesta de categorías superada por una petición posterior, descartada");
            return;
        }
        match result {
            Ok(list) => self.categories.set(list),
            Err(e) => {
                log::warn!("📋 Error cargando categorías (se conserva la lista anterior): {}", e);
            }
        }
    }
}
