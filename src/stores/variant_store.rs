// ============================================================================
// VARIANT STORE - Prendas (variantes de stock) de la ropa consultada
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::Variant;
use crate::services::ApiClient;
use crate::state::{ReactiveValue, RequestSeq};

/// Store de prendas. Contiene la última lista de prendas obtenida del
/// servidor, la que se muestra en la página de detalles de una ropa.
///
/// El mutador de stock escribe por el mismo camino con token (`begin_write`
/// + `apply`), de modo que una respuesta de mutación supera a cualquier
/// carga que siga en vuelo.
#[derive(Clone)]
pub struct VariantStore {
    api: ApiClient,
    variants: ReactiveValue<Vec<Variant>>,
    seq: RequestSeq,
}

impl VariantStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            variants: ReactiveValue::new(Vec::new()),
            seq: RequestSeq::new(),
        }
    }

    /// Última lista de prendas conocida. Con replay.
    pub fn variants(&self) -> &ReactiveValue<Vec<Variant>> {
        &self.variants
    }

    /// Carga las prendas de la ropa indicada. Fire-and-forget; en caso de
    /// fallo la lista anterior sigue visible.
    pub fn load_by_garment(&self, garment_id: u32) {
        let token = self.begin_write();
        let api = self.api.clone();
        let store = self.clone();
        spawn_local(async move {
            store.apply(token, api.list_variants(garment_id).await);
        });
    }

    /// Token de escritura compartido por cargas y mutaciones de stock.
    pub(crate) fn begin_write(&self) -> u64 {
        self.seq.begin()
    }

    pub(crate) fn apply(&self, token: u64, result: Result<Vec<Variant>, String>) {
        if !self.seq.is_current(token) {
            log::debug!("📦 Lista de prendas superada por una escritura posterior, descartada");
            return;
        }
        match result {
            Ok(list) => self.variants.set(list),
            Err(e) => {
                log::warn!("📦 Error actualizando la lista de prendas (se conserva la anterior): {}", e);
            }
        }
    }
}
