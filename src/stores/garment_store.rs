// ============================================================================
// GARMENT STORE - Listado de ropa por categoría + detalle de una ropa
// ============================================================================
// Dos streams con semántica distinta, a propósito:
// - El listado es una celda con replay: las vistas de lista toleran ver la
//   lista de la navegación anterior hasta que llegue la nueva.
// - El detalle es un broadcast one-shot por navegación: quien no esté
//   suscrito cuando llega la respuesta no lo recibe.
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::Garment;
use crate::services::ApiClient;
use crate::state::{Broadcast, ReactiveValue, RequestSeq};

#[derive(Clone)]
pub struct GarmentStore {
    api: ApiClient,
    garments: ReactiveValue<Vec<Garment>>,
    current: Broadcast<Garment>,
    list_seq: RequestSeq,
    detail_seq: RequestSeq,
}

impl GarmentStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            garments: ReactiveValue::new(Vec::new()),
            current: Broadcast::new(),
            list_seq: RequestSeq::new(),
            detail_seq: RequestSeq::new(),
        }
    }

    /// Última lista de ropa cargada (de la última categoría consultada).
    pub fn garments(&self) -> &ReactiveValue<Vec<Garment>> {
        &self.garments
    }

    /// Detalle de ropa: una emisión por cada carga por id, sin replay.
    pub fn current(&self) -> &Broadcast<Garment> {
        &self.current
    }

    /// Carga la lista de ropa de la categoría indicada.
    pub fn load_by_category(&self, category_id: u32) {
        let token = self.list_seq.begin();
        let api = self.api.clone();
        let store = self.clone();
        spawn_local(async move {
            store.apply_list(token, api.list_garments(category_id).await);
        });
    }

    /// Carga una ropa por id y la emite a los suscriptores del detalle.
    pub fn load_by_id(&self, garment_id: u32) {
        let token = self.detail_seq.begin();
        let api = self.api.clone();
        let store = self.clone();
        spawn_local(async move {
            store.apply_current(token, api.get_garment(garment_id).await);
        });
    }

    fn apply_list(&self, token: u64, result: Result<Vec<Garment>, String>) {
        if !self.list_seq.is_current(token) {
            log::debug!("👕 Lista de ropa superada por una petición posterior, descartada");
            return;
        }
        match result {
            Ok(list) => self.garments.set(list),
            Err(e) => {
                log::warn!("👕 Error cargando la lista de ropa (se conserva la anterior): {}", e);
            }
        }
    }

    fn apply_current(&self, token: u64, result: Result<Garment, String>) {
        if !self.detail_seq.is_current(token) {
            log::debug!("👕 Detalle de ropa superado por una navegación posterior, descartado");
            return;
        }
        match result {
            Ok(garment) => self.current.emit(&garment),
            Err(e) => {
                // Sin emisión: el detalle es one-shot y no hay canal de error.
                log::warn!("👕 Error cargando el detalle de ropa: {}", e);
            }
        }
    }
}
