// ============================================================================
// STOCK MUTATOR - Incremento/decremento del stock de una prenda
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::StockDirection;
use crate::services::ApiClient;
use crate::stores::VariantStore;

/// Mutador de stock. Envía el ajuste al backend y vuelca la respuesta (la
/// lista COMPLETA de prendas de la ropa, ya recalculada por el servidor)
/// en el VariantStore. El cliente no hace aritmética de stock: el valor
/// autoritativo es siempre el del servidor.
#[derive(Clone)]
pub struct StockMutator {
    api: ApiClient,
    variants: VariantStore,
}

impl StockMutator {
    pub fn new(api: ApiClient, variants: VariantStore) -> Self {
        Self { api, variants }
    }

    /// Ajusta el stock de una prenda. `delta` admite cualquier magnitud
    /// positiva aunque las vistas actuales siempre pasen 1. Fire-and-forget:
    /// si la petición falla, la lista de prendas queda como estaba.
    pub fn adjust(&self, garment_id: u32, variant_id: u32, delta: u32, direction: StockDirection) {
        let token = self.variants.begin_write();
        let api = self.api.clone();
        let variants = self.variants.clone();
        spawn_local(async move {
            let result = api.adjust_stock(garment_id, variant_id, delta, direction).await;
            variants.apply(token, result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variant;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn variant(id: u32, stock: i64) -> Variant {
        Variant {
            id,
            color: "azul".to_string(),
            size: "L".to_string(),
            stock,
            aisle: 1,
            shelf: 3,
        }
    }

    #[test]
    fn a_mutation_response_replaces_the_variant_list_for_subscribers() {
        let api = ApiClient::with_base_url("http://localhost:9");
        let variants = VariantStore::new(api.clone());
        let _mutator = StockMutator::new(api, variants.clone());

        // Estado previo a la mutación.
        let token = variants.begin_write();
        variants.apply(token, Ok(vec![variant(3, 4)]));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        variants
            .variants()
            .subscribe(move |l: &Vec<Variant>| sink.borrow_mut().push(l.clone()));

        // La respuesta del ajuste llega con la lista completa recalculada.
        let token = variants.begin_write();
        variants.apply(token, Ok(vec![variant(3, 5)]));

        assert_eq!(
            *seen.borrow(),
            vec![vec![variant(3, 4)], vec![variant(3, 5)]]
        );
    }

    #[test]
    fn a_failed_mutation_leaves_the_list_at_its_pre_mutation_value() {
        let api = ApiClient::with_base_url("http://localhost:9");
        let variants = VariantStore::new(api.clone());
        let _mutator = StockMutator::new(api, variants.clone());

        let token = variants.begin_write();
        variants.apply(token, Ok(vec![variant(3, 4)]));

        let token = variants.begin_write();
        variants.apply(token, Err("HTTP 409: Conflict".to_string()));

        assert_eq!(variants.variants().get(), vec![variant(3, 4)]);
    }

    #[test]
    fn a_mutation_supersedes_an_in_flight_load() {
        let api = ApiClient::with_base_url("http://localhost:9");
        let variants = VariantStore::new(api.clone());
        let _mutator = StockMutator::new(api, variants.clone());

        // Una carga en vuelo y, después, una mutación.
        let load_token = variants.begin_write();
        let mutation_token = variants.begin_write();

        variants.apply(mutation_token, Ok(vec![variant(3, 5)]));
        // La respuesta de la carga llega tarde y se descarta.
        variants.apply(load_token, Ok(vec![variant(3, 4)]));

        assert_eq!(variants.variants().get(), vec![variant(3, 5)]);
    }
}
