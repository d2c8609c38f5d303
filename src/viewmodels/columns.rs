// ============================================================================
// COLUMNS VIEWMODEL - Columnas/acciones visibles según el rol
// ============================================================================

use crate::models::Role;
use crate::state::ReactiveValue;
use crate::stores::SessionStore;

/// Identificador de columna o acción de la tabla de prendas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnId {
    Color,
    Size,
    Stock,
    Aisle,
    Shelf,
    /// Acción de compra (repone stock).
    Buy,
    /// Acción de venta (descuenta stock).
    Sell,
}

/// Derivación pura: columnas visibles para cada rol, en orden de render.
/// Cualquier rol no reconocido ve solo las columnas de lectura básicas.
pub fn visible_columns(role: Role) -> &'static [ColumnId] {
    use ColumnId::*;
    match role {
        Role::Warehouse => &[Color, Size, Stock, Aisle, Shelf, Buy, Sell],
        Role::Worker => &[Color, Size, Stock, Aisle, Shelf, Sell],
        Role::Anonymous => &[Color, Size, Stock],
    }
}

/// ViewModel que mantiene las columnas visibles sincronizadas con el rol de
/// la sesión: se recalcula con cada emisión del rol, sin volver a cargar
/// datos. Un cambio de rol sobre una página de detalles ya renderizada
/// cambia al instante las acciones ofrecidas.
#[derive(Clone)]
pub struct ColumnsViewModel {
    columns: ReactiveValue<&'static [ColumnId]>,
}

impl ColumnsViewModel {
    pub fn new(session: &SessionStore) -> Self {
        let columns = ReactiveValue::new(visible_columns(Role::Anonymous));
        let cell = columns.clone();
        // El subscribe notifica inmediatamente con el rol actual, así que la
        // celda queda derivada desde el primer momento.
        session
            .role()
            .subscribe(move |role| cell.set(visible_columns(*role)));
        Self { columns }
    }

    /// Columnas visibles actuales. Con replay.
    pub fn columns(&self) -> &ReactiveValue<&'static [ColumnId]> {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ApiClient;
    use ColumnId::*;

    #[test]
    fn warehouse_sees_every_column_and_both_actions() {
        assert_eq!(
            visible_columns(Role::Warehouse),
            &[Color, Size, Stock, Aisle, Shelf, Buy, Sell]
        );
    }

    #[test]
    fn worker_sees_everything_except_the_buy_action() {
        assert_eq!(
            visible_columns(Role::Worker),
            &[Color, Size, Stock, Aisle, Shelf, Sell]
        );
    }

    #[test]
    fn anonymous_sees_read_only_columns() {
        assert_eq!(visible_columns(Role::Anonymous), &[Color, Size, Stock]);
    }

    #[test]
    fn columns_follow_role_changes_without_reloading_data() {
        let session = SessionStore::new(ApiClient::with_base_url("http://localhost:9"));
        let viewmodel = ColumnsViewModel::new(&session);

        assert_eq!(viewmodel.columns().get(), visible_columns(Role::Anonymous));

        session.apply_login_success("alice", Role::Warehouse);
        assert_eq!(viewmodel.columns().get(), visible_columns(Role::Warehouse));

        session.apply_login_failure();
        assert_eq!(viewmodel.columns().get(), visible_columns(Role::Anonymous));
    }
}
