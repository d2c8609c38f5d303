use serde::{Deserialize, Serialize};

/// Categoría de ropa tal y como la devuelve el servicio web. Se corresponde
/// con el CategoryDto del backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}
