use serde::{Deserialize, Serialize};

/// Prenda (unidad de stock de una ropa) tal y como la devuelve el servicio
/// web: combinación color/talla con stock y ubicación física en el almacén.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: u32,
    pub color: String,
    pub size: String,
    /// El backend es quien garantiza stock >= 0; el cliente no lo comprueba.
    pub stock: i64,
    pub aisle: u32,
    pub shelf: u32,
}

/// Sentido de un ajuste de stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    Increment,
    Decrement,
}
