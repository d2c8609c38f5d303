use serde::{Deserialize, Serialize};

/// Ropa tal y como la devuelve el servicio web. Se corresponde con el
/// GarmentDto del backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    pub id: u32,
    pub name: String,
    #[serde(rename = "imageRef")]
    pub image_ref: String,
    pub supplier: String,
    pub description: String,
}
