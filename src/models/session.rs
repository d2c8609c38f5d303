use serde::{Deserialize, Serialize};

/// Roles de usuario disponibles. ANONYMOUS si no hay usuario logueado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Anonymous,
    Worker,
    Warehouse,
}

/// Respuesta del backend al completar un login (el rol del usuario).
#[derive(Debug, Clone, Deserialize)]
pub struct RoleDto {
    pub role: Role,
}
