// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::models::{Category, Garment, Role, RoleDto, StockDirection, Variant};
use crate::utils::constants::API_BASE_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: format!("{}/api/v1", base_url.into()),
        }
    }

    /// Listar categorías
    pub async fn list_categories(&self) -> Result<Vec<Category>, String> {
        let url = format!("{}/category", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<Category>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Listar la ropa de una categoría
    pub async fn list_garments(&self, category_id: u32) -> Result<Vec<Garment>, String> {
        let url = format!("{}/category/{}/garment", self.base_url, category_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<Garment>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Obtener una ropa por id (para la página de detalles)
    pub async fn get_garment(&self, garment_id: u32) -> Result<Garment, String> {
        let url = format!("{}/garment/{}", self.base_url, garment_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Garment>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Listar las prendas (variantes) de una ropa
    pub async fn list_variants(&self, garment_id: u32) -> Result<Vec<Variant>, String> {
        let url = format!("{}/garment/{}/variant", self.base_url, garment_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<Variant>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Ajustar el stock de una prenda. El backend aplica el ajuste (y el
    /// clamping que corresponda) y devuelve la lista COMPLETA de prendas de
    /// la ropa ya actualizada.
    pub async fn adjust_stock(
        &self,
        garment_id: u32,
        variant_id: u32,
        delta: u32,
        direction: StockDirection,
    ) -> Result<Vec<Variant>, String> {
        let url = format!(
            "{}/garment/{}/variant/{}/{}",
            self.base_url,
            garment_id,
            variant_id,
            stock_endpoint(direction)
        );
        let response = Request::patch(&url)
            .json(&StockDeltaDto { delta })
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<Variant>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Login contra el backend con credenciales form-encoded. Devuelve el
    /// rol declarado por el servidor.
    pub async fn login(&self, username: &str, password: &str) -> Result<Role, String> {
        let url = format!("{}/login", self.base_url);

        let body = login_body(username, password);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let dto = response
            .json::<RoleDto>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(dto.role)
    }

    /// Logout en el servidor. El cuerpo de la respuesta se ignora.
    pub async fn logout(&self) -> Result<(), String> {
        let url = format!("{}/logout", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn login_body(username: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    )
}

fn stock_endpoint(direction: StockDirection) -> &'static str {
    match direction {
        StockDirection::Increment => "incstock",
        StockDirection::Decrement => "decstock",
    }
}

#[derive(serde::Serialize)]
struct StockDeltaDto {
    delta: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_endpoint_follows_direction() {
        assert_eq!(stock_endpoint(StockDirection::Increment), "incstock");
        assert_eq!(stock_endpoint(StockDirection::Decrement), "decstock");
    }

    #[test]
    fn login_body_is_form_encoded() {
        assert_eq!(login_body("alice", "s3cret"), "username=alice&password=s3cret");
        // Caracteres reservados escapados
        assert_eq!(
            login_body("ana maría", "a&b=c"),
            "username=ana%20mar%C3%ADa&password=a%26b%3Dc"
        );
    }

    #[test]
    fn delta_payload_shape() {
        let json = serde_json::to_string(&StockDeltaDto { delta: 1 }).unwrap();
        assert_eq!(json, r#"{"delta":1}"#);
    }
}
