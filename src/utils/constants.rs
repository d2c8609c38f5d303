/// URL base del backend.
/// Configurada en tiempo de compilación:
/// - Por defecto: cadena vacía (mismo origen, rutas relativas /api/v1/...)
/// - Despliegues con API externa: via API_BASE_URL env var (.env)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "",
};
