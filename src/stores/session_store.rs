// ============================================================================
// SESSION STORE - Sesión y autorización del usuario actual
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::Role;
use crate::services::ApiClient;
use crate::state::ReactiveValue;

/// Mensaje fijo mostrado al usuario cuando el login falla, sea cual sea la
/// causa (credenciales malas, red caída, respuesta ilegible).
pub const LOGIN_ERROR_MESSAGE: &str = "invalid username or password";

/// Store de sesión. Mantiene el rol actual del usuario logueado (ANONYMOUS
/// si no hay ninguno), su nombre y el último error de login. Una instancia
/// por proceso; no se rehidrata tras recargar la página.
#[derive(Clone)]
pub struct SessionStore {
    api: ApiClient,
    role: ReactiveValue<Role>,
    username: ReactiveValue<Option<String>>,
    last_error: ReactiveValue<Option<String>>,
}

impl SessionStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            role: ReactiveValue::new(Role::Anonymous),
            username: ReactiveValue::new(None),
            last_error: ReactiveValue::new(None),
        }
    }

    /// Rol actual del usuario logueado.
    pub fn role(&self) -> &ReactiveValue<Role> {
        &self.role
    }

    /// Nombre del usuario actualmente logueado (None si no hay usuario).
    pub fn username(&self) -> &ReactiveValue<Option<String>> {
        &self.username
    }

    /// Último error generado en el proceso de login (None si no hubo error).
    pub fn last_error(&self) -> &ReactiveValue<Option<String>> {
        &self.last_error
    }

    /// Realiza el login en el backend. Fire-and-forget: el resultado se
    /// observa por los streams de rol/usuario/error, nunca como fallo
    /// propagado al llamante.
    pub fn login(&self, username: String, password: String) {
        let api = self.api.clone();
        let store = self.clone();
        spawn_local(async move {
            match api.login(&username, &password).await {
                Ok(role) => store.apply_login_success(&username, role),
                Err(e) => {
                    log::warn!("🔐 Login rechazado: {}", e);
                    store.apply_login_failure();
                }
            }
        });
    }

    /// Hace logout en el servidor y en el cliente. La anonimización local es
    /// incondicional: no depende de que la petición al servidor llegue a
    /// completarse.
    pub fn logout(&self) {
        let api = self.api.clone();
        spawn_local(async move {
            if let Err(e) = api.logout().await {
                log::warn!("🔐 Logout en el servidor falló: {}", e);
            }
        });
        self.apply_logout();
    }

    pub(crate) fn apply_login_success(&self, username: &str, role: Role) {
        self.role.set(role);
        self.last_error.set(None);
        // El nombre mostrado es el que se envió, no un eco del servidor.
        self.username.set(Some(username.to_string()));
        log::info!("🔐 Login correcto: {} ({:?})", username, role);
    }

    pub(crate) fn apply_login_failure(&self) {
        self.role.set(Role::Anonymous);
        self.last_error.set(Some(LOGIN_ERROR_MESSAGE.to_string()));
        self.username.set(None);
    }

    fn apply_logout(&self) {
        // last_error se conserva tal cual.
        self.role.set(Role::Anonymous);
        self.username.set(None);
        log::info!("👋 Sesión anonimizada");
    }
}
