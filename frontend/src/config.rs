use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Runtime configuration shipped next to the bundle. Either of the window
/// globals (`window.__STOREADMIN_ENV`, `window.__STOREADMIN_CONFIG`) takes
/// precedence over `./config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub upload_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static UPLOAD_BASE_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";
const DEFAULT_UPLOAD_BASE_URL: &str = "http://localhost:4000/uploads";

#[cfg(target_arch = "wasm32")]
fn read_global(container: &str, first_key: &str, second_key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(container)).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &wasm_bindgen::JsValue::from_str(first_key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &wasm_bindgen::JsValue::from_str(second_key)).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(target_arch = "wasm32")]
fn api_url_from_globals() -> Option<String> {
    read_global("__STOREADMIN_ENV", "API_BASE_URL", "api_base_url")
        .or_else(|| read_global("__STOREADMIN_CONFIG", "api_base_url", "API_BASE_URL"))
}

#[cfg(target_arch = "wasm32")]
fn upload_url_from_globals() -> Option<String> {
    read_global("__STOREADMIN_ENV", "UPLOAD_BASE_URL", "upload_base_url")
        .or_else(|| read_global("__STOREADMIN_CONFIG", "upload_base_url", "UPLOAD_BASE_URL"))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn cache_url(slot: &OnceLock<String>, value: &str) -> String {
    let value = value.to_string();
    let _ = slot.set(value.clone());
    value
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(existing) = api_url_from_globals() {
            return cache_url(&API_BASE_URL, &existing);
        }
        if let Some(cfg) = fetch_runtime_config().await {
            if let Some(upload) = &cfg.upload_base_url {
                let _ = UPLOAD_BASE_URL.set(upload.clone());
            }
            if let Some(url) = cfg.api_base_url {
                return cache_url(&API_BASE_URL, &url);
            }
        }
    }
    cache_url(&API_BASE_URL, DEFAULT_API_BASE_URL)
}

pub async fn await_upload_base_url() -> String {
    if let Some(cached) = UPLOAD_BASE_URL.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(existing) = upload_url_from_globals() {
            return cache_url(&UPLOAD_BASE_URL, &existing);
        }
        if let Some(cfg) = fetch_runtime_config().await {
            if let Some(url) = cfg.upload_base_url {
                return cache_url(&UPLOAD_BASE_URL, &url);
            }
        }
    }
    cache_url(&UPLOAD_BASE_URL, DEFAULT_UPLOAD_BASE_URL)
}

/// Composes the display URL for a backend-relative storage path. The backend
/// stores Windows-style separators for uploaded files.
pub async fn upload_url(path: &str) -> String {
    join_upload_path(&await_upload_base_url().await, path)
}

/// Synchronous variant for render paths. [`init`] has already populated the
/// cache by the time the app mounts; before that the default base is used.
pub fn image_url(path: &str) -> String {
    let base = UPLOAD_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_UPLOAD_BASE_URL.to_string());
    join_upload_path(&base, path)
}

pub fn join_upload_path(base: &str, path: &str) -> String {
    let cleaned = path.replace('\\', "/");
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        cleaned.trim_start_matches('/')
    )
}

pub async fn init() {
    let _ = await_api_base_url().await;
    let _ = await_upload_base_url().await;
}

#[cfg(test)]
mod tests {
    use super::join_upload_path;

    #[test]
    fn joins_base_and_relative_path() {
        assert_eq!(
            join_upload_path("http://localhost:4000/uploads", "partners/logo.png"),
            "http://localhost:4000/uploads/partners/logo.png"
        );
    }

    #[test]
    fn normalizes_backslash_separators() {
        assert_eq!(
            join_upload_path("http://localhost:4000/uploads/", "headers\\spring\\1.jpg"),
            "http://localhost:4000/uploads/headers/spring/1.jpg"
        );
    }

    #[test]
    fn tolerates_leading_slash_in_path() {
        assert_eq!(
            join_upload_path("http://cdn.example.com/uploads", "/a.png"),
            "http://cdn.example.com/uploads/a.png"
        );
    }
}
