#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    use chrono::{Duration, Utc};
    use leptos::*;

    use crate::state::session::{SessionContext, SessionState};

    /// A structurally valid JWT with the given `exp` claim. The signature is
    /// garbage; nothing client-side verifies it.
    pub fn sample_token(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#));
        format!("{header}.{payload}.sig")
    }

    pub fn provide_session(is_authenticated: bool, loading: bool) -> SessionContext {
        let expires_at = is_authenticated.then(|| Utc::now() + Duration::hours(1));
        let context = create_signal(SessionState {
            is_authenticated,
            expires_at,
            loading,
        });
        provide_context::<SessionContext>(context);
        context
    }
}
