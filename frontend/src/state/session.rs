//! Session state shared across the app.
//!
//! The bearer token lives in `localStorage` under [`TOKEN_KEY`]. A reactive
//! snapshot of the session (authenticated flag plus the decoded expiry) is
//! provided once at the root by [`SessionProvider`] and read everywhere else
//! through [`use_session`]. There is exactly one invalidation path,
//! [`invalidate`], which clears the stored token and resets the snapshot.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use leptos::*;

pub const TOKEN_KEY: &str = "auth_token";

#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    // In-memory stand-in for localStorage so host tests exercise the same
    // token lifecycle.
    static STORED_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub fn token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::utils::storage::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORED_TOKEN.with(|slot| slot.borrow().clone())
    }
}

pub fn store_token(token: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(storage) = crate::utils::storage::local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORED_TOKEN.with(|slot| *slot.borrow_mut() = Some(token.to_string()));
    }
}

pub fn clear_token() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(storage) = crate::utils::storage::local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORED_TOKEN.with(|slot| *slot.borrow_mut() = None);
    }
}

/// Reads the `exp` claim out of a JWT without verifying the signature. The
/// backend is the authority on validity; this only drives UI decisions.
pub fn decoded_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut segments = token.split('.');
    segments.next()?;
    let payload = segments.next()?;
    let decoded = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    DateTime::from_timestamp(exp, 0)
}

/// Expiry of a token that is still live at `now`, or `None` when the token is
/// malformed or already expired.
pub fn live_expiry(token: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    decoded_expiry(token).filter(|expires_at| *expires_at > now)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub loading: bool,
}

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Builds the initial snapshot from storage. A stored token that is malformed
/// or expired is removed immediately so no later request carries it.
pub fn create_session_state() -> SessionState {
    let Some(raw) = token() else {
        return SessionState::default();
    };
    match live_expiry(&raw, Utc::now()) {
        Some(expires_at) => SessionState {
            is_authenticated: true,
            expires_at: Some(expires_at),
            loading: false,
        },
        None => {
            log::info!("discarding stale session token");
            clear_token();
            SessionState::default()
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let context = create_signal(create_session_state());
    provide_context::<SessionContext>(context);
    children()
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(create_session_state()))
}

/// Re-reads the stored token into the reactive snapshot. Called after a
/// successful login has persisted a fresh token.
pub fn refresh_from_storage(set_session: WriteSignal<SessionState>) {
    set_session.set(create_session_state());
}

/// The single invalidation path: drops the stored token and resets the
/// snapshot. Callers decide whether a redirect follows.
pub fn invalidate(set_session: WriteSignal<SessionState>) {
    clear_token();
    set_session.set(SessionState::default());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_roundtrip_in_local_storage() {
        clear_token();
        store_token("wasm-token");
        assert_eq!(token().as_deref(), Some("wasm-token"));
        clear_token();
        assert!(token().is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_token;

    #[test]
    fn token_roundtrip() {
        clear_token();
        assert!(token().is_none());
        store_token("abc");
        assert_eq!(token().as_deref(), Some("abc"));
        clear_token();
        assert!(token().is_none());
    }

    #[test]
    fn decodes_exp_claim() {
        let token = sample_token(1_900_000_000);
        let expiry = decoded_expiry(&token).unwrap();
        assert_eq!(expiry.timestamp(), 1_900_000_000);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(decoded_expiry("not-a-jwt").is_none());
        assert!(decoded_expiry("a.b.c").is_none());
    }

    #[test]
    fn expired_token_is_not_live() {
        let now = Utc::now();
        let expired = sample_token(now.timestamp() - 60);
        let valid = sample_token(now.timestamp() + 3600);
        assert!(live_expiry(&expired, now).is_none());
        assert!(live_expiry(&valid, now).is_some());
    }

    #[test]
    fn stale_stored_token_is_cleared_on_snapshot() {
        store_token(&sample_token(Utc::now().timestamp() - 60));
        let state = create_session_state();
        assert!(!state.is_authenticated);
        assert!(token().is_none());
    }

    #[test]
    fn valid_stored_token_authenticates() {
        store_token(&sample_token(Utc::now().timestamp() + 3600));
        let state = create_session_state();
        assert!(state.is_authenticated);
        assert!(state.expires_at.is_some());
        clear_token();
    }
}
