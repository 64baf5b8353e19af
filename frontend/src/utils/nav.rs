//! Hard navigation helpers. Views navigate by setting `location.href`; on
//! non-wasm targets the destination is recorded so tests can observe it.

#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static RECORDED_REDIRECT: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        RECORDED_REDIRECT.with(|slot| *slot.borrow_mut() = Some(path.to_string()));
    }
}

pub fn current_path() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|win| win.location().pathname().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Takes the last destination passed to [`redirect_to`], clearing it.
#[cfg(not(target_arch = "wasm32"))]
pub fn take_recorded_redirect() -> Option<String> {
    RECORDED_REDIRECT.with(|slot| slot.borrow_mut().take())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn redirects_are_recorded_on_host() {
        take_recorded_redirect();
        redirect_to("/login");
        assert_eq!(take_recorded_redirect().as_deref(), Some("/login"));
        assert!(take_recorded_redirect().is_none());
    }
}
