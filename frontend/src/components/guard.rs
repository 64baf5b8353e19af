use leptos::*;

use crate::components::layout::LoadingSpinner;
use crate::state::session::use_session;
use crate::utils::nav;

/// Gate for everything under `/admin`. An unauthenticated session redirects
/// to the login screen before any guarded content renders.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let is_authenticated = create_memo(move |_| session.get().is_authenticated);
    let is_loading = create_memo(move |_| session.get().loading);

    create_effect(move |_| {
        let state = session.get();
        if state.loading || state.is_authenticated {
            return;
        }
        nav::redirect_to("/login");
    });

    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=|| view! { <LoadingSpinner/> }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_only_for_settled_authenticated_sessions() {
        assert!(should_render_children(true, false));
        assert!(!should_render_children(true, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(false, true));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod ssr_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;
    use crate::utils::nav::take_recorded_redirect;

    #[test]
    fn authenticated_session_renders_children() {
        take_recorded_redirect();
        let html = render_to_string(|| {
            provide_session(true, false);
            view! { <RequireSession><p>"guarded content"</p></RequireSession> }
        });
        assert!(html.contains("guarded content"));
    }

    #[test]
    fn unauthenticated_session_hides_children() {
        take_recorded_redirect();
        let html = render_to_string(|| {
            provide_session(false, false);
            view! { <RequireSession><p>"guarded content"</p></RequireSession> }
        });
        assert!(!html.contains("guarded content"));
        assert!(html.contains("animate-spin"));
    }
}
