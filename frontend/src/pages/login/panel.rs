use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::{use_api, ApiError, LoginRequest};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::TextField;
use crate::state::session::{self, use_session};
use crate::utils::nav;

use super::validate_credentials;

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let (_, set_session) = use_session();
    let api = use_api();

    let login_action = create_action(move |request: &LoginRequest| {
        let request = request.clone();
        let api = api.clone();
        async move { api.login(&request).await }
    });
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    session::refresh_from_storage(set_session);
                    nav::redirect_to("/admin");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let username = username.get_untracked();
        let password = password.get_untracked();
        if let Err(message) = validate_credentials(&username, &password) {
            error.set(Some(ApiError::validation(message)));
            return;
        }
        error.set(None);
        login_action.dispatch(LoginRequest { username, password });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 p-4">
            <form
                on:submit=on_submit
                class="w-full max-w-md bg-white border border-gray-300 rounded-lg shadow-lg p-8"
            >
                <h1 class="text-2xl font-bold text-gray-900 mb-6">"Admin sign in"</h1>
                <TextField label="Username" value=username required=true/>
                <TextField label="Password" value=password required=true input_type="password"/>
                <InlineErrorMessage error=error.into()/>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full py-3 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700 disabled:opacity-50"
                >
                    {move || {
                        if pending.get() {
                            "Signing in...".to_string()
                        } else {
                            "Sign in".to_string()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
