use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::{use_api, ApiError, PhonePayload};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{SubmitRow, TextField};
use crate::components::layout::AdminShell;
use crate::utils::nav;

pub(super) fn validate(payload: &PhonePayload) -> Result<(), ApiError> {
    if payload.phone.trim().is_empty() {
        return Err(ApiError::validation("Phone number is required"));
    }
    Ok(())
}

/// Numbers are add-only; a wrong entry is deleted from the list and
/// re-added.
#[component]
pub fn AddPhonePage() -> impl IntoView {
    view! {
        <AdminShell>
            <PhoneForm/>
        </AdminShell>
    }
}

#[component]
fn PhoneForm() -> impl IntoView {
    let phone = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let api = use_api();

    let submit_client = api.phones();
    let submit_action = create_action(move |payload: &PhonePayload| {
        let payload = payload.clone();
        let client = submit_client.clone();
        async move { client.create(&payload).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => nav::redirect_to("/admin/phone"),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let payload = PhonePayload {
            phone: phone.get_untracked().trim().to_string(),
        };
        if let Err(err) = validate(&payload) {
            error.set(Some(err));
            return;
        }
        error.set(None);
        submit_action.dispatch(payload);
    };

    view! {
        <form
            on:submit=on_submit
            class="w-full max-w-2xl p-6 border border-gray-300 rounded-lg shadow-lg bg-white"
        >
            <h2 class="text-2xl font-bold mb-6 text-gray-800">"Add phone"</h2>
            <TextField label="Phone" value=phone required=true/>
            <InlineErrorMessage error=error.into()/>
            <SubmitRow
                cancel_href="/admin/phone"
                submit_label="Add phone"
                pending=pending.into()
            />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::api::PhonePayload;

    #[test]
    fn requires_a_number() {
        assert!(validate(&PhonePayload::default()).is_err());
        assert!(validate(&PhonePayload {
            phone: "   ".to_string(),
        })
        .is_err());
        assert!(validate(&PhonePayload {
            phone: "+998 90 123 45 67".to_string(),
        })
        .is_ok());
    }
}
