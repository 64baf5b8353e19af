use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::{use_api, ApiError, ContactPayload};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{SubmitRow, TextArea, TextField};
use crate::components::layout::AdminShell;
use crate::utils::nav;

pub(super) fn validate(payload: &ContactPayload) -> Result<(), ApiError> {
    if payload.address.trim().is_empty()
        || payload.phone.trim().is_empty()
        || payload.mail.trim().is_empty()
    {
        return Err(ApiError::validation("Address, phone and email are required"));
    }
    Ok(())
}

#[component]
pub fn EditContactPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <AdminShell>
            {move || id.get().map(|id| view! { <ContactForm id=id/> })}
        </AdminShell>
    }
}

#[component]
fn ContactForm(id: i64) -> impl IntoView {
    let address = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let mail = create_rw_signal(String::new());
    let map = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let api = use_api();

    let load_client = api.contacts();
    let existing = create_local_resource(
        move || id,
        move |contact_id| {
            let client = load_client.clone();
            async move { client.get(contact_id).await }
        },
    );
    create_effect(move |_| match existing.get() {
        Some(Ok(contact)) => {
            address.set(contact.address);
            phone.set(contact.phone);
            mail.set(contact.mail);
            map.set(contact.map);
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    let submit_client = api.contacts();
    let submit_action = create_action(move |payload: &ContactPayload| {
        let payload = payload.clone();
        let client = submit_client.clone();
        async move { client.update(id, &payload).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => nav::redirect_to("/admin/contact"),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let payload = ContactPayload {
            address: address.get_untracked(),
            phone: phone.get_untracked(),
            mail: mail.get_untracked(),
            map: map.get_untracked(),
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
            <h2 class="text-2xl font-bold mb-6 text-gray-800">"Edit contact details"</h2>
            <TextField label="Address" value=address required=true/>
            <TextField label="Phone" value=phone required=true/>
            <TextField label="Email" value=mail required=true input_type="email"/>
            <TextArea label="Map embed" value=map rows=4/>
            <InlineErrorMessage error=error.into()/>
            <SubmitRow
                cancel_href="/admin/contact"
                submit_label="Save changes"
                pending=pending.into()
            />
        </form>
    }
}
