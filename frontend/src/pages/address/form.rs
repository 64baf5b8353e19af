use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::{use_api, AddressPayload, ApiError};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{SubmitRow, TextField};
use crate::components::layout::AdminShell;
use crate::utils::nav;

pub(super) fn validate(payload: &AddressPayload) -> Result<(), ApiError> {
    if payload.address_en.trim().is_empty() || payload.address_ru.trim().is_empty() {
        return Err(ApiError::validation(
            "Address is required in both languages",
        ));
    }
    Ok(())
}

#[component]
pub fn AddAddressPage() -> impl IntoView {
    view! {
        <AdminShell>
            <AddressForm id=None/>
        </AdminShell>
    }
}

#[component]
pub fn EditAddressPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <AdminShell>
            {move || id.get().map(|id| view! { <AddressForm id=Some(id)/> })}
        </AdminShell>
    }
}

#[component]
fn AddressForm(id: Option<i64>) -> impl IntoView {
    let address_en = create_rw_signal(String::new());
    let address_ru = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let api = use_api();

    let load_client = api.addresses();
    if let Some(address_id) = id {
        let existing = create_local_resource(
            move || address_id,
            move |address_id| {
                let client = load_client.clone();
                async move { client.get(address_id).await }
            },
        );
        create_effect(move |_| match existing.get() {
            Some(Ok(address)) => {
                address_en.set(address.address_en);
                address_ru.set(address.address_ru);
            }
            Some(Err(err)) => error.set(Some(err)),
            None => {}
        });
    }

    let submit_client = api.addresses();
    let submit_action = create_action(move |payload: &AddressPayload| {
        let payload = payload.clone();
        let client = submit_client.clone();
        async move {
            match id {
                Some(address_id) => client.update(address_id, &payload).await,
                None => client.create(&payload).await,
            }
        }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => nav::redirect_to("/admin/address"),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let payload = AddressPayload {
            address_en: address_en.get_untracked(),
            address_ru: address_ru.get_untracked(),
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
            <h2 class="text-2xl font-bold mb-6 text-gray-800">
                {if id.is_some() { "Edit address" } else { "Add address" }}
            </h2>
            <TextField label="Address (English)" value=address_en required=true/>
            <TextField label="Address (Russian)" value=address_ru required=true/>
            <InlineErrorMessage error=error.into()/>
            <SubmitRow
                cancel_href="/admin/address"
                submit_label=if id.is_some() { "Save changes" } else { "Create address" }
                pending=pending.into()
            />
        </form>
    }
}
