use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::{use_api, ApiError, FormField};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{FileField, SubmitRow};
use crate::components::layout::AdminShell;
use crate::config;
use crate::utils::{files, nav};

#[component]
pub fn AddPartnerPage() -> impl IntoView {
    view! {
        <AdminShell>
            <PartnerForm id=None/>
        </AdminShell>
    }
}

#[component]
pub fn EditPartnerPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <AdminShell>
            {move || id.get().map(|id| view! { <PartnerForm id=Some(id)/> })}
        </AdminShell>
    }
}

#[component]
fn PartnerForm(id: Option<i64>) -> impl IntoView {
    let current_logo = create_rw_signal(String::new());
    let selected_file = create_rw_signal(None::<web_sys::File>);
    let error = create_rw_signal(None::<ApiError>);
    let api = use_api();

    let load_client = api.partners();
    if let Some(partner_id) = id {
        let existing = create_local_resource(
            move || partner_id,
            move |partner_id| {
                let client = load_client.clone();
                async move { client.get(partner_id).await }
            },
        );
        create_effect(move |_| match existing.get() {
            Some(Ok(partner)) => current_logo.set(partner.logo),
            Some(Err(err)) => error.set(Some(err)),
            None => {}
        });
    }

    let submit_client = api.partners();
    let submit_action = create_action(move |file: &web_sys::File| {
        let file = file.clone();
        let client = submit_client.clone();
        async move {
            let data = files::read_file_bytes(&file)
                .await
                .map_err(ApiError::unknown)?;
            let fields = vec![FormField::File {
                name: "logo",
                filename: file.name(),
                mime: file.type_(),
                data,
            }];
            match id {
                Some(partner_id) => client.update_multipart(partner_id, fields).await,
                None => client.create_multipart(fields).await,
            }
        }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => nav::redirect_to("/admin/partners"),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_file = Callback::new(move |file: web_sys::File| {
        if let Err(message) = files::validate_image_file(&file.type_(), file.size()) {
            error.set(Some(ApiError::validation(message)));
            selected_file.set(None);
            return;
        }
        error.set(None);
        selected_file.set(Some(file));
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match selected_file.get_untracked() {
            Some(file) => {
                error.set(None);
                submit_action.dispatch(file);
            }
            // Editing without a new file is a no-op; adding requires one.
            None if id.is_some() => nav::redirect_to("/admin/partners"),
            None => error.set(Some(ApiError::validation("A logo image is required"))),
        }
    };

    view! {
        <form
            on:submit=on_submit
            class="w-full max-w-2xl p-6 border border-gray-300 rounded-lg shadow-lg bg-white"
        >
            <h2 class="text-2xl font-bold mb-6 text-gray-800">
                {if id.is_some() { "Edit partner" } else { "Add partner" }}
            </h2>
            <Show when=move || !current_logo.get().is_empty()>
                <div class="mb-6">
                    <span class="block mb-2 text-sm font-medium text-gray-700">"Current logo"</span>
                    <img
                        src=move || config::image_url(&current_logo.get())
                        class="h-16 w-32 object-contain"
                        alt="Current logo"
                    />
                </div>
            </Show>
            <FileField label="Logo image" on_file=on_file/>
            <InlineErrorMessage error=error.into()/>
            <SubmitRow
                cancel_href="/admin/partners"
                submit_label=if id.is_some() { "Save changes" } else { "Create partner" }
                pending=pending.into()
            />
        </form>
    }
}
