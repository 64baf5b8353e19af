use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::{use_api, ApiError, FormField};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{FileField, SubmitRow, TextField};
use crate::components::layout::AdminShell;
use crate::config;
use crate::utils::{files, nav};

#[derive(Clone)]
struct HeaderSubmission {
    header_name: String,
    file: Option<web_sys::File>,
}

#[component]
pub fn EditHeaderPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <AdminShell>
            {move || id.get().map(|id| view! { <HeaderForm id=id/> })}
        </AdminShell>
    }
}

#[component]
fn HeaderForm(id: i64) -> impl IntoView {
    let header_name = create_rw_signal(String::new());
    let current_image = create_rw_signal(String::new());
    let selected_file = create_rw_signal(None::<web_sys::File>);
    let error = create_rw_signal(None::<ApiError>);
    let api = use_api();

    let load_client = api.header_images();
    let existing = create_local_resource(
        move || id,
        move |header_id| {
            let client = load_client.clone();
            async move { client.get(header_id).await }
        },
    );
    create_effect(move |_| match existing.get() {
        Some(Ok(header)) => {
            header_name.set(header.header_name);
            current_image.set(header.images);
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    let submit_client = api.header_images();
    let submit_action = create_action(move |submission: &HeaderSubmission| {
        let submission = submission.clone();
        let client = submit_client.clone();
        async move {
            let mut fields = vec![FormField::Text {
                name: "header_name",
                value: submission.header_name,
            }];
            if let Some(file) = submission.file {
                let data = files::read_file_bytes(&file)
                    .await
                    .map_err(ApiError::unknown)?;
                fields.push(FormField::File {
                    name: "images",
                    filename: file.name(),
                    mime: file.type_(),
                    data,
                });
            }
            client.update_multipart(id, fields).await
        }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => nav::redirect_to("/admin/header"),
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
        let name = header_name.get_untracked();
        if name.trim().is_empty() {
            error.set(Some(ApiError::validation("Header name is required")));
            return;
        }
        error.set(None);
        submit_action.dispatch(HeaderSubmission {
            header_name: name,
            file: selected_file.get_untracked(),
        });
    };

    view! {
        <form
            on:submit=on_submit
            class="w-full max-w-2xl p-6 border border-gray-300 rounded-lg shadow-lg bg-white"
        >
            <h2 class="text-2xl font-bold mb-6 text-gray-800">"Edit header"</h2>
            <TextField label="Header name" value=header_name required=true/>
            <Show when=move || !current_image.get().is_empty()>
                <div class="mb-6">
                    <span class="block mb-2 text-sm font-medium text-gray-700">"Current image"</span>
                    <img
                        src=move || config::image_url(&current_image.get())
                        class="h-24 w-40 object-cover rounded"
                        alt="Current header"
                    />
                </div>
            </Show>
            <FileField label="Replacement image" on_file=on_file/>
            <InlineErrorMessage error=error.into()/>
            <SubmitRow
                cancel_href="/admin/header"
                submit_label="Save changes"
                pending=pending.into()
            />
        </form>
    }
}
