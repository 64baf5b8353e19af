use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::{use_api, AboutPayload, ApiError};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{SubmitRow, TextArea, TextField};
use crate::components::layout::AdminShell;
use crate::utils::nav;

pub(super) fn validate(payload: &AboutPayload) -> Result<(), ApiError> {
    if payload.title_en.trim().is_empty() || payload.title_ru.trim().is_empty() {
        return Err(ApiError::validation(
            "Title is required in both languages",
        ));
    }
    Ok(())
}

#[component]
pub fn AddAboutPage() -> impl IntoView {
    view! {
        <AdminShell>
            <AboutForm id=None/>
        </AdminShell>
    }
}

#[component]
pub fn EditAboutPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <AdminShell>
            {move || id.get().map(|id| view! { <AboutForm id=Some(id)/> })}
        </AdminShell>
    }
}

#[component]
fn AboutForm(id: Option<i64>) -> impl IntoView {
    let title_en = create_rw_signal(String::new());
    let title_ru = create_rw_signal(String::new());
    let text_en = create_rw_signal(String::new());
    let text_ru = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let api = use_api();

    let load_client = api.about_cards();
    if let Some(card_id) = id {
        let existing = create_local_resource(
            move || card_id,
            move |card_id| {
                let client = load_client.clone();
                async move { client.get(card_id).await }
            },
        );
        create_effect(move |_| match existing.get() {
            Some(Ok(card)) => {
                title_en.set(card.title_en);
                title_ru.set(card.title_ru);
                text_en.set(card.text_en.unwrap_or_default());
                text_ru.set(card.text_ru.unwrap_or_default());
            }
            Some(Err(err)) => error.set(Some(err)),
            None => {}
        });
    }

    let submit_client = api.about_cards();
    let submit_action = create_action(move |payload: &AboutPayload| {
        let payload = payload.clone();
        let client = submit_client.clone();
        async move {
            match id {
                Some(card_id) => client.update(card_id, &payload).await,
                None => client.create(&payload).await,
            }
        }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => nav::redirect_to("/admin/about"),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let payload = AboutPayload {
            title_en: title_en.get_untracked(),
            title_ru: title_ru.get_untracked(),
            text_en: text_en.get_untracked(),
            text_ru: text_ru.get_untracked(),
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
                {if id.is_some() { "Edit about card" } else { "Add about card" }}
            </h2>
            <TextField label="Title (English)" value=title_en required=true/>
            <TextField label="Title (Russian)" value=title_ru required=true/>
            <TextArea label="Text (English)" value=text_en/>
            <TextArea label="Text (Russian)" value=text_ru/>
            <InlineErrorMessage error=error.into()/>
            <SubmitRow
                cancel_href="/admin/about"
                submit_label=if id.is_some() { "Save changes" } else { "Create card" }
                pending=pending.into()
            />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::api::AboutPayload;

    #[test]
    fn requires_titles_in_both_languages() {
        let payload = AboutPayload {
            title_en: "Our story".to_string(),
            ..Default::default()
        };
        assert!(validate(&payload).is_err());

        let payload = AboutPayload {
            title_en: "Our story".to_string(),
            title_ru: "История".to_string(),
            ..Default::default()
        };
        assert!(validate(&payload).is_ok());
    }
}
