use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::{use_api, ApiError, ProductPayload};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{SelectField, SubmitRow, TextArea, TextField};
use crate::components::layout::AdminShell;
use crate::utils::nav;

pub(super) fn validate(payload: &ProductPayload) -> Result<(), ApiError> {
    if payload.name_en.trim().is_empty() || payload.name_ru.trim().is_empty() {
        return Err(ApiError::validation("Name is required in both languages"));
    }
    Ok(())
}

/// "" in the select means no category; anything else must parse as an id.
pub(super) fn parse_category(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

#[component]
pub fn AddProductPage() -> impl IntoView {
    view! {
        <AdminShell>
            <ProductForm id=None/>
        </AdminShell>
    }
}

#[component]
pub fn EditProductPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <AdminShell>
            {move || id.get().map(|id| view! { <ProductForm id=Some(id)/> })}
        </AdminShell>
    }
}

#[component]
fn ProductForm(id: Option<i64>) -> impl IntoView {
    let name_en = create_rw_signal(String::new());
    let name_ru = create_rw_signal(String::new());
    let text_en = create_rw_signal(String::new());
    let text_ru = create_rw_signal(String::new());
    let category = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let api = use_api();

    let categories_client = api.categories();
    let categories = create_local_resource(
        || (),
        move |_| {
            let client = categories_client.clone();
            async move { client.list().await }
        },
    );
    let category_options = Signal::derive(move || {
        categories
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
            .into_iter()
            .map(|c| (c.id.to_string(), c.category_name))
            .collect::<Vec<_>>()
    });

    let load_client = api.products();
    if let Some(product_id) = id {
        let existing = create_local_resource(
            move || product_id,
            move |product_id| {
                let client = load_client.clone();
                async move { client.get(product_id).await }
            },
        );
        create_effect(move |_| match existing.get() {
            Some(Ok(product)) => {
                name_en.set(product.name_en);
                name_ru.set(product.name_ru);
                text_en.set(product.text_en);
                text_ru.set(product.text_ru);
                category.set(
                    product
                        .category_id
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                );
            }
            Some(Err(err)) => error.set(Some(err)),
            None => {}
        });
    }

    let submit_client = api.products();
    let submit_action = create_action(move |payload: &ProductPayload| {
        let payload = payload.clone();
        let client = submit_client.clone();
        async move {
            match id {
                Some(product_id) => client.update(product_id, &payload).await,
                None => client.create(&payload).await,
            }
        }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => nav::redirect_to("/admin/products"),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let payload = ProductPayload {
            name_en: name_en.get_untracked(),
            name_ru: name_ru.get_untracked(),
            text_en: text_en.get_untracked(),
            text_ru: text_ru.get_untracked(),
            category_id: parse_category(&category.get_untracked()),
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
                {if id.is_some() { "Edit product" } else { "Add product" }}
            </h2>
            <TextField label="Name (English)" value=name_en required=true/>
            <TextField label="Name (Russian)" value=name_ru required=true/>
            <TextArea label="Description (English)" value=text_en/>
            <TextArea label="Description (Russian)" value=text_ru/>
            <SelectField
                label="Category"
                value=category
                options=category_options
                placeholder="No category"
            />
            <InlineErrorMessage error=error.into()/>
            <SubmitRow
                cancel_href="/admin/products"
                submit_label=if id.is_some() { "Save changes" } else { "Create product" }
                pending=pending.into()
            />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_category, validate};
    use crate::api::ProductPayload;

    #[test]
    fn requires_names_in_both_languages() {
        assert!(validate(&ProductPayload::default()).is_err());
        assert!(validate(&ProductPayload {
            name_en: "Green tea".to_string(),
            name_ru: "Зелёный чай".to_string(),
            ..Default::default()
        })
        .is_ok());
    }

    #[test]
    fn blank_category_maps_to_none() {
        assert_eq!(parse_category(""), None);
        assert_eq!(parse_category("17"), Some(17));
        assert_eq!(parse_category("bogus"), None);
    }
}
