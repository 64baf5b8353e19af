use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::{use_api, ApiError, SocialLinkPayload, SOCIAL_ICONS};
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{SelectField, SubmitRow, TextField};
use crate::components::layout::AdminShell;
use crate::utils::nav;

pub(super) fn validate(payload: &SocialLinkPayload) -> Result<(), ApiError> {
    if !SOCIAL_ICONS.contains(&payload.icon.as_str()) {
        return Err(ApiError::validation("Choose a social network"));
    }
    if !payload.url.starts_with("http://") && !payload.url.starts_with("https://") {
        return Err(ApiError::validation("URL must start with http:// or https://"));
    }
    Ok(())
}

#[component]
pub fn AddSocialLinkPage() -> impl IntoView {
    view! {
        <AdminShell>
            <SocialLinkForm id=None/>
        </AdminShell>
    }
}

#[component]
pub fn EditSocialLinkPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <AdminShell>
            {move || id.get().map(|id| view! { <SocialLinkForm id=Some(id)/> })}
        </AdminShell>
    }
}

#[component]
fn SocialLinkForm(id: Option<i64>) -> impl IntoView {
    let icon = create_rw_signal(String::new());
    let url = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let api = use_api();

    let icon_options = SOCIAL_ICONS
        .iter()
        .map(|name| (name.to_string(), name.to_string()))
        .collect::<Vec<_>>();

    let load_client = api.social_links();
    if let Some(link_id) = id {
        let existing = create_local_resource(
            move || link_id,
            move |link_id| {
                let client = load_client.clone();
                async move { client.get(link_id).await }
            },
        );
        create_effect(move |_| match existing.get() {
            Some(Ok(link)) => {
                icon.set(link.icon);
                url.set(link.url);
            }
            Some(Err(err)) => error.set(Some(err)),
            None => {}
        });
    }

    let submit_client = api.social_links();
    let submit_action = create_action(move |payload: &SocialLinkPayload| {
        let payload = payload.clone();
        let client = submit_client.clone();
        async move {
            match id {
                Some(link_id) => client.update(link_id, &payload).await,
                None => client.create(&payload).await,
            }
        }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => nav::redirect_to("/admin/social-links"),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let payload = SocialLinkPayload {
            icon: icon.get_untracked(),
            url: url.get_untracked(),
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
                {if id.is_some() { "Edit social link" } else { "Add social link" }}
            </h2>
            <SelectField
                label="Network"
                value=icon
                options=icon_options
                placeholder="Choose a network"
            />
            <TextField label="URL" value=url required=true placeholder="https://..."/>
            <InlineErrorMessage error=error.into()/>
            <SubmitRow
                cancel_href="/admin/social-links"
                submit_label=if id.is_some() { "Save changes" } else { "Create link" }
                pending=pending.into()
            />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::api::SocialLinkPayload;

    #[test]
    fn accepts_every_known_network() {
        for icon in crate::api::SOCIAL_ICONS {
            let payload = SocialLinkPayload {
                icon: icon.to_string(),
                url: "https://example.com/store".to_string(),
            };
            assert!(validate(&payload).is_ok(), "{icon} rejected");
        }
    }

    #[test]
    fn rejects_unknown_networks() {
        let payload = SocialLinkPayload {
            icon: "myspace".to_string(),
            url: "https://myspace.com/store".to_string(),
        };
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn requires_an_absolute_url() {
        let payload = SocialLinkPayload {
            icon: "telegram".to_string(),
            url: "t.me/store".to_string(),
        };
        assert!(validate(&payload).is_err());

        let payload = SocialLinkPayload {
            icon: "telegram".to_string(),
            url: "https://t.me/store".to_string(),
        };
        assert!(validate(&payload).is_ok());
    }
}
