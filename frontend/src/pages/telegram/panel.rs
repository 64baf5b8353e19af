use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::{use_api, AddBotAdminRequest, ApiError, TelegramAdmin};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyRow;
use crate::components::error::InlineErrorMessage;
use crate::components::forms::{SubmitRow, TextField};
use crate::components::layout::{AdminShell, LoadingSpinner};

/// Usernames arrive with or without a leading `@`; the bot API wants them
/// bare.
pub(super) fn normalize_username(raw: &str) -> String {
    raw.trim().trim_start_matches('@').to_string()
}

#[component]
pub fn TelegramAdminPage() -> impl IntoView {
    let api = use_api();
    let error = create_rw_signal(None::<ApiError>);
    let notice = create_rw_signal(None::<String>);
    // Bumped after every successful change to refetch the roster.
    let refresh = create_rw_signal(0u32);
    let pending_removal = create_rw_signal(None::<TelegramAdmin>);

    let list_api = api.clone();
    let admins = create_local_resource(
        move || refresh.get(),
        move |_| {
            let api = list_api.clone();
            async move { api.list_bot_admins().await }
        },
    );
    let loading = Signal::derive(move || admins.get().is_none());
    let fetch_error = Signal::derive(move || admins.get().and_then(Result::err));
    let items = Signal::derive(move || admins.get().and_then(Result::ok).unwrap_or_default());

    let show_notice = move |text: String| {
        notice.set(Some(text));
        #[cfg(target_arch = "wasm32")]
        leptos::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3_000).await;
            notice.set(None);
        });
    };

    let add_api = api.clone();
    let add_action = create_action(move |request: &AddBotAdminRequest| {
        let request = request.clone();
        let api = add_api.clone();
        async move { api.add_bot_admin(&request).await }
    });
    let add_pending = add_action.pending();

    let remove_api = api;
    let remove_action = create_action(move |username: &String| {
        let username = username.clone();
        let api = remove_api.clone();
        async move { api.remove_bot_admin(&username).await }
    });
    let remove_pending = remove_action.pending();

    let username = create_rw_signal(String::new());
    let full_name = create_rw_signal(String::new());

    create_effect(move |_| {
        if let Some(result) = add_action.value().get() {
            match result {
                Ok(response) => {
                    username.set(String::new());
                    full_name.set(String::new());
                    error.set(None);
                    show_notice(
                        response
                            .message
                            .unwrap_or_else(|| "Admin added".to_string()),
                    );
                    refresh.update(|n| *n += 1);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = remove_action.value().get() {
            pending_removal.set(None);
            match result {
                Ok(response) => {
                    error.set(None);
                    show_notice(
                        response
                            .message
                            .unwrap_or_else(|| "Admin removed".to_string()),
                    );
                    refresh.update(|n| *n += 1);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if add_pending.get_untracked() {
            return;
        }
        let name = normalize_username(&username.get_untracked());
        if name.is_empty() {
            error.set(Some(ApiError::validation("Username is required")));
            return;
        }
        error.set(None);
        add_action.dispatch(AddBotAdminRequest {
            username: name,
            full_name: full_name.get_untracked().trim().to_string(),
        });
    };

    let dialog_open = Signal::derive(move || pending_removal.get().is_some());
    let dialog_message = Signal::derive(move || {
        pending_removal
            .get()
            .map(|admin| format!("Remove @{} from the bot admins?", admin.username))
            .unwrap_or_default()
    });

    view! {
        <AdminShell>
            <h2 class="text-2xl font-bold text-gray-900 mb-4">"Telegram bot admins"</h2>
            <InlineErrorMessage error=fetch_error/>
            <InlineErrorMessage error=error.into()/>
            <Show when=move || notice.get().is_some()>
                <div class="bg-green-50 border border-green-300 text-green-800 px-4 py-3 rounded my-2">
                    {move || notice.get().unwrap_or_default()}
                </div>
            </Show>

            <form
                on:submit=on_submit
                class="w-full max-w-xl p-6 border border-gray-300 rounded-lg shadow bg-white mb-8"
            >
                <h3 class="text-lg font-semibold text-gray-800 mb-4">"Add admin"</h3>
                <TextField label="Username" value=username required=true placeholder="@username"/>
                <TextField label="Full name" value=full_name/>
                <SubmitRow
                    cancel_href="/admin"
                    submit_label="Add admin"
                    pending=add_pending.into()
                />
            </form>

            <Show when=move || loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !loading.get()>
                <AdminTable
                    items=items
                    on_remove=Callback::new(move |admin| pending_removal.set(Some(admin)))
                />
            </Show>

            <ConfirmDialog
                is_open=dialog_open
                title="Remove admin"
                message=dialog_message
                on_confirm=Callback::new(move |_| {
                    if let Some(admin) = pending_removal.get_untracked() {
                        remove_action.dispatch(admin.username);
                    }
                })
                on_cancel=Callback::new(move |_| pending_removal.set(None))
                confirm_label="Remove"
                confirm_disabled=Signal::derive(move || remove_pending.get())
                destructive=true
            />
        </AdminShell>
    }
}

#[component]
fn AdminTable(items: Signal<Vec<TelegramAdmin>>, on_remove: Callback<TelegramAdmin>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-200 rounded-lg">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Username"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Full name"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.get().is_empty()>
                        <EmptyRow colspan=3/>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|admin| admin.id
                        children=move |admin: TelegramAdmin| {
                            let remove_admin = admin.clone();
                            view! {
                                <tr class="border-t border-gray-200">
                                    <td class="py-4 px-4">{format!("@{}", admin.username)}</td>
                                    <td class="py-4 px-4">{admin.full_name.clone()}</td>
                                    <td class="py-4 px-4">
                                        <button
                                            class="px-3 py-1 rounded bg-red-600 text-white hover:bg-red-700"
                                            on:click=move |_| on_remove.call(remove_admin.clone())
                                        >
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_username;

    #[test]
    fn strips_the_at_prefix() {
        assert_eq!(normalize_username("@shopkeeper"), "shopkeeper");
        assert_eq!(normalize_username("  shopkeeper "), "shopkeeper");
        assert_eq!(normalize_username("@"), "");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::empty_state::EMPTY_ROW_TEXT;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_the_roster() {
        let html = render_to_string(|| {
            let items = Signal::derive(|| {
                vec![TelegramAdmin {
                    id: 1,
                    username: "shopkeeper".to_string(),
                    full_name: "Shop Keeper".to_string(),
                    created_at: None,
                }]
            });
            view! { <AdminTable items=items on_remove=Callback::new(|_| {})/> }
        });
        assert!(html.contains("@shopkeeper"));
        assert!(html.contains("Shop Keeper"));
        assert!(html.contains("Remove"));
    }

    #[test]
    fn empty_roster_shows_the_placeholder_row() {
        let html = render_to_string(|| {
            let items = Signal::derive(Vec::new);
            view! { <AdminTable items=items on_remove=Callback::new(|_| {})/> }
        });
        assert!(html.contains(EMPTY_ROW_TEXT));
    }
}
