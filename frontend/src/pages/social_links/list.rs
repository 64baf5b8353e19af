use leptos::*;

use crate::api::{use_api, SocialLink};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyRow;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{AdminShell, LoadingSpinner};
use crate::state::resource::use_list_view_model;

#[component]
pub fn SocialLinkListPage() -> impl IntoView {
    let vm = use_list_view_model(use_api().social_links());
    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let dialog_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|link| format!("Delete the {} link?", link.icon))
            .unwrap_or_default()
    });

    view! {
        <AdminShell>
            <div class="w-full flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold text-gray-900">"Social links"</h2>
                <a
                    href="/admin/social-links/add"
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700"
                >
                    "Add link"
                </a>
            </div>
            <InlineErrorMessage error=vm.fetch_error/>
            <InlineErrorMessage error=vm.delete_error.into()/>
            <Show when=move || vm.loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !vm.loading.get()>
                <SocialLinkTable
                    items=vm.items
                    on_delete=Callback::new(move |link| vm.request_delete(link))
                />
            </Show>
            <ConfirmDialog
                is_open=dialog_open
                title="Delete social link"
                message=dialog_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || vm.delete_pending().get())
                destructive=true
            />
        </AdminShell>
    }
}

#[component]
fn SocialLinkTable(
    items: Signal<Vec<SocialLink>>,
    on_delete: Callback<SocialLink>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-200 rounded-lg">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Network"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"URL"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.get().is_empty()>
                        <EmptyRow colspan=3/>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|link| link.id
                        children=move |link: SocialLink| {
                            let edit_href = format!("/admin/social-links/edit/{}", link.id);
                            let url = link.url.clone();
                            let delete_link = link.clone();
                            view! {
                                <tr class="border-t border-gray-200">
                                    <td class="py-4 px-4 capitalize">{link.icon.clone()}</td>
                                    <td class="py-4 px-4">
                                        <a href=url.clone() class="text-blue-600 hover:underline" target="_blank">
                                            {url}
                                        </a>
                                    </td>
                                    <td class="py-4 px-4">
                                        <div class="flex gap-2">
                                            <a
                                                href=edit_href
                                                class="px-3 py-1 rounded bg-yellow-500 text-white hover:bg-yellow-600"
                                            >
                                                "Edit"
                                            </a>
                                            <button
                                                class="px-3 py-1 rounded bg-red-600 text-white hover:bg-red-700"
                                                on:click=move |_| on_delete.call(delete_link.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </div>
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::empty_state::EMPTY_ROW_TEXT;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_link_rows() {
        let html = render_to_string(|| {
            let items = Signal::derive(|| {
                vec![SocialLink {
                    id: 3,
                    icon: "instagram".to_string(),
                    url: "https://instagram.com/store".to_string(),
                }]
            });
            view! { <SocialLinkTable items=items on_delete=Callback::new(|_| {})/> }
        });
        assert!(html.contains("instagram"));
        assert!(html.contains("https://instagram.com/store"));
        assert!(html.contains("/admin/social-links/edit/3"));
    }

    #[test]
    fn empty_list_shows_the_placeholder_row() {
        let html = render_to_string(|| {
            let items = Signal::derive(Vec::new);
            view! { <SocialLinkTable items=items on_delete=Callback::new(|_| {})/> }
        });
        assert!(html.contains(EMPTY_ROW_TEXT));
    }
}
