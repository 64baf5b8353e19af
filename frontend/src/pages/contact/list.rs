use leptos::*;

use crate::api::{use_api, Contact};
use crate::components::empty_state::EmptyRow;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{AdminShell, LoadingSpinner};
use crate::state::resource::use_list_view_model;

/// Contact details are a fixed record set: rows can be edited but never
/// added or removed from the console.
#[component]
pub fn ContactListPage() -> impl IntoView {
    let vm = use_list_view_model(use_api().contacts());

    view! {
        <AdminShell>
            <h2 class="text-2xl font-bold text-gray-900 mb-4">"Contact details"</h2>
            <InlineErrorMessage error=vm.fetch_error/>
            <Show when=move || vm.loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !vm.loading.get()>
                <ContactTable items=vm.items/>
            </Show>
        </AdminShell>
    }
}

#[component]
fn ContactTable(items: Signal<Vec<Contact>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-200 rounded-lg">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Address"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Phone"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Email"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.get().is_empty()>
                        <EmptyRow colspan=4/>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|contact| contact.id
                        children=move |contact: Contact| {
                            let edit_href = format!("/admin/contact/edit/{}", contact.id);
                            view! {
                                <tr class="border-t border-gray-200">
                                    <td class="py-4 px-4">{contact.address.clone()}</td>
                                    <td class="py-4 px-4">{contact.phone.clone()}</td>
                                    <td class="py-4 px-4">{contact.mail.clone()}</td>
                                    <td class="py-4 px-4">
                                        <a
                                            href=edit_href
                                            class="px-3 py-1 rounded bg-yellow-500 text-white hover:bg-yellow-600"
                                        >
                                            "Edit"
                                        </a>
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
    fn renders_contact_rows_without_delete_actions() {
        let html = render_to_string(|| {
            let items = Signal::derive(|| {
                vec![Contact {
                    id: 1,
                    address: "12 Market Street".to_string(),
                    phone: "+1 555 0100".to_string(),
                    mail: "store@example.com".to_string(),
                    map: String::new(),
                }]
            });
            view! { <ContactTable items=items/> }
        });
        assert!(html.contains("store@example.com"));
        assert!(html.contains("/admin/contact/edit/1"));
        assert!(!html.contains("Delete"));
    }

    #[test]
    fn empty_list_shows_the_placeholder_row() {
        let html = render_to_string(|| {
            let items = Signal::derive(Vec::new);
            view! { <ContactTable items=items/> }
        });
        assert!(html.contains(EMPTY_ROW_TEXT));
    }
}
