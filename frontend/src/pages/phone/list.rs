use leptos::*;

use crate::api::{use_api, Phone};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyRow;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{AdminShell, LoadingSpinner};
use crate::state::resource::use_list_view_model;

#[component]
pub fn PhoneListPage() -> impl IntoView {
    let vm = use_list_view_model(use_api().phones());
    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let dialog_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|entry| format!("Delete the phone number \"{}\"?", entry.phone))
            .unwrap_or_default()
    });

    view! {
        <AdminShell>
            <div class="w-full flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold text-gray-900">"Phone numbers"</h2>
                <a
                    href="/admin/phone/add"
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700"
                >
                    "Add phone"
                </a>
            </div>
            <InlineErrorMessage error=vm.fetch_error/>
            <InlineErrorMessage error=vm.delete_error.into()/>
            <Show when=move || vm.loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !vm.loading.get()>
                <PhoneTable
                    items=vm.items
                    on_delete=Callback::new(move |entry| vm.request_delete(entry))
                />
            </Show>
            <ConfirmDialog
                is_open=dialog_open
                title="Delete phone number"
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
fn PhoneTable(items: Signal<Vec<Phone>>, on_delete: Callback<Phone>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-200 rounded-lg">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Phone"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.get().is_empty()>
                        <EmptyRow colspan=2/>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|entry| entry.id
                        children=move |entry: Phone| {
                            let delete_entry = entry.clone();
                            view! {
                                <tr class="border-t border-gray-200">
                                    <td class="py-4 px-4">{entry.phone.clone()}</td>
                                    <td class="py-4 px-4">
                                        <button
                                            class="px-3 py-1 rounded bg-red-600 text-white hover:bg-red-700"
                                            on:click=move |_| on_delete.call(delete_entry.clone())
                                        >
                                            "Delete"
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::empty_state::EMPTY_ROW_TEXT;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_a_row_per_number() {
        let html = render_to_string(|| {
            let items = Signal::derive(|| {
                vec![Phone {
                    id: 4,
                    phone: "+998 90 123 45 67".to_string(),
                }]
            });
            view! { <PhoneTable items=items on_delete=Callback::new(|_| {})/> }
        });
        assert!(html.contains("+998 90 123 45 67"));
        assert!(html.contains("Delete"));
        assert!(!html.contains(EMPTY_ROW_TEXT));
    }

    #[test]
    fn empty_list_shows_the_placeholder_row() {
        let html = render_to_string(|| {
            let items = Signal::derive(Vec::new);
            view! { <PhoneTable items=items on_delete=Callback::new(|_| {})/> }
        });
        assert!(html.contains(EMPTY_ROW_TEXT));
    }
}
