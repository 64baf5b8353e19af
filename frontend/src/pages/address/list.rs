use leptos::*;

use crate::api::{use_api, Address};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyRow;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{AdminShell, LoadingSpinner};
use crate::state::resource::use_list_view_model;

#[component]
pub fn AddressListPage() -> impl IntoView {
    let vm = use_list_view_model(use_api().addresses());
    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let dialog_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|address| format!("Delete the address \"{}\"?", address.address_en))
            .unwrap_or_default()
    });

    view! {
        <AdminShell>
            <div class="w-full flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold text-gray-900">"Addresses"</h2>
                <a
                    href="/admin/address/add"
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700"
                >
                    "Add address"
                </a>
            </div>
            <InlineErrorMessage error=vm.fetch_error/>
            <InlineErrorMessage error=vm.delete_error.into()/>
            <Show when=move || vm.loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !vm.loading.get()>
                <AddressTable
                    items=vm.items
                    on_delete=Callback::new(move |address| vm.request_delete(address))
                />
            </Show>
            <ConfirmDialog
                is_open=dialog_open
                title="Delete address"
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
fn AddressTable(items: Signal<Vec<Address>>, on_delete: Callback<Address>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-200 rounded-lg">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Address (EN)"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Address (RU)"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.get().is_empty()>
                        <EmptyRow colspan=3/>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|address| address.id
                        children=move |address: Address| {
                            let edit_href = format!("/admin/address/edit/{}", address.id);
                            let delete_address = address.clone();
                            view! {
                                <tr class="border-t border-gray-200">
                                    <td class="py-4 px-4">{address.address_en.clone()}</td>
                                    <td class="py-4 px-4">{address.address_ru.clone()}</td>
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
                                                on:click=move |_| on_delete.call(delete_address.clone())
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
    fn renders_rows_and_edit_links() {
        let html = render_to_string(|| {
            let items = Signal::derive(|| {
                vec![Address {
                    id: 9,
                    address_en: "12 Market Street".to_string(),
                    address_ru: "Рыночная 12".to_string(),
                }]
            });
            view! { <AddressTable items=items on_delete=Callback::new(|_| {})/> }
        });
        assert!(html.contains("12 Market Street"));
        assert!(html.contains("/admin/address/edit/9"));
        assert!(!html.contains(EMPTY_ROW_TEXT));
    }

    #[test]
    fn empty_list_shows_the_placeholder_row() {
        let html = render_to_string(|| {
            let items = Signal::derive(Vec::new);
            view! { <AddressTable items=items on_delete=Callback::new(|_| {})/> }
        });
        assert!(html.contains(EMPTY_ROW_TEXT));
    }
}
