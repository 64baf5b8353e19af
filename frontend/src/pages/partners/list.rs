use leptos::*;

use crate::api::{use_api, Partner};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyRow;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{AdminShell, LoadingSpinner};
use crate::config;
use crate::state::resource::use_list_view_model;

#[component]
pub fn PartnerListPage() -> impl IntoView {
    let vm = use_list_view_model(use_api().partners());
    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let dialog_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|_| "Delete this partner logo?".to_string())
            .unwrap_or_default()
    });

    view! {
        <AdminShell>
            <div class="w-full flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold text-gray-900">"Partners"</h2>
                <a
                    href="/admin/partners/add"
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700"
                >
                    "Add partner"
                </a>
            </div>
            <InlineErrorMessage error=vm.fetch_error/>
            <InlineErrorMessage error=vm.delete_error.into()/>
            <Show when=move || vm.loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !vm.loading.get()>
                <PartnerTable
                    items=vm.items
                    on_delete=Callback::new(move |partner| vm.request_delete(partner))
                />
            </Show>
            <ConfirmDialog
                is_open=dialog_open
                title="Delete partner"
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
fn PartnerTable(items: Signal<Vec<Partner>>, on_delete: Callback<Partner>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-200 rounded-lg">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Logo"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.get().is_empty()>
                        <EmptyRow colspan=2/>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|partner| partner.id
                        children=move |partner: Partner| {
                            let edit_href = format!("/admin/partners/edit/{}", partner.id);
                            let logo = (!partner.logo.is_empty())
                                .then(|| config::image_url(&partner.logo));
                            let delete_partner = partner.clone();
                            view! {
                                <tr class="border-t border-gray-200">
                                    <td class="py-4 px-4">
                                        {logo.map(|src| view! {
                                            <img src=src class="h-12 w-24 object-contain" alt="Partner logo"/>
                                        })}
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
                                                on:click=move |_| on_delete.call(delete_partner.clone())
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
