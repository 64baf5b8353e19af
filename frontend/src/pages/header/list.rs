use leptos::*;

use crate::api::{use_api, HeaderImage};
use crate::components::empty_state::EmptyRow;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{AdminShell, LoadingSpinner};
use crate::config;
use crate::state::resource::use_list_view_model;

/// Header slots are fixed: each one can get a new image or name, but none
/// can be added or removed here.
#[component]
pub fn HeaderListPage() -> impl IntoView {
    let vm = use_list_view_model(use_api().header_images());

    view! {
        <AdminShell>
            <h2 class="text-2xl font-bold text-gray-900 mb-4">"Header images"</h2>
            <InlineErrorMessage error=vm.fetch_error/>
            <Show when=move || vm.loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !vm.loading.get()>
                <HeaderTable items=vm.items/>
            </Show>
        </AdminShell>
    }
}

#[component]
fn HeaderTable(items: Signal<Vec<HeaderImage>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-200 rounded-lg">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Preview"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Name"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.get().is_empty()>
                        <EmptyRow colspan=3/>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|header| header.id
                        children=move |header: HeaderImage| {
                            let edit_href = format!("/admin/header/edit/{}", header.id);
                            let preview = (!header.images.is_empty())
                                .then(|| config::image_url(&header.images));
                            view! {
                                <tr class="border-t border-gray-200">
                                    <td class="py-4 px-4">
                                        {preview.map(|src| view! {
                                            <img src=src class="h-16 w-28 object-cover rounded" alt="Header preview"/>
                                        })}
                                    </td>
                                    <td class="py-4 px-4">{header.header_name.clone()}</td>
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
