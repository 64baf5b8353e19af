use leptos::*;

use crate::api::{use_api, Product};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyRow;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{AdminShell, LoadingSpinner};
use crate::state::resource::use_list_view_model;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let vm = use_list_view_model(use_api().products());
    let dialog_open = Signal::derive(move || vm.pending_delete.get().is_some());
    let dialog_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|product| format!("Delete the product \"{}\"?", product.name_en))
            .unwrap_or_default()
    });

    view! {
        <AdminShell>
            <div class="w-full flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold text-gray-900">"Products"</h2>
                <a
                    href="/admin/products/add"
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700"
                >
                    "Add product"
                </a>
            </div>
            <InlineErrorMessage error=vm.fetch_error/>
            <InlineErrorMessage error=vm.delete_error.into()/>
            <Show when=move || vm.loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !vm.loading.get()>
                <ProductTable
                    items=vm.items
                    on_delete=Callback::new(move |product| vm.request_delete(product))
                />
            </Show>
            <ConfirmDialog
                is_open=dialog_open
                title="Delete product"
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
fn ProductTable(items: Signal<Vec<Product>>, on_delete: Callback<Product>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-200 rounded-lg">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Name (EN)"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Name (RU)"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Category"</th>
                        <th class="py-3 px-4 text-left text-sm font-semibold text-gray-600">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.get().is_empty()>
                        <EmptyRow colspan=4/>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|product| product.id
                        children=move |product: Product| {
                            let view_href = format!("/admin/products/view/{}", product.id);
                            let edit_href = format!("/admin/products/edit/{}", product.id);
                            let category = product
                                .category_name
                                .clone()
                                .unwrap_or_else(|| "Uncategorized".to_string());
                            let delete_product = product.clone();
                            view! {
                                <tr class="border-t border-gray-200">
                                    <td class="py-4 px-4">{product.name_en.clone()}</td>
                                    <td class="py-4 px-4">{product.name_ru.clone()}</td>
                                    <td class="py-4 px-4">{category}</td>
                                    <td class="py-4 px-4">
                                        <div class="flex gap-2">
                                            <a
                                                href=view_href
                                                class="px-3 py-1 rounded bg-gray-500 text-white hover:bg-gray-600"
                                            >
                                                "View"
                                            </a>
                                            <a
                                                href=edit_href
                                                class="px-3 py-1 rounded bg-yellow-500 text-white hover:bg-yellow-600"
                                            >
                                                "Edit"
                                            </a>
                                            <button
                                                class="px-3 py-1 rounded bg-red-600 text-white hover:bg-red-700"
                                                on:click=move |_| on_delete.call(delete_product.clone())
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

    fn product(id: i64, name_en: &str, category_name: Option<&str>) -> Product {
        Product {
            id,
            name_en: name_en.to_string(),
            name_ru: format!("{name_en} (ru)"),
            text_en: String::new(),
            text_ru: String::new(),
            category_id: None,
            category_name: category_name.map(str::to_string),
            images: Vec::new(),
        }
    }

    #[test]
    fn renders_rows_with_category_fallback() {
        let html = render_to_string(|| {
            let items = Signal::derive(|| {
                vec![
                    product(1, "Green tea", Some("Tea")),
                    product(2, "Mystery box", None),
                ]
            });
            view! { <ProductTable items=items on_delete=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Green tea"));
        assert!(html.contains("Tea"));
        assert!(html.contains("Uncategorized"));
        assert!(html.contains("/admin/products/view/1"));
        assert!(html.contains("/admin/products/edit/2"));
    }

    #[test]
    fn empty_list_shows_the_placeholder_row() {
        let html = render_to_string(|| {
            let items = Signal::derive(Vec::new);
            view! { <ProductTable items=items on_delete=Callback::new(|_| {})/> }
        });
        assert!(html.contains(EMPTY_ROW_TEXT));
    }
}
