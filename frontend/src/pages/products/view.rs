use leptos::*;
use leptos_router::use_params_map;

use crate::api::{use_api, Product};
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{AdminShell, LoadingSpinner};
use crate::config;

/// Read-only product detail with the stored image gallery.
#[component]
pub fn ViewProductPage() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });
    view! {
        <AdminShell>
            {move || id.get().map(|id| view! { <ProductDetail id=id/> })}
        </AdminShell>
    }
}

#[component]
fn ProductDetail(id: i64) -> impl IntoView {
    let client = use_api().products();
    let product = create_local_resource(
        move || id,
        move |product_id| {
            let client = client.clone();
            async move { client.get(product_id).await }
        },
    );
    let fetch_error = Signal::derive(move || product.get().and_then(Result::err));

    view! {
        <InlineErrorMessage error=fetch_error/>
        <Show when=move || product.get().is_none()>
            <LoadingSpinner/>
        </Show>
        {move || {
            product
                .get()
                .and_then(Result::ok)
                .map(|product| view! { <ProductCard product=product/> })
        }}
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let category = product
        .category_name
        .clone()
        .unwrap_or_else(|| "Uncategorized".to_string());
    let edit_href = format!("/admin/products/edit/{}", product.id);
    let images = product
        .images
        .iter()
        .map(|path| config::image_url(path))
        .collect::<Vec<_>>();

    view! {
        <div class="w-full max-w-3xl bg-white border border-gray-300 rounded-lg shadow-lg p-6">
            <div class="flex justify-between items-start mb-6">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900">{product.name_en.clone()}</h2>
                    <p class="text-lg text-gray-600">{product.name_ru.clone()}</p>
                </div>
                <a
                    href=edit_href
                    class="px-4 py-2 rounded-lg bg-yellow-500 text-white hover:bg-yellow-600"
                >
                    "Edit"
                </a>
            </div>
            <dl class="space-y-4">
                <div>
                    <dt class="text-sm font-semibold text-gray-500">"Category"</dt>
                    <dd class="text-gray-900">{category}</dd>
                </div>
                <div>
                    <dt class="text-sm font-semibold text-gray-500">"Description (English)"</dt>
                    <dd class="text-gray-900 whitespace-pre-line">{product.text_en.clone()}</dd>
                </div>
                <div>
                    <dt class="text-sm font-semibold text-gray-500">"Description (Russian)"</dt>
                    <dd class="text-gray-900 whitespace-pre-line">{product.text_ru.clone()}</dd>
                </div>
            </dl>
            <Show when={
                let has_images = !images.is_empty();
                move || has_images
            }>
                <div class="mt-6">
                    <h3 class="text-sm font-semibold text-gray-500 mb-2">"Images"</h3>
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-3">
                        {images
                            .clone()
                            .into_iter()
                            .map(|src| view! {
                                <img src=src class="rounded object-cover h-32 w-full" alt="Product image"/>
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_details_and_gallery() {
        let html = render_to_string(|| {
            let product = Product {
                id: 8,
                name_en: "Green tea".to_string(),
                name_ru: "Зелёный чай".to_string(),
                text_en: "Loose leaf".to_string(),
                text_ru: "Листовой".to_string(),
                category_id: Some(2),
                category_name: Some("Tea".to_string()),
                images: vec!["products\\8\\main.jpg".to_string()],
            };
            view! { <ProductCard product=product/> }
        });
        assert!(html.contains("Green tea"));
        assert!(html.contains("Tea"));
        assert!(html.contains("products/8/main.jpg"));
        assert!(html.contains("/admin/products/edit/8"));
    }

    #[test]
    fn falls_back_to_uncategorized() {
        let html = render_to_string(|| {
            let product = Product {
                id: 9,
                name_en: "Mystery box".to_string(),
                name_ru: "Сюрприз".to_string(),
                text_en: String::new(),
                text_ru: String::new(),
                category_id: None,
                category_name: None,
                images: Vec::new(),
            };
            view! { <ProductCard product=product/> }
        });
        assert!(html.contains("Uncategorized"));
        assert!(!html.contains("<img"));
    }
}
