use leptos::*;

use crate::components::layout::{AdminShell, NAV_ITEMS};

/// Landing page under `/admin`: one card per manageable section.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AdminShell>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {NAV_ITEMS
                    .iter()
                    .filter(|(href, _)| *href != "/admin")
                    .map(|(href, label)| {
                        view! {
                            <a
                                href=*href
                                class="block bg-white border border-gray-200 rounded-lg p-6 shadow hover:shadow-md transition-shadow"
                            >
                                <div class="text-lg font-semibold text-gray-900">{*label}</div>
                                <div class="text-sm text-gray-500 mt-1">{"Manage "}{label.to_lowercase()}</div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </AdminShell>
    }
}
