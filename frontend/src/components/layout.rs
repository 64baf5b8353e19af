//! Page chrome for the admin console: sidebar navigation, the session
//! banner with expiry and logout, and the shell that wraps every view.

use chrono::{DateTime, Utc};
use leptos::*;

use crate::state::session::{self, use_session};
use crate::utils::nav;

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/admin", "Dashboard"),
    ("/admin/about", "About"),
    ("/admin/address", "Addresses"),
    ("/admin/contact", "Contacts"),
    ("/admin/phone", "Numbers"),
    ("/admin/header", "Header images"),
    ("/admin/partners", "Partners"),
    ("/admin/products", "Products"),
    ("/admin/social-links", "Social links"),
    ("/admin/telegram", "Telegram admins"),
];

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-64 min-h-screen bg-gray-900 text-gray-100 p-6 hidden md:block">
            <div class="text-xl font-bold mb-8">"Store Admin"</div>
            <nav class="space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a
                                href=*href
                                class="block px-3 py-2 rounded hover:bg-gray-700 transition-colors"
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

pub fn format_expiry(expires_at: DateTime<Utc>) -> String {
    format!(
        "Session expires: {}",
        expires_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

#[component]
pub fn SessionBanner() -> impl IntoView {
    let (session, set_session) = use_session();
    let expiry_line = create_memo(move |_| match session.get().expires_at {
        Some(expires_at) => format_expiry(expires_at),
        None => "Session is invalid or expired. Please log in again.".to_string(),
    });
    let on_logout = move |_| {
        session::invalidate(set_session);
        nav::redirect_to("/login");
    };

    view! {
        <div class="flex items-start justify-between">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"Admin Panel"</h1>
                <p class="text-sm text-gray-500 mt-1">{move || expiry_line.get()}</p>
            </div>
            <button
                on:click=on_logout
                class="px-4 py-2 rounded-lg bg-gray-200 text-gray-800 hover:bg-gray-300"
            >
                "Log out"
            </button>
        </div>
    }
}

/// Standard frame for every admin view.
#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    view! {
        <div class="flex bg-gray-100 min-h-screen">
            <Sidebar/>
            <div class="flex-1 p-6 lg:p-10">
                <SessionBanner/>
                <div class="mt-8">{children()}</div>
            </div>
        </div>
    }
}
