use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireSession, RequireSessionProps},
    pages::{
        about::{AboutListPage, AddAboutPage, EditAboutPage},
        address::{AddAddressPage, AddressListPage, EditAddressPage},
        contact::{ContactListPage, EditContactPage},
        dashboard::DashboardPage,
        header::{EditHeaderPage, HeaderListPage},
        login::LoginPage,
        partners::{AddPartnerPage, EditPartnerPage, PartnerListPage},
        phone::{AddPhonePage, PhoneListPage},
        products::{AddProductPage, EditProductPage, ProductListPage, ViewProductPage},
        social_links::{AddSocialLinkPage, EditSocialLinkPage, SocialLinkListPage},
        telegram::TelegramAdminPage,
    },
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/admin",
    "/admin/about",
    "/admin/about/add",
    "/admin/about/edit/:id",
    "/admin/address",
    "/admin/address/add",
    "/admin/address/edit/:id",
    "/admin/contact",
    "/admin/contact/edit/:id",
    "/admin/header",
    "/admin/header/edit/:id",
    "/admin/partners",
    "/admin/partners/add",
    "/admin/partners/edit/:id",
    "/admin/phone",
    "/admin/phone/add",
    "/admin/products",
    "/admin/products/add",
    "/admin/products/edit/:id",
    "/admin/products/view/:id",
    "/admin/social-links",
    "/admin/social-links/add",
    "/admin/social-links/edit/:id",
    "/admin/telegram",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/admin" view=guarded(DashboardPage)/>
                    <Route path="/admin/about" view=guarded(AboutListPage)/>
                    <Route path="/admin/about/add" view=guarded(AddAboutPage)/>
                    <Route path="/admin/about/edit/:id" view=guarded(EditAboutPage)/>
                    <Route path="/admin/address" view=guarded(AddressListPage)/>
                    <Route path="/admin/address/add" view=guarded(AddAddressPage)/>
                    <Route path="/admin/address/edit/:id" view=guarded(EditAddressPage)/>
                    <Route path="/admin/contact" view=guarded(ContactListPage)/>
                    <Route path="/admin/contact/edit/:id" view=guarded(EditContactPage)/>
                    <Route path="/admin/header" view=guarded(HeaderListPage)/>
                    <Route path="/admin/header/edit/:id" view=guarded(EditHeaderPage)/>
                    <Route path="/admin/partners" view=guarded(PartnerListPage)/>
                    <Route path="/admin/partners/add" view=guarded(AddPartnerPage)/>
                    <Route path="/admin/partners/edit/:id" view=guarded(EditPartnerPage)/>
                    <Route path="/admin/phone" view=guarded(PhoneListPage)/>
                    <Route path="/admin/phone/add" view=guarded(AddPhonePage)/>
                    <Route path="/admin/products" view=guarded(ProductListPage)/>
                    <Route path="/admin/products/add" view=guarded(AddProductPage)/>
                    <Route path="/admin/products/edit/:id" view=guarded(EditProductPage)/>
                    <Route path="/admin/products/view/:id" view=guarded(ViewProductPage)/>
                    <Route path="/admin/social-links" view=guarded(SocialLinkListPage)/>
                    <Route path="/admin/social-links/add" view=guarded(AddSocialLinkPage)/>
                    <Route path="/admin/social-links/edit/:id" view=guarded(EditSocialLinkPage)/>
                    <Route path="/admin/telegram" view=guarded(TelegramAdminPage)/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

/// Wraps a page view in the session guard.
fn guarded<F, V>(page: F) -> impl Fn() -> View + Clone + 'static
where
    F: Fn() -> V + Clone + 'static,
    V: IntoView,
{
    move || {
        let page = page.clone();
        let children: ChildrenFn = std::rc::Rc::new(move || {
            Fragment::new(vec![page().into_view()])
        });
        RequireSession(RequireSessionProps::builder().children(children).build()).into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_admin_section_has_a_route() {
        for section in [
            "about", "address", "contact", "header", "partners", "phone", "products",
            "social-links", "telegram",
        ] {
            let path = format!("/admin/{section}");
            assert!(
                ROUTE_PATHS.contains(&path.as_str()),
                "missing route: {path}"
            );
        }
    }

    #[test]
    fn public_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PUBLIC_ROUTE_PATHS {
            assert!(all.contains(path), "public path missing: {path}");
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
