mod form;
mod list;

pub use form::{AddAboutPage, EditAboutPage};
pub use list::AboutListPage;
