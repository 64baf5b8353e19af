mod form;
mod list;

pub use form::EditContactPage;
pub use list::ContactListPage;
