mod form;
mod list;

pub use form::AddPhonePage;
pub use list::PhoneListPage;
