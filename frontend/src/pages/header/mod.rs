mod form;
mod list;

pub use form::EditHeaderPage;
pub use list::HeaderListPage;
