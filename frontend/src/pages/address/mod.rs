mod form;
mod list;

pub use form::{AddAddressPage, EditAddressPage};
pub use list::AddressListPage;
