mod form;
mod list;

pub use form::{AddPartnerPage, EditPartnerPage};
pub use list::PartnerListPage;
