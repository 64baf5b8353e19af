mod form;
mod list;

pub use form::{AddSocialLinkPage, EditSocialLinkPage};
pub use list::SocialLinkListPage;
