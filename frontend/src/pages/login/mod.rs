mod panel;
mod utils;

pub use panel::LoginPage;
pub(crate) use utils::validate_credentials;
