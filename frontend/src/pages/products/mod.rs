mod form;
mod list;
mod view;

pub use form::{AddProductPage, EditProductPage};
pub use list::ProductListPage;
pub use view::ViewProductPage;
