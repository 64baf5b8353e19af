pub mod about;
pub mod address;
pub mod contact;
pub mod dashboard;
pub mod header;
pub mod login;
pub mod partners;
pub mod phone;
pub mod products;
pub mod social_links;
pub mod telegram;
