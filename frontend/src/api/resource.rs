//! Typed access to one REST collection.
//!
//! Every admin section talks to the backend through a [`ResourceClient`]
//! parameterized on its entity type, so list/fetch/create/update/delete
//! behave identically everywhere and inherit the client's 401 policy.

use std::marker::PhantomData;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::client::{ApiClient, FormField};
use crate::api::types::{
    AboutCard, Address, ApiError, Category, Contact, HeaderImage, Partner, Phone, Product,
    SocialLink,
};

/// Entities that carry a numeric primary key.
pub trait Identified {
    fn id(&self) -> i64;
}

macro_rules! identified {
    ($($entity:ty),* $(,)?) => {
        $(impl Identified for $entity {
            fn id(&self) -> i64 {
                self.id
            }
        })*
    };
}

identified!(
    AboutCard,
    Address,
    Contact,
    Phone,
    HeaderImage,
    Partner,
    Product,
    Category,
    SocialLink,
    crate::api::types::TelegramAdmin,
);

pub struct ResourceClient<T> {
    api: Rc<ApiClient>,
    path: &'static str,
    _entity: PhantomData<T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            path: self.path,
            _entity: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> ResourceClient<T> {
    pub fn new(api: ApiClient, path: &'static str) -> Self {
        Self {
            api: Rc::new(api),
            path,
            _entity: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        self.api.get_json(self.path).await
    }

    pub async fn get(&self, id: i64) -> Result<T, ApiError> {
        self.api.get_json(&format!("{}/{id}", self.path)).await
    }

    pub async fn create<B: Serialize>(&self, body: &B) -> Result<(), ApiError> {
        self.api.post_json_unit(self.path, body).await
    }

    pub async fn update<B: Serialize>(&self, id: i64, body: &B) -> Result<(), ApiError> {
        self.api
            .put_json_unit(&format!("{}/{id}", self.path), body)
            .await
    }

    pub async fn create_multipart(&self, fields: Vec<FormField>) -> Result<(), ApiError> {
        self.api.post_multipart_unit(self.path, fields).await
    }

    pub async fn update_multipart(&self, id: i64, fields: Vec<FormField>) -> Result<(), ApiError> {
        self.api
            .put_multipart_unit(&format!("{}/{id}", self.path), fields)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete_unit(&format!("{}/{id}", self.path)).await
    }
}

impl ApiClient {
    pub fn about_cards(&self) -> ResourceClient<AboutCard> {
        ResourceClient::new(self.clone(), "about")
    }

    pub fn addresses(&self) -> ResourceClient<Address> {
        ResourceClient::new(self.clone(), "address")
    }

    pub fn contacts(&self) -> ResourceClient<Contact> {
        ResourceClient::new(self.clone(), "contact")
    }

    pub fn phones(&self) -> ResourceClient<Phone> {
        ResourceClient::new(self.clone(), "phone")
    }

    pub fn header_images(&self) -> ResourceClient<HeaderImage> {
        ResourceClient::new(self.clone(), "header")
    }

    pub fn partners(&self) -> ResourceClient<Partner> {
        ResourceClient::new(self.clone(), "partners")
    }

    pub fn products(&self) -> ResourceClient<Product> {
        ResourceClient::new(self.clone(), "products")
    }

    pub fn categories(&self) -> ResourceClient<Category> {
        ResourceClient::new(self.clone(), "categories")
    }

    pub fn social_links(&self) -> ResourceClient<SocialLink> {
        ResourceClient::new(self.clone(), "links")
    }
}
