//! Addresses Domain
//!
//! Stores shipping addresses submitted by clients. Addresses are not linked
//! to users and are never read back.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use self::mongodb::MongoAddressRepository;
pub use error::{AddressError, AddressResult};
pub use handlers::ApiDoc;
pub use models::{Address, AddressDetails, AddressSaved, AddressView};
pub use repository::{AddressRepository, InMemoryAddressRepository};
pub use service::AddressService;
