//! MongoDB implementation of AddressRepository

use async_trait::async_trait;
use mongodb::{Collection, Database};
use tracing::instrument;

use crate::error::AddressResult;
use crate::models::Address;
use crate::repository::AddressRepository;

pub const COLLECTION: &str = "addresses";

/// MongoDB implementation of the AddressRepository
pub struct MongoAddressRepository {
    collection: Collection<Address>,
}

impl MongoAddressRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Address>(COLLECTION),
        }
    }
}

#[async_trait]
impl AddressRepository for MongoAddressRepository {
    #[instrument(skip(self, address), fields(address_id = %address.id))]
    async fn insert(&self, address: Address) -> AddressResult<Address> {
        self.collection.insert_one(&address).await?;

        tracing::info!("Address stored successfully");
        Ok(address)
    }
}
