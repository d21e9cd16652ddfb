//! Address Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::AddressResult;
use crate::models::{Address, AddressDetails};
use crate::repository::AddressRepository;

pub struct AddressService<R: AddressRepository> {
    repository: Arc<R>,
}

impl<R: AddressRepository> AddressService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Store an address exactly as submitted
    #[instrument(skip(self, details))]
    pub async fn save_address(&self, details: AddressDetails) -> AddressResult<Address> {
        self.repository.insert(Address::new(details)).await
    }
}
