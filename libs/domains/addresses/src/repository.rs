use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::AddressResult;
use crate::models::Address;

/// Repository trait for Address persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Store a new address
    async fn insert(&self, address: Address) -> AddressResult<Address>;
}

/// In-memory implementation of AddressRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryAddressRepository {
    addresses: Arc<RwLock<Vec<Address>>>,
}

impl InMemoryAddressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything stored so far
    pub async fn all(&self) -> Vec<Address> {
        self.addresses.read().await.clone()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn insert(&self, address: Address) -> AddressResult<Address> {
        self.addresses.write().await.push(address.clone());
        tracing::info!(address_id = %address.id, "Created address");
        Ok(address)
    }
}
