//! Address API routes

use axum::Router;
use domain_addresses::{AddressService, MongoAddressRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoAddressRepository::new(state.db.clone());
    handlers::router(AddressService::new(repository))
}
