//! SeaORM entities of the marketplace plus conversions into the wire types
//! from `common::types`.

pub mod db;
pub mod user;
pub mod pet;
pub mod store;
pub mod pet_store;
pub mod vet_store;
pub mod vet;
pub mod offering;
pub mod service_provider;
pub mod vet_store_vet;
pub mod vet_store_service;
pub mod service_provider_service;
pub mod product;
pub mod review;
pub mod appointment;
pub mod location;

#[cfg(test)]
mod tests;
