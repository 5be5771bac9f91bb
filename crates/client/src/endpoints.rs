//! One method per API route.

use common::types::appointment::{Appointment, CreateAppointmentRequest, UpdateAppointmentRequest};
use common::types::location::{CreateLocationRequest, Location, LocationListQuery, UpdateLocationRequest};
use common::types::offering::{
    CreateOfferingRequest, CreateServiceProviderRequest, Offering, OfferingDetails, ServiceProvider,
    ServiceProviderDetails, UpdateOfferingRequest, UpdateServiceProviderRequest,
};
use common::types::pet::{CreatePetRequest, Pet, UpdatePetRequest};
use common::types::product::{CreateProductRequest, Product, ProductDetails, ProductListQuery, UpdateProductRequest};
use common::types::review::{CreateReviewRequest, Review, ReviewListQuery, UpdateReviewRequest};
use common::types::store::{
    CreatePetStoreRequest, CreateStoreRequest, CreateVetStoreRequest, PetStore, Store, StoreDetails, StoreListQuery,
    UpdatePetStoreRequest, UpdateStoreRequest, UpdateVetStoreRequest, VetStore, VetStoreDetails,
};
use common::types::user::{AuthResponse, CreateUserRequest, LoginRequest, UpdateUserRequest, UserProfile};
use common::types::vet::{CreateVetRequest, UpdateVetRequest, Vet};
use common::types::Page;
use serde::Deserialize;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::ClientError;

#[derive(Deserialize)]
struct HealthReply {
    status: String,
}

impl ApiClient {
    pub async fn health(&self) -> Result<bool, ClientError> {
        let reply: HealthReply = self.get("/health").await?;
        Ok(reply.status == "ok")
    }

    // users

    pub async fn create_user(&self, input: &CreateUserRequest) -> Result<AuthResponse, ClientError> {
        self.post("/api/users/create", input).await
    }

    pub async fn login(&self, input: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.post("/api/users/login", input).await
    }

    pub async fn me(&self) -> Result<UserProfile, ClientError> { self.get("/api/users/me").await }

    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ClientError> { self.get("/api/users/all").await }

    pub async fn get_user(&self, id: Uuid) -> Result<UserProfile, ClientError> { self.get(&format!("/api/users/{id}")).await }

    pub async fn update_user(&self, id: Uuid, changes: &UpdateUserRequest) -> Result<UserProfile, ClientError> {
        self.put(&format!("/api/users/{id}/update"), changes).await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<UserProfile, ClientError> {
        self.delete(&format!("/api/users/{id}/delete")).await
    }

    // pets

    pub async fn list_pets(&self) -> Result<Vec<Pet>, ClientError> { self.get("/api/pets/all").await }

    pub async fn get_pet(&self, id: Uuid) -> Result<Pet, ClientError> { self.get(&format!("/api/pets/{id}")).await }

    pub async fn create_pet(&self, input: &CreatePetRequest) -> Result<Pet, ClientError> {
        self.post("/api/pets/create", input).await
    }

    pub async fn update_pet(&self, id: Uuid, changes: &UpdatePetRequest) -> Result<Pet, ClientError> {
        self.put(&format!("/api/pets/{id}/update"), changes).await
    }

    pub async fn delete_pet(&self, id: Uuid) -> Result<Pet, ClientError> { self.delete(&format!("/api/pets/{id}/delete")).await }

    // stores

    pub async fn list_stores(&self, query: &StoreListQuery) -> Result<Page<Store>, ClientError> {
        self.get_query("/api/stores/all", query).await
    }

    pub async fn get_store(&self, id: Uuid) -> Result<StoreDetails, ClientError> { self.get(&format!("/api/stores/{id}")).await }

    pub async fn create_store(&self, input: &CreateStoreRequest) -> Result<Store, ClientError> {
        self.post("/api/stores/create", input).await
    }

    pub async fn update_store(&self, id: Uuid, changes: &UpdateStoreRequest) -> Result<Store, ClientError> {
        self.put(&format!("/api/stores/{id}/update"), changes).await
    }

    pub async fn delete_store(&self, id: Uuid) -> Result<Store, ClientError> { self.delete(&format!("/api/stores/{id}/delete")).await }

    // pet-store profiles

    pub async fn list_pet_stores(&self, store_id: Uuid) -> Result<Vec<PetStore>, ClientError> {
        self.get(&format!("/api/stores/{store_id}/pet-stores/all")).await
    }

    pub async fn get_pet_store(&self, store_id: Uuid, id: Uuid) -> Result<PetStore, ClientError> {
        self.get(&format!("/api/stores/{store_id}/pet-stores/{id}")).await
    }

    pub async fn create_pet_store(&self, store_id: Uuid, input: &CreatePetStoreRequest) -> Result<PetStore, ClientError> {
        self.post(&format!("/api/stores/{store_id}/pet-stores/create"), input).await
    }

    pub async fn update_pet_store(&self, store_id: Uuid, id: Uuid, changes: &UpdatePetStoreRequest) -> Result<PetStore, ClientError> {
        self.put(&format!("/api/stores/{store_id}/pet-stores/{id}/update"), changes).await
    }

    pub async fn delete_pet_store(&self, store_id: Uuid, id: Uuid) -> Result<PetStore, ClientError> {
        self.delete(&format!("/api/stores/{store_id}/pet-stores/{id}/delete")).await
    }

    // vet-store profiles

    pub async fn list_vet_stores(&self, store_id: Uuid) -> Result<Vec<VetStore>, ClientError> {
        self.get(&format!("/api/stores/{store_id}/vet-stores/all")).await
    }

    pub async fn get_vet_store(&self, store_id: Uuid, id: Uuid) -> Result<VetStoreDetails, ClientError> {
        self.get(&format!("/api/stores/{store_id}/vet-stores/{id}")).await
    }

    pub async fn create_vet_store(&self, store_id: Uuid, input: &CreateVetStoreRequest) -> Result<VetStoreDetails, ClientError> {
        self.post(&format!("/api/stores/{store_id}/vet-stores/create"), input).await
    }

    pub async fn update_vet_store(
        &self,
        store_id: Uuid,
        id: Uuid,
        changes: &UpdateVetStoreRequest,
    ) -> Result<VetStoreDetails, ClientError> {
        self.put(&format!("/api/stores/{store_id}/vet-stores/{id}/update"), changes).await
    }

    pub async fn delete_vet_store(&self, store_id: Uuid, id: Uuid) -> Result<VetStore, ClientError> {
        self.delete(&format!("/api/stores/{store_id}/vet-stores/{id}/delete")).await
    }

    // vets

    pub async fn list_vets(&self) -> Result<Vec<Vet>, ClientError> { self.get("/api/vets/all").await }

    pub async fn get_vet(&self, id: Uuid) -> Result<Vet, ClientError> { self.get(&format!("/api/vets/{id}")).await }

    pub async fn create_vet(&self, input: &CreateVetRequest) -> Result<Vet, ClientError> { self.post("/api/vets/create", input).await }

    pub async fn update_vet(&self, id: Uuid, changes: &UpdateVetRequest) -> Result<Vet, ClientError> {
        self.put(&format!("/api/vets/{id}/update"), changes).await
    }

    pub async fn delete_vet(&self, id: Uuid) -> Result<Vet, ClientError> { self.delete(&format!("/api/vets/{id}/delete")).await }

    // products

    pub async fn list_products(&self, query: &ProductListQuery) -> Result<Page<Product>, ClientError> {
        self.get_query("/api/products/all", query).await
    }

    pub async fn get_product(&self, id: Uuid) -> Result<ProductDetails, ClientError> {
        self.get(&format!("/api/products/{id}")).await
    }

    pub async fn create_product(&self, input: &CreateProductRequest) -> Result<Product, ClientError> {
        self.post("/api/products/create", input).await
    }

    pub async fn update_product(&self, id: Uuid, changes: &UpdateProductRequest) -> Result<Product, ClientError> {
        self.put(&format!("/api/products/{id}/update"), changes).await
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<Product, ClientError> {
        self.delete(&format!("/api/products/{id}/delete")).await
    }

    // services

    pub async fn list_services(&self) -> Result<Vec<Offering>, ClientError> { self.get("/api/services/all").await }

    pub async fn get_service(&self, id: Uuid) -> Result<OfferingDetails, ClientError> {
        self.get(&format!("/api/services/{id}")).await
    }

    pub async fn create_service(&self, input: &CreateOfferingRequest) -> Result<OfferingDetails, ClientError> {
        self.post("/api/services/create", input).await
    }

    pub async fn update_service(&self, id: Uuid, changes: &UpdateOfferingRequest) -> Result<OfferingDetails, ClientError> {
        self.put(&format!("/api/services/{id}/update"), changes).await
    }

    pub async fn delete_service(&self, id: Uuid) -> Result<Offering, ClientError> {
        self.delete(&format!("/api/services/{id}/delete")).await
    }

    // service providers

    pub async fn list_service_providers(&self) -> Result<Vec<ServiceProvider>, ClientError> {
        self.get("/api/service-providers/all").await
    }

    pub async fn get_service_provider(&self, id: Uuid) -> Result<ServiceProviderDetails, ClientError> {
        self.get(&format!("/api/service-providers/{id}")).await
    }

    pub async fn create_service_provider(&self, input: &CreateServiceProviderRequest) -> Result<ServiceProviderDetails, ClientError> {
        self.post("/api/service-providers/create", input).await
    }

    pub async fn update_service_provider(
        &self,
        id: Uuid,
        changes: &UpdateServiceProviderRequest,
    ) -> Result<ServiceProviderDetails, ClientError> {
        self.put(&format!("/api/service-providers/{id}/update"), changes).await
    }

    pub async fn delete_service_provider(&self, id: Uuid) -> Result<ServiceProvider, ClientError> {
        self.delete(&format!("/api/service-providers/{id}/delete")).await
    }

    // reviews

    pub async fn list_reviews(&self, query: &ReviewListQuery) -> Result<Vec<Review>, ClientError> {
        self.get_query("/api/reviews/all", query).await
    }

    pub async fn get_review(&self, id: Uuid) -> Result<Review, ClientError> { self.get(&format!("/api/reviews/{id}")).await }

    pub async fn create_review(&self, input: &CreateReviewRequest) -> Result<Review, ClientError> {
        self.post("/api/reviews/create", input).await
    }

    pub async fn update_review(&self, id: Uuid, changes: &UpdateReviewRequest) -> Result<Review, ClientError> {
        self.put(&format!("/api/reviews/{id}/update"), changes).await
    }

    pub async fn delete_review(&self, id: Uuid) -> Result<Review, ClientError> {
        self.delete(&format!("/api/reviews/{id}/delete")).await
    }

    // appointments

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ClientError> { self.get("/api/appointments/all").await }

    pub async fn get_appointment(&self, id: Uuid) -> Result<Appointment, ClientError> {
        self.get(&format!("/api/appointments/{id}")).await
    }

    pub async fn create_appointment(&self, input: &CreateAppointmentRequest) -> Result<Appointment, ClientError> {
        self.post("/api/appointments/create", input).await
    }

    pub async fn update_appointment(&self, id: Uuid, changes: &UpdateAppointmentRequest) -> Result<Appointment, ClientError> {
        self.put(&format!("/api/appointments/{id}/update"), changes).await
    }

    pub async fn cancel_appointment(&self, id: Uuid) -> Result<Appointment, ClientError> {
        self.put_empty(&format!("/api/appointments/{id}/cancel")).await
    }

    pub async fn delete_appointment(&self, id: Uuid) -> Result<Appointment, ClientError> {
        self.delete(&format!("/api/appointments/{id}/delete")).await
    }

    // locations

    pub async fn list_locations(&self, query: &LocationListQuery) -> Result<Vec<Location>, ClientError> {
        self.get_query("/api/locations/all", query).await
    }

    pub async fn get_location(&self, id: Uuid) -> Result<Location, ClientError> {
        self.get(&format!("/api/locations/{id}")).await
    }

    pub async fn create_location(&self, input: &CreateLocationRequest) -> Result<Location, ClientError> {
        self.post("/api/locations/create", input).await
    }

    pub async fn update_location(&self, id: Uuid, changes: &UpdateLocationRequest) -> Result<Location, ClientError> {
        self.put(&format!("/api/locations/{id}/update"), changes).await
    }

    pub async fn delete_location(&self, id: Uuid) -> Result<Location, ClientError> {
        self.delete(&format!("/api/locations/{id}/delete")).await
    }
}
