use common::types::{
    appointment, location, offering, pet, product, review, store, user, vet, AppointmentStatus, ErrorBody, FieldError,
    Gender, ProductCategory, ProductPage, Species, StorePage, StoreType,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::routes;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Pet-care marketplace API", version = "0.1.0"),
    paths(
        routes::health,
        routes::users::create,
        routes::users::login,
        routes::users::me,
        routes::users::list,
        routes::users::get_one,
        routes::users::update,
        routes::users::remove,
        routes::pets::list,
        routes::pets::get_one,
        routes::pets::create,
        routes::pets::update,
        routes::pets::remove,
        routes::stores::list,
        routes::stores::get_one,
        routes::stores::create,
        routes::stores::update,
        routes::stores::remove,
        routes::pet_stores::list,
        routes::pet_stores::get_one,
        routes::pet_stores::create,
        routes::pet_stores::update,
        routes::pet_stores::remove,
        routes::vet_stores::list,
        routes::vet_stores::get_one,
        routes::vet_stores::create,
        routes::vet_stores::update,
        routes::vet_stores::remove,
        routes::vets::list,
        routes::vets::get_one,
        routes::vets::create,
        routes::vets::update,
        routes::vets::remove,
        routes::products::list,
        routes::products::get_one,
        routes::products::create,
        routes::products::update,
        routes::products::remove,
        routes::services::list,
        routes::services::get_one,
        routes::services::create,
        routes::services::update,
        routes::services::remove,
        routes::service_providers::list,
        routes::service_providers::get_one,
        routes::service_providers::create,
        routes::service_providers::update,
        routes::service_providers::remove,
        routes::reviews::list,
        routes::reviews::get_one,
        routes::reviews::create,
        routes::reviews::update,
        routes::reviews::remove,
        routes::appointments::list,
        routes::appointments::get_one,
        routes::appointments::create,
        routes::appointments::update,
        routes::appointments::cancel,
        routes::appointments::remove,
        routes::locations::list,
        routes::locations::get_one,
        routes::locations::create,
        routes::locations::update,
        routes::locations::remove,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            FieldError,
            Species,
            Gender,
            StoreType,
            ProductCategory,
            AppointmentStatus,
            user::CreateUserRequest,
            user::UpdateUserRequest,
            user::LoginRequest,
            user::UserProfile,
            user::AuthResponse,
            pet::CreatePetRequest,
            pet::UpdatePetRequest,
            pet::Pet,
            store::Availability,
            store::CreateStoreRequest,
            store::UpdateStoreRequest,
            store::Store,
            store::StoreDetails,
            StorePage,
            store::CreatePetStoreRequest,
            store::UpdatePetStoreRequest,
            store::PetStore,
            store::CreateVetStoreRequest,
            store::UpdateVetStoreRequest,
            store::VetStore,
            store::VetStoreDetails,
            vet::CreateVetRequest,
            vet::UpdateVetRequest,
            vet::Vet,
            product::CreateProductRequest,
            product::UpdateProductRequest,
            product::Product,
            product::ProductDetails,
            ProductPage,
            offering::CreateOfferingRequest,
            offering::UpdateOfferingRequest,
            offering::Offering,
            offering::OfferingDetails,
            offering::CreateServiceProviderRequest,
            offering::UpdateServiceProviderRequest,
            offering::ServiceProvider,
            offering::ServiceProviderDetails,
            review::CreateReviewRequest,
            review::UpdateReviewRequest,
            review::Review,
            appointment::CreateAppointmentRequest,
            appointment::UpdateAppointmentRequest,
            appointment::Appointment,
            location::CreateLocationRequest,
            location::UpdateLocationRequest,
            location::Location,
        )
    ),
    tags(
        (name = "health"),
        (name = "users", description = "Accounts and sign-in"),
        (name = "pets"),
        (name = "stores"),
        (name = "pet-stores"),
        (name = "vet-stores"),
        (name = "vets"),
        (name = "products"),
        (name = "services"),
        (name = "service-providers"),
        (name = "reviews"),
        (name = "appointments"),
        (name = "locations")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            )
        }
    }
}
