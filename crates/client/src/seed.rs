//! Populate a running server with believable mock data through the public
//! API. Content is deterministic for a given seed; usernames carry a random
//! run tag so repeated runs against one database do not collide.

use chrono::{Duration, Utc};
use common::types::appointment::CreateAppointmentRequest;
use common::types::location::CreateLocationRequest;
use common::types::offering::{CreateOfferingRequest, CreateServiceProviderRequest};
use common::types::pet::CreatePetRequest;
use common::types::product::CreateProductRequest;
use common::types::review::CreateReviewRequest;
use common::types::store::{Availability, CreatePetStoreRequest, CreateStoreRequest, CreateVetStoreRequest};
use common::types::user::{CreateUserRequest, UserProfile};
use common::types::vet::CreateVetRequest;
use common::types::{Gender, ProductCategory, Species, StoreType};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::ClientError;

pub const SEED_PASSWORD: &str = "password123";

const FIRST_NAMES: &[&str] = &["Ana", "Luis", "Marta", "Jon", "Sara", "Diego", "Lucia", "Pablo", "Irene", "Hugo"];
const LAST_NAMES: &[&str] = &["Garcia", "Lopez", "Martin", "Sanchez", "Perez", "Gomez", "Ruiz", "Diaz"];
const PET_NAMES: &[&str] = &["Rex", "Luna", "Coco", "Milo", "Nala", "Simba", "Kiwi", "Toby", "Lola", "Bruno"];
const STORE_NAMES: &[&str] = &["Happy Paws", "Pet Corner", "Furry Friends", "Bark & Purr", "Tail Town"];
const CLINIC_NAMES: &[&str] = &["Vet Care", "Animal Clinic", "PetHealth Center", "Healing Paws"];
const PRODUCTS: &[(&str, ProductCategory)] = &[
    ("Premium dog food", ProductCategory::Food),
    ("Cat kibble", ProductCategory::Food),
    ("Chew toy", ProductCategory::Toy),
    ("Feather wand", ProductCategory::Toy),
    ("Leather collar", ProductCategory::Accessory),
    ("Travel carrier", ProductCategory::Accessory),
    ("Flea treatment", ProductCategory::Medicine),
    ("Oatmeal shampoo", ProductCategory::Grooming),
];
const SERVICES: &[(&str, f64, i32)] = &[
    ("General checkup", 35.0, 30),
    ("Vaccination", 25.0, 15),
    ("Dental cleaning", 80.0, 60),
    ("Full grooming", 45.0, 90),
    ("Nail trim", 12.0, 15),
];
const REVIEW_LINES: &[&str] = &["Great quality", "My pet loves it", "Good value", "Would buy again", "Friendly staff"];

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub pet_stores: usize,
    pub vet_clinics: usize,
    pub customers: usize,
    pub products_per_store: usize,
    pub seed: u64,
}

impl Default for SeedOptions {
    fn default() -> Self { Self { pet_stores: 3, vet_clinics: 2, customers: 5, products_per_store: 4, seed: 42 } }
}

/// Counts of everything that was created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub stores: usize,
    pub vets: usize,
    pub services: usize,
    pub service_providers: usize,
    pub products: usize,
    pub pets: usize,
    pub reviews: usize,
    pub appointments: usize,
    pub locations: usize,
}

struct Seeder<'a> {
    api: &'a ApiClient,
    rng: StdRng,
    tag: String,
    report: SeedReport,
}

pub async fn seed(api: &ApiClient, opts: &SeedOptions) -> Result<SeedReport, ClientError> {
    let tag = format!("{:06x}", rand::thread_rng().gen_range(0..0xFF_FFFFu32));
    let mut seeder = Seeder { api, rng: StdRng::seed_from_u64(opts.seed), tag, report: SeedReport::default() };
    seeder.run(opts).await?;
    info!(report = ?seeder.report, "mock data seeded");
    Ok(seeder.report)
}

impl Seeder<'_> {
    async fn run(&mut self, opts: &SeedOptions) -> Result<(), ClientError> {
        let mut product_ids = Vec::new();
        let mut pet_store_ids = Vec::new();
        for i in 0..opts.pet_stores {
            let (store_id, products) = self.pet_store(i, opts.products_per_store).await?;
            pet_store_ids.push(store_id);
            product_ids.extend(products);
        }

        let mut clinics = Vec::new();
        let mut service_ids = Vec::new();
        for i in 0..opts.vet_clinics {
            let (vet_store_id, services) = self.vet_clinic(i).await?;
            clinics.push(vet_store_id);
            service_ids.extend(services);
        }

        let provider_id = self.groomer(&service_ids).await?;

        for i in 0..opts.customers {
            self.customer(i, &product_ids, &pet_store_ids, &clinics, provider_id).await?;
        }
        Ok(())
    }

    fn pick<'s>(&mut self, items: &'s [&'s str]) -> &'s str { items.choose(&mut self.rng).copied().unwrap_or("Pet") }

    fn coords(&mut self) -> (f64, f64) {
        // scattered around one city centre
        (40.4168 + self.rng.gen_range(-0.05..0.05), -3.7038 + self.rng.gen_range(-0.05..0.05))
    }

    async fn register(&mut self, role: &str, i: usize) -> Result<(ApiClient, UserProfile), ClientError> {
        let username = format!("{role}{i}_{}", self.tag);
        let req = CreateUserRequest {
            email: format!("{username}@example.com"),
            username,
            password: SEED_PASSWORD.into(),
            first_name: self.pick(FIRST_NAMES).into(),
            last_name: self.pick(LAST_NAMES).into(),
            phone: Some(format!("+34 600 {:03} {:03}", self.rng.gen_range(0..1000), self.rng.gen_range(0..1000))),
            avatar_url: None,
        };
        let auth = self.api.create_user(&req).await?;
        self.report.users += 1;
        Ok((self.api.with_token(auth.token), auth.user))
    }

    async fn locate(&mut self, api: &ApiClient, user_id: Option<Uuid>, store_id: Option<Uuid>) -> Result<(), ClientError> {
        let (latitude, longitude) = self.coords();
        api.create_location(&CreateLocationRequest { latitude, longitude, user_id, store_id }).await?;
        self.report.locations += 1;
        Ok(())
    }

    async fn pet_store(&mut self, i: usize, products: usize) -> Result<(Uuid, Vec<Uuid>), ClientError> {
        let (owner, _) = self.register("shop", i).await?;
        let store = owner
            .create_store(&CreateStoreRequest {
                name: format!("{} #{}", self.pick(STORE_NAMES), i + 1),
                description: Some("Food, toys and accessories for every pet".into()),
                store_type: StoreType::PetStore,
                phone: Some("+34 910 000 000".into()),
                email: None,
                availability: Some(Availability {
                    open_time: Some("09:00".into()),
                    close_time: Some("20:00".into()),
                    open_days: Some("MON-SAT".into()),
                }),
            })
            .await?;
        self.report.stores += 1;
        owner
            .create_pet_store(
                store.id,
                &CreatePetStoreRequest { has_grooming: self.rng.gen_bool(0.5), has_boarding: self.rng.gen_bool(0.3), sells_live_animals: false },
            )
            .await?;
        self.locate(&owner, None, Some(store.id)).await?;

        let mut ids = Vec::with_capacity(products);
        for _ in 0..products {
            let (name, category) = PRODUCTS.choose(&mut self.rng).copied().unwrap_or(("Pet treat", ProductCategory::Food));
            let price = (self.rng.gen_range(3.0..60.0f64) * 100.0).round() / 100.0;
            let product = owner
                .create_product(&CreateProductRequest {
                    store_id: store.id,
                    name: name.into(),
                    description: None,
                    price,
                    category,
                    stock: self.rng.gen_range(0..100),
                    image_url: None,
                })
                .await?;
            self.report.products += 1;
            ids.push(product.id);
        }
        Ok((store.id, ids))
    }

    async fn vet_clinic(&mut self, i: usize) -> Result<(Uuid, Vec<Uuid>), ClientError> {
        let (owner, _) = self.register("clinic", i).await?;
        let store = owner
            .create_store(&CreateStoreRequest {
                name: format!("{} #{}", self.pick(CLINIC_NAMES), i + 1),
                description: Some("Veterinary care and vaccinations".into()),
                store_type: StoreType::VetStore,
                phone: Some("+34 910 111 111".into()),
                email: None,
                availability: Some(Availability {
                    open_time: Some("08:00".into()),
                    close_time: Some("19:00".into()),
                    open_days: Some("MON-FRI".into()),
                }),
            })
            .await?;
        self.report.stores += 1;

        let mut vet_ids = Vec::new();
        for _ in 0..2 {
            let vet = owner
                .create_vet(&CreateVetRequest {
                    first_name: self.pick(FIRST_NAMES).into(),
                    last_name: self.pick(LAST_NAMES).into(),
                    specialty: Some("Small animals".into()),
                    phone: None,
                    email: None,
                })
                .await?;
            self.report.vets += 1;
            vet_ids.push(vet.id);
        }

        let mut service_ids = Vec::new();
        for (name, price, minutes) in SERVICES.iter().take(3) {
            let service = owner
                .create_service(&CreateOfferingRequest {
                    name: format!("{name} ({})", i + 1),
                    description: None,
                    price: *price,
                    duration_minutes: Some(*minutes),
                    service_provider_ids: Vec::new(),
                    vet_store_ids: Vec::new(),
                })
                .await?;
            self.report.services += 1;
            service_ids.push(service.offering.id);
        }

        let clinic = owner
            .create_vet_store(
                store.id,
                &CreateVetStoreRequest {
                    emergency_service: i == 0,
                    license_number: Some(format!("VET-{:04}", i + 1)),
                    vet_ids,
                    service_ids: service_ids.clone(),
                },
            )
            .await?;
        self.locate(&owner, None, Some(store.id)).await?;
        Ok((clinic.vet_store.id, service_ids))
    }

    async fn groomer(&mut self, vet_services: &[Uuid]) -> Result<Uuid, ClientError> {
        let (groomer, _) = self.register("groomer", 0).await?;
        let mut service_ids: Vec<Uuid> = vet_services.iter().take(1).copied().collect();
        for (name, price, minutes) in SERVICES.iter().skip(3) {
            let service = groomer
                .create_service(&CreateOfferingRequest {
                    name: (*name).into(),
                    description: Some("Mobile grooming at home".into()),
                    price: *price,
                    duration_minutes: Some(*minutes),
                    service_provider_ids: Vec::new(),
                    vet_store_ids: Vec::new(),
                })
                .await?;
            self.report.services += 1;
            service_ids.push(service.offering.id);
        }
        let provider = groomer
            .create_service_provider(&CreateServiceProviderRequest {
                name: "Groom & Go".into(),
                description: Some("Grooming at your door".into()),
                phone: Some("+34 622 333 444".into()),
                service_ids,
            })
            .await?;
        self.report.service_providers += 1;
        Ok(provider.provider.id)
    }

    async fn customer(
        &mut self,
        i: usize,
        products: &[Uuid],
        stores: &[Uuid],
        clinics: &[Uuid],
        provider_id: Uuid,
    ) -> Result<(), ClientError> {
        let (api, me) = self.register("customer", i).await?;
        self.locate(&api, Some(me.id), None).await?;

        let mut pets = Vec::new();
        for _ in 0..self.rng.gen_range(1..=2) {
            let species = *[Species::Dog, Species::Cat, Species::Rabbit, Species::Bird].choose(&mut self.rng).unwrap_or(&Species::Dog);
            let gender = if self.rng.gen_bool(0.5) { Gender::Male } else { Gender::Female };
            let pet = api
                .create_pet(&CreatePetRequest {
                    name: self.pick(PET_NAMES).into(),
                    species,
                    gender,
                    breed: None,
                    weight: Some((self.rng.gen_range(1.0..35.0f64) * 10.0).round() / 10.0),
                    birth_date: None,
                    adoption_date: None,
                    notes: None,
                })
                .await?;
            self.report.pets += 1;
            pets.push(pet.id);
        }

        if let Some(product_id) = products.choose(&mut self.rng).copied() {
            self.review(&api, Some(product_id), None, None).await?;
        }
        if let Some(store_id) = stores.choose(&mut self.rng).copied() {
            self.review(&api, None, Some(store_id), None).await?;
        }
        if i % 2 == 0 {
            self.review(&api, None, None, Some(provider_id)).await?;
        }

        if let Some(vet_store_id) = clinics.choose(&mut self.rng).copied() {
            let date = (Utc::now() + Duration::days(self.rng.gen_range(1..30)) + Duration::hours(self.rng.gen_range(0..8))).fixed_offset();
            api.create_appointment(&CreateAppointmentRequest {
                vet_store_id,
                pet_id: pets.first().copied(),
                date,
                duration_minutes: 30,
                notes: Some("Annual checkup".into()),
            })
            .await?;
            self.report.appointments += 1;
        }
        Ok(())
    }

    async fn review(
        &mut self,
        api: &ApiClient,
        product_id: Option<Uuid>,
        store_id: Option<Uuid>,
        service_provider_id: Option<Uuid>,
    ) -> Result<(), ClientError> {
        api.create_review(&CreateReviewRequest {
            rating: self.rng.gen_range(3..=5),
            content: self.pick(REVIEW_LINES).into(),
            product_id,
            service_provider_id,
            store_id,
        })
        .await?;
        self.report.reviews += 1;
        Ok(())
    }
}
