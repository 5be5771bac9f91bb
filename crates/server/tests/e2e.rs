use client::seed::{seed, SeedOptions, SEED_PASSWORD};
use client::{ApiClient, ClientError};
use common::types::product::ProductListQuery;
use common::types::store::StoreListQuery;
use common::types::user::{CreateUserRequest, LoginRequest};
use common::types::StoreType;
use configs::{AppConfig, AuthConfig, DatabaseConfig, Environment, ServerConfig};
use tokio::net::TcpListener;

async fn start_server() -> anyhow::Result<ApiClient> {
    let config = AppConfig {
        environment: Environment::Test,
        server: ServerConfig::default(),
        database: DatabaseConfig::sqlite_memory(),
        auth: AuthConfig::development(),
    };
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = server::serve(listener, &config).await {
            eprintln!("server error: {e}");
        }
    });
    Ok(ApiClient::new(format!("http://{addr}"))?)
}

fn new_user(username: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.into(),
        email: format!("{username}@example.com"),
        password: SEED_PASSWORD.into(),
        first_name: "E2E".into(),
        last_name: "Tester".into(),
        phone: None,
        avatar_url: None,
    }
}

#[tokio::test]
async fn seeder_populates_a_live_server() -> anyhow::Result<()> {
    let api = start_server().await?;
    assert!(api.health().await?);

    let opts = SeedOptions { pet_stores: 2, vet_clinics: 1, customers: 3, products_per_store: 3, seed: 7 };
    let report = seed(&api, &opts).await?;
    assert_eq!(report.stores, 3);
    assert_eq!(report.products, 6);
    assert_eq!(report.appointments, 3);
    assert_eq!(report.users, 2 + 1 + 1 + 3);

    let auth = api.create_user(&new_user("inspector")).await?;
    let me = api.with_token(auth.token);

    let pet_stores = me.list_stores(&StoreListQuery { store_type: Some(StoreType::PetStore), ..Default::default() }).await?;
    assert_eq!(pet_stores.items.len(), 2);
    assert!(!pet_stores.has_more);

    let details = me.get_store(pet_stores.items[0].id).await?;
    assert!(details.pet_store.is_some());
    assert!(details.location.is_some());
    assert_eq!(details.products.len(), 3);

    let products = me.list_products(&ProductListQuery::default()).await?;
    assert_eq!(products.items.len(), 6);
    let rated = products.items.iter().filter(|p| p.average_rating > 0.0).count();
    assert!(rated >= 1);

    assert_eq!(me.list_service_providers().await?.len(), 1);
    assert!(me.list_appointments().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn client_surfaces_api_errors() -> anyhow::Result<()> {
    let api = start_server().await?;
    api.create_user(&new_user("frank")).await?;

    let dup = api.create_user(&new_user("frank")).await.unwrap_err();
    assert_eq!(dup.status(), Some(400));

    let bad = api
        .login(&LoginRequest { username: Some("frank".into()), email: None, password: "wrong-password".into() })
        .await
        .unwrap_err();
    assert_eq!(bad.status(), Some(401));

    let anonymous = api.list_pets().await.unwrap_err();
    assert_eq!(anonymous.status(), Some(401));

    let mut invalid = new_user("g");
    invalid.email = "nope".into();
    match api.create_user(&invalid).await {
        Err(ClientError::Api { status, validation_errors, .. }) => {
            assert_eq!(status, 400);
            let fields: Vec<_> = validation_errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["email", "username"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    Ok(())
}
