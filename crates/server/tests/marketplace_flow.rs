mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{app, register, send};

#[tokio::test]
async fn store_profile_and_catalogue() {
    let app = app().await;
    let (owner, _) = register(&app, "owner").await;
    let (other, _) = register(&app, "other").await;

    let store = send(
        &app,
        "POST",
        "/api/stores/create",
        Some(&owner),
        Some(json!({
            "name": "Happy Paws",
            "storeType": "PET_STORE",
            "availability": {"openTime": "09:00", "closeTime": "18:00", "openDays": "MON-SAT"}
        })),
    )
    .await;
    assert_eq!(store.status, StatusCode::CREATED, "{}", store.body);
    let store_id = store.body["id"].as_str().unwrap().to_string();

    let profile = send(&app, "POST", &format!("/api/stores/{store_id}/pet-stores/create"), Some(&owner), Some(json!({"hasGrooming": true}))).await;
    assert_eq!(profile.status, StatusCode::CREATED, "{}", profile.body);
    let profile_id = profile.body["id"].as_str().unwrap().to_string();

    let fetched = send(&app, "GET", &format!("/api/stores/{store_id}/pet-stores/{profile_id}"), Some(&other), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["hasGrooming"], true);

    let vet_profile = send(&app, "POST", &format!("/api/stores/{store_id}/vet-stores/create"), Some(&owner), Some(json!({}))).await;
    assert_eq!(vet_profile.status, StatusCode::BAD_REQUEST);

    let denied = send(&app, "PUT", &format!("/api/stores/{store_id}/update"), Some(&other), Some(json!({"name": "Mine now"}))).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let product = send(
        &app,
        "POST",
        "/api/products/create",
        Some(&owner),
        Some(json!({"storeId": store_id, "name": "Chew toy", "price": 4.5, "category": "TOY", "stock": 10})),
    )
    .await;
    assert_eq!(product.status, StatusCode::CREATED, "{}", product.body);
    let product_id = product.body["id"].as_str().unwrap().to_string();

    let foreign = send(
        &app,
        "POST",
        "/api/products/create",
        Some(&other),
        Some(json!({"storeId": store_id, "name": "Fake", "price": 1.0, "category": "FOOD"})),
    )
    .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let review = send(&app, "POST", "/api/reviews/create", Some(&other), Some(json!({"rating": 4, "content": "Sturdy", "productId": product_id}))).await;
    assert_eq!(review.status, StatusCode::CREATED, "{}", review.body);

    let details = send(&app, "GET", &format!("/api/products/{product_id}"), Some(&owner), None).await;
    assert_eq!(details.status, StatusCode::OK);
    assert_eq!(details.body["averageRating"], 4.0);
    assert_eq!(details.body["reviews"].as_array().unwrap().len(), 1);

    let page = send(&app, "GET", &format!("/api/products/all?storeId={store_id}&page=1"), Some(&owner), None).await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["page"], 1);
    assert_eq!(page.body["hasMore"], false);
    assert_eq!(page.body["items"].as_array().unwrap().len(), 1);

    let store_details = send(&app, "GET", &format!("/api/stores/{store_id}"), Some(&other), None).await;
    assert_eq!(store_details.body["petStore"]["id"], profile_id.as_str());
    assert_eq!(store_details.body["availability"]["openTime"], "09:00");
    assert_eq!(store_details.body["products"].as_array().unwrap().len(), 1);

    let filtered = send(&app, "GET", "/api/stores/all?storeType=VET_STORE", Some(&owner), None).await;
    assert_eq!(filtered.body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn appointment_lifecycle() {
    let app = app().await;
    let (clinic_owner, _) = register(&app, "clinic").await;
    let (client, _) = register(&app, "client").await;

    let store = send(&app, "POST", "/api/stores/create", Some(&clinic_owner), Some(json!({"name": "Vet Care", "storeType": "VET_STORE"}))).await;
    let store_id = store.body["id"].as_str().unwrap().to_string();
    let vet = send(&app, "POST", "/api/vets/create", Some(&clinic_owner), Some(json!({"firstName": "Ana", "lastName": "Ruiz"}))).await;
    assert_eq!(vet.status, StatusCode::CREATED);
    let vet_id = vet.body["id"].as_str().unwrap().to_string();

    let clinic = send(
        &app,
        "POST",
        &format!("/api/stores/{store_id}/vet-stores/create"),
        Some(&clinic_owner),
        Some(json!({"emergencyService": true, "vetIds": [vet_id]})),
    )
    .await;
    assert_eq!(clinic.status, StatusCode::CREATED, "{}", clinic.body);
    assert_eq!(clinic.body["vets"].as_array().unwrap().len(), 1);
    let vet_store_id = clinic.body["id"].as_str().unwrap().to_string();

    let pet = send(&app, "POST", "/api/pets/create", Some(&client), Some(json!({"name": "Rex", "species": "DOG", "gender": "MALE"}))).await;
    assert_eq!(pet.status, StatusCode::CREATED);
    let pet_id = pet.body["id"].as_str().unwrap().to_string();

    let booked = send(
        &app,
        "POST",
        "/api/appointments/create",
        Some(&client),
        Some(json!({"vetStoreId": vet_store_id, "petId": pet_id, "date": "2030-05-01T10:00:00+00:00", "durationMinutes": 30})),
    )
    .await;
    assert_eq!(booked.status, StatusCode::CREATED, "{}", booked.body);
    assert_eq!(booked.body["status"], "PENDING");
    let appointment_id = booked.body["id"].as_str().unwrap().to_string();

    let hidden = send(&app, "GET", &format!("/api/appointments/{appointment_id}"), Some(&clinic_owner), None).await;
    assert_eq!(hidden.status, StatusCode::FORBIDDEN);

    let cancelled = send(&app, "PUT", &format!("/api/appointments/{appointment_id}/cancel"), Some(&client), None).await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(cancelled.body["status"], "CANCELLED");

    let again = send(&app, "PUT", &format!("/api/appointments/{appointment_id}/cancel"), Some(&client), None).await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);

    let mine = send(&app, "GET", "/api/appointments/all", Some(&client), None).await;
    assert_eq!(mine.body.as_array().unwrap().len(), 1);
    let theirs = send(&app, "GET", "/api/appointments/all", Some(&clinic_owner), None).await;
    assert_eq!(theirs.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn missing_rows_are_not_found() {
    let app = app().await;
    let (token, _) = register(&app, "dana").await;
    let id = "00000000-0000-0000-0000-000000000001";
    for uri in [format!("/api/pets/{id}"), format!("/api/stores/{id}"), format!("/api/vets/{id}"), format!("/api/products/{id}")] {
        let reply = send(&app, "GET", &uri, Some(&token), None).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{uri}");
    }
    let reply = send(&app, "DELETE", &format!("/api/locations/{id}/delete"), Some(&token), None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn locations_pin_the_caller() {
    let app = app().await;
    let (token, user_id) = register(&app, "erin").await;
    let created = send(&app, "POST", "/api/locations/create", Some(&token), Some(json!({"latitude": 40.4, "longitude": -3.7, "userId": user_id}))).await;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);

    let duplicate = send(&app, "POST", "/api/locations/create", Some(&token), Some(json!({"latitude": 1.0, "longitude": 1.0, "userId": user_id}))).await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);

    let listed = send(&app, "GET", &format!("/api/locations/all?userId={user_id}"), Some(&token), None).await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn clinic_services_and_vets_stay_with_the_owner() {
    let app = app().await;
    let (owner, _) = register(&app, "clinic").await;
    let (stranger, _) = register(&app, "stranger").await;

    let store = send(&app, "POST", "/api/stores/create", Some(&owner), Some(json!({"name": "Vet Care", "storeType": "VET_STORE"}))).await;
    let store_id = store.body["id"].as_str().unwrap().to_string();
    let vet = send(&app, "POST", "/api/vets/create", Some(&owner), Some(json!({"firstName": "Ana", "lastName": "Ruiz"}))).await;
    let vet_id = vet.body["id"].as_str().unwrap().to_string();
    let service = send(&app, "POST", "/api/services/create", Some(&owner), Some(json!({"name": "Checkup", "price": 30.0}))).await;
    assert_eq!(service.status, StatusCode::CREATED, "{}", service.body);
    let service_id = service.body["id"].as_str().unwrap().to_string();

    let clinic = send(
        &app,
        "POST",
        &format!("/api/stores/{store_id}/vet-stores/create"),
        Some(&owner),
        Some(json!({"vetIds": [vet_id], "serviceIds": [service_id]})),
    )
    .await;
    assert_eq!(clinic.status, StatusCode::CREATED, "{}", clinic.body);
    let clinic_id = clinic.body["id"].as_str().unwrap().to_string();

    let detach = send(&app, "PUT", &format!("/api/services/{service_id}/update"), Some(&stranger), Some(json!({"vetStoreIds": []}))).await;
    assert_eq!(detach.status, StatusCode::FORBIDDEN, "{}", detach.body);
    let rename = send(&app, "PUT", &format!("/api/services/{service_id}/update"), Some(&stranger), Some(json!({"name": "Hijacked"}))).await;
    assert_eq!(rename.status, StatusCode::FORBIDDEN);
    let removed = send(&app, "DELETE", &format!("/api/services/{service_id}/delete"), Some(&stranger), None).await;
    assert_eq!(removed.status, StatusCode::FORBIDDEN);

    let loose = send(&app, "POST", "/api/services/create", Some(&stranger), Some(json!({"name": "Walk", "price": 10.0, "vetStoreIds": [clinic_id]}))).await;
    assert_eq!(loose.status, StatusCode::FORBIDDEN);

    let vet_edit = send(&app, "PUT", &format!("/api/vets/{vet_id}/update"), Some(&stranger), Some(json!({"specialty": "None"}))).await;
    assert_eq!(vet_edit.status, StatusCode::FORBIDDEN);
    let vet_delete = send(&app, "DELETE", &format!("/api/vets/{vet_id}/delete"), Some(&stranger), None).await;
    assert_eq!(vet_delete.status, StatusCode::FORBIDDEN);

    let intact = send(&app, "GET", &format!("/api/services/{service_id}"), Some(&stranger), None).await;
    assert_eq!(intact.body["name"], "Checkup");
    assert_eq!(intact.body["vetStoreIds"].as_array().unwrap().len(), 1);
    let details = send(&app, "GET", &format!("/api/stores/{store_id}/vet-stores/{clinic_id}"), Some(&owner), None).await;
    assert_eq!(details.body["vets"].as_array().unwrap().len(), 1);
    assert_eq!(details.body["services"].as_array().unwrap().len(), 1);

    let renamed = send(&app, "PUT", &format!("/api/services/{service_id}/update"), Some(&owner), Some(json!({"price": 35.0}))).await;
    assert_eq!(renamed.status, StatusCode::OK, "{}", renamed.body);
    assert_eq!(renamed.body["price"], 35.0);
    let gone = send(&app, "DELETE", &format!("/api/services/{service_id}/delete"), Some(&owner), None).await;
    assert_eq!(gone.status, StatusCode::OK);
}
