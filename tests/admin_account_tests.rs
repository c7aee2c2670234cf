mod common;

use common::{seed_admin, spawn_default_app, token_for};
use school_portal::models::{AdminRole, UserStatus};

#[tokio::test]
async fn admin_listing_is_super_admin_only() {
    let (app, repo) = spawn_default_app().await;
    let plain_admin = seed_admin(
        &repo,
        "plain@example.com",
        "pw",
        AdminRole::Admin,
        UserStatus::Active,
    )
    .await;
    let super_admin = seed_admin(
        &repo,
        "super@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();

    let forbidden = client
        .get(format!("{}/api/admins", app.address))
        .bearer_auth(token_for(&plain_admin))
        .send()
        .await
        .unwrap();
    assert_eq!(forbidden.status(), 403);

    let allowed = client
        .get(format!("{}/api/admins", app.address))
        .bearer_auth(token_for(&super_admin))
        .send()
        .await
        .unwrap();
    assert_eq!(allowed.status(), 200);

    let body: serde_json::Value = allowed.json().await.unwrap();
    let rows = body["data"]["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // The password hash must never appear on the wire.
    for row in rows {
        assert!(row.get("password").is_none());
        assert!(row.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn create_admin_hashes_password_and_defaults_to_active() {
    let (app, repo) = spawn_default_app().await;
    let super_admin = seed_admin(
        &repo,
        "super2@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/admins", app.address))
        .bearer_auth(token_for(&super_admin))
        .json(&serde_json::json!({
            "name": "New Admin",
            "email": "new@example.com",
            "password": "StrongP@ssw0rd123!",
            "role": "ADMIN"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["status"], "ACTIVE");

    let stored = repo
        .admins
        .lock()
        .unwrap()
        .iter()
        .find(|a| a.email == "new@example.com")
        .cloned()
        .expect("account must be stored");
    assert_ne!(stored.password_hash, "StrongP@ssw0rd123!");
    assert!(school_portal::auth::verify_password(
        "StrongP@ssw0rd123!",
        &stored.password_hash
    ));
}

#[tokio::test]
async fn duplicate_admin_email_conflicts() {
    let (app, repo) = spawn_default_app().await;
    let super_admin = seed_admin(
        &repo,
        "super3@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();
    let payload = serde_json::json!({
        "name": "Dup",
        "email": "super3@example.com",
        "password": "whatever-1!",
        "role": "ADMIN"
    });
    let response = client
        .post(format!("{}/api/admins", app.address))
        .bearer_auth(token_for(&super_admin))
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["meta"]["message"],
        "Admin with this email already exists"
    );
    assert_eq!(repo.admins.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn update_to_taken_email_conflicts() {
    let (app, repo) = spawn_default_app().await;
    let super_admin = seed_admin(
        &repo,
        "super4@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;
    let other = seed_admin(
        &repo,
        "other@example.com",
        "pw",
        AdminRole::Admin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();
    let response = client
        .patch(format!("{}/api/admins/{}", app.address, other.id))
        .bearer_auth(token_for(&super_admin))
        .json(&serde_json::json!({ "email": "super4@example.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["meta"]["message"],
        "Email already taken by another admin"
    );
}

#[tokio::test]
async fn self_role_change_is_rejected_before_persistence() {
    let (app, repo) = spawn_default_app().await;
    let super_admin = seed_admin(
        &repo,
        "self@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();
    let response = client
        .patch(format!("{}/api/admins/{}", app.address, super_admin.id))
        .bearer_auth(token_for(&super_admin))
        .json(&serde_json::json!({ "role": "ADMIN" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["meta"]["message"], "You cannot change your own role");

    // Nothing reached the repository.
    let stored = repo.admins.lock().unwrap()[0].clone();
    assert_eq!(stored.role, AdminRole::SuperAdmin);
}

#[tokio::test]
async fn self_update_without_role_change_is_allowed() {
    let (app, repo) = spawn_default_app().await;
    let super_admin = seed_admin(
        &repo,
        "self2@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();
    let response = client
        .patch(format!("{}/api/admins/{}", app.address, super_admin.id))
        .bearer_auth(token_for(&super_admin))
        .json(&serde_json::json!({ "name": "Renamed Self" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let stored = repo.admins.lock().unwrap()[0].clone();
    assert_eq!(stored.name, "Renamed Self");
    assert_eq!(stored.role, AdminRole::SuperAdmin);
}

#[tokio::test]
async fn changing_another_admins_role_is_allowed() {
    let (app, repo) = spawn_default_app().await;
    let super_admin = seed_admin(
        &repo,
        "super5@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;
    let other = seed_admin(
        &repo,
        "other2@example.com",
        "pw",
        AdminRole::Admin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();
    let response = client
        .patch(format!("{}/api/admins/{}", app.address, other.id))
        .bearer_auth(token_for(&super_admin))
        .json(&serde_json::json!({ "role": "SUPER_ADMIN" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let stored = repo
        .admins
        .lock()
        .unwrap()
        .iter()
        .find(|a| a.id == other.id)
        .cloned()
        .unwrap();
    assert_eq!(stored.role, AdminRole::SuperAdmin);
}

#[tokio::test]
async fn self_delete_is_rejected_before_persistence() {
    let (app, repo) = spawn_default_app().await;
    let super_admin = seed_admin(
        &repo,
        "self3@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();
    let response = client
        .delete(format!("{}/api/admins/{}", app.address, super_admin.id))
        .bearer_auth(token_for(&super_admin))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["meta"]["message"], "You cannot delete your own account");
    assert_eq!(repo.admins.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_another_admin_works() {
    let (app, repo) = spawn_default_app().await;
    let super_admin = seed_admin(
        &repo,
        "super6@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;
    let other = seed_admin(
        &repo,
        "victim@example.com",
        "pw",
        AdminRole::Admin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();
    let response = client
        .delete(format!("{}/api/admins/{}", app.address, other.id))
        .bearer_auth(token_for(&super_admin))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(repo.admins.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn admin_registered_count_stat() {
    let (app, repo) = spawn_default_app().await;
    let super_admin = seed_admin(
        &repo,
        "super7@example.com",
        "pw",
        AdminRole::SuperAdmin,
        UserStatus::Active,
    )
    .await;
    seed_admin(
        &repo,
        "extra@example.com",
        "pw",
        AdminRole::Admin,
        UserStatus::Active,
    )
    .await;

    let client = reqwest::Client::new();
    let body: serde_json::Value = client
        .get(format!("{}/api/admins/stats/registered-count", app.address))
        .bearer_auth(token_for(&super_admin))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["count"], 2);
}
