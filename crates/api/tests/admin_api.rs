//! Admin listings behind the bearer API key.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get, get_as_admin, ADMIN_KEY};
use sqlx::PgPool;
use srimitha_db::models::contact::CreateContactMessage;
use srimitha_db::models::internship::CreateInternshipApplication;
use srimitha_db::repositories::{ContactMessageRepo, InternshipApplicationRepo, NewsletterRepo};

async fn insert_messages(pool: &PgPool, n: usize) {
    for i in 0..n {
        ContactMessageRepo::create(
            pool,
            &CreateContactMessage {
                name: format!("Sender {i}"),
                email: format!("sender{i}@example.com"),
                phone: None,
                subject: "Enquiry".to_string(),
                message: "Please call me back about a project.".to_string(),
            },
        )
        .await
        .unwrap();
    }
}

// ---------------------------------------------------------------------------
// Guard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_key_is_unauthorized(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/admin/contact-messages").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_key_is_unauthorized(pool: PgPool) {
    let response = get_as_admin(
        common::build_test_app(pool),
        "/api/admin/contact-messages",
        "guess",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_bearer_scheme_is_unauthorized(pool: PgPool) {
    let request = Request::builder()
        .uri("/api/admin/contact-messages")
        .header("authorization", format!("Basic {ADMIN_KEY}"))
        .body(Body::empty())
        .unwrap();
    let response = common::send(common::build_test_app(pool), request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unconfigured_key_disables_admin(pool: PgPool) {
    let mut config = common::test_config();
    config.admin_api_key = None;
    let app = common::build_test_app_with(pool, config);

    let response = get_as_admin(app, "/api/admin/contact-messages", ADMIN_KEY).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Contact messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_messages_default_page(pool: PgPool) {
    insert_messages(&pool, 12).await;
    let app = common::build_test_app(pool);

    let json = body_json(get_as_admin(app, "/api/admin/contact-messages", ADMIN_KEY).await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 10);
    assert_eq!(data[0]["name"], "Sender 11");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_messages_limit_and_offset_are_clamped(pool: PgPool) {
    insert_messages(&pool, 3).await;
    let app = common::build_test_app(pool);

    let json = body_json(
        get_as_admin(app.clone(), "/api/admin/contact-messages?limit=0", ADMIN_KEY).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let json = body_json(
        get_as_admin(
            app.clone(),
            "/api/admin/contact-messages?limit=2&offset=-5",
            ADMIN_KEY,
        )
        .await,
    )
    .await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Sender 2", "Sender 1"]);

    let json = body_json(
        get_as_admin(app, "/api/admin/contact-messages?limit=2&offset=2", ADMIN_KEY).await,
    )
    .await;
    assert_eq!(json["data"][0]["name"], "Sender 0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_message_by_id(pool: PgPool) {
    insert_messages(&pool, 1).await;
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM contact_messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = get_as_admin(
        app.clone(),
        &format!("/api/admin/contact-messages/{id}"),
        ADMIN_KEY,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], id);

    let response = get_as_admin(app, "/api/admin/contact-messages/424242", ADMIN_KEY).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Newsletter subscribers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn subscribers_exclude_inactive_by_default(pool: PgPool) {
    NewsletterRepo::subscribe(&pool, "active@example.com").await.unwrap();
    NewsletterRepo::subscribe(&pool, "lapsed@example.com").await.unwrap();
    sqlx::query("UPDATE newsletter_subscribers SET is_active = false WHERE email = 'lapsed@example.com'")
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(
        get_as_admin(app.clone(), "/api/admin/newsletter-subscribers", ADMIN_KEY).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["email"], "active@example.com");

    let json = body_json(
        get_as_admin(
            app,
            "/api/admin/newsletter-subscribers?include_inactive=true",
            ADMIN_KEY,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Internship applications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn applications_filter_by_status(pool: PgPool) {
    for name in ["Kiran", "Meera"] {
        InternshipApplicationRepo::create(
            &pool,
            &CreateInternshipApplication {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: None,
                education: "M.Tech Power Systems".to_string(),
                experience: None,
                motivation: "Keen to work on substation automation.".to_string(),
                resume: None,
            },
        )
        .await
        .unwrap();
    }
    sqlx::query("UPDATE internship_applications SET status = 'shortlisted' WHERE name = 'Kiran'")
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(
        get_as_admin(
            app.clone(),
            "/api/admin/internship-applications?status=pending",
            ADMIN_KEY,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"], "Meera");

    let json = body_json(
        get_as_admin(app, "/api/admin/internship-applications", ADMIN_KEY).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
