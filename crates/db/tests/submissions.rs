//! Integration tests for the submission tables: contact messages,
//! newsletter subscribers, internship applications.

use assert_matches::assert_matches;
use sqlx::PgPool;
use srimitha_db::models::contact::CreateContactMessage;
use srimitha_db::models::internship::CreateInternshipApplication;
use srimitha_db::models::newsletter::SubscribeOutcome;
use srimitha_db::repositories::{ContactMessageRepo, InternshipApplicationRepo, NewsletterRepo};

fn new_contact(name: &str) -> CreateContactMessage {
    CreateContactMessage {
        name: name.to_string(),
        email: "asha@example.com".to_string(),
        phone: None,
        subject: "Solar quote".to_string(),
        message: "Please send a quote for a 10kW rooftop system.".to_string(),
    }
}

fn new_application(name: &str) -> CreateInternshipApplication {
    CreateInternshipApplication {
        name: name.to_string(),
        email: "intern@example.com".to_string(),
        phone: Some("   ".to_string()),
        education: "B.Tech Electrical".to_string(),
        experience: None,
        motivation: "I want to work on grid-scale storage.".to_string(),
        resume: Some("https://drive.example.com/cv.pdf".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Contact messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_message_stored_verbatim(pool: PgPool) {
    let mut input = new_contact("Asha Rao");
    input.phone = Some("+91 98450 12345".to_string());

    let row = ContactMessageRepo::create(&pool, &input).await.unwrap();
    assert_eq!(row.name, input.name);
    assert_eq!(row.email, input.email);
    assert_eq!(row.phone.as_deref(), Some("+91 98450 12345"));
    assert_eq!(row.subject, input.subject);
    assert_eq!(row.message, input.message);

    let found = ContactMessageRepo::find_by_id(&pool, row.id).await.unwrap().unwrap();
    assert_eq!(found.message, input.message);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_contact_phone_stored_as_null(pool: PgPool) {
    let mut input = new_contact("Asha Rao");
    input.phone = Some(String::new());
    let row = ContactMessageRepo::create(&pool, &input).await.unwrap();
    assert!(row.phone.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_messages_paginate_newest_first(pool: PgPool) {
    for name in ["First", "Second", "Third"] {
        ContactMessageRepo::create(&pool, &new_contact(name)).await.unwrap();
    }

    let page: Vec<String> = ContactMessageRepo::list(&pool, 2, 0)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(page, vec!["Third", "Second"]);

    let rest = ContactMessageRepo::list(&pool, 2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].name, "First");
}

// ---------------------------------------------------------------------------
// Newsletter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_subscribe_is_insert_if_absent(pool: PgPool) {
    let first = NewsletterRepo::subscribe(&pool, "reader@example.com").await.unwrap();
    assert_matches!(first, SubscribeOutcome::Inserted(ref row) if row.email == "reader@example.com" && row.is_active);

    let second = NewsletterRepo::subscribe(&pool, "reader@example.com").await.unwrap();
    assert_matches!(second, SubscribeOutcome::AlreadySubscribed);

    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM newsletter_subscribers WHERE email = $1")
            .bind("reader@example.com")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_subscribe_normalises_case(pool: PgPool) {
    NewsletterRepo::subscribe(&pool, "Reader@Example.com").await.unwrap();
    let again = NewsletterRepo::subscribe(&pool, "  reader@example.COM ").await.unwrap();
    assert_matches!(again, SubscribeOutcome::AlreadySubscribed);

    let row = NewsletterRepo::find_by_email(&pool, "READER@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.email, "reader@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_duplicate_subscriptions_yield_one_row(pool: PgPool) {
    let (a, b) = tokio::join!(
        NewsletterRepo::subscribe(&pool, "race@example.com"),
        NewsletterRepo::subscribe(&pool, "race@example.com"),
    );
    let inserted = [a.unwrap(), b.unwrap()]
        .iter()
        .filter(|o| matches!(o, SubscribeOutcome::Inserted(_)))
        .count();
    assert_eq!(inserted, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_subscriber_listing_skips_inactive_by_default(pool: PgPool) {
    NewsletterRepo::subscribe(&pool, "active@example.com").await.unwrap();
    NewsletterRepo::subscribe(&pool, "gone@example.com").await.unwrap();
    sqlx::query("UPDATE newsletter_subscribers SET is_active = false WHERE email = $1")
        .bind("gone@example.com")
        .execute(&pool)
        .await
        .unwrap();

    let active = NewsletterRepo::list(&pool, 10, 0, false).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].email, "active@example.com");

    let all = NewsletterRepo::list(&pool, 10, 0, true).await.unwrap();
    assert_eq!(all.len(), 2);
}

// ---------------------------------------------------------------------------
// Internship applications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_application_defaults_to_pending(pool: PgPool) {
    let row = InternshipApplicationRepo::create(&pool, &new_application("Kiran"))
        .await
        .unwrap();
    assert_eq!(row.status, "pending");
    assert!(row.phone.is_none(), "whitespace-only phone should be NULL");
    assert!(row.experience.is_none());
    assert_eq!(row.resume.as_deref(), Some("https://drive.example.com/cv.pdf"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_application_status_filter(pool: PgPool) {
    let a = InternshipApplicationRepo::create(&pool, &new_application("Kiran"))
        .await
        .unwrap();
    InternshipApplicationRepo::create(&pool, &new_application("Meera"))
        .await
        .unwrap();
    sqlx::query("UPDATE internship_applications SET status = 'accepted' WHERE id = $1")
        .bind(a.id)
        .execute(&pool)
        .await
        .unwrap();

    let pending = InternshipApplicationRepo::list(&pool, 10, 0, Some("pending"))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].name, "Meera");

    let all = InternshipApplicationRepo::list(&pool, 10, 0, None).await.unwrap();
    assert_eq!(all.len(), 2);
}
