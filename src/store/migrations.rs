//! Schema migrations for the contact store.
//!
//! Each migration is safe to call multiple times (idempotent) by using
//! `IF NOT EXISTS` throughout. Child tables reference `contacts(id)` with
//! `ON DELETE CASCADE`: the contact aggregate exclusively owns its tags and
//! meeting place, so removing the root removes the children.

use sqlx::SqlitePool;
use tracing::info;

/// Create the contacts, tags, and meeting_places tables plus their indexes.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            middle_name TEXT NOT NULL,
            meeting_context TEXT NOT NULL,
            aim TEXT NOT NULL,
            note TEXT NOT NULL,
            avatar BLOB,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id TEXT PRIMARY KEY,
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            position INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meeting_places (
            id TEXT PRIMARY KEY,
            contact_id TEXT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Tag order within a contact is the draft's picking order.
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_tags_contact
         ON tags(contact_id, position)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_meeting_places_contact
         ON meeting_places(contact_id)",
    )
    .execute(pool)
    .await?;

    info!("Contact store migration complete");
    Ok(())
}
