use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, MeetingPlace, Tag};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// Contact repository backed by a SQLite pool.
///
/// The pool is injected at construction and scoped to this repository;
/// nothing here opens the store lazily or through a global handle.
pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    /// Create a new repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Rehydrate the child rows for a contact loaded from `row`.
    async fn load_aggregate(&self, row: &sqlx::sqlite::SqliteRow) -> StoreResult<Contact> {
        let id: String = row.try_get("id")?;

        let tag_rows = sqlx::query(
            "SELECT id, name FROM tags WHERE contact_id = ? ORDER BY position",
        )
        .bind(&id)
        .fetch_all(&self.pool)
        .await?;

        let mut tags = Vec::with_capacity(tag_rows.len());
        for tag_row in &tag_rows {
            tags.push(Tag {
                id: parse_id(tag_row.try_get("id")?)?,
                name: tag_row.try_get("name")?,
            });
        }

        let place_row = sqlx::query(
            "SELECT id, name FROM meeting_places WHERE contact_id = ? LIMIT 1",
        )
        .bind(&id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            StoreError::Other(format!("Contact {} has no meeting place row", id))
        })?;

        let meeting_place = MeetingPlace {
            id: parse_id(place_row.try_get("id")?)?,
            name: place_row.try_get("name")?,
        };

        let created_at: String = row.try_get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| StoreError::Other(format!("Bad created_at timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(Contact {
            id: parse_id(id)?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            middle_name: row.try_get("middle_name")?,
            meeting_context: row.try_get("meeting_context")?,
            aim: row.try_get("aim")?,
            note: row.try_get("note")?,
            avatar: row.try_get("avatar")?,
            tags,
            meeting_place,
            created_at,
        })
    }
}

fn parse_id(raw: String) -> StoreResult<ContactId> {
    ContactId::new(raw).map_err(|e| StoreError::Other(e.to_string()))
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn insert(&self, contact: &Contact) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO contacts
                (id, first_name, last_name, middle_name, meeting_context, aim, note, avatar, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(contact.id.as_str())
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.middle_name)
        .bind(&contact.meeting_context)
        .bind(&contact.aim)
        .bind(&contact.note)
        .bind(contact.avatar.as_deref())
        .bind(contact.created_at.to_rfc3339())
        .execute(&mut *tx)
        .await?;

        for (position, tag) in contact.tags.iter().enumerate() {
            sqlx::query(
                "INSERT INTO tags (id, contact_id, name, position) VALUES (?, ?, ?, ?)",
            )
            .bind(tag.id.as_str())
            .bind(contact.id.as_str())
            .bind(&tag.name)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("INSERT INTO meeting_places (id, contact_id, name) VALUES (?, ?, ?)")
            .bind(contact.meeting_place.id.as_str())
            .bind(contact.id.as_str())
            .bind(&contact.meeting_place.name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(contact_id = %contact.id, tags = contact.tags.len(), "Contact inserted");
        Ok(())
    }

    async fn get(&self, id: &ContactId) -> StoreResult<Contact> {
        let row = sqlx::query("SELECT * FROM contacts WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Contact {}", id)))?;

        self.load_aggregate(&row).await
    }

    async fn list(&self) -> StoreResult<Vec<Contact>> {
        let rows = sqlx::query("SELECT * FROM contacts ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        let mut contacts = Vec::with_capacity(rows.len());
        for row in &rows {
            contacts.push(self.load_aggregate(row).await?);
        }
        Ok(contacts)
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("Contact {}", id)));
        }
        Ok(())
    }

    async fn count_tags(&self) -> StoreResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM tags")
            .fetch_one(&self.pool)
            .await?;
        let n: i64 = row.try_get("n")?;
        Ok(n as u64)
    }

    async fn count_meeting_places(&self) -> StoreResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM meeting_places")
            .fetch_one(&self.pool)
            .await?;
        let n: i64 = row.try_get("n")?;
        Ok(n as u64)
    }
}
