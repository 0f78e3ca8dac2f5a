//! Profile repository for the `users` collection.
//!
//! One row per identity, keyed by the identity id. Creation from the session
//! gate goes through `create_if_absent` so that a concurrent signup write is
//! never overwritten by the minimal self-heal profile.

use crate::{DbError, Result as DbErrorResult};

use cp_core::{AccountType, Address, Profile, ProfileUpdate};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_COLUMNS: &str = r#"
    SELECT id, account_type, first_name, last_name, middle_name, email, phone,
        house_number, street, created_at, updated_at
    FROM users
"#;

#[derive(Clone)]
pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, user_id: &str) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(profile_from_row).transpose()
    }

    /// Insert the profile unless one already exists for the same identity.
    ///
    /// Returns `true` when this call created the row.
    pub async fn create_if_absent(&self, profile: &Profile) -> DbErrorResult<bool> {
        let (house_number, street) = split_address(profile.address.as_ref());

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    id, account_type, first_name, last_name, middle_name, email, phone,
                    house_number, street, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(&profile.user_id)
        .bind(profile.account_type.as_str())
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.middle_name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(house_number)
        .bind(street)
        .bind(profile.created_at.timestamp())
        .bind(profile.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        let created = result.rows_affected() > 0;
        debug!(
            "create_if_absent users/{}: {}",
            profile.user_id,
            if created { "created" } else { "already present" }
        );

        Ok(created)
    }

    /// Write the whole record, replacing any existing row (signup).
    pub async fn save(&self, profile: &Profile) -> DbErrorResult<()> {
        let (house_number, street) = split_address(profile.address.as_ref());

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, account_type, first_name, last_name, middle_name, email, phone,
                    house_number, street, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    account_type = excluded.account_type,
                    first_name = excluded.first_name,
                    last_name = excluded.last_name,
                    middle_name = excluded.middle_name,
                    email = excluded.email,
                    phone = excluded.phone,
                    house_number = excluded.house_number,
                    street = excluded.street,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(&profile.user_id)
        .bind(profile.account_type.as_str())
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.middle_name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(house_number)
        .bind(street)
        .bind(profile.created_at.timestamp())
        .bind(profile.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Merge the provided fields into an existing profile.
    ///
    /// Returns `false` when no profile exists for `user_id`.
    pub async fn apply_update(&self, user_id: &str, update: &ProfileUpdate) -> DbErrorResult<bool> {
        let (house_number, street) = split_address(update.address.as_ref());
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users SET
                    first_name = COALESCE(?, first_name),
                    last_name = COALESCE(?, last_name),
                    middle_name = COALESCE(?, middle_name),
                    phone = COALESCE(?, phone),
                    house_number = COALESCE(?, house_number),
                    street = COALESCE(?, street),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.middle_name)
        .bind(&update.phone)
        .bind(house_number)
        .bind(street)
        .bind(now)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Change only the role of an existing profile.
    pub async fn set_account_type(
        &self,
        user_id: &str,
        account_type: AccountType,
    ) -> DbErrorResult<bool> {
        let now = Utc::now().timestamp();

        let result = sqlx::query("UPDATE users SET account_type = ?, updated_at = ? WHERE id = ?")
            .bind(account_type.as_str())
            .bind(now)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All profiles with the given role, newest first.
    pub async fn find_by_account_type(
        &self,
        account_type: AccountType,
    ) -> DbErrorResult<Vec<Profile>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE account_type = ? ORDER BY created_at DESC, id"
        ))
        .bind(account_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(profile_from_row).collect()
    }

    pub async fn count_by_account_type(&self, account_type: AccountType) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE account_type = ?")
            .bind(account_type.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn split_address(address: Option<&Address>) -> (Option<&str>, Option<&str>) {
    match address {
        Some(address) => (address.house_number.as_deref(), address.street.as_deref()),
        None => (None, None),
    }
}

#[track_caller]
fn timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in users.{column}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn profile_from_row(row: &SqliteRow) -> DbErrorResult<Profile> {
    let account_type: String = row.try_get("account_type")?;
    let house_number: Option<String> = row.try_get("house_number")?;
    let street: Option<String> = row.try_get("street")?;

    let address = Address {
        house_number,
        street,
    };

    Ok(Profile {
        user_id: row.try_get("id")?,
        account_type: AccountType::from_str(&account_type).map_err(|e| {
            DbError::Initialization {
                message: format!("Invalid AccountType in users.account_type: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        middle_name: row.try_get("middle_name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        address: (!address.is_empty()).then_some(address),
        created_at: timestamp(row.try_get("created_at")?, "created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "updated_at")?,
    })
}
