//! Repository for the `customers` table.

use pony_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, organization_name, industry, website, \
    primary_contact_name, primary_contact_email, primary_contact_phone, \
    address, notes, created_at, updated_at";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers
                (organization_name, industry, website, primary_contact_name,
                 primary_contact_email, primary_contact_phone, address, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.organization_name)
            .bind(&input.industry)
            .bind(&input.website)
            .bind(&input.primary_contact_name)
            .bind(&input.primary_contact_email)
            .bind(&input.primary_contact_phone)
            .bind(&input.address)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List customers, paginated, ordered by ID ascending.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Customer>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a customer. Only non-`None` fields in `input` are applied;
    /// `updated_at` is bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET
                organization_name = COALESCE($2, organization_name),
                industry = COALESCE($3, industry),
                website = COALESCE($4, website),
                primary_contact_name = COALESCE($5, primary_contact_name),
                primary_contact_email = COALESCE($6, primary_contact_email),
                primary_contact_phone = COALESCE($7, primary_contact_phone),
                address = COALESCE($8, address),
                notes = COALESCE($9, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.organization_name)
            .bind(&input.industry)
            .bind(&input.website)
            .bind(&input.primary_contact_name)
            .bind(&input.primary_contact_email)
            .bind(&input.primary_contact_phone)
            .bind(&input.address)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer by ID. Returns `true` if a row was removed.
    ///
    /// Dependent events and their summaries are removed by `ON DELETE
    /// CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
