use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use gatehouse_core::{Account, AccountStore, AccountStoreError, Email, NewAccount};

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: sqlx::PgPool,
}

impl PostgresAccountStore {
    #[must_use]
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn insert(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let id = Uuid::new_v4();
        let (name, email, password_hash) = account.into_parts();

        let query = sqlx::query(
            r#"
                INSERT INTO accounts (id, name, email, password_hash)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(&name)
        .bind(email.as_ref().expose_secret())
        .bind(password_hash.as_ref().map(|hash| hash.expose_secret().clone()));

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return AccountStoreError::AlreadyExists;
                }
            }
            AccountStoreError::Unexpected(e.to_string())
        })?;

        Ok(Account::new(id, name, email, password_hash))
    }

    #[tracing::instrument(name = "Looking up account in PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, password_hash
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;

        row.map(|row| account_from_row(&row)).transpose()
    }

    #[tracing::instrument(name = "Listing accounts in PostgreSQL", skip_all)]
    async fn list(&self) -> Result<Vec<Account>, AccountStoreError> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, email, password_hash
                FROM accounts
                ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;

        rows.iter().map(account_from_row).collect()
    }

    #[tracing::instrument(name = "Deleting account from PostgreSQL", skip_all)]
    async fn delete_by_email(&self, email: &Email) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::NotFound);
        }

        Ok(())
    }
}

fn account_from_row(row: &PgRow) -> Result<Account, AccountStoreError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;
    let password_hash: Option<String> = row
        .try_get("password_hash")
        .map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;

    let email = Email::try_from(Secret::from(email))
        .map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;

    Ok(Account::new(
        id,
        name,
        email,
        password_hash.map(Secret::from),
    ))
}
