//! Database queries for users.

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use crate::entity::user::{self, Entity as User};
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// Find a user by email for credential comparison.
    ///
    /// Exact match: case-sensitive, no trimming. Returns the full record
    /// including the password. Email is a de facto natural key, so at most
    /// one row is expected.
    pub async fn find_user_by_email(&self, email: &str) -> AppResult<Option<user::Model>> {
        let result = User::find()
            .filter(user::Column::Email.eq(email))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to find user: {e}")))?;

        Ok(result)
    }

    /// Seed the default admin account when the table is empty.
    ///
    /// Runs at startup only. Returns true if the seed row was inserted.
    pub async fn seed_default_admin(&self) -> AppResult<bool> {
        let total = User::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count users: {e}")))?;

        if total > 0 {
            return Ok(false);
        }

        let model = user::ActiveModel {
            email: Set("admin".to_string()),
            password: Set("admin".to_string()),
            ..Default::default()
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to seed admin user: {e}")))?;

        tracing::info!("Seeded default admin user (email: admin, password: admin)");
        Ok(true)
    }
}
