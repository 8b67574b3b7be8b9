use async_trait::async_trait;
use std::str::FromStr;
use uuid::Uuid;

use super::PostgresRepository;
use crate::models::{CatalogStats, Role, User};

const USER_COLUMNS: &str = "id, email, name, password_hash, created_at";

/// UserRepo
///
/// Identity persistence plus role assignments and the dashboard counters.
/// Roles live in the `user_roles` join table and are loaded alongside every
/// user fetch so the auth extractor always sees the current set.
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn get_user(&self, id: Uuid) -> Option<User>;
    async fn get_user_by_email(&self, email: &str) -> Option<User>;
    /// Creates the identity record and its initial role in one transaction.
    async fn create_user(
        &self,
        email: String,
        name: String,
        password_hash: String,
        role: Role,
    ) -> Option<User>;
    async fn list_users(&self) -> Vec<User>;
    /// Replaces the user's entire role set. Returns the updated user, or
    /// `None` if the user does not exist.
    async fn set_user_roles(&self, id: Uuid, roles: Vec<Role>) -> Option<User>;
    async fn get_stats(&self) -> CatalogStats;
}

impl PostgresRepository {
    /// Loads the role set for one user. Unknown strings in the table are
    /// skipped rather than failing the whole fetch.
    async fn load_roles(&self, user_id: Uuid) -> Vec<Role> {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT role FROM user_roles WHERE user_id = $1 ORDER BY role")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .unwrap_or_else(|e| {
                    tracing::error!("load_roles error: {:?}", e);
                    Vec::new()
                });

        rows.iter()
            .filter_map(|name| Role::from_str(name).ok())
            .collect()
    }

    async fn with_roles(&self, user: Option<User>) -> Option<User> {
        match user {
            Some(mut user) => {
                user.roles = self.load_roles(user.id).await;
                Some(user)
            }
            None => None,
        }
    }
}

#[async_trait]
impl UserRepo for PostgresRepository {
    async fn get_user(&self, id: Uuid) -> Option<User> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_user error: {:?}", e);
                None
            });
        self.with_roles(user).await
    }

    async fn get_user_by_email(&self, email: &str) -> Option<User> {
        let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_user_by_email error: {:?}", e);
                None
            });
        self.with_roles(user).await
    }

    async fn create_user(
        &self,
        email: String,
        name: String,
        password_hash: String,
        role: Role,
    ) -> Option<User> {
        let mut tx = match self.pool.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                tracing::error!("create_user begin error: {:?}", e);
                return None;
            }
        };

        let sql = format!(
            "INSERT INTO users (id, email, name, password_hash, created_at) \
             VALUES ($1, $2, $3, $4, NOW()) RETURNING {}",
            USER_COLUMNS
        );
        let user = match sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(email)
            .bind(name)
            .bind(password_hash)
            .fetch_one(&mut *tx)
            .await
        {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("create_user insert error: {:?}", e);
                return None;
            }
        };

        if let Err(e) = sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2)")
            .bind(user.id)
            .bind(role.as_str())
            .execute(&mut *tx)
            .await
        {
            tracing::error!("create_user role error: {:?}", e);
            return None;
        }

        if let Err(e) = tx.commit().await {
            tracing::error!("create_user commit error: {:?}", e);
            return None;
        }

        let mut user = user;
        user.roles = vec![role];
        Some(user)
    }

    async fn list_users(&self) -> Vec<User> {
        let sql = format!("SELECT {} FROM users ORDER BY created_at DESC", USER_COLUMNS);
        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("list_users error: {:?}", e);
                Vec::new()
            });

        let mut out = Vec::with_capacity(users.len());
        for mut user in users {
            user.roles = self.load_roles(user.id).await;
            out.push(user);
        }
        out
    }

    async fn set_user_roles(&self, id: Uuid, roles: Vec<Role>) -> Option<User> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let mut user = match sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(Some(user)) => user,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!("set_user_roles fetch error: {:?}", e);
                return None;
            }
        };

        let mut tx = match self.pool.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                tracing::error!("set_user_roles begin error: {:?}", e);
                return None;
            }
        };

        if let Err(e) = sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
        {
            tracing::error!("set_user_roles clear error: {:?}", e);
            return None;
        }

        for role in &roles {
            if let Err(e) = sqlx::query(
                "INSERT INTO user_roles (user_id, role) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(id)
            .bind(role.as_str())
            .execute(&mut *tx)
            .await
            {
                tracing::error!("set_user_roles insert error: {:?}", e);
                return None;
            }
        }

        if let Err(e) = tx.commit().await {
            tracing::error!("set_user_roles commit error: {:?}", e);
            return None;
        }

        user.roles = roles;
        Some(user)
    }

    async fn get_stats(&self) -> CatalogStats {
        let count = |sql: &'static str| {
            let pool = self.pool.clone();
            async move {
                sqlx::query_scalar::<_, i64>(sql)
                    .fetch_one(&pool)
                    .await
                    .unwrap_or_else(|e| {
                        tracing::error!("stats error ({}): {:?}", sql, e);
                        0
                    })
            }
        };

        CatalogStats {
            total_movies: count("SELECT COUNT(*) FROM movies").await,
            unpublished_movies: count("SELECT COUNT(*) FROM movies WHERE published = false").await,
            total_users: count("SELECT COUNT(*) FROM users").await,
            total_countries: count("SELECT COUNT(*) FROM countries").await,
            total_regions: count("SELECT COUNT(*) FROM regions").await,
            total_languages: count("SELECT COUNT(*) FROM languages").await,
        }
    }
}
