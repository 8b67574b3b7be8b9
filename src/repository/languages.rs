use async_trait::async_trait;
use uuid::Uuid;

use super::PostgresRepository;
use crate::models::{CreateLanguageRequest, Language, UpdateLanguageRequest};

const LANGUAGE_COLUMNS: &str = "id, name, code, created_by, created_at, updated_at";

#[async_trait]
pub trait LanguageRepo: Send + Sync {
    async fn list_languages(&self) -> Vec<Language>;
    async fn get_language(&self, id: Uuid) -> Option<Language>;
    async fn create_language(
        &self,
        req: CreateLanguageRequest,
        created_by: Uuid,
    ) -> Option<Language>;
    async fn update_language(
        &self,
        id: Uuid,
        req: UpdateLanguageRequest,
        owner: Option<Uuid>,
    ) -> Option<Language>;
    async fn delete_language(&self, id: Uuid, owner: Option<Uuid>) -> bool;
}

#[async_trait]
impl LanguageRepo for PostgresRepository {
    async fn list_languages(&self) -> Vec<Language> {
        let sql = format!("SELECT {} FROM languages ORDER BY name ASC", LANGUAGE_COLUMNS);
        sqlx::query_as::<_, Language>(&sql)
            .fetch_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("list_languages error: {:?}", e);
                Vec::new()
            })
    }

    async fn get_language(&self, id: Uuid) -> Option<Language> {
        let sql = format!("SELECT {} FROM languages WHERE id = $1", LANGUAGE_COLUMNS);
        sqlx::query_as::<_, Language>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_language error: {:?}", e);
                None
            })
    }

    async fn create_language(
        &self,
        req: CreateLanguageRequest,
        created_by: Uuid,
    ) -> Option<Language> {
        let sql = format!(
            "INSERT INTO languages (id, name, code, created_by, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, NOW(), NOW()) RETURNING {}",
            LANGUAGE_COLUMNS
        );
        sqlx::query_as::<_, Language>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.name)
            .bind(req.code)
            .bind(created_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| tracing::error!("create_language error: {:?}", e))
            .ok()
    }

    async fn update_language(
        &self,
        id: Uuid,
        req: UpdateLanguageRequest,
        owner: Option<Uuid>,
    ) -> Option<Language> {
        let sql = format!(
            "UPDATE languages \
             SET name = COALESCE($3, name), code = COALESCE($4, code), updated_at = NOW() \
             WHERE id = $1 AND ($2::uuid IS NULL OR created_by = $2) RETURNING {}",
            LANGUAGE_COLUMNS
        );
        sqlx::query_as::<_, Language>(&sql)
            .bind(id)
            .bind(owner)
            .bind(req.name)
            .bind(req.code)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("update_language error: {:?}", e);
                None
            })
    }

    async fn delete_language(&self, id: Uuid, owner: Option<Uuid>) -> bool {
        match sqlx::query(
            "DELETE FROM languages WHERE id = $1 AND ($2::uuid IS NULL OR created_by = $2)",
        )
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_language error: {:?}", e);
                false
            }
        }
    }
}
