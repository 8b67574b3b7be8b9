use async_trait::async_trait;
use uuid::Uuid;

use super::PostgresRepository;
use crate::models::{Country, CreateCountryRequest, UpdateCountryRequest};

const COUNTRY_COLUMNS: &str = "id, name, code, created_by, created_at, updated_at";

/// CountryRepo
///
/// Reference tables are small, so listing returns the full set and paging
/// happens in memory at the handler layer.
#[async_trait]
pub trait CountryRepo: Send + Sync {
    async fn list_countries(&self) -> Vec<Country>;
    async fn get_country(&self, id: Uuid) -> Option<Country>;
    async fn create_country(&self, req: CreateCountryRequest, created_by: Uuid) -> Option<Country>;
    async fn update_country(
        &self,
        id: Uuid,
        req: UpdateCountryRequest,
        owner: Option<Uuid>,
    ) -> Option<Country>;
    async fn delete_country(&self, id: Uuid, owner: Option<Uuid>) -> bool;
}

#[async_trait]
impl CountryRepo for PostgresRepository {
    async fn list_countries(&self) -> Vec<Country> {
        let sql = format!("SELECT {} FROM countries ORDER BY name ASC", COUNTRY_COLUMNS);
        sqlx::query_as::<_, Country>(&sql)
            .fetch_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("list_countries error: {:?}", e);
                Vec::new()
            })
    }

    async fn get_country(&self, id: Uuid) -> Option<Country> {
        let sql = format!("SELECT {} FROM countries WHERE id = $1", COUNTRY_COLUMNS);
        sqlx::query_as::<_, Country>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_country error: {:?}", e);
                None
            })
    }

    async fn create_country(&self, req: CreateCountryRequest, created_by: Uuid) -> Option<Country> {
        let sql = format!(
            "INSERT INTO countries (id, name, code, created_by, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, NOW(), NOW()) RETURNING {}",
            COUNTRY_COLUMNS
        );
        sqlx::query_as::<_, Country>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.name)
            .bind(req.code)
            .bind(created_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| tracing::error!("create_country error: {:?}", e))
            .ok()
    }

    async fn update_country(
        &self,
        id: Uuid,
        req: UpdateCountryRequest,
        owner: Option<Uuid>,
    ) -> Option<Country> {
        let sql = format!(
            "UPDATE countries \
             SET name = COALESCE($3, name), code = COALESCE($4, code), updated_at = NOW() \
             WHERE id = $1 AND ($2::uuid IS NULL OR created_by = $2) RETURNING {}",
            COUNTRY_COLUMNS
        );
        sqlx::query_as::<_, Country>(&sql)
            .bind(id)
            .bind(owner)
            .bind(req.name)
            .bind(req.code)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("update_country error: {:?}", e);
                None
            })
    }

    async fn delete_country(&self, id: Uuid, owner: Option<Uuid>) -> bool {
        match sqlx::query(
            "DELETE FROM countries WHERE id = $1 AND ($2::uuid IS NULL OR created_by = $2)",
        )
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_country error: {:?}", e);
                false
            }
        }
    }
}
