use async_trait::async_trait;
use uuid::Uuid;

use super::PostgresRepository;
use crate::models::{CreateRegionRequest, Region, UpdateRegionRequest};

const REGION_COLUMNS: &str = "id, country_id, name, code, created_by, created_at, updated_at";

#[async_trait]
pub trait RegionRepo: Send + Sync {
    /// Full listing, optionally narrowed to one country.
    async fn list_regions(&self, country: Option<Uuid>) -> Vec<Region>;
    async fn get_region(&self, id: Uuid) -> Option<Region>;
    async fn create_region(&self, req: CreateRegionRequest, created_by: Uuid) -> Option<Region>;
    async fn update_region(
        &self,
        id: Uuid,
        req: UpdateRegionRequest,
        owner: Option<Uuid>,
    ) -> Option<Region>;
    async fn delete_region(&self, id: Uuid, owner: Option<Uuid>) -> bool;
}

#[async_trait]
impl RegionRepo for PostgresRepository {
    async fn list_regions(&self, country: Option<Uuid>) -> Vec<Region> {
        let sql = format!(
            "SELECT {} FROM regions WHERE ($1::uuid IS NULL OR country_id = $1) ORDER BY name ASC",
            REGION_COLUMNS
        );
        sqlx::query_as::<_, Region>(&sql)
            .bind(country)
            .fetch_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("list_regions error: {:?}", e);
                Vec::new()
            })
    }

    async fn get_region(&self, id: Uuid) -> Option<Region> {
        let sql = format!("SELECT {} FROM regions WHERE id = $1", REGION_COLUMNS);
        sqlx::query_as::<_, Region>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_region error: {:?}", e);
                None
            })
    }

    async fn create_region(&self, req: CreateRegionRequest, created_by: Uuid) -> Option<Region> {
        let sql = format!(
            "INSERT INTO regions (id, country_id, name, code, created_by, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW()) RETURNING {}",
            REGION_COLUMNS
        );
        sqlx::query_as::<_, Region>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.country_id)
            .bind(req.name)
            .bind(req.code)
            .bind(created_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| tracing::error!("create_region error: {:?}", e))
            .ok()
    }

    async fn update_region(
        &self,
        id: Uuid,
        req: UpdateRegionRequest,
        owner: Option<Uuid>,
    ) -> Option<Region> {
        let sql = format!(
            "UPDATE regions \
             SET name = COALESCE($3, name), code = COALESCE($4, code), updated_at = NOW() \
             WHERE id = $1 AND ($2::uuid IS NULL OR created_by = $2) RETURNING {}",
            REGION_COLUMNS
        );
        sqlx::query_as::<_, Region>(&sql)
            .bind(id)
            .bind(owner)
            .bind(req.name)
            .bind(req.code)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("update_region error: {:?}", e);
                None
            })
    }

    async fn delete_region(&self, id: Uuid, owner: Option<Uuid>) -> bool {
        match sqlx::query(
            "DELETE FROM regions WHERE id = $1 AND ($2::uuid IS NULL OR created_by = $2)",
        )
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_region error: {:?}", e);
                false
            }
        }
    }
}
