use async_trait::async_trait;
use sqlx::query_builder::QueryBuilder;
use uuid::Uuid;

use super::PostgresRepository;
use crate::listing::{ListQuery, MOVIE_SORT_COLUMNS, Page, sort_column};
use crate::models::{CreateMovieRequest, Movie, UpdateMovieRequest};

const MOVIE_COLUMNS: &str = "id, title, year, synopsis, country_id, language_id, published, \
                             created_by, created_at, updated_at";

/// MovieRepo
///
/// Persistence contract for the movie entity. Mutating methods take an
/// optional `owner`: `Some(id)` constrains the statement to rows created by
/// that user (the "own" scope), `None` touches any row.
#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// Public listing: published movies only, server-paged, with optional
    /// fuzzy search and year filter.
    async fn list_published(&self, query: &ListQuery, year: Option<i32>) -> Page<Movie>;
    /// Admin listing: every movie regardless of published state.
    async fn list_all(&self, query: &ListQuery) -> Page<Movie>;
    async fn list_by_owner(&self, owner: Uuid) -> Vec<Movie>;

    async fn get_movie(&self, id: Uuid) -> Option<Movie>;
    async fn get_published_movie(&self, id: Uuid) -> Option<Movie>;

    async fn create_movie(&self, req: CreateMovieRequest, created_by: Uuid) -> Option<Movie>;
    async fn update_movie(
        &self,
        id: Uuid,
        req: UpdateMovieRequest,
        owner: Option<Uuid>,
    ) -> Option<Movie>;
    async fn delete_movie(&self, id: Uuid, owner: Option<Uuid>) -> bool;
    /// Moderation toggle, admin only at the handler layer.
    async fn set_published(&self, id: Uuid, published: bool) -> Option<Movie>;
}

impl PostgresRepository {
    /// Shared listing body for the public and admin variants. QueryBuilder
    /// keeps every client-supplied value parameterized; the sort column is
    /// whitelisted before it reaches the query text.
    async fn movie_page(
        &self,
        query: &ListQuery,
        year: Option<i32>,
        published_only: bool,
    ) -> Page<Movie> {
        let base_filter = if published_only {
            " WHERE published = true"
        } else {
            " WHERE true"
        };

        let push_filters = |builder: &mut QueryBuilder<sqlx::Postgres>| {
            if let Some(y) = year {
                builder.push(" AND year = ");
                builder.push_bind(y);
            }
            if let Some(term) = query.search.as_deref().filter(|t| !t.is_empty()) {
                let pattern = format!("%{}%", term);
                builder.push(" AND (title ILIKE ");
                builder.push_bind(pattern.clone());
                builder.push(" OR synopsis ILIKE ");
                builder.push_bind(pattern);
                builder.push(")");
            }
        };

        let mut count_builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT COUNT(*) FROM movies{}", base_filter));
        push_filters(&mut count_builder);

        let total: i64 = match count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
        {
            Ok(total) => total,
            Err(e) => {
                tracing::error!("movie count error: {:?}", e);
                return Page::empty(query.page(), query.per_page());
            }
        };

        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM movies{}",
            MOVIE_COLUMNS, base_filter
        ));
        push_filters(&mut builder);

        let column = sort_column(query.sort.as_deref(), MOVIE_SORT_COLUMNS, "created_at");
        builder.push(format!(" ORDER BY {} {}", column, query.order().as_sql()));
        builder.push(" LIMIT ");
        builder.push_bind(query.per_page());
        builder.push(" OFFSET ");
        builder.push_bind(query.offset());

        match builder.build_query_as::<Movie>().fetch_all(&self.pool).await {
            Ok(items) => Page::new(items, total, query.page(), query.per_page()),
            Err(e) => {
                tracing::error!("movie listing error: {:?}", e);
                Page::empty(query.page(), query.per_page())
            }
        }
    }
}

#[async_trait]
impl MovieRepo for PostgresRepository {
    async fn list_published(&self, query: &ListQuery, year: Option<i32>) -> Page<Movie> {
        self.movie_page(query, year, true).await
    }

    async fn list_all(&self, query: &ListQuery) -> Page<Movie> {
        self.movie_page(query, None, false).await
    }

    async fn list_by_owner(&self, owner: Uuid) -> Vec<Movie> {
        let sql = format!(
            "SELECT {} FROM movies WHERE created_by = $1 ORDER BY created_at DESC",
            MOVIE_COLUMNS
        );
        sqlx::query_as::<_, Movie>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("list_by_owner error: {:?}", e);
                Vec::new()
            })
    }

    async fn get_movie(&self, id: Uuid) -> Option<Movie> {
        let sql = format!("SELECT {} FROM movies WHERE id = $1", MOVIE_COLUMNS);
        sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_movie error: {:?}", e);
                None
            })
    }

    async fn get_published_movie(&self, id: Uuid) -> Option<Movie> {
        let sql = format!(
            "SELECT {} FROM movies WHERE id = $1 AND published = true",
            MOVIE_COLUMNS
        );
        sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_published_movie error: {:?}", e);
                None
            })
    }

    /// New movies always start unpublished and wait for moderation.
    async fn create_movie(&self, req: CreateMovieRequest, created_by: Uuid) -> Option<Movie> {
        let sql = format!(
            "INSERT INTO movies (id, title, year, synopsis, country_id, language_id, published, \
             created_by, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, false, $7, NOW(), NOW()) RETURNING {}",
            MOVIE_COLUMNS
        );
        sqlx::query_as::<_, Movie>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.title)
            .bind(req.year)
            .bind(req.synopsis)
            .bind(req.country_id)
            .bind(req.language_id)
            .bind(created_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| tracing::error!("create_movie error: {:?}", e))
            .ok()
    }

    async fn update_movie(
        &self,
        id: Uuid,
        req: UpdateMovieRequest,
        owner: Option<Uuid>,
    ) -> Option<Movie> {
        let sql = format!(
            "UPDATE movies \
             SET title = COALESCE($3, title), \
                 year = COALESCE($4, year), \
                 synopsis = COALESCE($5, synopsis), \
                 country_id = COALESCE($6, country_id), \
                 language_id = COALESCE($7, language_id), \
                 updated_at = NOW() \
             WHERE id = $1 AND ($2::uuid IS NULL OR created_by = $2) \
             RETURNING {}",
            MOVIE_COLUMNS
        );
        sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .bind(owner)
            .bind(req.title)
            .bind(req.year)
            .bind(req.synopsis)
            .bind(req.country_id)
            .bind(req.language_id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("update_movie error: {:?}", e);
                None
            })
    }

    async fn delete_movie(&self, id: Uuid, owner: Option<Uuid>) -> bool {
        match sqlx::query("DELETE FROM movies WHERE id = $1 AND ($2::uuid IS NULL OR created_by = $2)")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_movie error: {:?}", e);
                false
            }
        }
    }

    async fn set_published(&self, id: Uuid, published: bool) -> Option<Movie> {
        let sql = format!(
            "UPDATE movies SET published = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            MOVIE_COLUMNS
        );
        sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .bind(published)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("set_published error: {:?}", e);
                None
            })
    }
}
