/// Search handler - two-bucket substring search
use crate::error::Result;
use crate::services::SearchService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// Search users and posts. An empty query is rejected; no matches returns
/// empty buckets.
pub async fn search(
    pool: web::Data<PgPool>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse> {
    let service = SearchService::new((**pool).clone());
    let results = service.search(&params.query).await?;

    Ok(HttpResponse::Ok().json(results))
}
