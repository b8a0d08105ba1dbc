use crate::domain::model::{AreaNode, FetchOutcome, ResumeCursor};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side of the remote vacancy service: one page of search results at a
/// time, plus the region tree used by the multi-region run.
#[async_trait]
pub trait VacancyApi: Send + Sync {
    async fn search(&self, query: &str, area: &str, page: u32, per_page: u32)
        -> Result<FetchOutcome>;

    async fn area_tree(&self, root_id: &str) -> Result<AreaNode>;
}

/// Persistence for the resume cursor. `load` must return the default cursor
/// when no record exists; `save` overwrites unconditionally and must be
/// durable before the next page fetch starts.
pub trait ProgressStore: Send + Sync {
    fn load(&self) -> Result<ResumeCursor>;
    fn save(&self, cursor: &ResumeCursor) -> Result<()>;
}
