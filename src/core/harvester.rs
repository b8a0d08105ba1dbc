use crate::core::filter::FilterPolicy;
use crate::core::regions::enumerate_regions;
use crate::domain::model::{FetchOutcome, ResumeCursor, Vacancy, VacancyRow};
use crate::domain::ports::{ProgressStore, VacancyApi};
use crate::utils::error::{HarvestError, Result};
use std::time::Duration;

const DEFAULT_PER_PAGE: u32 = 100;
const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Why one region's page loop ended. Only `Failed` carries an error; the
/// other variants are expected terminal conditions.
#[derive(Debug)]
enum RegionStop {
    /// An empty page: the search is exhausted for this region.
    Exhausted,
    /// The API refused to serve further pages.
    PageLimit,
    /// The API forbids this region.
    Denied,
    Failed(HarvestError),
}

/// Sequential fetch-filter-resume driver. One outstanding request at a time,
/// a fixed pause between pages, and a cursor write after every processed
/// page so a rerun picks up at the next unfetched page.
pub struct Harvester<A: VacancyApi, P: ProgressStore> {
    api: A,
    progress: P,
    policy: FilterPolicy,
    query: String,
    per_page: u32,
    page_delay: Duration,
}

impl<A: VacancyApi, P: ProgressStore> Harvester<A, P> {
    pub fn new(api: A, progress: P, policy: FilterPolicy, query: impl Into<String>) -> Self {
        Self {
            api,
            progress,
            policy,
            query: query.into(),
            per_page: DEFAULT_PER_PAGE,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Harvests a single fixed region, resuming from the persisted page.
    /// Transport failures propagate after the cursor has been saved.
    pub async fn run_single(&self, area_id: &str) -> Result<Vec<VacancyRow>> {
        let cursor = self.progress.load()?;
        if cursor.page > 0 {
            tracing::info!("Resuming area {} from page {}", area_id, cursor.page);
        }

        let mut rows = Vec::new();
        match self.drain_region(0, area_id, cursor.page, &mut rows).await {
            RegionStop::Failed(e) => Err(e),
            stop => {
                tracing::debug!("Area {} finished: {:?}", area_id, stop);
                Ok(rows)
            }
        }
    }

    /// Harvests every leaf region under `root_id` in depth-first order.
    /// Fully-completed regions are skipped on restart via the persisted
    /// region index; only the current region resumes mid-pagination. A
    /// failing region is reported and the run moves on to the next one.
    pub async fn run_tree(&self, root_id: &str) -> Result<Vec<VacancyRow>> {
        let regions = enumerate_regions(&self.api, root_id).await?;
        let cursor = self.progress.load()?;
        if cursor.region > 0 {
            tracing::info!(
                "Resuming run at region {}/{}, page {}",
                cursor.region,
                regions.len(),
                cursor.page
            );
        }

        let mut rows = Vec::new();
        for (index, region) in regions.iter().enumerate() {
            if index < cursor.region {
                continue;
            }
            let start_page = if index == cursor.region { cursor.page } else { 0 };

            tracing::info!(
                "Searching region {} ({}) [{}/{}]",
                region.name,
                region.id,
                index + 1,
                regions.len()
            );

            match self
                .drain_region(index, &region.id, start_page, &mut rows)
                .await
            {
                RegionStop::Exhausted => {}
                RegionStop::PageLimit => {
                    tracing::info!("Page limit reached for region {}", region.name);
                }
                RegionStop::Denied => {
                    tracing::warn!("Search forbidden for region {}, skipping", region.name);
                }
                RegionStop::Failed(e) => {
                    tracing::error!("Region {} aborted: {}", region.name, e);
                    continue;
                }
            }

            // Region done, point the cursor past it so a restart skips it.
            self.progress.save(&ResumeCursor {
                region: index + 1,
                page: 0,
            })?;
        }

        Ok(rows)
    }

    async fn drain_region(
        &self,
        region_index: usize,
        area_id: &str,
        start_page: u32,
        rows: &mut Vec<VacancyRow>,
    ) -> RegionStop {
        let mut page = start_page;

        loop {
            let outcome = self
                .api
                .search(&self.query, area_id, page, self.per_page)
                .await;

            let items = match outcome {
                Ok(FetchOutcome::PageLimitReached) => {
                    tracing::info!("API page limit hit at page {} (area {})", page, area_id);
                    return RegionStop::PageLimit;
                }
                Ok(FetchOutcome::AccessDenied) => return RegionStop::Denied,
                Err(e) => {
                    // The failed page stays unfetched; save it so a restart
                    // retries exactly here.
                    let cursor = ResumeCursor {
                        region: region_index,
                        page,
                    };
                    if let Err(save_err) = self.progress.save(&cursor) {
                        tracing::error!("Failed to persist cursor after error: {}", save_err);
                    }
                    return RegionStop::Failed(e);
                }
                Ok(FetchOutcome::Page(items)) => items,
            };

            if items.is_empty() {
                return RegionStop::Exhausted;
            }

            let mut accepted = 0usize;
            for item in items {
                match serde_json::from_value::<Vacancy>(item) {
                    Ok(vacancy) => {
                        if self.policy.is_relevant(&vacancy) {
                            rows.push(VacancyRow::from(&vacancy));
                            accepted += 1;
                        }
                    }
                    Err(e) => tracing::warn!("Skipping malformed vacancy: {}", e),
                }
            }
            tracing::debug!("Page {} (area {}): {} accepted", page, area_id, accepted);

            page += 1;
            let cursor = ResumeCursor {
                region: region_index,
                page,
            };
            if let Err(e) = self.progress.save(&cursor) {
                return RegionStop::Failed(e);
            }

            tokio::time::sleep(self.page_delay).await;
        }
    }
}
