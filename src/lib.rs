pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::export;
pub use adapters::hh::HhClient;
pub use adapters::progress::FileProgressStore;
pub use config::CliConfig;
pub use crate::core::filter::FilterPolicy;
pub use crate::core::harvester::Harvester;
pub use crate::core::regions::{enumerate_regions, leaf_regions};
pub use domain::model::{AreaNode, FetchOutcome, Region, ResumeCursor, Vacancy, VacancyRow};
pub use domain::ports::{ProgressStore, VacancyApi};
pub use utils::error::{HarvestError, Result};
