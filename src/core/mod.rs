pub mod filter;
pub mod harvester;
pub mod regions;

pub use crate::domain::model::{FetchOutcome, Region, ResumeCursor, Vacancy, VacancyRow};
pub use crate::domain::ports::{ProgressStore, VacancyApi};
pub use crate::utils::error::Result;
