use serde::{Deserialize, Serialize};

/// One vacancy as returned by the search API. Only the fields the filter and
/// the export projection need are deserialized; everything else is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct Vacancy {
    pub name: String,
    #[serde(default)]
    pub snippet: Snippet,
    pub employer: Employer,
    pub area: Option<AreaRef>,
    pub experience: Option<Experience>,
    pub salary: Option<Salary>,
    pub alternate_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snippet {
    pub requirement: Option<String>,
    pub responsibility: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Employer {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AreaRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Salary {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub currency: Option<String>,
}

/// Node of the region tree served by the areas API. A node with a non-empty
/// `areas` list is an aggregate; a node with no children is a leaf region.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub areas: Vec<AreaNode>,
}

/// A leaf region, flattened out of the area tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    pub name: String,
}

/// Pointer into the paginated search: index of the region being drained and
/// the next unfetched page within it. Persisted after every page so a rerun
/// resumes instead of restarting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeCursor {
    pub region: usize,
    pub page: u32,
}

/// Result of one search-page request, made explicit instead of driving the
/// caller through status-code exceptions. Transport failures stay `Err`.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Items of one page, kept as raw JSON so a single malformed vacancy can
    /// be skipped without losing the rest of the page.
    Page(Vec<serde_json::Value>),
    /// The API refuses to serve further pages for this query.
    PageLimitReached,
    /// The API forbids searching this region.
    AccessDenied,
}

/// Projection of an accepted vacancy, in export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacancyRow {
    pub name: String,
    pub employer: String,
    pub area: String,
    pub experience: String,
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
    pub salary_currency: Option<String>,
    pub url: String,
}

pub const UNKNOWN_AREA: &str = "Неизвестно";

impl From<&Vacancy> for VacancyRow {
    fn from(vacancy: &Vacancy) -> Self {
        let (salary_from, salary_to, salary_currency) = match &vacancy.salary {
            Some(salary) => (salary.from, salary.to, salary.currency.clone()),
            None => (None, None, None),
        };

        Self {
            name: vacancy.name.clone(),
            employer: vacancy.employer.name.clone(),
            area: vacancy
                .area
                .as_ref()
                .map(|area| area.name.clone())
                .unwrap_or_else(|| UNKNOWN_AREA.to_string()),
            experience: vacancy
                .experience
                .as_ref()
                .map(|experience| experience.id.clone())
                .unwrap_or_default(),
            salary_from,
            salary_to,
            salary_currency,
            url: vacancy.alternate_url.clone(),
        }
    }
}
