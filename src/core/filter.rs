use crate::domain::model::Vacancy;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Relevance policy for one harvest run. Immutable once built; passed into
/// the harvester instead of living as process-wide constants so tests can
/// run alternative policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPolicy {
    /// Substring that must appear in the lower-cased vacancy text.
    pub query_keyword: String,
    /// Matched as-is against the lower-cased text. Mixed-case entries are
    /// kept from the inherited policy even though they can never match a
    /// lower-cased haystack; normalizing them would change which vacancies
    /// pass, so the list stays verbatim.
    pub exclude_keywords: Vec<String>,
    pub allowed_experience: HashSet<String>,
    pub min_salary: i64,
    pub currency: String,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            query_keyword: "python".to_string(),
            exclude_keywords: [
                "senior", "lead", "тимлид", "руководитель", "архитектор",
                "ml", "machine learning", "data science", "аналитик",
                "java", "c++", "c#", "php", "javascript", "node", "go",
                "ruby", "scala", "kotlin", "swift", "QA", "тестирование",
                "тестированию", "devops", "qa", "технической поддержки",
                "junior", "Специалист поддержки", "второй линии",
                "Системный администратор", "ai", "ai-developer",
                "Помощник системного администратора", "системного администратора",
                "Data Scientist", "тестировщик", "frontend", "Заместитель директора",
                "информационной безопасности", "Трейдер", "Старший администратор",
                "администратор", "админ", "Сетевой администратор", "директор",
                "стажер", "стажёр", "data scientist", "Инженер-сборщик", "трейдер",
                "Инженер-сборщик FPV дронов", "Marketing Data Analyst", "Математик-программист",
                "геофизик", "Геофизик – интерпретатор данных ГИС",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            allowed_experience: HashSet::from(["between1And3".to_string()]),
            min_salary: 140_000,
            currency: "RUR".to_string(),
        }
    }
}

impl FilterPolicy {
    /// Loads policy overrides from a TOML file; fields absent from the file
    /// keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let policy = toml::from_str(&content)?;
        Ok(policy)
    }

    /// Pure predicate over one vacancy. Checks run in a fixed order and
    /// short-circuit on the first failure; missing sub-fields reject rather
    /// than error.
    pub fn is_relevant(&self, vacancy: &Vacancy) -> bool {
        let requirement = vacancy.snippet.requirement.as_deref().unwrap_or("");
        let responsibility = vacancy.snippet.responsibility.as_deref().unwrap_or("");
        let text =
            format!("{} {} {}", vacancy.name, requirement, responsibility).to_lowercase();

        if !text.contains(&self.query_keyword) {
            return false;
        }

        if self
            .exclude_keywords
            .iter()
            .any(|keyword| text.contains(keyword.as_str()))
        {
            return false;
        }

        let Some(experience) = vacancy.experience.as_ref() else {
            return false;
        };
        if !self.allowed_experience.contains(&experience.id) {
            return false;
        }

        let Some(salary) = vacancy.salary.as_ref() else {
            return false;
        };
        if salary.currency.as_deref() != Some(self.currency.as_str()) {
            return false;
        }
        let Some(from) = salary.from else {
            return false;
        };

        from >= self.min_salary
    }
}
