use crate::domain::model::VacancyRow;
use crate::utils::error::Result;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Writes accepted vacancies as CSV with the fixed column set
/// {name, employer, area, experience, salary_from, salary_to,
/// salary_currency, url}, derived from the row struct itself.
pub fn save_to_csv(rows: &[VacancyRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} vacancies to {}", rows.len(), path.display());
    Ok(())
}

/// Output path for one run, dated so consecutive runs do not clobber each
/// other's exports.
pub fn dated_csv_path(output_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    output_dir.join(format!("vacancies_{}.csv", date))
}

/// Line-oriented console output, one accepted vacancy per line.
pub fn print_rows(rows: &[VacancyRow]) {
    for row in rows {
        println!("{} | {} | {} | {}", row.name, row.employer, row.area, row.url);
    }
}
