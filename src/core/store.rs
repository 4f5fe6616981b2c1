use crate::domain::model::Vacancy;
use crate::domain::ports::Storage;
use crate::utils::error::{AggError, Result};
use std::cmp::Reverse;

/// Collapses a human-entered keyword onto its storage key: lowercase,
/// alphanumerics only. "Python", "PYTHON" and "python!" share one key.
pub fn storage_key(keyword: &str) -> String {
    keyword
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Keyword-addressed persistence of normalized vacancies: one JSON file
/// per storage key, fully replaced on every write. A crash mid-write can
/// leave the previous or a truncated file, never a merged one.
pub struct VacancyStore<S: Storage> {
    storage: S,
}

impl<S: Storage> VacancyStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn file_name(keyword: &str) -> String {
        format!("{}.json", storage_key(keyword))
    }

    /// Persists `records` under the keyword, replacing any previous set.
    pub async fn insert(&self, keyword: &str, records: &[Vacancy]) -> Result<()> {
        let data = serde_json::to_vec_pretty(records)?;
        self.storage.write_file(&Self::file_name(keyword), &data).await
    }

    /// Loads the full record set in persisted order.
    pub async fn select(&self, keyword: &str) -> Result<Vec<Vacancy>> {
        let data = match self.storage.read_file(&Self::file_name(keyword)).await {
            Ok(data) => data,
            Err(AggError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AggError::NotFound {
                    keyword: keyword.to_string(),
                })
            }
            Err(e) => return Err(e),
        };
        Ok(serde_json::from_slice(&data)?)
    }

    /// Ascending by minimum salary. Records without a minimum sort last,
    /// as if their minimum were the largest possible value; ties keep
    /// their persisted order.
    pub async fn sorted_by_salary_asc(&self, keyword: &str) -> Result<Vec<Vacancy>> {
        let mut records = self.select(keyword).await?;
        records.sort_by_key(|v| (v.salary_from.is_none(), v.salary_from.unwrap_or(0)));
        Ok(records)
    }

    /// Descending by minimum salary. Records without a minimum still
    /// sort last; among known minimums the order is the exact reverse of
    /// the ascending view.
    pub async fn sorted_by_salary_desc(&self, keyword: &str) -> Result<Vec<Vacancy>> {
        let mut records = self.select(keyword).await?;
        records.sort_by_key(|v| (v.salary_from.is_none(), Reverse(v.salary_from.unwrap_or(0))));
        Ok(records)
    }

    /// Removes the record at the zero-based position in persisted order
    /// and writes the reduced set back.
    ///
    /// Deletion is positional, not by id: provider ids are only unique
    /// per provider, and a position shown by a sorted view does not match
    /// the persisted position. Callers must index the `select` order.
    pub async fn delete_at(&self, keyword: &str, index: usize) -> Result<()> {
        let mut records = self.select(keyword).await?;
        if index >= records.len() {
            return Err(AggError::IndexOutOfRange {
                index,
                len: records.len(),
            });
        }
        records.remove(index);
        self.insert(keyword, &records).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_folds_case_and_punctuation() {
        assert_eq!(storage_key("Python"), "python");
        assert_eq!(storage_key("PYTHON"), "python");
        assert_eq!(storage_key("C++ developer"), "cdeveloper");
    }

    #[test]
    fn storage_key_keeps_non_ascii_letters() {
        assert_eq!(storage_key("Питон"), "питон");
        assert_ne!(storage_key("Питон"), storage_key("Раст"));
    }
}
