use serde::{Deserialize, Serialize};
use std::fmt;

/// A vacancy normalized into the shape shared by every provider.
///
/// `id` is the provider-native identifier and is unique only within one
/// provider's namespace; two providers may emit the same numeric id.
/// Salary bounds are expressed in rubles; `None` means the provider
/// omitted the bound or reported 0. No ordering between `salary_from`
/// and `salary_to` is enforced, provider data may be inconsistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: String,
    pub title: String,
    pub url: String,
    pub salary_from: Option<u64>,
    pub salary_to: Option<u64>,
    pub employer: String,
    #[serde(rename = "api")]
    pub source: String,
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vacancy \"id: {}\"", self.id)?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Employer: {}", self.employer)?;
        match (self.salary_from, self.salary_to) {
            (None, None) => writeln!(f, "Salary: not specified")?,
            (from, to) => {
                write!(f, "Salary:")?;
                if let Some(from) = from {
                    write!(f, " from {}", from)?;
                }
                if let Some(to) = to {
                    write!(f, " to {}", to)?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f, "URL: {}", self.url)?;
        write!(f, "Source: {}", self.source)
    }
}
