pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::local::LocalStorage;
pub use config::{CliConfig, ProviderSelection};
pub use core::pagination::PaginationDriver;
pub use core::providers::{HeadHunterClient, SuperjobClient, APPROX_RUB_RATE};
pub use core::store::VacancyStore;
pub use domain::model::Vacancy;
pub use domain::ports::{ProviderClient, Storage};
pub use utils::error::{AggError, Result};
