pub mod pagination;
pub mod providers;
pub mod store;

pub use crate::domain::model::Vacancy;
pub use crate::domain::ports::{ProviderClient, Storage};
pub use crate::utils::error::Result;
