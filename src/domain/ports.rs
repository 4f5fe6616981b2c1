use crate::domain::model::Vacancy;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// One remote vacancy-search provider: paged fetches into a raw buffer,
/// then normalization of the buffered payload into [`Vacancy`] records.
///
/// The page index is mutable fetch state starting at 0. `fetch_page` never
/// touches it; callers pair each fetch with an `advance`. The upper bound
/// is the pagination driver's contract, not the client's.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Tag written into `Vacancy::source`, e.g. "HeadHunter".
    fn label(&self) -> &'static str;

    fn page(&self) -> u32;

    fn advance(&mut self);

    /// Issues one paginated request and returns the provider's raw item
    /// list for the current page.
    async fn fetch_page(&self) -> Result<Vec<serde_json::Value>>;

    /// Appends one fetched page to the raw buffer.
    fn buffer(&mut self, items: Vec<serde_json::Value>);

    fn raw_count(&self) -> usize;

    /// Maps every buffered raw record to one canonical vacancy.
    fn normalize(&self) -> Result<Vec<Vacancy>>;
}
