use crate::domain::ports::ProviderClient;
use crate::utils::error::Result;

/// Drives a [`ProviderClient`] through a fixed number of pages, strictly
/// sequentially: page N+1 is never requested before page N has been
/// fetched and buffered.
pub struct PaginationDriver {
    page_count: u32,
}

impl PaginationDriver {
    pub fn new(page_count: u32) -> Self {
        Self { page_count }
    }

    /// Fetches pages until the client's page index reaches the requested
    /// count, returning the total number of buffered raw items.
    ///
    /// A failed fetch aborts the run for this client with no retry; pages
    /// buffered before the failure stay in the client and can still be
    /// normalized by the caller.
    pub async fn run(&self, client: &mut dyn ProviderClient) -> Result<usize> {
        while client.page() < self.page_count {
            tracing::info!(
                "{}: fetching page {} of {}",
                client.label(),
                client.page() + 1,
                self.page_count
            );
            let items = client.fetch_page().await?;
            tracing::info!("{}: found {} vacancies", client.label(), items.len());
            client.buffer(items);
            client.advance();
        }
        Ok(client.raw_count())
    }
}
