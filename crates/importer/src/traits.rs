use crate::Result;

/// Where results pages come from. The HTTP client is one implementation;
/// tests and offline tools supply their own.
#[async_trait::async_trait]
pub trait ResultsSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}
