pub mod error;
pub mod fetcher;
pub mod urls;

pub use error::FetchError;
pub use fetcher::{Downloader, HttpFetcher};
pub use urls::resolve_url;
