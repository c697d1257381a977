mod realization_api_client;

pub use realization_api_client::{FetchSession, RealizationApiClient};
