pub mod api;
pub mod app_config;
pub mod preview;

pub use api::{BookingConfirmation, ClientError, HttpListingApi, ListingApi};
pub use app_config::ClientConfig;
pub use preview::{BookingPreview, PreviewError, Quote};
