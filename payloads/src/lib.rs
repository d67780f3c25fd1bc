mod api_client;
pub mod identity;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
