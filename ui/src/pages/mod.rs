pub mod auth;
pub mod landing;

pub use auth::AuthPage;
pub use landing::LandingPage;
