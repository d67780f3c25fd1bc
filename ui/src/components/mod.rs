pub mod auth_form;
pub mod layout;
pub mod toast;

pub use auth_form::AuthForm;
pub use toast::ToastContainer;
