use yew::prelude::*;
use yewdux::prelude::*;

mod components;
mod contexts;
mod logs;
mod pages;
mod session;
mod state;

use components::ToastContainer;
use contexts::api::ApiProvider;
use contexts::toast::ToastProvider;
use pages::{AuthPage, LandingPage};
use state::{Mode, State};

/// Base URL for the mail backend, resolved once at startup.
/// Overridable at build time; defaults to the production host.
pub fn api_url() -> String {
    option_env!("API_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| "http://mail.litsuite.app:8000".to_string())
}

/// Initialize logging and mount the app. Entry point for the binary.
pub fn start() {
    logs::init_logging();
    yew::Renderer::<App>::new().render();
}

#[function_component]
pub fn App() -> Html {
    let (state, _) = use_store::<State>();

    html! {
        <ApiProvider>
            <ToastProvider>
                <div class="min-h-screen bg-white text-gray-900">
                    {match state.mode {
                        Mode::Landing => html! { <LandingPage /> },
                        Mode::Login | Mode::Signup => html! { <AuthPage /> },
                    }}
                    <ToastContainer />
                </div>
            </ToastProvider>
        </ApiProvider>
    }
}
