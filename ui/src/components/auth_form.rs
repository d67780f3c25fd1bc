use payloads::identity::{self, EMAIL_DOMAIN};
use payloads::requests::AuthCredentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::api::use_api;
use crate::contexts::toast::use_toast;
use crate::session;
use crate::state::{Mode, State};

/// The credentials form shared by the login and signup views. Which
/// variant renders is decided by the current mode; all field mutation
/// goes through the store's transition methods.
#[function_component]
pub fn AuthForm() -> Html {
    let (state, dispatch) = use_store::<State>();
    let api = use_api();
    let toasts = use_toast();

    let on_username_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.reduce_mut(|s| s.set_username(&input.value()));
        })
    };

    let on_password_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.reduce_mut(|s| s.set_password(&input.value()));
        })
    };

    let on_submit = {
        let dispatch = dispatch.clone();
        let api = api.clone();
        let toasts = toasts.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = dispatch.get();
            if !current.can_submit() {
                return;
            }

            let mode = current.mode;
            let credentials = AuthCredentials::for_username(
                &current.username,
                &current.password,
            );
            dispatch.reduce_mut(|s| s.begin_submit());

            let dispatch = dispatch.clone();
            let api = api.clone();
            let toasts = toasts.clone();

            yew::platform::spawn_local(async move {
                match mode {
                    Mode::Signup => match api.signup(&credentials).await {
                        Ok(()) => {
                            tracing::debug!(
                                email = %credentials.email,
                                "account created"
                            );
                            dispatch.reduce_mut(|s| s.finish_signup());
                            toasts.success(format!(
                                "Welcome to LitMail! Your email: {}. \
                                 You can now log in.",
                                credentials.email
                            ));
                        }
                        Err(e) => {
                            tracing::warn!("signup failed: {e}");
                            dispatch.reduce_mut(|s| s.fail(e.to_string()));
                        }
                    },
                    Mode::Login => match api.login(&credentials).await {
                        Ok(body) => {
                            session::store_token(&body.token);
                            session::redirect_to_mail();
                        }
                        Err(e) => {
                            tracing::warn!("login failed: {e}");
                            dispatch.reduce_mut(|s| s.fail(e.to_string()));
                        }
                    },
                    Mode::Landing => {}
                }
            });
        })
    };

    let is_signup = state.mode == Mode::Signup;
    let (username_label, username_placeholder) = if is_signup {
        ("Choose your email", "yourname")
    } else {
        ("Email or username", "you")
    };
    let password_placeholder = if is_signup {
        "Create a strong password"
    } else {
        "Enter your password"
    };
    let submit_label = match (is_signup, state.loading) {
        (true, false) => "Create account",
        (true, true) => "Creating account...",
        (false, false) => "Next",
        (false, true) => "Signing in...",
    };

    html! {
        <form onsubmit={on_submit} class="space-y-4">
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">
                    {username_label}
                </label>
                <div class="flex">
                    <input
                        type="text"
                        required=true
                        value={state.username.clone()}
                        oninput={on_username_input}
                        placeholder={username_placeholder}
                        class="flex-1 px-4 py-3 border border-gray-300 rounded-l-lg focus:outline-none focus:border-blue-500"
                    />
                    <div class="px-4 py-3 bg-gray-100 border border-l-0 border-gray-300 rounded-r-lg flex items-center text-gray-600 font-medium">
                        {format!("@{EMAIL_DOMAIN}")}
                    </div>
                </div>
                if is_signup && !state.username.is_empty() {
                    <p class="text-xs text-gray-500 mt-1">
                        {format!(
                            "Your email: {}",
                            identity::derive_email(&state.username)
                        )}
                    </p>
                }
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">
                    {"Password"}
                </label>
                <input
                    type="password"
                    required=true
                    value={state.password.clone()}
                    oninput={on_password_input}
                    placeholder={password_placeholder}
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:border-blue-500"
                />
                if is_signup {
                    <p class="text-xs text-gray-500 mt-1">
                        {"At least 8 characters"}
                    </p>
                }
            </div>

            if let Some(error) = &state.error {
                <div class="px-4 py-3 bg-red-50 border border-red-200 text-red-700 rounded-lg text-sm">
                    {error}
                </div>
            }

            <button
                type="submit"
                disabled={!state.can_submit()}
                class="w-full py-3 bg-blue-600 text-white rounded-lg font-semibold hover:bg-blue-700 disabled:bg-gray-400 transition"
            >
                {submit_label}
            </button>
        </form>
    }
}
