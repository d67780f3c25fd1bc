use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::AuthForm;
use crate::state::{Mode, State};

/// Shared chrome around the credentials form: logo, title, the link that
/// swaps between login and signup, and the way back to the landing page.
#[function_component]
pub fn AuthPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let is_signup = state.mode == Mode::Signup;

    let toggle_mode = {
        let dispatch = dispatch.clone();
        let target = if is_signup { Mode::Login } else { Mode::Signup };
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|s| s.open(target));
        })
    };

    let back_to_landing = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|s| s.open(Mode::Landing));
        })
    };

    let (toggle_text, toggle_link_text) = if is_signup {
        ("Already have an account?", "Sign in")
    } else {
        ("Don't have an account?", "Create one")
    };

    html! {
        <div class="min-h-screen bg-white flex items-center justify-center px-6">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <div class="w-12 h-12 bg-blue-600 rounded-full flex items-center justify-center mx-auto mb-4">
                        <span class="text-white font-bold text-xl">{"L"}</span>
                    </div>
                    if is_signup {
                        <h1 class="text-3xl font-bold text-gray-900 mb-2">
                            {"Create your LitMail account"}
                        </h1>
                    } else {
                        <h1 class="text-3xl font-bold text-gray-900 mb-2">
                            {"Sign in"}
                        </h1>
                        <p class="text-gray-600">{"to LitMail"}</p>
                    }
                </div>

                <AuthForm />

                <div class="mt-6 text-center">
                    <p class="text-gray-600">
                        {toggle_text}
                        {" "}
                        <button
                            onclick={toggle_mode}
                            class="text-blue-600 font-semibold hover:underline"
                        >
                            {toggle_link_text}
                        </button>
                    </p>
                </div>

                <button
                    onclick={back_to_landing}
                    class="w-full mt-4 py-2 text-gray-700 hover:bg-gray-100 rounded-lg font-medium"
                >
                    {"← Back"}
                </button>
            </div>
        </div>
    }
}
