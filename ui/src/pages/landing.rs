use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::layout::{Footer, Header};
use crate::state::{Mode, State};

/// The marketing page shown before any authentication.
#[function_component]
pub fn LandingPage() -> Html {
    let (_, dispatch) = use_store::<State>();

    let open_signup = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|s| s.open(Mode::Signup));
        })
    };

    html! {
        <div class="min-h-screen bg-white flex flex-col">
            <Header />

            <main class="flex-1 flex items-center justify-center px-6 py-20">
                <div class="max-w-2xl text-center">
                    <h1 class="text-6xl font-bold text-gray-900 mb-6 leading-tight">
                        {"LitMail is the "}
                        <span class="text-blue-600">{"littest mail"}</span>
                    </h1>
                    <p class="text-xl text-gray-600 mb-8">
                        {"Fast, simple, private email. Get your free @litmail.art address today."}
                    </p>
                    <button
                        onclick={open_signup}
                        class="px-8 py-3 bg-blue-600 text-white rounded-lg font-semibold text-lg hover:bg-blue-700 shadow-md hover:shadow-lg transition"
                    >
                        {"Create free account"}
                    </button>
                    <p class="text-sm text-gray-500 mt-4">
                        {"Free forever. No credit card required."}
                    </p>
                </div>
            </main>

            <Footer />
        </div>
    }
}
