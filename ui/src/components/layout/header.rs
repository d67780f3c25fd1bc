use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::{Mode, State};

/// Landing-page header: logo plus the two auth entry points.
#[function_component]
pub fn Header() -> Html {
    let (_, dispatch) = use_store::<State>();

    let open_login = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|s| s.open(Mode::Login));
        })
    };

    let open_signup = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|s| s.open(Mode::Signup));
        })
    };

    html! {
        <header class="border-b border-gray-200">
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <div class="flex items-center gap-2">
                    <div class="w-10 h-10 bg-blue-600 rounded-full flex items-center justify-center">
                        <span class="text-white font-bold text-lg">{"L"}</span>
                    </div>
                    <span class="text-2xl font-bold text-gray-900">{"LitMail"}</span>
                </div>
                <div class="flex gap-3">
                    <button
                        onclick={open_login}
                        class="px-6 py-2 text-gray-700 hover:bg-gray-100 rounded-lg font-medium"
                    >
                        {"Sign in"}
                    </button>
                    <button
                        onclick={open_signup}
                        class="px-6 py-2 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700"
                    >
                        {"Create account"}
                    </button>
                </div>
            </div>
        </header>
    }
}
