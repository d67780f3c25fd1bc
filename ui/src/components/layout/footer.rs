use yew::prelude::*;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="border-t border-gray-200">
            <div class="max-w-6xl mx-auto px-6 py-6 flex justify-between items-center text-sm text-gray-600">
                <p>{"© 2026 LitMail"}</p>
                <div class="flex gap-6">
                    <a href="#" class="hover:text-gray-900">{"About"}</a>
                    <a href="#" class="hover:text-gray-900">{"Privacy"}</a>
                    <a href="#" class="hover:text-gray-900">{"Terms"}</a>
                </div>
            </div>
        </footer>
    }
}
