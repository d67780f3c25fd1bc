use payloads::APIClient;
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to the API client. Built once at startup from
/// [`crate::api_url`] and injected into the tree; components never
/// construct their own client or re-read the configuration.
#[derive(Clone)]
pub struct ApiHandle(Rc<APIClient>);

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for ApiHandle {
    type Target = APIClient;

    fn deref(&self) -> &APIClient {
        &self.0
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ApiProvider(props: &ApiProviderProps) -> Html {
    let client = use_memo((), |_| APIClient {
        address: crate::api_url(),
        inner_client: reqwest::Client::new(),
    });

    html! {
        <ContextProvider<ApiHandle> context={ApiHandle(client)}>
            {props.children.clone()}
        </ContextProvider<ApiHandle>>
    }
}

#[hook]
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
        .expect("use_api must be used within an ApiProvider")
}
