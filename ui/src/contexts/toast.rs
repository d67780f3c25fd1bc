use std::collections::HashMap;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ToastType {
    #[allow(dead_code)]
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(8000),
        }
    }

    #[allow(dead_code)]
    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastType::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: HashMap<Uuid, Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(
        self: std::rc::Rc<Self>,
        action: Self::Action,
    ) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => {
                toasts.insert(toast.id, toast);
            }
            ToastAction::Remove(id) => {
                toasts.remove(&id);
            }
        }

        std::rc::Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;
        let context = self.context.clone();

        self.context.dispatch(ToastAction::Add(toast));

        // Set up auto-dismiss if duration is specified
        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    #[allow(dead_code)]
    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::error(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message.into()));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}
