use crate::hooks::{use_shared, SharedState};
use crate::models::toast::{ToastKind, ToastQueue, TOAST_SHOW_DELAY_MS};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Handle to the toast queue of the nearest `ToastProvider`.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    queue: SharedState<ToastQueue>,
    default_duration_ms: u32,
}

impl ToastHandle {
    /// Handle used outside any provider: messages only go to the log.
    fn detached() -> Self {
        Self {
            queue: SharedState::detached(ToastQueue::new()),
            default_duration_ms: 0,
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.show_for(message, kind, self.default_duration_ms);
    }

    pub fn show_for(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) {
        let message = message.into();
        if duration_ms == 0 {
            log::info!("toast ({:?}): {}", kind, message);
            return;
        }
        let id = self.queue.update(|q| q.push(message, kind, duration_ms));

        let reveal = self.queue.clone();
        Timeout::new(TOAST_SHOW_DELAY_MS, move || reveal.update(|q| q.reveal(id))).forget();

        let expire = self.clone();
        Timeout::new(duration_ms, move || expire.dismiss(id)).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Warning);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_else(ToastHandle::detached)
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub duration_ms: u32,
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_shared(ToastQueue::new);

    let handle = ToastHandle {
        queue: queue.clone(),
        default_duration_ms: props.duration_ms,
    };

    let toasts = queue.get().toasts().to_vec();

    html! {
        <ContextProvider<ToastHandle> context={handle.clone()}>
            {for props.children.iter()}
            if !toasts.is_empty() {
                <div class="toast-container">
                    { for toasts.into_iter().map(|toast| {
                        let on_close = {
                            let handle = handle.clone();
                            let id = toast.id;
                            Callback::from(move |_: MouseEvent| handle.dismiss(id))
                        };
                        let class = classes!(toast.kind.class(), toast.visible.then_some("show"));
                        html! {
                            <div class={class} key={toast.id} role="status">
                                <span class="toast-icon">{ toast.kind.icon() }</span>
                                <span class="toast-message">{ &toast.message }</span>
                                <button class="toast-close" onclick={on_close}>{ "×" }</button>
                            </div>
                        }
                    })}
                </div>
            }
        </ContextProvider<ToastHandle>>
    }
}
