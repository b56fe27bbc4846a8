use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: String,
    #[prop_or(AttrValue::Static("Something went wrong"))]
    pub title: AttrValue,
    /// Shows a retry button when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline panel shown in place of content that failed to load.
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <div class="error-message" role="alert">
            <strong>{ &props.title }</strong>
            <p>{ &props.message }</p>
            if let Some(retry) = props.on_retry.clone() {
                <button class="btn-secondary-small" onclick={Callback::from(move |_: MouseEvent| retry.emit(()))}>
                    { "Retry" }
                </button>
            }
        </div>
    }
}
