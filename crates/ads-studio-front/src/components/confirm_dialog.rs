use yew::prelude::*;

/// What a `ConfirmDialog` asks. The dialog is open while one is set.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmPrompt {
    pub title: AttrValue,
    pub message: String,
    pub confirm_label: AttrValue,
    /// Styles the confirm button as destructive.
    pub danger: bool,
}

impl ConfirmPrompt {
    pub fn destructive(title: &'static str, message: String, confirm_label: &'static str) -> Self {
        Self {
            title: title.into(),
            message,
            confirm_label: confirm_label.into(),
            danger: true,
        }
    }

    pub fn neutral(title: &'static str, message: String, confirm_label: &'static str) -> Self {
        Self {
            danger: false,
            ..Self::destructive(title, message, confirm_label)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub prompt: Option<ConfirmPrompt>,
    pub on_confirm: Callback<()>,
    /// Also fired by a click on the backdrop.
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let Some(prompt) = &props.prompt else {
        return html! {};
    };

    let emit = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={emit(&props.on_cancel)}>
            <div class="modal confirm" role="alertdialog" onclick={|e: MouseEvent| e.stop_propagation()}>
                <h3>{ &prompt.title }</h3>
                <p>{ &prompt.message }</p>
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={emit(&props.on_cancel)}>{ "Cancel" }</button>
                    <button
                        class={if prompt.danger { "btn-danger" } else { "btn-primary" }}
                        onclick={emit(&props.on_confirm)}
                    >
                        { &prompt.confirm_label }
                    </button>
                </div>
            </div>
        </div>
    }
}
