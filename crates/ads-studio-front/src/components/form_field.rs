use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub required: bool,
    /// Validation message; replaces the help text while present.
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub help: Option<AttrValue>,
    pub children: Children,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let hint = match (&props.error, &props.help) {
        (Some(error), _) => html! { <span class="field-error">{ error }</span> },
        (None, Some(help)) => html! { <small class="form-help">{ help }</small> },
        (None, None) => html! {},
    };

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label>
                { &props.label }
                if props.required {
                    <span class="required-mark">{ " *" }</span>
                }
            </label>
            { for props.children.iter() }
            { hint }
        </div>
    }
}
