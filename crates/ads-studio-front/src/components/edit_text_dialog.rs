use crate::components::FormField;
use crate::models::approval::TextDraft;
use crate::utils::validation::{validate_ad_name, validate_headline};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditTextDialogProps {
    /// Dialog is shown while a draft is present.
    pub draft: Option<TextDraft>,
    #[prop_or_default]
    pub saving: bool,
    pub on_save: Callback<TextDraft>,
    pub on_close: Callback<()>,
}

#[function_component(EditTextDialog)]
pub fn edit_text_dialog(props: &EditTextDialogProps) -> Html {
    let draft = use_state(|| props.draft.clone().unwrap_or_default());

    {
        let draft = draft.clone();
        use_effect_with(props.draft.clone(), move |incoming| {
            if let Some(incoming) = incoming {
                draft.set(incoming.clone());
            }
            || ()
        });
    }

    if props.draft.is_none() {
        return html! {};
    }

    let field = |apply: fn(&mut TextDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };
    let on_name = field(|d, v| d.name = v);
    let on_headline = field(|d, v| d.headline = v);
    let on_tc = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.tc_text = area.value();
            draft.set(next);
        })
    };

    let name_error = validate_ad_name(&draft.name);
    let headline_error = if draft.headline.trim().is_empty() {
        None
    } else {
        validate_headline(&draft.headline)
    };
    let can_save = !props.saving && draft.is_dirty() && name_error.is_none() && headline_error.is_none();

    let on_save = {
        let draft = draft.clone();
        let callback = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            callback.emit((*draft).clone());
        })
    };
    let on_close = {
        let callback = props.on_close.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={on_close.clone()}>
            <div class="modal-content" onclick={|e: MouseEvent| e.stop_propagation()}>
                <div class="modal-header">
                    <h2>{ "Edit text" }</h2>
                    <button class="close-button" onclick={on_close.clone()}>{ "×" }</button>
                </div>
                <form class="modal-body" onsubmit={on_save}>
                    <FormField label="Name" error={name_error}>
                        <input type="text" value={draft.name.clone()} oninput={on_name} />
                    </FormField>
                    <FormField label="Headline" error={headline_error} help={Some(AttrValue::from("Up to 125 characters"))}>
                        <input type="text" value={draft.headline.clone()} oninput={on_headline} />
                    </FormField>
                    <FormField label="Terms & conditions">
                        <textarea value={draft.tc_text.clone()} oninput={on_tc} rows="4" />
                    </FormField>
                    <div class="modal-footer">
                        <button type="button" class="btn-secondary" onclick={on_close}>{ "Cancel" }</button>
                        <button type="submit" class="btn-primary" disabled={!can_save}>
                            { if props.saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
