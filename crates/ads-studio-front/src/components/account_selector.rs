use crate::components::FormField;
use crate::models::SessionState;
use crate::utils::validation::validate_account_id;
use common::Platform;
use std::collections::BTreeSet;
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccountSelectorProps {
    pub platforms: BTreeSet<Platform>,
    pub on_toggle_platform: Callback<Platform>,
    /// Fired when the user asks to (re)load campaigns.
    pub on_load: Callback<()>,
    #[prop_or_default]
    pub show_load: bool,
}

/// Platform checkboxes with one advertiser account input per platform.
/// Account ids are kept in the session store.
#[function_component(AccountSelector)]
pub fn account_selector(props: &AccountSelectorProps) -> Html {
    let (session, dispatch) = use_store::<SessionState>();

    let on_load = {
        let callback = props.on_load.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let any_ready = props
        .platforms
        .iter()
        .any(|p| validate_account_id(&session.account(*p)).is_none());

    html! {
        <div class="account-selector">
            { for Platform::ALL.iter().copied().map(|platform| {
                let checked = props.platforms.contains(&platform);
                let on_check = {
                    let callback = props.on_toggle_platform.clone();
                    Callback::from(move |_: Event| callback.emit(platform))
                };
                let on_account = {
                    let dispatch = dispatch.clone();
                    Callback::from(move |e: Event| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        let value = input.value().trim().to_string();
                        dispatch.reduce_mut(|state| {
                            if value.is_empty() {
                                state.accounts.remove(&platform);
                            } else {
                                state.accounts.insert(platform, value);
                            }
                        });
                    })
                };
                let account = session.account(platform);
                let error = if checked && !account.is_empty() {
                    validate_account_id(&account)
                } else {
                    None
                };
                html! {
                    <div class={classes!("platform-row", checked.then_some("selected"))} key={platform.slug()}>
                        <label class="checkbox">
                            <input type="checkbox" checked={checked} onchange={on_check} />
                            { platform.label() }
                        </label>
                        if checked {
                            <FormField label={format!("{} {}", platform.label(), if platform == Platform::Meta { "ad account" } else { "advertiser id" })} error={error}>
                                <input
                                    type="text"
                                    value={account}
                                    onchange={on_account}
                                    placeholder={if platform == Platform::Meta { "act_1234567890" } else { "7012345678901" }}
                                />
                            </FormField>
                        }
                    </div>
                }
            })}
            if props.show_load {
                <button type="button" class="btn-secondary" onclick={on_load} disabled={!any_ready}>
                    { "Load campaigns" }
                </button>
            }
        </div>
    }
}
