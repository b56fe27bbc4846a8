use crate::components::{ErrorMessage, Loading};
use crate::models::assignment::ZoneKey;
use crate::models::campaign_tree::{CampaignNode, CampaignTree, Load};
use common::response::AdsetSummary;
use common::Platform;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CampaignSelectorProps {
    pub tree: CampaignTree,
    pub on_toggle_campaign: Callback<(Platform, String)>,
    pub on_toggle_adset: Callback<(Platform, String, AdsetSummary)>,
    pub on_retry: Callback<Platform>,
}

/// Collapsible campaign list per platform; adsets load on first expansion.
#[function_component(CampaignSelector)]
pub fn campaign_selector(props: &CampaignSelectorProps) -> Html {
    if props.tree.platforms().next().is_none() {
        return html! {
            <p class="empty-state">{ "Enter an account id and load campaigns to pick adsets." }</p>
        };
    }

    html! {
        <div class="campaign-selector">
            { for props.tree.platforms().map(|(platform, entry)| {
                let platform = *platform;
                let body = match &entry.campaigns {
                    Load::Idle | Load::Loading => html! { <Loading message="Loading campaigns..." /> },
                    Load::Failed(message) => {
                        let retry = props.on_retry.clone();
                        html! {
                            <ErrorMessage
                                message={message.clone()}
                                on_retry={Callback::from(move |_: ()| retry.emit(platform))}
                            />
                        }
                    }
                    Load::Loaded(nodes) if nodes.is_empty() => html! {
                        <p class="empty-state">{ "No campaigns found for this account." }</p>
                    },
                    Load::Loaded(nodes) => html! {
                        <ul class="campaign-list">
                            { for nodes.iter().map(|node| render_campaign(props, platform, node)) }
                        </ul>
                    },
                };
                html! {
                    <div class="platform-campaigns" key={platform.slug()}>
                        <h4>{ format!("{} · {}", platform.label(), entry.account_id) }</h4>
                        { body }
                    </div>
                }
            })}
        </div>
    }
}

fn render_campaign(props: &CampaignSelectorProps, platform: Platform, node: &CampaignNode) -> Html {
    let campaign_id = node.summary.id.clone();
    let on_expand = {
        let callback = props.on_toggle_campaign.clone();
        let campaign_id = campaign_id.clone();
        Callback::from(move |_: MouseEvent| callback.emit((platform, campaign_id.clone())))
    };

    let adsets = if !node.expanded {
        html! {}
    } else {
        match &node.adsets {
            Load::Idle | Load::Loading => html! { <Loading message="Loading adsets..." /> },
            Load::Failed(message) => html! { <ErrorMessage message={message.clone()} /> },
            Load::Loaded(adsets) if adsets.is_empty() => html! {
                <p class="empty-state">{ "No adsets in this campaign." }</p>
            },
            Load::Loaded(adsets) => html! {
                <ul class="adset-list">
                    { for adsets.iter().map(|adset| {
                        let selected = props.tree.is_selected(&ZoneKey::new(platform, adset.id.clone()));
                        let onchange = {
                            let callback = props.on_toggle_adset.clone();
                            let payload = (platform, campaign_id.clone(), adset.clone());
                            Callback::from(move |_: Event| callback.emit(payload.clone()))
                        };
                        html! {
                            <li class={classes!("adset-item", selected.then_some("selected"))} key={adset.id.clone()}>
                                <label class="checkbox">
                                    <input type="checkbox" checked={selected} onchange={onchange} />
                                    { &adset.name }
                                    if let Some(status) = &adset.status {
                                        <span class="status-tag">{ status }</span>
                                    }
                                </label>
                            </li>
                        }
                    })}
                </ul>
            },
        }
    };

    html! {
        <li class={classes!("campaign-node", node.expanded.then_some("expanded"))} key={campaign_id.clone()}>
            <button type="button" class="campaign-toggle" onclick={on_expand}>
                <span class="chevron">{ if node.expanded { "▾" } else { "▸" } }</span>
                { &node.summary.name }
                if let Some(status) = &node.summary.status {
                    <span class="status-tag">{ status }</span>
                }
            </button>
            { adsets }
        </li>
    }
}
