use crate::api::APICaller;
use crate::components::{
    use_toast, AccountSelector, AssetLibraryModal, AssetPreview, CampaignSelector, DropZoneView, FormField,
};
use crate::config::use_config;
use crate::hooks::{use_shared, SharedState};
use crate::models::assignment::{AssignmentBoard, ZoneKey};
use crate::models::campaign_tree::{AdsetToggle, CampaignTree};
use crate::models::drag::{DimensionCache, DragPayload};
use crate::models::form::CampaignForm;
use crate::models::operation::OperationType;
use crate::models::{Asset, SessionState};
use crate::utils::dnd::probe_video_dimensions;
use crate::utils::validation::validate_account_id;
use common::response::AdsetSummary;
use common::Platform;
use std::collections::BTreeSet;
use yew::prelude::*;
use yewdux::prelude::*;

fn load_campaigns(tree: &SharedState<CampaignTree>, platform: Platform, account_id: &str) {
    let Some(ticket) = tree.update(|t| t.begin_load(platform, account_id)) else {
        return;
    };
    log::info!("Loading {} campaigns for {}", platform, ticket.account_id);
    let tree = tree.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = APICaller::new()
            .list_campaigns(ticket.platform, &ticket.account_id)
            .await
            .map_err(|e| {
                log::error!("Failed to load {} campaigns: {}", ticket.platform, e);
                e.to_string()
            });
        tree.update(|t| t.finish_load(&ticket, result));
    });
}

fn load_adsets(tree: &SharedState<CampaignTree>, platform: Platform, campaign_id: &str) {
    let Some(ticket) = tree.update(|t| t.toggle_campaign(platform, campaign_id)) else {
        return;
    };
    let tree = tree.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = APICaller::new()
            .list_adsets(ticket.platform, &ticket.account_id, &ticket.campaign_id)
            .await
            .map_err(|e| {
                log::error!("Failed to load adsets of {}: {}", ticket.campaign_id, e);
                e.to_string()
            });
        tree.update(|t| t.finish_adsets(&ticket, result));
    });
}

/// Brings the campaign tree in line with the platforms that have a usable
/// account. Platforms whose account changed are reloaded and lose their zones.
fn sync_campaigns(
    tree: &SharedState<CampaignTree>,
    board: &SharedState<AssignmentBoard>,
    wanted: &[(Platform, String)],
    force: bool,
) {
    let dropped: Vec<Platform> = tree
        .get()
        .platforms()
        .map(|(p, _)| *p)
        .filter(|p| !wanted.iter().any(|(w, _)| w == p))
        .collect();
    for platform in dropped {
        tree.update(|t| t.remove_platform(platform));
        board.update(|b| b.close_platform(platform));
    }

    for (platform, account_id) in wanted {
        let current = tree.get().platform(*platform).map(|e| e.account_id.clone());
        if force || current.as_deref() != Some(account_id.as_str()) {
            board.update(|b| b.close_platform(*platform));
            load_campaigns(tree, *platform, account_id);
        }
    }
}

#[function_component(CampaignBuilderPage)]
pub fn campaign_builder_page() -> Html {
    let config = use_config();
    let toast = use_toast();
    let (session, _) = use_store::<SessionState>();
    let operation = use_state(|| OperationType::ExistingAdset);
    let platforms = use_state(|| BTreeSet::from([Platform::Meta]));
    let tree = use_shared(CampaignTree::new);
    let board = use_shared(AssignmentBoard::new);
    let dimensions = use_shared(DimensionCache::new);
    let show_library = use_state(|| false);

    let form = CampaignForm {
        operation: *operation,
        platforms: (*platforms).clone(),
        accounts: session.accounts.clone(),
    };
    let sections = operation.sections(!board.get().preview().is_empty());

    let wanted: Vec<(Platform, String)> = if sections.campaign_picker {
        form.ready_platforms()
            .into_iter()
            .map(|p| (p, form.account(p).trim().to_string()))
            .filter(|(_, account)| validate_account_id(account).is_none())
            .collect()
    } else {
        Vec::new()
    };

    {
        let tree = tree.clone();
        let board = board.clone();
        use_effect_with(wanted.clone(), move |wanted| {
            sync_campaigns(&tree, &board, wanted, false);
            || ()
        });
    }

    let on_operation = {
        let operation = operation.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<OperationType>() {
                Ok(op) => operation.set(op),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let on_toggle_platform = {
        let platforms = platforms.clone();
        Callback::from(move |platform: Platform| {
            let mut next = (*platforms).clone();
            if !next.remove(&platform) {
                next.insert(platform);
            }
            platforms.set(next);
        })
    };

    let on_load = {
        let tree = tree.clone();
        let board = board.clone();
        let wanted = wanted.clone();
        Callback::from(move |_: ()| sync_campaigns(&tree, &board, &wanted, true))
    };

    let on_retry = {
        let tree = tree.clone();
        let wanted = wanted.clone();
        Callback::from(move |platform: Platform| {
            if let Some((_, account_id)) = wanted.iter().find(|(p, _)| *p == platform) {
                load_campaigns(&tree, platform, account_id);
            }
        })
    };

    let on_toggle_campaign = {
        let tree = tree.clone();
        Callback::from(move |(platform, campaign_id): (Platform, String)| load_adsets(&tree, platform, &campaign_id))
    };

    let on_toggle_adset = {
        let tree = tree.clone();
        let board = board.clone();
        let toast = toast.clone();
        Callback::from(move |(platform, campaign_id, adset): (Platform, String, AdsetSummary)| {
            match tree.update(|t| t.toggle_adset(platform, &campaign_id, &adset)) {
                AdsetToggle::Selected(zone) => {
                    board.update(|b| b.open_zone(zone));
                }
                AdsetToggle::Deselected(key) => {
                    let released = board.update(|b| b.close_zone(&key));
                    if !released.is_empty() {
                        toast.info(format!("{} asset(s) returned from \"{}\"", released.len(), adset.name));
                    }
                }
            }
        })
    };

    let on_library_confirm = {
        let board = board.clone();
        let toast = toast.clone();
        Callback::from(move |assets: Vec<Asset>| {
            let picked = assets.len();
            let added = board.update(|b| b.add_assets(assets));
            if added == 0 {
                toast.info("Those assets are already selected");
            } else {
                toast.success(format!("Added {} asset(s)", added));
            }
            if added < picked {
                log::debug!("{} picked assets were already in the preview", picked - added);
            }
        })
    };

    let on_open_library = {
        let show_library = show_library.clone();
        Callback::from(move |_: ()| show_library.set(true))
    };
    let on_close_library = {
        let show_library = show_library.clone();
        Callback::from(move |_: ()| show_library.set(false))
    };

    let on_remove_asset = {
        let board = board.clone();
        let toast = toast.clone();
        Callback::from(move |id: String| {
            if let Some(asset) = board.update(|b| b.remove_asset(&id)) {
                toast.info(format!("Removed \"{}\"", asset.name));
            }
        })
    };

    let on_probe = {
        let board = board.clone();
        let dimensions = dimensions.clone();
        Callback::from(move |asset: Asset| {
            let board = board.clone();
            let dimensions = dimensions.clone();
            let id = asset.id.clone();
            probe_video_dimensions(
                &asset.url,
                Callback::from(move |(width, height): (u32, u32)| {
                    dimensions.update(|d| d.record(&id, width, height));
                    board.update(|b| b.set_dimensions(&id, width, height));
                }),
            );
        })
    };

    let on_return = {
        let board = board.clone();
        Callback::from(move |payload: DragPayload| {
            if let Some(from) = &payload.from_zone {
                board.update(|b| b.unassign(&payload.id, from));
            }
        })
    };

    let zone_drop = {
        let board = board.clone();
        let toast = toast.clone();
        move |key: ZoneKey| {
            let board = board.clone();
            let toast = toast.clone();
            Callback::from(move |payload: DragPayload| {
                let result = board.update(|b| match &payload.from_zone {
                    Some(from) => b.move_asset(&payload.id, from, &key),
                    None => b.assign(&payload.id, &key),
                });
                match result {
                    Ok(true) => log::debug!("Assigned {} to {}", payload.id, key),
                    Ok(false) => toast.info(format!("\"{}\" is already in this ad set", payload.name)),
                    Err(e) => {
                        log::warn!("Rejected drop: {}", e);
                        toast.error(e.to_string());
                    }
                }
            })
        }
    };

    let board_snapshot = board.get().clone();
    let submit_check = board_snapshot.check_ready(*operation).map_err(|e| e.to_string());

    let on_submit = {
        let board = board.clone();
        let toast = toast.clone();
        let operation = *operation;
        let submit_check = submit_check.clone();
        Callback::from(move |e: SubmitEvent| match &submit_check {
            Ok(()) => log::info!(
                "Submitting operation {} with {} zones and {} assets",
                operation,
                board.get().zones().len(),
                board.get().preview().len()
            ),
            Err(message) => {
                e.prevent_default();
                toast.error(message.clone());
            }
        })
    };

    let hidden_fields = form.hidden_fields(&board_snapshot);

    let zones = board_snapshot.zones().iter().map(|zone| {
        let key = zone.key.clone();
        let on_unassign = {
            let board = board.clone();
            let key = key.clone();
            Callback::from(move |id: String| {
                board.update(|b| b.unassign(&id, &key));
            })
        };
        let on_rename = {
            let board = board.clone();
            let key = key.clone();
            Callback::from(move |name: String| board.update(|b| b.rename_ad(&key, name)))
        };
        let on_close = {
            let board = board.clone();
            let tree = tree.clone();
            let key = key.clone();
            Callback::from(move |_: ()| {
                board.update(|b| b.close_zone(&key));
                tree.update(|t| t.deselect(&key));
            })
        };
        html! {
            <DropZoneView
                key={key.to_string()}
                zone={zone.clone()}
                assets={board_snapshot.zone_assets(&key).into_iter().cloned().collect::<Vec<_>>()}
                on_drop={zone_drop(key.clone())}
                on_remove_asset={on_unassign}
                on_rename={on_rename}
                on_close={on_close}
            />
        }
    });

    let preview = html! {
        <AssetPreview
            board={board_snapshot.clone()}
            dimensions={dimensions.get().clone()}
            show_badges={!board_snapshot.zones().is_empty()}
            on_remove={on_remove_asset}
            on_probe={on_probe}
            on_return={on_return}
            on_open_library={on_open_library}
        />
    };

    html! {
        <div class="container campaign-builder">
            <div class="header">
                <h1>{ "Create Ads" }</h1>
            </div>

            <form id="campaignForm" method="post" action={config.form_action.clone()} onsubmit={on_submit}>
                { for hidden_fields.iter().enumerate().map(|(i, field)| html! {
                    <input key={format!("{}-{}", i, field.name)} type="hidden" name={field.name.clone()} value={field.value.clone()} />
                })}

                <section class="builder-section">
                    <FormField label="What do you want to do?">
                        <select onchange={on_operation}>
                            { for OperationType::ALL.iter().map(|op| html! {
                                <option value={op.to_string()} selected={*op == *operation}>{ op.label() }</option>
                            })}
                        </select>
                    </FormField>
                    <AccountSelector
                        platforms={(*platforms).clone()}
                        on_toggle_platform={on_toggle_platform}
                        on_load={on_load}
                        show_load={sections.campaign_picker}
                    />
                </section>

                if sections.template {
                    <section class="builder-section template-section">
                        <h2>{ "Campaign" }</h2>
                        <FormField label="Campaign name" required={true}>
                            <input type="text" name="campaign_name" required={true} />
                        </FormField>
                        <FormField label="Daily budget" help={Some(AttrValue::from("In the account currency"))}>
                            <input type="number" name="daily_budget" min="1" step="0.01" />
                        </FormField>
                    </section>
                }

                <div class={classes!("builder-grid", sections.two_column.then_some("two-column"))}>
                    if sections.campaign_picker {
                        <section class="builder-section">
                            <h2>{ "Ad sets" }</h2>
                            <CampaignSelector
                                tree={tree.get().clone()}
                                on_toggle_campaign={on_toggle_campaign}
                                on_toggle_adset={on_toggle_adset}
                                on_retry={on_retry}
                            />
                            if !board_snapshot.zones().is_empty() {
                                <div class="drop-zones">{ for zones }</div>
                            }
                        </section>
                    }
                    if sections.creative {
                        <section class="builder-section creative-section">
                            <h2>{ "Creatives" }</h2>
                            { preview }
                        </section>
                    }
                </div>

                if sections.ad_groups {
                    <section class="builder-section ad-groups-section">
                        <h2>{ "Ad groups" }</h2>
                        <p class="form-help">{ "Each asset becomes its own ad group." }</p>
                        { for board_snapshot.preview().iter().map(|asset| html! {
                            <FormField key={asset.id.clone()} label={asset.name.clone()}>
                                <input type="text" name={format!("ad_group_names[{}]", asset.id)} value={asset.name.clone()} />
                            </FormField>
                        })}
                    </section>
                }

                <div class="form-actions">
                    if let Err(message) = &submit_check {
                        <span class="form-help">{ message }</span>
                    }
                    <button type="submit" class="btn-primary">{ "Create ads" }</button>
                </div>
            </form>

            <AssetLibraryModal show={*show_library} on_close={on_close_library} on_confirm={on_library_confirm} />
        </div>
    }
}
