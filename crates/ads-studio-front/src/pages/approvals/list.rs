use crate::api::APICaller;
use crate::components::{use_toast, ConfirmDialog, ConfirmPrompt, EditTextDialog, ErrorMessage, Loading};
use crate::hooks::use_shared;
use crate::models::approval::{Approval, ApprovalFeed, ApprovalFilter, FeedState, TextDraft};
use common::response::AssetKind;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct Editing {
    id: String,
    draft: TextDraft,
}

#[function_component(ApprovalsPage)]
pub fn approvals_page() -> Html {
    let feed = use_shared(ApprovalFeed::default);
    let filter = use_state(ApprovalFilter::default);
    let editing = use_state(|| None::<Editing>);
    let saving = use_state(|| false);
    let busy = use_state(|| None::<String>);
    let pending_resubmit = use_state(|| None::<Approval>);
    let toast = use_toast();

    let refresh = {
        let feed = feed.clone();
        Callback::from(move |_: ()| {
            let feed = feed.clone();
            let ticket = feed.update(|f| f.begin());
            wasm_bindgen_futures::spawn_local(async move {
                let result = match APICaller::new().list_approvals().await {
                    Ok(approvals) => {
                        log::info!("Loaded {} approvals", approvals.len());
                        Ok(approvals)
                    }
                    Err(e) => {
                        log::error!("Failed to load approvals: {}", e);
                        Err(e.to_string())
                    }
                };
                if !feed.update(|f| f.finish(ticket, result)) {
                    log::debug!("Dropped approvals load #{}, a newer one is pending", ticket);
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_edit = {
        let editing = editing.clone();
        let toast = toast.clone();
        Callback::from(move |id: String| {
            let editing = editing.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match APICaller::new().get_asset(&id).await {
                    Ok(record) => editing.set(Some(Editing {
                        draft: TextDraft::from_record(&record),
                        id,
                    })),
                    Err(e) => {
                        log::error!("Failed to load asset {}: {}", id, e);
                        toast.error(format!("Could not load asset: {}", e));
                    }
                }
            });
        })
    };

    let on_save = {
        let editing = editing.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let refresh = refresh.clone();
        Callback::from(move |draft: TextDraft| {
            let Some(current) = (*editing).clone() else {
                return;
            };
            let request = draft.to_request();
            if request.is_empty() {
                editing.set(None);
                return;
            }
            saving.set(true);
            let editing = editing.clone();
            let saving = saving.clone();
            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match APICaller::new().update_asset_text(&current.id, &request).await {
                    Ok(message) => {
                        toast.success(message.unwrap_or_else(|| "Text updated".to_string()));
                        editing.set(None);
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to update asset {}: {}", current.id, e);
                        toast.error(e.to_string());
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    let on_regenerate = {
        let busy = busy.clone();
        let toast = toast.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: String| {
            busy.set(Some(id.clone()));
            let busy = busy.clone();
            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match APICaller::new().regenerate_asset(&id).await {
                    Ok(message) => {
                        toast.success(message.unwrap_or_else(|| "Regeneration started".to_string()));
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to regenerate asset {}: {}", id, e);
                        toast.error(e.to_string());
                    }
                }
                busy.set(None);
            });
        })
    };

    let on_confirm_resubmit = {
        let pending_resubmit = pending_resubmit.clone();
        let busy = busy.clone();
        let toast = toast.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            let Some(approval) = (*pending_resubmit).clone() else {
                return;
            };
            pending_resubmit.set(None);
            busy.set(Some(approval.id.clone()));
            let busy = busy.clone();
            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match APICaller::new().resubmit_asset(&approval.id).await {
                    Ok(message) => {
                        log::info!("Resubmitted asset {}", approval.id);
                        toast.success(message.unwrap_or_else(|| "Asset resubmitted for review".to_string()));
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to resubmit asset {}: {}", approval.id, e);
                        toast.error(e.to_string());
                    }
                }
                busy.set(None);
            });
        })
    };

    let on_cancel_resubmit = {
        let pending_resubmit = pending_resubmit.clone();
        Callback::from(move |_: ()| pending_resubmit.set(None))
    };

    let feed_view = feed.get();
    let content = match feed_view.state() {
        FeedState::Loading => html! { <Loading message="Loading approvals..." /> },
        FeedState::Error(e) => {
            let refresh = refresh.clone();
            html! { <ErrorMessage message={e.clone()} on_retry={Callback::from(move |_: ()| refresh.emit(()))} /> }
        }
        FeedState::Loaded(approvals) => {
            let tabs = ApprovalFilter::TABS.iter().copied().map(|tab| {
                let onclick = {
                    let filter = filter.clone();
                    Callback::from(move |_: MouseEvent| filter.set(tab))
                };
                html! {
                    <button class={classes!("tab", (*filter == tab).then_some("active"))} onclick={onclick}>
                        { format!("{} ({})", tab.label(), tab.count(approvals)) }
                    </button>
                }
            });
            let visible: Vec<&Approval> = approvals.iter().filter(|a| filter.matches(a)).collect();

            html! {
                <>
                    <div class="tabs">{ for tabs }</div>
                    if visible.is_empty() {
                        <div class="empty-state">
                            <p>{ "Nothing to review here." }</p>
                        </div>
                    } else {
                        <div class="grid">
                            { for visible.into_iter().map(|approval| {
                                let id = approval.id.clone();
                                let is_busy = busy.as_deref() == Some(id.as_str());
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let id = id.clone();
                                    Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
                                };
                                let regenerate = {
                                    let on_regenerate = on_regenerate.clone();
                                    let id = id.clone();
                                    Callback::from(move |_: MouseEvent| on_regenerate.emit(id.clone()))
                                };
                                let resubmit = {
                                    let pending_resubmit = pending_resubmit.clone();
                                    let approval = approval.clone();
                                    Callback::from(move |_: MouseEvent| pending_resubmit.set(Some(approval.clone())))
                                };
                                html! {
                                    <div class="card approval-card" key={id.clone()}>
                                        <div class="card-header">
                                            <h3>{ &approval.name }</h3>
                                            <span class={classes!("status-badge", approval.status.class())}>{ approval.status.label() }</span>
                                        </div>
                                        <div class="card-body">
                                            if approval.kind == AssetKind::Video {
                                                <video src={approval.url.clone()} preload="metadata" controls={true}></video>
                                            } else {
                                                <img src={approval.url.clone()} alt={approval.name.clone()} loading="lazy" />
                                            }
                                            if let Some(headline) = &approval.headline {
                                                <div class="field">
                                                    <label>{ "Headline:" }</label>
                                                    <span>{ headline }</span>
                                                </div>
                                            }
                                            if let Some(tc_text) = &approval.tc_text {
                                                <div class="field">
                                                    <label>{ "T&C:" }</label>
                                                    <span>{ tc_text }</span>
                                                </div>
                                            }
                                            if !approval.rejection_reasons.is_empty() {
                                                <div class="field rejection-reasons">
                                                    <label>{ "Rejected because:" }</label>
                                                    <ul>
                                                        { for approval.rejection_reasons.iter().map(|reason| html! { <li>{ reason }</li> }) }
                                                    </ul>
                                                </div>
                                            }
                                        </div>
                                        <div class="card-footer">
                                            <button class="btn-secondary" onclick={edit} disabled={is_busy}>{ "Edit text" }</button>
                                            <button class="btn-secondary" onclick={regenerate} disabled={is_busy}>{ "Regenerate" }</button>
                                            if approval.can_resubmit() {
                                                <button class="btn-primary" onclick={resubmit} disabled={is_busy}>{ "Resubmit" }</button>
                                            }
                                        </div>
                                    </div>
                                }
                            })}
                        </div>
                    }
                </>
            }
        }
    };

    let resubmit_prompt = pending_resubmit.as_ref().map(|a| {
        ConfirmPrompt::neutral("Resubmit asset", format!("Send \"{}\" back for review?", a.name), "Resubmit")
    });

    html! {
        <div class="container">
            <div class="header">
                <h1>{ "My Approvals" }</h1>
            </div>

            { content }

            <EditTextDialog
                draft={editing.as_ref().map(|e| e.draft.clone())}
                saving={*saving}
                on_save={on_save}
                on_close={on_close_edit}
            />
            <ConfirmDialog
                prompt={resubmit_prompt}
                on_confirm={on_confirm_resubmit}
                on_cancel={on_cancel_resubmit}
            />
        </div>
    }
}
