use crate::api::APICaller;
use crate::components::{use_toast, AssetCard, Loading, PaginationBar};
use crate::config::use_config;
use crate::hooks::use_shared;
use crate::models::library::{KindFilter, LibraryState};
use crate::models::Asset;
use crate::utils::dnd::click_modifiers;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AssetLibraryProps {
    pub show: bool,
    pub on_close: Callback<()>,
    /// Receives the picked assets once the user confirms.
    pub on_confirm: Callback<Vec<Asset>>,
}

#[function_component(AssetLibraryModal)]
pub fn asset_library_modal(props: &AssetLibraryProps) -> Html {
    let config = use_config();
    let toast = use_toast();
    let library = use_shared(|| LibraryState::new(config.page_size));
    let is_loading = use_state(|| false);

    {
        let library = library.clone();
        let is_loading = is_loading.clone();
        let config = config.clone();
        use_effect_with(props.show, move |show| {
            if *show && !library.get().is_loaded() && !*is_loading {
                is_loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    let (assets, source) = APICaller::new().load_library_assets(&config).await;
                    library.update(|l| l.set_assets(assets, source));
                    is_loading.set(false);
                });
            }
            || ()
        });
    }

    let on_kind_change = {
        let library = library.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            library.update(|l| {
                let search = l.search().to_string();
                l.apply_filter(KindFilter::from_value(&select.value()), &search);
            });
        })
    };

    let on_search = {
        let library = library.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            library.update(|l| {
                let kind = l.kind_filter();
                l.apply_filter(kind, &input.value());
            });
        })
    };

    let on_page = {
        let library = library.clone();
        Callback::from(move |page: usize| {
            library.update(|l| l.pagination.go_to(page));
        })
    };

    let on_confirm = {
        let library = library.clone();
        let toast = toast.clone();
        let confirm = props.on_confirm.clone();
        let close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            match library.update(|l| l.confirm()) {
                Ok(picked) => {
                    log::info!("Picked {} assets from library", picked.len());
                    confirm.emit(picked);
                    close.emit(());
                }
                Err(e) => toast.error(e.to_string()),
            }
        })
    };

    let on_close = {
        let close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    if !props.show {
        return html! {};
    }

    let view = library.get();
    let body = if *is_loading || !view.is_loaded() {
        html! { <Loading message="Loading assets..." /> }
    } else if view.filtered_len() == 0 {
        html! {
            <div class="empty-state">
                <p>{ if view.total_assets() == 0 { "The library is empty." } else { "No assets match the current filter." } }</p>
            </div>
        }
    } else {
        html! {
            <>
                <div class="asset-grid">
                    { for view.page_items().into_iter().map(|asset| {
                        let onclick = {
                            let library = library.clone();
                            let id = asset.id.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                library.update(|l| l.click(&id, click_modifiers(&e)));
                            })
                        };
                        html! {
                            <AssetCard
                                key={asset.id.clone()}
                                asset={asset.clone()}
                                selected={view.selection.is_selected(&asset.id)}
                                onclick={onclick}
                            />
                        }
                    })}
                </div>
                <PaginationBar pagination={view.pagination} on_page={on_page} />
            </>
        }
    };

    html! {
        <div class="modal-overlay" onclick={on_close.clone()}>
            <div class="modal-content asset-library" onclick={|e: MouseEvent| e.stop_propagation()}>
                <div class="modal-header">
                    <h2>{ "Asset Library" }</h2>
                    <button class="close-button" onclick={on_close.clone()}>{ "×" }</button>
                </div>
                <div class="library-filters">
                    <select onchange={on_kind_change}>
                        { for KindFilter::CHOICES.iter().map(|(kind, label)| html! {
                            <option value={kind.value()} selected={view.kind_filter() == *kind}>{ *label }</option>
                        })}
                    </select>
                    <input type="search" placeholder="Search by name or description" value={view.search().to_string()} oninput={on_search} />
                    if let Some(source) = view.source() {
                        <small class="form-help">{ format!("Source: {}", source) }</small>
                    }
                </div>
                <p class="form-help">{ "Click to select, Ctrl/Cmd-click to toggle, Shift-click to select a range." }</p>
                <div class="modal-body">{ body }</div>
                <div class="modal-footer">
                    <span class="selection-count">{ format!("{} selected", view.selection.len()) }</span>
                    <button class="btn-secondary" onclick={on_close}>{ "Cancel" }</button>
                    <button class="btn-primary" onclick={on_confirm}>{ "Add selected" }</button>
                </div>
            </div>
        </div>
    }
}
