use crate::components::AssetCard;
use crate::models::assignment::AssignmentBoard;
use crate::models::drag::{DimensionCache, DragPayload};
use crate::models::Asset;
use crate::utils::dnd::{allow_drop, read_payload, write_payload};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AssetPreviewProps {
    pub board: AssignmentBoard,
    pub dimensions: DimensionCache,
    /// Show assignment badges; off when there are no drop zones to assign to.
    #[prop_or_default]
    pub show_badges: bool,
    pub on_remove: Callback<String>,
    /// Video without known size was picked up; the owner probes it.
    pub on_probe: Callback<Asset>,
    /// Asset dragged out of a zone and dropped back onto the preview.
    pub on_return: Callback<DragPayload>,
    pub on_open_library: Callback<()>,
}

/// Picked assets, each draggable onto a drop zone.
#[function_component(AssetPreview)]
pub fn asset_preview(props: &AssetPreviewProps) -> Html {
    let on_open = {
        let callback = props.on_open_library.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let ondragover = Callback::from(|e: DragEvent| allow_drop(&e));
    let ondrop = {
        let callback = props.on_return.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            match read_payload(&e) {
                Ok(payload) if payload.from_zone.is_some() => callback.emit(payload),
                Ok(_) => {}
                Err(err) => log::warn!("Ignoring drop on preview: {}", err),
            }
        })
    };

    let items = props.board.preview().iter().map(|asset| {
        let ondragstart = {
            let payload = props.dimensions.payload_for(asset);
            let probe = props.dimensions.needs_probe(asset).then(|| asset.clone());
            let on_probe = props.on_probe.clone();
            Callback::from(move |e: DragEvent| {
                let image = e.target_dyn_into::<web_sys::Element>();
                write_payload(&e, &payload, image.as_ref());
                if let Some(asset) = probe.clone() {
                    on_probe.emit(asset);
                }
            })
        };
        let on_remove = {
            let callback = props.on_remove.clone();
            let id = asset.id.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                callback.emit(id.clone());
            })
        };
        let badge = props.board.badge(&asset.id);

        html! {
            <div class="preview-item" key={asset.id.clone()} draggable="true" ondragstart={ondragstart}>
                <AssetCard asset={asset.clone()}>
                    if props.show_badges {
                        <span class={classes!("badge", badge.class())}>{ badge.label() }</span>
                    }
                    <button type="button" class="remove-asset" title="Remove" onclick={on_remove}>{ "×" }</button>
                </AssetCard>
            </div>
        }
    });

    html! {
        <div class="asset-preview" ondragover={ondragover} ondrop={ondrop}>
            <div class="section-header">
                <h3>{ format!("Selected assets ({})", props.board.preview().len()) }</h3>
                <button type="button" class="btn-secondary" onclick={on_open}>{ "Browse library" }</button>
            </div>
            if props.board.preview().is_empty() {
                <p class="empty-state">{ "No assets selected yet." }</p>
            } else {
                <div class="preview-grid">{ for items }</div>
            }
        </div>
    }
}
