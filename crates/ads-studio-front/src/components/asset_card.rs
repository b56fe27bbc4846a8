use crate::models::Asset;
use crate::utils::format::{format_dimensions, truncate_string};
use common::response::AssetKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AssetCardProps {
    pub asset: Asset,
    #[prop_or_default]
    pub selected: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Thumbnail tile of an asset.
#[function_component(AssetCard)]
pub fn asset_card(props: &AssetCardProps) -> Html {
    let asset = &props.asset;
    let onclick = props.onclick.clone();

    let thumb = match asset.kind {
        AssetKind::Image => html! {
            <img src={asset.url.clone()} alt={asset.name.clone()} loading="lazy" draggable="false" />
        },
        AssetKind::Video => html! {
            <video src={asset.url.clone()} preload="metadata" muted={true}></video>
        },
    };

    html! {
        <div
            class={classes!("asset-card", props.selected.then_some("selected"))}
            data-id={asset.id.clone()}
            data-type={asset.kind.as_str()}
            onclick={onclick}
        >
            <div class="asset-thumb">
                { thumb }
                if props.selected {
                    <span class="selection-check">{"✓"}</span>
                }
                <span class="asset-kind">{ asset.kind.as_str() }</span>
            </div>
            <div class="asset-meta">
                <span class="asset-name" title={asset.name.clone()}>{ truncate_string(&asset.name, 24) }</span>
                <span class="asset-dims">{ format_dimensions(asset.width, asset.height) }</span>
            </div>
            {for props.children.iter()}
        </div>
    }
}
