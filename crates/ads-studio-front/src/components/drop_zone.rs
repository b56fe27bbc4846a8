use crate::models::assignment::DropZone;
use crate::models::drag::DragPayload;
use crate::models::Asset;
use crate::utils::dnd::{allow_drop, read_payload, write_payload};
use crate::utils::format::truncate_string;
use crate::utils::validation::validate_ad_name;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DropZoneProps {
    pub zone: DropZone,
    pub assets: Vec<Asset>,
    pub on_drop: Callback<DragPayload>,
    pub on_remove_asset: Callback<String>,
    pub on_rename: Callback<String>,
    pub on_close: Callback<()>,
}

/// Drop target for one adset, with the name of the ad it will create.
#[function_component(DropZoneView)]
pub fn drop_zone_view(props: &DropZoneProps) -> Html {
    let hovering = use_state(|| false);
    let key = props.zone.key.clone();

    let ondragover = {
        let hovering = hovering.clone();
        Callback::from(move |e: DragEvent| {
            allow_drop(&e);
            if !*hovering {
                hovering.set(true);
            }
        })
    };
    let ondragleave = {
        let hovering = hovering.clone();
        Callback::from(move |_: DragEvent| hovering.set(false))
    };
    let ondrop = {
        let hovering = hovering.clone();
        let callback = props.on_drop.clone();
        let key = key.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            hovering.set(false);
            match read_payload(&e) {
                Ok(payload) if payload.from_zone.as_ref() == Some(&key) => {}
                Ok(payload) => callback.emit(payload),
                Err(err) => log::warn!("Ignoring drop on {}: {}", key, err),
            }
        })
    };

    let on_name = {
        let callback = props.on_rename.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };
    let on_close = {
        let callback = props.on_close.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let name_error = validate_ad_name(&props.zone.ad_name);

    html! {
        <div
            class={classes!("drop-zone", (*hovering).then_some("drag-over"), props.assets.is_empty().then_some("empty"))}
            data-zone={key.to_string()}
            ondragover={ondragover}
            ondragleave={ondragleave}
            ondrop={ondrop}
        >
            <div class="drop-zone-header">
                <span class="platform-tag">{ key.platform.label() }</span>
                <strong title={props.zone.adset_name.clone()}>{ truncate_string(&props.zone.adset_name, 40) }</strong>
                <button type="button" class="close-button" title="Remove adset" onclick={on_close}>{ "×" }</button>
            </div>
            <div class={classes!("form-group", name_error.is_some().then_some("has-error"))}>
                <label>{ "Ad name" }</label>
                <input type="text" value={props.zone.ad_name.clone()} oninput={on_name} />
                if let Some(error) = name_error {
                    <span class="field-error">{ error }</span>
                }
            </div>
            <div class="zone-assets">
                if props.assets.is_empty() {
                    <p class="drop-hint">{ "Drop assets here" }</p>
                }
                { for props.assets.iter().map(|asset| {
                    let ondragstart = {
                        let payload = DragPayload::from_asset(asset).with_zone(key.clone());
                        Callback::from(move |e: DragEvent| write_payload(&e, &payload, None))
                    };
                    let on_remove = {
                        let callback = props.on_remove_asset.clone();
                        let id = asset.id.clone();
                        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
                    };
                    html! {
                        <div class="mini-asset" key={asset.id.clone()} draggable="true" ondragstart={ondragstart} title={asset.name.clone()}>
                            if asset.is_video() {
                                <span class="mini-video">{ "▶" }</span>
                            } else {
                                <img src={asset.url.clone()} alt={asset.name.clone()} draggable="false" />
                            }
                            <span class="mini-name">{ truncate_string(&asset.name, 16) }</span>
                            <button type="button" class="remove-asset" onclick={on_remove}>{ "×" }</button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
