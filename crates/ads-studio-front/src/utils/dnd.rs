use crate::models::drag::{DragPayload, PayloadError, MIME_JSON, MIME_TEXT};
use crate::models::selection::ClickModifiers;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, HtmlVideoElement, MouseEvent};
use yew::Callback;

/// Writes the payload into both transfer slots and sets the drag image.
pub fn write_payload(event: &DragEvent, payload: &DragPayload, drag_image: Option<&Element>) {
    let Some(transfer) = event.data_transfer() else {
        log::warn!("dragstart without a data transfer");
        return;
    };
    let encoded = payload.encode();
    for mime in [MIME_JSON, MIME_TEXT] {
        if let Err(e) = transfer.set_data(mime, &encoded) {
            log::warn!("Could not set {} drag data: {:?}", mime, e);
        }
    }
    transfer.set_effect_allowed("copyMove");
    if let Some(image) = drag_image {
        transfer.set_drag_image(image, 24, 24);
    }
}

pub fn read_payload(event: &DragEvent) -> Result<DragPayload, PayloadError> {
    let transfer = event.data_transfer().ok_or(PayloadError::Empty)?;
    let json = transfer.get_data(MIME_JSON).ok();
    let text = transfer.get_data(MIME_TEXT).ok();
    DragPayload::decode(json.as_deref(), text.as_deref())
}

/// Marks the current target as a valid drop target.
pub fn allow_drop(event: &DragEvent) {
    event.prevent_default();
    if let Some(transfer) = event.data_transfer() {
        transfer.set_drop_effect("copy");
    }
}

pub fn click_modifiers(event: &MouseEvent) -> ClickModifiers {
    ClickModifiers {
        toggle: event.ctrl_key() || event.meta_key(),
        range: event.shift_key(),
    }
}

/// Loads only the metadata of a video in a detached element and reports its
/// intrinsic size. Failures are logged and reported nowhere.
pub fn probe_video_dimensions(url: &str, on_done: Callback<(u32, u32)>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let video: HtmlVideoElement = match document
        .create_element("video")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
    {
        Some(video) => video,
        None => {
            log::warn!("Could not create probe element for {}", url);
            return;
        }
    };
    video.set_preload("metadata");
    video.set_muted(true);

    let probe = video.clone();
    let src = url.to_string();
    let on_loaded = Closure::once_into_js(move || {
        let size = (probe.video_width(), probe.video_height());
        probe.set_onloadedmetadata(None);
        probe.set_onerror(None);
        probe.remove_attribute("src").ok();
        log::debug!("Probed {} at {}x{}", src, size.0, size.1);
        on_done.emit(size);
    });
    let failed_url = url.to_string();
    let on_error = Closure::once_into_js(move || {
        log::warn!("Could not read video metadata for {}", failed_url);
    });

    video.set_onloadedmetadata(Some(on_loaded.unchecked_ref()));
    video.set_onerror(Some(on_error.unchecked_ref()));
    video.set_src(url);
}
