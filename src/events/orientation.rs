use crate::constants::{ORIENTATION_CTOR, PERMISSION_GRANTED, REQUEST_PERMISSION_FN};
use motion_core::{InputEvent, PermissionOutcome};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub fn to_input(ev: &web::Event) -> Option<InputEvent> {
    let o = ev.dyn_ref::<web::DeviceOrientationEvent>()?;
    Some(InputEvent::OrientationSample {
        beta: o.beta().map(|v| v as f32),
        gamma: o.gamma().map(|v| v as f32),
        ts: ev.time_stamp(),
    })
}

/// Motion-sensor permission handshake. Platforms without the gated
/// `requestPermission` API deliver samples without asking.
pub async fn request_permission() -> PermissionOutcome {
    let Some(window) = web::window() else {
        return PermissionOutcome::Unavailable;
    };
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str(ORIENTATION_CTOR))
        .unwrap_or(JsValue::UNDEFINED);
    if ctor.is_undefined() || ctor.is_null() {
        return PermissionOutcome::Unavailable;
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str(REQUEST_PERMISSION_FN))
        .unwrap_or(JsValue::UNDEFINED);
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        return PermissionOutcome::Granted;
    };
    let promise = match request.call0(&ctor) {
        Ok(p) => js_sys::Promise::resolve(&p),
        Err(e) => {
            log::warn!("[orientation] requestPermission threw: {:?}", e);
            return PermissionOutcome::Denied;
        }
    };
    match JsFuture::from(promise).await {
        Ok(v) if v.as_string().as_deref() == Some(PERMISSION_GRANTED) => PermissionOutcome::Granted,
        Ok(_) => PermissionOutcome::Denied,
        Err(e) => {
            log::warn!("[orientation] permission request failed: {:?}", e);
            PermissionOutcome::Denied
        }
    }
}
