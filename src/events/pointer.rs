use crate::constants::{EV_POINTER_ENTER, EV_POINTER_LEAVE};
use glam::Vec2;
use motion_core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client position of a mouse/pointer event, or the first touch point.
pub fn client_point(ev: &web::Event) -> Option<Vec2> {
    if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
        return Some(Vec2::new(m.client_x() as f32, m.client_y() as f32));
    }
    let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

/// Map a DOM pointer/mouse/touch event of type `kind` to an input event.
pub fn to_input(ev: &web::Event, kind: &str) -> Option<InputEvent> {
    let ts = ev.time_stamp();
    match kind {
        EV_POINTER_LEAVE => Some(InputEvent::PointerLeave { ts }),
        EV_POINTER_ENTER => client_point(ev).map(|client| InputEvent::PointerEnter { client, ts }),
        _ => client_point(ev).map(|client| InputEvent::PointerMove { client, ts }),
    }
}
