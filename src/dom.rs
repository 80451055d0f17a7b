use glam::Vec2;
use motion_core::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

pub fn viewport_rect() -> Rect {
    let Some(w) = web::window() else {
        return Rect::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Rect::new(0.0, 0.0, width as f32, height as f32)
}

/// Centre of each element matching `selector` under `root`, relative to
/// `origin`, in document order. `None` for an element not laid out yet.
pub fn element_centers(root: &web::Element, selector: &str, origin: Vec2) -> Vec<Option<Vec2>> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .map(|i| {
            let el = list.item(i)?.dyn_into::<web::Element>().ok()?;
            let r = rect_of(&el);
            (!r.is_empty()).then(|| r.origin() + r.local_center() - origin)
        })
        .collect()
}

/// One slot per match, in the same order as [`element_centers`].
pub fn elements(root: &web::Element, selector: &str) -> Vec<Option<web::HtmlElement>> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .map(|i| list.item(i)?.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_property(el: &web::HtmlElement, name: &str, value: &str) {
    let _ = el.style().set_property(name, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn add(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("[dom] add {} listener failed: {:?}", kind, e))
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Unregister. The closure stays alive until the listener is dropped.
    pub fn remove(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
