#![cfg(target_arch = "wasm32")]
use motion_core::{CardConfig, Effect, GlassConfig, LifecycleState, TrailConfig};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod paint;
mod status;
mod style;

use frame::Mount;
use host::Binding;
use paint::{CardPainter, GlassPainter, TrailPainter};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{:#}", e)).into()
}

/// `undefined`/`null` means all defaults; any missing field takes its default.
#[allow(deprecated)]
fn parse_config<T: DeserializeOwned + Default>(value: &JsValue) -> anyhow::Result<T> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    value
        .into_serde::<T>()
        .map_err(|e| anyhow::anyhow!("invalid config: {}", e))
}

#[wasm_bindgen(js_name = CursorTrail)]
pub struct CursorTrailHandle {
    mount: Mount<motion_core::CursorTrail>,
    painter: Rc<TrailPainter>,
}

#[wasm_bindgen(js_class = CursorTrail)]
impl CursorTrailHandle {
    /// Builds the blobs inside `container` and starts following the pointer.
    pub fn attach(container: web::HtmlElement, config: JsValue) -> Result<CursorTrailHandle, JsValue> {
        Self::try_attach(&container, &config).map_err(to_js)
    }

    pub fn detach(&self) {
        self.mount.detach();
        self.painter.remove();
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.mount.state() == LifecycleState::Attached
    }
}

impl CursorTrailHandle {
    fn try_attach(container: &web::HtmlElement, config: &JsValue) -> anyhow::Result<Self> {
        let config: TrailConfig = parse_config(config)?;
        let effect = motion_core::CursorTrail::new(config)?;
        let painter = Rc::new(TrailPainter::build(container, effect.visual(), &effect.output())?);
        let p = painter.clone();
        match Mount::attach(effect, Binding::Window, move |out| p.paint(out)) {
            Ok(mount) => Ok(Self { mount, painter }),
            Err(e) => {
                painter.remove();
                Err(e)
            }
        }
    }
}

#[wasm_bindgen(js_name = ProfileCard)]
pub struct ProfileCardHandle {
    mount: Mount<motion_core::TiltCard>,
    painter: Rc<CardPainter>,
}

#[wasm_bindgen(js_class = ProfileCard)]
impl ProfileCardHandle {
    /// `wrap` receives the custom properties, `shell` is the hover surface and
    /// carries the state classes, `bracket_field` holds the `.pc-bracket` glyphs.
    pub fn attach(
        wrap: web::HtmlElement,
        shell: web::HtmlElement,
        bracket_field: Option<web::Element>,
        config: JsValue,
    ) -> Result<ProfileCardHandle, JsValue> {
        Self::try_attach(wrap, shell, bracket_field, &config).map_err(to_js)
    }

    pub fn detach(&self) {
        self.mount.detach();
        self.painter.clear();
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.mount.state() == LifecycleState::Attached
    }
}

impl ProfileCardHandle {
    fn try_attach(
        wrap: web::HtmlElement,
        shell: web::HtmlElement,
        bracket_field: Option<web::Element>,
        config: &JsValue,
    ) -> anyhow::Result<Self> {
        let config: CardConfig = parse_config(config)?;
        let effect = motion_core::TiltCard::new(config)?;
        let painter = Rc::new(CardPainter::new(wrap, shell.clone(), bracket_field.as_ref()));
        let p = painter.clone();
        let binding = Binding::Element {
            surface: shell,
            anchors: bracket_field,
        };
        let mount = Mount::attach(effect, binding, move |out| p.paint(out))?;
        Ok(Self { mount, painter })
    }
}

#[wasm_bindgen(js_name = GlassPanel)]
pub struct GlassPanelHandle {
    mount: Mount<motion_core::GlassHighlight>,
}

#[wasm_bindgen(js_class = GlassPanel)]
impl GlassPanelHandle {
    pub fn attach(container: web::HtmlElement, config: JsValue) -> Result<GlassPanelHandle, JsValue> {
        Self::try_attach(container, &config).map_err(to_js)
    }

    pub fn detach(&self) {
        self.mount.detach();
    }

    #[wasm_bindgen(getter, js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        self.mount.state() == LifecycleState::Attached
    }
}

impl GlassPanelHandle {
    fn try_attach(container: web::HtmlElement, config: &JsValue) -> anyhow::Result<Self> {
        let config: GlassConfig = parse_config(config)?;
        let effect = motion_core::GlassHighlight::new(config)?;
        let painter = GlassPainter::new(container.clone(), &effect.output());
        let binding = Binding::Element {
            surface: container,
            anchors: None,
        };
        let mount = Mount::attach(effect, binding, move |out| painter.paint(out))?;
        Ok(Self { mount })
    }
}
