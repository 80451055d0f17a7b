use crate::constants::*;
use crate::dom;
use crate::style;
use motion_core::{CardOutput, GlassOutput, TrailOutput, TrailVisual};
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

fn create_div(document: &web::Document, class: &str, css: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    let _ = el.set_attribute("style", css);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub struct TrailPainter {
    root: web::HtmlElement,
    filter: Option<web::HtmlElement>,
    blobs: SmallVec<[web::HtmlElement; 4]>,
}

impl TrailPainter {
    pub fn build(
        parent: &web::HtmlElement,
        visual: &TrailVisual,
        initial: &TrailOutput,
    ) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let filter = match style::trail_filter_svg(visual) {
            Some(svg) => {
                let holder = create_div(&document, "", "")?;
                holder.set_inner_html(&svg);
                let _ = parent.append_child(&holder);
                Some(holder)
            }
            None => None,
        };
        let root = create_div(&document, "", &style::trail_container_style(visual))?;
        let mut blobs = SmallVec::new();
        for b in &initial.blobs {
            let blob = create_div(&document, CLASS_TRAIL_BLOB, &style::blob_base_style(b, visual))?;
            let inner = create_div(&document, CLASS_TRAIL_INNER, &style::blob_inner_style(b, visual))?;
            let _ = blob.append_child(&inner);
            let _ = root.append_child(&blob);
            dom::set_property(&blob, "transform", &style::blob_transform(b));
            blobs.push(blob);
        }
        let _ = parent.append_child(&root);
        log::info!("[trail] built {} blobs", blobs.len());
        Ok(Self {
            root,
            filter,
            blobs,
        })
    }

    pub fn paint(&self, out: &TrailOutput) {
        for (el, b) in self.blobs.iter().zip(&out.blobs) {
            dom::set_property(el, "transform", &style::blob_transform(b));
        }
    }

    pub fn remove(&self) {
        self.root.remove();
        if let Some(f) = &self.filter {
            f.remove();
        }
    }
}

pub struct CardPainter {
    wrap: web::HtmlElement,
    shell: web::HtmlElement,
    brackets: Vec<Option<web::HtmlElement>>,
}

impl CardPainter {
    pub fn new(wrap: web::HtmlElement, shell: web::HtmlElement, bracket_field: Option<&web::Element>) -> Self {
        let brackets = bracket_field
            .map(|f| dom::elements(f, BRACKET_SELECTOR))
            .unwrap_or_default();
        Self {
            wrap,
            shell,
            brackets,
        }
    }

    pub fn paint(&self, out: &CardOutput) {
        for (name, value) in style::card_properties(&out.vars) {
            dom::set_property(&self.wrap, name, &value);
        }
        dom::set_class(&self.shell, CLASS_ACTIVE, out.active);
        dom::set_class(&self.shell, CLASS_ENTERING, out.entering);
        for (el, w) in self.brackets.iter().zip(&out.weights) {
            if let Some(el) = el {
                dom::set_property(el, VAR_BRACKET_WEIGHT, &style::bracket_weight(*w));
            }
        }
    }

    /// Drop the state classes; the last custom properties stay as painted.
    pub fn clear(&self) {
        dom::set_class(&self.shell, CLASS_ACTIVE, false);
        dom::set_class(&self.shell, CLASS_ENTERING, false);
    }
}

pub struct GlassPainter {
    panel: web::HtmlElement,
}

impl GlassPainter {
    pub fn new(panel: web::HtmlElement, initial: &GlassOutput) -> Self {
        let backdrop = style::glass_backdrop(initial);
        dom::set_property(&panel, "backdrop-filter", &backdrop);
        dom::set_property(&panel, "-webkit-backdrop-filter", &backdrop);
        let painter = Self { panel };
        painter.paint(initial);
        painter
    }

    pub fn paint(&self, out: &GlassOutput) {
        dom::set_property(&self.panel, VAR_GLASS_X, &style::pct(out.center.x));
        dom::set_property(&self.panel, VAR_GLASS_Y, &style::pct(out.center.y));
        dom::set_property(&self.panel, "background", &style::glass_background(out));
    }
}
