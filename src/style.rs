// CSS value formatting for effect output. Pure so it runs in host tests.
use crate::constants::*;
use motion_core::{BlobOutput, BlobShape, GlassOutput, TiltVars, TrailVisual};

/// Shortest round-trip form, `-0` folded to `0`.
pub fn num(v: f32) -> String {
    if v == 0.0 || !v.is_finite() {
        return "0".to_string();
    }
    format!("{}", v)
}

pub fn px(v: f32) -> String {
    format!("{}px", num(v))
}

pub fn pct(v: f32) -> String {
    format!("{}%", num(v))
}

pub fn deg(v: f32) -> String {
    format!("{}deg", num(v))
}

/// Custom properties for one card frame, in write order.
pub fn card_properties(v: &TiltVars) -> [(&'static str, String); 9] {
    [
        (VAR_POINTER_X, pct(v.pointer_x)),
        (VAR_POINTER_Y, pct(v.pointer_y)),
        (VAR_BACKGROUND_X, pct(v.background_x)),
        (VAR_BACKGROUND_Y, pct(v.background_y)),
        (VAR_POINTER_FROM_CENTER, num(v.pointer_from_center)),
        (VAR_POINTER_FROM_TOP, num(v.pointer_from_top)),
        (VAR_POINTER_FROM_LEFT, num(v.pointer_from_left)),
        (VAR_ROTATE_X, deg(v.rotate_x)),
        (VAR_ROTATE_Y, deg(v.rotate_y)),
    ]
}

pub fn blob_transform(b: &BlobOutput) -> String {
    format!(
        "translate3d({}, {}, 0) translate(-50%, -50%)",
        px(b.position.x),
        px(b.position.y)
    )
}

pub fn blob_base_style(b: &BlobOutput, visual: &TrailVisual) -> String {
    let radius = match visual.shape {
        BlobShape::Circle => "50%",
        BlobShape::Square => "0",
    };
    let [ox, oy] = visual.shadow_offset;
    format!(
        "position:absolute;left:0;top:0;pointer-events:none;will-change:transform;\
         width:{size};height:{size};border-radius:{radius};background-color:{fill};\
         opacity:{opacity};box-shadow:{ox} {oy} {blur} 0 {shadow};",
        size = px(b.size),
        radius = radius,
        fill = visual.fill_color,
        opacity = num(b.opacity),
        ox = px(ox),
        oy = px(oy),
        blur = px(visual.shadow_blur),
        shadow = visual.shadow_color,
    )
}

pub fn blob_inner_style(b: &BlobOutput, visual: &TrailVisual) -> String {
    let radius = match visual.shape {
        BlobShape::Circle => "50%",
        BlobShape::Square => "0",
    };
    let offset = px(b.inner_offset());
    format!(
        "position:absolute;left:{offset};top:{offset};width:{size};height:{size};\
         border-radius:{radius};background-color:{color};",
        offset = offset,
        size = px(b.inner_size),
        radius = radius,
        color = visual.inner_color,
    )
}

pub fn trail_container_style(visual: &TrailVisual) -> String {
    let filter = visual
        .filter
        .as_ref()
        .map(|f| format!("filter:url(#{});", f.id))
        .unwrap_or_default();
    format!(
        "position:fixed;inset:0;pointer-events:none;overflow:hidden;z-index:{};{}",
        visual.z_index, filter
    )
}

/// Hidden SVG carrying the goo filter, or `None` without one.
pub fn trail_filter_svg(visual: &TrailVisual) -> Option<String> {
    let f = visual.filter.as_ref()?;
    Some(format!(
        "<svg style=\"position:absolute;width:0;height:0\" aria-hidden=\"true\"><filter id=\"{id}\">\
         <feGaussianBlur in=\"SourceGraphic\" result=\"blur\" stdDeviation=\"{dev}\"/>\
         <feColorMatrix in=\"blur\" values=\"{values}\"/></filter></svg>",
        id = f.id,
        dev = num(f.std_deviation),
        values = f.color_matrix_values,
    ))
}

/// Bracket opacity multiplier; the stylesheet combines it with the base opacity.
pub fn bracket_weight(w: f32) -> String {
    num((w * 1000.0).round() / 1000.0)
}

pub fn glass_background(o: &GlassOutput) -> String {
    let (x, y) = (pct(o.center.x), pct(o.center.y));
    format!(
        "radial-gradient(circle at {x} {y}, rgba(255,255,255,{hi}) 0%, rgba(255,255,255,{edge}) 50%, transparent 100%)",
        x = x,
        y = y,
        hi = num(o.highlight_alpha),
        edge = num(o.edge_alpha),
    )
}

pub fn glass_backdrop(o: &GlassOutput) -> String {
    format!("blur({})", px(o.blur))
}
