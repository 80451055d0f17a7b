// DOM-facing names: CSS custom properties, classes and event types.
//
// Kept free of web-sys so host tests can include this file directly.
// Card custom properties, written on the wrapper element
pub const VAR_POINTER_X: &str = "--pointer-x";
pub const VAR_POINTER_Y: &str = "--pointer-y";
pub const VAR_BACKGROUND_X: &str = "--background-x";
pub const VAR_BACKGROUND_Y: &str = "--background-y";
pub const VAR_POINTER_FROM_CENTER: &str = "--pointer-from-center";
pub const VAR_POINTER_FROM_TOP: &str = "--pointer-from-top";
pub const VAR_POINTER_FROM_LEFT: &str = "--pointer-from-left";
pub const VAR_ROTATE_X: &str = "--rotate-x";
pub const VAR_ROTATE_Y: &str = "--rotate-y";

// Per-bracket proximity weight
pub const VAR_BRACKET_WEIGHT: &str = "--pc-b-dyn";

// Glass highlight centre, percent
pub const VAR_GLASS_X: &str = "--glass-x";
pub const VAR_GLASS_Y: &str = "--glass-y";

// Card shell state classes
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_ENTERING: &str = "entering";

// Bracket elements inside the bracket field
pub const BRACKET_SELECTOR: &str = ".pc-bracket";

// Trail DOM built at attach
pub const CLASS_TRAIL_BLOB: &str = "trail-blob";
pub const CLASS_TRAIL_INNER: &str = "trail-blob-inner";

// Listener event types
pub const EV_POINTER_ENTER: &str = "pointerenter";
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_POINTER_LEAVE: &str = "pointerleave";
pub const EV_MOUSE_MOVE: &str = "mousemove";
pub const EV_TOUCH_MOVE: &str = "touchmove";
pub const EV_CLICK: &str = "click";
pub const EV_RESIZE: &str = "resize";
pub const EV_DEVICE_ORIENTATION: &str = "deviceorientation";

// Global probed before a motion-permission request
pub const ORIENTATION_CTOR: &str = "DeviceOrientationEvent";
pub const REQUEST_PERMISSION_FN: &str = "requestPermission";
pub const PERMISSION_GRANTED: &str = "granted";
