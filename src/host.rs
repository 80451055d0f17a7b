use crate::constants::*;
use crate::dom::{self, Listener};
use crate::events::{orientation, pointer};
use glam::Vec2;
use motion_core::{FrameToken, Host, InputEvent, PermissionOutcome, Rect, TimerKind, TimerRequest};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub enum Signal {
    Input(InputEvent, Option<Rect>),
    Gesture { secure_context: bool },
    Permission(PermissionOutcome),
    Resize(Rect, Vec<Option<Vec2>>),
    Timer(TimerKind),
    Frame(f64),
}

pub type Sink = Rc<dyn Fn(Signal)>;

pub enum Binding {
    Window,
    /// One element: pointer enter/move/leave, with clicks as the gesture that
    /// may start the orientation permission request.
    Element {
        surface: web::HtmlElement,
        anchors: Option<web::Element>,
    },
}

impl Binding {
    pub fn measure(&self) -> Rect {
        match self {
            Binding::Window => dom::viewport_rect(),
            Binding::Element { surface, .. } => dom::rect_of(surface),
        }
    }
}

struct Timer {
    kind: TimerKind,
    handle: i32,
    closure: Closure<dyn FnMut()>,
}

struct Observer {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

pub struct DomHost {
    binding: Binding,
    sink: Sink,
    listeners: Vec<Listener>,
    frame: Option<Closure<dyn FnMut(f64)>>,
    timers: Vec<Timer>,
    observer: Option<Observer>,
}

impl DomHost {
    pub fn new(binding: Binding, sink: Sink) -> Self {
        Self {
            binding,
            sink,
            listeners: Vec::new(),
            frame: None,
            timers: Vec::new(),
            observer: None,
        }
    }

    fn listen_window_moves(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        for kind in [EV_MOUSE_MOVE, EV_TOUCH_MOVE] {
            let sink = self.sink.clone();
            let listener = Listener::add(&window, kind, move |ev| {
                if let Some(input) = pointer::to_input(&ev, kind) {
                    sink(Signal::Input(input, None));
                }
            });
            self.listeners.extend(listener);
        }
    }

    fn listen_element(&mut self, surface: &web::HtmlElement) {
        for kind in [EV_POINTER_ENTER, EV_POINTER_MOVE, EV_POINTER_LEAVE] {
            let sink = self.sink.clone();
            let el = surface.clone();
            let listener = Listener::add(surface, kind, move |ev| {
                if let Some(input) = pointer::to_input(&ev, kind) {
                    sink(Signal::Input(input, Some(dom::rect_of(&el))));
                }
            });
            self.listeners.extend(listener);
        }
        let sink = self.sink.clone();
        let listener = Listener::add(surface, EV_CLICK, move |_ev| {
            let secure_context = web::window().map(|w| w.is_secure_context()).unwrap_or(false);
            sink(Signal::Gesture { secure_context });
        });
        self.listeners.extend(listener);
    }

    fn clear_timer(&mut self, kind: TimerKind) {
        let (cleared, kept): (Vec<Timer>, Vec<Timer>) =
            std::mem::take(&mut self.timers).into_iter().partition(|t| t.kind == kind);
        self.timers = kept;
        if let Some(window) = web::window() {
            for t in &cleared {
                window.clear_timeout_with_handle(t.handle);
            }
        }
        defer_drop(cleared);
    }
}

/// Free JS callbacks after the current one returns; it may be among them.
fn defer_drop<T: 'static>(value: T) {
    spawn_local(async move {
        drop(value);
    });
}

impl Host for DomHost {
    fn listen_input(&mut self) {
        let surface = match &self.binding {
            Binding::Window => None,
            Binding::Element { surface, .. } => Some(surface.clone()),
        };
        match surface {
            None => self.listen_window_moves(),
            Some(el) => self.listen_element(&el),
        }
    }

    fn observe_resize(&mut self) {
        match &self.binding {
            Binding::Window => {
                let Some(window) = web::window() else {
                    return;
                };
                let sink = self.sink.clone();
                let listener = Listener::add(&window, EV_RESIZE, move |_ev| {
                    sink(Signal::Resize(dom::viewport_rect(), Vec::new()));
                });
                self.listeners.extend(listener);
            }
            Binding::Element { surface, anchors } => {
                let sink = self.sink.clone();
                let (el, anchors) = (surface.clone(), anchors.clone());
                let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
                    let rect = dom::rect_of(&el);
                    let centers = anchors
                        .as_ref()
                        .map(|a| dom::element_centers(a, BRACKET_SELECTOR, rect.origin()))
                        .unwrap_or_default();
                    sink(Signal::Resize(rect, centers));
                }) as Box<dyn FnMut(js_sys::Array)>);
                match web::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
                    Ok(observer) => {
                        observer.observe(surface);
                        self.observer = Some(Observer {
                            observer,
                            _closure: closure,
                        });
                    }
                    Err(e) => log::warn!("[host] ResizeObserver unavailable: {:?}", e),
                }
            }
        }
    }

    fn request_frame(&mut self) -> Option<FrameToken> {
        let window = web::window()?;
        let sink = self.sink.clone();
        let closure = self.frame.get_or_insert_with(|| {
            Closure::wrap(Box::new(move |ts: f64| sink(Signal::Frame(ts))) as Box<dyn FnMut(f64)>)
        });
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("[host] requestAnimationFrame failed: {:?}", e))
            .ok()
            .map(FrameToken)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if let Some(window) = web::window() {
            let _ = window.cancel_animation_frame(token.0);
        }
    }

    fn set_timer(&mut self, timer: TimerRequest) {
        self.clear_timer(timer.kind);
        let Some(window) = web::window() else {
            return;
        };
        let sink = self.sink.clone();
        let kind = timer.kind;
        let closure = Closure::wrap(Box::new(move || sink(Signal::Timer(kind))) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timer.delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(handle) => self.timers.push(Timer {
                kind,
                handle,
                closure,
            }),
            Err(e) => log::warn!("[host] setTimeout failed: {:?}", e),
        }
    }

    fn request_orientation_permission(&mut self) {
        let sink = self.sink.clone();
        spawn_local(async move {
            let outcome = orientation::request_permission().await;
            sink(Signal::Permission(outcome));
        });
    }

    fn subscribe_orientation(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let sink = self.sink.clone();
        let surface = match &self.binding {
            Binding::Window => None,
            Binding::Element { surface, .. } => Some(surface.clone()),
        };
        let listener = Listener::add(&window, EV_DEVICE_ORIENTATION, move |ev| {
            if let Some(input) = orientation::to_input(&ev) {
                sink(Signal::Input(input, surface.as_ref().map(|el| dom::rect_of(el))));
            }
        });
        self.listeners.extend(listener);
        log::info!("[orientation] listening for device orientation");
    }

    fn unlisten(&mut self) {
        for l in &self.listeners {
            l.remove();
        }
        if let Some(o) = &self.observer {
            o.observer.disconnect();
        }
    }

    fn clear_timers(&mut self) {
        if let Some(window) = web::window() {
            for t in &self.timers {
                window.clear_timeout_with_handle(t.handle);
            }
        }
    }

    fn release(&mut self) {
        let listeners = std::mem::take(&mut self.listeners);
        let timers: Vec<Closure<dyn FnMut()>> = std::mem::take(&mut self.timers)
            .into_iter()
            .map(|t| t.closure)
            .collect();
        defer_drop((listeners, timers, self.frame.take(), self.observer.take()));
    }
}
