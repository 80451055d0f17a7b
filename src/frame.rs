use crate::host::{Binding, DomHost, Signal, Sink};
use crate::status::StateCache;
use motion_core::{Effect, LifecycleState, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

type Shared<E> = Rc<RefCell<Surface<E, DomHost>>>;

/// One effect attached to the page. Frames are painted through `paint`
/// after the surface borrow is released.
pub struct Mount<E: Effect + 'static> {
    surface: Shared<E>,
    status: Rc<StateCache>,
}

impl<E: Effect + 'static> Mount<E> {
    pub fn attach(
        effect: E,
        binding: Binding,
        paint: impl Fn(&E::Output) + 'static,
    ) -> anyhow::Result<Self> {
        let surface: Shared<E> = Rc::new(RefCell::new(Surface::new(effect)));
        let status = Rc::new(StateCache::default());
        let weak = Rc::downgrade(&surface);
        let seen = status.clone();
        let sink: Sink = Rc::new(move |signal| {
            if let Some(surface) = weak.upgrade() {
                dispatch(&surface, signal, &paint, &seen);
            }
        });
        let geometry = binding.measure();
        let host = DomHost::new(binding, sink);
        {
            let mut s = surface.borrow_mut();
            s.attach(host, geometry, instant::now())
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            status.record(s.state());
        }
        Ok(Self { surface, status })
    }

    pub fn state(&self) -> LifecycleState {
        let live = self.surface.try_borrow().ok().map(|s| s.state());
        self.status.resolve(live)
    }

    /// Idempotent. Called from inside one of this surface's own callbacks,
    /// teardown runs right after that callback returns.
    pub fn detach(&self) {
        if let Ok(mut s) = self.surface.try_borrow_mut() {
            s.detach();
            self.status.record(s.state());
            return;
        }
        self.status.defer_detach();
        let (surface, status) = (self.surface.clone(), self.status.clone());
        spawn_local(async move {
            if let Ok(mut s) = surface.try_borrow_mut() {
                s.detach();
                status.record(s.state());
            }
        });
    }
}

fn dispatch<E: Effect>(
    surface: &RefCell<Surface<E, DomHost>>,
    signal: Signal,
    paint: &dyn Fn(&E::Output),
    status: &StateCache,
) {
    let Ok(mut s) = surface.try_borrow_mut() else {
        log::warn!("[frame] surface busy; dropping signal");
        return;
    };
    match signal {
        Signal::Frame(ts) => {
            let output = s.on_frame(ts);
            status.record(s.state());
            drop(s);
            if let Some(output) = output {
                paint(&output);
            }
            return;
        }
        Signal::Input(ev, geometry) => s.handle_input(ev, geometry),
        Signal::Gesture { secure_context } => s.user_gesture(secure_context),
        Signal::Permission(outcome) => s.permission_resolved(outcome),
        Signal::Resize(geometry, measured) => s.on_resize(geometry, &measured),
        Signal::Timer(kind) => s.on_timer(kind),
    }
    status.record(s.state());
}

