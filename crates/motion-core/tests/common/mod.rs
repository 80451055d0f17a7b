#![allow(dead_code)]

use motion_core::{FrameToken, Host, TimerRequest};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ListenInput,
    ObserveResize,
    RequestFrame(i32),
    CancelFrame(i32),
    SetTimer(TimerRequest),
    RequestPermission,
    SubscribeOrientation,
    Unlisten,
    ClearTimers,
    Release,
}

/// Records every host call; the log outlives the host so tests can inspect it
/// after detach dropped the host.
#[derive(Clone, Default)]
pub struct FakeHost {
    pub log: Rc<RefCell<Vec<Call>>>,
    next_frame: i32,
}

impl FakeHost {
    pub fn new() -> (Self, Rc<RefCell<Vec<Call>>>) {
        let host = Self::default();
        let log = host.log.clone();
        (host, log)
    }
}

impl Host for FakeHost {
    fn listen_input(&mut self) {
        self.log.borrow_mut().push(Call::ListenInput);
    }
    fn observe_resize(&mut self) {
        self.log.borrow_mut().push(Call::ObserveResize);
    }
    fn request_frame(&mut self) -> Option<FrameToken> {
        self.next_frame += 1;
        self.log.borrow_mut().push(Call::RequestFrame(self.next_frame));
        Some(FrameToken(self.next_frame))
    }
    fn cancel_frame(&mut self, token: FrameToken) {
        self.log.borrow_mut().push(Call::CancelFrame(token.0));
    }
    fn set_timer(&mut self, timer: TimerRequest) {
        self.log.borrow_mut().push(Call::SetTimer(timer));
    }
    fn request_orientation_permission(&mut self) {
        self.log.borrow_mut().push(Call::RequestPermission);
    }
    fn subscribe_orientation(&mut self) {
        self.log.borrow_mut().push(Call::SubscribeOrientation);
    }
    fn unlisten(&mut self) {
        self.log.borrow_mut().push(Call::Unlisten);
    }
    fn clear_timers(&mut self) {
        self.log.borrow_mut().push(Call::ClearTimers);
    }
    fn release(&mut self) {
        self.log.borrow_mut().push(Call::Release);
    }
}

pub fn count(log: &Rc<RefCell<Vec<Call>>>, pred: impl Fn(&Call) -> bool) -> usize {
    log.borrow().iter().filter(|c| pred(c)).count()
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;
