use std::cell::Cell;
use std::rc::Rc;

/// Scheduler state machine.
///
/// `Idle → Scheduled → Drawing → Scheduled → …`; `Stopped` is terminal.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SchedulerState {
    #[default]
    Idle,
    Scheduled,
    Drawing,
    Stopped,
}

/// Shared cancellation flag for a redraw loop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Continuous redraw loop driver.
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    state: SchedulerState,
    cancel: CancelToken,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Number of refresh callbacks currently requested from the host (0 or 1).
    #[inline]
    pub fn pending(&self) -> usize {
        usize::from(self.state() == SchedulerState::Scheduled)
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Requests the first frame. No-op unless idle.
    pub fn start<R: FnOnce()>(&mut self, request_frame: R) {
        if self.state() != SchedulerState::Idle {
            return;
        }
        if self.cancel.is_cancelled() {
            self.state = SchedulerState::Stopped;
            return;
        }
        self.state = SchedulerState::Scheduled;
        request_frame();
        log::debug!("redraw loop started");
    }

    /// Enters `Drawing` for a host refresh callback.
    ///
    /// Returns `false` when the callback must be ignored: the loop was
    /// cancelled, or no request was outstanding.
    pub fn begin_frame(&mut self) -> bool {
        if self.cancel.is_cancelled() {
            self.halt();
            return false;
        }
        if self.state() != SchedulerState::Scheduled {
            log::trace!("ignoring refresh callback in state {:?}", self.state());
            return false;
        }
        self.state = SchedulerState::Drawing;
        true
    }

    /// Leaves `Drawing` and re-arms the next refresh, unless cancelled.
    pub fn end_frame<R: FnOnce()>(&mut self, request_frame: R) {
        if self.state() != SchedulerState::Drawing {
            return;
        }
        if self.cancel.is_cancelled() {
            self.halt();
            return;
        }
        self.state = SchedulerState::Scheduled;
        request_frame();
    }

    /// Cancels the loop; any outstanding callback is ignored when it arrives.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        self.halt();
    }

    fn halt(&mut self) {
        if self.state() != SchedulerState::Stopped {
            log::debug!("redraw loop stopped");
        }
        self.state = SchedulerState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || {
            let c = c.clone();
            Box::new(move || c.set(c.get() + 1)) as Box<dyn FnOnce()>
        })
    }

    #[test]
    fn loop_rearms_exactly_once_per_frame() {
        let (requests, req) = counter();
        let mut s = RedrawScheduler::new();
        assert_eq!(s.state(), SchedulerState::Idle);

        s.start(req());
        assert_eq!(s.state(), SchedulerState::Scheduled);
        assert_eq!(requests.get(), 1);

        for i in 0..5 {
            assert!(s.begin_frame());
            assert_eq!(s.state(), SchedulerState::Drawing);
            assert_eq!(s.pending(), 0);
            s.end_frame(req());
            assert_eq!(s.pending(), 1);
            assert_eq!(requests.get(), i + 2);
        }
    }

    #[test]
    fn start_twice_does_not_double_request() {
        let (requests, req) = counter();
        let mut s = RedrawScheduler::new();
        s.start(req());
        s.start(req());
        assert_eq!(requests.get(), 1);
    }

    #[test]
    fn spurious_callback_is_ignored() {
        let mut s = RedrawScheduler::new();
        assert!(!s.begin_frame());
        assert_eq!(s.state(), SchedulerState::Idle);
    }

    #[test]
    fn cancel_stops_before_next_rearm() {
        let (requests, req) = counter();
        let mut s = RedrawScheduler::new();
        let token = s.cancel_token();
        s.start(req());

        assert!(s.begin_frame());
        token.cancel();
        s.end_frame(req());

        assert_eq!(s.state(), SchedulerState::Stopped);
        assert_eq!(requests.get(), 1);
        assert!(!s.begin_frame());
    }

    #[test]
    fn stop_ignores_outstanding_callback() {
        let (_, req) = counter();
        let mut s = RedrawScheduler::new();
        s.start(req());
        s.stop();
        assert!(!s.begin_frame());
        assert_eq!(s.state(), SchedulerState::Stopped);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn cancelled_before_start_never_requests() {
        let (requests, req) = counter();
        let mut s = RedrawScheduler::new();
        s.cancel_token().cancel();
        s.start(req());
        assert_eq!(requests.get(), 0);
        assert_eq!(s.state(), SchedulerState::Stopped);
    }
}
