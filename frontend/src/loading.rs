use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

/// Something that can run a callback once after a delay. The returned
/// handle cancels the callback when dropped.
pub trait Timer {
    type Handle: 'static;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct GlooTimer;

impl Timer for GlooTimer {
    type Handle = Timeout;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Starts the delay and hands back the effect destructor, which drops the
/// timer handle so an unmount before the delay never fires `finish`.
fn loading_effect<T: Timer>(
    timer: &T,
    delay_ms: u32,
    finish: impl FnOnce() + 'static,
) -> impl FnOnce() + 'static {
    let handle = timer.start(
        delay_ms,
        Box::new(move || {
            info!("Loading screen done");
            finish();
        }),
    );
    move || drop(handle)
}

/// True until `delay_ms` has passed since mount.
#[hook]
pub fn use_loading(delay_ms: u32) -> bool {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |delay_ms| loading_effect(&GlooTimer, *delay_ms, move || loading.set(false)),
            delay_ms,
        );
    }

    *loading
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOADING_DELAY_MS;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Pending = Rc<RefCell<Option<(u32, Box<dyn FnOnce()>)>>>;

    /// Holds at most one pending callback until `fire` is called.
    #[derive(Default)]
    struct ManualTimer {
        pending: Pending,
    }

    struct ManualHandle(Pending);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl Timer for ManualTimer {
        type Handle = ManualHandle;

        fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            *self.pending.borrow_mut() = Some((delay_ms, callback));
            ManualHandle(self.pending.clone())
        }
    }

    impl ManualTimer {
        fn requested_delay(&self) -> Option<u32> {
            self.pending.borrow().as_ref().map(|(delay, _)| *delay)
        }

        fn fire(&self) -> bool {
            let pending = self.pending.borrow_mut().take();
            match pending {
                Some((_, callback)) => {
                    callback();
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn page_appears_once_the_delay_elapses() {
        let timer = ManualTimer::default();
        let loading = Rc::new(Cell::new(true));

        let flag = loading.clone();
        let teardown = loading_effect(&timer, LOADING_DELAY_MS, move || flag.set(false));

        assert_eq!(timer.requested_delay(), Some(2500));
        assert!(loading.get());

        assert!(timer.fire());
        assert!(!loading.get());

        teardown();
        assert!(!loading.get());
    }

    #[test]
    fn unmount_before_the_delay_cancels_the_timer() {
        let timer = ManualTimer::default();
        let loading = Rc::new(Cell::new(true));

        let flag = loading.clone();
        let teardown = loading_effect(&timer, LOADING_DELAY_MS, move || flag.set(false));
        teardown();

        assert_eq!(timer.requested_delay(), None);
        assert!(!timer.fire());
        assert!(loading.get());
    }
}
