//! Change listeners and the guard they run under.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

/// State-change listener. Receives the widget whose state changed.
pub type Listener<W> = Rc<dyn Fn(&W) -> anyhow::Result<()>>;

/// Calls `listener` once. An error or panic inside it is logged and dropped;
/// nothing else runs under the guard.
pub(crate) fn notify<W>(listener: &Listener<W>, widget: &W, source: &str) {
    match catch_unwind(AssertUnwindSafe(|| listener(widget))) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => log::warn!("{source} listener failed: {err:#}"),
        Err(panic) => {
            let message = if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("{source} listener panicked: {message}");
        }
    }
}
