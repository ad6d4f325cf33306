//! Transient toast notifications appended to the page body.
//!
//! Each notification is independent: no cap, no deduplication. It removes
//! itself after the configured duration unless something detached it first.

use encounters_types::{NotificationKind, detach_if_attached};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{self, UiError};

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    duration_ms: u32,
}

impl NotificationCenter {
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms }
    }

    /// Show `message` and schedule its removal.
    pub fn notify(&self, message: &str, kind: NotificationKind) -> Result<(), UiError> {
        let document = dom::document()?;
        let notification = document.create_element("div")?;
        notification.set_class_name(&kind.class_name());
        notification.set_attribute("style", &kind.inline_style())?;
        notification.set_text_content(Some(message));
        dom::body()?.append_child(&notification)?;

        let duration = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            // Already gone if the page navigated or a caller removed it.
            detach_if_attached(notification.parent_node(), |parent| {
                let _ = parent.remove_child(&notification);
            });
        });
        Ok(())
    }

    /// Like [`notify`](Self::notify), logging instead of returning the error.
    pub fn show(&self, message: &str, kind: NotificationKind) {
        if let Err(e) = self.notify(message, kind) {
            tracing::warn!(error = %e, %kind, "failed to show notification");
        }
    }
}
