//! Notification kinds and their presentation.

use std::fmt;

/// How long a notification stays on screen before it removes itself.
pub const NOTIFICATION_DURATION_MS: u32 = 3000;

/// Kind of a transient notification. Drives the background colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Parse a kind passed in from inline page scripts.
    ///
    /// Unknown or missing strings fall back to [`NotificationKind::Info`].
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some(l) if l.eq_ignore_ascii_case("error") => Self::Error,
            Some(l) if l.eq_ignore_ascii_case("success") => Self::Success,
            _ => Self::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Self::Info => "#3B82F6",
            Self::Success => "#22C55E",
            Self::Error => "#EF4444",
        }
    }

    /// Class attribute for the notification element.
    pub fn class_name(&self) -> String {
        format!("notification {}", self.as_str())
    }

    /// Inline style for the notification element (fixed, top-right).
    pub fn inline_style(&self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
             border-radius: 0.5rem; color: white; z-index: 1000; font-weight: 500; \
             background: {}; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);",
            self.background()
        )
    }
}

/// Run `detach` against the notification's parent, if it still has one.
///
/// The removal timer can fire after the element was already taken off the
/// page; that case is a no-op. Returns whether `detach` ran.
pub fn detach_if_attached<P>(parent: Option<P>, detach: impl FnOnce(P)) -> bool {
    match parent {
        Some(parent) => {
            detach(parent);
            true
        }
        None => false,
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(NotificationKind::from_label(Some("error")), NotificationKind::Error);
        assert_eq!(NotificationKind::from_label(Some("Success")), NotificationKind::Success);
        assert_eq!(NotificationKind::from_label(Some("info")), NotificationKind::Info);
        assert_eq!(NotificationKind::from_label(Some("warning")), NotificationKind::Info);
        assert_eq!(NotificationKind::from_label(None), NotificationKind::Info);
    }

    #[test]
    fn test_distinct_backgrounds() {
        let info = NotificationKind::Info.background();
        let success = NotificationKind::Success.background();
        let error = NotificationKind::Error.background();
        assert_ne!(info, success);
        assert_ne!(info, error);
        assert_ne!(success, error);
        assert_eq!(NotificationKind::default().background(), info);
    }

    #[test]
    fn test_timer_after_manual_removal_is_noop() {
        let mut body = vec!["notification"];

        // Removed by hand before the timer fires.
        body.clear();
        let parent = (!body.is_empty()).then_some(&mut body);
        assert!(!detach_if_attached(parent, |b| b.clear()));
        assert!(body.is_empty());
    }

    #[test]
    fn test_timer_removes_attached_notification() {
        let mut body = vec!["other", "notification"];
        let parent = Some(&mut body);
        assert!(detach_if_attached(parent, |b| b.retain(|n| *n != "notification")));
        assert_eq!(body, vec!["other"]);
    }

    #[test]
    fn test_presentation() {
        assert_eq!(NotificationKind::Error.class_name(), "notification error");
        assert!(NotificationKind::Error.inline_style().contains("background: #EF4444;"));
        assert_eq!(NotificationKind::Success.to_string(), "success");
    }
}
