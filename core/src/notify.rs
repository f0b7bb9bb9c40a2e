//! Transient toast notifications over an injected UI surface.
//!
//! # Design
//! The notifier never owns a document. It is handed a `UiSurface` that knows
//! how to mount, animate out and remove one toast, and it drives the fixed
//! lifecycle: mount now, begin the exit animation after `DISPLAY_DURATION`,
//! remove after a further `EXIT_ANIMATION`. Each toast runs on its own Tokio
//! task, so toasts never wait on or cancel each other. There is no stacking
//! policy either: every toast is anchored to the same corner and overlapping
//! toasts overlap.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::NotifyError;

pub const DISPLAY_DURATION: Duration = Duration::from_millis(5000);
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

const TEXT_COLOR: &str = "white";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    /// Background color: green, red or blue.
    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Info => "#3b82f6",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind)
    }

    /// Inline CSS for a fixed top-right toast in this notification's colors.
    pub fn style(&self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
             border-radius: 6px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); \
             z-index: 9999; animation: slideIn 0.3s ease; max-width: 400px; \
             background: {}; color: {TEXT_COLOR};",
            self.kind.background()
        )
    }
}

/// Something that can display toasts: a DOM, a terminal, a test recorder.
///
/// `mount` is called synchronously from `Notifier::show`; `begin_exit` and
/// `remove` are called later from the toast's timer task.
pub trait UiSurface: Send + Sync + 'static {
    type Handle: Send + 'static;

    fn mount(&self, notification: &Notification) -> Self::Handle;
    fn begin_exit(&self, handle: &Self::Handle);
    fn remove(&self, handle: Self::Handle);
}

pub struct Notifier<S> {
    surface: Arc<S>,
    display: Duration,
    exit: Duration,
}

impl<S> Clone for Notifier<S> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
            display: self.display,
            exit: self.exit,
        }
    }
}

impl<S: UiSurface> Notifier<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Arc::new(surface),
            display: DISPLAY_DURATION,
            exit: EXIT_ANIMATION,
        }
    }

    pub fn with_timings(mut self, display: Duration, exit: Duration) -> Self {
        self.display = display;
        self.exit = exit;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mount a toast and schedule its dismissal on the current Tokio runtime.
    ///
    /// Outside a runtime nothing is mounted and `NotifyError::NoRuntime` is
    /// returned. The returned handle resolves once the toast has been
    /// removed; dropping it does not cancel the dismissal.
    pub fn show(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Result<JoinHandle<()>, NotifyError> {
        let runtime = Handle::try_current().map_err(|_| NotifyError::NoRuntime)?;
        let notification = Notification::new(message, kind);
        let handle = self.surface.mount(&notification);
        let surface = Arc::clone(&self.surface);
        let (display, exit) = (self.display, self.exit);

        Ok(runtime.spawn(async move {
            tokio::time::sleep(display).await;
            surface.begin_exit(&handle);
            tokio::time::sleep(exit).await;
            surface.remove(handle);
        }))
    }

    pub fn info(&self, message: impl Into<String>) -> Result<JoinHandle<()>, NotifyError> {
        self.show(message, NotificationKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> Result<JoinHandle<()>, NotifyError> {
        self.show(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Result<JoinHandle<()>, NotifyError> {
        self.show(message, NotificationKind::Error)
    }
}

/// Renders toasts as log events, for headless hosts.
#[derive(Debug, Default)]
pub struct TracingSurface {
    next_id: AtomicU64,
}

impl UiSurface for TracingSurface {
    type Handle = u64;

    fn mount(&self, notification: &Notification) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        info!(toast = id, kind = %notification.kind, "{}", notification.message);
        id
    }

    fn begin_exit(&self, handle: &u64) {
        debug!(toast = *handle, "toast exiting");
    }

    fn remove(&self, handle: u64) {
        debug!(toast = handle, "toast removed");
    }
}
