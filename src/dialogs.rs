//! User Dialogs
//!
//! Blocking confirmation and notification, behind a trait so tests (or a
//! modal component) can stand in for the browser dialogs.

use std::rc::Rc;

pub trait Dialogs {
    /// Ask the user to confirm; `false` means cancelled
    fn confirm(&self, message: &str) -> bool;
    /// Show a message the user must acknowledge
    fn notify(&self, message: &str);
}

impl<D: Dialogs + ?Sized> Dialogs for Rc<D> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("confirm without window: {}", message);
            return false;
        };
        window.confirm_with_message(message).unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    log::warn!("alert failed: {}", message);
                }
            }
            None => log::warn!("alert without window: {}", message),
        }
    }
}
