//! Access code delivery
//!
//! The registry never talks to a delivery channel directly; freshly
//! generated access codes are handed to an injected notifier. The default
//! notifier writes the code to the log, standing in for an SMS gateway.

use log::info;

/// Out-of-band delivery channel for one-time access codes.
pub trait AccessCodeNotifier {
    /// Delivers a freshly generated code for the given phone number.
    ///
    /// Delivery is fire-and-forget; it must not block the caller.
    fn deliver(&self, phone: &str, code: &str);
}

/// Default notifier that logs the code instead of sending it.
pub struct LogNotifier;

impl AccessCodeNotifier for LogNotifier {
    fn deliver(&self, phone: &str, code: &str) {
        info!("sending access code {} to phone {}", code, phone);
    }
}
