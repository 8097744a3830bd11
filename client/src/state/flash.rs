//! Flash-notice state shared by every admin screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens publish notices under a namespace key (e.g. `"roles"`) and render
//! only their own namespace through `FlashMessageRender`, so one screen can
//! clear its notices without touching another's.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use crate::net::http::{HttpError, http_error_to_human};

/// Severity of a flash notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashType {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl FlashType {
    /// CSS modifier used by the notice renderer.
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: u64,
    /// Namespace this notice belongs to. `None` shows on unfiltered renders only.
    pub key: Option<String>,
    pub kind: FlashType,
    pub title: Option<String>,
    pub message: String,
}

/// Notices currently on screen, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct FlashState {
    pub items: Vec<FlashMessage>,
    next_id: u64,
}

impl FlashState {
    /// Add a notice and return its id.
    pub fn add_flash(&mut self, key: Option<&str>, kind: FlashType, title: Option<&str>, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(FlashMessage {
            id,
            key: key.map(str::to_owned),
            kind,
            title: title.map(str::to_owned),
            message: message.to_owned(),
        });
        id
    }

    /// Add an error notice under `key`.
    pub fn add_error(&mut self, key: &str, message: &str) -> u64 {
        self.add_flash(Some(key), FlashType::Error, Some("Error"), message)
    }

    /// Remove every notice in `key`, or every notice when `key` is `None`.
    pub fn clear_flashes(&mut self, key: Option<&str>) {
        match key {
            Some(key) => self.items.retain(|m| m.key.as_deref() != Some(key)),
            None => self.items.clear(),
        }
    }

    /// Replace the notices in `key` with the humanized form of `err`.
    pub fn clear_and_add_http_error(&mut self, key: &str, err: &HttpError) -> u64 {
        self.clear_flashes(Some(key));
        self.add_error(key, &http_error_to_human(err))
    }

    /// Remove one notice (user dismissal). Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|m| m.id != id);
    }

    /// Notices for `key`, or all notices when `key` is `None`.
    pub fn by_key(&self, key: Option<&str>) -> Vec<FlashMessage> {
        self.items
            .iter()
            .filter(|m| key.is_none() || m.key.as_deref() == key)
            .cloned()
            .collect()
    }
}
