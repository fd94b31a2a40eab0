// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for viewer notices and shell errors.
//!
//! Notices raised by the viewer (reply sent, media unavailable) and shell
//! failures (config, catalog, history export) are shown as short-lived toasts
//! stacked in the bottom-right corner.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::from_notice(&notice));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
