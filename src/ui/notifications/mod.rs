// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Network failures, submission results and configuration warnings are
//! reported as toasts in the bottom-right corner:
//!
//! - success/info disappear after ~3s, warnings after ~5s, errors stay until
//!   dismissed;
//! - at most three are visible, the rest are queued.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("detail-submit-success"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
