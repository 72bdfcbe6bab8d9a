// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts report conditions the page itself cannot show: a settings file
//! that failed to parse, a missing API token, a request that failed.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget for rendering notifications
//!
//! # Design Considerations
//!
//! - Info toasts last 3s, warnings 6s, errors stay until dismissed
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
