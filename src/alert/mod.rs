//! Discord alerting for detected opportunities.
//!
//! This module handles:
//! - Alert message rendering
//! - Webhook delivery

pub mod format;
pub mod notifier;

pub use format::render_alert;
pub use notifier::DiscordNotifier;
