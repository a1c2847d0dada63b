pub mod add;
pub mod components;
pub mod init;
pub mod publish;
pub mod render;

pub use add::{add, AddArgs};
pub use components::{components, ComponentsArgs};
pub use init::{init, InitArgs};
pub use publish::{publish, PublishArgs};
pub use render::{render, RenderArgs};

use colored::Colorize;
use shelf_editor::{BuilderSession, NotificationLevel};

/// Print and discard the session's pending notifications
pub(crate) fn report(session: &mut BuilderSession) {
    for notification in session.drain_notifications() {
        match notification.level {
            NotificationLevel::Success => println!("  {} {}", "✓".green(), notification.message),
            NotificationLevel::Info => println!("  {} {}", "•".bright_blue(), notification.message),
            NotificationLevel::Error => eprintln!("  {} {}", "✗".red(), notification.message),
        }
    }
}
