use crate::domain::models::Route;
use anyhow::Result;
use async_trait::async_trait;

/// Boundary to the hosting application. Command actions resolved by the
/// palette and sidebar are forwarded here; the shell never inspects what
/// the host does with them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShellHost: Send + Sync {
    /// A navigation target was chosen (sidebar click or palette command).
    async fn navigate(&self, route: Route) -> Result<()>;

    /// An opaque action command was executed (e.g. "bot.start").
    /// Returns status text for the footer.
    async fn execute_action(&self, action_id: &str) -> Result<String>;
}
