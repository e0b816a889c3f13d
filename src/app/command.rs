use crate::domain::models::Route;

/// Side effects the reducer hands back to the runtime, which forwards them
/// to the `ShellHost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Route),
    ExecuteAction(&'static str),
}
