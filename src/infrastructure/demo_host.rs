use crate::domain::host::ShellHost;
use crate::domain::models::Route;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Standalone stand-in for the real dashboard host: tracks nothing but
/// the simulated bot flag and answers with status text.
#[derive(Default)]
pub struct DemoHost {
    bot_running: Mutex<bool>,
}

impl DemoHost {
    fn bot_flag(&self) -> std::sync::MutexGuard<'_, bool> {
        // A poisoned flag is still just a bool; keep serving.
        self.bot_running
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl ShellHost for DemoHost {
    async fn navigate(&self, _route: Route) -> Result<()> {
        Ok(())
    }

    async fn execute_action(&self, action_id: &str) -> Result<String> {
        match action_id {
            "bot.start" => {
                let mut running = self.bot_flag();
                if *running {
                    bail!("trading bot is already running");
                }
                *running = true;
                Ok("Trading bot started".to_string())
            }
            "bot.stop" => {
                let mut running = self.bot_flag();
                if !*running {
                    bail!("trading bot is not running");
                }
                *running = false;
                Ok("Trading bot stopped".to_string())
            }
            "data.refresh" => Ok(format!(
                "Market data refreshed at {}",
                chrono::Local::now().format("%H:%M:%S")
            )),
            "data.screener" => Ok("Screener pass queued".to_string()),
            other => bail!("unknown action: {other}"),
        }
    }
}
