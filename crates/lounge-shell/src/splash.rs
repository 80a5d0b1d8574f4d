//! Splash screen gate.
//!
//! The banner stays up for a fixed delay; a Ctrl-C (or shell teardown)
//! cancels the timer before it fires so shutdown is never blocked on it.

use colored::Colorize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const BANNER: &str = r#"
  ██╗      ██████╗ ██╗   ██╗███╗   ██╗ ██████╗ ███████╗
  ██║     ██╔═══██╗██║   ██║████╗  ██║██╔════╝ ██╔════╝
  ██║     ██║   ██║██║   ██║██╔██╗ ██║██║  ███╗█████╗
  ██║     ██║   ██║██║   ██║██║╚██╗██║██║   ██║██╔══╝
  ███████╗╚██████╔╝╚██████╔╝██║ ╚████║╚██████╔╝███████╗
  ╚══════╝ ╚═════╝  ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝ ╚══════╝
"#;

/// Shows the banner, then waits out the splash delay or the cancel token,
/// whichever comes first.
pub async fn show(duration: Duration, cancel: &CancellationToken) {
    println!("{}", BANNER.bright_yellow());
    println!("{}", "       your living-room streaming deck".bright_black());
    println!();

    tokio::select! {
        _ = tokio::time::sleep(duration) => {}
        _ = cancel.cancelled() => {
            tracing::debug!("splash cancelled before dismissal");
        }
    }
}

/// Short launch interstitial shown when an app tile is opened.
pub async fn app_launch(name: &str) {
    println!("{}", format!("  Launching {}...", name).bright_cyan());
    tokio::time::sleep(Duration::from_millis(600)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn cancel_dismisses_the_splash_early() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        // Must return without advancing time by the full delay.
        show(Duration::from_secs(3600), &cancel).await;
    }
}
