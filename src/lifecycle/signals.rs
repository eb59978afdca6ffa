//! OS signal handling.
//!
//! Only SIGINT matters: commands are one-shot, so an interrupt ends the
//! process instead of triggering a graceful drain.

/// Resolves when the user presses Ctrl-C.
///
/// If the handler cannot be installed this never resolves, leaving the
/// default signal disposition in place.
pub async fn interrupted() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::warn!("Interrupt received, aborting"),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
