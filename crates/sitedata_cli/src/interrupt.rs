//! Ctrl-C handling.
//!
//! # Invariants
//! - An interrupt ends the process at once with status 0 and writes nothing
//!   to the data file.
//! - The listener is armed before the session shows its first prompt.

use anyhow::Context;
use log::{info, warn};
use sitedata_core::INTERRUPT_NOTICE;
use std::io::{self, Write};
use std::pin::pin;
use std::sync::mpsc;
use std::task::Poll;

/// Starts a background listener that turns Ctrl-C into an unsaved exit.
///
/// Returns once the signal handler is registered.
pub fn install_interrupt_handler(app: &'static str) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .build()
        .context("cannot start the interrupt listener")?;
    let (armed_tx, armed_rx) = mpsc::channel();

    std::thread::Builder::new()
        .name("interrupt".to_string())
        .spawn(move || {
            let result = runtime.block_on(async {
                let mut interrupt = pin!(tokio::signal::ctrl_c());
                // First poll registers the handler.
                if let Poll::Ready(result) = futures::poll!(interrupt.as_mut()) {
                    let _ = armed_tx.send(());
                    return result;
                }
                let _ = armed_tx.send(());
                interrupt.await
            });
            match result {
                Ok(()) => exit_on_interrupt(app),
                Err(err) => {
                    warn!("event=interrupt_listen module=cli status=error app={app} error={err}")
                }
            }
        })
        .context("cannot spawn the interrupt listener")?;

    armed_rx
        .recv()
        .context("interrupt listener stopped before arming")?;
    Ok(())
}

/// Writes the notice shown when a session is cut short.
pub fn write_interrupt_notice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{INTERRUPT_NOTICE}")?;
    out.flush()
}

fn exit_on_interrupt(app: &str) -> ! {
    let _ = write_interrupt_notice(&mut io::stdout());
    info!("event=app_exit module=cli app={app} outcome=Interrupted");
    log::logger().flush();
    std::process::exit(0)
}
