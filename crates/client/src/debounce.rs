//! Trailing-edge debouncing of raw search input.
//!
//! Every input value reschedules a single timer; only the value present
//! when the timer finally fires is emitted. Superseding an input is a
//! true cancellation: the pending value is simply replaced and the old
//! one never reaches the network.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

/// Default quiet interval before a query is emitted.
///
/// Matches the search box's feel: long enough to swallow fast typing,
/// short enough not to read as lag.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(350);

/// Spawn a debouncer task.
///
/// Returns the input sender (feed raw values as the user types) and the
/// output receiver (yields one value per quiet period). The task exits
/// when `cancel` fires, when the input side is dropped, or when the
/// output side is dropped.
pub fn spawn_debouncer(
    delay: Duration,
    cancel: CancellationToken,
) -> (mpsc::UnboundedSender<String>, mpsc::UnboundedReceiver<String>) {
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();
    let (output_tx, output_rx) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        let mut pending: Option<String> = None;
        // Armed only while a value is pending; the initial deadline is
        // never observed.
        let timer = sleep(Duration::from_secs(86_400));
        tokio::pin!(timer);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,

                maybe = input_rx.recv() => match maybe {
                    Some(value) => {
                        // Reschedule: the previous pending value is
                        // superseded outright and will never fire.
                        pending = Some(value);
                        timer.as_mut().reset(Instant::now() + delay);
                    }
                    None => break,
                },

                _ = timer.as_mut(), if pending.is_some() => {
                    if let Some(value) = pending.take() {
                        if output_tx.send(value).is_err() {
                            break;
                        }
                    }
                }
            }
        }
    });

    (input_tx, output_rx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
