//! Spinner shown while a request is in flight

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a spinner on stderr with the given label.
///
/// Nothing is drawn when stderr is not a terminal.
pub fn spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
