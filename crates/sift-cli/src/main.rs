//! sift-cli: line-oriented driver for the event dispatcher.
//!
//! Reads one JSON event per stdin line, dispatches it with a fresh
//! invocation id, and writes one envelope per stdout line. The program is a
//! filter: per-line failures become error envelopes, not a non-zero exit.
//!
//! Logging goes to stderr and is controlled with RUST_LOG, e.g.
//! `RUST_LOG=sift_core=debug sift-cli < events.jsonl`.

use std::io::{self, BufRead, Write};

use sift_core::domain::context::{Context, InvocationId};
use sift_core::domain::envelope::Envelope;
use sift_core::domain::errors::DispatchError;
use sift_core::handle;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let id = InvocationId::generate();
        let ctx = Context::with_invocation_id(id);

        let envelope = match serde_json::from_str(&line) {
            Ok(event) => handle(&event, &ctx),
            Err(err) => {
                // A line that is not JSON at all cannot be a mapping.
                debug!(invocation = %id, error = %err, "unparseable input line");
                Envelope::error([DispatchError::NotAnObject])
            }
        };

        serde_json::to_writer(&mut out, &envelope)?;
        out.write_all(b"\n")?;
    }

    Ok(())
}
