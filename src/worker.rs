//! Line-oriented JSON protocol for out-of-process harnesses.
//!
//! One [`Job`] per input line, one [`Reply`] per output line, flushed after
//! each so a peer can drive the worker interactively over pipes. A job that
//! fails still gets a reply (`is_error: true`); only transport failures end
//! the loop.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::registry::FixtureRegistry;

/// A render request from the peer.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Echoed back in the reply so the peer can match responses
    pub id: u64,
    /// Registered fixture name
    pub fixture: String,
    /// JSON props handed to the fixture; null when omitted
    #[serde(default)]
    pub props: serde_json::Value,
}

/// The worker's answer to a [`Job`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: u64,
    /// Rendered markup, or the error display when `is_error` is set
    pub value: String,
    pub is_error: bool,
}

/// Serve jobs from `input` until it is exhausted.
///
/// Blank lines are skipped. Malformed lines are logged and skipped rather
/// than poisoning the stream, since the peer may interleave diagnostics of
/// its own on the pipe.
pub fn run_worker<R, W>(
    registry: &FixtureRegistry,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let job = match serde_json::from_str::<Job>(&line) {
            Ok(job) => job,
            Err(e) => {
                log::warn!("skipping malformed job line: {}", e);
                continue;
            }
        };

        let reply = match registry.invoke(&job.fixture, job.props) {
            Ok(markup) => Reply {
                id: job.id,
                value: markup,
                is_error: false,
            },
            Err(e) => Reply {
                id: job.id,
                value: e.to_string(),
                is_error: true,
            },
        };

        let encoded = serde_json::to_string(&reply).unwrap_or_else(|_| {
            format!(
                "{{\"id\":{},\"value\":\"serialization failed\",\"is_error\":true}}",
                reply.id
            )
        });
        writeln!(output, "{}", encoded)?;
        output.flush()?;
    }
    Ok(())
}
