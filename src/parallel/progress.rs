//! Batch-level progress reporting for sweeps.
//!
//! Progress is an injectable observer: the sweep invokes a callback per
//! batch of iterations and never writes to the terminal itself, so the
//! simulation core stays unit-testable without any UI attached.

use std::io::Write as _;

/// One progress notification: `completed` of `total` iterations done for
/// the batch currently evaluating `fraction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchUpdate {
    pub fraction: f64,
    pub completed: usize,
    pub total: usize,
}

/// Stderr progress line writer, the default observer installed by the CLI.
/// Rewrites a single line per fraction; purely observational.
#[derive(Debug, Clone, Copy, Default)]
pub struct Progress {
    quiet: bool,
}

impl Progress {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn observe(&mut self, update: BatchUpdate) {
        if self.quiet {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = write!(
            stderr,
            "\rskip fraction {:.3}: {} / {} iterations",
            update.fraction, update.completed, update.total
        );
        if update.completed >= update.total {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_progress_is_a_no_op() {
        let mut progress = Progress::new(true);
        progress.observe(BatchUpdate {
            fraction: 0.35,
            completed: 500,
            total: 1000,
        });
    }
}
