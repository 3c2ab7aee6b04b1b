//! Terminal implementations of the notifier and confirmation ports.

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use todo_core::{Confirm, Notifier, Severity};

/// Notifications go to stderr so they never interleave with a rendered list
/// mid-line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        let mut stderr = std::io::stderr().lock();
        // Nowhere left to report a failed stderr write.
        let _ = writeln!(stderr, "{}", format_notice(severity, message));
    }
}

pub fn format_notice(severity: Severity, message: &str) -> String {
    format!("{severity}: {message}")
}

/// Stdin, shared between the command loop and confirmation prompts.
pub struct LineReader {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl LineReader {
    pub fn stdin() -> Arc<Self> {
        Arc::new(Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        })
    }

    /// `None` at end of input or on a read error.
    pub async fn next_line(&self) -> Option<String> {
        self.lines.lock().await.next_line().await.ok().flatten()
    }
}

/// Prompts on stdout and reads the answer from the shared `LineReader`.
pub struct TerminalConfirm {
    input: Arc<LineReader>,
}

impl TerminalConfirm {
    pub fn new(input: Arc<LineReader>) -> Self {
        Self { input }
    }
}

#[async_trait]
impl Confirm for TerminalConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        {
            let mut stdout = std::io::stdout().lock();
            let _ = write!(stdout, "{prompt} [y/N] ");
            let _ = stdout.flush();
        }
        self.input
            .next_line()
            .await
            .is_some_and(|answer| is_yes(&answer))
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
