use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

type SharedBar = Arc<Mutex<Option<ProgressBar>>>;

fn lock(bar: &SharedBar) -> MutexGuard<'_, Option<ProgressBar>> {
    bar.lock().unwrap_or_else(PoisonError::into_inner)
}

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the JSON on stdout.
/// Uses indicatif for the per-category progress bar.
pub struct StderrProgressReporter {
    progress_bar: SharedBar,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Arc::new(Mutex::new(None)),
        }
    }

    /// A writer for the tracing fmt layer that shares this reporter's bar
    pub fn log_writer(&self) -> ProgressAwareWriter {
        ProgressAwareWriter {
            progress_bar: Arc::clone(&self.progress_bar),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = lock(&self.progress_bar);
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} - {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = lock(&self.progress_bar).take() {
            pb.finish_and_clear();
        }
    }

    fn print_line(&self, line: &str) {
        match lock(&self.progress_bar).as_ref() {
            Some(pb) => pb.println(line),
            None => eprintln!("{}", line),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print_line(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.print_line(&message.yellow().to_string());
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message.green());
    }
}

/// Log lines are written to stderr with any active progress bar suspended,
/// so tracing output never tears the bar
#[derive(Clone)]
pub struct ProgressAwareWriter {
    progress_bar: SharedBar,
}

impl<'a> MakeWriter<'a> for ProgressAwareWriter {
    type Writer = SuspendingStderr;

    fn make_writer(&'a self) -> Self::Writer {
        SuspendingStderr {
            progress_bar: lock(&self.progress_bar).clone(),
        }
    }
}

pub struct SuspendingStderr {
    progress_bar: Option<ProgressBar>,
}

impl Write for SuspendingStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // One formatted event per call; write it whole while the bar is hidden
        match &self.progress_bar {
            Some(pb) => pb.suspend(|| io::stderr().write_all(buf))?,
            None => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
