use std::time::{Duration, Instant};
use tracing::info;

/// Counters for a single search run, logged through `tracing` periodically on
/// long runs and once more when the search finishes.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of unique nodes generated. Successors skipped because their
    /// board was already discovered do not count.
    generated_nodes: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Wall-clock time of the run, fixed when the search finishes
    search_duration: Option<Duration>,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub(crate) fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            search_start_time: Instant::now(),
            search_duration: None,
            last_log_time: Instant::now(),
        }
    }

    pub(crate) fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
    }

    pub(crate) fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    /// Elapsed wall-clock time of the run.
    pub fn elapsed(&self) -> Duration {
        self.search_duration
            .unwrap_or_else(|| self.search_start_time.elapsed())
    }

    pub(crate) fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 5 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes
        );
    }

    pub(crate) fn finalise(&mut self) {
        self.search_duration = Some(self.search_start_time.elapsed());
        self.log();
        info!(search_duration = self.elapsed().as_secs_f64());
    }
}
