//! Progress reporting for catalog loads

use catalog_application::LoadProgressNotifier;
use catalog_domain::CatalogError;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on stderr while a catalog is being fetched
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for ProgressReporter {
    fn on_cache_restored(&self, catalog: &str, count: usize) {
        eprintln!(
            "{} {} cached {} from the last run",
            "->".cyan(),
            count,
            catalog
        );
    }

    fn on_fetch_start(&self, catalog: &str, url: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("Loading {}", catalog));
        pb.set_message(url.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_fetch_complete(&self, catalog: &str, count: usize) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_with_message(format!("{} {} {}", "v".green(), count, catalog));
        }
    }

    fn on_fetch_failed(&self, catalog: &str, error: &CatalogError) {
        if let Some(pb) = self.take_spinner() {
            pb.abandon_with_message(format!("{} {}: {}", "x".red(), catalog, error.kind()));
        }
    }
}

/// Simple text-based progress (no spinner), for non-interactive output
pub struct SimpleProgress;

impl LoadProgressNotifier for SimpleProgress {
    fn on_cache_restored(&self, catalog: &str, count: usize) {
        eprintln!("{} {} cached {}", "->".cyan(), count, catalog);
    }

    fn on_fetch_start(&self, catalog: &str, url: &str) {
        eprintln!("{} Loading {} from {}", "->".cyan(), catalog.bold(), url);
    }

    fn on_fetch_complete(&self, catalog: &str, count: usize) {
        eprintln!("  {} {} {}", "v".green(), count, catalog);
    }

    fn on_fetch_failed(&self, catalog: &str, error: &CatalogError) {
        eprintln!("  {} {} ({})", "x".red(), catalog, error.kind());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_is_cleared_on_every_outcome() {
        let reporter = ProgressReporter::new();

        reporter.on_fetch_start("cards", "http://localhost/cards");
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_fetch_complete("cards", 3);
        assert!(reporter.spinner.lock().unwrap().is_none());

        reporter.on_fetch_start("items", "http://localhost/items");
        reporter.on_fetch_failed("items", &CatalogError::network("offline"));
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
