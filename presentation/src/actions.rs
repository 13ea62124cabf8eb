//! Running row actions in the console host.
//!
//! - open URL: hand the link to the system browser via `open`
//! - copy: the content is returned for the caller to print on stdout, so
//!   it can be piped into the platform clipboard tool
//! - push: the target view is resolved and returned for rendering

use crate::view::model::{Action, DetailView, ViewTarget};
use thiserror::Error;
use tracing::info;

/// What running an action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Opened(String),
    Copied(String),
    Pushed(DetailView),
}

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Could not open {url}: {source}")]
    OpenFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Nothing to show for {0:?}")]
    UnknownTarget(ViewTarget),
}

/// Opens URLs. Abstracted so tests do not launch a browser.
pub trait UrlOpener {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Opens URLs with the platform's default handler.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// Run one action.
pub fn run_action(
    action: &Action,
    opener: &dyn UrlOpener,
    resolve: impl Fn(&ViewTarget) -> Option<DetailView>,
) -> Result<ActionOutcome, ActionError> {
    match action {
        Action::OpenUrl { url, .. } => {
            info!("Opening {}", url);
            opener
                .open(url)
                .map_err(|source| ActionError::OpenFailed {
                    url: url.clone(),
                    source,
                })?;
            Ok(ActionOutcome::Opened(url.clone()))
        }
        Action::CopyToClipboard { content, .. } => Ok(ActionOutcome::Copied(content.clone())),
        Action::Push { target, .. } => resolve(target)
            .map(ActionOutcome::Pushed)
            .ok_or_else(|| ActionError::UnknownTarget(target.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener(RefCell<Vec<String>>);

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> std::io::Result<()> {
            self.0.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingOpener;

    impl UrlOpener for FailingOpener {
        fn open(&self, _url: &str) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"))
        }
    }

    fn no_views(_: &ViewTarget) -> Option<DetailView> {
        None
    }

    #[test]
    fn test_open_url() {
        let opener = RecordingOpener::default();
        let outcome = run_action(&Action::open_url("Open", "https://x"), &opener, no_views).unwrap();

        assert_eq!(outcome, ActionOutcome::Opened("https://x".to_string()));
        assert_eq!(*opener.0.borrow(), vec!["https://x".to_string()]);
    }

    #[test]
    fn test_open_failure() {
        let err = run_action(&Action::open_url("Open", "https://x"), &FailingOpener, no_views)
            .unwrap_err();
        assert!(err.to_string().starts_with("Could not open https://x"));
    }

    #[test]
    fn test_copy_returns_content() {
        let outcome = run_action(
            &Action::copy("Copy card code to clipboard", "01001"),
            &FailingOpener,
            no_views,
        )
        .unwrap();
        assert_eq!(outcome, ActionOutcome::Copied("01001".to_string()));
    }

    #[test]
    fn test_push_resolves_target() {
        let target = ViewTarget::ItemJson {
            id: "a1".to_string(),
        };
        let view = DetailView {
            markdown: "```json\n{}\n```\n".to_string(),
            metadata: None,
        };

        let outcome = run_action(
            &Action::push("Show JSON", target.clone()),
            &FailingOpener,
            |t| (t == &target).then(|| view.clone()),
        )
        .unwrap();
        assert_eq!(outcome, ActionOutcome::Pushed(view));

        let err = run_action(&Action::push("Show JSON", target), &FailingOpener, no_views)
            .unwrap_err();
        assert!(matches!(err, ActionError::UnknownTarget(_)));
    }
}
