use crate::config::AppConfig;
use crate::views::export::platforms::{FileSaver, SaveError};
use crate::views::export::types::{DownloadState, MediaReference};
use url::{ParseError, Url};

const CLOUD_STORAGE_SCHEME: &str = "gs://";

// Rewrite bucket locators onto the storage mirror so the browser can fetch them
pub fn resolve_locator(locator: &str, storage_mirror: &str) -> String {
    match locator.strip_prefix(CLOUD_STORAGE_SCHEME) {
        Some(object_path) => format!("{}/{}", storage_mirror.trim_end_matches('/'), object_path),
        None => locator.to_string(),
    }
}

/// Final path segment of `locator`, or `default_name` when there is none.
///
/// Query strings and fragments are never part of the name.
pub fn suggested_filename(locator: &str, default_name: &str) -> String {
    let last_segment = match Url::parse(locator) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(str::to_string),
        // Relative or otherwise unparseable: fall back to plain splitting
        Err(_) => locator
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .map(str::to_string),
    };

    match last_segment {
        Some(name) if !name.trim().is_empty() => name,
        _ => default_name.to_string(),
    }
}

/// Everything the platform needs to save one artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveInstruction {
    pub href: String,
    pub suggested_name: String,
}

impl SaveInstruction {
    pub fn build(media: &MediaReference, config: &AppConfig) -> Result<Self, SaveError> {
        let locator = media.locator().ok_or(SaveError::MissingLocator)?;
        let href = resolve_locator(locator, &config.storage_mirror);

        // Relative references are left for the platform to resolve
        match Url::parse(&href) {
            Ok(_) | Err(ParseError::RelativeUrlWithoutBase) => {}
            Err(e) => {
                return Err(SaveError::InvalidLocator {
                    locator: locator.to_string(),
                    reason: e.to_string(),
                })
            }
        }

        Ok(Self {
            suggested_name: suggested_filename(&href, &config.default_filename),
            href,
        })
    }

    pub fn issue(&self, saver: &dyn FileSaver) -> Result<(), SaveError> {
        saver.save_as(&self.href, &self.suggested_name)
    }
}

#[derive(Debug)]
pub enum TriggerOutcome {
    /// No locator: nothing happened.
    NoLocator,
    /// A previous click is still being handled.
    AlreadyInProgress,
    Issued(SaveInstruction),
    /// The failure was logged and absorbed.
    Failed(SaveError),
}

/// Handle a click on the download action.
///
/// `set_state` receives every state transition. Both the success and the
/// failure path end with [`DownloadState::IDLE`] before this returns.
pub fn trigger_download(
    media: &MediaReference,
    current: DownloadState,
    config: &AppConfig,
    saver: &dyn FileSaver,
    mut set_state: impl FnMut(DownloadState),
) -> TriggerOutcome {
    if media.locator().is_none() {
        return TriggerOutcome::NoLocator;
    }
    if current.in_progress {
        tracing::debug!("Download already in progress, ignoring click");
        return TriggerOutcome::AlreadyInProgress;
    }

    set_state(DownloadState::BUSY);

    let result = SaveInstruction::build(media, config).and_then(|instruction| {
        instruction.issue(saver)?;
        Ok(instruction)
    });

    let outcome = match result {
        Ok(instruction) => {
            tracing::info!(
                "Download issued for {} as {}",
                instruction.href,
                instruction.suggested_name
            );
            TriggerOutcome::Issued(instruction)
        }
        Err(e) => {
            tracing::error!("Error downloading video: {}", e);
            TriggerOutcome::Failed(e)
        }
    };

    set_state(DownloadState::IDLE);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSaver {
        saved: RefCell<Vec<(String, String)>>,
        fail: bool,
    }

    impl FileSaver for RecordingSaver {
        fn save_as(&self, uri: &str, suggested_name: &str) -> Result<(), SaveError> {
            if self.fail {
                return Err(SaveError::Browser("anchor click rejected".to_string()));
            }
            self.saved
                .borrow_mut()
                .push((uri.to_string(), suggested_name.to_string()));
            Ok(())
        }
    }

    fn run(media: &MediaReference, saver: &RecordingSaver) -> (TriggerOutcome, Vec<DownloadState>) {
        let mut transitions = Vec::new();
        let outcome = trigger_download(
            media,
            DownloadState::IDLE,
            &AppConfig::default(),
            saver,
            |state| transitions.push(state),
        );
        (outcome, transitions)
    }

    #[test]
    fn filename_is_last_path_segment() {
        assert_eq!(
            suggested_filename("https://host/path/to/movie.mp4", "video.mp4"),
            "movie.mp4"
        );
        assert_eq!(
            suggested_filename("https://host/clip.webm?token=abc#t=10", "video.mp4"),
            "clip.webm"
        );
        assert_eq!(suggested_filename("media/take-2.mp4?x=1", "video.mp4"), "take-2.mp4");
    }

    #[test]
    fn empty_final_segment_uses_default_name() {
        assert_eq!(suggested_filename("https://host/path/to/", "video.mp4"), "video.mp4");
        assert_eq!(suggested_filename("https://host", "video.mp4"), "video.mp4");
        assert_eq!(suggested_filename("data:video/mp4;base64,AAAA", "video.mp4"), "video.mp4");
    }

    #[test]
    fn bucket_locators_resolve_to_the_mirror() {
        assert_eq!(
            resolve_locator("gs://bucket/a/b.mp4", "https://storage.mtls.cloud.google.com/"),
            "https://storage.mtls.cloud.google.com/bucket/a/b.mp4"
        );
        assert_eq!(
            resolve_locator("https://host/movie.mp4", "https://mirror/"),
            "https://host/movie.mp4"
        );
    }

    #[test]
    fn download_goes_busy_then_idle_and_issues_once() {
        let saver = RecordingSaver::default();
        let media = MediaReference::new("https://host/path/to/movie.mp4");

        let (outcome, transitions) = run(&media, &saver);

        assert!(matches!(outcome, TriggerOutcome::Issued(_)));
        assert_eq!(transitions, vec![DownloadState::BUSY, DownloadState::IDLE]);
        assert_eq!(
            saver.saved.borrow().as_slice(),
            &[(
                "https://host/path/to/movie.mp4".to_string(),
                "movie.mp4".to_string()
            )]
        );
    }

    #[test]
    fn bucket_download_uses_mirror_href_and_object_name() {
        let saver = RecordingSaver::default();
        let media = MediaReference::new("gs://bucket/renders/b.mp4");

        let (outcome, _) = run(&media, &saver);

        match outcome {
            TriggerOutcome::Issued(instruction) => {
                assert_eq!(
                    instruction.href,
                    "https://storage.mtls.cloud.google.com/bucket/renders/b.mp4"
                );
                assert_eq!(instruction.suggested_name, "b.mp4");
            }
            other => panic!("expected issued download, got {other:?}"),
        }
    }

    #[test]
    fn missing_locator_is_a_silent_no_op() {
        let saver = RecordingSaver::default();
        let (outcome, transitions) = run(&MediaReference::default(), &saver);

        assert!(matches!(outcome, TriggerOutcome::NoLocator));
        assert!(transitions.is_empty());
        assert!(saver.saved.borrow().is_empty());
    }

    #[test]
    fn overlapping_click_is_ignored() {
        let saver = RecordingSaver::default();
        let media = MediaReference::new("https://host/movie.mp4");
        let mut transitions = Vec::new();

        let outcome = trigger_download(
            &media,
            DownloadState::BUSY,
            &AppConfig::default(),
            &saver,
            |state| transitions.push(state),
        );

        assert!(matches!(outcome, TriggerOutcome::AlreadyInProgress));
        assert!(transitions.is_empty());
        assert!(saver.saved.borrow().is_empty());
    }

    #[test]
    fn saver_failure_is_absorbed_and_state_returns_to_idle() {
        let saver = RecordingSaver {
            fail: true,
            ..Default::default()
        };
        let media = MediaReference::new("https://host/movie.mp4");

        let (outcome, transitions) = run(&media, &saver);
        assert!(matches!(outcome, TriggerOutcome::Failed(SaveError::Browser(_))));
        assert_eq!(transitions.last(), Some(&DownloadState::IDLE));

        // Still usable afterwards
        let healthy = RecordingSaver::default();
        let (outcome, _) = run(&media, &healthy);
        assert!(matches!(outcome, TriggerOutcome::Issued(_)));
    }

    #[test]
    fn relative_locator_is_issued_as_is() {
        let saver = RecordingSaver::default();
        let media = MediaReference::new("/media/take-2.mp4");

        let (outcome, transitions) = run(&media, &saver);

        assert!(matches!(outcome, TriggerOutcome::Issued(_)));
        assert_eq!(transitions, vec![DownloadState::BUSY, DownloadState::IDLE]);
        assert_eq!(
            saver.saved.borrow().as_slice(),
            &[("/media/take-2.mp4".to_string(), "take-2.mp4".to_string())]
        );
    }

    #[test]
    fn malformed_locator_fails_without_sticking_busy() {
        let saver = RecordingSaver::default();
        let media = MediaReference::new("http://[::1/clip.mp4");

        let (outcome, transitions) = run(&media, &saver);

        assert!(matches!(
            outcome,
            TriggerOutcome::Failed(SaveError::InvalidLocator { .. })
        ));
        assert_eq!(transitions, vec![DownloadState::BUSY, DownloadState::IDLE]);
        assert!(saver.saved.borrow().is_empty());
    }
}
