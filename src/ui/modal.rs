/// Fixed prefix of the modal header.
pub const TITLE_PREFIX: &str = "Preview";

/// Generic title used when the previewed card has none.
pub const FALLBACK_TITLE: &str = "Instruction";

/// What closed the preview.
///
/// The explicit close action, a pointer interaction on the backdrop
/// itself, and the cancellation key are all equivalent; the
/// variant exists so adapters can report what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseAction,
    Backdrop,
    CancelKey,
}

/// The shared preview overlay.
///
/// Two states: Closed (initial) and Open. At most one preview is active at a
/// time; opening while open replaces the current preview in place. Closing
/// clears the embedded source so nothing stays loaded behind a hidden
/// overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewModal {
    url: Option<String>,
    title: Option<String>,
}

impl PreviewModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.url.is_some()
    }

    /// Closed → Open (or replace-in-place when already open).
    ///
    /// An empty URL is a guarded no-op: the state is left untouched and
    /// `false` is returned.
    pub fn open(&mut self, url: &str, title: Option<&str>) -> bool {
        if url.is_empty() {
            return false;
        }
        self.url = Some(url.to_string());
        self.title = title.filter(|t| !t.is_empty()).map(str::to_string);
        true
    }

    /// Open → Closed: clear the source and hide the overlay. Closing an
    /// already-closed modal is harmless.
    pub fn close(&mut self, _trigger: CloseTrigger) {
        self.url = None;
        self.title = None;
    }

    /// The embedded preview source, when open.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Header text, e.g. `Preview: Milo the Rover`, when open.
    pub fn header(&self) -> Option<String> {
        self.url.as_ref()?;
        Some(format!(
            "{TITLE_PREFIX}: {}",
            self.title.as_deref().unwrap_or(FALLBACK_TITLE)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let modal = PreviewModal::new();
        assert!(!modal.is_open());
        assert!(modal.url().is_none());
        assert!(modal.header().is_none());
    }

    #[test]
    fn test_open_sets_source_and_header() {
        let mut modal = PreviewModal::new();
        assert!(modal.open("https://example.com/a.pdf", Some("Milo")));
        assert!(modal.is_open());
        assert_eq!(modal.url(), Some("https://example.com/a.pdf"));
        assert_eq!(modal.header().unwrap(), "Preview: Milo");
    }

    #[test]
    fn test_open_with_empty_url_is_a_no_op() {
        let mut modal = PreviewModal::new();
        assert!(!modal.open("", Some("Milo")));
        assert!(!modal.is_open());

        // Also when already open: the current preview stays.
        modal.open("https://example.com/a.pdf", Some("A"));
        assert!(!modal.open("", Some("B")));
        assert_eq!(modal.header().unwrap(), "Preview: A");
    }

    #[test]
    fn test_missing_title_falls_back() {
        let mut modal = PreviewModal::new();
        modal.open("https://example.com/a.pdf", None);
        assert_eq!(modal.header().unwrap(), "Preview: Instruction");

        modal.open("https://example.com/a.pdf", Some(""));
        assert_eq!(modal.header().unwrap(), "Preview: Instruction");
    }

    #[test]
    fn test_all_close_triggers_are_equivalent() {
        for trigger in [
            CloseTrigger::CloseAction,
            CloseTrigger::Backdrop,
            CloseTrigger::CancelKey,
        ] {
            let mut modal = PreviewModal::new();
            modal.open("https://example.com/a.pdf", Some("Milo"));
            modal.close(trigger);
            assert!(!modal.is_open());
            assert!(modal.url().is_none());
            assert!(modal.header().is_none());
        }
    }

    #[test]
    fn test_reopen_replaces_in_place() {
        let mut modal = PreviewModal::new();
        modal.open("https://example.com/a.pdf", Some("A"));
        modal.open("https://example.com/b.pdf", Some("B"));
        assert_eq!(modal.url(), Some("https://example.com/b.pdf"));
        assert_eq!(modal.header().unwrap(), "Preview: B");
    }
}
