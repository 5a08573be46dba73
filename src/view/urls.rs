//! URL resolution policy for card images and document previews.

/// Directory bare image filenames are resolved against.
pub const IMAGE_DIR: &str = "img";

const DRIVE_FILE_MARKER: &str = "drive.google.com/file/d/";

/// Resolve an item's image source.
///
/// Empty or missing input yields no image region at all. Anything already
/// addressable (a URL with a scheme including `data:`, a root-relative
/// path, or an explicit relative path) passes through unchanged; a bare
/// filename resolves into the conventional image directory.
pub fn resolve_image_url(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with('/')
        || raw.starts_with("./")
        || raw.starts_with("../")
        || has_url_scheme(raw)
    {
        return Some(raw.to_string());
    }
    Some(format!("{IMAGE_DIR}/{raw}"))
}

/// Resolve the preview target for a document link.
///
/// Google Drive "file view" links are rewritten to Drive's dedicated inline
/// preview form, keeping the embedded file identifier; every other link is
/// used as-is. An empty link resolves to an empty target, which preview
/// handling treats as a no-op.
pub fn resolve_preview_url(link: &str) -> String {
    if let Some(marker) = link.find(DRIVE_FILE_MARKER) {
        let after = &link[marker + DRIVE_FILE_MARKER.len()..];
        if let Some((id, rest)) = after.split_once('/') {
            let is_view = rest == "view"
                || rest.starts_with("view?")
                || rest.starts_with("view#")
                || rest.starts_with("view/");
            if !id.is_empty() && is_view {
                return format!("{}{DRIVE_FILE_MARKER}{id}/preview", &link[..marker]);
            }
        }
    }
    link.to_string()
}

// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
fn has_url_scheme(s: &str) -> bool {
    let Some(colon) = s.find(':') else {
        return false;
    };
    let scheme = &s[..colon];
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
