//! Image Upload Checks
//!
//! MIME/size validation for correction images and the per-row preview slot.

use crate::config::FormConfig;
use crate::error::FileRejection;

/// Metadata of the file currently selected in a row's file input
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// What to do with an accepted file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// Narrow viewport: read the file and show a preview
    WithPreview,
    /// Wide viewport: keep the selection, no preview
    Plain,
}

/// Validate a selected file. Type is checked before size.
pub fn check_image(config: &FormConfig, image: &ImageMeta) -> Result<(), FileRejection> {
    let mime = image.mime.to_ascii_lowercase();
    if !config.allowed_image_types.iter().any(|t| t.eq_ignore_ascii_case(&mime)) {
        return Err(FileRejection::UnsupportedType { mime: image.mime.clone() });
    }
    if image.size > config.max_upload_bytes {
        return Err(FileRejection::TooLarge { size: image.size, max: config.max_upload_bytes });
    }
    Ok(())
}

/// Check a selection and decide whether it gets a preview
pub fn classify(config: &FormConfig, image: &ImageMeta, viewport_width: f64) -> Result<Accepted, FileRejection> {
    check_image(config, image)?;
    if viewport_width <= config.mobile_breakpoint_px {
        Ok(Accepted::WithPreview)
    } else {
        Ok(Accepted::Plain)
    }
}

/// Token tying an async file read to the selection that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket(u64);

/// Preview state of one row. Only the newest read may land.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewSlot {
    generation: u64,
    data_url: Option<String>,
}

impl PreviewSlot {
    /// Start a read for a new selection; older pending reads become stale
    pub fn begin(&mut self) -> PreviewTicket {
        self.generation += 1;
        PreviewTicket(self.generation)
    }

    /// Store a finished read. Returns false if the ticket was superseded.
    pub fn complete(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.data_url = Some(data_url);
        true
    }

    /// Drop the preview and invalidate any pending read
    pub fn clear(&mut self) {
        self.generation += 1;
        self.data_url = None;
    }

    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }

    pub fn is_shown(&self) -> bool {
        self.data_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(mime: &str, size: u64) -> ImageMeta {
        ImageMeta { name: "foto".into(), mime: mime.into(), size }
    }

    #[test]
    fn test_allowed_types() {
        let config = FormConfig::default();
        for mime in ["image/png", "image/jpeg", "image/jpg", "image/gif", "image/webp"] {
            assert!(check_image(&config, &image(mime, 1024)).is_ok(), "{mime}");
        }
        assert!(check_image(&config, &image("IMAGE/PNG", 1024)).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        let config = FormConfig::default();
        let err = check_image(&config, &image("application/pdf", 10)).unwrap_err();
        assert!(matches!(err, FileRejection::UnsupportedType { .. }));
        assert!(check_image(&config, &image("", 10)).is_err());
        assert!(check_image(&config, &image("image/svg+xml", 10)).is_err());
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let config = FormConfig::default();
        let max = 32 * 1024 * 1024;
        assert!(check_image(&config, &image("image/png", max)).is_ok());
        let err = check_image(&config, &image("image/png", max + 1)).unwrap_err();
        assert_eq!(err, FileRejection::TooLarge { size: max + 1, max });
    }

    #[test]
    fn test_type_checked_before_size() {
        let config = FormConfig::default();
        let err = check_image(&config, &image("text/plain", u64::MAX)).unwrap_err();
        assert!(matches!(err, FileRejection::UnsupportedType { .. }));
    }

    #[test]
    fn test_preview_only_on_narrow_viewport() {
        let config = FormConfig::default();
        let img = image("image/webp", 2048);
        assert_eq!(classify(&config, &img, 768.0), Ok(Accepted::WithPreview));
        assert_eq!(classify(&config, &img, 375.0), Ok(Accepted::WithPreview));
        assert_eq!(classify(&config, &img, 1024.0), Ok(Accepted::Plain));
    }

    #[test]
    fn test_stale_read_is_dropped() {
        let mut slot = PreviewSlot::default();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.complete(second, "data:image/png;base64,BBB".into()));
        assert!(!slot.complete(first, "data:image/png;base64,AAA".into()));
        assert_eq!(slot.data_url(), Some("data:image/png;base64,BBB"));
    }

    #[test]
    fn test_clear_invalidates_pending_read() {
        let mut slot = PreviewSlot::default();
        let ticket = slot.begin();
        slot.clear();
        assert!(!slot.complete(ticket, "data:,".into()));
        assert!(!slot.is_shown());
    }
}
