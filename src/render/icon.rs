use std::fmt;

/// Icon bucket a file falls into, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Video,
    Image,
    Audio,
    Document,
    Generic,
}

/// Glyph shown in front of a directory name.
pub const FOLDER_GLYPH: &str = "\u{1f4c1}"; // 📁

impl IconCategory {
    /// Glyph shown in front of the file name.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Video => "\u{1f3a5}",           // 🎥
            Self::Image => "\u{1f5bc}\u{fe0f}",   // 🖼️
            Self::Audio => "\u{1f3b5}",           // 🎵
            Self::Document => "\u{1f4c4}",        // 📄
            Self::Generic => "\u{1f4ce}",         // 📎
        }
    }

    /// Stable lowercase identifier, used as the `data-icon` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a file name by the text after its last `.` (case-insensitive).
///
/// A name without a dot is compared whole and so lands in `Generic`.
pub fn classify_icon(filename: &str) -> IconCategory {
    let ext = filename
        .rsplit_once('.')
        .map_or(filename, |(_, ext)| ext)
        .to_ascii_lowercase();

    match ext.as_str() {
        "mp4" | "webm" | "mov" => IconCategory::Video,
        "jpg" | "jpeg" | "png" | "gif" | "webp" => IconCategory::Image,
        "mp3" | "wav" | "ogg" => IconCategory::Audio,
        "pdf" | "doc" | "docx" | "txt" => IconCategory::Document,
        _ => IconCategory::Generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_extensions() {
        assert_eq!(classify_icon("clip.webm"), IconCategory::Video);
        assert_eq!(classify_icon("photo.jpeg"), IconCategory::Image);
        assert_eq!(classify_icon("song.ogg"), IconCategory::Audio);
        assert_eq!(classify_icon("report.docx"), IconCategory::Document);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify_icon("movie.MP4"), IconCategory::Video);
        assert_eq!(classify_icon("Photo.PnG"), IconCategory::Image);
        assert_eq!(classify_icon("doc.txt"), IconCategory::Document);
    }

    #[test]
    fn test_classify_uses_last_extension() {
        assert_eq!(classify_icon("archive.mp4.zip"), IconCategory::Generic);
        assert_eq!(classify_icon("notes.backup.txt"), IconCategory::Document);
    }

    #[test]
    fn test_classify_fallbacks() {
        assert_eq!(classify_icon("noext"), IconCategory::Generic);
        assert_eq!(classify_icon(""), IconCategory::Generic);
        assert_eq!(classify_icon("trailing."), IconCategory::Generic);
        // The whole name is the "extension" when there is no dot.
        assert_eq!(classify_icon("mp4"), IconCategory::Video);
    }

    #[test]
    fn test_category_identifiers() {
        assert_eq!(IconCategory::Image.to_string(), "image");
        assert_eq!(IconCategory::Generic.glyph(), "\u{1f4ce}");
    }
}
