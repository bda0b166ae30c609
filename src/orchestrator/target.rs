// Tue Jan 13 2026 - Alex

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Firmware volume extractors dump every module as `<FILE_GUID>/body.bin`.
pub const EXTRACTED_BODY_NAME: &str = "body.bin";

const DOS_SIGNATURE: [u8; 2] = *b"MZ";
const TE_SIGNATURE: [u8; 2] = *b"VZ";

/// Join key shared by every sink: the module's file GUID when the binary was
/// extracted from a firmware volume, the file name otherwise.
pub fn target_id(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if base == EXTRACTED_BODY_NAME {
        if let Some(parent) = path.parent().and_then(|p| p.file_name()) {
            return parent.to_string_lossy().into_owned();
        }
    }

    base
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageKind {
    Pe,
    Te,
    Unknown,
}

impl ImageKind {
    pub fn from_header(bytes: &[u8]) -> Self {
        match bytes.get(..2) {
            Some(magic) if magic == DOS_SIGNATURE => ImageKind::Pe,
            Some(magic) if magic == TE_SIGNATURE => ImageKind::Te,
            _ => ImageKind::Unknown,
        }
    }

    /// Value of the `type` column in the `main` table.
    pub fn code(&self) -> u32 {
        match self {
            ImageKind::Pe => 0,
            ImageKind::Te => 1,
            ImageKind::Unknown => 2,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ImageKind::Te)
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageKind::Pe => write!(f, "PE32+"),
            ImageKind::Te => write!(f, "TE"),
            ImageKind::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_id_from_extracted_body() {
        let path = Path::new("/dump/7C04A583-9E3E-4F1C-AD65-E05268D0B4D1/body.bin");
        assert_eq!(target_id(path), "7C04A583-9E3E-4F1C-AD65-E05268D0B4D1");
    }

    #[test]
    fn test_target_id_plain_file() {
        assert_eq!(target_id(Path::new("/tmp/SmmAccess.efi")), "SmmAccess.efi");
        assert_eq!(target_id(Path::new("body.bin.bak")), "body.bin.bak");
    }

    #[test]
    fn test_image_kind() {
        assert_eq!(ImageKind::from_header(b"MZ\x90\x00"), ImageKind::Pe);
        assert_eq!(ImageKind::from_header(b"VZ"), ImageKind::Te);
        assert_eq!(ImageKind::from_header(b"M"), ImageKind::Unknown);
        assert!(!ImageKind::Te.is_supported());
        assert_eq!(ImageKind::Pe.code(), 0);
        assert_eq!(ImageKind::Te.code(), 1);
    }
}
