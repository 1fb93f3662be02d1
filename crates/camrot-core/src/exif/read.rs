//! Reading the orientation tag from a captured JPEG/TIFF container.

use std::io::Cursor;

use exif::{In, Reader, Tag};

use super::{ExifError, ExifOrientation};

/// Read the EXIF orientation of a captured frame.
///
/// # Errors
///
/// Returns `ExifError::Parse` if the container has no readable EXIF block,
/// `ExifError::MissingTag` if the block has no orientation, and
/// `ExifError::InvalidValue` if the tag value is outside 1-8.
pub fn read_orientation(bytes: &[u8]) -> Result<ExifOrientation, ExifError> {
    let mut cursor = Cursor::new(bytes);
    let exif = Reader::new()
        .read_from_container(&mut cursor)
        .map_err(|e| ExifError::Parse(e.to_string()))?;

    let value = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .ok_or(ExifError::MissingTag)?;

    ExifOrientation::from_tag(value)
}

/// Like [`read_orientation`] but returns `Normal` on any failure.
pub fn orientation_or_normal(bytes: &[u8]) -> ExifOrientation {
    read_orientation(bytes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// JPEG markers around a big-endian TIFF block holding only an
    /// orientation entry with the given value.
    fn jpeg_with_orientation(value: u16) -> Vec<u8> {
        let [hi, lo] = value.to_be_bytes();
        let mut bytes = vec![
            0xFF, 0xD8, // SOI
            0xFF, 0xE1, 0x00, 0x22, // APP1, length 34
            b'E', b'x', b'i', b'f', 0x00, 0x00, // Exif identifier
            b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // TIFF header
            0x00, 0x01, // one entry
            0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, // Orientation, SHORT, count 1
        ];
        bytes.extend_from_slice(&[hi, lo, 0x00, 0x00]);
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // no next IFD
        bytes.extend_from_slice(&[0xFF, 0xD9]); // EOI
        bytes
    }

    #[test]
    fn test_read_orientation() {
        let bytes = jpeg_with_orientation(6);
        assert_eq!(
            read_orientation(&bytes).unwrap(),
            ExifOrientation::Rotate90CW
        );
    }

    #[test]
    fn test_read_every_tag_value() {
        for value in 1..=8u16 {
            let bytes = jpeg_with_orientation(value);
            let orientation = read_orientation(&bytes).unwrap();
            assert_eq!(u16::from(orientation.tag()), value);
        }
    }

    #[test]
    fn test_read_invalid_value() {
        let bytes = jpeg_with_orientation(42);
        assert!(matches!(
            read_orientation(&bytes),
            Err(ExifError::InvalidValue(42))
        ));
        assert_eq!(orientation_or_normal(&bytes), ExifOrientation::Normal);
    }

    #[test]
    fn test_read_garbage() {
        let bytes = [0x00, 0x01, 0x02, 0x03];
        assert!(matches!(
            read_orientation(&bytes),
            Err(ExifError::Parse(_))
        ));
        assert_eq!(orientation_or_normal(&bytes), ExifOrientation::Normal);
    }

    #[test]
    fn test_read_empty() {
        assert!(read_orientation(&[]).is_err());
        assert_eq!(orientation_or_normal(&[]), ExifOrientation::Normal);
    }
}
