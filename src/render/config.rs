//! Conversion options.

use image::codecs::png::{CompressionType, FilterType};

use super::driver::ConvertError;

/// Largest accepted face edge; one RGBA face at this size is 1 GiB.
pub const MAX_FACE_SIZE: u32 = 16384;

/// Options for a panorama-to-cubemap conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Edge length of every output face in pixels.
    pub face_size: u32,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            face_size: 512,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

impl ConvertOptions {
    /// Default options with the given face size.
    pub fn with_face_size(face_size: u32) -> Self {
        Self {
            face_size,
            ..Default::default()
        }
    }
}

/// Parses the face size argument. Must be in `1..=MAX_FACE_SIZE`.
pub fn parse_face_size(arg: &str) -> Result<u32, ConvertError> {
    let size = arg
        .trim()
        .parse::<u32>()
        .map_err(|e| ConvertError::InvalidSizeArgument {
            arg: arg.to_string(),
            reason: e.to_string(),
        })?;
    check_face_size(size)?;
    Ok(size)
}

/// Rejects face sizes of zero or above [`MAX_FACE_SIZE`].
pub fn check_face_size(size: u32) -> Result<(), ConvertError> {
    let reason = if size == 0 {
        "size must be greater than zero".to_string()
    } else if size > MAX_FACE_SIZE {
        format!("size must be at most {}", MAX_FACE_SIZE)
    } else {
        return Ok(());
    };
    Err(ConvertError::InvalidSizeArgument {
        arg: size.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_face_size() {
        assert_eq!(parse_face_size("512").unwrap(), 512);
        assert_eq!(parse_face_size(" 1 ").unwrap(), 1);
        assert_eq!(parse_face_size("16384").unwrap(), MAX_FACE_SIZE);
    }

    #[test]
    fn test_oversized_face_rejected() {
        for arg in ["16385", "99999", "4294967295"] {
            assert!(
                matches!(parse_face_size(arg), Err(ConvertError::InvalidSizeArgument { .. })),
                "{:?} should be rejected",
                arg
            );
        }
        assert!(check_face_size(MAX_FACE_SIZE + 1).is_err());
        assert!(check_face_size(0).is_err());
        assert!(check_face_size(1).is_ok());
    }

    #[test]
    fn test_parse_face_size_rejects_invalid() {
        for arg in ["0", "-4", "abc", "", "12.5", "99999999999"] {
            let result = parse_face_size(arg);
            assert!(
                matches!(result, Err(ConvertError::InvalidSizeArgument { .. })),
                "{:?} should be rejected",
                arg
            );
        }
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::with_face_size(64);
        assert_eq!(options.face_size, 64);
        assert!(matches!(options.compression, CompressionType::Default));
        assert!(matches!(options.filter, FilterType::Adaptive));
    }
}
