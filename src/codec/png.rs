//! Panorama decoding and PNG face output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageEncoder, RgbaImage};
use thiserror::Error;

use crate::geometry::CubeFace;
use crate::sampling::{GridError, PixelGrid};

/// One rendered skybox face, RGBA8 with opaque alpha.
pub type FaceImage = RgbaImage;

/// Errors raised while reading the panorama or writing faces.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Image decoding error: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Decoded image is unusable: {0}")]
    Grid(#[from] GridError),
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Output path exists and is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Image encoding error: {0}")]
    Encode(#[source] image::ImageError),
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Decodes an image in any enabled format into a source grid.
pub fn decode_panorama(bytes: &[u8]) -> Result<PixelGrid, CodecError> {
    let img = image::load_from_memory(bytes).map_err(CodecError::Decode)?;
    Ok(PixelGrid::from_image(&img)?)
}

/// Reads and decodes the panorama at `path`.
pub fn load_panorama(path: &Path) -> Result<PixelGrid, CodecError> {
    let bytes = fs::read(path).map_err(|source| CodecError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_panorama(&bytes)
}

/// Encodes a face as PNG.
pub fn encode_png(
    img: &FaceImage,
    compression: CompressionType,
    filter: FilterType,
) -> Result<Vec<u8>, CodecError> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut bytes, compression, filter);
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(CodecError::Encode)?;
    Ok(bytes)
}

/// Creates `path` if it does not exist.
///
/// Only the last component is created; a missing parent is an error.
pub fn ensure_directory(path: &Path) -> Result<(), CodecError> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(CodecError::NotADirectory(path.to_path_buf()));
    }
    fs::create_dir(path).map_err(|source| CodecError::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

/// Destination for finished faces.
pub trait FaceWriter {
    /// Persists one face. Called once per face, in face order.
    fn write_face(&mut self, face: CubeFace, img: &FaceImage) -> Result<(), CodecError>;
}

/// Writes each face as `face<index>.png` inside an output directory.
#[derive(Debug, Clone)]
pub struct PngFaceWriter {
    dir: PathBuf,
    compression: CompressionType,
    filter: FilterType,
}

impl PngFaceWriter {
    /// Ensures `dir` exists and returns a writer targeting it.
    pub fn create(dir: &Path, compression: CompressionType, filter: FilterType) -> Result<Self, CodecError> {
        ensure_directory(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            compression,
            filter,
        })
    }

    /// Full path of the file written for `face`.
    pub fn face_path(&self, face: CubeFace) -> PathBuf {
        self.dir.join(face.file_name())
    }
}

impl FaceWriter for PngFaceWriter {
    fn write_face(&mut self, face: CubeFace, img: &FaceImage) -> Result<(), CodecError> {
        let bytes = encode_png(img, self.compression, self.filter)?;
        let path = self.face_path(face);
        let write_err = |source: std::io::Error| CodecError::Write {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&bytes).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        log::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};
    use tempfile::tempdir;

    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(img.as_raw(), img.width(), img.height(), image::ExtendedColorType::Rgb8)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let mut img = RgbImage::new(4, 2);
        img.put_pixel(3, 1, Rgb([1, 2, 3]));
        let grid = decode_panorama(&png_bytes(&img)).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 2));
        assert_eq!(grid.get(3, 1), [1, 2, 3]);
        assert_eq!(grid.get(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_panorama(b"definitely not an image");
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_panorama(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(CodecError::Read { .. })));
    }

    #[test]
    fn test_encode_roundtrip_keeps_alpha() {
        let mut img = FaceImage::new(3, 3);
        for p in img.pixels_mut() {
            *p = Rgba([9, 8, 7, 255]);
        }
        let bytes = encode_png(&img, CompressionType::Default, FilterType::Adaptive).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_ensure_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("faces");

        ensure_directory(&out).unwrap();
        assert!(out.is_dir());
        // Existing directory is fine.
        ensure_directory(&out).unwrap();
    }

    #[test]
    fn test_ensure_directory_is_not_recursive() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let result = ensure_directory(&nested);
        assert!(matches!(result, Err(CodecError::DirectoryCreate { .. })));
        assert!(!dir.path().join("a").exists());
    }

    #[test]
    fn test_ensure_directory_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(ensure_directory(&file), Err(CodecError::NotADirectory(_))));
    }

    #[test]
    fn test_png_face_writer() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let mut writer = PngFaceWriter::create(&out, CompressionType::Fast, FilterType::NoFilter).unwrap();

        let img = FaceImage::from_pixel(5, 5, Rgba([1, 2, 3, 255]));
        writer.write_face(CubeFace::NegZ, &img).unwrap();

        let path = out.join("face3.png");
        assert_eq!(writer.face_path(CubeFace::NegZ), path);
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }
}
