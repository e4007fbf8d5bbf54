//! Face rendering and the six-face conversion sequence.

use std::path::Path;

use thiserror::Error;

use crate::codec::{load_panorama, CodecError, FaceImage, FaceWriter, PngFaceWriter};
use crate::geometry::{map_direction_to_uv, map_face_to_direction, CubeFace};
use crate::sampling::{sample_bilinear, PixelGrid};

use super::config::{check_face_size, ConvertOptions};

/// Errors that abort a conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Expected 3 arguments, got {0}")]
    InvalidArgumentCount(usize),
    #[error("Invalid output size '{arg}': {reason}")]
    InvalidSizeArgument { arg: String, reason: String },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Where a [`FaceRenderer`] is in the six-face sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Nothing rendered yet.
    Idle,
    /// The next step renders and writes this face.
    Rendering(CubeFace),
    /// All six faces written.
    Done,
}

/// Renders one face of the skybox from the panorama.
///
/// Every output pixel is mapped to a cube direction, projected to panorama
/// UV and bilinearly sampled. Alpha is always 255.
pub fn render_face(source: &PixelGrid, face: CubeFace, face_size: u32) -> FaceImage {
    let mut img = FaceImage::new(face_size, face_size);

    for y in 0..face_size {
        for x in 0..face_size {
            let dir = map_face_to_direction(x, y, face, face_size);
            let uv = map_direction_to_uv(dir);
            img.put_pixel(x, y, sample_bilinear(source, uv).to_rgba());
        }
    }

    img
}

/// Steps through `Idle -> Rendering(face 0..5) -> Done`, writing each face
/// as soon as it is rendered.
///
/// A failed write leaves the renderer on the failing face and is returned
/// to the caller. Faces written before it stay written.
pub struct FaceRenderer<'a> {
    source: &'a PixelGrid,
    face_size: u32,
    state: RenderState,
}

impl<'a> FaceRenderer<'a> {
    pub fn new(source: &'a PixelGrid, face_size: u32) -> Result<Self, ConvertError> {
        check_face_size(face_size)?;
        Ok(Self {
            source,
            face_size,
            state: RenderState::Idle,
        })
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Advances by one state and returns the new state.
    pub fn step<W: FaceWriter + ?Sized>(&mut self, writer: &mut W) -> Result<RenderState, ConvertError> {
        match self.state {
            RenderState::Idle => {
                if !self.source.is_two_to_one() {
                    log::warn!(
                        "Source is {}x{}, not 2:1; horizontal sampling will be stretched",
                        self.source.width(),
                        self.source.height()
                    );
                }
                self.state = RenderState::Rendering(CubeFace::PosY);
            }
            RenderState::Rendering(face) => {
                log::info!("Converting face {}", face.index());
                let img = render_face(self.source, face, self.face_size);
                writer.write_face(face, &img)?;
                self.state = face.next().map_or(RenderState::Done, RenderState::Rendering);
            }
            RenderState::Done => {}
        }
        Ok(self.state)
    }

    /// Steps until every face has been written.
    pub fn run<W: FaceWriter + ?Sized>(&mut self, writer: &mut W) -> Result<(), ConvertError> {
        while self.state != RenderState::Done {
            self.step(writer)?;
        }
        Ok(())
    }
}

/// Renders all six faces of `source` into `writer`.
pub fn convert_panorama<W: FaceWriter + ?Sized>(
    source: &PixelGrid,
    face_size: u32,
    writer: &mut W,
) -> Result<(), ConvertError> {
    FaceRenderer::new(source, face_size)?.run(writer)
}

/// Converts the panorama at `input` into `face0.png`..`face5.png` in `output_dir`.
///
/// `output_dir` is created if missing (one level only).
pub fn convert_file(input: &Path, output_dir: &Path, options: &ConvertOptions) -> Result<(), ConvertError> {
    let source = load_panorama(input)?;
    log::info!(
        "Loaded {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let mut writer = PngFaceWriter::create(output_dir, options.compression, options.filter)?;
    convert_panorama(&source, options.face_size, &mut writer)
}
