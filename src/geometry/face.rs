//! The six skybox faces and their output numbering.

use serde::{Deserialize, Serialize};

/// A skybox face, named after the axis its centre pixel looks along.
///
/// The discriminant doubles as the number in the face's file name, and
/// faces are rendered in ascending discriminant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeFace {
    PosY = 0,
    NegY = 1,
    /// Looks straight up.
    PosZ = 2,
    /// Looks straight down.
    NegZ = 3,
    PosX = 4,
    NegX = 5,
}

/// Faces indexed by their discriminant.
const RENDER_ORDER: [CubeFace; 6] = [
    CubeFace::PosY,
    CubeFace::NegY,
    CubeFace::PosZ,
    CubeFace::NegZ,
    CubeFace::PosX,
    CubeFace::NegX,
];

impl CubeFace {
    /// Faces in the order they are rendered and written.
    pub const fn all() -> [CubeFace; 6] {
        RENDER_ORDER
    }

    /// Position in render order, also the `N` in `faceN.png`.
    pub const fn index(self) -> usize {
        self as u8 as usize
    }

    /// Inverse of [`CubeFace::index`]; `None` past the last face.
    pub fn from_index(index: usize) -> Option<CubeFace> {
        RENDER_ORDER.get(index).copied()
    }

    /// The face rendered after this one, or `None` for the last face.
    pub fn next(self) -> Option<CubeFace> {
        CubeFace::from_index(self.index() + 1)
    }

    /// Output file name for this face, e.g. `face2.png`.
    pub fn file_name(self) -> String {
        format!("face{}.png", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order_matches_discriminants() {
        for (position, face) in CubeFace::all().into_iter().enumerate() {
            assert_eq!(face as u8 as usize, position);
            assert_eq!(face.index(), position);
            assert_eq!(CubeFace::from_index(position), Some(face));
        }
    }

    #[test]
    fn test_from_index_past_last_face() {
        assert_eq!(CubeFace::from_index(6), None);
        assert_eq!(CubeFace::from_index(usize::MAX), None);
    }

    #[test]
    fn test_vertical_faces() {
        assert_eq!(CubeFace::from_index(2), Some(CubeFace::PosZ));
        assert_eq!(CubeFace::from_index(3), Some(CubeFace::NegZ));
    }

    #[test]
    fn test_next_walks_render_order() {
        let mut seen = vec![CubeFace::PosY];
        while let Some(face) = seen.last().unwrap().next() {
            seen.push(face);
        }
        assert_eq!(seen, CubeFace::all().to_vec());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(CubeFace::PosY.file_name(), "face0.png");
        assert_eq!(CubeFace::NegX.file_name(), "face5.png");
    }
}
