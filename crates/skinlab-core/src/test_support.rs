//! Synthetic images shared by unit tests

use crate::decoders::ImageBuffer;
use crate::region::{BoundingBox, SixZoneFaceRegion, SkinZone};

pub(crate) const FACE_SIZE: u32 = 60;
pub(crate) const BACKGROUND: [u8; 3] = [90, 90, 90];

/// Fixed zone layout on a 60x60 canvas; no two boxes overlap
pub(crate) fn face_layout() -> SixZoneFaceRegion {
    SixZoneFaceRegion {
        forehead: BoundingBox::new(10, 2, 40, 10),
        nose: BoundingBox::new(25, 16, 10, 16),
        left_cheek: BoundingBox::new(4, 26, 14, 14),
        right_cheek: BoundingBox::new(42, 26, 14, 14),
        chin: BoundingBox::new(20, 46, 20, 10),
        eye_area: BoundingBox::new(8, 13, 44, 2),
    }
}

/// Paint each zone of `face_layout()` with a flat color, in `SkinZone::ALL` order
pub(crate) fn synthetic_face(colors: [[u8; 3]; 6]) -> (ImageBuffer, SixZoneFaceRegion) {
    let layout = face_layout();
    let image = ImageBuffer::from_fn(FACE_SIZE, FACE_SIZE, |x, y| {
        for (zone, rgb) in SkinZone::ALL.iter().zip(colors.iter()) {
            let b = layout.zone(*zone);
            if x >= b.x && x < b.x + b.width && y >= b.y && y < b.y + b.height {
                return [rgb[0], rgb[1], rgb[2], 255];
            }
        }
        [BACKGROUND[0], BACKGROUND[1], BACKGROUND[2], 255]
    });
    (image, layout)
}

/// Same color in every zone
pub(crate) fn uniform_face(rgb: [u8; 3]) -> (ImageBuffer, SixZoneFaceRegion) {
    synthetic_face([rgb; 6])
}

/// Alternating black/white checkerboard
pub(crate) fn checkerboard(width: u32, height: u32) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            [0, 0, 0, 255]
        } else {
            [255, 255, 255, 255]
        }
    })
}
