//! Tests for image decoders

use super::*;

#[test]
fn test_image_buffer_rejects_wrong_length() {
    let result = ImageBuffer::new(2, 2, vec![0u8; 15]);
    match result {
        Err(AnalysisError::InvalidBuffer {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("expected InvalidBuffer, got {:?}", other),
    }
}

#[test]
fn test_short_buffer_never_reaches_analysis() {
    // 4x4 needs 64 bytes; 8 must fail here, not panic later in a sampler
    match ImageBuffer::new(4, 4, vec![0u8; 8]) {
        Err(AnalysisError::InvalidBuffer { expected, .. }) => assert_eq!(expected, 64),
        other => panic!("expected InvalidBuffer, got {:?}", other),
    }

    let image = ImageBuffer::new(4, 4, vec![0u8; 64]).unwrap();
    assert_eq!(image.data().len(), image.pixel_count() * CHANNELS);
    assert_eq!((image.width(), image.height()), (4, 4));
}

#[test]
fn test_from_fn_is_row_major() {
    let image = ImageBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 7, 255]);
    assert_eq!(image.data().len(), 3 * 2 * 4);
    assert_eq!(image.pixel(2, 0), [2, 0, 7, 255]);
    assert_eq!(image.pixel(1, 1), [1, 1, 7, 255]);
    // Second row starts after three pixels
    assert_eq!(&image.data()[12..16], &[0, 1, 7, 255]);
}

#[test]
fn test_expand_to_rgba_channel_layouts() {
    assert_eq!(expand_to_rgba(&[9], 1).unwrap(), vec![9, 9, 9, 255]);
    assert_eq!(expand_to_rgba(&[9, 100], 2).unwrap(), vec![9, 9, 9, 100]);
    assert_eq!(expand_to_rgba(&[1, 2, 3], 3).unwrap(), vec![1, 2, 3, 255]);
    assert!(expand_to_rgba(&[1, 2, 3, 4, 5], 5).is_err());
}

#[test]
fn test_decode_png_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("face.png");

    // Write a tiny 2x1 RGB PNG
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = ::png::Encoder::new(std::io::BufWriter::new(file), 2, 1);
        encoder.set_color(::png::ColorType::Rgb);
        encoder.set_depth(::png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&[200, 150, 120, 10, 20, 30])
            .unwrap();
    }

    let image = decode_image(&path).unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 1);
    assert_eq!(image.pixel(0, 0), [200, 150, 120, 255]);
    assert_eq!(image.pixel(1, 0), [10, 20, 30, 255]);
}

#[test]
fn test_decode_rejects_unknown_extension() {
    let result = decode_image("portrait.bmp");
    assert!(matches!(result, Err(AnalysisError::Decode(_))));
}
