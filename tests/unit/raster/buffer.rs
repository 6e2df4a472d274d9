use super::*;

#[test]
fn new_buffer_is_transparent_black() {
    let buf = PixelBuffer::new(3, 2).unwrap();
    assert_eq!(buf.as_bytes().len(), 3 * 2 * 4);
    assert!(buf.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(buf.rows().len(), 2);
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        PixelBuffer::new(0, 4),
        Err(AssetError::Validation(_))
    ));
    assert!(matches!(
        PixelBuffer::new(4, 0),
        Err(AssetError::Validation(_))
    ));
}

#[test]
fn from_rgba_checks_length() {
    assert!(PixelBuffer::from_rgba(2, 2, vec![0u8; 16]).is_ok());
    let err = PixelBuffer::from_rgba(2, 2, vec![0u8; 15]).unwrap_err();
    assert!(err.to_string().contains("expects 16 bytes"));
}

#[test]
fn set_pixel_uses_row_major_layout() {
    let mut buf = PixelBuffer::new(4, 3).unwrap();
    let c = Rgba8::rgba(1, 2, 3, 4);
    assert!(buf.set_pixel(2, 1, c));

    let idx = (4 + 2) * 4;
    assert_eq!(&buf.as_bytes()[idx..idx + 4], &[1, 2, 3, 4]);
    assert_eq!(buf.pixel(2, 1), Some(c));
}

#[test]
fn out_of_range_writes_are_clipped() {
    let mut buf = PixelBuffer::new(4, 3).unwrap();
    let c = Rgba8::rgb(9, 9, 9);
    assert!(!buf.set_pixel(-1, 0, c));
    assert!(!buf.set_pixel(4, 0, c));
    assert!(!buf.set_pixel(0, 3, c));
    assert!(!buf.set_pixel(0, -5, c));
    assert!(buf.as_bytes().iter().all(|&b| b == 0));
    assert_eq!(buf.pixel(4, 0), None);
}

#[test]
fn clip_span_bounds_to_limit() {
    let buf = PixelBuffer::new(10, 5).unwrap();
    assert_eq!(buf.clip_x(-3, 4), 0..4);
    assert_eq!(buf.clip_x(8, 40), 8..10);
    assert_eq!(buf.clip_x(6, 6), 0..0);
    assert_eq!(buf.clip_x(7, 2), 0..0);
    assert_eq!(buf.clip_y(-10, -1), 0..0);
    assert_eq!(buf.clip_y(3, 99), 3..5);
}
