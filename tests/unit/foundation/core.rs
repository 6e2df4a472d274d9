use super::*;

#[test]
fn rgb_is_opaque() {
    assert_eq!(Rgba8::rgb(10, 20, 30).a, 255);
    assert_eq!(Rgba8::default(), Rgba8::TRANSPARENT);
}

#[test]
fn with_alpha_keeps_channels() {
    let c = Rgba8::rgb(239, 68, 68).with_alpha(150);
    assert_eq!(c.to_array(), [239, 68, 68, 150]);
    assert_eq!(Rgba8::from_array(c.to_array()), c);
}
