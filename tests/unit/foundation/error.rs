use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AssetError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AssetError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_context_and_source() {
    use anyhow::Context as _;

    let res: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
    let err: AssetError = res.context("write asset 'public/x.png'").unwrap_err().into();
    let chain = format!("{err:#}");
    assert!(chain.contains("write asset 'public/x.png'"));
    assert!(chain.contains("disk full"));
}
