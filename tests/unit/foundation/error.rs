use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(AnimError::input("x").to_string().contains("input error:"));
    assert!(AnimError::trace("x").to_string().contains("trace error:"));
    assert!(AnimError::morph("x").to_string().contains("morph error:"));
    assert!(AnimError::media("x").to_string().contains("media error:"));
    assert!(
        AnimError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn no_path_data_names_the_image() {
    let err = AnimError::NoPathData(PathBuf::from("frames/a.png"));
    assert!(err.is_no_path_data());
    assert!(err.to_string().contains("frames/a.png"));
    assert!(!AnimError::trace("x").is_no_path_data());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AnimError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
