use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShaderError::type_mismatch("x")
            .to_string()
            .contains("type mismatch:")
    );
    assert!(
        ShaderError::name_conflict("x")
            .to_string()
            .contains("name conflict:")
    );
    assert!(
        ShaderError::unbound("x")
            .to_string()
            .contains("unbound named reference:")
    );
    assert!(
        ShaderError::stage_violation("x")
            .to_string()
            .contains("stage violation:")
    );
    assert!(ShaderError::syntax("x").to_string().contains("syntax error:"));
    assert!(
        ShaderError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ShaderError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
