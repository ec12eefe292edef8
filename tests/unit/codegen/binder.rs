use super::*;

#[test]
fn reserve_rejects_duplicates() {
    let mut b = Binder::new();
    b.reserve("uTransform").unwrap();
    let err = b.reserve("uTransform").unwrap_err();
    assert!(matches!(err, ShaderError::NameConflict(_)));
}

#[test]
fn bind_rejects_used_names_and_rebinding() {
    let mut b = Binder::new();
    b.bind(NodeId(0), "a").unwrap();

    assert!(matches!(
        b.bind(NodeId(1), "a").unwrap_err(),
        ShaderError::NameConflict(_)
    ));
    assert!(matches!(
        b.bind(NodeId(0), "b").unwrap_err(),
        ShaderError::NameConflict(_)
    ));
    assert!(!b.is_used("b"));
    assert_eq!(b.name_of(NodeId(0)), Some("a"));
    assert_eq!(b.bound_len(), 1);
}

#[test]
fn unique_name_probes_suffixes_in_order() {
    let mut b = Binder::new();
    assert_eq!(b.unique_name("vec4"), "vec4");
    b.reserve("vec4").unwrap();
    assert_eq!(b.unique_name("vec4"), "vec4_0");
    // Not reserved yet, so asking again yields the same candidate.
    assert_eq!(b.unique_name("vec4"), "vec4_0");
    b.reserve("vec4_0").unwrap();
    b.reserve("vec4_2").unwrap();
    assert_eq!(b.unique_name("vec4"), "vec4_1");
    b.reserve("vec4_1").unwrap();
    assert_eq!(b.unique_name("vec4"), "vec4_3");
}

#[test]
fn reserved_words_force_suffixes() {
    let mut b = Binder::with_reserved_words();
    assert_eq!(b.unique_name("float"), "float_0");
    assert!(matches!(
        b.bind(NodeId(3), "sin").unwrap_err(),
        ShaderError::NameConflict(_)
    ));
}

#[test]
fn forks_are_independent() {
    let mut shared = Binder::new();
    shared.bind(NodeId(0), "uColor").unwrap();

    let mut vertex = shared.clone();
    vertex.bind(NodeId(1), "vec4_0").unwrap();
    let fragment = shared.clone();

    assert!(!fragment.is_bound(NodeId(1)));
    assert!(!fragment.is_used("vec4_0"));
    assert_eq!(fragment.name_of(NodeId(0)), Some("uColor"));
}

#[test]
fn identifiers_are_validated() {
    for bad in ["", "1abc", "a-b", "a b", "gl_Thing", "émoji"] {
        assert!(
            matches!(validate_identifier(bad), Err(ShaderError::Validation(_))),
            "{bad:?}"
        );
    }
    for good in ["a", "_a", "aVertexPosition", "u_1"] {
        validate_identifier(good).unwrap();
    }
}
