use super::*;

#[test]
fn default_prefix_when_nothing_collides() {
    assert_eq!(varying_prefix(["aPosition", "uTransform"]), "varying_");
}

#[test]
fn prefix_grows_past_colliding_names() {
    assert_eq!(varying_prefix(["varying_0"]), "varying__");
    assert_eq!(varying_prefix(["varying_0", "varying__x"]), "varying___");
}

#[test]
fn prefix_never_starts_any_taken_or_reserved_name() {
    let taken = ["varying_", "varying__a", "varying___", "v", "varying"];
    let prefix = varying_prefix(taken);
    assert!(taken.iter().all(|t| !t.starts_with(prefix.as_str())));
    assert!(reserved_names().all(|r| !r.starts_with(prefix.as_str())));
}

#[test]
fn reserved_names_cover_types_functions_and_outputs() {
    let names: Vec<&str> = reserved_names().collect();
    for n in ["float", "vec4", "sampler2D", "texture2D", "mix", "gl_Position", "main"] {
        assert!(names.contains(&n), "{n}");
    }
}
