use super::*;
use crate::foundation::error::ShaderError;
use crate::graph::kind::{Kind, Mat4, Vec2};

fn scope_with_inputs(pool: &ExprPool) -> Scope<'_> {
    let mut scope = Scope::new();
    scope
        .define("uTransform", pool.uniform::<Mat4>("uTransform").erase())
        .unwrap();
    scope
        .define("aPos", pool.attribute::<Vec2>("aPos").erase())
        .unwrap();
    scope.define("t", pool.dyn_uniform("t", Kind::Float)).unwrap();
    scope
}

#[test]
fn text_and_typed_construction_agree() {
    let pool = ExprPool::new();
    let scope = scope_with_inputs(&pool);

    let parsed = compile_expr(&pool, "uTransform * vec4(aPos, 0, 1)", &scope).unwrap();
    let built = pool.uniform::<Mat4>("uTransform")
        * pool.vec4((pool.attribute::<Vec2>("aPos"), pool.float(0.0), pool.float(1.0)));

    assert_eq!(parsed.kind(), Kind::Vec4);
    assert_eq!(parsed.id(), built.id());
}

#[test]
fn negative_literals_fold() {
    let pool = ExprPool::new();
    let scope = Scope::new();
    let e = compile_expr(&pool, "-2.5", &scope).unwrap();
    assert_eq!(e.id(), pool.float(-2.5).id());
}

#[test]
fn negating_an_expression_multiplies_by_minus_one() {
    let pool = ExprPool::new();
    let scope = scope_with_inputs(&pool);
    let e = compile_expr(&pool, "-sin(t)", &scope).unwrap();
    let expected = compile_expr(&pool, "sin(t) * -1.0", &scope).unwrap();
    assert_eq!(e, expected);
}

#[test]
fn negating_a_matrix_is_a_kind_error() {
    let pool = ExprPool::new();
    let scope = scope_with_inputs(&pool);
    let err = compile_expr(&pool, "t + -uTransform", &scope).unwrap_err();
    assert!(matches!(err, ShaderError::TypeMismatch(_)));
    assert!(
        err.to_string()
            .ends_with("unary minus is not defined for mat4 at byte 4"),
        "{err}"
    );
}

#[test]
fn varying_calls_mark_interpolation() {
    let pool = ExprPool::new();
    let scope = scope_with_inputs(&pool);
    let e = compile_expr(&pool, "varying(aPos)", &scope).unwrap();
    assert_eq!(e.id(), pool.attribute::<Vec2>("aPos").varying().id());

    let err = compile_expr(&pool, "varying(uTransform)", &scope).unwrap_err();
    assert!(matches!(err, ShaderError::TypeMismatch(_)));
}

#[test]
fn kind_errors_point_at_the_operator() {
    let pool = ExprPool::new();
    let scope = scope_with_inputs(&pool);
    let err = compile_expr(&pool, "t * uTransform", &scope).unwrap_err();
    assert!(matches!(err, ShaderError::TypeMismatch(_)));
    assert!(err.to_string().ends_with("at byte 2"), "{err}");
}

#[test]
fn unknown_names_are_validation_errors() {
    let pool = ExprPool::new();
    let scope = scope_with_inputs(&pool);

    let err = compile_expr(&pool, "t + missing", &scope).unwrap_err();
    assert!(matches!(err, ShaderError::Validation(_)));
    assert!(err.to_string().contains("'missing'"));

    let err = compile_expr(&pool, "smoothstep(t, t, t)", &scope).unwrap_err();
    assert!(matches!(err, ShaderError::Validation(_)));
}

#[test]
fn syntax_errors_convert() {
    let pool = ExprPool::new();
    let err = compile_expr(&pool, "vec4(1, 2", &Scope::new()).unwrap_err();
    assert!(matches!(err, ShaderError::Syntax(_)));
    assert!(err.to_string().starts_with("syntax error: at byte 9"));
}

#[test]
fn scope_rejects_redefinition() {
    let pool = ExprPool::new();
    let mut scope = Scope::new();
    scope.define("x", pool.dyn_float(1.0)).unwrap();
    assert!(matches!(
        scope.define("x", pool.dyn_float(2.0)),
        Err(ShaderError::Validation(_))
    ));
}
