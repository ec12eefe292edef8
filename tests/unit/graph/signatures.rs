use super::*;
use crate::graph::pool::ExprPool;

#[test]
fn mul_scalar_by_matrix_has_no_result() {
    assert_eq!(binary_result(BinaryOp::Mul, Kind::Float, Kind::Mat4), None);
    assert_eq!(binary_result(BinaryOp::Mul, Kind::Mat4, Kind::Float), None);
}

#[test]
fn matrix_vector_products() {
    assert_eq!(
        binary_result(BinaryOp::Mul, Kind::Mat4, Kind::Vec4),
        Some(Kind::Vec4)
    );
    assert_eq!(
        binary_result(BinaryOp::Mul, Kind::Vec4, Kind::Mat4),
        Some(Kind::Vec4)
    );
    assert_eq!(binary_result(BinaryOp::Add, Kind::Mat4, Kind::Vec4), None);
    assert_eq!(
        binary_result(BinaryOp::Mul, Kind::Mat4, Kind::Mat4),
        Some(Kind::Mat4)
    );
}

#[test]
fn vector_scalar_mixes_in_either_order() {
    for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul] {
        for v in [Kind::Vec2, Kind::Vec3, Kind::Vec4] {
            assert_eq!(binary_result(op, v, Kind::Float), Some(v));
            assert_eq!(binary_result(op, Kind::Float, v), Some(v));
        }
        assert_eq!(binary_result(op, Kind::Vec2, Kind::Vec3), None);
    }
}

#[test]
fn samplers_take_no_operators() {
    for k in Kind::ALL {
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul] {
            assert_eq!(binary_result(op, Kind::Sampler2D, k), None);
            assert_eq!(binary_result(op, k, Kind::Sampler2D), None);
        }
    }
}

#[test]
fn constructor_table() {
    assert!(construct_valid(Kind::Vec4, &[Kind::Vec2, Kind::Float, Kind::Float]));
    assert!(construct_valid(Kind::Vec4, &[Kind::Float, Kind::Vec3]));
    assert!(!construct_valid(Kind::Vec4, &[Kind::Vec2, Kind::Float]));
    assert!(!construct_valid(Kind::Float, &[Kind::Float]));
    assert!(construct_valid(
        Kind::Mat4,
        &[Kind::Vec4, Kind::Vec4, Kind::Vec4, Kind::Vec4]
    ));
    assert!(construct_signatures(Kind::Sampler2D).is_empty());
}

#[test]
fn function_table() {
    assert_eq!(
        call_result("texture2D", &[Kind::Sampler2D, Kind::Vec2]),
        Some(Kind::Vec4)
    );
    assert_eq!(call_result("texture2D", &[Kind::Sampler2D, Kind::Vec3]), None);
    assert_eq!(call_result("length", &[Kind::Vec3]), Some(Kind::Float));
    assert_eq!(call_result("sin", &[Kind::Mat4]), None);
    assert_eq!(
        call_result("mix", &[Kind::Vec3, Kind::Vec3, Kind::Float]),
        Some(Kind::Vec3)
    );
    assert_eq!(call_result("mix", &[Kind::Vec3, Kind::Vec3, Kind::Vec3]), None);
    assert_eq!(
        call_result("clamp", &[Kind::Vec2, Kind::Float, Kind::Float]),
        Some(Kind::Vec2)
    );
    assert_eq!(call_result("cross", &[Kind::Vec2, Kind::Vec2]), None);
    assert!(FUNCTION_NAMES.iter().all(|f| is_function(f)));
    assert!(!is_function("smoothstep"));
}

// The typed operator impls and the dynamic table must describe the same combinations.
#[test]
fn typed_operators_agree_with_table() {
    use crate::graph::kind::{Float, Mat4, Vec2, Vec3, Vec4};

    let pool = ExprPool::new();
    let f = pool.uniform::<Float>("f");
    let v2 = pool.uniform::<Vec2>("v2");
    let v3 = pool.uniform::<Vec3>("v3");
    let v4 = pool.uniform::<Vec4>("v4");
    let m = pool.uniform::<Mat4>("m");

    let typed = [
        (BinaryOp::Add, (f + f).kind(), Kind::Float, Kind::Float),
        (BinaryOp::Sub, (v2 - f).kind(), Kind::Vec2, Kind::Float),
        (BinaryOp::Mul, (f * v3).kind(), Kind::Float, Kind::Vec3),
        (BinaryOp::Add, (v4 + v4).kind(), Kind::Vec4, Kind::Vec4),
        (BinaryOp::Mul, (m * v4).kind(), Kind::Mat4, Kind::Vec4),
        (BinaryOp::Mul, (v4 * m).kind(), Kind::Vec4, Kind::Mat4),
        (BinaryOp::Sub, (m - m).kind(), Kind::Mat4, Kind::Mat4),
    ];
    for (op, kind, lhs, rhs) in typed {
        assert_eq!(binary_result(op, lhs, rhs), Some(kind));
    }
}

#[test]
fn dynamic_layer_rejects_scalar_matrix_product() {
    let pool = ExprPool::new();
    let s = pool.dyn_float(2.0);
    let m = pool.dyn_uniform("uTransform", Kind::Mat4);

    let err = s.try_mul(m).unwrap_err();
    assert!(matches!(err, crate::ShaderError::TypeMismatch(_)));
    assert!(err.to_string().contains("float"));
    assert!(err.to_string().contains("mat4"));
}

#[test]
fn dynamic_calls_distinguish_unknown_from_mistyped() {
    let pool = ExprPool::new();
    let v = pool.dyn_uniform("v", Kind::Vec3);

    let unknown = pool.dyn_call("smoothstep", &[v]).unwrap_err();
    assert!(matches!(unknown, crate::ShaderError::Validation(_)));

    let mistyped = pool.dyn_call("cross", &[v]).unwrap_err();
    assert!(matches!(mistyped, crate::ShaderError::TypeMismatch(_)));

    let ok = pool.dyn_call("normalize", &[v]).unwrap();
    assert_eq!(ok.kind(), Kind::Vec3);
}
