use super::*;
use crate::graph::kind::{Float, Mat4, Vec2, Vec4};

#[test]
fn identical_constructions_share_an_id() {
    let pool = ExprPool::new();
    let a = pool.uniform::<Vec4>("a") * pool.float(2.0);
    let b = pool.uniform::<Vec4>("a") * pool.float(2.0);

    assert_eq!(a.id(), b.id());
    assert_eq!(pool.len(), 3);
}

#[test]
fn kind_is_part_of_the_key() {
    let pool = ExprPool::new();
    let a = pool.uniform::<Vec2>("u");
    let b = pool.uniform::<Vec4>("u");
    assert_ne!(a.id(), b.id());
}

#[test]
fn literals_key_by_bit_pattern() {
    let pool = ExprPool::new();
    assert_ne!(pool.float(0.0).id(), pool.float(-0.0).id());
    assert_eq!(pool.float(f32::NAN).id(), pool.float(f32::NAN).id());
}

#[test]
fn digests_match_across_pools() {
    let p1 = ExprPool::new();
    let p2 = ExprPool::new();

    // Different interning order, same structure.
    let _ = p2.float(7.0);
    let a = p1.uniform::<Mat4>("m") * p1.attribute::<Vec4>("v");
    let b = p2.uniform::<Mat4>("m") * p2.attribute::<Vec4>("v");

    assert_ne!(a.id(), b.id());
    assert!(a.same_structure(b));
    assert_eq!(a, b);

    let c = p2.uniform::<Mat4>("n") * p2.attribute::<Vec4>("v");
    assert!(!a.same_structure(c));
}

#[test]
fn attribute_and_uniform_with_same_name_differ() {
    let pool = ExprPool::new();
    let a = pool.attribute::<Float>("x");
    let u = pool.uniform::<Float>("x");
    assert_ne!(a.id(), u.id());
    assert!(!a.same_structure(u));
}

#[test]
fn foreign_operands_are_adopted() {
    let home = ExprPool::new();
    let away = ExprPool::new();

    let shared = away.uniform::<Vec4>("c") * away.float(0.5);
    let local = home.uniform::<Vec4>("c") * home.float(0.5);
    let sum = local + shared;

    let table = home.table();
    let view = table.view(sum.id());
    let NodeView::Operator { lhs, rhs, .. } = view else {
        panic!("expected operator, got {view:?}");
    };
    assert_eq!(lhs, rhs);
    assert_eq!(lhs, local.id());
}

#[test]
fn adopting_keeps_dag_sharing() {
    let home = ExprPool::new();
    let away = ExprPool::new();

    let c = away.uniform::<Float>("a") * away.uniform::<Float>("b");
    let twice = c + c;
    let before = home.len();
    let adopted = home.float(1.0) + twice;

    // a, b, a*b, (a*b)+(a*b), 1.0 and the final sum.
    assert_eq!(home.len() - before, 6);
    assert!(adopted.pool().is_same(&home));
}

#[test]
fn find_named_inputs() {
    let pool = ExprPool::new();
    let a = pool.attribute::<Vec2>("aTexCoord");
    let u = pool.uniform::<Mat4>("uTransform");

    let table = pool.table();
    assert_eq!(table.find_attribute("aTexCoord", Kind::Vec2), Some(a.id()));
    assert_eq!(table.find_attribute("aTexCoord", Kind::Vec3), None);
    assert_eq!(table.find_uniform("uTransform", Kind::Mat4), Some(u.id()));
    assert_eq!(table.find_uniform("aTexCoord", Kind::Vec2), None);
    assert!(table.is_named_input(a.id()));
}
