use crate::foundation::error::{ShaderError, ShaderResult};
use crate::graph::dynamic::DynExpr;
use crate::graph::kind::Kind;
use crate::graph::node::BinaryOp;
use crate::graph::pool::ExprPool;
use crate::graph::signatures::binary_result;
use crate::text::ast::Ast;
use crate::text::scope::Scope;

pub(crate) fn lower<'p>(
    pool: &'p ExprPool,
    ast: &Ast,
    scope: &Scope<'_>,
) -> ShaderResult<DynExpr<'p>> {
    match ast {
        Ast::Number(v) => Ok(pool.dyn_float(*v as f32)),
        Ast::Ident { name, offset } => {
            let e = scope.get(name).ok_or_else(|| {
                ShaderError::validation(format!("unknown identifier '{name}' at byte {offset}"))
            })?;
            Ok(pool.dyn_expr(pool.adopt(e.pool(), e.id())))
        }
        Ast::Neg { expr, offset } => match expr.as_ref() {
            Ast::Number(v) => Ok(pool.dyn_float(-*v as f32)),
            inner => {
                let e = lower(pool, inner, scope)?;
                if binary_result(BinaryOp::Mul, e.kind(), Kind::Float).is_none() {
                    return Err(ShaderError::type_mismatch(format!(
                        "unary minus is not defined for {} at byte {offset}",
                        e.kind()
                    )));
                }
                e.try_mul(pool.dyn_float(-1.0)).map_err(|err| at(err, *offset))
            }
        },
        Ast::Binary {
            op,
            left,
            right,
            offset,
        } => {
            let l = lower(pool, left, scope)?;
            let r = lower(pool, right, scope)?;
            let out = match op {
                BinaryOp::Add => l.try_add(r),
                BinaryOp::Sub => l.try_sub(r),
                BinaryOp::Mul => l.try_mul(r),
            };
            out.map_err(|err| at(err, *offset))
        }
        Ast::Call { func, args, offset } => {
            let args = args
                .iter()
                .map(|a| lower(pool, a, scope))
                .collect::<ShaderResult<Vec<_>>>()?;
            let out = if func == "varying" {
                match args.as_slice() {
                    [inner] => inner.varying(),
                    _ => Err(ShaderError::type_mismatch(format!(
                        "varying() takes 1 argument, got {}",
                        args.len()
                    ))),
                }
            } else if let Some(kind) = Kind::from_glsl_name(func) {
                pool.dyn_construct(kind, &args)
            } else {
                pool.dyn_call(func, &args)
            };
            out.map_err(|err| at(err, *offset))
        }
    }
}

// Point construction errors at the operator or call that raised them.
fn at(err: ShaderError, offset: usize) -> ShaderError {
    match err {
        ShaderError::TypeMismatch(m) => ShaderError::type_mismatch(format!("{m} at byte {offset}")),
        ShaderError::Validation(m) => ShaderError::validation(format!("{m} at byte {offset}")),
        other => other,
    }
}
