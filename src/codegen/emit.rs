use crate::analyze::OccurrenceCounts;
use crate::codegen::binder::Binder;
use crate::foundation::error::{ShaderError, ShaderResult};
use crate::foundation::ids::NodeId;
use crate::graph::node::{Literal, NodeView};
use crate::graph::pool::NodeTable;

/// Render `id` as a GLSL expression.
///
/// Bound nodes render as their name and are not descended into; this is how hoisted
/// sub-expressions are reused and the only way named inputs are rendered. Operators are
/// fully parenthesized.
pub fn emit_expression(table: &NodeTable, id: NodeId, bindings: &Binder) -> ShaderResult<String> {
    let mut out = String::new();
    write_expression(table, id, bindings, &mut out)?;
    Ok(out)
}

// Pending output: a node still to render, or fixed text.
enum Piece<'t> {
    Node(NodeId),
    Text(&'t str),
}

// Iterative so that arbitrarily deep graphs do not grow the call stack.
fn write_expression(
    table: &NodeTable,
    id: NodeId,
    bindings: &Binder,
    out: &mut String,
) -> ShaderResult<()> {
    let mut work = vec![Piece::Node(id)];
    while let Some(piece) = work.pop() {
        let id = match piece {
            Piece::Text(s) => {
                out.push_str(s);
                continue;
            }
            Piece::Node(id) => id,
        };
        if let Some(name) = bindings.name_of(id) {
            out.push_str(name);
            continue;
        }

        match table.view(id) {
            NodeView::Operator { lhs, op, rhs } => {
                out.push('(');
                work.extend([
                    Piece::Text(")"),
                    Piece::Node(rhs),
                    Piece::Text(" "),
                    Piece::Text(op.symbol()),
                    Piece::Text(" "),
                    Piece::Node(lhs),
                ]);
            }
            NodeView::Call { name, args } => push_call(name, args, out, &mut work),
            NodeView::Construct { args } => {
                push_call(table.kind(id).glsl_name(), args, out, &mut work);
            }
            NodeView::Literal(Literal::Float(v)) => out.push_str(&format_literal(v)),
            NodeView::Attribute(name) => {
                return Err(ShaderError::unbound(format!("attribute '{name}'")));
            }
            NodeView::Uniform(name) => {
                return Err(ShaderError::unbound(format!("uniform '{name}'")));
            }
            NodeView::Varying(_) => {
                return Err(ShaderError::unbound(format!(
                    "{} varying (node {})",
                    table.kind(id),
                    id.index()
                )));
            }
        }
    }
    Ok(())
}

// Write `callee(` now and queue the arguments, separators and `)`.
fn push_call<'t>(
    callee: &str,
    args: &'t [NodeId],
    out: &mut String,
    work: &mut Vec<Piece<'t>>,
) {
    out.push_str(callee);
    out.push('(');
    work.push(Piece::Text(")"));
    for (i, arg) in args.iter().enumerate().rev() {
        work.push(Piece::Node(*arg));
        if i > 0 {
            work.push(Piece::Text(", "));
        }
    }
}

/// Hoist every sub-expression of `roots` that occurs more than once.
///
/// Occurrences are counted over all roots together, skipping nodes that already have a
/// name. Each hoisted node, in first-occurrence order, gets a fresh name derived from its
/// kind and is bound in `bindings` before the next one is rendered, so later statements
/// reuse earlier ones. Returns one declaration statement per hoisted node, without
/// indentation or trailing newline.
pub fn emit_block(
    table: &NodeTable,
    roots: &[NodeId],
    bindings: &mut Binder,
) -> ShaderResult<Vec<String>> {
    let hoisted: Vec<NodeId> = OccurrenceCounts::of_roots(table, roots, |n| !bindings.is_bound(n))
        .shared()
        .collect();

    let mut statements = Vec::with_capacity(hoisted.len());
    for id in hoisted {
        let kind = table.kind(id);
        let name = bindings.unique_name(kind.glsl_name());
        let value = emit_expression(table, id, bindings)?;
        bindings.bind(id, &name)?;
        statements.push(format!("{kind} {name} = {value};"));
    }
    Ok(statements)
}

/// Render a float constant so that it always parses as a GLSL float.
///
/// Finite values always carry a decimal point; non-finite values become constant divisions.
pub fn format_literal(v: f32) -> String {
    if v.is_nan() {
        return "(0.0 / 0.0)".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "(1.0 / 0.0)" } else { "(-1.0 / 0.0)" }.to_owned();
    }
    let mut s = v.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/emit.rs"]
mod tests;
