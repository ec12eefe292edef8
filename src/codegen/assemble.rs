use crate::analyze::enumerate;
use crate::codegen::binder::Binder;
use crate::codegen::emit::{emit_block, emit_expression};
use crate::codegen::fingerprint::{ShaderFingerprint, fingerprint_pair};
use crate::codegen::reserved::varying_prefix;
use crate::foundation::error::{ShaderError, ShaderResult};
use crate::foundation::ids::NodeId;
use crate::graph::dynamic::DynExpr;
use crate::graph::kind::{Kind, Vec4};
use crate::graph::node::NodeView;
use crate::graph::pool::{ExprPool, NodeTable};
use crate::graph::typed::Expr;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default float precision declared by the fragment shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatPrecision {
    /// `lowp`
    Lowp,
    /// `mediump`
    #[default]
    Mediump,
    /// `highp`
    Highp,
}

impl FloatPrecision {
    /// Qualifier as written in GLSL source.
    pub fn glsl_name(self) -> &'static str {
        match self {
            FloatPrecision::Lowp => "lowp",
            FloatPrecision::Mediump => "mediump",
            FloatPrecision::Highp => "highp",
        }
    }
}

/// Output options for [`assemble_shader_pair_with`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShaderOpts {
    /// Precision of `float` in the fragment stage.
    pub float_precision: FloatPrecision,
    /// Emit `#version <n>` as the first line of both shaders.
    pub version: Option<u32>,
}

/// Generated vertex and fragment shader source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShaderPair {
    /// Vertex shader source.
    pub vertex: String,
    /// Fragment shader source.
    pub fragment: String,
}

impl ShaderPair {
    /// Stable digest of both sources.
    pub fn fingerprint(&self) -> ShaderFingerprint {
        fingerprint_pair(self)
    }
}

/// An image-generation program: where each vertex goes and what colour each fragment gets.
#[derive(Clone, Copy, Debug)]
pub struct Program<'p> {
    vertex_position: Expr<'p, Vec4>,
    fragment_colour: Expr<'p, Vec4>,
}

impl<'p> Program<'p> {
    /// Pair a vertex position with a fragment colour. The colour is adopted into the pool of
    /// the position when they come from different pools.
    pub fn new(vertex_position: Expr<'p, Vec4>, fragment_colour: Expr<'_, Vec4>) -> Self {
        let pool = vertex_position.pool;
        let colour = pool.adopt(fragment_colour.pool, fragment_colour.id);
        Self {
            vertex_position,
            fragment_colour: Expr::from_raw(pool, colour),
        }
    }

    /// Like [`Program::new`], checking at runtime that both outputs are `vec4`.
    pub fn from_dyn(
        vertex_position: DynExpr<'p>,
        fragment_colour: DynExpr<'_>,
    ) -> ShaderResult<Self> {
        for (what, e) in [
            ("vertex position", vertex_position),
            ("fragment colour", fragment_colour),
        ] {
            if e.kind() != Kind::Vec4 {
                return Err(ShaderError::type_mismatch(format!(
                    "{what} must be vec4, found {}",
                    e.kind()
                )));
            }
        }
        Ok(Self::new(vertex_position.typed()?, fragment_colour.typed()?))
    }

    /// Clip-space position computed by the vertex stage.
    pub fn vertex_position(&self) -> Expr<'p, Vec4> {
        self.vertex_position
    }

    /// Colour computed by the fragment stage.
    pub fn fragment_colour(&self) -> Expr<'p, Vec4> {
        self.fragment_colour
    }

    /// Pool owning both outputs.
    pub fn pool(&self) -> &'p ExprPool {
        self.vertex_position.pool
    }

    /// Generate both shaders with `opts`.
    pub fn assemble(&self, opts: &ShaderOpts) -> ShaderResult<ShaderPair> {
        assemble_shader_pair_with(self, opts)
    }
}

/// Generate both shaders with default options.
pub fn assemble_shader_pair(program: &Program<'_>) -> ShaderResult<ShaderPair> {
    assemble_shader_pair_with(program, &ShaderOpts::default())
}

/// Generate the vertex and fragment shader source for `program`.
///
/// Attributes, uniforms and varyings are named once, in a table both stages start from, so
/// every shared input is declared identically in the two sources. Each stage then hoists its
/// own repeated sub-expressions into locals.
#[tracing::instrument(skip(program, opts), fields(nodes = program.pool().len()))]
pub fn assemble_shader_pair_with(
    program: &Program<'_>,
    opts: &ShaderOpts,
) -> ShaderResult<ShaderPair> {
    let table = program.pool().table();
    let position = program.vertex_position.id();
    let colour = program.fragment_colour.id();

    let inputs = NamedInputs::collect(&table, &[position, colour]);
    let shared = inputs.bind(&table)?;

    // Varying inners run in the vertex stage, before the position.
    let mut vertex_roots: Vec<NodeId> = inputs.varyings.iter().map(|(_, inner)| *inner).collect();
    vertex_roots.push(position);
    let vertex_refs = stage_inputs(&table, &vertex_roots);
    let fragment_refs = stage_inputs(&table, &[colour]);

    if let Some((v, _)) = inputs.varyings.iter().find(|(v, _)| vertex_refs.contains(v)) {
        return Err(ShaderError::stage_violation(format!(
            "varying '{}' is read by the vertex stage",
            bound_name(&shared, *v)?
        )));
    }
    if let Some(a) = inputs.attributes.iter().find(|a| fragment_refs.contains(*a)) {
        return Err(ShaderError::stage_violation(format!(
            "attribute '{}' is read by the fragment stage; pass it through varying()",
            bound_name(&shared, *a)?
        )));
    }

    let mut vertex_names = shared.clone();
    let mut vertex_body = emit_block(&table, &vertex_roots, &mut vertex_names)?;
    tracing::debug!(hoisted = vertex_body.len(), "vertex stage");
    for (v, inner) in &inputs.varyings {
        vertex_body.push(format!(
            "{} = {};",
            bound_name(&vertex_names, *v)?,
            emit_expression(&table, *inner, &vertex_names)?
        ));
    }
    vertex_body.push(format!(
        "gl_Position = {};",
        emit_expression(&table, position, &vertex_names)?
    ));

    let mut fragment_names = shared.clone();
    let mut fragment_body = emit_block(&table, &[colour], &mut fragment_names)?;
    tracing::debug!(hoisted = fragment_body.len(), "fragment stage");
    fragment_body.push(format!(
        "gl_FragColor = {};",
        emit_expression(&table, colour, &fragment_names)?
    ));

    let precision = opts.float_precision;
    let vertex_decls =
        inputs.declarations(&table, &shared, precision, |id| vertex_refs.contains(&id))?;
    let fragment_decls =
        inputs.declarations(&table, &shared, precision, |id| fragment_refs.contains(&id))?;

    Ok(ShaderPair {
        vertex: render_stage(opts, None, &vertex_decls, &vertex_body),
        fragment: render_stage(
            opts,
            Some(opts.float_precision),
            &fragment_decls,
            &fragment_body,
        ),
    })
}

/// Distinct named inputs reachable from the program outputs, each list in first-occurrence
/// order (post-order, position before colour).
struct NamedInputs {
    attributes: Vec<NodeId>,
    uniforms: Vec<NodeId>,
    // (varying node, interpolated expression)
    varyings: Vec<(NodeId, NodeId)>,
}

impl NamedInputs {
    fn collect(table: &NodeTable, roots: &[NodeId]) -> Self {
        let mut out = Self {
            attributes: Vec::new(),
            uniforms: Vec::new(),
            varyings: Vec::new(),
        };
        let mut seen = HashSet::new();
        for &root in roots {
            for id in enumerate(table, root, |n| seen.insert(n)) {
                match table.view(id) {
                    NodeView::Attribute(_) => out.attributes.push(id),
                    NodeView::Uniform(_) => out.uniforms.push(id),
                    NodeView::Varying(inner) => out.varyings.push((id, inner)),
                    _ => {}
                }
            }
        }
        out
    }

    /// Bind attributes and uniforms to their own names, varyings to `<prefix><index>`.
    fn bind(&self, table: &NodeTable) -> ShaderResult<Binder> {
        let mut names = Binder::with_reserved_words();
        let mut caller_names = Vec::with_capacity(self.attributes.len() + self.uniforms.len());
        for &id in self.attributes.iter().chain(&self.uniforms) {
            if let NodeView::Attribute(name) | NodeView::Uniform(name) = table.view(id) {
                names.bind(id, name)?;
                caller_names.push(name);
            }
        }

        let prefix = varying_prefix(caller_names);
        for (i, (v, _)) in self.varyings.iter().enumerate() {
            names.bind(*v, &format!("{prefix}{i}"))?;
        }
        tracing::debug!(
            attributes = self.attributes.len(),
            uniforms = self.uniforms.len(),
            varyings = self.varyings.len(),
            prefix = %prefix,
            "bound named inputs"
        );
        Ok(names)
    }

    /// Declaration lines for the inputs `keep` selects; varyings are always declared.
    ///
    /// Float-based uniforms carry `precision` explicitly: the two stages default to different
    /// float precisions, and a uniform shared by both must be declared identically to link.
    fn declarations(
        &self,
        table: &NodeTable,
        names: &Binder,
        precision: FloatPrecision,
        keep: impl Fn(NodeId) -> bool,
    ) -> ShaderResult<Vec<String>> {
        let attributes = self.attributes.iter().filter(|id| keep(**id));
        let uniforms = self.uniforms.iter().filter(|id| keep(**id));
        attributes
            .map(|id| ("attribute", *id))
            .chain(uniforms.map(|id| ("uniform", *id)))
            .chain(self.varyings.iter().map(|(v, _)| ("varying", *v)))
            .map(|(qualifier, id)| {
                let name = bound_name(names, id)?;
                let kind = table.kind(id);
                if qualifier == "uniform" && kind != Kind::Sampler2D {
                    let p = precision.glsl_name();
                    return Ok(format!("{qualifier} {p} {kind} {name};"));
                }
                Ok(format!("{qualifier} {kind} {name};"))
            })
            .collect()
    }
}

/// Named inputs referenced by the stage computing `roots`. Varyings are treated as leaves.
fn stage_inputs(table: &NodeTable, roots: &[NodeId]) -> HashSet<NodeId> {
    let mut seen = HashSet::new();
    let mut found = HashSet::new();
    for &root in roots {
        let walk = enumerate(table, root, |n| {
            if !seen.insert(n) {
                return false;
            }
            if table.is_named_input(n) {
                found.insert(n);
                return false;
            }
            true
        });
        walk.for_each(drop);
    }
    found
}

fn bound_name(names: &Binder, id: NodeId) -> ShaderResult<&str> {
    names
        .name_of(id)
        .ok_or_else(|| ShaderError::unbound(format!("node {}", id.index())))
}

fn render_stage(
    opts: &ShaderOpts,
    precision: Option<FloatPrecision>,
    declarations: &[String],
    body: &[String],
) -> String {
    let mut out = String::new();
    if let Some(version) = opts.version {
        out.push_str(&format!("#version {version}\n"));
    }
    if let Some(p) = precision {
        out.push_str(&format!("precision {} float;\n", p.glsl_name()));
    }
    for decl in declarations {
        out.push_str(decl);
        out.push('\n');
    }
    out.push_str("\nvoid main() {\n");
    for stmt in body {
        out.push_str("    ");
        out.push_str(stmt);
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/assemble.rs"]
mod tests;
