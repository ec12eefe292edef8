use crate::graph::signatures::FUNCTION_NAMES;

/// GLSL ES 1.00 keywords, reserved words and type names.
pub const RESERVED_WORDS: &[&str] = &[
    // keywords
    "attribute",
    "const",
    "uniform",
    "varying",
    "break",
    "continue",
    "do",
    "for",
    "while",
    "if",
    "else",
    "in",
    "out",
    "inout",
    "float",
    "int",
    "void",
    "bool",
    "true",
    "false",
    "lowp",
    "mediump",
    "highp",
    "precision",
    "invariant",
    "discard",
    "return",
    "mat2",
    "mat3",
    "mat4",
    "vec2",
    "vec3",
    "vec4",
    "ivec2",
    "ivec3",
    "ivec4",
    "bvec2",
    "bvec3",
    "bvec4",
    "sampler2D",
    "samplerCube",
    "struct",
    // reserved for future use
    "asm",
    "class",
    "union",
    "enum",
    "typedef",
    "template",
    "this",
    "packed",
    "goto",
    "switch",
    "default",
    "inline",
    "noinline",
    "volatile",
    "public",
    "static",
    "extern",
    "external",
    "interface",
    "flat",
    "long",
    "short",
    "double",
    "half",
    "fixed",
    "unsigned",
    "superp",
    "input",
    "output",
    "hvec2",
    "hvec3",
    "hvec4",
    "dvec2",
    "dvec3",
    "dvec4",
    "fvec2",
    "fvec3",
    "fvec4",
    "sampler1D",
    "sampler3D",
    "sampler1DShadow",
    "sampler2DShadow",
    "sampler2DRect",
    "sampler3DRect",
    "sampler2DRectShadow",
    "sizeof",
    "cast",
    "namespace",
    "using",
    // entry point
    "main",
];

/// Identifier prefix reserved for builtin variables.
pub const BUILTIN_PREFIX: &str = "gl_";

/// Every name the generated source must never declare: keywords, builtin functions and the
/// stage outputs.
pub fn reserved_names() -> impl Iterator<Item = &'static str> {
    RESERVED_WORDS
        .iter()
        .chain(FUNCTION_NAMES)
        .copied()
        .chain(["gl_Position", "gl_FragColor"])
}

/// Shortest prefix `varying_`, `varying__`, ... that no reserved word and no name in `taken`
/// starts with.
pub fn varying_prefix<'a, I>(taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = taken.into_iter().collect();
    let mut prefix = String::from("varying_");
    let collides = |prefix: &str| {
        reserved_names().any(|name| name.starts_with(prefix))
            || taken.iter().any(|name| name.starts_with(prefix))
    };
    while collides(&prefix) {
        prefix.push('_');
    }
    prefix
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/reserved.rs"]
mod tests;
