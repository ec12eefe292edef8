use super::*;
use crate::graph::builtins::{sin, texture2d};
use crate::graph::kind::{Float, Mat4, Sampler2D, Vec2};

#[test]
fn attribute_in_fragment_stage_is_a_stage_violation() {
    let pool = ExprPool::new();
    let pos = pool.attribute::<Vec4>("aPosition");
    let colour = pool.attribute::<Vec4>("aColour");

    let err = assemble_shader_pair(&Program::new(pos, colour)).unwrap_err();
    assert!(matches!(err, ShaderError::StageViolation(_)));
    assert!(err.to_string().contains("aColour"));
}

#[test]
fn varying_in_vertex_stage_is_a_stage_violation() {
    let pool = ExprPool::new();
    let v = pool.attribute::<Vec4>("aPosition").varying();
    let err = assemble_shader_pair(&Program::new(v, v)).unwrap_err();
    assert!(matches!(err, ShaderError::StageViolation(_)));
    assert!(err.to_string().contains("varying_0"));
}

#[test]
fn attributes_pass_through_varyings() {
    let pool = ExprPool::new();
    let pos = pool.attribute::<Vec4>("aPosition");
    let colour = pool.attribute::<Vec4>("aColour").varying();

    let pair = assemble_shader_pair(&Program::new(pos, colour)).unwrap();
    assert_eq!(
        pair.vertex,
        "attribute vec4 aPosition;\n\
         attribute vec4 aColour;\n\
         varying vec4 varying_0;\n\
         \n\
         void main() {\n    \
         varying_0 = aColour;\n    \
         gl_Position = aPosition;\n\
         }\n"
    );
    assert_eq!(
        pair.fragment,
        "precision mediump float;\n\
         varying vec4 varying_0;\n\
         \n\
         void main() {\n    \
         gl_FragColor = varying_0;\n\
         }\n"
    );
}

#[test]
fn stages_declare_only_what_they_read() {
    let pool = ExprPool::new();
    let m = pool.uniform::<Mat4>("uMvp");
    let pos = m * pool.attribute::<Vec4>("aPosition");
    let tint = pool.uniform::<Vec4>("uTint");
    let colour = tint * pool.uniform::<Float>("uAlpha");

    let pair = assemble_shader_pair(&Program::new(pos, colour)).unwrap();
    assert!(pair.vertex.contains("uniform mediump mat4 uMvp;"));
    assert!(!pair.vertex.contains("uTint"));
    assert!(!pair.fragment.contains("uMvp"));
    assert!(!pair.fragment.contains("aPosition"));
    assert!(
        pair.fragment
            .contains("uniform mediump vec4 uTint;\nuniform mediump float uAlpha;\n")
    );
}

#[test]
fn shared_uniforms_are_declared_identically_in_both_stages() {
    let pool = ExprPool::new();
    let c = pool.uniform::<Vec4>("uColour");
    let tex = pool.uniform::<Sampler2D>("uTexture");
    let uv = pool.attribute::<Vec2>("aUv").varying();
    let pos = c * texture2d(tex, pool.vec2((pool.float(0.0), pool.float(0.0))));
    let colour = c * texture2d(tex, uv);

    for precision in [FloatPrecision::Lowp, FloatPrecision::Mediump, FloatPrecision::Highp] {
        let opts = ShaderOpts {
            float_precision: precision,
            version: None,
        };
        let pair = Program::new(pos, colour).assemble(&opts).unwrap();
        let uniforms = |src: &str| {
            src.lines()
                .filter(|l| l.starts_with("uniform "))
                .map(str::to_owned)
                .collect::<Vec<_>>()
        };
        assert_eq!(uniforms(&pair.vertex), uniforms(&pair.fragment));
        assert_eq!(
            uniforms(&pair.vertex),
            vec![
                format!("uniform {} vec4 uColour;", precision.glsl_name()),
                "uniform sampler2D uTexture;".to_owned(),
            ]
        );
    }
}

#[test]
fn hoisted_names_are_stage_local() {
    let pool = ExprPool::new();
    let t = pool.uniform::<Float>("t");
    let wobble = sin(t) * sin(t);
    let pos = pool.vec4((wobble, wobble, pool.float(0.0), pool.float(1.0)));
    let colour = pool.vec4((wobble, t, wobble, pool.float(1.0)));

    let pair = assemble_shader_pair(&Program::new(pos, colour)).unwrap();
    assert!(pair.vertex.contains("    float float_0 = sin(t);\n"));
    assert!(pair.vertex.contains("    float float_1 = (float_0 * float_0);\n"));
    // The fragment stage numbers its own locals from zero again.
    assert!(pair.fragment.contains("    float float_0 = sin(t);\n"));
    assert!(pair.fragment.contains("gl_FragColor = vec4(float_1, t, float_1, 1.0);"));
}

#[test]
fn varying_prefix_avoids_caller_names() {
    let pool = ExprPool::new();
    let pos = pool.attribute::<Vec4>("varying_0");
    let colour = pool.attribute::<Vec4>("c").varying();

    let pair = assemble_shader_pair(&Program::new(pos, colour)).unwrap();
    assert!(pair.vertex.contains("varying vec4 varying__0;"));
    assert!(pair.fragment.contains("gl_FragColor = varying__0;"));
}

#[test]
fn caller_names_must_not_shadow_reserved_words() {
    let pool = ExprPool::new();
    let pos = pool.attribute::<Vec4>("texture2D");
    let colour = pool.uniform::<Vec4>("c");

    let err = assemble_shader_pair(&Program::new(pos, colour)).unwrap_err();
    assert!(matches!(err, ShaderError::NameConflict(_)));
}

#[test]
fn options_control_the_preamble() {
    let pool = ExprPool::new();
    let pos = pool.uniform::<Vec4>("p");
    let colour = pool.uniform::<Vec4>("c");
    let opts = ShaderOpts {
        float_precision: FloatPrecision::Highp,
        version: Some(100),
    };

    let pair = Program::new(pos, colour).assemble(&opts).unwrap();
    assert!(pair.vertex.starts_with("#version 100\nuniform highp vec4 p;\n"));
    assert!(
        pair.fragment
            .starts_with("#version 100\nprecision highp float;\nuniform highp vec4 c;\n")
    );
}

#[test]
fn program_adopts_a_foreign_colour() {
    let home = ExprPool::new();
    let away = ExprPool::new();
    let pos = home.uniform::<Vec4>("p");
    let uv = away.attribute::<Vec2>("aUv").varying();
    let colour = texture2d(away.uniform::<Sampler2D>("tex"), uv);

    let program = Program::new(pos, colour);
    assert!(program.pool().is_same(&home));
    let pair = assemble_shader_pair(&program).unwrap();
    assert!(pair.fragment.contains("texture2D(tex, varying_0)"));
}

#[test]
fn from_dyn_requires_vec4_outputs() {
    let pool = ExprPool::new();
    let p = pool.dyn_uniform("p", Kind::Vec4);
    let c = pool.dyn_uniform("c", Kind::Vec3);

    let err = Program::from_dyn(p, c).unwrap_err();
    assert!(matches!(err, ShaderError::TypeMismatch(_)));
    assert!(err.to_string().contains("fragment colour"));

    let ok = Program::from_dyn(p, p).unwrap();
    assert_eq!(ok.vertex_position().id(), p.id());
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: ShaderOpts = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, ShaderOpts::default());
    let opts: ShaderOpts = serde_json::from_str(r#"{"float_precision":"lowp"}"#).unwrap();
    assert_eq!(opts.float_precision, FloatPrecision::Lowp);
    assert!(serde_json::from_str::<ShaderOpts>(r#"{"precision":"lowp"}"#).is_err());
}

#[test]
fn fingerprint_tracks_the_source_text() {
    let a = ShaderPair {
        vertex: "v".to_owned(),
        fragment: "f".to_owned(),
    };
    let b = ShaderPair {
        vertex: "vf".to_owned(),
        fragment: String::new(),
    };
    assert_eq!(a.fingerprint(), a.clone().fingerprint());
    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint().to_string().len(), 32);
}
