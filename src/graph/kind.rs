use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of value shapes an expression node may have.
///
/// Every node carries exactly one kind, fixed when it is interned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    /// Scalar `float`.
    #[serde(rename = "float")]
    Float,
    /// `vec2`.
    #[serde(rename = "vec2")]
    Vec2,
    /// `vec3`.
    #[serde(rename = "vec3")]
    Vec3,
    /// `vec4`.
    #[serde(rename = "vec4")]
    Vec4,
    /// 4x4 matrix `mat4`.
    #[serde(rename = "mat4")]
    Mat4,
    /// 2D texture sampler `sampler2D`.
    #[serde(rename = "sampler2D")]
    Sampler2D,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 6] = [
        Kind::Float,
        Kind::Vec2,
        Kind::Vec3,
        Kind::Vec4,
        Kind::Mat4,
        Kind::Sampler2D,
    ];

    /// Type name as written in GLSL source.
    pub fn glsl_name(self) -> &'static str {
        match self {
            Kind::Float => "float",
            Kind::Vec2 => "vec2",
            Kind::Vec3 => "vec3",
            Kind::Vec4 => "vec4",
            Kind::Mat4 => "mat4",
            Kind::Sampler2D => "sampler2D",
        }
    }

    /// Inverse of [`Kind::glsl_name`].
    pub fn from_glsl_name(s: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|k| k.glsl_name() == s)
    }

    /// `float` or one of the float vectors (GLSL's `genType`).
    pub fn is_gen_type(self) -> bool {
        matches!(self, Kind::Float | Kind::Vec2 | Kind::Vec3 | Kind::Vec4)
    }

    /// `vec2`, `vec3` or `vec4`.
    pub fn is_vector(self) -> bool {
        matches!(self, Kind::Vec2 | Kind::Vec3 | Kind::Vec4)
    }

    /// Whether a value of this kind may be passed from vertex to fragment stage.
    pub fn can_interpolate(self) -> bool {
        self.is_gen_type()
    }

    /// Whether a per-vertex attribute may have this kind.
    pub fn can_be_attribute(self) -> bool {
        self.is_gen_type() || self == Kind::Mat4
    }

    pub(crate) fn tag(self) -> u8 {
        match self {
            Kind::Float => 0,
            Kind::Vec2 => 1,
            Kind::Vec3 => 2,
            Kind::Vec4 => 3,
            Kind::Mat4 => 4,
            Kind::Sampler2D => 5,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glsl_name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Compile-time marker for a [`Kind`], used as the type parameter of [`crate::Expr`].
pub trait KindTag: sealed::Sealed + 'static {
    /// The runtime kind this marker stands for.
    const KIND: Kind;
}

/// Markers for `float`, `vec2`, `vec3` and `vec4`.
pub trait GenType: KindTag {}

/// Markers for kinds a vertex attribute may carry.
pub trait AttributeKind: KindTag {}

macro_rules! kind_marker {
    ($(#[$doc:meta])* $name:ident => $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl KindTag for $name {
            const KIND: Kind = $kind;
        }
    };
}

kind_marker!(
    /// Marker for [`Kind::Float`].
    Float => Kind::Float
);
kind_marker!(
    /// Marker for [`Kind::Vec2`].
    Vec2 => Kind::Vec2
);
kind_marker!(
    /// Marker for [`Kind::Vec3`].
    Vec3 => Kind::Vec3
);
kind_marker!(
    /// Marker for [`Kind::Vec4`].
    Vec4 => Kind::Vec4
);
kind_marker!(
    /// Marker for [`Kind::Mat4`].
    Mat4 => Kind::Mat4
);
kind_marker!(
    /// Marker for [`Kind::Sampler2D`].
    Sampler2D => Kind::Sampler2D
);

impl GenType for Float {}
impl GenType for Vec2 {}
impl GenType for Vec3 {}
impl GenType for Vec4 {}

impl AttributeKind for Float {}
impl AttributeKind for Vec2 {}
impl AttributeKind for Vec3 {}
impl AttributeKind for Vec4 {}
impl AttributeKind for Mat4 {}
