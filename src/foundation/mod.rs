pub(crate) mod error;
pub(crate) mod hash;
pub(crate) mod ids;
pub(crate) mod intern;
