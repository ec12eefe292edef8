pub mod builtins;
pub(crate) mod dynamic;
pub(crate) mod kind;
pub(crate) mod node;
pub(crate) mod pool;
pub(crate) mod signatures;
pub(crate) mod typed;
