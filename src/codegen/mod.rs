pub(crate) mod assemble;
pub(crate) mod binder;
pub(crate) mod emit;
pub(crate) mod fingerprint;
pub(crate) mod reserved;
