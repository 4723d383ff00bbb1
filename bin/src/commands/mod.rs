//! CLI command implementations.

pub(crate) mod couriers;
pub(crate) mod estimate;
pub(crate) mod session;
pub(crate) mod submit;
