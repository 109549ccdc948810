//! fontmount-core: session-scoped font registration.
//!
//! Validates candidate font paths, resolves `metric|outline` PostScript
//! pairs, and drives the platform font manager to make fonts available for
//! the lifetime of the desktop session, without a permanent install. Nothing
//! here inspects font bytes; the filesystem and the font manager are the
//! only oracles.

pub mod driver;
pub mod output;
pub mod reference;
pub mod registry;
pub mod validate;
