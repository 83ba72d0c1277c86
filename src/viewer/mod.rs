//! Named-surface registry and the shared-configuration mutation protocol.

pub mod registry;
