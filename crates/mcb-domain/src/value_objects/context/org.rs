//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md#value-objects)
//!
//! Organization tenant context — re-exports from canonical location.
pub use crate::value_objects::org_context::*;
