// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod sequence_access;
pub mod sequence_convert;
pub mod sequence_factory;
pub mod sequence_query;
pub mod sequence_slice;
pub mod sequence_struct;
pub mod sequence_transform;
pub mod successor;

// Re-export.
pub use sequence_struct::*;
pub use successor::*;
