// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Helpers built on top of the segmenters: cluster aware length and slicing, terminal
//! display width, category tests, and hard line splitting.

// Attach sources.
pub mod cluster_ops;
pub mod display_width;
pub mod hard_breaks;

// Re-export.
pub use cluster_ops::*;
pub use display_width::*;
pub use hard_breaks::*;
