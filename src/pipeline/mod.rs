// Batch passes over the fixed document set.

pub mod passes;
