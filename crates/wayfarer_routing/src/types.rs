pub type NodeId = usize;
pub type EdgeId = usize;

/// Edge and path weights. Always finite and non-negative.
pub type Weight = f64;
