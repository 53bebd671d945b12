use crate::types::{EdgeId, NodeId, Weight};

pub(crate) const INVALID_NODE: NodeId = usize::MAX;
pub(crate) const INVALID_EDGE: EdgeId = usize::MAX;
pub(crate) const MAX_WEIGHT: Weight = f64::INFINITY;

pub(crate) const WEIGHT_TOLERANCE: f64 = 1e-6;
