/// Sets the data which will be stored as node weights in the petgraph graph.
/// Towns are tracked by a stable integer id rather than by value, so edge
/// endpoints and menu lookups never depend on how node weights hash
#[derive(Default, Debug, Clone, PartialEq)]
pub struct NodeData {
    pub id: i64,
    pub name: String,
}

/// Container for road metadata which will be stored as edge weights in the
/// graph. Each road in the source tables produces two of these, one per
/// direction of travel
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct EdgeData {
    pub src: i64,
    pub dst: i64,
    pub distance: u64,
}
