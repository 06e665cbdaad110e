/// ID for vertices.
///
/// The input contract assigns vertices dense integers in `[0, N)`, so a
/// `VertexId` doubles as an index into per-vertex tables.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
