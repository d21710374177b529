use super::ty::UnknownId;

/// Hands out unknown ids in allocation order, starting at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreshSupply {
    last: UnknownId,
}

impl FreshSupply {
    pub fn new() -> Self {
        FreshSupply { last: 0 }
    }

    pub fn next(&mut self) -> UnknownId {
        self.last += 1;
        self.last
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> usize {
        self.last
    }
}
