use std::fmt;

/// Dense, 1-based key generated by the warehouse for a dimension member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurrogateKey(u64);

impl SurrogateKey {
    /// Key for the member at `index` (0-based) of an ordered dimension.
    pub fn from_position(index: usize) -> Self {
        Self(index as u64 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurrogateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
