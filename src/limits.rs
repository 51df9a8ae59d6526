/// Parser limits.
///
/// The parser recurses once per nested array or object, so the depth bound keeps
/// hostile input from exhausting the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of arrays/objects open at the same time.
    pub max_depth: usize,
}

impl Limits {
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    pub const fn new(max_depth: usize) -> Self {
        Limits { max_depth }
    }

    pub const fn unlimited() -> Self {
        Limits {
            max_depth: usize::MAX,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::new(Limits::DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::Limits;

    #[test]
    fn default_depth() {
        assert_eq!(Limits::default().max_depth, 512);
        assert_eq!(Limits::new(3), Limits { max_depth: 3 });
        assert!(Limits::unlimited().max_depth > Limits::default().max_depth);
    }
}
