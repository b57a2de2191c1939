//! Version dependent availability of java flags.
//!
//! Some flags are rejected or ignored by certain java versions. Each entry here
//! records the range of major versions a flag may be passed to, so command
//! assembly only needs to ask whether a flag is allowed for the selected runtime.

/// Range of major java versions a flag is valid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagSupport {
    /// First major version accepting the flag.
    pub since: Option<u32>,
    /// First major version no longer accepting the flag.
    pub until: Option<u32>,
}

impl FlagSupport {
    /// Whether the flag may be emitted for a runtime of the given major version.
    ///
    /// An unknown version always allows the flag.
    pub fn allows(&self, version: Option<u32>) -> bool {
        let Some(version) = version else {
            return true;
        };
        self.since.is_none_or(|since| version >= since)
            && self.until.is_none_or(|until| version < until)
    }
}

/// `-XX:MaxPermSize`, removed together with the permanent generation in java 8.
pub const PERM_GEN: FlagSupport = FlagSupport {
    since: None,
    until: Some(8),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perm_gen_until_java_8() {
        assert!(PERM_GEN.allows(None));
        assert!(PERM_GEN.allows(Some(6)));
        assert!(PERM_GEN.allows(Some(7)));
        assert!(!PERM_GEN.allows(Some(8)));
        assert!(!PERM_GEN.allows(Some(21)));
    }

    #[test]
    fn lower_bound() {
        let support = FlagSupport {
            since: Some(9),
            until: None,
        };
        assert!(!support.allows(Some(8)));
        assert!(support.allows(Some(9)));
        assert!(support.allows(None));
    }
}
