//! Ordered-fallback resolution over optional string fields.

/// Reads one optional string field from a value.
pub type Accessor<T> = for<'a> fn(&'a T) -> Option<&'a str>;

/// An ordered list of accessors evaluated left to right.
///
/// Blank strings count as absent, so a chain skips over fields that are
/// present but empty.
pub struct FallbackChain<T: 'static> {
    accessors: &'static [Accessor<T>],
}

impl<T: 'static> FallbackChain<T> {
    pub const fn new(accessors: &'static [Accessor<T>]) -> Self {
        Self { accessors }
    }

    /// First non-blank value produced by the chain, trimmed.
    pub fn first_present<'a>(&self, value: &'a T) -> Option<&'a str> {
        self.accessors
            .iter()
            .filter_map(|accessor| accessor(value))
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
    }

    /// First non-blank value, or `default` when every accessor comes up
    /// empty.
    pub fn resolve_or<'a>(&self, value: &'a T, default: &'a str) -> &'a str {
        self.first_present(value).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Names {
        nickname: Option<String>,
        given: Option<String>,
        family: Option<String>,
    }

    fn nickname(names: &Names) -> Option<&str> {
        names.nickname.as_deref()
    }

    fn given(names: &Names) -> Option<&str> {
        names.given.as_deref()
    }

    fn family(names: &Names) -> Option<&str> {
        names.family.as_deref()
    }

    const CHAIN: FallbackChain<Names> = FallbackChain::new(&[nickname, given, family]);

    #[test]
    fn test_first_present_skips_missing_and_blank() {
        let names = Names {
            nickname: Some("   ".to_string()),
            given: None,
            family: Some(" Tran ".to_string()),
        };
        assert_eq!(CHAIN.first_present(&names), Some("Tran"));
    }

    #[test]
    fn test_resolve_or_uses_default_when_empty() {
        let names = Names {
            nickname: None,
            given: Some(String::new()),
            family: None,
        };
        assert_eq!(CHAIN.resolve_or(&names, "unknown"), "unknown");
    }

    #[test]
    fn test_order_is_respected() {
        let names = Names {
            nickname: Some("Bi".to_string()),
            given: Some("Binh".to_string()),
            family: None,
        };
        assert_eq!(CHAIN.first_present(&names), Some("Bi"));
    }
}
