//! Token scanner: segments an input string into whitespace-separated,
//! owning tokens.
//!
//! This is a trivial collaborator - the core pipeline only depends on its
//! interface (`next_token(stream) -> token | end`), not its internals.

/// Splits `input` into whitespace-separated owning tokens, in order.
pub fn tokens(input: &str) -> impl Iterator<Item = String> + '_ {
    input.split_whitespace().map(|s| s.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let toks: Vec<_> = tokens("a  b\tc\nd").collect();
        assert_eq!(toks, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokens("   \n\t").count(), 0);
    }
}
