/// Reports whether the last non-empty label of `name` is exactly `onion`.
///
/// Trailing root dots are skipped, so `foo.onion.` matches. The comparison is
/// case-sensitive and names made only of dots never match.
pub fn is_onion_domain(name: &str) -> bool {
    name.split('.')
        .rev()
        .find(|label| !label.is_empty())
        .is_some_and(|label| label == "onion")
}
