/// Splits `text` into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric characters; apostrophes are kept
/// when they sit between two such characters (`don't`, `it's`).
pub fn tokenize(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_alphanumeric() {
            cur.extend(ch.to_lowercase());
        } else if ch == '\'' && !cur.is_empty() && chars.peek().is_some_and(|c| c.is_alphanumeric())
        {
            cur.push(ch);
        } else if !cur.is_empty() {
            out.push(std::mem::take(&mut cur));
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        assert_eq!(
            tokenize("FREE money!!! Click: here"),
            vec!["free", "money", "click", "here"]
        );
    }

    #[test]
    fn keeps_inner_apostrophes_only() {
        assert_eq!(tokenize("don't 'quote'"), vec!["don't", "quote"]);
    }

    #[test]
    fn empty_and_symbol_only_text_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" -- ?? ").is_empty());
    }
}
