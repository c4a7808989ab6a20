use crate::streams::LabeledText;

/// Small hand-written spam/ham corpus.
pub fn spam_ham_corpus() -> Vec<LabeledText> {
    [
        ("ham", "are we still meeting for lunch tomorrow"),
        ("spam", "win free money now click here"),
        ("ham", "the meeting notes are attached"),
        ("spam", "free prize claim your money today"),
        ("ham", "can you review my pull request"),
        ("spam", "cheap pills free shipping click now"),
        ("ham", "lunch at noon works for me"),
        ("spam", "you won a free cruise claim now"),
    ]
    .into_iter()
    .map(|(label, text)| LabeledText::new(label, text))
    .collect()
}

/// Renders `examples` as `label,text` rows.
pub fn corpus_csv(examples: &[LabeledText]) -> String {
    examples
        .iter()
        .map(|e| format!("{},\"{}\"\n", e.label, e.text))
        .collect()
}
