mod corpus;

pub use corpus::{corpus_csv, spam_ham_corpus};
