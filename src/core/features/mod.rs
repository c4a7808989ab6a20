mod feature_vector;
mod text_block;
mod tokenizer;
mod vocabulary;

pub use feature_vector::FeatureVector;
pub use text_block::TextBlock;
pub use tokenizer::tokenize;
pub use vocabulary::Vocabulary;
