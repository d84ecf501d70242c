//! Text preprocessing helpers

pub mod tokenizer;
