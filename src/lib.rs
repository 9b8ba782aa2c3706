//! Randomized profane sentences and chainable text manglers.
//!
//! Two halves: a composable formatter engine (leetspeak, fat-finger typos,
//! case mutation, shuffling, and the probabilistic wrappers that make them
//! apply per word or per character), and a lexicon/sentence engine (a
//! tag-indexed word store plus a template grammar that assembles
//! grammatically plausible profanity). All randomness is injected through
//! [`random::RandomDevice`]; production code draws from the OS CSPRNG since
//! the output doubles as password material.

pub mod chain;
pub mod char_format;
pub mod format;
pub mod lexicon;
pub mod random;
pub mod sentence;
pub mod tag;
pub mod test_utils;
pub mod trie;

// Re-export commonly used types
pub use chain::{build_formatter_chain, FORMATTER_NAMES, RANDOM, RANDOMLY};
pub use char_format::CharFormatter;
pub use format::{DelimiterFormatter, Formatter, MultiFormatter};
pub use lexicon::Lexicon;
pub use random::{CryptoRand, RandomDevice, RandomError};
pub use sentence::{SentenceEngine, MAX_DIRECT_WORDS};
pub use tag::WordTag;
pub use trie::WordTrie;
