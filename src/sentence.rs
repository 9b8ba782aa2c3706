//! Template-driven assembly of randomized profane sentences.
//!
//! A sentence is a chain of single-slot fragments. Only fragments flagged
//! `terminal` may stand rightmost (everything else carries trailing glue and
//! must be followed); any fragment may stand earlier, with a space joint
//! inserted where it brings no glue of its own. The chain is built
//! tail-first and kept as an owned sequence in final order.

use log::debug;

use crate::lexicon::Lexicon;
use crate::random::{CryptoRand, RandomDevice};
use crate::tag::WordTag;

/// One sentence fragment: a pattern with exactly one `{}` slot, the role the
/// slot must be filled with, whether the fragment may close a sentence, and
/// its draw weight.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub pattern: &'static str,
    pub role: WordTag,
    pub terminal: bool,
    pub weight: u32,
}

const fn frag(pattern: &'static str, role: WordTag, terminal: bool, weight: u32) -> Fragment {
    Fragment {
        pattern,
        role,
        terminal,
        weight,
    }
}

const LOOSE: WordTag = WordTag::LOOSE;
const DEFAULT: WordTag = WordTag::DEFAULT;
const SHOUT_END: WordTag = WordTag::EXCLAMATION.union(WordTag::END);

// Terminal fragments first so even a degenerate always-zero draw sequence
// finds a sentence tail.
const FRAGMENTS: &[Fragment] = &[
    frag("{}", LOOSE, true, 4),
    frag("{}!", LOOSE, true, 3),
    frag("{}?", LOOSE, true, 2),
    frag("{}?!", LOOSE, true, 1),
    frag("{}!?", LOOSE, true, 1),
    frag("{}!!", LOOSE, true, 1),
    frag("{}-fucker", LOOSE, true, 1),
    frag("sex-{}", LOOSE, true, 1),
    frag("{}...NOT!", LOOSE, true, 1),
    frag("{} ", DEFAULT, false, 8),
    frag("{}, ", DEFAULT, false, 2),
    frag("{}-", DEFAULT, false, 1),
    frag("{}: ", LOOSE, false, 1),
    frag("{}; ", LOOSE, false, 1),
    frag("{} - ", DEFAULT, false, 1),
    frag("{} vs ", LOOSE, false, 1),
    frag("{} vs. ", LOOSE, false, 1),
    frag("{} or ", LOOSE, false, 1),
    frag("{} is ", LOOSE, false, 1),
    frag("{}! ", SHOUT_END, false, 2),
    frag("{}? ", DEFAULT, false, 2),
    frag("sex-{} ", DEFAULT, false, 1),
    frag("{}-fucker! ", SHOUT_END, false, 1),
];

/// The static fragment set, exposed for data-invariant tests.
pub fn templates() -> &'static [Fragment] {
    FRAGMENTS
}

/// Longest sentence the fragment chain builds directly; longer requests are
/// split into sub-sentences joined by a space.
pub const MAX_DIRECT_WORDS: usize = 5;

/// Assembles sentences from the fragment set and a word store.
pub struct SentenceEngine {
    rng: Box<dyn RandomDevice>,
    lexicon: Lexicon,
    excluded: WordTag,
}

impl SentenceEngine {
    pub fn new(rng: Box<dyn RandomDevice>, lexicon: Lexicon, excluded: WordTag) -> Self {
        SentenceEngine {
            rng,
            lexicon,
            excluded,
        }
    }

    /// CSPRNG-backed engine over the built-in profane lexicon.
    pub fn profane(excluded: WordTag) -> Self {
        SentenceEngine::new(Box::new(CryptoRand), Lexicon::profane(), excluded)
    }

    /// One rendered sentence with exactly `word_count` resolved words.
    pub fn generate(&mut self, word_count: usize) -> String {
        if word_count == 0 {
            return String::new();
        }
        if word_count > MAX_DIRECT_WORDS {
            let head = self.generate(MAX_DIRECT_WORDS);
            let tail = self.generate(word_count - MAX_DIRECT_WORDS);
            return format!("{head} {tail}");
        }
        let chain = self.build_chain(word_count);
        debug!(
            "built {}-fragment chain: {:?}",
            chain.len(),
            chain.iter().map(|f| f.pattern).collect::<Vec<_>>()
        );
        self.render(&chain)
    }

    /// Weighted uniform draw over the full fragment set.
    fn draw_fragment(&mut self) -> &'static Fragment {
        let total: u32 = FRAGMENTS.iter().map(|f| f.weight).sum();
        let mut roll = self.rng.rand_below(total as usize).unwrap_or(0) as u32;
        for fragment in FRAGMENTS {
            if roll < fragment.weight {
                return fragment;
            }
            roll -= fragment.weight;
        }
        &FRAGMENTS[0]
    }

    /// Tail first: draw until a terminal fragment turns up, then prepend
    /// n-1 arbitrary fragments.
    fn build_chain(&mut self, n: usize) -> Vec<&'static Fragment> {
        let tail = loop {
            let fragment = self.draw_fragment();
            if fragment.terminal {
                break fragment;
            }
        };
        let mut chain = vec![tail];
        for _ in 1..n {
            chain.insert(0, self.draw_fragment());
        }
        chain
    }

    fn render(&mut self, chain: &[&Fragment]) -> String {
        let mut out = String::new();
        for (i, fragment) in chain.iter().enumerate() {
            let word = self
                .lexicon
                .random_word(self.rng.as_mut(), fragment.role, self.excluded);
            out.push_str(&fragment.pattern.replacen("{}", &word, 1));
            // Terminal fragments can land before the tail but carry no glue
            // of their own; the joint still needs a separator.
            if i + 1 < chain.len() && !joins_forward(fragment.pattern) {
                out.push(' ');
            }
        }
        out
    }
}

/// Whether a fragment pattern already ends in glue that joins it to the
/// next word.
fn joins_forward(pattern: &str) -> bool {
    pattern.ends_with(' ') || pattern.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::WordTag;
    use crate::test_utils::SequenceRandom;
    use crate::trie::WordTrie;

    /// Engine whose every lookup resolves to the marker word "qq", so the
    /// number of resolved slots is countable in the output.
    fn marker_engine() -> SentenceEngine {
        let mut trie = WordTrie::new();
        trie.insert(
            "qq",
            WordTag::START | WordTag::FILLER | WordTag::END | WordTag::EXCLAMATION,
        );
        SentenceEngine::new(
            Box::new(SequenceRandom::new(vec![
                0.03, 0.41, 0.77, 0.19, 0.58, 0.92, 0.11, 0.67, 0.34, 0.85,
            ])),
            Lexicon::from_tries(vec![trie]),
            WordTag::empty(),
        )
    }

    #[test]
    fn every_fragment_has_exactly_one_slot() {
        for fragment in templates() {
            assert_eq!(
                fragment.pattern.matches("{}").count(),
                1,
                "bad arity in {:?}",
                fragment.pattern
            );
            assert!(!fragment.role.is_empty(), "empty role in {:?}", fragment.pattern);
        }
    }

    #[test]
    fn fragment_set_has_both_kinds() {
        assert!(templates().iter().any(|f| f.terminal));
        assert!(templates().iter().any(|f| !f.terminal));
        // Degenerate always-zero draws must land on a terminal fragment.
        assert!(templates()[0].terminal);
    }

    #[test]
    fn terminal_fragments_carry_no_trailing_glue() {
        for fragment in templates().iter().filter(|f| f.terminal) {
            assert!(!fragment.pattern.ends_with(' '), "{:?}", fragment.pattern);
        }
        for fragment in templates().iter().filter(|f| !f.terminal) {
            assert!(
                fragment.pattern.ends_with(' ') || fragment.pattern.ends_with('-'),
                "non-terminal {:?} cannot be followed",
                fragment.pattern
            );
        }
    }

    #[test]
    fn direct_lengths_are_exact() {
        for n in 1..=MAX_DIRECT_WORDS {
            let mut engine = marker_engine();
            let sentence = engine.generate(n);
            assert_eq!(sentence.matches("qq").count(), n, "sentence {sentence:?}");
        }
    }

    #[test]
    fn extension_path_is_exact_too() {
        for n in [7, 11, 23] {
            let mut engine = marker_engine();
            let sentence = engine.generate(n);
            assert_eq!(sentence.matches("qq").count(), n, "sentence {sentence:?}");
        }
    }

    #[test]
    fn zero_words_is_an_empty_sentence() {
        let mut engine = marker_engine();
        assert_eq!(engine.generate(0), "");
    }

    #[test]
    fn sentences_never_end_in_glue() {
        let mut engine = marker_engine();
        for n in 1..=MAX_DIRECT_WORDS {
            let sentence = engine.generate(n);
            assert!(!sentence.ends_with(' '), "sentence {sentence:?}");
        }
    }

    #[test]
    fn early_terminal_fragments_get_a_space_joint() {
        // An always-lowest device draws the glueless "{}" fragment for every
        // position; the rendered words must still come out separated.
        let mut trie = WordTrie::new();
        trie.insert(
            "qq",
            WordTag::START | WordTag::FILLER | WordTag::END | WordTag::EXCLAMATION,
        );
        let mut engine = SentenceEngine::new(
            Box::new(crate::test_utils::ConstRandom::with_index(0.0, 0)),
            Lexicon::from_tries(vec![trie]),
            WordTag::empty(),
        );
        assert_eq!(engine.generate(2), "qq qq");
        assert_eq!(engine.generate(4), "qq qq qq qq");
    }

    #[test]
    fn resolved_words_never_touch() {
        for n in 2..=MAX_DIRECT_WORDS {
            let mut engine = marker_engine();
            let sentence = engine.generate(n);
            assert!(
                !sentence.contains("qqqq"),
                "words ran together in {sentence:?}"
            );
        }
    }

    #[test]
    fn excluded_roles_never_render() {
        // With MISSPELLING excluded, slang like "fugly" and "puta" cannot
        // appear no matter the draws.
        let mut engine = SentenceEngine::new(
            Box::new(SequenceRandom::new(vec![
                0.05, 0.35, 0.65, 0.95, 0.15, 0.45, 0.75, 0.25, 0.55, 0.85, 0.01, 0.99,
            ])),
            Lexicon::profane(),
            WordTag::MISSPELLING,
        );
        for _ in 0..20 {
            let sentence = engine.generate(3);
            for slang in ["fugly", "puta", "puto", "sod-off", "bollox"] {
                assert!(!sentence.contains(slang), "{sentence:?} leaked {slang:?}");
            }
        }
    }
}
