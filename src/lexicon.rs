//! The profane word store: tagged word tables (pure content) and the
//! multi-root [`Lexicon`] built from them at startup.

use crate::random::{pick, RandomDevice};
use crate::tag::WordTag;
use crate::trie::WordTrie;

// Shorthands for the table literals below.
const DEFAULT: WordTag = WordTag::DEFAULT;
const FILLER_END: WordTag = WordTag::FILLER.union(WordTag::END);
const EXCLS: WordTag = WordTag::EXCLAMATIONS;
const MISSPELL: WordTag = WordTag::MISSPELLING;
const POSITIVE: WordTag = WordTag::POSITIVE;

/// Adjectives and adjective-ish words: sentence openers and fillers.
pub const ADJECTIVES: &[(&str, WordTag)] = &[
    ("anal", DEFAULT),
    ("ass-hat", DEFAULT),
    ("bastard", DEFAULT),
    ("benign", DEFAULT.union(POSITIVE)),
    ("bestial", DEFAULT),
    ("big", DEFAULT.union(POSITIVE)),
    ("bitchy", DEFAULT),
    ("bloody", DEFAULT),
    ("bollox", DEFAULT.union(MISSPELL)),
    ("brutal", DEFAULT),
    ("cancerous", DEFAULT),
    ("cheese eating", DEFAULT),
    ("damning", DEFAULT),
    ("dark", DEFAULT),
    ("dirty", DEFAULT),
    ("dorking", DEFAULT.union(MISSPELL)),
    ("drunken", DEFAULT),
    ("dull", DEFAULT),
    ("elitist", DEFAULT),
    ("enormous", DEFAULT.union(POSITIVE)),
    ("fanatic", DEFAULT),
    ("fisting", DEFAULT),
    ("fucking", DEFAULT),
    ("gluttonous", DEFAULT),
    ("hairy", DEFAULT),
    ("half-arsed", DEFAULT),
    ("hardcore", DEFAULT),
    ("horny", DEFAULT),
    ("hot", DEFAULT.union(POSITIVE)),
    ("huge", DEFAULT.union(POSITIVE)),
    ("idiotic", DEFAULT),
    ("illegitimate", DEFAULT),
    ("incestuous", DEFAULT),
    ("jerking", DEFAULT),
    ("lame", DEFAULT),
    ("lazy", DEFAULT),
    ("limp", DEFAULT),
    ("lustful", DEFAULT),
    ("masturbating", DEFAULT),
    ("misbehaving", DEFAULT),
    ("molesting", DEFAULT),
    ("motherfucking", DEFAULT),
    ("no-brain", DEFAULT),
    ("no-good", DEFAULT),
    ("obnoxious", DEFAULT),
    ("particularly", DEFAULT),
    ("pissing", DEFAULT),
    ("proud", DEFAULT.union(POSITIVE)),
    ("raping", DEFAULT),
    ("rubbish", DEFAULT),
    ("salty", DEFAULT),
    ("satanic", DEFAULT),
    ("skanky", DEFAULT.union(MISSPELL)),
    ("slimy", DEFAULT),
    ("smelly", DEFAULT),
    ("spooky", DEFAULT),
    ("suicidal", DEFAULT),
    ("trashy", DEFAULT),
    ("ugly", DEFAULT),
    ("unwed", DEFAULT),
    ("wrathful", DEFAULT),
    ("x-rated", DEFAULT),
];

/// Nouns: fillers and sentence enders.
pub const NOUNS: &[(&str, WordTag)] = &[
    ("addict", FILLER_END),
    ("adulterer", FILLER_END),
    ("anus", FILLER_END),
    ("armpit", FILLER_END),
    ("arsehole", FILLER_END),
    ("bandit", FILLER_END),
    ("banshee", FILLER_END),
    ("bellend", FILLER_END),
    ("boner", FILLER_END),
    ("butt", FILLER_END),
    ("chipmunk", FILLER_END.union(POSITIVE)),
    ("clown", FILLER_END),
    ("dickhead", FILLER_END),
    ("dildo", FILLER_END),
    ("dimwit", FILLER_END),
    ("dipshit", FILLER_END),
    ("dog", FILLER_END),
    ("donkey", FILLER_END),
    ("dork", FILLER_END),
    ("douchebag", FILLER_END),
    ("dwarf", FILLER_END),
    ("eel", FILLER_END),
    ("glutton", FILLER_END),
    ("goblin", FILLER_END),
    ("hag", FILLER_END),
    ("hellhole", FILLER_END),
    ("ho", FILLER_END.union(MISSPELL)),
    ("hoe", FILLER_END.union(MISSPELL)),
    ("horse", FILLER_END.union(POSITIVE)),
    ("idiot", FILLER_END),
    ("imbecile", FILLER_END),
    ("imp", FILLER_END),
    ("jerk", FILLER_END),
    ("killer", FILLER_END),
    ("lowlife", FILLER_END),
    ("master baiter", FILLER_END.union(MISSPELL)),
    ("monkey", FILLER_END),
    ("murderer", FILLER_END),
    ("nudist", FILLER_END),
    ("nutsack", FILLER_END),
    ("ogre", FILLER_END),
    ("pecker", FILLER_END),
    ("penis", FILLER_END),
    ("pig", FILLER_END),
    ("pirate", FILLER_END.union(POSITIVE)),
    ("punk", FILLER_END),
    ("pussy", FILLER_END),
    ("rat", FILLER_END),
    ("rectum", FILLER_END),
    ("rodent", FILLER_END),
    ("rubber duck", FILLER_END.union(POSITIVE)),
    ("satan", FILLER_END),
    ("scrotum", FILLER_END),
    ("scumbag", FILLER_END),
    ("shitter", FILLER_END),
    ("sissy", FILLER_END),
    ("skank", FILLER_END.union(MISSPELL)),
    ("slut", FILLER_END),
    ("snail", FILLER_END),
    ("snake", FILLER_END),
    ("son-of-a-bitch", FILLER_END),
    ("succubus", FILLER_END),
    ("sucker", FILLER_END),
    ("temptress", FILLER_END),
    ("twat", FILLER_END),
    ("vampire", FILLER_END),
    ("weasel", FILLER_END),
    ("weirdo", FILLER_END),
    ("whale", FILLER_END),
    ("willy", FILLER_END.union(MISSPELL)),
    ("witch", FILLER_END),
    ("zoophile", FILLER_END),
];

/// Swears and exclamations: things you shout.
pub const SWEARS: &[(&str, WordTag)] = &[
    ("Good lord", WordTag::EXCLAMATION.union(POSITIVE)),
    ("Jesus Christ", WordTag::EXCLAMATION.union(POSITIVE)),
    ("arse", EXCLS.union(WordTag::FILLER)),
    ("ball", EXCLS),
    ("boob", EXCLS),
    ("bugger", EXCLS.union(WordTag::FILLER)),
    ("cake", EXCLS.union(POSITIVE)),
    ("cock", EXCLS),
    ("crap", EXCLS.union(WordTag::FILLER)),
    ("cunt", EXCLS),
    ("damn", EXCLS.union(WordTag::FILLER)),
    ("frick", EXCLS.union(MISSPELL)),
    ("fuck", EXCLS.union(WordTag::FILLER)),
    ("fuckup", EXCLS),
    ("fugly", EXCLS.union(MISSPELL)),
    ("golly", EXCLS.union(POSITIVE)),
    ("hell", EXCLS.union(WordTag::FILLER)),
    ("jizz", EXCLS),
    ("lard", EXCLS),
    ("my lord", WordTag::EXCLAMATION.union(POSITIVE)),
    ("piss", EXCLS.union(WordTag::FILLER)),
    ("poop", EXCLS),
    ("prick", EXCLS),
    ("puta", EXCLS.union(MISSPELL)),
    ("puto", EXCLS.union(MISSPELL)),
    ("shit", EXCLS.union(WordTag::FILLER)),
    ("shite", EXCLS.union(MISSPELL)),
    ("sod-off", EXCLS.union(MISSPELL)),
    ("wank", EXCLS),
    ("xxx", EXCLS.union(MISSPELL)),
];

/// A set of independent trie roots, one per lexical category. Lookups
/// conceptually union the roots; random draws pick a root first.
pub struct Lexicon {
    tries: Vec<WordTrie>,
}

impl Lexicon {
    /// The built-in profane lexicon.
    pub fn profane() -> Self {
        Lexicon::from_tables(&[ADJECTIVES, NOUNS, SWEARS])
    }

    pub fn from_tables(tables: &[&[(&str, WordTag)]]) -> Self {
        Lexicon {
            tries: tables.iter().map(|t| WordTrie::from_entries(t)).collect(),
        }
    }

    pub fn from_tries(tries: Vec<WordTrie>) -> Self {
        Lexicon { tries }
    }

    /// Union of per-root lookups.
    pub fn lookup(&self, tag: WordTag, exclude: WordTag) -> Vec<String> {
        self.tries
            .iter()
            .flat_map(|t| t.lookup(tag, exclude))
            .collect()
    }

    /// One uniformly random word matching `tag` and clearing `exclude`.
    ///
    /// Picks a random root and retries on an empty match list. Termination
    /// rests on the lexicon data invariant that every role used by a
    /// sentence template has at least one non-excludable word (validated by
    /// test, not at runtime).
    pub fn random_word(&self, rng: &mut dyn RandomDevice, tag: WordTag, exclude: WordTag) -> String {
        loop {
            let trie = pick(rng, &self.tries);
            let words = trie.lookup(tag, exclude);
            if !words.is_empty() {
                return pick(rng, &words).clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SequenceRandom;

    #[test]
    fn every_template_role_has_a_safe_word() {
        // The retry loop in `random_word` terminates only if every role bit
        // keeps at least one word under the strictest exclusion mask.
        let lexicon = Lexicon::profane();
        let exclude = WordTag::MISSPELLING | WordTag::POSITIVE;
        for role in [
            WordTag::START,
            WordTag::FILLER,
            WordTag::END,
            WordTag::EXCLAMATION,
        ] {
            assert!(
                !lexicon.lookup(role, exclude).is_empty(),
                "no safe word for {role:?}"
            );
        }
    }

    #[test]
    fn excluded_flags_never_surface() {
        let lexicon = Lexicon::profane();
        let exclude = WordTag::MISSPELLING | WordTag::POSITIVE;
        let clean = lexicon.lookup(WordTag::LOOSE | WordTag::START, exclude);
        for word in &clean {
            assert!(word != "fugly" && word != "puta" && word != "Good lord");
        }
        // The same words do surface without the mask.
        let all = lexicon.lookup(WordTag::LOOSE | WordTag::START, WordTag::empty());
        assert!(all.iter().any(|w| w == "fugly"));
        assert!(all.len() > clean.len());
    }

    #[test]
    fn random_word_honours_role_and_mask() {
        let lexicon = Lexicon::profane();
        let mut rng = SequenceRandom::new(vec![0.0, 0.17, 0.31, 0.43, 0.59, 0.71, 0.83, 0.97]);
        for _ in 0..50 {
            let word = lexicon.random_word(&mut rng, WordTag::END, WordTag::MISSPELLING);
            assert!(
                lexicon
                    .lookup(WordTag::END, WordTag::MISSPELLING)
                    .contains(&word),
                "{word:?} is not an END word"
            );
        }
    }
}
