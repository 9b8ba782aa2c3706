use bitflags::bitflags;

bitflags! {
    /// Role bitmask for a lexicon word: where in a sentence it can stand.
    ///
    /// A word may carry several roles at once. MISSPELLING and POSITIVE are
    /// inherited filters: a trie node carrying either excludes its whole
    /// subtree from lookups that disallow that flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct WordTag: u8 {
        /// Fits at the start of a sentence.
        const START = 1;
        /// Fits anywhere in the middle.
        const FILLER = 2;
        /// Fits at the end of a sentence.
        const END = 4;
        /// Works as an exclamation, like "DAMN!".
        const EXCLAMATION = 8;
        /// Reserved for sentence construction by word-splitting.
        const SPLIT = 16;
        /// Slang and misspellings; inherited down the trie.
        const MISSPELLING = 32;
        /// Words that are not negatively laden; inherited down the trie.
        const POSITIVE = 64;

        /// Most normal-kinda words.
        const DEFAULT = Self::START.bits() | Self::FILLER.bits();
        /// Starting exclamations, because the two appear together often.
        const EXCLAMATIONS = Self::START.bits() | Self::EXCLAMATION.bits();
    }
}

impl WordTag {
    /// The roles that can close a sentence; fragment templates use this a lot.
    pub const LOOSE: WordTag = WordTag::EXCLAMATION
        .union(WordTag::FILLER)
        .union(WordTag::END);
}
