use crate::char_format::{CharFormatter, SwearCharFormatter};
use crate::random::{pick, CryptoRand, RandomDevice, ThresholdRandom};

/// Transforms a whole string into another string.
///
/// Formatters compose by exclusive ownership: a wrapper owns its child
/// outright, so chains are trees and can never cycle.
pub trait Formatter {
    fn format(&mut self, text: &str) -> String;
}

/// Leaves the text untouched. Unknown formatter names resolve to this.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFormatter;

impl Formatter for IdentityFormatter {
    fn format(&mut self, text: &str) -> String {
        text.to_string()
    }
}

/// Applies an ordered list of formatters, each consuming the previous output.
#[derive(Default)]
pub struct MultiFormatter {
    formatters: Vec<Box<dyn Formatter>>,
}

impl MultiFormatter {
    pub fn new() -> Self {
        MultiFormatter::default()
    }

    pub fn with(&mut self, f: Box<dyn Formatter>) {
        self.formatters.push(f);
    }
}

impl Formatter for MultiFormatter {
    fn format(&mut self, text: &str) -> String {
        let mut out = text.to_string();
        for f in &mut self.formatters {
            out = f.format(&out);
        }
        out
    }
}

/// Bridge from character level to string level: feeds every rune of the
/// input through a [`CharFormatter`] and concatenates the results.
pub struct CharFormatterDelegatingFormatter {
    inner: Box<dyn CharFormatter>,
}

impl CharFormatterDelegatingFormatter {
    pub fn new(inner: Box<dyn CharFormatter>) -> Self {
        CharFormatterDelegatingFormatter { inner }
    }

    pub fn set_char_formatter(&mut self, inner: Box<dyn CharFormatter>) {
        self.inner = inner;
    }

    /// Moves the wrapped char formatter out; the chain builder uses this to
    /// splice a probabilistic layer underneath without replacing the bridge.
    pub fn take_char_formatter(&mut self) -> Box<dyn CharFormatter> {
        std::mem::replace(
            &mut self.inner,
            Box::new(crate::char_format::IdentityCharFormatter),
        )
    }
}

impl Formatter for CharFormatterDelegatingFormatter {
    fn format(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for r in text.chars() {
            out.extend(self.inner.format_rune(r));
        }
        out
    }
}

/// Splits on single spaces, formats each word independently, rejoins with
/// single spaces. "Word" means space-delimited, nothing smarter.
pub struct PerWordFormatter {
    inner: Box<dyn Formatter>,
}

impl PerWordFormatter {
    pub fn new(inner: Box<dyn Formatter>) -> Self {
        PerWordFormatter { inner }
    }
}

impl Formatter for PerWordFormatter {
    fn format(&mut self, text: &str) -> String {
        let words: Vec<String> = text.split(' ').map(|w| self.inner.format(w)).collect();
        words.join(" ")
    }
}

/// Delegates to the wrapped formatter only when a threshold draw hits.
///
/// Always used inside a [`PerWordFormatter`] so the probability is re-rolled
/// independently for every word; [`RandomlyFormattingFormatter::per_word`]
/// builds that pairing.
pub struct RandomlyFormattingFormatter {
    threshold: ThresholdRandom,
    inner: Box<dyn Formatter>,
}

impl RandomlyFormattingFormatter {
    pub fn new(threshold: ThresholdRandom, inner: Box<dyn Formatter>) -> Self {
        RandomlyFormattingFormatter { threshold, inner }
    }

    /// Fifty-fifty word-granularity wrapper, pre-wrapped for per-word use.
    pub fn per_word(inner: Box<dyn Formatter>) -> PerWordFormatter {
        PerWordFormatter::new(Box::new(RandomlyFormattingFormatter::new(
            ThresholdRandom::fifty_fifty(),
            inner,
        )))
    }
}

impl Formatter for RandomlyFormattingFormatter {
    fn format(&mut self, text: &str) -> String {
        if self.threshold.hits() {
            self.inner.format(text)
        } else {
            text.to_string()
        }
    }
}

/// Uppercases the first letter of every word; the rest is left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleCaseFormatter;

impl Formatter for TitleCaseFormatter {
    fn format(&mut self, text: &str) -> String {
        let words: Vec<String> = text
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect();
        words.join(" ")
    }
}

/// Title-case applied at random, word by word. The default decoration for
/// every generated sentence.
pub fn random_title_formatter() -> PerWordFormatter {
    RandomlyFormattingFormatter::per_word(Box::new(TitleCaseFormatter))
}

/// Reverses the rune order of its input. Wrapped per-word by the chain
/// builder, so each word is reversed in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReversingFormatter;

impl Formatter for ReversingFormatter {
    fn format(&mut self, text: &str) -> String {
        text.chars().rev().collect()
    }
}

/// Random in-place permutation of the input's runes (Fisher–Yates).
pub struct ShuffleFormatter {
    rng: Box<dyn RandomDevice>,
}

impl ShuffleFormatter {
    pub fn new(rng: Box<dyn RandomDevice>) -> Self {
        ShuffleFormatter { rng }
    }
}

impl Default for ShuffleFormatter {
    fn default() -> Self {
        ShuffleFormatter::new(Box::new(CryptoRand))
    }
}

impl Formatter for ShuffleFormatter {
    fn format(&mut self, text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        for i in 0..chars.len() {
            // Swapping within the unshuffled suffix keeps this a permutation
            // for any draw sequence.
            let j = i + self.rng.rand_below(chars.len() - i).unwrap_or(0);
            chars.swap(i, j);
        }
        chars.into_iter().collect()
    }
}

/// P-p-prepends up to three stuttered copies of the word's first letter.
pub struct StutterFormatter {
    rng: Box<dyn RandomDevice>,
}

impl StutterFormatter {
    pub fn new(rng: Box<dyn RandomDevice>) -> Self {
        StutterFormatter { rng }
    }
}

impl Default for StutterFormatter {
    fn default() -> Self {
        StutterFormatter::new(Box::new(CryptoRand))
    }
}

impl Formatter for StutterFormatter {
    fn format(&mut self, text: &str) -> String {
        let first = match text.chars().next() {
            Some(c) if c.is_alphabetic() => c,
            _ => return text.to_string(),
        };
        let repeats = self.rng.rand_below(4).unwrap_or(0);
        let mut out = String::with_capacity(text.len() + repeats * 2);
        for _ in 0..repeats {
            out.push(first);
            out.push('-');
        }
        out.push_str(text);
        out
    }
}

/// Feeds the leading letters of a word through a char formatter (cartoon
/// swear glyphs by default), inserts a single `!` after them, and appends
/// the rest of the word untouched. Words that do not start with a letter
/// are left alone.
pub struct SwearExclamationFormatter {
    inner: Box<dyn CharFormatter>,
}

impl SwearExclamationFormatter {
    pub fn new(inner: Box<dyn CharFormatter>) -> Self {
        SwearExclamationFormatter { inner }
    }
}

impl Default for SwearExclamationFormatter {
    fn default() -> Self {
        SwearExclamationFormatter::new(Box::new(SwearCharFormatter::default()))
    }
}

impl Formatter for SwearExclamationFormatter {
    fn format(&mut self, text: &str) -> String {
        match text.chars().next() {
            Some(c) if c.is_alphabetic() => {}
            _ => return text.to_string(),
        }
        let mut out = String::with_capacity(text.len() + 1);
        for (i, c) in text.char_indices() {
            if c.is_alphabetic() {
                out.extend(self.inner.format_rune(c));
            } else {
                out.push('!');
                out.push_str(&text[i..]);
                return out;
            }
        }
        out.push('!');
        out
    }
}

const HORSE_WORDS: &[&str] = &[
    "horse",
    "pony",
    "mare",
    "stallion",
    "foal",
    "filly",
    "colt",
    "gelding",
    "mustang",
    "bronco",
    "hay",
    "oats",
    "saddle",
    "bridle",
    "hoof",
    "mane",
    "gallop",
    "canter",
    "trot",
    "neigh",
];

/// Ignores its input entirely and produces a random horse-related word.
/// Very unsafe as passwords go, exactly as advertised.
pub struct HorseFormatter {
    rng: Box<dyn RandomDevice>,
}

impl HorseFormatter {
    pub fn new(rng: Box<dyn RandomDevice>) -> Self {
        HorseFormatter { rng }
    }
}

impl Default for HorseFormatter {
    fn default() -> Self {
        HorseFormatter::new(Box::new(CryptoRand))
    }
}

impl Formatter for HorseFormatter {
    fn format(&mut self, _: &str) -> String {
        pick(self.rng.as_mut(), HORSE_WORDS).to_string()
    }
}

/// tOGgLes ThE cAsE of roughly half the runes.
pub struct SarcasticFormatter {
    threshold: ThresholdRandom,
}

impl SarcasticFormatter {
    pub fn new(threshold: ThresholdRandom) -> Self {
        SarcasticFormatter { threshold }
    }
}

impl Default for SarcasticFormatter {
    fn default() -> Self {
        SarcasticFormatter::new(ThresholdRandom::fifty_fifty())
    }
}

impl Formatter for SarcasticFormatter {
    fn format(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for r in text.chars() {
            if self.threshold.hits() {
                if r.is_uppercase() {
                    out.extend(r.to_lowercase());
                } else {
                    out.extend(r.to_uppercase());
                }
            } else {
                out.push(r);
            }
        }
        out
    }
}

/// Replaces the single-space word joints with an arbitrary delimiter.
pub struct DelimiterFormatter {
    delimiter: String,
}

impl DelimiterFormatter {
    pub fn new(delimiter: impl Into<String>) -> Self {
        DelimiterFormatter {
            delimiter: delimiter.into(),
        }
    }
}

impl Formatter for DelimiterFormatter {
    fn format(&mut self, text: &str) -> String {
        text.replace(' ', &self.delimiter)
    }
}
