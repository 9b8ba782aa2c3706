use crate::random::{pick, CryptoRand, RandomDevice, ThresholdRandom};

/// Transforms one character into zero or more output characters.
///
/// Implementations are stateless between calls (the fat-finger retry loop is
/// self-contained per call); anything random draws from an injected device.
pub trait CharFormatter {
    fn format_rune(&mut self, r: char) -> Vec<char>;
}

/// Passes every rune through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCharFormatter;

impl CharFormatter for IdentityCharFormatter {
    fn format_rune(&mut self, r: char) -> Vec<char> {
        vec![r]
    }
}

// Small subset of the 1337 alphabet.
const LEET: &[(char, &str)] = &[
    ('A', "4"),
    ('B', "8"),
    ('E', "3"),
    ('G', "6"),
    ('I', "1"),
    ('L', "1"),
    ('O', "0"),
    ('S', "5"),
    ('T', "7"),
    ('Z', "2"),
];

// Curated values from https://da.wikipedia.org/wiki/Leetspeak
const UBER_LEET: &[(char, &[&str])] = &[
    ('A', &["4", "/\\", "@", "/-\\"]),
    ('B', &["8", "13", "|3", "!3"]),
    ('C', &["[", "(", "<"]),
    ('D', &[")", "[)"]),
    ('E', &["3"]),
    ('F', &["|=", "|#"]),
    ('G', &["6", "(_+"]),
    ('H', &["#", "]-[", "|-|"]),
    ('I', &["1", "!", "|"]),
    ('J', &["_|"]),
    ('K', &["|<"]),
    ('L', &["1", "|_", "|"]),
    ('M', &["|v|", "|\\/|"]),
    ('N', &["|\\|", "|V"]),
    ('O', &["0", "()"]),
    ('P', &["|>"]),
    ('Q', &["()_"]),
    ('R', &["2", "12", "|?"]),
    ('S', &["5", "$", "§", "z", "Z"]),
    ('T', &["7", "+"]),
    ('U', &["(_)", "|_|"]),
    ('V', &["\\/"]),
    ('W', &["\\/\\/", "vv", "'//", "\\\\'"]),
    ('X', &["><", "}{"]),
    ('Y', &["`/"]),
    ('Z', &["2", "~/_"]),
];

/// Substitutes letters by their leetspeak spelling from a frozen table.
///
/// The table is fixed at construction, so a given instance is fully
/// deterministic: every 'A' in a run maps to the same substitution.
pub struct LeetCharFormatter {
    table: Vec<(char, &'static str)>,
}

impl LeetCharFormatter {
    /// The small, single-variant 1337 alphabet.
    pub fn fixed() -> Self {
        LeetCharFormatter {
            table: LEET.to_vec(),
        }
    }

    /// The extended alphabet, with one variant per letter chosen up front
    /// by `rng` and frozen for the lifetime of the formatter.
    pub fn uber(rng: &mut dyn RandomDevice) -> Self {
        let table = UBER_LEET
            .iter()
            .map(|&(letter, variants)| (letter, *pick(rng, variants)))
            .collect();
        LeetCharFormatter { table }
    }
}

impl CharFormatter for LeetCharFormatter {
    fn format_rune(&mut self, r: char) -> Vec<char> {
        let key = r.to_uppercase().next().unwrap_or(r);
        match self.table.iter().find(|&&(letter, _)| letter == key) {
            Some(&(_, subst)) => subst.chars().collect(),
            None => vec![r],
        }
    }
}

const KEYBOARD: [&str; 5] = [
    "1234567890-",
    "qwertyuiop[",
    "asdfghjkl;",
    "zxcvbnm,.",
    "       ",
];

/// Keys adjacent to `r` on the keyboard: the key above, the key itself and
/// its left neighbour, and the key diagonally below-left. A rune outside the
/// two letter rows is its own only neighbour.
fn neighbour_chars(r: char) -> Vec<char> {
    for row in 1..3 {
        let line = KEYBOARD[row];
        if let Some(idx) = line.find(r) {
            let low = idx.saturating_sub(1);
            let above = KEYBOARD[row - 1].get(idx..idx + 1).unwrap_or("");
            let same = &line[low..=idx];
            let below = if r != 'z' && r != 'x' {
                KEYBOARD[row + 1].get(low..idx).unwrap_or("")
            } else {
                ""
            };
            return above.chars().chain(same.chars()).chain(below.chars()).collect();
        }
    }
    vec![r]
}

/// Types the rune as if with fat fingers: occasionally mashes in adjacent
/// keys, possibly dropping or doubling the rune itself.
pub struct FatFingerCharFormatter {
    rng: Box<dyn RandomDevice>,
}

impl FatFingerCharFormatter {
    pub fn new(rng: Box<dyn RandomDevice>) -> Self {
        FatFingerCharFormatter { rng }
    }
}

impl Default for FatFingerCharFormatter {
    fn default() -> Self {
        FatFingerCharFormatter::new(Box::new(CryptoRand))
    }
}

impl CharFormatter for FatFingerCharFormatter {
    fn format_rune(&mut self, r: char) -> Vec<char> {
        if self.rng.rand() < 1.0 / 6.0 {
            let neighbours = neighbour_chars(r);
            let mut out = Vec::new();
            // Must produce at least one rune; every branch can fire, so the
            // loop terminates as soon as any draw lands.
            while out.is_empty() {
                if self.rng.rand() < 1.0 / 6.0 {
                    out.push(r);
                }
                if self.rng.rand() < 2.0 / 5.0 {
                    out.push(*pick(self.rng.as_mut(), &neighbours));
                }
                if self.rng.rand() < 1.0 / 12.0 {
                    out.push(*pick(self.rng.as_mut(), &neighbours));
                }
                if self.rng.rand() < 1.0 / 7.0 {
                    out.push(r);
                }
            }
            return out;
        }
        vec![r]
    }
}

/// Types the rune as if in a hurry, skipping it 1 time in 6.
pub struct FastFingerCharFormatter {
    rng: Box<dyn RandomDevice>,
}

impl FastFingerCharFormatter {
    pub fn new(rng: Box<dyn RandomDevice>) -> Self {
        FastFingerCharFormatter { rng }
    }
}

impl Default for FastFingerCharFormatter {
    fn default() -> Self {
        FastFingerCharFormatter::new(Box::new(CryptoRand))
    }
}

impl CharFormatter for FastFingerCharFormatter {
    fn format_rune(&mut self, r: char) -> Vec<char> {
        if self.rng.rand() < 1.0 / 6.0 {
            return Vec::new();
        }
        vec![r]
    }
}

/// Uppercases the rune (Unicode-aware, may expand to several runes).
#[derive(Debug, Clone, Copy, Default)]
pub struct UppercaseCharFormatter;

impl CharFormatter for UppercaseCharFormatter {
    fn format_rune(&mut self, r: char) -> Vec<char> {
        r.to_uppercase().collect()
    }
}

/// Lowercases the rune.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseCharFormatter;

impl CharFormatter for LowercaseCharFormatter {
    fn format_rune(&mut self, r: char) -> Vec<char> {
        r.to_lowercase().collect()
    }
}

/// Switches the case of the rune.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchCaseCharFormatter;

impl CharFormatter for SwitchCaseCharFormatter {
    fn format_rune(&mut self, r: char) -> Vec<char> {
        if r.is_uppercase() {
            r.to_lowercase().collect()
        } else {
            r.to_uppercase().collect()
        }
    }
}

const SWEAR_GLYPHS: &[char] = &['#', '&', '$', '@', '%', '+', '*', '"'];

/// Replaces any rune with a random cartoon-swear glyph.
pub struct SwearCharFormatter {
    rng: Box<dyn RandomDevice>,
}

impl SwearCharFormatter {
    pub fn new(rng: Box<dyn RandomDevice>) -> Self {
        SwearCharFormatter { rng }
    }
}

impl Default for SwearCharFormatter {
    fn default() -> Self {
        SwearCharFormatter::new(Box::new(CryptoRand))
    }
}

impl CharFormatter for SwearCharFormatter {
    fn format_rune(&mut self, _: char) -> Vec<char> {
        vec![*pick(self.rng.as_mut(), SWEAR_GLYPHS)]
    }
}

/// Delegates to the wrapped [`CharFormatter`] only when a threshold draw
/// hits; otherwise the rune passes through unchanged.
///
/// The wrapped child is accessible by move (`take`/`set`) so the chain
/// builder can splice a probabilistic layer under an existing bridge without
/// touching the bridge itself.
pub struct RandomlyFormattingCharFormatter {
    threshold: ThresholdRandom,
    inner: Box<dyn CharFormatter>,
}

impl RandomlyFormattingCharFormatter {
    pub fn new(threshold: ThresholdRandom, inner: Box<dyn CharFormatter>) -> Self {
        RandomlyFormattingCharFormatter { threshold, inner }
    }

    pub fn fifty_fifty(inner: Box<dyn CharFormatter>) -> Self {
        RandomlyFormattingCharFormatter::new(ThresholdRandom::fifty_fifty(), inner)
    }

    pub fn set_char_formatter(&mut self, inner: Box<dyn CharFormatter>) {
        self.inner = inner;
    }

    /// Moves the wrapped child out, leaving the identity formatter behind.
    pub fn take_char_formatter(&mut self) -> Box<dyn CharFormatter> {
        std::mem::replace(&mut self.inner, Box::new(IdentityCharFormatter))
    }
}

impl CharFormatter for RandomlyFormattingCharFormatter {
    fn format_rune(&mut self, r: char) -> Vec<char> {
        if self.threshold.hits() {
            self.inner.format_rune(r)
        } else {
            vec![r]
        }
    }
}
