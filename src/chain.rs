//! Resolves the ordered formatter-name list coming from the CLI into one
//! composed [`MultiFormatter`].
//!
//! The two modifier keywords are not formatters themselves: they re-parent
//! the *next* resolved transform under a probabilistic wrapper. That splice
//! happens here, while we still know whether the transform exposes a
//! char-formatter child, so the live chain never has to be mutated.

use log::debug;

use crate::char_format::{
    FastFingerCharFormatter, FatFingerCharFormatter, LeetCharFormatter,
    LowercaseCharFormatter, RandomlyFormattingCharFormatter, UppercaseCharFormatter,
};
use crate::format::{
    CharFormatterDelegatingFormatter, Formatter, HorseFormatter, IdentityFormatter,
    MultiFormatter, PerWordFormatter, RandomlyFormattingFormatter, ReversingFormatter,
    SarcasticFormatter, ShuffleFormatter, StutterFormatter, SwearExclamationFormatter,
};
use crate::random::CryptoRand;

/// The word-granularity modifier keyword.
pub const RANDOMLY: &str = "randomly";
/// The char-granularity modifier keyword.
pub const RANDOM: &str = "random";

/// Every name the chain builder understands, modifiers included. The CLI
/// uses this for validation and help text.
pub const FORMATTER_NAMES: &[&str] = &[
    "1337", "uber1337", "fat", "fst", "esrever", "shuffle", "SCREAM", "whisper", "swear",
    "studder", "horse", "/s", RANDOMLY, RANDOM,
];

/// A resolved transform that still remembers whether it can take a
/// probabilistic layer at character granularity.
enum Resolved {
    /// A char-to-string bridge; its child can be re-parented.
    Chars(CharFormatterDelegatingFormatter),
    /// An opaque string transform; only word-granularity wrapping applies.
    Words(Box<dyn Formatter>),
}

impl Resolved {
    fn into_formatter(self) -> Box<dyn Formatter> {
        match self {
            Resolved::Chars(f) => Box::new(f),
            Resolved::Words(f) => f,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Granularity {
    Word,
    Char,
}

fn chars(inner: Box<dyn crate::char_format::CharFormatter>) -> Resolved {
    Resolved::Chars(CharFormatterDelegatingFormatter::new(inner))
}

fn per_word(inner: Box<dyn Formatter>) -> Resolved {
    Resolved::Words(Box::new(PerWordFormatter::new(inner)))
}

fn resolve(name: &str) -> Resolved {
    match name {
        "1337" => chars(Box::new(LeetCharFormatter::fixed())),
        "uber1337" => chars(Box::new(LeetCharFormatter::uber(&mut CryptoRand))),
        "fat" => chars(Box::new(FatFingerCharFormatter::default())),
        "fst" => chars(Box::new(FastFingerCharFormatter::default())),
        "SCREAM" => chars(Box::new(UppercaseCharFormatter)),
        "whisper" => chars(Box::new(LowercaseCharFormatter)),
        "esrever" => per_word(Box::new(ReversingFormatter)),
        "shuffle" => per_word(Box::new(ShuffleFormatter::default())),
        "swear" => per_word(Box::new(SwearExclamationFormatter::default())),
        "studder" => per_word(Box::new(StutterFormatter::default())),
        "horse" => per_word(Box::new(HorseFormatter::default())),
        "/s" => Resolved::Words(Box::new(SarcasticFormatter::default())),
        unknown => {
            // The CLI validates names up front; the core silently no-ops.
            debug!("unknown formatter name {unknown:?}, using identity");
            Resolved::Words(Box::new(IdentityFormatter))
        }
    }
}

/// Inserts a fifty-fifty layer at character granularity where the transform
/// allows it: the bridge keeps its identity, its child moves one level down.
/// Transforms without a char child are wrapped whole, per word.
fn apply_char_random(resolved: Resolved) -> Resolved {
    match resolved {
        Resolved::Chars(mut bridge) => {
            let child = bridge.take_char_formatter();
            bridge.set_char_formatter(Box::new(RandomlyFormattingCharFormatter::fifty_fifty(
                child,
            )));
            Resolved::Chars(bridge)
        }
        Resolved::Words(f) => Resolved::Words(Box::new(RandomlyFormattingFormatter::per_word(f))),
    }
}

fn apply_word_random(resolved: Resolved) -> Resolved {
    Resolved::Words(Box::new(RandomlyFormattingFormatter::per_word(
        resolved.into_formatter(),
    )))
}

/// Resolves `names`, in order, into one composed formatter.
///
/// Modifier keywords stack onto the next concrete name; the one written
/// closest to the transform binds innermost, which is why `randomly` has to
/// come before `random`. Trailing modifiers with nothing left to wrap are
/// dropped; rejecting them is the CLI's job.
pub fn build_formatter_chain<S: AsRef<str>>(names: &[S]) -> MultiFormatter {
    let mut chain = MultiFormatter::new();
    let mut pending: Vec<Granularity> = Vec::new();
    for name in names {
        match name.as_ref() {
            RANDOMLY => pending.push(Granularity::Word),
            RANDOM => pending.push(Granularity::Char),
            other => {
                debug!("resolving formatter {other:?}");
                let mut resolved = resolve(other);
                for granularity in pending.drain(..).rev() {
                    resolved = match granularity {
                        Granularity::Char => apply_char_random(resolved),
                        Granularity::Word => apply_word_random(resolved),
                    };
                }
                chain.with(resolved.into_formatter());
            }
        }
    }
    if !pending.is_empty() {
        debug!("{} trailing modifier(s) had nothing to wrap", pending.len());
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_is_identity() {
        let mut f = build_formatter_chain::<&str>(&[]);
        assert_eq!(f.format("hello world"), "hello world");
    }

    #[test]
    fn unknown_names_resolve_to_identity() {
        let mut f = build_formatter_chain(&["definitely-not-a-formatter"]);
        assert_eq!(f.format("hello"), "hello");
    }

    #[test]
    fn leet_then_scream() {
        let mut f = build_formatter_chain(&["1337", "SCREAM"]);
        assert_eq!(f.format("asd"), "45D");
    }

    #[test]
    fn esrever_reverses_per_word() {
        let mut f = build_formatter_chain(&["esrever"]);
        assert_eq!(f.format("abc def"), "cba fed");
    }

    #[test]
    fn sarcastic_only_changes_case() {
        let mut f = build_formatter_chain(&["/s"]);
        for _ in 0..1000 {
            assert_eq!(f.format("asd").to_uppercase(), "ASD");
        }
    }

    #[test]
    fn char_random_keeps_the_bridge_contract() {
        // Randomly-applied SCREAM may change case per rune, never length.
        let mut f = build_formatter_chain(&["random", "SCREAM"]);
        for _ in 0..1000 {
            let out = f.format("asd");
            assert_eq!(out.to_uppercase(), "ASD");
            assert_eq!(out.len(), 3);
        }
    }

    #[test]
    fn modifiers_stack() {
        // randomly(random(1337)): output is always some leetness of "asd".
        let mut f = build_formatter_chain(&["randomly", "random", "1337"]);
        for _ in 0..200 {
            let out = f.format("asd asd");
            for word in out.split(' ') {
                assert!(["asd", "a5d", "45d", "4sd"].contains(&word), "got {word:?}");
            }
        }
    }

    #[test]
    fn trailing_modifier_is_a_no_op() {
        let mut f = build_formatter_chain(&["SCREAM", "randomly"]);
        assert_eq!(f.format("asd"), "ASD");
        let mut f = build_formatter_chain(&["random"]);
        assert_eq!(f.format("asd"), "asd");
    }

    #[test]
    fn shuffle_chain_preserves_length() {
        let mut f = build_formatter_chain(&["shuffle"]);
        for _ in 0..100 {
            assert_eq!(f.format("hello world").len(), "hello world".len());
        }
    }
}
