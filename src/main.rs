use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::debug;

use blasphemer::format::random_title_formatter;
use blasphemer::{
    build_formatter_chain, CryptoRand, DelimiterFormatter, Formatter, MultiFormatter,
    RandomDevice, SentenceEngine, WordTag, FORMATTER_NAMES, RANDOM, RANDOMLY,
};

const ALTERNATE_DELIMITERS: &str = ".-/_:$%^+=!@'`,|<>\"~\\?*&";
const RAND_DELIMITER: &str = "RAND";

#[derive(Debug, Parser)]
#[command(
    name = "blasphemer",
    version,
    about = "A generator for profane passphrases",
    long_about = "blasphemer generates obscene/profane passphrases and mangles them \
                  through chainable formatters.\n\nFormatters:\n  \
                  1337       output formatted as 1337-speak\n  \
                  uber1337   output formatted with an extended 1337 alphabet\n  \
                  fat        output some t3xt wifth fat fringers\n  \
                  fst        otput sme tet writen wit haste\n  \
                  esrever    desrever tuptuo, per word [random does not apply]\n  \
                  shuffle    tuoput si ffudlehs\n  \
                  SCREAM     OUTPUT IS UPPERCASE\n  \
                  whisper    output is lowercased\n  \
                  swear      output cartoonish #%$@!!\n  \
                  studder    o-o-output s-s-s-studdering t-text [random does not apply]\n  \
                  horse      just output horse-related words instead [very unsafe]\n  \
                  /s         sARcaSTiC OUtpUt\n  \
                  randomly   the next formatter applies only randomly, per word\n  \
                  random     the next formatter applies only randomly, per character\n\n\
                  Both \"random\" and \"randomly\" are chainable onto themselves, though \
                  \"randomly\" must come before \"random\".",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Formatters to apply, in order
    #[arg(value_name = "FORMATTER")]
    formatters: Vec<String>,

    /// How many words the passphrase should have
    #[arg(short, long, default_value_t = 2)]
    extensiveness: i16,

    /// Lengthen the output (extensiveness + 1)
    #[arg(long)]
    extend: bool,

    /// Lengthen the output further (extensiveness + 3)
    #[arg(long = "EXTEND")]
    extend_more: bool,

    /// Word delimiter; 'RAND' picks one at random
    #[arg(short, long, default_value = " ")]
    delimiter: String,

    /// Exclude word kinds: MISSPELL, POSITIVE, or a '|'-separated list
    #[arg(long, default_value = "")]
    no: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply formatters to stdin, line by line
    Obscure {
        /// Formatters to apply, in order
        #[arg(value_name = "FORMATTER")]
        formatters: Vec<String>,

        /// Word delimiter; 'RAND' picks one at random
        #[arg(short, long, default_value = " ")]
        delimiter: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Obscure {
            formatters,
            delimiter,
        }) => obscure(&formatters, &delimiter),
        None => generate(&cli),
    }
}

fn generate(cli: &Cli) -> Result<()> {
    validate_formatters(&cli.formatters)?;
    let word_count = word_count(cli)?;
    let excluded = excluded_tags(&cli.no)?;
    debug!("generating {word_count} words, excluding {excluded:?}");

    let mut engine = SentenceEngine::profane(excluded);
    let sentence = engine.generate(word_count);

    let mut chain = MultiFormatter::new();
    chain.with(Box::new(random_title_formatter()));
    chain.with(Box::new(build_formatter_chain(&cli.formatters)));
    chain.with(Box::new(DelimiterFormatter::new(resolve_delimiter(
        &cli.delimiter,
    ))));
    println!("{}", chain.format(&sentence));
    Ok(())
}

fn obscure(formatters: &[String], delimiter: &str) -> Result<()> {
    validate_formatters(formatters)?;
    let mut chain = MultiFormatter::new();
    chain.with(Box::new(build_formatter_chain(formatters)));
    chain.with(Box::new(DelimiterFormatter::new(resolve_delimiter(
        delimiter,
    ))));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(stdout, "{}", chain.format(&line))?;
    }
    Ok(())
}

fn validate_formatters(names: &[String]) -> Result<()> {
    for (i, name) in names.iter().enumerate() {
        if !FORMATTER_NAMES.contains(&name.as_str()) {
            bail!("unknown formatter: {name}");
        }
        let last = i == names.len() - 1;
        if name == RANDOM {
            if last {
                bail!("\"random\" cannot be used without a formatter");
            }
            if names[i + 1] == RANDOMLY {
                bail!("\"random\" cannot appear before \"randomly\"");
            }
        }
        if name == RANDOMLY && last {
            bail!("\"randomly\" cannot be used without a formatter");
        }
    }
    Ok(())
}

fn word_count(cli: &Cli) -> Result<usize> {
    // i32 so the flag bonuses cannot overflow at the i16 extremes.
    let mut count = i32::from(cli.extensiveness);
    if cli.extend {
        count += 1;
    }
    if cli.extend_more {
        count += 3;
    }
    if count <= 0 {
        bail!("word count must be positive, got {count}");
    }
    Ok(count as usize)
}

fn excluded_tags(no: &str) -> Result<WordTag> {
    let mut excluded = WordTag::empty();
    for nope in no.split('|') {
        match nope {
            "MISSPELL" => excluded |= WordTag::MISSPELLING,
            "POSITIVE" => excluded |= WordTag::POSITIVE,
            "" => {}
            other => bail!("unknown disallowed word kind: {other}"),
        }
    }
    Ok(excluded)
}

fn resolve_delimiter(delimiter: &str) -> String {
    if delimiter == RAND_DELIMITER {
        let glyphs: Vec<char> = ALTERNATE_DELIMITERS.chars().collect();
        let idx = CryptoRand
            .rand_below(glyphs.len())
            .unwrap_or(0);
        return glyphs[idx].to_string();
    }
    delimiter.to_string()
}
