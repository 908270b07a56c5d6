use anyhow::{bail, Context, Result};
use canonical_flops::canon::{BruteForce, CanonicalKey, Canonicalizer};
use canonical_flops::driver::{self, Enumeration, Method};
use canonical_flops::output::{self, GoldenComparison};
use canonical_flops::patterns::canonical_patterns;
use canonical_flops::sequence::CardSequence;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Without a subcommand the generate flags apply directly: `flops --input x`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Enumerate canonical poker flops", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Enumerate canonical hands and write them one per line", alias = "gen")]
    Generate(GenerateArgs),
    #[command(about = "Print the canonical form of each card sequence")]
    Canon {
        #[arg(long, short, default_value_t = Method::Direct)]
        method: Method,
        #[arg(required = true)]
        sequences: Vec<String>,
    },
    #[command(about = "Cross-check the fast canonicalizers against the brute-force oracle")]
    Verify {
        #[arg(long, short = 'k', default_value_t = 3)]
        cards: usize,
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Accepted for compatibility; not read.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, short, default_value = "flops_1755.txt")]
    output: PathBuf,
    #[arg(long, short = 'k', default_value_t = 3)]
    cards: usize,
    #[arg(long, short, default_value_t = Method::Direct)]
    method: Method,
    /// Split the enumeration across all cores.
    #[arg(long)]
    parallel: bool,
    /// Reference file the output must match byte for byte.
    #[arg(long)]
    expect: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        None => generate(cli.generate),
        Some(Command::Generate(args)) => generate(args),
        Some(Command::Canon { method, sequences }) => {
            for text in &sequences {
                println!("{text} -> {}", canon(method, text)?);
            }
            Ok(())
        }
        Some(Command::Verify { cards, samples, seed }) => verify(cards, samples, seed),
    }
}

fn run(args: &GenerateArgs) -> Result<Enumeration> {
    #[cfg(feature = "parallel")]
    if args.parallel {
        return Ok(driver::enumerate_parallel(args.cards, args.method)?);
    }
    #[cfg(not(feature = "parallel"))]
    if args.parallel {
        log::warn!("built without the `parallel` feature; running sequentially");
    }
    Ok(driver::enumerate(args.cards, args.method)?)
}

fn generate(args: GenerateArgs) -> Result<()> {
    let input = args.input.as_ref().map_or("<none>".into(), |p| p.display().to_string());
    log::info!("input: {input}");
    let Enumeration { inputs, classes } = run(&args)?;
    log::info!("{inputs} raw inputs, {} canonical {}-card hands", classes.len(), args.cards);

    output::write_flops_file(&args.output, &classes)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());

    if let Some(golden) = &args.expect {
        let comparison = output::compare_golden(&args.output, golden)
            .with_context(|| format!("comparing against {}", golden.display()))?;
        match comparison {
            GoldenComparison::Match => log::info!("output matches {}", golden.display()),
            GoldenComparison::Mismatch { line } => bail!(
                "generated flops do not match the expected flops (first difference at line {line})"
            ),
        }
    }
    Ok(())
}

fn canon(method: Method, text: &str) -> Result<CanonicalKey> {
    let sequence: CardSequence = text.parse().with_context(|| format!("parsing '{text}'"))?;
    if let Some(canonicalizer) = method.canonicalizer() {
        return Ok(canonicalizer.canonicalize(&sequence));
    }
    // Pick this hand's class out of its rank multiset's patterns.
    let oracle = BruteForce.canonicalize(&sequence);
    let ranks: Vec<_> = sequence.as_slice().iter().map(|c| c.rank()).collect();
    canonical_patterns(&ranks)?
        .into_iter()
        .find(|k| *k == oracle)
        .with_context(|| format!("no suit pattern found for '{text}'"))
}

fn verify(cards: usize, samples: usize, seed: u64) -> Result<()> {
    if cards <= 3 {
        let classes = driver::cross_check(cards)?;
        log::info!("exhaustive check: {classes} classes agree");
    } else {
        log::info!("skipping exhaustive check for {cards}-card hands");
    }
    driver::sample_check(cards, samples, seed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn generate_flags_work_without_a_subcommand() {
        let cli = Cli::try_parse_from(["flops", "--input", "x", "-k", "2"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.input, Some(PathBuf::from("x")));
        assert_eq!(cli.generate.cards, 2);
        assert_eq!(cli.generate.method, Method::Direct);
        assert_eq!(cli.generate.output, PathBuf::from("flops_1755.txt"));
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["flops"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.cards, 3);
        assert!(!cli.generate.parallel);
        assert!(cli.generate.expect.is_none());
    }

    #[test]
    fn subcommands_still_parse() {
        let cli = Cli::try_parse_from(["flops", "generate", "--method", "patterns"]).unwrap();
        match cli.command {
            Some(Command::Generate(args)) => assert_eq!(args.method, Method::RankPatterns),
            other => panic!("unexpected command: {other:?}"),
        }
        let cli = Cli::try_parse_from(["flops", "canon", "2sKd7h", "AcAdKd"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Canon { ref sequences, .. }) if sequences.len() == 2
        ));
        assert!(Cli::try_parse_from(["flops", "--method", "fast"]).is_err());
    }

    #[test]
    fn canon_agrees_across_methods() {
        for method in Method::ALL {
            assert_eq!(canon(method, "AcAdKd").unwrap().to_string(), "AsAhKs", "{method}");
        }
        assert!(canon(Method::Direct, "2s2s4h").is_err());
    }

    fn args_in(dir: &std::path::Path, expect: Option<PathBuf>) -> GenerateArgs {
        GenerateArgs {
            input: None,
            output: dir.join("flops.txt"),
            cards: 2,
            method: Method::Direct,
            parallel: false,
            expect,
        }
    }

    #[test]
    fn expect_accepts_a_matching_reference() {
        let dir = tempfile::tempdir().unwrap();
        generate(args_in(dir.path(), None)).unwrap();
        let golden = dir.path().join("golden.txt");
        fs::copy(dir.path().join("flops.txt"), &golden).unwrap();
        generate(args_in(dir.path(), Some(golden))).unwrap();
    }

    #[test]
    fn expect_fails_on_a_different_reference() {
        let dir = tempfile::tempdir().unwrap();
        let golden = dir.path().join("golden.txt");
        fs::write(&golden, "AsAh\nKsKh\n").unwrap();
        let err = generate(args_in(dir.path(), Some(golden))).unwrap_err();
        assert!(err.to_string().contains("do not match the expected flops"), "{err}");
    }
}
