use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use rumorph::{AnalyzerConfig, DictionaryData, MorphAnalyzer, MorphError, Parse};

trait OutputWriter {
    fn write_parses(&mut self, word: &str, parses: &[Parse]);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_parses(&mut self, word: &str, parses: &[Parse]) {
        if parses.is_empty() {
            println!("{}\t[UNKNOWN]", word);
        }
        for parse in parses {
            println!("{}", parse);
        }
        println!();
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct ParseResult {
    word: String,
    parses: Vec<Parse>,
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<ParseResult>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_parses(&mut self, word: &str, parses: &[Parse]) {
        self.results.push(ParseResult {
            word: word.to_owned(),
            parses: parses.to_vec(),
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize results: {}", e),
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "analyze the provided words")]
    Parse(ParseArgs),

    #[options(help = "check analyses against a file of expected triples")]
    Check(CheckArgs),
}

#[derive(Debug, Options)]
struct ParseArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "dictionary directory (default: RUMORPH_DICT_PATH or pymorphy2-dicts-ru)")]
    dict: Option<PathBuf>,

    #[options(help = "JSON file with analyzer settings")]
    config: Option<PathBuf>,

    #[options(
        short = "e",
        help = "dictionary lookup only, no guessing for unknown words"
    )]
    exact: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be analyzed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct CheckArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "dictionary directory (default: RUMORPH_DICT_PATH or pymorphy2-dicts-ru)")]
    dict: Option<PathBuf>,

    #[options(free, help = "files of `word normal_form tag` lines")]
    inputs: Vec<PathBuf>,
}

fn load_analyzer(
    dict: Option<PathBuf>,
    config: Option<&Path>,
) -> anyhow::Result<MorphAnalyzer> {
    let config = match config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening config '{}'", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config '{}'", path.display()))?
        }
        None => AnalyzerConfig::default(),
    };

    let dir = match dict {
        Some(dir) => dir,
        None => rumorph::paths::find_dictionary_path().ok_or(MorphError::DictionaryNotFound)?,
    };
    log::debug!("Loading dictionary from '{}'", dir.display());

    let data = DictionaryData::open(&dir)
        .with_context(|| format!("loading dictionary '{}'", dir.display()))?;
    Ok(MorphAnalyzer::with_config(data, config))
}

fn parse(args: ParseArgs) -> anyhow::Result<()> {
    let analyzer = load_analyzer(args.dict, args.config.as_deref())?;

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let words = if args.inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        buffer
            .lines()
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .map(|x| x.to_string())
            .collect()
    } else {
        args.inputs
    };

    for word in words {
        let parses = if args.exact {
            analyzer.parse(&word)
        } else {
            analyzer.xparse(&word)
        };
        writer.write_parses(&word, &parses);
    }

    writer.finish();

    Ok(())
}

/// Splits `word normal_form tag` on runs of whitespace. The tag is the rest
/// of the line and may itself contain spaces.
fn split_check_line(line: &str) -> Option<(&str, &str, &str)> {
    let (word, rest) = line.trim().split_once(char::is_whitespace)?;
    let (normal_form, tag) = rest.trim_start().split_once(char::is_whitespace)?;
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }
    Some((word, normal_form, tag))
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("no files to check");
    }
    let analyzer = load_analyzer(args.dict, None)?;

    let mut total = 0usize;
    let mut failures = 0usize;

    for path in &args.inputs {
        let file =
            File::open(path).with_context(|| format!("opening '{}'", path.display()))?;

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| format!("reading '{}'", path.display()))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, normal_form, tag) = match split_check_line(line) {
                Some(fields) => fields,
                None => {
                    eprintln!("{}:{}: expected `word normal_form tag`", path.display(), index + 1);
                    failures += 1;
                    continue;
                }
            };

            total += 1;
            let parses = analyzer.xparse(word);
            let found = parses
                .iter()
                .any(|p| p.normal_form() == normal_form && p.tag() == tag);
            if !found {
                failures += 1;
                println!(
                    "{}:{}: {} => {} {} not among {} analyses",
                    path.display(),
                    index + 1,
                    word,
                    normal_form,
                    tag,
                    parses.len()
                );
            }
        }
    }

    println!("{} checked, {} failed", total, failures);

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Parse(args)) => parse(args),
        Some(Command::Check(args)) => check(args),
    }
}
