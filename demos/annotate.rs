use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use postag::{AnnotatorConfig, CrfSuiteWriter, Document, Mode, PosAnnotator};

/// Write CRFsuite training data for the POS-tagged corpora given as FILEs.
/// Each line holds `WORD<TAB>TAG`; an empty line ends a sentence and each
/// file becomes one document.
#[derive(Debug, Parser)]
#[command(version)]
struct Argv {
    /// read feature options from a JSON file instead of the command line
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,
    #[command(flatten)]
    features: AnnotatorConfig,
    /// write the training data to a file (OUTPUT) instead of STDOUT
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    #[arg(required = true, value_name = "FILE")]
    datasets: Vec<PathBuf>,
}

fn read_document(fpath: &PathBuf) -> io::Result<Document> {
    let mut doc = Document::new(fpath.display().to_string());
    let mut words: Vec<(String, String)> = Vec::new();
    for line in BufReader::new(File::open(fpath)?).lines() {
        let line = line?;
        if line.is_empty() {
            if !words.is_empty() {
                doc.push_tagged(&words);
                words.clear();
            }
        } else if let Some((word, tag)) = line.split_once('\t') {
            words.push((word.to_string(), tag.to_string()));
        } else {
            log::warn!("invalid line: {line}");
        }
    }
    if !words.is_empty() {
        doc.push_tagged(&words);
    }
    Ok(doc)
}

fn main() {
    env_logger::init();
    let argv = Argv::parse();
    log::info!("argv: {:?}", argv);
    let config = match &argv.config {
        Some(path) => AnnotatorConfig::from_path(path).expect("failed to read config"),
        None => argv.features.clone(),
    };
    let out: Box<dyn Write> = match &argv.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).expect("failed to create output"))),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut writer = CrfSuiteWriter::new(out);
    let mut annotator = PosAnnotator::from_config(&config, Mode::Training(&mut writer));
    for fpath in &argv.datasets {
        let mut doc = read_document(fpath).expect("failed to read dataset");
        annotator.process(&mut doc).expect("failed to extract features");
    }
    annotator.finish().expect("failed to write training data");
}
