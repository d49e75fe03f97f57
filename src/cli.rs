//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use bitextprep::corpus::RecordSchema;

#[derive(Debug, StructOpt)]
#[structopt(name = "bitextprep", about = "aligned corpus preparation tool.")]
/// Holds every command that is callable by the `bitextprep` command.
pub enum BitextPrep {
    #[structopt(about = "Extract sentence pairs and gold alignments")]
    Extract(Extract),
    #[structopt(about = "Build per-language token dictionaries")]
    Vocab(Vocab),
    #[structopt(about = "Run the full preparation pipeline")]
    Pipeline(Pipeline),
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
///
/// ```sh
/// bitextprep-extract 0.1.0
/// Extract sentence pairs and gold alignments
///
/// USAGE:
///     bitextprep extract <src> <dst>
///
/// ARGS:
///     <src>    corpus file (labeled alignment markup)
///     <dst>    destination directory
/// ```
pub struct Extract {
    #[structopt(parse(from_os_str), help = "corpus file (labeled alignment markup)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination directory")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub schema: SchemaOpts,
}

#[derive(Debug, StructOpt)]
/// Vocab command and parameters.
pub struct Vocab {
    #[structopt(parse(from_os_str), help = "corpus file (labeled alignment markup)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination directory")]
    pub dst: PathBuf,
    #[structopt(
        long = "cutoff",
        help = "keep only the n most frequent tokens per language"
    )]
    pub freq_cutoff: Option<usize>,
    #[structopt(flatten)]
    pub schema: SchemaOpts,
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
///
/// ```sh
/// bitextprep-pipeline 0.1.0
/// Run the full preparation pipeline
///
/// USAGE:
///     bitextprep pipeline [OPTIONS] <src> <dst>
///
/// OPTIONS:
///         --cutoff <freq-cutoff>    keep only the n most frequent tokens per language
///
/// ARGS:
///     <src>    corpus file, or directory containing .wa files
///     <dst>    pipeline result destination
/// ```
pub struct Pipeline {
    #[structopt(
        parse(from_os_str),
        help = "corpus file, or directory containing .wa files"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "pipeline result destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "cutoff",
        help = "keep only the n most frequent tokens per language"
    )]
    pub freq_cutoff: Option<usize>,
    #[structopt(flatten)]
    pub schema: SchemaOpts,
}

#[derive(Debug, StructOpt)]
/// Markup element names; defaults match the legacy Czech-English corpus.
pub struct SchemaOpts {
    #[structopt(
        long = "sentence-tag",
        default_value = "s",
        help = "sentence record element name"
    )]
    pub sentence: String,
    #[structopt(
        long = "source-tag",
        default_value = "english",
        help = "source-language text element name"
    )]
    pub source: String,
    #[structopt(
        long = "target-tag",
        default_value = "czech",
        help = "target-language text element name"
    )]
    pub target: String,
    #[structopt(
        long = "sure-tag",
        default_value = "sure",
        help = "sure-links element name"
    )]
    pub sure: String,
    #[structopt(
        long = "possible-tag",
        default_value = "possible",
        help = "possible-links element name"
    )]
    pub possible: String,
}

impl SchemaOpts {
    pub fn to_schema(&self) -> RecordSchema {
        RecordSchema::new(
            self.sentence.clone(),
            self.source.clone(),
            self.target.clone(),
            self.sure.clone(),
            self.possible.clone(),
        )
    }
}
