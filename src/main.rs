//! # Bitextprep
//!
//! Bitextprep prepares word-aligned parallel corpora for model training:
//! it parses labeled alignment markup into sentence pairs and gold links,
//! builds per-language token dictionaries, and converts surviving pairs to
//! integer index sequences.
//!
//! This project can be used both as a CLI tool and as a lib to integrate
//! corpus preparation into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! bitextprep 0.1.0
//! aligned corpus preparation tool.
//!
//! USAGE:
//!     bitextprep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     extract     Extract sentence pairs and gold alignments
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Run the full preparation pipeline
//!     vocab       Build per-language token dictionaries
//! ```
//!
use std::fs;

use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use bitextprep::corpus::{extract_sentences_with_schema, CorpusRecord};
use bitextprep::error::Error;
use bitextprep::io::writer::{write_vocab, JsonlWriter, WriterTrait};
use bitextprep::pipelines::{LabeledBitext, Pipeline};
use bitextprep::vocab::get_token_to_index;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::BitextPrep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::BitextPrep::Extract(e) => extract(e)?,
        cli::BitextPrep::Vocab(v) => vocab(v)?,
        cli::BitextPrep::Pipeline(p) => {
            let pipeline = LabeledBitext::new(p.src, p.dst, p.freq_cutoff, p.schema.to_schema());
            pipeline.run()?;
        }
    };
    Ok(())
}

fn extract(e: cli::Extract) -> Result<(), Error> {
    let schema = e.schema.to_schema();
    let (pairs, alignments) = extract_sentences_with_schema(&e.src, &schema)?;
    info!("{:?}: {} sentence records", e.src, pairs.len());

    fs::create_dir_all(&e.dst)?;
    let records: Vec<CorpusRecord> = pairs
        .into_iter()
        .zip(alignments)
        .map(|(pair, alignment)| CorpusRecord::new(pair, alignment))
        .collect();
    let mut writer: JsonlWriter<CorpusRecord> = JsonlWriter::new(&e.dst.join("records.jsonl"))?;
    writer.write(records)?;
    Ok(())
}

fn vocab(v: cli::Vocab) -> Result<(), Error> {
    let schema = v.schema.to_schema();
    let (pairs, _) = extract_sentences_with_schema(&v.src, &schema)?;
    let (source_dict, target_dict) = get_token_to_index(&pairs, v.freq_cutoff);
    info!(
        "{:?}: dictionary sizes: source {}, target {}",
        v.src,
        source_dict.len(),
        target_dict.len()
    );

    fs::create_dir_all(&v.dst)?;
    write_vocab(&source_dict, &v.dst.join("src_vocab.json"))?;
    write_vocab(&target_dict, &v.dst.join("tgt_vocab.json"))?;
    Ok(())
}
