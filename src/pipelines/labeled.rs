/*! Corpus preparation pipeline

Chains the three preparation stages over one corpus file, or over every
`.wa` file of a directory: extract sentence records, build per-language
dictionaries, tokenize against them.

Files are fully independent, so they are processed in parallel; a file that
fails to parse is reported and does not abort its siblings.

Per input file `name.wa`, the pipeline writes under `dst`:
- `name_records.jsonl`: one extracted record per line, file order kept;
- `name_src_vocab.json` / `name_tgt_vocab.json`: the two dictionaries;
- `name_tokenized.jsonl`: one [TokenizedEntry] per surviving pair.
!*/
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use rayon::prelude::*;
use serde::Deserialize;
use serde::Serialize;

use crate::corpus::{extract_sentences_with_schema, CorpusRecord, RecordSchema};
use crate::error::Error;
use crate::io::writer::{write_vocab, JsonlWriter, WriterTrait};
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{tokenize_sents_indexed, TokenizedSentencePair};
use crate::vocab::get_token_to_index;

/// One line of the tokenized output file.
///
/// `record_index` is the index the pair had in the extraction-order record
/// sequence, which is what links a surviving pair back to its gold
/// alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedEntry {
    record_index: usize,
    pair: TokenizedSentencePair,
}

impl TokenizedEntry {
    pub fn new(record_index: usize, pair: TokenizedSentencePair) -> Self {
        Self { record_index, pair }
    }

    /// Index of the originating record in extraction order.
    pub fn record_index(&self) -> usize {
        self.record_index
    }

    /// Get a reference to the tokenized pair.
    pub fn pair(&self) -> &TokenizedSentencePair {
        &self.pair
    }
}

/// Preparation pipeline over labeled bitext.
pub struct LabeledBitext {
    src: PathBuf,
    dst: PathBuf,
    freq_cutoff: Option<usize>,
    schema: RecordSchema,
}

impl LabeledBitext {
    pub fn new(src: PathBuf, dst: PathBuf, freq_cutoff: Option<usize>, schema: RecordSchema) -> Self {
        Self {
            src,
            dst,
            freq_cutoff,
            schema,
        }
    }

    /// Corpus files to process: `src` itself, or the `.wa` files under it.
    fn corpus_files(&self) -> Result<Vec<PathBuf>, Error> {
        if !self.src.is_dir() {
            return Ok(vec![self.src.clone()]);
        }

        let pattern = self.src.join("*.wa");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid source path {:?}", self.src)))?;

        let mut files = Vec::new();
        for entry in glob::glob(pattern)? {
            files.push(entry?);
        }
        // glob order is platform-dependent
        files.sort();
        Ok(files)
    }

    fn file_stem(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("corpus"))
    }

    fn process_file(&self, path: &Path) -> Result<(), Error> {
        info!("{:?}: extracting sentence records", path);
        let (pairs, alignments) = extract_sentences_with_schema(path, &self.schema)?;
        info!("{:?}: {} sentence records", path, pairs.len());

        let stem = Self::file_stem(path);

        let records: Vec<CorpusRecord> = pairs
            .iter()
            .cloned()
            .zip(alignments.iter().cloned())
            .map(|(pair, alignment)| CorpusRecord::new(pair, alignment))
            .collect();
        let mut records_writer: JsonlWriter<CorpusRecord> =
            JsonlWriter::new(&self.dst.join(format!("{}_records.jsonl", stem)))?;
        records_writer.write(records)?;

        let (source_dict, target_dict) = get_token_to_index(&pairs, self.freq_cutoff);
        info!(
            "{:?}: dictionary sizes: source {}, target {}",
            path,
            source_dict.len(),
            target_dict.len()
        );
        write_vocab(
            &source_dict,
            &self.dst.join(format!("{}_src_vocab.json", stem)),
        )?;
        write_vocab(
            &target_dict,
            &self.dst.join(format!("{}_tgt_vocab.json", stem)),
        )?;

        let tokenized = tokenize_sents_indexed(&pairs, &source_dict, &target_dict);
        debug!(
            "{:?}: {} pairs dropped as out-of-vocabulary",
            path,
            pairs.len() - tokenized.len()
        );
        info!("{:?}: {} tokenized pairs", path, tokenized.len());

        let entries: Vec<TokenizedEntry> = tokenized
            .into_iter()
            .map(|(idx, pair)| TokenizedEntry::new(idx, pair))
            .collect();
        let mut tokenized_writer: JsonlWriter<TokenizedEntry> =
            JsonlWriter::new(&self.dst.join(format!("{}_tokenized.jsonl", stem)))?;
        tokenized_writer.write(entries)?;

        Ok(())
    }
}

impl Pipeline<()> for LabeledBitext {
    fn run(&self) -> Result<(), Error> {
        let files = self.corpus_files()?;
        if files.is_empty() {
            return Err(Error::Custom(format!(
                "no corpus files found in {:?}",
                self.src
            )));
        }
        info!("processing {} corpus file(s)", files.len());

        fs::create_dir_all(&self.dst)?;

        let failures: Vec<(PathBuf, Error)> = files
            .par_iter()
            .filter_map(|path| match self.process_file(path) {
                Ok(()) => None,
                Err(e) => Some((path.clone(), e)),
            })
            .collect();

        for (path, e) in &failures {
            error!("{:?}: {:?}", path, e);
        }
        if !failures.is_empty() {
            warn!("{} corpus file(s) failed", failures.len());
        }

        info!("done");
        Ok(())
    }
}
