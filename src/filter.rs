//! Record filtering passes: single end, interleaved and paired end.
//!
//! Each pass is an independent sequential consumer of the target set: one
//! lookup per record (per mate for paired layouts, where a pair is kept when
//! either mate matches), XORed with the invert flag to decide emission.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::FilterError;
use crate::reader::{Format, SeqReader};
use crate::record::SeqRecord;
use crate::targets::TargetSet;

/// One run of the tool: a target file, the inputs for each mode and the
/// shared output base. Modes with no inputs are skipped.
pub struct RunConfig {
    pub target_file: PathBuf,
    pub single: Vec<PathBuf>,
    pub interleaved: Vec<PathBuf>,
    pub paired: Vec<PathBuf>,
    /// Output base path; `-` writes stdout. Per-mode suffixes and a format
    /// extension (`.fq`/`.fsa`) are appended for file outputs.
    pub output: PathBuf,
    pub invert: bool,
}

/// Build the target set at tolerance 0 (exact matching) and run every
/// requested pass in order: single end, interleaved, paired end.
pub fn run(cfg: &RunConfig) -> Result<(), FilterError> {
    let targets = TargetSet::from_path(&cfg.target_file, 0)?;
    log::info!(
        "loaded {} target identifiers from {}",
        targets.len(),
        cfg.target_file.display()
    );

    single_end_pass(&targets, cfg.invert, &cfg.single, &cfg.output)?;
    interleaved_pass(&targets, cfg.invert, &cfg.interleaved, &cfg.output)?;
    paired_end_pass(&targets, cfg.invert, &cfg.paired, &cfg.output)?;
    Ok(())
}

/// Filter single end inputs into one output stream.
pub fn single_end_pass(
    targets: &TargetSet,
    invert: bool,
    inputs: &[PathBuf],
    base: &Path,
) -> Result<(), FilterError> {
    if inputs.is_empty() {
        return Ok(());
    }

    let mut sink: Option<Sink> = None;
    for path in inputs {
        let mut reader = SeqReader::from_path(path)?;
        log::info!("reading input file: {}", path.display());
        let mut out = match sink.take() {
            Some(out) => out,
            None => Sink::open(base, "", reader.format())?,
        };
        while let Some(rec) = reader.next_record()? {
            if targets.contains(&rec.head) != invert {
                out.write_record(&rec)?;
            }
        }
        sink = Some(out);
    }

    finish(sink)
}

/// Filter interleaved inputs (mates alternate within one file) into one
/// output stream, preserving the interleaving.
pub fn interleaved_pass(
    targets: &TargetSet,
    invert: bool,
    inputs: &[PathBuf],
    base: &Path,
) -> Result<(), FilterError> {
    if inputs.is_empty() {
        return Ok(());
    }

    let mut sink: Option<Sink> = None;
    for path in inputs {
        let mut reader = SeqReader::from_path(path)?;
        log::info!("reading input file: {}", path.display());
        let mut out = match sink.take() {
            Some(out) => out,
            None => Sink::open(base, "_int", reader.format())?,
        };
        while let Some(r1) = reader.next_record()? {
            let Some(r2) = reader.next_record()? else {
                break;
            };
            let hit = targets.contains(&r1.head) || targets.contains(&r2.head);
            if hit != invert {
                out.write_record(&r1)?;
                out.write_record(&r2)?;
            }
        }
        sink = Some(out);
    }

    finish(sink)
}

/// Filter paired end inputs (adjacent files form a pair) into two output
/// streams, `_1` and `_2`. Both files of a pair must share a format.
pub fn paired_end_pass(
    targets: &TargetSet,
    invert: bool,
    inputs: &[PathBuf],
    base: &Path,
) -> Result<(), FilterError> {
    if inputs.is_empty() {
        return Ok(());
    }
    if inputs.len() % 2 != 0 {
        return Err(FilterError::UnevenPairs(inputs.len()));
    }

    let mut sink1: Option<Sink> = None;
    let mut sink2: Option<Sink> = None;
    for pair in inputs.chunks(2) {
        let mut rd1 = SeqReader::from_path(&pair[0])?;
        let mut rd2 = SeqReader::from_path(&pair[1])?;
        if rd1.format() != rd2.format() {
            return Err(FilterError::PairFormatMismatch {
                first: pair[0].clone(),
                second: pair[1].clone(),
            });
        }
        log::info!(
            "reading input files: {} {}",
            pair[0].display(),
            pair[1].display()
        );
        let mut out1 = match sink1.take() {
            Some(out) => out,
            None => Sink::open(base, "_1", rd1.format())?,
        };
        let mut out2 = match sink2.take() {
            Some(out) => out,
            None => Sink::open(base, "_2", rd2.format())?,
        };
        while let Some(r1) = rd1.next_record()? {
            let Some(r2) = rd2.next_record()? else {
                break;
            };
            let hit = targets.contains(&r1.head) || targets.contains(&r2.head);
            if hit != invert {
                out1.write_record(&r1)?;
                out2.write_record(&r2)?;
            }
        }
        sink1 = Some(out1);
        sink2 = Some(out2);
    }

    finish(sink1)?;
    finish(sink2)
}

/// Derive the output path for a file sink: `<base><suffix>.fq` for FASTQ,
/// `<base><suffix>.fsa` for FASTA.
fn output_path(base: &Path, suffix: &str, format: Format) -> PathBuf {
    let ext = match format {
        Format::Fastq => "fq",
        Format::Fasta => "fsa",
    };
    let mut name = base.as_os_str().to_os_string();
    name.push(suffix);
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

struct Sink {
    path: PathBuf,
    out: Box<dyn Write>,
}

impl Sink {
    fn open(base: &Path, suffix: &str, format: Format) -> Result<Self, FilterError> {
        if base.as_os_str() == "-" {
            return Ok(Self {
                path: PathBuf::from("-"),
                out: Box::new(BufWriter::new(io::stdout().lock())),
            });
        }
        let path = output_path(base, suffix, format);
        let file = File::create(&path).map_err(|e| FilterError::io(&path, e))?;
        Ok(Self {
            path,
            out: Box::new(BufWriter::new(file)),
        })
    }

    fn write_record(&mut self, rec: &SeqRecord) -> Result<(), FilterError> {
        self.emit(rec).map_err(|e| FilterError::io(&self.path, e))
    }

    fn emit(&mut self, rec: &SeqRecord) -> io::Result<()> {
        match &rec.qual {
            Some(qual) => {
                self.out.write_all(b"@")?;
                self.out.write_all(&rec.head)?;
                self.out.write_all(b"\n")?;
                self.out.write_all(&rec.seq)?;
                self.out.write_all(b"\n+\n")?;
                self.out.write_all(qual)?;
                self.out.write_all(b"\n")
            }
            None => {
                self.out.write_all(b">")?;
                self.out.write_all(&rec.head)?;
                self.out.write_all(b"\n")?;
                self.out.write_all(&rec.seq)?;
                self.out.write_all(b"\n")
            }
        }
    }

    fn finish(mut self) -> Result<(), FilterError> {
        self.out.flush().map_err(|e| FilterError::io(&self.path, e))
    }
}

fn finish(sink: Option<Sink>) -> Result<(), FilterError> {
    match sink {
        Some(out) => out.finish(),
        None => Ok(()),
    }
}
