use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::FilterError;
use crate::line::read_field;
use crate::record::SeqRecord;
use crate::util::{open_source, wrap_gzip};

/// Record layout of an input stream, detected from its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Fasta,
    Fastq,
}

/// Streaming FASTA/FASTQ reader (plain or gzip).
///
/// FASTQ records are header, one sequence line, a `+` separator and one
/// quality line. FASTA sequence data may span multiple lines and is
/// accumulated up to the next `>` header. A truncated FASTQ record ends the
/// stream with a warning instead of emitting a partial record.
pub struct SeqReader {
    path: PathBuf,
    rdr: Box<dyn BufRead>,
    format: Format,
    // FASTA lookahead: the next record's header, already read past.
    pending_head: Option<Vec<u8>>,
}

impl std::fmt::Debug for SeqReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeqReader")
            .field("path", &self.path)
            .field("format", &self.format)
            .field("pending_head", &self.pending_head)
            .finish_non_exhaustive()
    }
}

impl SeqReader {
    /// Open a file path (`-` for stdin). Gzip is detected by magic bytes,
    /// the record format by the first byte of the decompressed stream. An
    /// empty stream is treated as FASTA and yields no records.
    pub fn from_path(path: &Path) -> Result<Self, FilterError> {
        let raw = open_source(path).map_err(|e| FilterError::io(path, e))?;
        Self::new(raw, path)
    }

    /// Wrap an arbitrary `BufRead`; `name` is used in diagnostics.
    pub fn from_bufread<R: BufRead + 'static>(reader: R, name: &str) -> Result<Self, FilterError> {
        let path = Path::new(name);
        let raw = wrap_gzip(Box::new(reader)).map_err(|e| FilterError::io(path, e))?;
        Self::new(raw, path)
    }

    fn new(mut rdr: Box<dyn BufRead>, path: &Path) -> Result<Self, FilterError> {
        let format = match rdr.fill_buf().map_err(|e| FilterError::io(path, e))?.first() {
            Some(b'@') => Format::Fastq,
            Some(b'>') | None => Format::Fasta,
            Some(&first) => {
                return Err(FilterError::UnrecognizedFormat {
                    path: path.to_path_buf(),
                    first,
                });
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            rdr,
            format,
            pending_head: None,
        })
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next record, or `None` at end of stream. A malformed FASTQ record
    /// (missing separator or quality line) also ends the stream, after a
    /// warning; nothing partial is emitted.
    pub fn next_record(&mut self) -> Result<Option<SeqRecord>, FilterError> {
        match self.format {
            Format::Fastq => self.next_fastq(),
            Format::Fasta => self.next_fasta(),
        }
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<bool, FilterError> {
        read_field(&mut self.rdr, buf).map_err(|e| FilterError::io(&self.path, e))
    }

    fn next_fastq(&mut self) -> Result<Option<SeqRecord>, FilterError> {
        // header, skipping blank lines between records
        let mut head = Vec::with_capacity(128);
        loop {
            if !self.read_line(&mut head)? {
                return Ok(None);
            }
            if !head.is_empty() {
                break;
            }
        }
        if head.first() != Some(&b'@') {
            log::warn!(
                "{}: expected '@' header, stopping at malformed record",
                self.path.display()
            );
            return Ok(None);
        }
        head.remove(0);

        let mut seq = Vec::with_capacity(256);
        if !self.read_line(&mut seq)? {
            return self.truncated();
        }
        let mut sep = Vec::with_capacity(8);
        if !self.read_line(&mut sep)? || sep.first() != Some(&b'+') {
            return self.truncated();
        }
        let mut qual = Vec::with_capacity(256);
        if !self.read_line(&mut qual)? {
            return self.truncated();
        }

        Ok(Some(SeqRecord {
            head,
            seq,
            qual: Some(qual),
        }))
    }

    fn next_fasta(&mut self) -> Result<Option<SeqRecord>, FilterError> {
        let head = match self.pending_head.take() {
            Some(h) => h,
            None => {
                let mut head = Vec::with_capacity(128);
                loop {
                    if !self.read_line(&mut head)? {
                        return Ok(None);
                    }
                    if !head.is_empty() {
                        break;
                    }
                }
                if head.first() != Some(&b'>') {
                    log::warn!(
                        "{}: expected '>' header, stopping at malformed record",
                        self.path.display()
                    );
                    return Ok(None);
                }
                head.remove(0);
                head
            }
        };

        let mut seq = Vec::with_capacity(256);
        let mut line = Vec::with_capacity(256);
        while self.read_line(&mut line)? {
            if line.first() == Some(&b'>') {
                line.remove(0);
                self.pending_head = Some(std::mem::take(&mut line));
                break;
            }
            seq.extend_from_slice(&line);
        }

        Ok(Some(SeqRecord {
            head,
            seq,
            qual: None,
        }))
    }

    fn truncated(&self) -> Result<Option<SeqRecord>, FilterError> {
        log::warn!(
            "{}: truncated record at end of stream, dropped",
            self.path.display()
        );
        Ok(None)
    }
}

impl Iterator for SeqReader {
    type Item = Result<SeqRecord, FilterError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
