/// One FASTA or FASTQ record, fields kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    /// Full header line without the leading `>`/`@` marker, trailing
    /// whitespace stripped. May carry a description after the identifier.
    pub head: Vec<u8>,
    pub seq: Vec<u8>,
    /// Quality line; `None` for FASTA records.
    pub qual: Option<Vec<u8>>,
}

impl SeqRecord {
    /// The identifier portion of the header: everything before the first
    /// whitespace byte.
    pub fn id(&self) -> &[u8] {
        let end = self
            .head
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(self.head.len());
        &self.head[..end]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}
