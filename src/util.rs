use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

const BUF_CAPACITY: usize = 256 * 1024;

pub(crate) fn looks_like_gzip(head: &[u8]) -> bool {
    head.len() >= 2 && head[..2] == [0x1F, 0x8B]
}

/// Open a path (`-` for stdin) as buffered text, transparently decompressing
/// gzip detected by magic bytes.
pub(crate) fn open_source(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let raw: Box<dyn BufRead> = if path.as_os_str() == "-" {
        Box::new(BufReader::with_capacity(BUF_CAPACITY, io::stdin()))
    } else {
        Box::new(BufReader::with_capacity(BUF_CAPACITY, File::open(path)?))
    };
    wrap_gzip(raw)
}

pub(crate) fn wrap_gzip(mut raw: Box<dyn BufRead>) -> io::Result<Box<dyn BufRead>> {
    if looks_like_gzip(raw.fill_buf()?) {
        Ok(Box::new(BufReader::with_capacity(
            BUF_CAPACITY,
            MultiGzDecoder::new(raw),
        )))
    } else {
        Ok(raw)
    }
}
