use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use seqgrep::filter::single_end_pass;
use seqgrep::{Format, SeqReader, TargetSet};
use tempfile::tempdir;

fn write_gz(dir: &Path, name: &str, data: &str) -> PathBuf {
    let path = dir.join(name);
    let f = File::create(&path).unwrap();
    let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::fast());
    enc.write_all(data.as_bytes()).unwrap();
    enc.finish().unwrap();
    path
}

#[test]
fn gzip_fastq_input_is_detected_and_filtered() {
    let dir = tempdir().unwrap();
    let input = write_gz(
        dir.path(),
        "in.fq.gz",
        "@x\nACGT\n+\n####\n@y\nGGGG\n+\n####\n",
    );
    let mut src: &[u8] = b"x\n";
    let set = TargetSet::from_reader(&mut src, 0).unwrap();

    let base = dir.path().join("out");
    single_end_pass(&set, false, &[input], &base).unwrap();

    let got = fs::read_to_string(dir.path().join("out.fq")).unwrap();
    assert_eq!(got, "@x\nACGT\n+\n####\n");
}

#[test]
fn gzip_is_detected_by_magic_without_an_extension() {
    let dir = tempdir().unwrap();
    let input = write_gz(dir.path(), "plainname", ">c\nAC\n");
    let mut rdr = SeqReader::from_path(&input).unwrap();
    assert_eq!(rdr.format(), Format::Fasta);
    let rec = rdr.next_record().unwrap().unwrap();
    assert_eq!(rec.head, b"c");
    assert_eq!(rec.seq, b"AC");
}

#[test]
fn gzip_target_file_is_accepted() {
    let dir = tempdir().unwrap();
    let target_file = write_gz(dir.path(), "targets.txt.gz", "B\nA\nA\nC\n");
    let set = TargetSet::from_path(&target_file, 0).unwrap();
    assert_eq!(set.len(), 3);
    assert!(set.contains(b"B"));
}
