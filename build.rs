use std::fs::File;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use flate2::write::GzEncoder;
use flate2::Compression;

const RES_DIR: &str = "res";

fn archive_path(out_dir: &Path) -> PathBuf {
    out_dir.join(format!("{}.tar.gz", RES_DIR))
}

/// Packs `res/` so the bootstrap tool can unpack templates and assets anywhere.
fn compress_dir(res_dir: &Path, archive: &Path) -> io::Result<()> {
    let _ = fs::remove_file(archive);

    let tar_gz = File::create(archive)?;
    let enc = GzEncoder::new(tar_gz, Compression::default());
    let mut tar = tar::Builder::new(enc);
    tar.append_dir_all(".", res_dir)?;
    tar.into_inner()?.finish()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let out_dir = env::var("OUT_DIR")
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;

    let res_dir = PathBuf::from(manifest_dir).join(RES_DIR);
    println!("cargo:rerun-if-changed={}", RES_DIR);

    compress_dir(&res_dir, &archive_path(Path::new(&out_dir)))
}
