use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::{fs, io};

use lazy_static::lazy_static;
use regex::Regex;

use crate::decompress::decompress_files;
use crate::BootstrapArgs;

const SAMPLE_PROJECT_ID: &str = "your-project-id";

fn get_sample_cfg() -> &'static str {
    include_str!("../../../recipe-site.toml")
}

fn write_site_cfg(out_dir: &Path, project_id: Option<&str>) -> io::Result<()> {
    let file = File::create(out_dir.join("recipe-site.toml"))?;
    let mut writer = BufWriter::new(file);

    let sample_cfg = replace_paths(out_dir, get_sample_cfg());
    let sample_cfg = match project_id {
        Some(id) => sample_cfg.replace(SAMPLE_PROJECT_ID, id),
        None => sample_cfg,
    };

    writer.write_all(sample_cfg.as_bytes())?;
    writer.flush()
}

/// Points `res/<dir>` entries at the bootstrapped directory.
fn replace_paths(prefix: &Path, config_data: &str) -> String {
    lazy_static! {
        static ref RES_REGEX: Regex = Regex::new(r#""res/(\w+)""#).unwrap();
    }

    let prefix = prefix.to_string_lossy();
    let prefix = prefix.trim_end_matches('/');

    RES_REGEX
        .replace_all(config_data, |captures: &regex::Captures| {
            format!("\"{}/{}\"", prefix, &captures[1])
        })
        .to_string()
}

pub fn bootstrap_cmd(args: BootstrapArgs) {
    let out_path = match fs::canonicalize(&args.out_dir) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error converting path to absolute: {} - {}", &args.out_dir, e);
            return;
        }
    };

    if !out_path.is_dir() {
        eprintln!("Output path must be a directory: {}", out_path.display());
        return;
    }

    if let Err(e) = decompress_files(&out_path) {
        eprintln!("Error bootstrapping: {}", e);
        return;
    };

    if let Err(e) = write_site_cfg(&out_path, args.project_id.as_deref()) {
        eprintln!("Error writing configuration: {}", e);
        return;
    }

    println!("Site bootstrapped in {}", out_path.display());
}
