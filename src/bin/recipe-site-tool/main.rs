use clap::Parser;

use crate::bootstrap::bootstrap_cmd;

mod bootstrap;
mod decompress;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Bootstrap a new site with templates, assets and a sample configuration
    Bootstrap(BootstrapArgs),
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct BootstrapArgs {
    /// Directory where the new site will be generated
    #[arg(short, long)]
    out_dir: String,

    /// Sanity project id written to the configuration
    #[arg(short, long)]
    project_id: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args {
        Args::Bootstrap(args) => bootstrap_cmd(args),
    };
}
