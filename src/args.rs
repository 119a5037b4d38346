use std::path::PathBuf;
use structopt::StructOpt;

/// Dump the token stream of an Oro source file, or of each line typed at
/// the prompt when no file is given.
#[derive(StructOpt)]
#[structopt(name = "oro")]
pub struct Args {
    #[structopt(name = "FILE_NAME", parse(from_os_str))]
    pub file_name: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self::new()
    }
}

impl Args {
    pub fn new() -> Self {
        Self::from_args()
    }
}
