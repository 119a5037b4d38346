use anyhow::Context;
use oro::{Args, Lexer};
use rustyline::Editor;
use std::{fs, path::PathBuf};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::new();
    if let Some(file_name) = args.file_name {
        run_file(file_name)
    } else {
        run_prompt();
        Ok(())
    }
}

fn run_file(file_name: PathBuf) -> anyhow::Result<()> {
    let source = fs::read_to_string(&file_name)
        .with_context(|| format!("failed to read {}", file_name.display()))?;
    dump(&source);
    Ok(())
}

fn run_prompt() {
    let mut editor = Editor::<()>::new();
    while let Ok(line) = editor.readline("$ ") {
        editor.add_history_entry(line.as_str());
        dump(&line);
    }
}

fn dump(source: &str) {
    for token in Lexer::new(source) {
        println!("{}", token);
    }
}
