use std::{env, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rocks::Rocks;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter("ROCKS_LOG")).init();

    let args: Vec<String> = env::args().collect();
    let mut rocks = Rocks::new();

    match args.len() {
        n if n > 2 => {
            println!("Usage: rocks [script]");
            process::exit(64);
        }
        2 => rocks.run_file(&args[1]),
        _ => run_prompt(&mut rocks),
    }
}

fn run_prompt(rocks: &mut Rocks) {
    let mut editor = DefaultEditor::new()
        .unwrap_or_else(|e| panic!("could not start the line editor: {e}"));

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                rocks.run_line(&line);
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(e) => {
                log::error!("line editor error: {e}");
                break;
            }
        }
    }
}
