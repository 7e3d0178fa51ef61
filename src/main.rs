use std::{
    env,
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use proton::{format_error, run};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [file]", args[0]);
        process::exit(2);
    }

    let (source, file_name) = match args.get(1) {
        Some(file_path) => {
            let file_name = PathBuf::from(file_path)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| file_path.clone());

            match read_to_string(file_path) {
                Ok(source) => (source, Some(file_name)),
                Err(error) => {
                    eprintln!("Failed to read {}: {}", file_path, error);
                    process::exit(1);
                }
            }
        }
        None => {
            let mut source = String::new();
            if let Err(error) = io::stdin().read_to_string(&mut source) {
                eprintln!("Failed to read stdin: {}", error);
                process::exit(1);
            }
            (source, None)
        }
    };

    let start = Instant::now();

    let result = match run(&source, file_name) {
        Ok(result) => result,
        Err(error) => {
            eprint!("{}", format_error(&error, &source));
            process::exit(1);
        }
    };

    log::debug!("Evaluated in {:?}", start.elapsed());

    println!("{}", result.token_dump());
    print!("{}", result.tree_dump());

    for diagnostic in &result.diagnostics {
        println!("{}", diagnostic);
    }

    match result.value {
        Some(value) => println!("{}", value),
        None => println!("None"),
    }
}
