use trie_lexer::lexer::{BufferedFileStream, Lexer};
use trie_lexer::parser::SchemaConfig;

use clap::{Arg, Command};
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use std::time::{Duration, Instant};

fn find_files<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut result = Vec::new();
    let entries = fs::read_dir(&path)?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            result.extend(find_files(&path)?);
        } else {
            result.push(path);
        }
    }

    Ok(result)
}

fn benchmark_lexer(
    schema_config: &SchemaConfig,
    input_paths: Vec<PathBuf>,
) -> trie_lexer::error_handling::Result<()> {
    let trie = schema_config.build_trie()?;
    let mut lexer = Lexer::new(&trie);

    let mut total_duration = Duration::new(0, 0);
    let mut total_size: u64 = 0;
    let mut total_tokens: usize = 0;

    for input_path in input_paths {
        let path_str = input_path.to_string_lossy();
        println!("Lexing file: {}", path_str);
        total_size += input_path.metadata()?.len();
        let buffered_file = Box::new(BufferedFileStream::new(&path_str)?);
        lexer.set_input_stream(buffered_file);
        let mut num_tokens = 0;
        let start = Instant::now();
        while false == lexer.get_next_token()?.is_end() {
            num_tokens += 1;
        }
        total_duration += start.elapsed();
        total_tokens += num_tokens;
        println!("Num tokens: {}", num_tokens);
    }

    let total_secs = total_duration.as_secs_f64();
    println!("\nBenchmark lexer:");
    println!("Total size: {}MB", total_size as f64 / (1024 * 1024) as f64);
    println!("Total number of tokens: {}", total_tokens);
    println!("Total duration: {}s", total_secs);
    if total_secs > 0.0 {
        println!(
            "Token throughput: {} per second",
            total_tokens as f64 / total_secs
        );
        println!(
            "Lexing throughput: {}MB per second",
            total_size as f64 / total_secs / (1024 * 1024) as f64
        );
    }

    Ok(())
}

fn main() -> trie_lexer::error_handling::Result<()> {
    env_logger::init();

    let matches = Command::new("trie-lexer-benchmark")
        .version("1.0")
        .arg(
            Arg::new("schema")
                .help("Path to the schema file")
                .required(true)
                .value_name("SCHEMA_FILE"),
        )
        .arg(
            Arg::new("input")
                .help("Directory to the input files")
                .required(true)
                .value_name("INPUT_DIR"),
        )
        .get_matches();

    let schema_path: &String = matches.get_one("schema").expect("no schema found");
    let input_dir: &String = matches.get_one("input").expect("no input directory found");

    let schema = SchemaConfig::parse_from_file(schema_path)?;
    let input_paths = find_files(Path::new(input_dir.as_str()))?;

    benchmark_lexer(&schema, input_paths)
}
