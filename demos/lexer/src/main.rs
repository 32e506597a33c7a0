use trie_lexer::error_handling::Result;
use trie_lexer::lexer::BufferedFileStream;
use trie_lexer::lexer::Lexer;
use trie_lexer::parser::SchemaConfig;

use clap::{Arg, Command};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("trie-lexer-example")
        .version("1.0")
        .arg(
            Arg::new("schema")
                .help("Path to the schema file")
                .required(true)
                .value_name("SCHEMA_FILE"),
        )
        .arg(
            Arg::new("input")
                .help("Path to the input file")
                .required(true)
                .value_name("INPUT_FILE"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print the category of each token")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let schema_path: &String = matches.get_one("schema").expect("no schema found");
    let input_file: &String = matches.get_one("input").expect("no input file found");

    let schema = SchemaConfig::parse_from_file(schema_path)?;
    let trie = schema.build_trie()?;
    let mut lexer = Lexer::new(&trie);
    lexer.set_input_stream(Box::new(BufferedFileStream::new(input_file)?));

    loop {
        let token = lexer.get_next_token()?;
        if token.is_end() {
            break;
        }
        if matches.get_flag("verbose") {
            println!("{:?}: {}", token.get_token_type(), token.get_val_as_string());
        } else {
            println!("{}", token.get_val_as_string());
        }
    }

    Ok(())
}
