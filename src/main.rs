use std::{env, fs::read_to_string, path::PathBuf, time::Instant};

use tinylang::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let mut path_buf_string = env::current_dir().unwrap().into_os_string();
    path_buf_string.push("/");
    path_buf_string.push(file_path);
    let file_contents = read_to_string(path_buf_string.clone()).expect("Failed to read file!");

    let start = Instant::now();

    let tokens = match tokenize(file_contents, Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(path_buf_string));
            std::process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let nodes = match parse(&tokens) {
        Ok(nodes) => nodes,
        Err(error) => {
            display_error(error, PathBuf::from(path_buf_string));
            std::process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!();

    for node in &nodes {
        println!("{:#?}", node);
    }

    println!();
    println!("Source form:");
    for node in &nodes {
        println!("{}", node);
    }
}
