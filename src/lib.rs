#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A byte offset into a named source file. Token spans and errors carry
/// these so diagnostics can point back into the original text.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the 1-based line number, line text and in-line offset for a byte
/// position. Positions at or past the end of the file are clamped onto the
/// last line, so errors about unterminated constructs still render.
pub fn get_line_at_position(file: PathBuf, position: u32) -> Option<(usize, String, usize)> {
    let content = fs::read_to_string(&file).ok()?;
    if content.is_empty() {
        return None;
    }

    let pos = (position as usize).min(content.len() - 1);

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    None
}


pub fn display_error(error: Error, file: PathBuf) {
    /*
        Error: IfMissingRightBrace (tip)
        -> broken.lang
           |
        20 | if flag {
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());

    let position = error.get_position();
    let Some((line, line_text, line_pos)) = get_line_at_position(file, position.0) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let trimmed = line_text.trim_start();
    let leading = line_text.len() - trimmed.len();
    let arrows = line_pos.saturating_sub(leading) + 1;

    println!("{:>padding$}", "|");
    println!("{} | {}", line_string, trimmed.trim_end());
    println!("{:>padding$} {:->arrows$}", "|", "^");
}
