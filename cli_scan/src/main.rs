// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#[macro_use]
extern crate clap;

use clap::{App, Arg};
use macro_scanner::registry::MacroSet;
use macro_scanner::scanner::{Scan, Scanner, SliceCursor, TokenKind, ValidSymbols};
use std::fs::File;
use std::io::Read;
use std::process;

fn is_ident_start(c: u8) -> bool {
    (b'a' <= c && c <= b'z') || (b'A' <= c && c <= b'Z') || c == b'_'
}

fn is_ident_part(c: u8) -> bool {
    is_ident_start(c) || (b'0' <= c && c <= b'9')
}

fn kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Annotation => "annotation",
        TokenKind::Call => "call",
    }
}

fn main() {
    let matches = App::new("scan")
        .version(crate_version!())
        .about("Report macro annotations and calls found in a source file")
        .arg(
            Arg::with_name("macro")
                .help("Register a macro name (repeatable)")
                .short("m")
                .long("macro")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("macro-file")
                .help("JSON file with a top-level \"macros\" array of names")
                .long("macro-file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("source")
                .help("Source file to scan")
                .required(true),
        )
        .get_matches();

    let mut macros = match matches.value_of("macro-file") {
        Some(path) => match MacroSet::from_json_file(path) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => MacroSet::new(),
    };
    if let Some(names) = matches.values_of("macro") {
        macros.extend(names);
    }

    let path = matches.value_of("source").unwrap();
    let mut data = Vec::new();
    if let Err(e) = File::open(path).and_then(|mut f| f.read_to_end(&mut data)) {
        eprintln!("can't read {}: {}", path, e);
        process::exit(1);
    }

    let scanner = Scanner::new(macros);
    let valid = ValidSymbols::ANNOTATION | ValidSymbols::CALL;

    let mut pos = 0;
    while pos < data.len() {
        if !is_ident_start(data[pos]) {
            pos += 1;
            continue;
        }

        let mut cursor = SliceCursor::with_pos(&data, pos);
        match scanner.scan(&mut cursor, valid) {
            Scan::Accept { kind, end } => {
                let name = String::from_utf8_lossy(cursor.token().unwrap()).into_owned();
                println!("{}..{}: {} {}", cursor.token_start(), end, kind_name(kind), name);
                pos = end;
            }
            Scan::Decline => {
                // skip the whole identifier, a suffix of it is not a token
                while pos < data.len() && is_ident_part(data[pos]) {
                    pos += 1;
                }
            }
        }
    }
}
