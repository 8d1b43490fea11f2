//! # Toklex
//!
//! A configurable single-pass tokenizer engine with typed tokens and serde
//! integration.
//!
//! ## Overview
//!
//! This crate is the lexical front end for small languages and
//! configuration formats: you describe the lexical shape of your input (a
//! set of single-byte operators, a list of reserved keywords, comment
//! delimiters, and quoting conventions) and one left-to-right pass turns a
//! raw buffer into an ordered stream of typed tokens plus a table of
//! decoded string contents.
//!
//! ## Key Features
//!
//! - **Caller-defined vocabulary**: operators, keywords, and comment
//!   delimiters are configuration, not grammar baked into the scanner
//! - **Typed tokens**: integers (with radix suffixes), text literals,
//!   packed character constants, identifiers, keywords, and operators, each
//!   with a precisely typed payload
//! - **Escape decoding**: named, hex, and octal escapes expanded into the
//!   decoded string table
//! - **Error recovery**: malformed spans are reported and skipped; the pass
//!   always runs to the end of the buffer
//! - **Injected diagnostics**: one `file:line:col: message` line per error
//!   onto any writer, stderr by default
//! - **Serde integration**: token streams serialize for dumping and
//!   comparing
//!
//! ## Quick Start
//!
//! ```rust
//! use toklex::{Lexer, LexerConfig, Token};
//!
//! let config = LexerConfig {
//!     operators: b"(){}=,;".to_vec(),
//!     keywords: vec!["let".to_string(), "fn".to_string()],
//!     ..LexerConfig::default()
//! };
//!
//! let output = Lexer::new("let answer = 42; // the answer", config)?.run();
//!
//! assert!(output.ok);
//! assert_eq!(output.tokens.len(), 5);
//! assert_eq!(output.tokens[0], Token::Keyword(0));
//! assert_eq!(output.tokens[3], Token::Int(42));
//! # Ok::<(), toklex::ConfigError>(())
//! ```
//!
//! ## Quoted Literals
//!
//! Double quotes delimit text literals, decoded into the string table;
//! single quotes delimit packed literals, up to eight bytes folded into one
//! 64-bit constant, most significant byte first:
//!
//! ```rust
//! use toklex::{tokenize, LexerConfig, Token};
//!
//! let config = LexerConfig {
//!     operators: b"=".to_vec(),
//!     ..LexerConfig::default()
//! };
//!
//! let output = tokenize(r#"name = "cfg\n" 'AB'"#, config)?;
//!
//! assert_eq!(output.tokens[2], Token::Text(0));
//! assert_eq!(output.strings[0], b"cfg\n");
//! assert_eq!(output.tokens[3], Token::Packed(0x4142));
//! # Ok::<(), toklex::ConfigError>(())
//! ```
//!
//! ## Error Handling
//!
//! Lexical errors never abort a pass. Each one is formatted onto the
//! diagnostics sink and retained as a structured value; the surrounding
//! input is still tokenized:
//!
//! ```rust
//! use toklex::{Lexer, LexerConfig, Token};
//! use std::io;
//!
//! let lexer = Lexer::with_sink("@ 5", LexerConfig::default(), Box::new(io::sink()))?;
//! let output = lexer.run();
//!
//! assert!(!output.ok);
//! assert_eq!(output.errors.len(), 1);
//! assert_eq!(output.tokens, vec![Token::Int(5)]);
//! # Ok::<(), toklex::ConfigError>(())
//! ```
//!
//! Configuration problems, such as two keywords colliding on their hash,
//! are caught when the session is built, as a [`ConfigError`].

pub mod error;
pub mod lexer;

// Re-export main types and functions
pub use error::{ConfigError, Diagnostics, LexError, Position};
pub use lexer::{
    Escape, KeywordTable, Lexer, LexerConfig, Mode, OperatorTable, PACKED_MAX_BYTES, ScanOutput,
    Token, decode_escape, fnv1a, tokenize,
};
