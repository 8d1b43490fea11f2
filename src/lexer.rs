//! Configurable lexical analyzer
//!
//! This module provides the core scanning functionality: a single
//! left-to-right pass over a byte buffer that produces a stream of typed
//! tokens plus a table of decoded string contents, driven entirely by a
//! caller-supplied configuration of operators, keywords, comment delimiters,
//! and quoting conventions.

use crate::error::{ConfigError, Diagnostics, LexError, Position};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::io::Write;

/// FNV-1a 64-bit offset basis
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a 64-bit prime
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes a byte string with 64-bit FNV-1a
///
/// The same hash is used for keyword table keys and identifier token
/// payloads, so an identifier can be compared against a keyword without
/// rescanning its spelling.
#[inline]
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Immutable set of single-byte operators with O(1) membership
///
/// Built once per session from the configured byte sequence. An operator's
/// token index is its position in that sequence; when a byte appears more
/// than once the first occurrence wins.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    sequence: SmallVec<[u8; 16]>,
    present: [bool; 256],
}

impl OperatorTable {
    /// Builds the presence table from the configured byte sequence
    pub fn new(operators: &[u8]) -> Self {
        let mut present = [false; 256];
        for &b in operators {
            present[b as usize] = true;
        }
        Self {
            sequence: SmallVec::from_slice(operators),
            present,
        }
    }

    /// Tests membership in O(1)
    #[inline(always)]
    pub fn contains(&self, byte: u8) -> bool {
        self.present[byte as usize]
    }

    /// Returns the token index of a member byte
    ///
    /// # Panics
    ///
    /// Panics if the byte is not a configured operator. Callers must gate
    /// with [`contains`](Self::contains) first.
    pub fn index_of(&self, byte: u8) -> u32 {
        match self.sequence.iter().position(|&b| b == byte) {
            Some(index) => index as u32,
            None => panic!("byte {byte:#04x} is not a configured operator"),
        }
    }

    /// Returns the operator byte at the given token index
    pub fn get(&self, index: u32) -> Option<u8> {
        self.sequence.get(index as usize).copied()
    }

    /// Returns the number of configured operators
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if no operators are configured
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Immutable set of reserved keywords keyed by FNV-1a hash
///
/// Each spelling is hashed once at configuration time; membership and index
/// lookup scan the hash list. Construction fails if two configured keywords
/// collide on their hash, since lookup could then not tell them apart.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    spellings: Vec<String>,
    hashes: Vec<u64>,
}

impl KeywordTable {
    /// Hashes the configured spellings and verifies hash uniqueness
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, ConfigError> {
        let mut spellings: Vec<String> = Vec::with_capacity(keywords.len());
        let mut hashes: Vec<u64> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let keyword = keyword.as_ref();
            let hash = fnv1a(keyword.as_bytes());
            if let Some(index) = hashes.iter().position(|&h| h == hash) {
                return Err(ConfigError::KeywordHashCollision {
                    first: spellings[index].clone(),
                    second: keyword.to_string(),
                });
            }
            hashes.push(hash);
            spellings.push(keyword.to_string());
        }
        Ok(Self { spellings, hashes })
    }

    /// Tests whether a spelling is a configured keyword
    #[inline]
    pub fn contains(&self, spelling: &[u8]) -> bool {
        self.lookup_hash(fnv1a(spelling)).is_some()
    }

    /// Returns the token index of a member spelling
    ///
    /// # Panics
    ///
    /// Panics if the spelling is not a configured keyword. Callers must gate
    /// with [`contains`](Self::contains) first.
    pub fn index_of(&self, spelling: &[u8]) -> u32 {
        match self.lookup_hash(fnv1a(spelling)) {
            Some(index) => index,
            None => panic!(
                "\"{}\" is not a configured keyword",
                String::from_utf8_lossy(spelling)
            ),
        }
    }

    /// Returns the token index for a precomputed hash, if any keyword matches
    #[inline]
    pub fn lookup_hash(&self, hash: u64) -> Option<u32> {
        self.hashes.iter().position(|&h| h == hash).map(|i| i as u32)
    }

    /// Returns the spelling at the given token index
    pub fn get(&self, index: u32) -> Option<&str> {
        self.spellings.get(index as usize).map(String::as_str)
    }

    /// Returns the number of configured keywords
    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    /// Returns true if no keywords are configured
    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}

/// The scanner's current exclusive sub-state
///
/// Line comments are not a mode: they are skipped inline the moment their
/// delimiter is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Default state, assembling ordinary lexemes
    Normal,
    /// Inside a double-quoted text literal
    InText,
    /// Inside a single-quoted packed literal
    InPacked,
    /// Inside a block comment
    InBlockComment,
}

/// Storage width of a packed literal, in raw source bytes
pub const PACKED_MAX_BYTES: usize = 8;

/// A decoded escape sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape {
    /// The decoded value
    pub value: u64,
    /// Number of source bytes consumed, including the backslash
    pub consumed: usize,
}

/// Decodes a backslash-introduced escape sequence at `at`
///
/// Returns `None` when `at` does not hold a backslash or the byte after it
/// is not a recognized escape; callers emit the raw bytes unchanged in that
/// case. Recognized forms:
///
/// - named escapes `\a \b \f \n \r \t \v \\ \' \" \?`
/// - `\x` followed by any number of hex digits (a bare `\x` with no digit
///   decodes to the literal byte `x`, dropping the backslash)
/// - `\0`..`\7` followed by up to two further octal digits
pub fn decode_escape(input: &[u8], at: usize) -> Option<Escape> {
    if input.get(at).copied() != Some(b'\\') {
        return None;
    }
    let escaped = input.get(at + 1).copied()?;

    let named = match escaped {
        b'a' => Some(0x07u64),
        b'b' => Some(0x08),
        b'f' => Some(0x0c),
        b'n' => Some(0x0a),
        b'r' => Some(0x0d),
        b't' => Some(0x09),
        b'v' => Some(0x0b),
        b'\\' => Some(0x5c),
        b'\'' => Some(0x27),
        b'"' => Some(0x22),
        b'?' => Some(0x3f),
        _ => None,
    };
    if let Some(value) = named {
        return Some(Escape { value, consumed: 2 });
    }

    if escaped == b'x' {
        let mut i = at + 2;
        let mut value = 0u64;
        let mut found = false;
        while let Some(digit) = input.get(i).and_then(|&b| (b as char).to_digit(16)) {
            found = true;
            value = (value << 4) | u64::from(digit);
            i += 1;
        }
        return Some(if found {
            Escape {
                value,
                consumed: i - at,
            }
        } else {
            // A bare \x decodes to 'x' with the backslash dropped
            Escape {
                value: u64::from(b'x'),
                consumed: 2,
            }
        });
    }

    if (b'0'..=b'7').contains(&escaped) {
        let mut value = u64::from(escaped - b'0');
        let mut i = at + 2;
        while i < at + 4 {
            match input.get(i) {
                Some(&b @ b'0'..=b'7') => {
                    value = value * 8 + u64::from(b - b'0');
                    i += 1;
                }
                _ => break,
            }
        }
        return Some(Escape {
            value,
            consumed: i - at,
        });
    }

    None
}

/// A typed token produced by one pass
///
/// Payloads are indices into the session's tables where the spelling lives
/// elsewhere (`Text`, `Keyword`, `Operator`), or the value itself
/// (`Int`, `Packed`, `Ident`). Token identity is purely positional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Produced by no current classification rule; reserved
    Unknown,
    /// Index of a decoded text literal in the string table
    Text(u32),
    /// A packed character literal, most significant byte first
    Packed(u64),
    /// An integer literal
    Int(i64),
    /// Reserved variant, not populated by any current path
    Float(f64),
    /// FNV-1a hash of an identifier's spelling
    Ident(u64),
    /// Index into the keyword table
    Keyword(u32),
    /// Index into the operator table
    Operator(u32),
}

impl Token {
    /// Returns a string representation of the token type for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::Unknown => "unknown",
            Token::Text(_) => "text",
            Token::Packed(_) => "packed",
            Token::Int(_) => "integer",
            Token::Float(_) => "float",
            Token::Ident(_) => "identifier",
            Token::Keyword(_) => "keyword",
            Token::Operator(_) => "operator",
        }
    }
}

/// Configuration options for one scanning session
///
/// An empty `line_comment` disables line comments; empty block delimiters
/// disable block comments (both must be empty together).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Single-byte operators; a byte's position is its token index
    pub operators: Vec<u8>,
    /// Reserved keywords; a spelling's position is its token index
    pub keywords: Vec<String>,
    /// Single-line comment delimiter
    pub line_comment: String,
    /// Block comment start delimiter
    pub block_comment_start: String,
    /// Block comment end delimiter
    pub block_comment_end: String,
    /// Display file name used in diagnostics
    pub file_name: String,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            operators: Vec::new(),
            keywords: Vec::new(),
            line_comment: "//".to_string(),
            block_comment_start: "/*".to_string(),
            block_comment_end: "*/".to_string(),
            file_name: "<input>".to_string(),
        }
    }
}

/// Everything one pass produced
///
/// Tokens recorded before and after an error point are still present; `ok`
/// is an aggregate signal, not a gate on the containers. The tables ride
/// along so token payloads can be resolved back to spellings.
#[derive(Debug, Serialize)]
pub struct ScanOutput {
    /// Tokens in source order
    pub tokens: Vec<Token>,
    /// Decoded text literal contents, indexed by [`Token::Text`]
    pub strings: Vec<Vec<u8>>,
    /// Structured errors, one per diagnostics line
    #[serde(skip)]
    pub errors: Vec<LexError>,
    /// True iff no error was recorded during the pass
    pub ok: bool,
    /// The session's operator table
    #[serde(skip)]
    pub operators: OperatorTable,
    /// The session's keyword table
    #[serde(skip)]
    pub keywords: KeywordTable,
}

impl ScanOutput {
    /// Renders the token at `index` with its payload resolved against the
    /// session tables, for display and debugging
    pub fn render_token(&self, index: usize) -> Option<String> {
        let token = *self.tokens.get(index)?;
        let rendered = match token {
            Token::Unknown => "unknown".to_string(),
            Token::Text(i) => {
                let contents = self.strings.get(i as usize)?;
                format!("text \"{}\"", String::from_utf8_lossy(contents))
            }
            Token::Packed(value) => format!("packed {value:#x}"),
            Token::Int(value) => format!("integer {value}"),
            Token::Float(value) => format!("float {value}"),
            Token::Ident(hash) => format!("identifier {hash:016x}"),
            Token::Keyword(i) => format!("keyword {}", self.keywords.get(i)?),
            Token::Operator(i) => format!("operator '{}'", self.operators.get(i)? as char),
        };
        Some(rendered)
    }
}

/// One scanning session over a fully materialized buffer
///
/// A session is built from a [`LexerConfig`] plus the input, runs to
/// completion in a single [`run`](Self::run) call, and is consumed by it; a
/// second pass requires a fresh session. Distinct sessions are independent
/// and may run concurrently on separate threads.
pub struct Lexer<'a> {
    input: &'a [u8],
    cursor: usize,
    lexeme_start: usize,
    line: u32,
    mode: Mode,
    operators: OperatorTable,
    keywords: KeywordTable,
    line_comment: Vec<u8>,
    block_start: Vec<u8>,
    block_end: Vec<u8>,
    tokens: Vec<Token>,
    strings: Vec<Vec<u8>>,
    errors: Vec<LexError>,
    diagnostics: Diagnostics,
    ok: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a session over a string slice, reporting to standard error
    pub fn new(input: &'a str, config: LexerConfig) -> Result<Self, ConfigError> {
        Self::from_bytes(input.as_bytes(), config)
    }

    /// Creates a session over a raw byte buffer, reporting to standard error
    pub fn from_bytes(input: &'a [u8], config: LexerConfig) -> Result<Self, ConfigError> {
        let diagnostics = Diagnostics::new(config.file_name.clone());
        Self::build(input, config, diagnostics)
    }

    /// Creates a session that reports diagnostics to the given writer
    pub fn with_sink(
        input: &'a str,
        config: LexerConfig,
        sink: Box<dyn Write>,
    ) -> Result<Self, ConfigError> {
        let diagnostics = Diagnostics::with_sink(config.file_name.clone(), sink);
        Self::build(input.as_bytes(), config, diagnostics)
    }

    fn build(
        input: &'a [u8],
        config: LexerConfig,
        diagnostics: Diagnostics,
    ) -> Result<Self, ConfigError> {
        if config.block_comment_start.is_empty() != config.block_comment_end.is_empty() {
            return Err(ConfigError::UnbalancedBlockComment);
        }
        let keywords = KeywordTable::new(&config.keywords)?;
        Ok(Self {
            input,
            cursor: 0,
            lexeme_start: 0,
            line: 1,
            mode: Mode::Normal,
            operators: OperatorTable::new(&config.operators),
            keywords,
            line_comment: config.line_comment.into_bytes(),
            block_start: config.block_comment_start.into_bytes(),
            block_end: config.block_comment_end.into_bytes(),
            tokens: Vec::new(),
            strings: Vec::new(),
            errors: Vec::new(),
            diagnostics,
            ok: true,
        })
    }

    /// Runs the pass to the end of the buffer and returns everything produced
    pub fn run(mut self) -> ScanOutput {
        while self.cursor < self.input.len() {
            match self.mode {
                Mode::Normal => self.scan_normal_byte(),
                Mode::InText => self.scan_text_byte(),
                Mode::InPacked => self.scan_packed_byte(),
                Mode::InBlockComment => self.scan_block_comment_byte(),
            }
        }
        // A literal or block comment left open at end of buffer produces
        // nothing; only an ordinary pending lexeme is finalized.
        if self.mode == Mode::Normal {
            self.finalize_pending();
        }
        ScanOutput {
            tokens: self.tokens,
            strings: self.strings,
            errors: self.errors,
            ok: self.ok,
            operators: self.operators,
            keywords: self.keywords,
        }
    }

    /// Current byte under the cursor; callers guarantee cursor < len
    #[inline(always)]
    fn byte(&self) -> u8 {
        self.input[self.cursor]
    }

    /// Advances the cursor one byte, counting newlines
    #[inline(always)]
    fn advance(&mut self) {
        if self.input[self.cursor] == b'\n' {
            self.line += 1;
        }
        self.cursor += 1;
    }

    /// Advances the cursor over a multi-byte delimiter
    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Tests a literal prefix match at the cursor
    #[inline]
    fn matches_at(&self, delimiter: &[u8]) -> bool {
        !delimiter.is_empty() && self.input[self.cursor..].starts_with(delimiter)
    }

    /// Backslash-parity check: counts consecutive backslashes immediately
    /// before `at`; an even count means the byte at `at` is unescaped.
    /// Stops at the start of the buffer.
    fn unescaped(&self, at: usize) -> bool {
        let mut backslashes = 0usize;
        let mut i = at;
        while i > 0 && self.input[i - 1] == b'\\' {
            backslashes += 1;
            i -= 1;
        }
        backslashes % 2 == 0
    }

    /// Position of the cursor: current line plus a bounds-checked backward
    /// scan to the previous newline for the column
    fn current_position(&self) -> Position {
        let mut i = self.cursor;
        let column = loop {
            if i == 0 {
                break self.cursor + 1;
            }
            if self.input[i - 1] == b'\n' {
                break self.cursor - i + 1;
            }
            i -= 1;
        };
        Position {
            line: self.line,
            column: column as u32,
        }
    }

    /// Records an error: one diagnostics line, one retained value
    fn report(&mut self, error: LexError) {
        self.diagnostics.report(&error);
        self.errors.push(error);
        self.ok = false;
    }

    /// One byte of Normal-mode dispatch, in fixed priority order
    fn scan_normal_byte(&mut self) {
        let byte = self.byte();

        if byte == b'\'' && self.unescaped(self.cursor) {
            self.finalize_pending();
            self.advance();
            self.lexeme_start = self.cursor;
            self.mode = Mode::InPacked;
            return;
        }

        if byte == b'"' && self.unescaped(self.cursor) {
            self.finalize_pending();
            self.advance();
            self.lexeme_start = self.cursor;
            self.mode = Mode::InText;
            return;
        }

        if self.matches_at(&self.block_start) {
            self.finalize_pending();
            let count = self.block_start.len();
            self.advance_by(count);
            self.lexeme_start = self.cursor;
            self.mode = Mode::InBlockComment;
            return;
        }

        if self.matches_at(&self.line_comment) {
            self.finalize_pending();
            while self.cursor < self.input.len() && self.byte() != b'\n' {
                self.cursor += 1;
            }
            if self.cursor < self.input.len() {
                self.advance();
            }
            self.lexeme_start = self.cursor;
            return;
        }

        match byte {
            b'\n' => {
                self.finalize_pending();
                self.advance();
                self.lexeme_start = self.cursor;
            }
            b' ' | b'\t' | b'\x0b' | b'\x0c' | b'\r' => {
                self.finalize_pending();
                self.advance();
                self.lexeme_start = self.cursor;
            }
            _ if self.operators.contains(byte) => {
                self.finalize_pending();
                let index = self.operators.index_of(byte);
                self.tokens.push(Token::Operator(index));
                self.advance();
                self.lexeme_start = self.cursor;
            }
            _ => self.advance(),
        }
    }

    /// One byte inside a text literal
    fn scan_text_byte(&mut self) {
        if self.byte() == b'"' && self.unescaped(self.cursor) {
            let decoded = self.decode_span(self.lexeme_start, self.cursor);
            let index = self.strings.len() as u32;
            self.strings.push(decoded);
            self.tokens.push(Token::Text(index));
            self.advance();
            self.lexeme_start = self.cursor;
            self.mode = Mode::Normal;
        } else {
            self.advance();
        }
    }

    /// One byte inside a packed literal
    fn scan_packed_byte(&mut self) {
        if self.byte() == b'\'' && self.unescaped(self.cursor) {
            let start = self.lexeme_start;
            let end = self.cursor;
            if end - start > PACKED_MAX_BYTES {
                let error = LexError::PackedLiteralTooLong {
                    len: end - start,
                    max: PACKED_MAX_BYTES,
                    lexeme: String::from_utf8_lossy(&self.input[start..end]).into_owned(),
                    position: self.current_position(),
                };
                self.report(error);
            } else {
                let input = self.input;
                let mut accumulator = 0u64;
                let mut i = start;
                while i < end {
                    match decode_escape(input, i) {
                        Some(escape) => {
                            accumulator = (accumulator << 8) | escape.value;
                            i += escape.consumed;
                        }
                        None => {
                            accumulator = (accumulator << 8) | u64::from(input[i]);
                            i += 1;
                        }
                    }
                }
                self.tokens.push(Token::Packed(accumulator));
            }
            self.advance();
            self.lexeme_start = self.cursor;
            self.mode = Mode::Normal;
        } else {
            self.advance();
        }
    }

    /// One byte inside a block comment
    fn scan_block_comment_byte(&mut self) {
        if self.matches_at(&self.block_end) {
            let count = self.block_end.len();
            self.advance_by(count);
            self.lexeme_start = self.cursor;
            self.mode = Mode::Normal;
        } else {
            self.advance();
        }
    }

    /// Rescans a quoted span, expanding escape sequences into raw bytes
    fn decode_span(&self, start: usize, end: usize) -> Vec<u8> {
        let input = self.input;
        let mut decoded = Vec::with_capacity(end - start);
        let mut i = start;
        while i < end {
            match decode_escape(input, i) {
                Some(escape) => {
                    decoded.push(escape.value as u8);
                    i += escape.consumed;
                }
                None => {
                    decoded.push(input[i]);
                    i += 1;
                }
            }
        }
        decoded
    }

    /// Classifies the pending lexeme, if any, and resets the lexeme start
    fn finalize_pending(&mut self) {
        if self.lexeme_start >= self.cursor {
            self.lexeme_start = self.cursor;
            return;
        }
        let start = self.lexeme_start;
        let end = self.cursor;
        self.lexeme_start = end;
        self.classify(start, end);
    }

    /// Dispatches a non-empty span to a token, by its first byte
    fn classify(&mut self, start: usize, end: usize) {
        let input = self.input;
        let span = &input[start..end];
        let first = span[0];

        if first.is_ascii_digit() {
            self.classify_integer(span);
            return;
        }

        if self.operators.contains(first) {
            let index = self.operators.index_of(first);
            self.tokens.push(Token::Operator(index));
            return;
        }

        if first.is_ascii_alphabetic() || first == b'_' {
            let hash = fnv1a(span);
            match self.keywords.lookup_hash(hash) {
                Some(index) => self.tokens.push(Token::Keyword(index)),
                None => self.tokens.push(Token::Ident(hash)),
            }
            return;
        }

        let error = LexError::UnknownCharacter {
            lexeme: String::from_utf8_lossy(span).into_owned(),
            position: self.current_position(),
        };
        self.report(error);
    }

    /// Integer literal path: decimal prefix, optional radix suffix reparse,
    /// then the sign-merge heuristic
    fn classify_integer(&mut self, span: &[u8]) {
        let mut i = 0;
        let mut value = 0u64;
        while i < span.len() && span[i].is_ascii_digit() {
            let digit = u64::from(span[i] - b'0');
            value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => v,
                None => {
                    let error = LexError::IntegerOverflow {
                        lexeme: String::from_utf8_lossy(span).into_owned(),
                        position: self.current_position(),
                    };
                    self.report(error);
                    return;
                }
            };
            i += 1;
        }

        if i < span.len() {
            // Trailing bytes are a radix suffix: the decimal prefix is
            // discarded and the remainder reparsed in the suffix's base.
            let radix = match span[i] {
                b'x' | b'X' => 16,
                b'b' | b'B' => 2,
                b'o' | b'O' => 8,
                _ => {
                    let error = LexError::UnknownNumericSuffix {
                        suffix: String::from_utf8_lossy(&span[i..]).into_owned(),
                        position: self.current_position(),
                    };
                    self.report(error);
                    return;
                }
            };
            value = match parse_radix(&span[i + 1..], radix) {
                Ok(v) => v,
                Err(RadixError::InvalidDigit) => {
                    let error = LexError::UnknownNumericSuffix {
                        suffix: String::from_utf8_lossy(&span[i..]).into_owned(),
                        position: self.current_position(),
                    };
                    self.report(error);
                    return;
                }
                Err(RadixError::Overflow) => {
                    let error = LexError::IntegerOverflow {
                        lexeme: String::from_utf8_lossy(span).into_owned(),
                        position: self.current_position(),
                    };
                    self.report(error);
                    return;
                }
            };
        }

        let mut value = value as i64;
        // Two-token lookback: a '-' directly before this numeral is a sign
        // only when the token before it is itself an operator.
        let negate = matches!(
            self.tokens.as_slice(),
            [.., Token::Operator(_), Token::Operator(last)]
                if self.operators.get(*last) == Some(b'-')
        );
        if negate {
            self.tokens.pop();
            value = value.wrapping_neg();
        }
        self.tokens.push(Token::Int(value));
    }
}

enum RadixError {
    InvalidDigit,
    Overflow,
}

fn parse_radix(digits: &[u8], radix: u32) -> Result<u64, RadixError> {
    if digits.is_empty() {
        return Err(RadixError::InvalidDigit);
    }
    let mut value = 0u64;
    for &b in digits {
        let digit = (b as char).to_digit(radix).ok_or(RadixError::InvalidDigit)?;
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(RadixError::Overflow)?;
    }
    Ok(value)
}

/// Runs one pass over `input` with the given configuration
///
/// Convenience wrapper over [`Lexer::new`] + [`Lexer::run`].
pub fn tokenize(input: &str, config: LexerConfig) -> Result<ScanOutput, ConfigError> {
    Ok(Lexer::new(input, config)?.run())
}
