//! Line-oriented pattern matching over text sources.
//!
//! Every line is tested against every pattern independently, so a single
//! line can produce several matches. Results are streamed in file order and
//! captures are returned exactly as matched; trimming is left to callers.
//!
//! Lines are split on raw bytes and decoded lossily, so a stray non-UTF-8
//! byte only affects the line it sits on.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use regex_lite::Regex;

/// A regex with one capture group, tagged with a caller-chosen id.
#[derive(Debug, Clone)]
pub struct LinePattern<K> {
    pub id: K,
    regex: Regex,
}

impl<K: Copy> LinePattern<K> {
    pub fn new(id: K, regex: Regex) -> Self {
        Self { id, regex }
    }

    fn capture(&self, line: &str) -> Option<LineMatch<K>> {
        let caps = self.regex.captures(line)?;
        let text = caps.get(0)?.as_str().to_string();
        let capture = caps.get(1).map_or("", |m| m.as_str()).to_string();
        Some(LineMatch {
            pattern: self.id,
            text,
            capture,
        })
    }
}

/// One pattern hit on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch<K> {
    pub pattern: K,
    /// Full matched text (group 0).
    pub text: String,
    /// Text of the designated capture group.
    pub capture: String,
}

/// Lazily match `patterns` against each line of `reader`.
pub fn match_lines<R: BufRead, K: Copy>(
    reader: R,
    patterns: &[LinePattern<K>],
) -> LineMatches<'_, R, K> {
    LineMatches {
        reader,
        buf: Vec::new(),
        patterns,
        pending: VecDeque::new(),
        done: false,
    }
}

/// Iterator returned by [`match_lines`].
///
/// Reads one line at a time and only as far as the consumer pulls. An I/O
/// error is yielded once and ends the stream.
pub struct LineMatches<'p, R, K> {
    reader: R,
    buf: Vec<u8>,
    patterns: &'p [LinePattern<K>],
    pending: VecDeque<LineMatch<K>>,
    done: bool,
}

impl<R: BufRead, K> LineMatches<'_, R, K> {
    /// Next line without its `\n` or `\r\n` terminator.
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl<R: BufRead, K: Copy> Iterator for LineMatches<'_, R, K> {
    type Item = io::Result<LineMatch<K>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(found) = self.pending.pop_front() {
                return Some(Ok(found));
            }
            if self.done {
                return None;
            }
            match self.next_line() {
                Some(Ok(line)) => {
                    let hits = self.patterns.iter().filter_map(|p| p.capture(&line));
                    self.pending.extend(hits);
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}
