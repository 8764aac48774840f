//! Sources of input text.
//!
//! The tokenizer never reads incrementally: an [`Input`] hands over the
//! entire text in one piece before scanning starts.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Something that can produce the full text to tokenize.
pub trait Input {
    fn input(&mut self) -> io::Result<String>;
}

impl Input for &str {
    fn input(&mut self) -> io::Result<String> {
        Ok((*self).to_owned())
    }
}

impl Input for String {
    fn input(&mut self) -> io::Result<String> {
        Ok(std::mem::take(self))
    }
}

/// Reads a whole file as UTF-8.
#[derive(Clone, Debug)]
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileInput { path: path.into() }
    }
}

impl Input for FileInput {
    fn input(&mut self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// Drains any reader to its end, e.g. standard input or a socket.
#[derive(Debug)]
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: Read> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        ReaderInput { reader }
    }
}

impl<R: Read> Input for ReaderInput<R> {
    fn input(&mut self) -> io::Result<String> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(text)
    }
}
