// Source: https://stackoverflow.com/questions/45882329/read-large-files-line-by-line-in-rust
use std::{
    fs::File,
    io::{self, prelude::*},
    rc::Rc,
};

pub const DEFAULT_BUFFER_CAPACITY: usize = 10 * 1024 * 1024; // 10MB

/// Line iterator that reuses one buffer while the caller does not keep the line.
///
/// Lines are yielded without their `\n` / `\r\n` terminator.
pub struct TextReader {
    reader: io::BufReader<File>,
    buf: Rc<String>,
}

fn new_buf(capacity: usize) -> Rc<String> {
    Rc::new(String::with_capacity(capacity))
}

impl TextReader {
    pub fn open(path: impl AsRef<std::path::Path>) -> io::Result<Self> {
        Self::open_with_capacity(path, DEFAULT_BUFFER_CAPACITY)
    }

    pub fn open_with_capacity(path: impl AsRef<std::path::Path>, capacity: usize) -> io::Result<Self> {
        let file = File::open(path)?;
        let buf = new_buf(capacity);
        let reader = io::BufReader::with_capacity(buf.capacity(), file);

        Ok(Self { reader, buf })
    }
}

impl Iterator for TextReader {
    type Item = io::Result<Rc<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        // The previous line is still borrowed by the caller: start a fresh buffer
        if Rc::get_mut(&mut self.buf).is_none() {
            self.buf = new_buf(1024);
        }
        let buf = Rc::make_mut(&mut self.buf);
        buf.clear();

        match self.reader.read_line(buf) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed_len = buf.trim_end_matches(&['\n', '\r'][..]).len();
                buf.truncate(trimmed_len);
                Some(Ok(Rc::clone(&self.buf)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn yields_lines_without_terminators() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first\r\nsecond\n\nlast").unwrap();

        let lines: Vec<String> = TextReader::open(file.path()).unwrap()
            .map(|l| l.unwrap().to_string())
            .collect();

        assert_eq!(lines, vec!["first", "second", "", "last"]);
    }

    #[test]
    fn kept_lines_are_not_overwritten() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a\nb\n").unwrap();

        let lines: Vec<Rc<String>> = TextReader::open(file.path()).unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(lines[0].as_str(), "a");
        assert_eq!(lines[1].as_str(), "b");
    }
}
