//! Log sinks
//!
//! Info and access lines go to one sink, warnings and errors to another.
//! Either may be a file; otherwise stdout and stderr are used.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

enum Sink {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl Sink {
    fn open(path: Option<&str>, fallback: Self) -> io::Result<Self> {
        let Some(path) = path else {
            return Ok(fallback);
        };
        if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::File(Mutex::new(file)))
    }

    fn emit(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Stderr => eprintln!("{line}"),
            Self::File(file) => {
                let mut file = file.lock().unwrap_or_else(PoisonError::into_inner);
                // A failed log write has nowhere to be reported.
                let _ = writeln!(file, "{line}");
            }
        }
    }
}

pub struct LogWriter {
    out: Sink,
    err: Sink,
}

impl LogWriter {
    pub fn new(out_file: Option<&str>, err_file: Option<&str>) -> io::Result<Self> {
        Ok(Self {
            out: Sink::open(out_file, Sink::Stdout)?,
            err: Sink::open(err_file, Sink::Stderr)?,
        })
    }

    #[cfg(test)]
    pub const fn console() -> Self {
        Self {
            out: Sink::Stdout,
            err: Sink::Stderr,
        }
    }

    /// Info, debug, and access lines
    pub fn out(&self, line: &str) {
        self.out.emit(line);
    }

    /// Warnings and errors
    pub fn err(&self, line: &str) {
        self.err.emit(line);
    }
}
