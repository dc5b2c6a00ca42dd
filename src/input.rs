//! Locating and reading simulator logs
//!
//! A run reads either the default log file or, when it is absent, every file
//! named on the command line as one continuous stream of lines.

use crate::error::{LogstatError, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

/// Argument value that stands for standard input
pub const STDIN_ARG: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn label(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| LogstatError::io(path, e))?;
                Ok(Box::new(BufReader::new(file)))
            }
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

/// Picks the inputs for a run.
///
/// The default log wins when it exists. Otherwise the fallback arguments are
/// used in order; missing ones are skipped with a warning and the run fails
/// only if none of them is readable.
pub fn resolve_inputs(default_log: &Path, fallbacks: &[PathBuf]) -> Result<Vec<InputSource>> {
    if default_log.is_file() {
        debug!("Reading default log {}", default_log.display());
        return Ok(vec![InputSource::File(default_log.to_path_buf())]);
    }
    debug!(
        "Default log {} not found, using {} argument(s)",
        default_log.display(),
        fallbacks.len()
    );

    let mut sources = Vec::new();
    for path in fallbacks {
        if path.as_os_str() == STDIN_ARG {
            sources.push(InputSource::Stdin);
        } else if path.is_file() {
            sources.push(InputSource::File(path.clone()));
        } else {
            warn!("Skipping missing input {}", path.display());
        }
    }

    if sources.is_empty() {
        let mut tried = vec![default_log.to_path_buf()];
        tried.extend(fallbacks.iter().cloned());
        return Err(LogstatError::InputNotFound { paths: tried });
    }
    Ok(sources)
}

/// One raw line with its origin, for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub source: Rc<str>,
    pub number: usize,
    pub text: String,
}

impl InputLine {
    pub fn new(source: impl Into<Rc<str>>, number: usize, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            number,
            text: text.into(),
        }
    }
}

/// Iterator over the lines of several sources, opened lazily one after another
pub struct LogLines {
    pending: VecDeque<InputSource>,
    current: Option<OpenSource>,
}

struct OpenSource {
    label: Rc<str>,
    reader: Box<dyn BufRead>,
    number: usize,
}

impl LogLines {
    pub fn new(sources: Vec<InputSource>) -> Self {
        Self {
            pending: sources.into(),
            current: None,
        }
    }

    /// Reads an in-memory log, mostly useful for tests
    pub fn from_reader(label: &str, reader: impl BufRead + 'static) -> Self {
        Self {
            pending: VecDeque::new(),
            current: Some(OpenSource {
                label: label.into(),
                reader: Box::new(reader),
                number: 0,
            }),
        }
    }
}

impl Iterator for LogLines {
    type Item = Result<InputLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_none() {
                let source = self.pending.pop_front()?;
                let reader = match source.open() {
                    Ok(reader) => reader,
                    Err(e) => return Some(Err(e)),
                };
                debug!("Opened {}", source.label());
                self.current = Some(OpenSource {
                    label: source.label().into(),
                    reader,
                    number: 0,
                });
            }

            let open = self.current.as_mut()?;
            let mut buf = Vec::new();
            match open.reader.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    self.current = None;
                }
                Ok(_) => {
                    open.number += 1;
                    // simulator output is ASCII; stray bytes must not abort a run
                    let text = String::from_utf8_lossy(&buf);
                    let text = text.trim_end_matches(['\n', '\r']);
                    return Some(Ok(InputLine::new(open.label.clone(), open.number, text)));
                }
                Err(e) => {
                    let label = open.label.to_string();
                    self.current = None;
                    return Some(Err(LogstatError::io(label, e)));
                }
            }
        }
    }
}
