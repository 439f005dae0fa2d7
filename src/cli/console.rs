use std::io::{BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = "> ";

/// Where interactive commands come from. `None` ends the session.
pub trait CommandSource {
    fn next_command(&mut self, err: &mut dyn Write) -> anyhow::Result<Option<String>>;
}

/// Reads commands line by line from any buffered reader, prompting on the
/// error sink.
#[derive(Debug)]
pub struct Prompted<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> Prompted<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> CommandSource for Prompted<R> {
    fn next_command(&mut self, err: &mut dyn Write) -> anyhow::Result<Option<String>> {
        write!(err, "{}", PROMPT)?;
        err.flush()?;
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

/// Terminal line editor with history. Ctrl-d and Ctrl-c both end the session.
pub struct LineEditor {
    editor: DefaultEditor,
}

impl LineEditor {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl CommandSource for LineEditor {
    fn next_command(&mut self, _err: &mut dyn Write) -> anyhow::Result<Option<String>> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
