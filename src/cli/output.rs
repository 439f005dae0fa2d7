use std::fmt;
use std::io::{self, BufRead, BufReader, IsTerminal, Read, Write};

use colored::Colorize;

/// Turn label colouring on when stdout is a terminal or `force` is set.
pub fn configure_colors(force: bool) {
    colored::control::set_override(force || io::stdout().is_terminal());
}

pub fn report_host(sink: &mut dyn Write, host: &str) -> io::Result<()> {
    writeln!(sink, "{} {}", "HOST:".bright_cyan().bold(), host)
}

pub fn report_get(sink: &mut dyn Write, url: &str) -> io::Result<()> {
    writeln!(sink, "{} {}", "GET:".bright_yellow().bold(), url)
}

pub fn report_error(
    sink: &mut dyn Write,
    host: &str,
    message: fmt::Arguments<'_>,
) -> io::Result<()> {
    writeln!(sink, "{} {} {}", "ERR:".bright_red().bold(), host, message)
}

/// Copy `body` to `dst` line by line, writing `line_prefix` before each line.
///
/// Line endings are normalised to `\n`, and a trailing line without one
/// still gets it.
pub fn copy_body<R: Read>(dst: &mut dyn Write, body: R, line_prefix: &[u8]) -> io::Result<()> {
    let mut reader = BufReader::new(body);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        dst.write_all(line_prefix)?;
        dst.write_all(&line)?;
        dst.write_all(b"\n")?;
    }
}
