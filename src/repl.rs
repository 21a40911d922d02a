//! Line-oriented read-parse-print loop.
//!
//! Each line is parsed on its own. A clean parse prints the canonical
//! rendering of the program; otherwise every diagnostic is printed against
//! the line it came from.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::{
    parser::parser::{parse_source, ParserConfig},
    render_error,
};

pub const PROMPT: &str = ">> ";

/// Runs the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, config: ParserConfig) -> io::Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        debug!("repl line: {:?}", line);

        output.write_all(eval_line(&line, config).as_bytes())?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

/// What the loop prints for a single line of input.
pub fn eval_line(line: &str, config: ParserConfig) -> String {
    let (program, diagnostics) = parse_source(line.to_string(), None, config);

    if diagnostics.is_empty() {
        return format!("{}\n", program);
    }

    let mut out = String::new();
    for error in &diagnostics {
        out.push_str(&render_error(error, line));
        out.push('\n');
    }
    out
}
