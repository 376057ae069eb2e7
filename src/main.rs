use std::io::{self, BufRead, Write};

use clap::Parser;
use env_logger::Env;
use matrica::{OutputStyle, evaluate_to_string, is_quit_command};

/// matrica evaluates arithmetic over matrix literals such as
/// `[1 2;3 4] * transpose([1 2])`.
///
/// Without an expression it reads one expression per line from standard
/// input until `^Q`, `^q` or end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print results in the bracketed input syntax instead of plain rows.
    #[arg(short, long)]
    brackets: bool,

    /// Expression to evaluate once. The bare word `brackets` is accepted as a
    /// synonym for `--brackets`.
    expression: Option<String>,
}

impl Args {
    fn style(&self) -> OutputStyle {
        if self.brackets || self.expression.as_deref() == Some("brackets") {
            OutputStyle::Brackets
        } else {
            OutputStyle::Plain
        }
    }

    fn expression(&self) -> Option<&str> {
        self.expression
            .as_deref()
            .filter(|expression| *expression != "brackets")
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let style = args.style();

    if let Some(expression) = args.expression() {
        let written = match evaluate_to_string(expression, style) {
            Ok(text) => write_result(&mut io::stdout(), &text),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        };
        if let Err(e) = written {
            eprintln!("Failed to write the result: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_loop(io::stdin().lock(), &mut io::stdout().lock(), style) {
        eprintln!("Failed to read standard input: {e}");
        std::process::exit(1);
    }
}

/// Evaluates one line at a time until the quit command or end of input.
/// Failures are written out and the loop moves on to the next line.
fn run_loop<R: BufRead, W: Write>(input: R, output: &mut W, style: OutputStyle) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if is_quit_command(&line) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match evaluate_to_string(&line, style) {
            Ok(text) => write_result(output, &text)?,
            Err(e) => writeln!(output, "{e}")?,
        }
        output.flush()?;
    }
    Ok(())
}

fn write_result<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    if text.ends_with('\n') {
        write!(output, "{text}")
    } else {
        writeln!(output, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(input: &str, style: OutputStyle) -> String {
        let mut output = Vec::new();
        run_loop(Cursor::new(input), &mut output, style).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn loop_stops_at_quit_command() {
        let output = run("[1 2] + [3 4]\n[1 2;3]\n\n^q\n[9]\n", OutputStyle::Brackets);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2, "unexpected output {output:?}");
        assert_eq!(lines[0], "[ 4.0 6.0 ]");
        assert!(lines[1].starts_with("Matrix has inconsistent size"), "got {:?}", lines[1]);
        assert!(!output.contains("9.0"));
    }

    #[test]
    fn loop_continues_after_failures() {
        let output = run("transpose\n[2]\n", OutputStyle::Brackets);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("missing an operand"), "got {:?}", lines[0]);
        assert_eq!(lines[1], "[ 2.0 ]");
    }

    #[test]
    fn loop_ends_at_end_of_input() {
        assert_eq!(run("[1 2;3 4]", OutputStyle::Plain), "1.0 2.0\n3.0 4.0\n");
        assert_eq!(run("", OutputStyle::Plain), "");
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(run("\n   \n\t\n[5]\n", OutputStyle::Brackets), "[ 5.0 ]\n");
    }

    #[test]
    fn upper_case_quit_command_also_stops() {
        assert_eq!(run("^Q\n[1]\n", OutputStyle::Brackets), "");
    }
}
