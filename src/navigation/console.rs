//! Line-oriented console used by every interactive step.

use std::io::{self, BufRead, IsTerminal, Write};

/// Source of user input and sink for prompts and messages.
///
/// Implementations read one line per call and strip the line terminator only;
/// other whitespace is part of the input.
pub trait Console {
    /// Show `prompt` and read one line.
    ///
    /// # Errors
    ///
    /// `UnexpectedEof` when input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Read a secret such as a password.
    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        self.read_line(prompt)
    }

    /// Print one line of output.
    fn print(&mut self, text: &str) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_line(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_secret(prompt)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        (**self).print(text)
    }
}

/// Strip a trailing `\n` or `\r\n`.
pub fn trim_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Console over any reader/writer pair; [`StdConsole::stdio`] for the terminal.
///
/// Secrets are read without echo only when input comes from a terminal;
/// piped or scripted input is read as plain lines.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
    hide_secrets: bool,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let hide_secrets = stdin.is_terminal();
        Self {
            input: stdin.lock(),
            output: io::stdout(),
            hide_secrets,
        }
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(trim_line_ending(line))
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        if !self.hide_secrets {
            return self.read_line(prompt);
        }
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        rpassword::read_password()
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_lines_without_terminator() {
        let input = "first\r\n second \n".as_bytes();
        let mut console = StdConsole::new(input, Vec::new());

        assert_eq!(console.read_line("> ").unwrap(), "first");
        assert_eq!(console.read_line("> ").unwrap(), " second ");

        let err = console.read_line("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompts_and_prints_to_output() {
        let mut console = StdConsole::new("1\n".as_bytes(), Vec::new());
        console.read_line("Choose: ").unwrap();
        console.print("done").unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Choose: done\n");
    }

    #[test]
    fn test_secret_from_piped_input_is_a_plain_line() {
        let mut console = StdConsole::new("s3cret\n".as_bytes(), Vec::new());

        assert_eq!(console.read_secret("Password: ").unwrap(), "s3cret");

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Password: ");
    }
}
