use std::io::{self, BufRead, Write};

/// Line-oriented prompts over any reader/writer pair.
///
/// Prompts go to the writer (stderr in the binary) so stdout only carries
/// results.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question and return the trimmed answer, `None` at end of input
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read free text until two consecutive blank lines or end of input.
    ///
    /// Trailing blank lines are dropped; blank lines inside the text are
    /// kept.
    pub fn read_multiline(&mut self, header: &str) -> io::Result<String> {
        writeln!(self.output, "{}", header)?;
        self.output.flush()?;

        let mut lines: Vec<String> = Vec::new();
        let mut blank_run = 0;
        let mut buf = String::new();

        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                break;
            }
            let line = buf.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                blank_run += 1;
                if blank_run >= 2 {
                    break;
                }
            } else {
                blank_run = 0;
            }
            lines.push(line.to_string());
        }

        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut p = prompter("  1200  \n");
        assert_eq!(p.ask("? ").unwrap().as_deref(), Some("1200"));
        assert_eq!(p.ask("? ").unwrap(), None);
        assert_eq!(String::from_utf8(p.output).unwrap(), "? ? ");
    }

    #[test]
    fn test_multiline_stops_at_two_blank_lines() {
        let mut p = prompter("첫 줄\n\n둘째 줄\n\n\n남은 입력\n");
        let text = p.read_multiline("입력:").unwrap();
        assert_eq!(text, "첫 줄\n\n둘째 줄");

        // The rest of the input is still available
        assert_eq!(p.ask("").unwrap().as_deref(), Some("남은 입력"));
    }

    #[test]
    fn test_multiline_stops_at_eof_and_strips_trailing_blank() {
        let mut p = prompter("사랑해.\n정말로.\n\n");
        assert_eq!(p.read_multiline("").unwrap(), "사랑해.\n정말로.");

        let mut empty = prompter("");
        assert_eq!(empty.read_multiline("").unwrap(), "");
    }
}
