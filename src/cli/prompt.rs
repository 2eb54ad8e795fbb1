//! Interactive confirmation.

use std::io::{self, BufRead, Write};

/// Write `prompt`, read one line and report whether it was an affirmative
/// answer. End of input and undecodable bytes count as a refusal.
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut answer = Vec::new();
    input.read_until(b'\n', &mut answer)?;
    Ok(is_affirmative(&String::from_utf8_lossy(&answer)))
}

/// `yes` or `y`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_affirmative_answers() {
        for answer in ["yes", "y", "YES", "Y", "  Yes\n", "y\r\n"] {
            assert!(is_affirmative(answer), "{:?} should confirm", answer);
        }
    }

    #[test]
    fn test_other_answers_refuse() {
        for answer in ["no", "n", "", "yess", "ye", "sure", "\n"] {
            assert!(!is_affirmative(answer), "{:?} should refuse", answer);
        }
    }

    #[test]
    fn test_confirm_writes_prompt_and_reads_answer() {
        let mut input = Cursor::new("y\n");
        let mut output = Vec::new();

        assert!(confirm("Proceed? ", &mut input, &mut output).unwrap());
        assert_eq!(String::from_utf8(output).unwrap(), "Proceed? ");
    }

    #[test]
    fn test_confirm_invalid_utf8_refuses() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let mut output = Vec::new();

        assert!(!confirm("Proceed? ", &mut input, &mut output).unwrap());
    }

    #[test]
    fn test_confirm_eof_refuses() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert!(!confirm("Proceed? ", &mut input, &mut output).unwrap());
    }
}
