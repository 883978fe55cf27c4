// src/prompt/mod.rs
//! Line-oriented prompts for the values the CLI flags did not provide.
use crate::session::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    let answer = line.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}

/// Collects keywords until a blank line or EOF. Names may be separated by
/// whitespace or commas; `-NAME` removes a keyword again.
pub fn prompt_keywords<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "Enter keywords as bare words; each is matched as _WORD. in the text.")?;

    while let Some(line) = read_answer(input, out, "keywords (blank to start, -NAME to remove)> ")? {
        for token in line.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
            let result = match token.strip_prefix('-') {
                Some(name) => session.remove_keyword(name).map(|_| "removed"),
                None => session.add_keyword(token).map(|added| if added { "added" } else { "already added" }),
            };
            match result {
                Ok(status) => writeln!(out, "  _{}. {}", token.trim_start_matches('-'), status)?,
                Err(e) => writeln!(out, "  {}", e)?,
            }
        }
    }

    let listed: Vec<_> = session.keywords().iter().map(String::as_str).collect();
    writeln!(out, "Keywords: {}", listed.join(", "))?;
    Ok(())
}

/// Asks where the compiled files should go. `None` means the user cancelled.
pub fn prompt_output_dir<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<PathBuf>> {
    Ok(read_answer(input, out, "Output folder (blank to cancel)> ")?.map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn collects_until_blank_line() {
        let mut session = Session::new(".");
        let mut input = Cursor::new("INTRO, BODY\nFOOTER INTRO\n-BODY\n\nIGNORED\n");
        let mut out = Vec::new();

        prompt_keywords(&mut session, &mut input, &mut out).unwrap();

        let keywords: Vec<_> = session.keywords().iter().cloned().collect();
        assert_eq!(keywords, vec!["FOOTER", "INTRO"]);
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("_INTRO. already added"));
        assert!(shown.contains("_BODY. removed"));
    }

    #[test]
    fn invalid_keywords_are_reported_not_added() {
        let mut session = Session::new(".");
        let mut input = Cursor::new("bad-name _X.\n");
        let mut out = Vec::new();

        prompt_keywords(&mut session, &mut input, &mut out).unwrap();

        assert!(session.keywords().is_empty());
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Invalid keyword 'bad-name'"));
        assert!(shown.contains("Invalid keyword '_X.'"));
    }

    #[test]
    fn blank_or_missing_output_dir_cancels() {
        let mut out = Vec::new();
        assert_eq!(prompt_output_dir(&mut Cursor::new("\n"), &mut out).unwrap(), None);
        assert_eq!(prompt_output_dir(&mut Cursor::new(""), &mut out).unwrap(), None);
        assert_eq!(
            prompt_output_dir(&mut Cursor::new("  /tmp/out \n"), &mut out).unwrap(),
            Some(PathBuf::from("/tmp/out"))
        );
    }
}
