use crate::error::{DbError, Result};

/// Splits a command line into tokens.
///
/// Whitespace separates tokens; `(`, `)`, `,` and `=` are tokens of their own.
/// A `"` or `'` at the start of a token opens a quoted token that runs to the
/// matching quote. Quoted tokens keep their quotes so that value coercion can
/// tell them apart from bare words; a quote inside a bare word is literal.
pub(crate) fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut just_closed_quote = false;

    for ch in input.chars() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == q {
                quote = None;
                just_closed_quote = true;
            }
            continue;
        }

        match ch {
            '"' | '\'' if current.is_empty() => {
                current.push(ch);
                quote = Some(ch);
            }

            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                just_closed_quote = false;
            }

            ',' | '(' | ')' | '=' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                just_closed_quote = false;
                tokens.push(ch.to_string());
            }

            _ => {
                if just_closed_quote {
                    return Err(DbError::InvalidFormat(
                        "Characters found immediately after a closing quote. Add whitespace after the quoted string."
                            .to_string(),
                    ));
                }
                current.push(ch);
            }
        }
    }

    if let Some(q) = quote {
        return Err(DbError::InvalidFormat(format!("Unclosed quote ({q}) in input")));
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(tokens)
}
