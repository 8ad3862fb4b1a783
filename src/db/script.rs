//! SQL script splitting and execution

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::Result;

/// Split a script into statements on `;`.
///
/// Semicolons inside single or double quoted strings do not split.
/// `--` line comments and `/* */` block comments are dropped. Blank
/// statements are skipped.
pub fn split_statements(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = script.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    current.push(c);
                }
                '-' if chars.peek() == Some(&'-') => {
                    // Skip to end of line
                    for next in chars.by_ref() {
                        if next == '\n' {
                            current.push('\n');
                            break;
                        }
                    }
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                    current.push(' ');
                }
                ';' => {
                    push_statement(&mut statements, &current);
                    current.clear();
                }
                _ => current.push(c),
            },
        }
    }
    push_statement(&mut statements, &current);

    statements
}

fn push_statement(statements: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
}

/// Execute every statement of `script` in order.
///
/// With `log` set each statement is logged before it runs. Returns the
/// number of statements executed.
pub fn run_script(conn: &Connection, script: &str, log: bool) -> Result<usize> {
    let statements = split_statements(script);

    for statement in &statements {
        if log {
            info!("SQL: {}", statement);
        } else {
            debug!("SQL: {}", statement);
        }
        conn.execute_batch(statement)?;
    }

    Ok(statements.len())
}
