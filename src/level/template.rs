//! Template engine for `$placeholder` substitution.
//!
//! Level and tilemap templates are S-expression text with `$name`
//! placeholders.
//!
//! # Syntax
//!
//! - `$name` - Substitutes the value of variable `name`; the name is the
//!   longest run of ASCII letters, digits and underscores after the `$`
//! - `$$` - Renders as literal `$`
//! - A `$` not followed by a name character is kept as-is
//!
//! The template is scanned once from left to right, so substituted values
//! are inserted verbatim and never scanned for placeholders themselves.
//! Undefined variables are an error rather than an empty substitution.

use std::collections::HashMap;
use std::fmt;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder was found but no value was provided for it.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the `$` in the template.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined placeholder '${}' at position {} in template",
                    name, position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Render a template string by substituting `$variable` placeholders.
///
/// # Examples
///
/// ```ignore
/// let vars = vars([("solid", "t"), ("zPos", "0")]);
/// let result = render_template("(solid #$solid) (z-pos $zPos)", &vars).unwrap();
/// assert_eq!(result, "(solid #t) (z-pos 0)");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        // Escape sequence $$
        if let Some((_, '$')) = chars.peek() {
            chars.next();
            result.push('$');
            continue;
        }

        let mut var_name = String::new();
        while let Some(&(_, c)) = chars.peek() {
            if !is_name_char(c) {
                break;
            }
            var_name.push(c);
            chars.next();
        }

        if var_name.is_empty() {
            result.push('$');
            continue;
        }

        match variables.get(&var_name) {
            Some(value) => result.push_str(value),
            None => {
                return Err(TemplateError::UndefinedVariable {
                    name: var_name,
                    position: pos,
                });
            }
        }
    }

    Ok(result)
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
