//! Positional message-template rendering.
//!
//! Templates use `{}` placeholders filled left to right; `{{` and `}}`
//! escape literal braces. Surplus arguments are ignored, a missing
//! argument is an error routed to the internal-error path.

use thiserror::Error;

/// Errors raised while preparing a log record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Template has more `{}` placeholders than supplied arguments.
    #[error("message template refers to argument {index} but only {supplied} were supplied")]
    MissingArgument { index: usize, supplied: usize },

    /// Template contains `{` not followed by `{` or `}` (named or indexed
    /// placeholders are not supported).
    #[error("message template contains an unsupported placeholder")]
    UnsupportedPlaceholder,

    /// Unmatched `}` in the template.
    #[error("unmatched '}}' in message template")]
    StrayBrace,

    /// Attribute token cannot be split into a name:value field pair.
    #[error("attribute token {token:?} has no name:value separator")]
    MalformedAttribute { token: String },

    /// Event payload could not be serialized.
    #[error("failed to serialize event payload: {0}")]
    Serialize(String),
}

/// Render `template` with positional `args`.
pub fn render(template: &str, args: &[&str]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        match c {
            '{' => match chars.peek() {
                Some('{') => {
                    chars.next();
                    out.push('{');
                }
                Some('}') => {
                    chars.next();
                    let arg = args.get(next_arg).ok_or(FormatError::MissingArgument {
                        index: next_arg,
                        supplied: args.len(),
                    })?;
                    out.push_str(arg);
                    next_arg += 1;
                }
                _ => return Err(FormatError::UnsupportedPlaceholder),
            },
            '}' => match chars.peek() {
                Some('}') => {
                    chars.next();
                    out.push('}');
                }
                _ => return Err(FormatError::StrayBrace),
            },
            other => out.push(other),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_positional() {
        let out = render("moved {} to {}", &["a", "b"]).unwrap();
        assert_eq!(out, "moved a to b");
    }

    #[test]
    fn test_render_no_placeholders() {
        assert_eq!(render("plain", &[]).unwrap(), "plain");
    }

    #[test]
    fn test_render_surplus_args_ignored() {
        assert_eq!(render("only {}", &["a", "b", "c"]).unwrap(), "only a");
    }

    #[test]
    fn test_render_missing_arg_is_error() {
        let err = render("{} and {}", &["a"]).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                index: 1,
                supplied: 1
            }
        );
    }

    #[test]
    fn test_render_escaped_braces() {
        let out = render("[ attribute: {{\"{}\": \"{}\"}} ]", &["name", "value"]).unwrap();
        assert_eq!(out, "[ attribute: {\"name\": \"value\"} ]");
    }

    #[test]
    fn test_render_named_placeholder_rejected() {
        assert_eq!(
            render("{name}", &["x"]).unwrap_err(),
            FormatError::UnsupportedPlaceholder
        );
    }

    #[test]
    fn test_render_stray_brace_rejected() {
        assert_eq!(render("oops }", &[]).unwrap_err(), FormatError::StrayBrace);
    }
}
