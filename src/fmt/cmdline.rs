//! Renders command-line arguments back into a copy-pasteable string.

/// Arguments that survive a shell round-trip unquoted are left alone.
#[must_use]
pub fn render<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.as_ref();
            if needs_quoting(arg) {
                quote(arg)
            } else {
                arg.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn needs_quoting(arg: &str) -> bool {
    if arg.is_empty() {
        return true;
    }
    !arg.chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_=/.,:@+%".contains(c))
}

fn quote(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', "'\\''"))
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn plain_args_pass_through() {
        assert_eq!(render(["artisan", "queue:work", "--tries=3"]), "artisan queue:work --tries=3");
    }

    #[test]
    fn args_with_spaces_are_quoted() {
        assert_eq!(render(["send", "hello world"]), "send 'hello world'");
    }

    #[test]
    fn empty_args_are_quoted() {
        assert_eq!(render(["cmd", ""]), "cmd ''");
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(render(["it's"]), "'it'\\''s'");
    }
}
