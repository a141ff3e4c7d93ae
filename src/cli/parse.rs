use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
    Conflict(&'static str, &'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::Conflict(a, b) => write!(f, "{} cannot be combined with {}", a, b),
        }
    }
}

fn value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let raw = value(args, i)?;
    raw.parse().map_err(|_| ParseError::InvalidNumber(raw))
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-i" | "--interactive" => flags.interactive = true,
            "-b" | "--board" => flags.clipboard = true,
            "-e" | "--estimate" => flags.estimate = true,
            "--save-config" => flags.save_config = true,
            "--no-special" => flags.no_special = true,
            "--no-case" => flags.no_case = true,
            "--no-reverse" => flags.no_reverse = true,
            "--no-common" => flags.no_common = true,
            "--no-limit" => flags.no_limit = true,
            "--bruteforce" => flags.bruteforce = true,
            "--initials" => flags.initials = true,
            "--min" => flags.min_length = Some(number(args, &mut i)?),
            "--max" => flags.max_length = Some(number(args, &mut i)?),
            "--leet" => flags.leet_level = Some(number(args, &mut i)?),
            "--depth" => flags.depth = Some(number(args, &mut i)?),
            // Negative caps parse here and are rejected by validation.
            "-n" | "--number" => flags.number = Some(number(args, &mut i)?),
            "--special" => flags.special = Some(value(args, &mut i)?),
            "-p" | "--profile" => flags.profile = Some(value(args, &mut i)?),
            "-c" | "--config" => flags.config = Some(value(args, &mut i)?),
            "-o" | "--output" => {
                // Check if next arg exists and isn't another flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if flags.interactive && flags.profile.is_some() {
        return Err(ParseError::Conflict("--interactive", "--profile"));
    }
    if flags.clipboard && flags.output.is_some() {
        return Err(ParseError::Conflict("--board", "--output"));
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("profpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_values_and_switches() {
        let flags = parse(&args(&[
            "-p", "alice.json", "--min", "8", "--max", "12", "--leet", "2", "--depth", "3", "-n",
            "100", "--special", "!*", "--no-case", "-q",
        ]))
        .unwrap();
        assert_eq!(flags.profile.as_deref(), Some("alice.json"));
        assert_eq!(flags.min_length, Some(8));
        assert_eq!(flags.max_length, Some(12));
        assert_eq!(flags.leet_level, Some(2));
        assert_eq!(flags.depth, Some(3));
        assert_eq!(flags.number, Some(100));
        assert_eq!(flags.special.as_deref(), Some("!*"));
        assert!(flags.no_case);
        assert!(flags.quiet);
    }

    #[test]
    fn negative_cap_reaches_validation() {
        assert_eq!(parse(&args(&["-n", "-5"])).unwrap().number, Some(-5));
    }

    #[test]
    fn output_without_path_uses_current_dir() {
        let flags = parse(&args(&["-o", "-q"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
        assert!(flags.quiet);
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["--min", "six"])).unwrap_err(),
            ParseError::InvalidNumber("six".into())
        );
        assert_eq!(
            parse(&args(&["--max"])).unwrap_err(),
            ParseError::MissingValue("--max".into())
        );
        assert_eq!(
            parse(&args(&["--frobnicate"])).unwrap_err(),
            ParseError::UnknownArg("--frobnicate".into())
        );
        assert_eq!(
            parse(&args(&["-i", "-p", "a.json"])).unwrap_err(),
            ParseError::Conflict("--interactive", "--profile")
        );
    }
}
