use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                flags.length = Some(numeric_value(args, &mut i)?);
            }
            "-n" | "--number" => {
                flags.number = Some(numeric_value(args, &mut i)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn numeric_value(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let flag = args[*i].clone();
    *i += 1;
    if *i >= args.len() {
        return Err(ParseError::MissingValue(flag));
    }
    args[*i]
        .parse()
        .map_err(|_| ParseError::InvalidNumber(args[*i].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("mixpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&args(&["-l", "16", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn parses_class_exclusions() {
        let flags = parse(&args(&["--no-symbols", "--no-digits"])).unwrap();
        assert!(flags.no_symbols);
        assert!(flags.no_digits);
        assert!(!flags.no_upper);
    }

    #[test]
    fn parses_output_flags() {
        let flags = parse(&args(&["-b", "-q", "-s"])).unwrap();
        assert!(flags.clipboard);
        assert!(flags.quiet);
        assert!(flags.saved);
    }

    #[test]
    fn rejects_unknown_argument() {
        assert!(parse(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn rejects_bad_or_missing_number() {
        assert!(matches!(
            parse(&args(&["-l", "many"])),
            Err(ParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse(&args(&["-n"])),
            Err(ParseError::MissingValue(_))
        ));
    }
}
