use super::types::{Command, Direction};

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl Command {
    /// Parse one raw input line. Only the line terminator is stripped, so
    /// padded words like " up" are rejected.
    pub fn parse(line: &str) -> Option<Command> {
        let word = capitalize(line.trim_end_matches(['\n', '\r']));
        if word == "Quit" {
            return Some(Command::Quit);
        }
        Direction::from_keyword(&word).map(Command::Move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("uP"), "Up");
        assert_eq!(capitalize("RIGHT"), "Right");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_parse_case_insensitive_direction() {
        for line in ["up\n", "UP\n", "Up\r\n", "uP"] {
            assert_eq!(Command::parse(line), Some(Command::Move(Direction::Up)));
        }
        assert_eq!(Command::parse("qUIT\n"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_unknown_words() {
        assert_eq!(Command::parse("north\n"), None);
        assert_eq!(Command::parse(" up\n"), None);
        assert_eq!(Command::parse("\n"), None);
    }
}
