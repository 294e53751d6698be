use std::str::FromStr;

use anyhow::{Context, bail};


#[derive(Clone, Copy, PartialEq, Debug)]
pub enum UserCommand {
    Click { x: f64, y: f64 },
    Hover { x: f64, y: f64 },
    Board,
    Quit,
}

fn parse_ndc(s: &str) -> anyhow::Result<f64> {
    let v: f64 = s.parse().with_context(|| format!("'{s}' is not a number"))?;
    if !(-1.0..=1.0).contains(&v) {
        bail!("coordinate {v} is outside of [-1, 1]");
    }
    Ok(v)
}

impl FromStr for UserCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<_> = s.split_whitespace().collect();
        match words.as_slice() {
            ["click", x, y] => Ok(UserCommand::Click { x: parse_ndc(x)?, y: parse_ndc(y)? }),
            ["hover", x, y] => Ok(UserCommand::Hover { x: parse_ndc(x)?, y: parse_ndc(y)? }),
            ["board"] => Ok(UserCommand::Board),
            ["quit"] => Ok(UserCommand::Quit),
            [] => bail!("empty command"),
            _ => bail!("unknown command: '{}'", s.trim()),
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!("click 0.5 -1".parse::<UserCommand>().unwrap(), UserCommand::Click {
            x: 0.5,
            y: -1.0
        });
        assert_eq!("  hover  -0.25 0 ".parse::<UserCommand>().unwrap(), UserCommand::Hover {
            x: -0.25,
            y: 0.0
        });
        assert_eq!("board".parse::<UserCommand>().unwrap(), UserCommand::Board);
        assert_eq!("quit".parse::<UserCommand>().unwrap(), UserCommand::Quit);
    }

    #[test]
    fn reject_bad_commands() {
        assert!("".parse::<UserCommand>().is_err());
        assert!("click 0.5".parse::<UserCommand>().is_err());
        assert!("click 1.5 0".parse::<UserCommand>().is_err());
        assert!("hover a b".parse::<UserCommand>().is_err());
        assert!("jump 0 0".parse::<UserCommand>().is_err());
    }
}
