use std::convert::TryFrom;
use std::fmt;

/// Clearing status of a transaction or posting, written as a single character.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// `*`
    Cleared,
    /// `!`
    Pending,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Cleared => "*",
            Status::Pending => "!",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = ();

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "*" => Ok(Status::Cleared),
            "!" => Ok(Status::Pending),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[test]
fn test_status_from_str() {
    assert_eq!(Status::try_from("*"), Ok(Status::Cleared));
    assert_eq!(Status::try_from("!"), Ok(Status::Pending));
    assert_eq!(Status::try_from("?"), Err(()));
    assert_eq!(Status::Pending.to_string(), "!");
}
