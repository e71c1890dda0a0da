use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "chrono")]
use chrono::NaiveDate;

/// A date as written in a journal: `YYYY-MM-DD`, `YYYY/MM/DD` or `YYYY.MM.DD`, with leading
/// zeros optional and the year omittable (`MM/DD`).
///
/// Only the raw text is stored. The shape was checked by the grammar, calendar validity was
/// not, and a missing year has to be supplied by the consumer.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct SimpleDate<'a> {
    s: Cow<'a, str>,
}

impl<'a> SimpleDate<'a> {
    /// Wraps `s` without checking that it is a well-formed date.
    pub fn from_str_unchecked(s: &'a str) -> Self {
        SimpleDate { s: Cow::Borrowed(s) }
    }

    pub fn as_str(&self) -> &str {
        &self.s
    }

    /// The separator used between the components.
    pub fn separator(&self) -> Option<char> {
        self.s.chars().find(|c| matches!(c, '-' | '/' | '.'))
    }

    fn parts(&self) -> Vec<&str> {
        match self.separator() {
            Some(sep) => self.s.split(sep).collect(),
            None => vec![&*self.s],
        }
    }

    /// The year, if one was written.
    pub fn year(&self) -> Option<i32> {
        match self.parts().as_slice() {
            [year, _, _] => year.parse().ok(),
            _ => None,
        }
    }

    pub fn month(&self) -> Option<u32> {
        match self.parts().as_slice() {
            [_, month, _] | [month, _] => month.parse().ok(),
            _ => None,
        }
    }

    pub fn day(&self) -> Option<u32> {
        match self.parts().as_slice() {
            [_, _, day] | [_, day] => day.parse().ok(),
            _ => None,
        }
    }

    /// Resolves the date to a calendar date, taking the year from `default_year` when none was
    /// written. Returns `None` for dates that do not exist, such as `2/30`.
    #[cfg(feature = "chrono")]
    pub fn resolve(&self, default_year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.year().unwrap_or(default_year),
            self.month()?,
            self.day()?,
        )
    }
}

impl<'a> From<Cow<'a, str>> for SimpleDate<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        SimpleDate { s }
    }
}

impl<'a> From<&'a str> for SimpleDate<'a> {
    fn from(s: &'a str) -> Self {
        SimpleDate::from_str_unchecked(s)
    }
}

impl fmt::Display for SimpleDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.s)
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDate> for SimpleDate<'static> {
    fn from(d: NaiveDate) -> Self {
        Cow::from(d.format("%Y-%m-%d").to_string()).into()
    }
}

#[test]
fn test_date_components() {
    let date = SimpleDate::from_str_unchecked("2012/5/14");
    assert_eq!(date.separator(), Some('/'));
    assert_eq!(date.year(), Some(2012));
    assert_eq!(date.month(), Some(5));
    assert_eq!(date.day(), Some(14));

    let date = SimpleDate::from_str_unchecked("01.31");
    assert_eq!(date.separator(), Some('.'));
    assert_eq!(date.year(), None);
    assert_eq!(date.month(), Some(1));
    assert_eq!(date.day(), Some(31));
}

#[cfg(feature = "chrono")]
#[test]
fn test_date_resolve() {
    assert_eq!(
        SimpleDate::from_str_unchecked("1/31").resolve(2020),
        NaiveDate::from_ymd_opt(2020, 1, 31)
    );
    assert_eq!(
        SimpleDate::from_str_unchecked("2012-05-14").resolve(2020),
        NaiveDate::from_ymd_opt(2012, 5, 14)
    );
    assert_eq!(SimpleDate::from_str_unchecked("2/30").resolve(2020), None);
}

#[cfg(feature = "chrono")]
#[test]
fn test_date_from_chrono() {
    let date: SimpleDate<'_> = NaiveDate::from_ymd_opt(2020, 5, 5).unwrap().into();
    assert_eq!(date.as_str(), "2020-05-05");
}
