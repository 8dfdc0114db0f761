use crate::error::{PageLinkFault, WarrenError};
use crate::model::link::Link;
use crate::WarrenResult;
use percent_encoding::percent_decode_str;
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU32;
use url::form_urlencoded;

/// A positive page number read out of a pagination link
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    pub fn new(number: u32) -> Option<Self> { NonZeroU32::new(number).map(PageNumber) }

    pub fn get(self) -> u32 { self.0.get() }

    /// Reads the first occurrence of `key` from the query string of `link`.
    /// Query pairs are percent-decoded, so `page%5Bnumber%5D` matches `page[number]`.
    pub fn from_link(link: &Link, key: &str) -> WarrenResult<Self> {
        let malformed = |reason| {
            let text = link.to_string();
            WarrenError::malformed(percent_decode_str(&text).decode_utf8_lossy(), reason)
        };

        let value = link
            .query()
            .and_then(|query| {
                form_urlencoded::parse(query.as_bytes())
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.into_owned())
            })
            .ok_or_else(|| malformed(PageLinkFault::MissingParameter(key.into())))?;

        Self::parse_value(&value).map_err(malformed)
    }

    /// Accepts ASCII digits only: no sign, no surrounding whitespace. Leading zeros are fine.
    fn parse_value(value: &str) -> Result<Self, PageLinkFault> {
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(value) {
            return match value.strip_prefix('-') {
                Some(rest) if is_digits(rest) => Err(PageLinkFault::NotPositive),
                _ => Err(PageLinkFault::NotANumber(value.into())),
            };
        }
        let number = value.parse::<u32>().map_err(|_| PageLinkFault::NotANumber(value.into()))?;
        PageNumber::new(number).ok_or(PageLinkFault::NotPositive)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl TryFrom<u32> for PageNumber {
    type Error = PageLinkFault;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        PageNumber::new(number).ok_or(PageLinkFault::NotPositive)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self { page.get() }
}
