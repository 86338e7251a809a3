use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

use crate::error::{FieldError, FieldErrorKind};

/// Field labels recognized on a bond page.
///
/// The set is closed: any other text on the page is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLabel {
    TradingCurrency,
    ClosePrice,
    CurrentCouponRate,
    Maturity,
}

/// A page value after coercion into its field's type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(Date),
}

impl FieldLabel {
    pub const ALL: [Self; 4] = [
        Self::TradingCurrency,
        Self::ClosePrice,
        Self::CurrentCouponRate,
        Self::Maturity,
    ];

    /// Label text as rendered on the page.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TradingCurrency => "Trading currency",
            Self::ClosePrice => "Close price",
            Self::CurrentCouponRate => "Current coupon rate",
            Self::Maturity => "Maturity",
        }
    }

    /// Match a text node against the label set.
    ///
    /// Comparison ignores ASCII case, surrounding whitespace and the width of
    /// inner whitespace runs, so `"\n  close   PRICE "` is `ClosePrice`.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        Self::ALL.into_iter().find(|label| {
            let mut expected = label.as_str().split_whitespace();
            let mut actual = trimmed.split_whitespace();
            loop {
                match (expected.next(), actual.next()) {
                    (None, None) => return true,
                    (Some(left), Some(right)) if left.eq_ignore_ascii_case(right) => {}
                    _ => return false,
                }
            }
        })
    }

    /// Coerce a raw page value into this field's type.
    pub fn coerce(self, raw: &str) -> Result<FieldValue, FieldError> {
        let value = raw.trim();
        let coerced = match self {
            Self::TradingCurrency => Ok(FieldValue::Text(value.to_owned())),
            Self::ClosePrice | Self::CurrentCouponRate => match value.parse::<f64>() {
                Ok(number) if number.is_finite() => Ok(FieldValue::Number(number)),
                Ok(_) => Err(FieldErrorKind::NonFinite),
                Err(error) => Err(FieldErrorKind::from(error)),
            },
            Self::Maturity => Date::parse(value, format_description!("[month]/[day]/[year]"))
                .map(FieldValue::Date)
                .map_err(FieldErrorKind::from),
        };

        coerced.map_err(|kind| FieldError {
            label: self,
            value: value.to_owned(),
            kind,
        })
    }
}

impl Display for FieldLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
