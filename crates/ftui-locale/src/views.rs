//! Typed read-only views over well-known bundles.
//!
//! Views only compose keys (`months-format-wide`, `dateFormat-long`, ...) and
//! hand back borrowed strings. Patterns such as `d. MMM y` or `{1} {0}` are
//! returned verbatim; interpreting them is the formatter's job.

use std::fmt;

use crate::bundle::ResourceBundle;
use crate::error::Result;

/// Grammatical context of a calendar name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// Used inside a formatted date ("den 3. marts").
    Format,
    /// Used on its own, e.g. as a column header.
    StandAlone,
}

impl Context {
    fn as_key(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::StandAlone => "standAlone",
        }
    }
}

/// Width of a calendar name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Wide,
    Abbr,
    Narrow,
}

impl Width {
    fn as_key(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Abbr => "abbr",
            Self::Narrow => "narrow",
        }
    }
}

/// Length of a date, time or date-time pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatLength {
    Full,
    Long,
    Medium,
    Short,
}

impl FormatLength {
    fn as_key(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Long => "long",
            Self::Medium => "medium",
            Self::Short => "short",
        }
    }
}

/// Half of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    Am,
    Pm,
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Am => "am",
            Self::Pm => "pm",
        })
    }
}

/// Names and patterns of the Gregorian calendar in one locale.
///
/// ```
/// use ftui_locale::LocaleStore;
/// use ftui_locale::views::{Context, Width};
///
/// let store = LocaleStore::with_builtin().unwrap();
/// let cal = store.calendar("da").unwrap();
/// assert_eq!(cal.month(Context::Format, Width::Wide, 2).unwrap(), "marts");
/// assert_eq!(cal.day(Context::StandAlone, Width::Abbr, 0).unwrap(), "søn");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CalendarNames<'a> {
    bundle: &'a ResourceBundle,
}

impl<'a> CalendarNames<'a> {
    #[must_use]
    pub fn new(bundle: &'a ResourceBundle) -> Self {
        Self { bundle }
    }

    #[must_use]
    pub fn bundle(&self) -> &'a ResourceBundle {
        self.bundle
    }

    /// All twelve month names, January first.
    pub fn months(&self, context: Context, width: Width) -> Result<&'a [String]> {
        let key = format!("months-{}-{}", context.as_key(), width.as_key());
        self.bundle.list(&key)
    }

    /// One month name; `index` 0 is January.
    pub fn month(&self, context: Context, width: Width, index: usize) -> Result<&'a str> {
        let key = format!("months-{}-{}", context.as_key(), width.as_key());
        self.bundle.item(&key, index)
    }

    /// All seven day names, Sunday first.
    pub fn days(&self, context: Context, width: Width) -> Result<&'a [String]> {
        let key = format!("days-{}-{}", context.as_key(), width.as_key());
        self.bundle.list(&key)
    }

    /// One day name; `index` 0 is Sunday.
    pub fn day(&self, context: Context, width: Width, index: usize) -> Result<&'a str> {
        let key = format!("days-{}-{}", context.as_key(), width.as_key());
        self.bundle.item(&key, index)
    }

    /// The four quarter names.
    pub fn quarters(&self, context: Context, width: Width) -> Result<&'a [String]> {
        let key = format!("quarters-{}-{}", context.as_key(), width.as_key());
        self.bundle.list(&key)
    }

    /// The two era names, the earlier era first.
    pub fn eras(&self, width: Width) -> Result<&'a [String]> {
        let key = match width {
            Width::Wide => "eraNames",
            Width::Abbr => "eraAbbr",
            Width::Narrow => "eraNarrow",
        };
        self.bundle.list(key)
    }

    /// Display name of a calendar field (`"year"`, `"weekday"`, `"zone"`, ...).
    pub fn field(&self, name: &str) -> Result<&'a str> {
        self.bundle.text(&format!("field-{name}"))
    }

    /// Name for a day relative to today (`0` today, `-1` yesterday, `2` the day after tomorrow).
    pub fn relative_day(&self, offset: i32) -> Result<&'a str> {
        self.bundle.text(&format!("field-day-relative+{offset}"))
    }

    /// AM/PM marker.
    pub fn day_period(&self, width: Width, period: DayPeriod) -> Result<&'a str> {
        self.bundle
            .text(&format!("dayPeriods-format-{}-{period}", width.as_key()))
    }

    pub fn date_format(&self, length: FormatLength) -> Result<&'a str> {
        self.bundle
            .text(&format!("dateFormat-{}", length.as_key()))
    }

    pub fn time_format(&self, length: FormatLength) -> Result<&'a str> {
        self.bundle
            .text(&format!("timeFormat-{}", length.as_key()))
    }

    /// Pattern gluing a date (`{1}`) and a time (`{0}`).
    pub fn date_time_format(&self, length: FormatLength) -> Result<&'a str> {
        self.bundle
            .text(&format!("dateTimeFormat-{}", length.as_key()))
    }

    /// Pattern for a flexible skeleton such as `"yMEd"` or `"Hm"`.
    pub fn format_item(&self, skeleton: &str) -> Result<&'a str> {
        self.bundle.text(&format!("dateFormatItem-{skeleton}"))
    }

    /// Pattern appending a missing field (`"Era"`, `"Day-Of-Week"`, ...) to a skeleton match.
    pub fn append_item(&self, field: &str) -> Result<&'a str> {
        self.bundle
            .text(&format!("dateTimeFormats-appendItem-{field}"))
    }
}

/// Number symbols and number patterns in one locale.
#[derive(Debug, Clone, Copy)]
pub struct NumberSymbols<'a> {
    bundle: &'a ResourceBundle,
}

impl<'a> NumberSymbols<'a> {
    #[must_use]
    pub fn new(bundle: &'a ResourceBundle) -> Self {
        Self { bundle }
    }

    /// Any symbol by its raw key.
    pub fn symbol(&self, key: &str) -> Result<&'a str> {
        self.bundle.text(key)
    }

    pub fn decimal(&self) -> Result<&'a str> {
        self.symbol("decimal")
    }

    pub fn group(&self) -> Result<&'a str> {
        self.symbol("group")
    }

    pub fn list(&self) -> Result<&'a str> {
        self.symbol("list")
    }

    pub fn percent_sign(&self) -> Result<&'a str> {
        self.symbol("percentSign")
    }

    pub fn per_mille(&self) -> Result<&'a str> {
        self.symbol("perMille")
    }

    pub fn minus_sign(&self) -> Result<&'a str> {
        self.symbol("minusSign")
    }

    pub fn plus_sign(&self) -> Result<&'a str> {
        self.symbol("plusSign")
    }

    pub fn exponential(&self) -> Result<&'a str> {
        self.symbol("exponential")
    }

    pub fn infinity(&self) -> Result<&'a str> {
        self.symbol("infinity")
    }

    pub fn nan(&self) -> Result<&'a str> {
        self.symbol("nan")
    }

    pub fn decimal_format(&self) -> Result<&'a str> {
        self.symbol("decimalFormat")
    }

    pub fn percent_format(&self) -> Result<&'a str> {
        self.symbol("percentFormat")
    }

    /// Currency pattern; `¤` marks the currency symbol position.
    pub fn currency_format(&self) -> Result<&'a str> {
        self.symbol("currencyFormat")
    }

    pub fn scientific_format(&self) -> Result<&'a str> {
        self.symbol("scientificFormat")
    }
}

/// Messages shown by validating form inputs.
#[derive(Debug, Clone, Copy)]
pub struct ValidationMessages<'a> {
    bundle: &'a ResourceBundle,
}

impl<'a> ValidationMessages<'a> {
    #[must_use]
    pub fn new(bundle: &'a ResourceBundle) -> Self {
        Self { bundle }
    }

    /// The value does not parse or match the input's constraints.
    pub fn invalid(&self) -> Result<&'a str> {
        self.bundle.text("invalidMessage")
    }

    /// A required value is empty.
    pub fn missing(&self) -> Result<&'a str> {
        self.bundle.text("missingMessage")
    }

    /// The value lies outside the allowed range.
    pub fn range(&self) -> Result<&'a str> {
        self.bundle.text("rangeMessage")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocaleError;
    use crate::value::Value;

    fn gregorian() -> ResourceBundle {
        ResourceBundle::new(
            "gregorian",
            "xx",
            [
                (
                    "months-standAlone-narrow",
                    Value::from(["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]),
                ),
                ("eraNarrow", Value::from(["B", "A"])),
                ("field-day-relative+-2", Value::from("two days ago")),
                ("dayPeriods-format-abbr-pm", Value::from("PM")),
                ("dateTimeFormat-short", Value::from("{1} {0}")),
                ("dateFormatItem-Hm", Value::from("HH.mm")),
            ],
        )
        .unwrap()
    }

    #[test]
    fn composed_keys() {
        let bundle = gregorian();
        let cal = CalendarNames::new(&bundle);
        assert_eq!(cal.month(Context::StandAlone, Width::Narrow, 11), Ok("12"));
        assert_eq!(cal.eras(Width::Narrow).unwrap().len(), 2);
        assert_eq!(cal.relative_day(-2), Ok("two days ago"));
        assert_eq!(cal.day_period(Width::Abbr, DayPeriod::Pm), Ok("PM"));
        assert_eq!(cal.date_time_format(FormatLength::Short), Ok("{1} {0}"));
        assert_eq!(cal.format_item("Hm"), Ok("HH.mm"));
    }

    #[test]
    fn absent_width_reports_composed_key() {
        let bundle = gregorian();
        let cal = CalendarNames::new(&bundle);
        assert_eq!(
            cal.months(Context::Format, Width::Wide),
            Err(LocaleError::MissingKey {
                namespace: "gregorian".into(),
                locale: "xx".into(),
                key: "months-format-wide".into(),
            })
        );
    }

    #[test]
    fn month_index_out_of_range() {
        let bundle = gregorian();
        let cal = CalendarNames::new(&bundle);
        assert!(matches!(
            cal.month(Context::StandAlone, Width::Narrow, 12),
            Err(LocaleError::IndexOutOfRange { index: 12, len: 12, .. })
        ));
    }

    #[test]
    fn number_symbol_by_raw_key() {
        let bundle = ResourceBundle::new(
            "number",
            "xx",
            [("currencySpacing-afterCurrency-insertBetween", " ")],
        )
        .unwrap();
        let symbols = NumberSymbols::new(&bundle);
        assert_eq!(
            symbols.symbol("currencySpacing-afterCurrency-insertBetween"),
            Ok(" ")
        );
        assert!(symbols.decimal().is_err());
    }
}
