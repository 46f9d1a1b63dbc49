//! Locale tables for date formatting
//!
//! Month and weekday names for the languages the index page can be served
//! in. Lookup falls back to English for unknown language tags.

/// Localized month and weekday names
#[derive(Debug)]
pub struct Locale {
    /// BCP 47 language tag
    pub tag: &'static str,
    months_full: [&'static str; 12],
    months_abbrev: [&'static str; 12],
    weekdays_full: [&'static str; 7],
    weekdays_abbrev: [&'static str; 7],
}

/// Brazilian Portuguese
pub static PT_BR: Locale = Locale {
    tag: "pt-BR",
    months_full: [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ],
    months_abbrev: [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ],
    weekdays_full: [
        "domingo",
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
    ],
    weekdays_abbrev: ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"],
};

/// English
pub static EN: Locale = Locale {
    tag: "en",
    months_full: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_abbrev: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays_full: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    weekdays_abbrev: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
};

impl Locale {
    /// Look up a locale by language tag, falling back to English
    pub fn for_tag(tag: &str) -> &'static Locale {
        if tag.eq_ignore_ascii_case("pt-br") || tag.eq_ignore_ascii_case("pt") {
            &PT_BR
        } else {
            &EN
        }
    }

    /// Full month name, `month` is 1-based
    pub fn month_full(&self, month: u32) -> &'static str {
        self.months_full[month.saturating_sub(1) as usize % 12]
    }

    /// Abbreviated month name, `month` is 1-based
    pub fn month_abbrev(&self, month: u32) -> &'static str {
        self.months_abbrev[month.saturating_sub(1) as usize % 12]
    }

    /// Full weekday name, `weekday` counts days from Sunday
    pub fn weekday_full(&self, weekday: u32) -> &'static str {
        self.weekdays_full[weekday as usize % 7]
    }

    /// Abbreviated weekday name, `weekday` counts days from Sunday
    pub fn weekday_abbrev(&self, weekday: u32) -> &'static str {
        self.weekdays_abbrev[weekday as usize % 7]
    }
}
