//! Intl
//!
//! Explicit formatting context: the message catalog plus money formatting.
//! Passed by reference into every derivation instead of living in global state.

mod catalog;
mod message;
mod money;

use std::collections::HashMap;

pub use catalog::{ids, DEFAULT_MESSAGES};
pub use message::{ArgValue, MessageArgs, MessageFormat, MessagePart};
pub use money::{currency_symbol, format_currency, format_number, MoneyAmount};

use crate::error::{ViewError, ViewResult};

/// Compiled messages for one locale
#[derive(Debug, Clone)]
pub struct Intl {
    locale: String,
    messages: HashMap<String, MessageFormat>,
}

impl Default for Intl {
    fn default() -> Self {
        Self::en()
    }
}

impl Intl {
    /// Built-in English catalog
    pub fn en() -> Self {
        let mut messages = HashMap::with_capacity(DEFAULT_MESSAGES.len());
        for (id, pattern) in DEFAULT_MESSAGES {
            match MessageFormat::parse(pattern) {
                Ok(format) => {
                    messages.insert(id.to_string(), format);
                }
                Err(e) => log::error!("built-in message `{}` is invalid: {}", id, e),
            }
        }
        Self {
            locale: "en".to_string(),
            messages,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Replace patterns by id, e.g. with a translated catalog
    pub fn with_messages<'a>(
        mut self,
        locale: impl Into<String>,
        overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> ViewResult<Self> {
        for (id, pattern) in overrides {
            let format = MessageFormat::parse(pattern).map_err(|source| ViewError::Message {
                id: id.to_string(),
                source,
            })?;
            self.messages.insert(id.to_string(), format);
        }
        self.locale = locale.into();
        Ok(self)
    }

    fn lookup(&self, id: &str) -> Option<&MessageFormat> {
        let format = self.messages.get(id);
        if format.is_none() {
            log::warn!("missing message `{}`", id);
        }
        format
    }

    /// Plain-text message with runs of whitespace collapsed
    pub fn format_message(&self, id: &str, args: &MessageArgs) -> String {
        match self.lookup(id) {
            Some(format) => collapse_whitespace(&format.format(args)),
            None => id.to_string(),
        }
    }

    /// Message split into text and rich placeholder parts
    pub fn format_parts(&self, id: &str, args: &MessageArgs) -> Vec<MessagePart> {
        match self.lookup(id) {
            Some(format) => format.format_parts(args),
            None => vec![MessagePart::Text(id.to_string())],
        }
    }

    pub fn format_currency(&self, amount: i64, currency: &str) -> String {
        format_currency(amount, currency)
    }

    /// Text after the emphasized amount, e.g. `USD / month`
    pub fn money_suffix(&self, money: &MoneyAmount) -> String {
        let args = MessageArgs::new()
            .with("currency", money.currency.to_uppercase())
            .with_opt("interval", money.interval.map(|i| i.as_str()));
        self.format_message(ids::MONEY_SUFFIX, &args)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interval;

    #[test]
    fn test_builtin_catalog_compiles() {
        let intl = Intl::en();
        for (id, _) in DEFAULT_MESSAGES {
            assert!(intl.messages.contains_key(*id), "{} failed to parse", id);
        }
    }

    #[test]
    fn test_unknown_id_renders_id() {
        let intl = Intl::en();
        assert_eq!(intl.format_message("No.Such.Message", &MessageArgs::new()), "No.Such.Message");
    }

    #[test]
    fn test_money_formatting() {
        let intl = Intl::en();
        let monthly = MoneyAmount::new(1000, "usd", Some(Interval::Month));
        assert_eq!(monthly.formatted_amount(), "$10");
        assert_eq!(intl.money_suffix(&monthly), "USD / month");
        let once = MoneyAmount::new(1050, "EUR", None);
        assert_eq!(once.formatted_amount(), "€10.50");
        assert_eq!(intl.money_suffix(&once), "EUR");
    }

    #[test]
    fn test_overrides_replace_patterns() {
        let intl = Intl::en()
            .with_messages("fr", [(ids::READ_MORE, "Lire la suite")])
            .unwrap();
        assert_eq!(intl.locale(), "fr");
        assert_eq!(intl.format_message(ids::READ_MORE, &MessageArgs::new()), "Lire la suite");
        assert_eq!(intl.format_message(ids::SETTINGS, &MessageArgs::new()), "Settings");
    }

    #[test]
    fn test_invalid_override_is_reported() {
        let err = Intl::en()
            .with_messages("fr", [(ids::READ_MORE, "{broken")])
            .unwrap_err();
        assert!(matches!(err, ViewError::Message { ref id, .. } if id == ids::READ_MORE));
    }
}
