//! Generic `NAME [=] value` option lists.
//!
//! Every option family declares its kinds with a [`ValueShape`]; this
//! module turns the shape into a value parser so families only hand-write
//! their `Custom` options.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    GeneralOption, KeywordOptionValue, Literal, OnOffOptionValue, OptionKind,
    OptionState, OptionValue, QuantityOptionValue, ValueShape, ValueUnit,
};
use crate::lexer::{Keyword, Span, TokenKind};

/// Longest multi-word option name or enumerated value.
const MAX_OPTION_WORDS: usize = 3;

impl Parser<'_> {
    /// Returns the kind spelled by the longest run of words at the cursor
    /// without consuming anything.
    pub(super) fn peek_option_key<K: OptionKind>(&mut self) -> Option<(K, usize)> {
        let words = self.peek_words(MAX_OPTION_WORDS);
        (1..=words.len())
            .rev()
            .find_map(|len| K::from_word(&words[..len].join(" ")).map(|kind| (kind, len)))
    }

    /// Parses an option name of family `K`.
    pub(super) fn parse_option_key<K: OptionKind>(
        &mut self,
        family: &str,
    ) -> Result<(K, Span), ParseError> {
        let start = self.current.span;
        let Some((kind, len)) = self.peek_option_key::<K>() else {
            return Err(ParseError::unknown_option(family, &self.current));
        };
        for _ in 0..len {
            self.advance();
        }
        Ok((kind, self.span_from(start)))
    }

    /// Consumes the longest run of words that `lookup` recognises.
    pub(super) fn eat_multi_word<T>(&mut self, lookup: fn(&str) -> Option<T>) -> Option<T> {
        let words = self.peek_words(MAX_OPTION_WORDS + 1);
        let (value, len) = (1..=words.len())
            .rev()
            .find_map(|len| lookup(&words[..len].join(" ")).map(|value| (value, len)))?;
        for _ in 0..len {
            self.advance();
        }
        Some(value)
    }

    /// Reads up to `max` consecutive unquoted words starting at the cursor.
    fn peek_words(&mut self, max: usize) -> Vec<String> {
        let mut words = Vec::with_capacity(max);
        for n in 0..max {
            match self.peek_nth(n).word() {
                Some(word) => words.push(word.to_ascii_uppercase()),
                None => break,
            }
        }
        words
    }

    /// Parses one option whose value is described by its kind's shape.
    pub(super) fn parse_general_option<O: GeneralOption>(
        &mut self,
        family: &str,
    ) -> Result<O, ParseError> {
        let start = self.current.span;
        let (kind, _) = self.parse_option_key::<O::Kind>(family)?;
        let value = self.parse_option_value(kind.as_str(), kind.value_shape())?;
        Ok(O::new(kind, value, self.span_from(start)))
    }

    /// Parses `[=] value` for a shape; flags take no value.
    pub(super) fn parse_option_value(
        &mut self,
        option: &str,
        shape: ValueShape,
    ) -> Result<Option<OptionValue>, ParseError> {
        if shape == ValueShape::Flag {
            return Ok(None);
        }
        self.eat(&TokenKind::Eq);
        let start = self.current.span;
        let value = match shape {
            ValueShape::Flag => return Ok(None),
            ValueShape::OnOff => {
                let option_state = self.parse_option_state(option)?;
                OptionValue::OnOff(OnOffOptionValue {
                    option_state,
                    span: start,
                })
            }
            ValueShape::Integer => OptionValue::Literal(
                self.parse_integer_literal()
                    .map_err(|_| ParseError::invalid_value(option, &["integer"], &self.current))?,
            ),
            ValueShape::String => OptionValue::Literal(
                self.parse_string_literal()
                    .map_err(|_| ParseError::invalid_value(option, &["string"], &self.current))?,
            ),
            ValueShape::Literal => OptionValue::Literal(self.parse_option_literal()?),
            ValueShape::Identifier => OptionValue::Identifier(self.parse_identifier()?),
            ValueShape::Name => OptionValue::Name(self.parse_schema_object_name()?),
            ValueShape::Enumerated(words) => {
                OptionValue::Keyword(self.parse_enumerated_value(option, words)?)
            }
            ValueShape::Quantity => OptionValue::Quantity(self.parse_quantity()?),
            ValueShape::Custom => {
                return Err(ParseError::invalid_value(option, &["value"], &self.current));
            }
        };
        Ok(Some(value))
    }

    /// `ON` or `OFF`.
    pub(super) fn parse_option_state(&mut self, option: &str) -> Result<OptionState, ParseError> {
        if self.eat_keyword(Keyword::On) {
            Ok(OptionState::On)
        } else if self.eat_keyword(Keyword::Off) {
            Ok(OptionState::Off)
        } else {
            Err(ParseError::invalid_value(option, &["ON", "OFF"], &self.current))
        }
    }

    /// A literal, a signed number, or a bare word kept as an identifier
    /// literal.
    pub(super) fn parse_option_literal(&mut self) -> Result<Literal, ParseError> {
        if self.check_literal() || self.check(&TokenKind::Minus) || self.check(&TokenKind::Plus) {
            return self.parse_signed_literal();
        }
        self.parse_word_literal()
    }

    /// One of `words`, matched on the longest run of input words.
    pub(super) fn parse_enumerated_value(
        &mut self,
        option: &str,
        words: &[&str],
    ) -> Result<KeywordOptionValue, ParseError> {
        let start = self.current.span;
        let input = self.peek_words(MAX_OPTION_WORDS);
        let matched = (1..=input.len()).rev().find_map(|len| {
            let candidate = input[..len].join(" ");
            words
                .iter()
                .any(|w| w.eq_ignore_ascii_case(&candidate))
                .then_some((candidate, len))
        });
        let Some((value, len)) = matched else {
            return Err(ParseError::invalid_value(option, words, &self.current));
        };
        for _ in 0..len {
            self.advance();
        }
        Ok(KeywordOptionValue {
            value,
            span: self.span_from(start),
        })
    }

    /// `n [unit]` or a bare word such as `UNLIMITED`.
    pub(super) fn parse_quantity(&mut self) -> Result<QuantityOptionValue, ParseError> {
        let start = self.current.span;
        if self.current.word().is_some() {
            let quantity = self.parse_word_literal()?;
            return Ok(QuantityOptionValue {
                quantity,
                unit: None,
                span: start,
            });
        }
        let quantity = self.parse_signed_literal()?;
        let unit = if self.eat(&TokenKind::Percent) || self.eat_keyword(Keyword::Percent) {
            Some(ValueUnit::Percent)
        } else if let Some(unit) = self.current.word().and_then(ValueUnit::from_word_lenient) {
            self.advance();
            Some(unit)
        } else {
            None
        };
        Ok(QuantityOptionValue {
            quantity,
            unit,
            span: self.span_from(start),
        })
    }

    /// Parses `( option, … )` with `item`.
    pub(super) fn parse_option_list<T>(
        &mut self,
        item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        self.parse_parenthesized_list(item)
    }

    /// Parses an optional `WITH ( option, … )` clause.
    pub(super) fn parse_with_option_list<T>(
        &mut self,
        item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        if self.check_keyword(Keyword::With) && self.peek_is(1, &TokenKind::LeftParen) {
            self.advance();
            return self.parse_option_list(item);
        }
        Ok(Vec::new())
    }

    /// Parses an optional `WITH option, …` clause written without
    /// parentheses.
    pub(super) fn parse_with_bare_option_list<T>(
        &mut self,
        item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        if self.eat_keyword(Keyword::With) {
            if self.check(&TokenKind::LeftParen) {
                return self.parse_option_list(item);
            }
            return self.parse_comma_separated(item);
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::{ParseOptions, Parser};

    fn parser(sql: &str) -> Parser<'_> {
        Parser::new(sql, &ParseOptions::default())
    }

    #[test]
    fn test_longest_key_wins() {
        let mut p = parser("OPTIMIZE FOR UNKNOWN");
        let (kind, _) = p.parse_option_key::<OptimizerHintKind>("query hint").unwrap();
        assert_eq!(kind, OptimizerHintKind::OptimizeForUnknown);

        let mut p = parser("OPTIMIZE FOR (@a = 1)");
        let (kind, _) = p.parse_option_key::<OptimizerHintKind>("query hint").unwrap();
        assert_eq!(kind, OptimizerHintKind::OptimizeFor);
    }

    #[test]
    fn test_unknown_key() {
        let mut p = parser("BOGUS = 1");
        let err = p
            .parse_option_key::<DatabaseOptionKind>("database")
            .unwrap_err();
        assert_eq!(err.code.as_str(), "TSQL2003");
        assert!(err.message.contains("database"));
    }

    #[test]
    fn test_general_option_shapes() {
        let mut p = parser("AUTO_CLOSE ON");
        let option: GeneralDatabaseOption = p.parse_general_option("database").unwrap();
        assert_eq!(option.option_kind, DatabaseOptionKind::AutoClose);
        assert_eq!(
            option.value.unwrap().option_state(),
            Some(OptionState::On)
        );

        let mut p = parser("RECOVERY SIMPLE");
        let option: GeneralDatabaseOption = p.parse_general_option("database").unwrap();
        assert!(matches!(
            option.value,
            Some(OptionValue::Keyword(k)) if k.value == "SIMPLE"
        ));
    }

    #[test]
    fn test_quantity_units() {
        let mut p = parser("10 MB");
        let quantity = p.parse_quantity().unwrap();
        assert_eq!(quantity.quantity.value, "10");
        assert_eq!(quantity.unit, Some(ValueUnit::Mb));

        let mut p = parser("25%");
        assert_eq!(p.parse_quantity().unwrap().unit, Some(ValueUnit::Percent));

        let mut p = parser("UNLIMITED");
        let quantity = p.parse_quantity().unwrap();
        assert_eq!(quantity.quantity.literal_type, LiteralType::Identifier);
        assert_eq!(quantity.unit, None);
    }

    #[test]
    fn test_invalid_on_off_value() {
        let mut p = parser("AUTO_CLOSE = 5");
        let err = p
            .parse_general_option::<GeneralDatabaseOption>("database")
            .unwrap_err();
        assert_eq!(err.code.as_str(), "TSQL2004");
    }
}
