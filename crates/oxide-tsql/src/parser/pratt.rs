//! Pratt binding powers for T-SQL operators.
//!
//! Scalar and boolean expressions are separate categories in T-SQL, so the
//! table is split: arithmetic and bitwise operators drive the scalar
//! climber; `NOT`, `AND` and `OR` drive the boolean climber. Comparisons are
//! consumed by the predicate parser and have no binding power here.

use crate::ast::{AssignmentKind, BinaryExpressionType, ComparisonType, UnaryExpressionType};
use crate::lexer::{Keyword, TokenKind};

/// Binding power of `OR`.
pub const OR_BP: (u8, u8) = (1, 2);
/// Binding power of `AND`.
pub const AND_BP: (u8, u8) = (3, 4);
/// Prefix binding power of `NOT`.
pub const NOT_BP: u8 = 5;
/// Prefix binding power of unary `+`, `-` and `~`.
pub const UNARY_BP: u8 = 13;
/// Binding power of the postfix `COLLATE` and `AT TIME ZONE` forms.
pub const POSTFIX_BP: u8 = 14;

/// Returns the infix binding power for a scalar binary operator.
///
/// Returns `(left_bp, right_bp)`; all scalar operators are left
/// associative.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Ampersand
        | TokenKind::Pipe
        | TokenKind::Caret
        | TokenKind::Concat => Some((9, 10)),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some((11, 12)),
        _ => None,
    }
}

/// Returns the binding power of a boolean connective.
#[must_use]
pub const fn boolean_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some(OR_BP),
        TokenKind::Keyword(Keyword::And) => Some(AND_BP),
        _ => None,
    }
}

/// Converts a token to a scalar binary operator.
#[must_use]
pub const fn token_to_binary_op(kind: &TokenKind) -> Option<BinaryExpressionType> {
    match kind {
        TokenKind::Plus => Some(BinaryExpressionType::Add),
        TokenKind::Minus => Some(BinaryExpressionType::Subtract),
        TokenKind::Star => Some(BinaryExpressionType::Multiply),
        TokenKind::Slash => Some(BinaryExpressionType::Divide),
        TokenKind::Percent => Some(BinaryExpressionType::Modulo),
        TokenKind::Ampersand => Some(BinaryExpressionType::BitwiseAnd),
        TokenKind::Pipe => Some(BinaryExpressionType::BitwiseOr),
        TokenKind::Caret => Some(BinaryExpressionType::BitwiseXor),
        TokenKind::Concat => Some(BinaryExpressionType::Concatenate),
        _ => None,
    }
}

/// Converts a token to a scalar unary operator.
#[must_use]
pub const fn token_to_unary_op(kind: &TokenKind) -> Option<UnaryExpressionType> {
    match kind {
        TokenKind::Plus => Some(UnaryExpressionType::Positive),
        TokenKind::Minus => Some(UnaryExpressionType::Negative),
        TokenKind::Tilde => Some(UnaryExpressionType::BitwiseNot),
        _ => None,
    }
}

/// Converts a token to a comparison operator.
#[must_use]
pub const fn token_to_comparison(kind: &TokenKind) -> Option<ComparisonType> {
    match kind {
        TokenKind::Eq => Some(ComparisonType::Equals),
        TokenKind::LtGt => Some(ComparisonType::NotEqualToBrackets),
        TokenKind::BangEq => Some(ComparisonType::NotEqualToExclamation),
        TokenKind::Lt => Some(ComparisonType::LessThan),
        TokenKind::Gt => Some(ComparisonType::GreaterThan),
        TokenKind::LtEq => Some(ComparisonType::LessThanOrEqualTo),
        TokenKind::GtEq => Some(ComparisonType::GreaterThanOrEqualTo),
        TokenKind::BangLt => Some(ComparisonType::NotLessThan),
        TokenKind::BangGt => Some(ComparisonType::NotGreaterThan),
        _ => None,
    }
}

/// Converts a token to an assignment operator (`=`, `+=`, …).
#[must_use]
pub const fn token_to_assignment(kind: &TokenKind) -> Option<AssignmentKind> {
    match kind {
        TokenKind::Eq => Some(AssignmentKind::Equals),
        TokenKind::PlusEq => Some(AssignmentKind::AddEquals),
        TokenKind::MinusEq => Some(AssignmentKind::SubtractEquals),
        TokenKind::StarEq => Some(AssignmentKind::MultiplyEquals),
        TokenKind::SlashEq => Some(AssignmentKind::DivideEquals),
        TokenKind::PercentEq => Some(AssignmentKind::ModEquals),
        TokenKind::AmpersandEq => Some(AssignmentKind::BitwiseAndEquals),
        TokenKind::PipeEq => Some(AssignmentKind::BitwiseOrEquals),
        TokenKind::CaretEq => Some(AssignmentKind::BitwiseXorEquals),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ordering() {
        let (or_l, _) = OR_BP;
        let (and_l, _) = AND_BP;
        let (add_l, _) = infix_binding_power(&TokenKind::Plus).unwrap();
        let (mul_l, _) = infix_binding_power(&TokenKind::Star).unwrap();

        assert!(or_l < and_l);
        assert!(and_l < NOT_BP);
        assert!(NOT_BP < add_l);
        assert!(add_l < mul_l);
        assert!(mul_l < UNARY_BP);
        assert!(UNARY_BP < POSTFIX_BP);
    }

    #[test]
    fn test_bitwise_shares_additive_level() {
        assert_eq!(
            infix_binding_power(&TokenKind::Ampersand),
            infix_binding_power(&TokenKind::Minus)
        );
        assert_eq!(
            infix_binding_power(&TokenKind::Concat),
            infix_binding_power(&TokenKind::Plus)
        );
    }

    #[test]
    fn test_left_associativity() {
        let (l, r) = infix_binding_power(&TokenKind::Minus).unwrap();
        assert!(l < r);
        let (l, r) = boolean_binding_power(&TokenKind::Keyword(Keyword::And)).unwrap();
        assert!(l < r);
    }

    #[test]
    fn test_operator_mapping() {
        assert_eq!(
            token_to_binary_op(&TokenKind::Percent),
            Some(BinaryExpressionType::Modulo)
        );
        assert_eq!(
            token_to_comparison(&TokenKind::BangLt),
            Some(ComparisonType::NotLessThan)
        );
        assert_eq!(
            token_to_unary_op(&TokenKind::Tilde),
            Some(UnaryExpressionType::BitwiseNot)
        );
        assert_eq!(
            token_to_assignment(&TokenKind::CaretEq),
            Some(AssignmentKind::BitwiseXorEquals)
        );
        assert_eq!(token_to_comparison(&TokenKind::Plus), None);
    }
}
