use super::{Operator, Token, TokenKind, SYMBOLS};
use std::fmt::{Display, Error, Formatter};

impl Token {
    /// Create a new token from the given text. The text is converted to uppercase.
    ///
    /// No checks are performed: any text is accepted, but only the texts recognized by
    /// `Token::kind` are meaningful to the rest of the pipeline.
    pub fn new(text: &str) -> Token {
        Token(text.to_ascii_uppercase())
    }

    /// The (uppercase) text of this token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Determine the role of this token, or `None` if the token is not recognized.
    ///
    /// A variable token is any non-empty run of ASCII letters and digits.
    pub fn kind(&self) -> Option<TokenKind> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some('('), None) => Some(TokenKind::OpenParen),
            (Some(')'), None) => Some(TokenKind::CloseParen),
            (Some(c), None) if SYMBOLS.contains(&c) => {
                Operator::from_symbol(c).map(TokenKind::Operator)
            }
            (Some(_), _) if self.0.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Some(TokenKind::Variable)
            }
            _ => None,
        }
    }

    /// True if this token is a variable name.
    pub fn is_variable(&self) -> bool {
        self.kind() == Some(TokenKind::Variable)
    }
}

impl From<Operator> for Token {
    fn from(operator: Operator) -> Self {
        Token(operator.symbol().to_string())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}

impl Operator {
    /// Find the operator written using the given symbol.
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '\'' => Some(Operator::Not),
            '*' => Some(Operator::And),
            '^' => Some(Operator::Xor),
            '+' => Some(Operator::Or),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Not => '\'',
            Operator::And => '*',
            Operator::Xor => '^',
            Operator::Or => '+',
        }
    }

    /// Binding strength of the operator. Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Not => 4,
            Operator::And => 3,
            Operator::Xor => 2,
            Operator::Or => 1,
        }
    }

    /// Negation is right-associative, all binary operators are left-associative.
    pub fn is_left_associative(&self) -> bool {
        !self.is_unary()
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Not)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.symbol())
    }
}
