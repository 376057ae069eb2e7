/// The closed set of operator tags understood by the evaluator.
///
/// Unary matrix transforms (`transpose`, `ref`, `inverse`, `rref`) are written
/// in prefix form, binary arithmetic (`*`, `-`, `+`) in infix form. The two
/// bracket tags only delimit groups and never reduce on their own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `(`
    OpenBracket,
    /// `transpose(...)`
    Transpose,
    /// `ref(...)`, row echelon form.
    Ref,
    /// `inverse(...)`
    Inverse,
    /// `rref(...)`, reduced row echelon form.
    Rref,
    /// `*`
    Multiplication,
    /// `-`
    Subtraction,
    /// `+`
    Addition,
    /// `)`
    ClosedBracket,
}

/// Precedence table. A lower rank binds tighter.
///
/// Subtraction sits one rank above addition rather than sharing it. A mixed
/// run of `+` and `-` therefore reduces in the order the stack machine
/// dictates, which is not always strictly left to right.
const PRECEDENCE: [(Operator, u8); 9] = [(Operator::OpenBracket, 0),
                                         (Operator::Transpose, 1),
                                         (Operator::Ref, 2),
                                         (Operator::Inverse, 3),
                                         (Operator::Rref, 4),
                                         (Operator::Multiplication, 5),
                                         (Operator::Subtraction, 6),
                                         (Operator::Addition, 7),
                                         (Operator::ClosedBracket, 8)];

/// Prefix keywords and the operators they name.
const KEYWORDS: [(&str, Operator); 4] = [("transpose", Operator::Transpose),
                                         ("ref", Operator::Ref),
                                         ("rref", Operator::Rref),
                                         ("inverse", Operator::Inverse)];

impl Operator {
    /// Returns the precedence rank of the operator.
    ///
    /// # Example
    /// ```
    /// use matrica::operator::Operator;
    ///
    /// assert!(Operator::Multiplication.rank() < Operator::Addition.rank());
    /// assert!(Operator::Transpose.rank() < Operator::Multiplication.rank());
    /// assert_eq!(Operator::ClosedBracket.rank(), 8);
    /// ```
    #[must_use]
    pub fn rank(self) -> u8 {
        PRECEDENCE.iter()
                  .find(|(op, _)| *op == self)
                  .map_or(u8::MAX, |(_, rank)| *rank)
    }

    /// Returns `true` when `self` binds strictly tighter than `other`.
    #[must_use]
    pub fn binds_tighter_than(self, other: Self) -> bool {
        self.rank() < other.rank()
    }

    /// Number of operands consumed when the operator reduces.
    ///
    /// Brackets report `0`; they are never applied to operands directly.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Transpose | Self::Ref | Self::Inverse | Self::Rref => 1,
            Self::Multiplication | Self::Subtraction | Self::Addition => 2,
            Self::OpenBracket | Self::ClosedBracket => 0,
        }
    }

    /// Resolves a prefix keyword such as `transpose` to its operator.
    ///
    /// # Example
    /// ```
    /// use matrica::operator::Operator;
    ///
    /// assert_eq!(Operator::from_keyword("rref"), Some(Operator::Rref));
    /// assert_eq!(Operator::from_keyword("det"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        KEYWORDS.iter()
                .find(|(keyword, _)| *keyword == word)
                .map(|(_, op)| *op)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::OpenBracket => "(",
            Self::Transpose => "transpose",
            Self::Ref => "ref",
            Self::Inverse => "inverse",
            Self::Rref => "rref",
            Self::Multiplication => "*",
            Self::Subtraction => "-",
            Self::Addition => "+",
            Self::ClosedBracket => ")",
        };
        write!(f, "{operator}")
    }
}
