//! # Operators
//!
//! Binary and unary operators with their JavaScript spelling and binding
//! strength. Higher precedence binds tighter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Precedence of the conditional operator, between assignment and `||`.
pub const CONDITIONAL_PRECEDENCE: u8 = 3;

/// Precedence of every unary operator.
pub const UNARY_PRECEDENCE: u8 = 14;

// =============================================================================
// BINARY
// =============================================================================

/// Binary operators, assignments included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    ShrU,
    Lt,
    Lte,
    Gt,
    Gte,
    InstanceOf,
    In,
    Eq,
    Neq,
    RefEq,
    RefNeq,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
    Comma,
    Asg,
    AsgAdd,
    AsgSub,
    AsgMul,
    AsgDiv,
    AsgMod,
    AsgShl,
    AsgShr,
    AsgShrU,
    AsgBitAnd,
    AsgBitOr,
    AsgBitXor,
}

impl BinaryOperator {
    /// JavaScript spelling.
    pub fn symbol(self) -> &'static str {
        use BinaryOperator::*;
        match self {
            Mul => "*",
            Div => "/",
            Mod => "%",
            Add => "+",
            Sub => "-",
            Shl => "<<",
            Shr => ">>",
            ShrU => ">>>",
            Lt => "<",
            Lte => "<=",
            Gt => ">",
            Gte => ">=",
            InstanceOf => "instanceof",
            In => "in",
            Eq => "==",
            Neq => "!=",
            RefEq => "===",
            RefNeq => "!==",
            BitAnd => "&",
            BitXor => "^",
            BitOr => "|",
            And => "&&",
            Or => "||",
            Comma => ",",
            Asg => "=",
            AsgAdd => "+=",
            AsgSub => "-=",
            AsgMul => "*=",
            AsgDiv => "/=",
            AsgMod => "%=",
            AsgShl => "<<=",
            AsgShr => ">>=",
            AsgShrU => ">>>=",
            AsgBitAnd => "&=",
            AsgBitOr => "|=",
            AsgBitXor => "^=",
        }
    }

    pub fn precedence(self) -> u8 {
        use BinaryOperator::*;
        match self {
            Mul | Div | Mod => 13,
            Add | Sub => 12,
            Shl | Shr | ShrU => 11,
            Lt | Lte | Gt | Gte | InstanceOf | In => 10,
            Eq | Neq | RefEq | RefNeq => 9,
            BitAnd => 8,
            BitXor => 7,
            BitOr => 6,
            And => 5,
            Or => 4,
            Asg | AsgAdd | AsgSub | AsgMul | AsgDiv | AsgMod | AsgShl | AsgShr | AsgShrU | AsgBitAnd
            | AsgBitOr | AsgBitXor => 2,
            Comma => 1,
        }
    }

    /// True for `=` and the compound assignments; their left operand is an lvalue.
    pub fn is_assignment(self) -> bool {
        self.precedence() == 2
    }

    /// Assignments group to the right, everything else to the left.
    pub fn is_left_associative(self) -> bool {
        !self.is_assignment()
    }

    /// True for operators spelled as words.
    pub fn is_keyword(self) -> bool {
        matches!(self, BinaryOperator::InstanceOf | BinaryOperator::In)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// UNARY
// =============================================================================

/// Prefix and postfix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    BitNot,
    Dec,
    Delete,
    Inc,
    Neg,
    Pos,
    Not,
    Typeof,
    Void,
}

impl UnaryOperator {
    pub fn symbol(self) -> &'static str {
        use UnaryOperator::*;
        match self {
            BitNot => "~",
            Dec => "--",
            Delete => "delete",
            Inc => "++",
            Neg => "-",
            Pos => "+",
            Not => "!",
            Typeof => "typeof",
            Void => "void",
        }
    }

    #[inline]
    pub fn precedence(self) -> u8 {
        UNARY_PRECEDENCE
    }

    /// True for operators that write their operand (`++`, `--`, `delete`).
    pub fn is_modifying(self) -> bool {
        matches!(self, UnaryOperator::Inc | UnaryOperator::Dec | UnaryOperator::Delete)
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, UnaryOperator::Delete | UnaryOperator::Typeof | UnaryOperator::Void)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// TESTS
// =============================================================================
