use super::statement::Block;
use super::{Ident, NodeId};
use crate::span::Span;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expression {
    pub id: NodeId,
    pub kind: ExpressionKind,
    pub span: Span,
}

impl Expression {
    pub fn new(id: NodeId, kind: ExpressionKind, span: Span) -> Self {
        Expression { id, kind, span }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExpressionKind {
    Identifier(String),
    Literal(Literal),
    This,
    Super,
    Template(TemplateLiteral),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
    Prefix(PrefixOp, Box<Expression>),
    Postfix(PostfixOp, Box<Expression>),
    Conditional(Box<Expression>, Box<Expression>, Box<Expression>),
    Call(Box<Expression>, Vec<Expression>),
    New(Box<Expression>, Vec<Expression>),
    Member(Box<Expression>, Ident),
    Index(Box<Expression>, Box<Expression>),
    Array(Vec<Expression>),
    Object(Vec<ObjectProperty>),
    Function(FunctionExpression),
    Arrow(ArrowFunction),
    Parenthesized(Box<Expression>),
    /// `<T>expr` — type-only, the inner expression passes through.
    TypeAssertion(Box<Expression>),
    /// `expr as T` — type-only, the inner expression passes through.
    AsCast(Box<Expression>),
}

/// Literal leaves keep the textual form the front-end produced; numeric
/// and string text is reproduced verbatim in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    True,
    False,
    Number(String),
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Equal,
    StrictEqual,
    NotEqual,
    StrictNotEqual,
    And,
    Or,
    BitwiseAnd,
    BitwiseOr,
    Assign,
    AddAssign,
    SubtractAssign,
}

impl BinaryOp {
    /// Canonical Lua spelling for operators that lower one-to-one.
    /// Operators with structural lowerings (`bit.*`, compound assignment,
    /// type-driven `+`) are handled before this is consulted.
    pub fn lua_text(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThanOrEqual => ">=",
            BinaryOp::Equal | BinaryOp::StrictEqual => "==",
            BinaryOp::NotEqual | BinaryOp::StrictNotEqual => "~=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::BitwiseAnd => "&",
            BinaryOp::BitwiseOr => "|",
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::SubtractAssign => "-=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrefixOp {
    Not,
    Negate,
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostfixOp {
    Increment,
    Decrement,
}

/// `` `head${e1}t1${e2}t2` `` — a head text followed by expression/text
/// pairs, in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateLiteral {
    pub head: String,
    pub spans: Vec<TemplateSpan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSpan {
    pub expression: Expression,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub key: PropertyKey,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PropertyKey {
    Identifier(Ident),
    Str(String),
    Number(String),
    Computed(Box<Expression>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionExpression {
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowFunction {
    pub parameters: Vec<Parameter>,
    pub body: ArrowBody,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArrowBody {
    Expression(Box<Expression>),
    Block(Block),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: Ident,
    /// A visibility modifier on a constructor parameter declares a field
    /// of the same name, assigned from the parameter.
    pub visibility: Option<Visibility>,
    pub span: Span,
}
