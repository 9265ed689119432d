use super::expression::{Expression, Parameter};
use super::{Ident, NodeId};
use crate::span::Span;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Statement {
    Variable(VariableStatement),
    Expression(Expression),
    Function(FunctionDeclaration),
    Return(ReturnStatement),
    If(IfStatement),
    While(WhileStatement),
    For(Box<ForStatement>),
    ForOf(ForOfStatement),
    ForIn(ForInStatement),
    Switch(SwitchStatement),
    Break(Span),
    Continue(Span),
    Class(ClassDeclaration),
    Enum(EnumDeclaration),
    Import(ImportDeclaration),
    Interface(InterfaceDeclaration),
    TypeAlias(TypeAliasDeclaration),
    Block(Block),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableStatement {
    pub declarations: Vec<VariableDeclarator>,
    /// `declare` statements are ambient and produce no output.
    pub declare: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub target: BindingTarget,
    pub initializer: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BindingTarget {
    Identifier(Ident),
    Array(ArrayBinding),
    /// Object destructuring is not lowered; it is rejected at emission.
    Object(Span),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayBinding {
    pub elements: Vec<ArrayBindingElement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArrayBindingElement {
    Binding(Ident),
    Rest(Ident),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: Ident,
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub declare: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

/// Three-clause `for (init; cond; inc)`. Only the restricted numeric shape
/// is lowered; anything else is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForStatement {
    pub init: Option<Statement>,
    pub condition: Option<Expression>,
    pub increment: Option<Expression>,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForOfStatement {
    pub binding: Ident,
    pub iterable: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForInStatement {
    pub binding: Ident,
    pub iterable: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub clauses: Vec<SwitchClause>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchClause {
    /// `Some` for a `case` value, `None` for the `default` clause.
    pub test: Option<Expression>,
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub id: NodeId,
    pub name: Ident,
    pub heritage: Option<HeritageClause>,
    pub members: Vec<ClassMember>,
    pub declare: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeritageClause {
    pub id: NodeId,
    pub name: Ident,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClassMember {
    Field(FieldDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub name: Ident,
    pub is_static: bool,
    pub initializer: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: Ident,
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDeclaration {
    pub id: NodeId,
    pub name: Ident,
    pub members: Vec<EnumMember>,
    pub declare: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: Ident,
    pub initializer: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub clause: ImportClause,
    pub source: String,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ImportClause {
    /// `import * as X from "m"`
    Namespace(Ident),
    /// `import { a, b } from "m"`
    Named(Vec<ImportSpecifier>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSpecifier {
    pub name: Ident,
    /// `import { a as b }` carries the original name here; renaming is
    /// rejected at emission.
    pub property_name: Option<Ident>,
    pub span: Span,
}

/// Type-only; erased during code generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceDeclaration {
    pub name: Ident,
    pub span: Span,
}

/// Type-only; erased during code generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeAliasDeclaration {
    pub name: Ident,
    pub span: Span,
}
