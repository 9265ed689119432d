//! Node constructors that mint fresh `NodeId`s, so tests can assemble
//! programs the way a front-end would.

use tslua_core::ast::expression::{
    ArrowBody, ArrowFunction, BinaryOp, Expression, ExpressionKind, FunctionExpression, Literal,
    Parameter, PostfixOp, PrefixOp, TemplateLiteral, TemplateSpan, Visibility,
};
use tslua_core::ast::statement::{
    ArrayBinding, ArrayBindingElement, BindingTarget, Block, ClassDeclaration, ClassMember,
    ConstructorDeclaration, EnumDeclaration, EnumMember, FieldDeclaration, ForInStatement,
    ForOfStatement, ForStatement, FunctionDeclaration, HeritageClause, IfStatement, ImportClause,
    ImportDeclaration, ImportSpecifier, MethodDeclaration, ReturnStatement, Statement,
    SwitchClause, SwitchStatement, VariableDeclarator, VariableStatement, WhileStatement,
};
use tslua_core::ast::{Ident, NodeId, Program, Spanned};
use tslua_core::span::Span;

#[derive(Debug, Default)]
pub struct AstBuilder {
    next_id: u32,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn expr(&mut self, kind: ExpressionKind) -> Expression {
        Expression::new(self.next_id(), kind, Span::default())
    }

    pub fn name(&self, text: &str) -> Ident {
        Spanned::new(text.to_string(), Span::default())
    }

    pub fn param(&self, name: &str) -> Parameter {
        Parameter {
            name: self.name(name),
            visibility: None,
            span: Span::default(),
        }
    }

    pub fn field_param(&self, name: &str) -> Parameter {
        Parameter {
            name: self.name(name),
            visibility: Some(Visibility::Public),
            span: Span::default(),
        }
    }

    pub fn block(&self, statements: Vec<Statement>) -> Block {
        Block {
            statements,
            span: Span::default(),
        }
    }

    pub fn program(&self, statements: Vec<Statement>) -> Program {
        Program::new(statements, Span::default())
    }

    // ----- expressions -----

    pub fn ident(&mut self, name: &str) -> Expression {
        let kind = ExpressionKind::Identifier(name.to_string());
        self.expr(kind)
    }

    pub fn num(&mut self, text: &str) -> Expression {
        self.expr(ExpressionKind::Literal(Literal::Number(text.to_string())))
    }

    pub fn str_lit(&mut self, text: &str) -> Expression {
        self.expr(ExpressionKind::Literal(Literal::Str(text.to_string())))
    }

    pub fn boolean(&mut self, value: bool) -> Expression {
        self.expr(ExpressionKind::Literal(if value {
            Literal::True
        } else {
            Literal::False
        }))
    }

    pub fn null(&mut self) -> Expression {
        self.expr(ExpressionKind::Literal(Literal::Null))
    }

    pub fn this(&mut self) -> Expression {
        self.expr(ExpressionKind::This)
    }

    pub fn super_(&mut self) -> Expression {
        self.expr(ExpressionKind::Super)
    }

    pub fn template(&mut self, head: &str, spans: Vec<(Expression, &str)>) -> Expression {
        let spans = spans
            .into_iter()
            .map(|(expression, text)| TemplateSpan {
                expression,
                text: text.to_string(),
            })
            .collect();
        self.expr(ExpressionKind::Template(TemplateLiteral {
            head: head.to_string(),
            spans,
        }))
    }

    pub fn bin(&mut self, op: BinaryOp, left: Expression, right: Expression) -> Expression {
        self.expr(ExpressionKind::Binary(op, Box::new(left), Box::new(right)))
    }

    pub fn prefix(&mut self, op: PrefixOp, operand: Expression) -> Expression {
        self.expr(ExpressionKind::Prefix(op, Box::new(operand)))
    }

    pub fn postfix(&mut self, op: PostfixOp, operand: Expression) -> Expression {
        self.expr(ExpressionKind::Postfix(op, Box::new(operand)))
    }

    pub fn cond(&mut self, c: Expression, a: Expression, b: Expression) -> Expression {
        self.expr(ExpressionKind::Conditional(
            Box::new(c),
            Box::new(a),
            Box::new(b),
        ))
    }

    pub fn call(&mut self, callee: Expression, args: Vec<Expression>) -> Expression {
        self.expr(ExpressionKind::Call(Box::new(callee), args))
    }

    pub fn new_expr(&mut self, callee: Expression, args: Vec<Expression>) -> Expression {
        self.expr(ExpressionKind::New(Box::new(callee), args))
    }

    pub fn member(&mut self, object: Expression, name: &str) -> Expression {
        let name = self.name(name);
        self.expr(ExpressionKind::Member(Box::new(object), name))
    }

    pub fn index(&mut self, object: Expression, index: Expression) -> Expression {
        self.expr(ExpressionKind::Index(Box::new(object), Box::new(index)))
    }

    pub fn array(&mut self, elements: Vec<Expression>) -> Expression {
        self.expr(ExpressionKind::Array(elements))
    }

    pub fn func_expr(&mut self, params: Vec<Parameter>, body: Block) -> Expression {
        self.expr(ExpressionKind::Function(FunctionExpression {
            parameters: params,
            body,
            span: Span::default(),
        }))
    }

    pub fn arrow_expr(&mut self, params: Vec<Parameter>, body: Expression) -> Expression {
        self.expr(ExpressionKind::Arrow(ArrowFunction {
            parameters: params,
            body: ArrowBody::Expression(Box::new(body)),
            span: Span::default(),
        }))
    }

    pub fn arrow_block(&mut self, params: Vec<Parameter>, body: Block) -> Expression {
        self.expr(ExpressionKind::Arrow(ArrowFunction {
            parameters: params,
            body: ArrowBody::Block(body),
            span: Span::default(),
        }))
    }

    pub fn paren(&mut self, inner: Expression) -> Expression {
        self.expr(ExpressionKind::Parenthesized(Box::new(inner)))
    }

    pub fn as_cast(&mut self, inner: Expression) -> Expression {
        self.expr(ExpressionKind::AsCast(Box::new(inner)))
    }

    pub fn type_assertion(&mut self, inner: Expression) -> Expression {
        self.expr(ExpressionKind::TypeAssertion(Box::new(inner)))
    }

    // ----- statements -----

    pub fn var(&mut self, name: &str, init: Expression) -> Statement {
        Statement::Variable(VariableStatement {
            declarations: vec![VariableDeclarator {
                target: BindingTarget::Identifier(self.name(name)),
                initializer: Some(init),
                span: Span::default(),
            }],
            declare: false,
            span: Span::default(),
        })
    }

    pub fn var_uninit(&mut self, name: &str) -> Statement {
        Statement::Variable(VariableStatement {
            declarations: vec![VariableDeclarator {
                target: BindingTarget::Identifier(self.name(name)),
                initializer: None,
                span: Span::default(),
            }],
            declare: false,
            span: Span::default(),
        })
    }

    /// `let [a, b, ...rest] = init` — `rest` optional.
    pub fn var_destructure(
        &mut self,
        names: &[&str],
        rest: Option<&str>,
        init: Expression,
    ) -> Statement {
        let mut elements: Vec<ArrayBindingElement> = names
            .iter()
            .map(|n| ArrayBindingElement::Binding(self.name(n)))
            .collect();
        if let Some(rest) = rest {
            elements.push(ArrayBindingElement::Rest(self.name(rest)));
        }
        Statement::Variable(VariableStatement {
            declarations: vec![VariableDeclarator {
                target: BindingTarget::Array(ArrayBinding {
                    elements,
                    span: Span::default(),
                }),
                initializer: Some(init),
                span: Span::default(),
            }],
            declare: false,
            span: Span::default(),
        })
    }

    pub fn expr_stmt(&mut self, expr: Expression) -> Statement {
        Statement::Expression(expr)
    }

    pub fn func_decl(&mut self, name: &str, params: Vec<Parameter>, body: Block) -> Statement {
        Statement::Function(FunctionDeclaration {
            name: self.name(name),
            parameters: params,
            body,
            declare: false,
            span: Span::default(),
        })
    }

    pub fn return_stmt(&mut self, value: Option<Expression>) -> Statement {
        Statement::Return(ReturnStatement {
            value,
            span: Span::default(),
        })
    }

    pub fn if_stmt(
        &mut self,
        condition: Expression,
        then_branch: Statement,
        else_branch: Option<Statement>,
    ) -> Statement {
        Statement::If(IfStatement {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
            span: Span::default(),
        })
    }

    pub fn while_stmt(&mut self, condition: Expression, body: Statement) -> Statement {
        Statement::While(WhileStatement {
            condition,
            body: Box::new(body),
            span: Span::default(),
        })
    }

    pub fn for_stmt(
        &mut self,
        init: Option<Statement>,
        condition: Option<Expression>,
        increment: Option<Expression>,
        body: Statement,
    ) -> Statement {
        Statement::For(Box::new(ForStatement {
            init,
            condition,
            increment,
            body: Box::new(body),
            span: Span::default(),
        }))
    }

    pub fn for_of(&mut self, binding: &str, iterable: Expression, body: Statement) -> Statement {
        Statement::ForOf(ForOfStatement {
            binding: self.name(binding),
            iterable,
            body: Box::new(body),
            span: Span::default(),
        })
    }

    pub fn for_in(&mut self, binding: &str, iterable: Expression, body: Statement) -> Statement {
        Statement::ForIn(ForInStatement {
            binding: self.name(binding),
            iterable,
            body: Box::new(body),
            span: Span::default(),
        })
    }

    pub fn switch(&mut self, discriminant: Expression, clauses: Vec<SwitchClause>) -> Statement {
        Statement::Switch(SwitchStatement {
            discriminant,
            clauses,
            span: Span::default(),
        })
    }

    pub fn case(&mut self, test: Expression, statements: Vec<Statement>) -> SwitchClause {
        SwitchClause {
            test: Some(test),
            statements,
            span: Span::default(),
        }
    }

    pub fn default_case(&mut self, statements: Vec<Statement>) -> SwitchClause {
        SwitchClause {
            test: None,
            statements,
            span: Span::default(),
        }
    }

    pub fn break_stmt(&mut self) -> Statement {
        Statement::Break(Span::default())
    }

    pub fn continue_stmt(&mut self) -> Statement {
        Statement::Continue(Span::default())
    }

    pub fn import_namespace(&mut self, binding: &str, source: &str) -> Statement {
        Statement::Import(ImportDeclaration {
            clause: ImportClause::Namespace(self.name(binding)),
            source: source.to_string(),
            span: Span::default(),
        })
    }

    pub fn import_named(&mut self, names: &[&str], source: &str) -> Statement {
        let specifiers = names
            .iter()
            .map(|n| ImportSpecifier {
                name: self.name(n),
                property_name: None,
                span: Span::default(),
            })
            .collect();
        Statement::Import(ImportDeclaration {
            clause: ImportClause::Named(specifiers),
            source: source.to_string(),
            span: Span::default(),
        })
    }

    pub fn import_renamed(&mut self, original: &str, local: &str, source: &str) -> Statement {
        Statement::Import(ImportDeclaration {
            clause: ImportClause::Named(vec![ImportSpecifier {
                name: self.name(local),
                property_name: Some(self.name(original)),
                span: Span::default(),
            }]),
            source: source.to_string(),
            span: Span::default(),
        })
    }

    // ----- class and enum pieces -----

    pub fn heritage(&mut self, name: &str) -> HeritageClause {
        HeritageClause {
            id: self.next_id(),
            name: self.name(name),
            span: Span::default(),
        }
    }

    pub fn class(
        &mut self,
        name: &str,
        heritage: Option<HeritageClause>,
        members: Vec<ClassMember>,
    ) -> (NodeId, Statement) {
        let id = self.next_id();
        let stmt = Statement::Class(ClassDeclaration {
            id,
            name: self.name(name),
            heritage,
            members,
            declare: false,
            span: Span::default(),
        });
        (id, stmt)
    }

    pub fn field(&mut self, name: &str, initializer: Option<Expression>) -> ClassMember {
        ClassMember::Field(FieldDeclaration {
            name: self.name(name),
            is_static: false,
            initializer,
            span: Span::default(),
        })
    }

    pub fn static_field(&mut self, name: &str, initializer: Option<Expression>) -> ClassMember {
        ClassMember::Field(FieldDeclaration {
            name: self.name(name),
            is_static: true,
            initializer,
            span: Span::default(),
        })
    }

    pub fn method(&mut self, name: &str, params: Vec<Parameter>, body: Block) -> ClassMember {
        ClassMember::Method(MethodDeclaration {
            name: self.name(name),
            parameters: params,
            body,
            span: Span::default(),
        })
    }

    pub fn constructor(&mut self, params: Vec<Parameter>, body: Block) -> ClassMember {
        ClassMember::Constructor(ConstructorDeclaration {
            parameters: params,
            body,
            span: Span::default(),
        })
    }

    pub fn enum_decl(&mut self, name: &str, members: Vec<EnumMember>) -> (NodeId, Statement) {
        let id = self.next_id();
        let stmt = Statement::Enum(EnumDeclaration {
            id,
            name: self.name(name),
            members,
            declare: false,
            span: Span::default(),
        });
        (id, stmt)
    }

    pub fn enum_member(&mut self, name: &str, initializer: Option<Expression>) -> EnumMember {
        EnumMember {
            name: self.name(name),
            initializer,
            span: Span::default(),
        }
    }
}
