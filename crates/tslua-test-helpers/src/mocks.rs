//! A programmable stand-in for the external type checker.

use rustc_hash::FxHashMap;
use tslua_core::ast::NodeId;
use tslua_core::types::{TypeChecker, TypeFacts};

/// A type answering exactly the facts set on it.
#[derive(Debug, Default, Clone)]
pub struct MockType {
    pub string: bool,
    pub string_literal: bool,
    pub object: bool,
    pub array: bool,
    pub tuple: bool,
    pub members_only_enum: bool,
    pub pure_abstract_class: bool,
    pub extension_class: bool,
    pub decorators: Vec<String>,
}

impl MockType {
    pub fn string() -> Self {
        MockType {
            string: true,
            ..Default::default()
        }
    }

    pub fn string_literal() -> Self {
        MockType {
            string_literal: true,
            ..Default::default()
        }
    }

    pub fn object() -> Self {
        MockType {
            object: true,
            ..Default::default()
        }
    }

    pub fn array() -> Self {
        MockType {
            array: true,
            ..Default::default()
        }
    }

    pub fn tuple() -> Self {
        MockType {
            tuple: true,
            ..Default::default()
        }
    }

    pub fn members_only_enum() -> Self {
        MockType {
            members_only_enum: true,
            ..Default::default()
        }
    }

    pub fn pure_abstract_class() -> Self {
        MockType {
            pure_abstract_class: true,
            ..Default::default()
        }
    }

    pub fn extension_class() -> Self {
        MockType {
            extension_class: true,
            ..Default::default()
        }
    }

    pub fn with_decorator(mut self, name: &str) -> Self {
        self.decorators.push(name.to_string());
        self
    }
}

impl TypeFacts for MockType {
    fn is_string(&self) -> bool {
        self.string
    }

    fn is_string_literal(&self) -> bool {
        self.string_literal
    }

    fn is_object(&self) -> bool {
        self.object
    }

    fn is_array(&self) -> bool {
        self.array
    }

    fn is_tuple(&self) -> bool {
        self.tuple
    }

    fn is_members_only_enum(&self) -> bool {
        self.members_only_enum
    }

    fn is_pure_abstract_class(&self) -> bool {
        self.pure_abstract_class
    }

    fn is_extension_class(&self) -> bool {
        self.extension_class
    }

    fn has_decorator(&self, name: &str) -> bool {
        self.decorators.iter().any(|d| d == name)
    }
}

/// Checker backed by a node-id table filled in by the test.
#[derive(Debug, Default)]
pub struct MockTypeChecker {
    types: FxHashMap<NodeId, MockType>,
}

impl MockTypeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, node: NodeId, facts: MockType) {
        self.types.insert(node, facts);
    }

    pub fn with(mut self, node: NodeId, facts: MockType) -> Self {
        self.set(node, facts);
        self
    }
}

impl TypeChecker for MockTypeChecker {
    fn type_of(&self, node: NodeId) -> Option<&dyn TypeFacts> {
        self.types.get(&node).map(|t| t as &dyn TypeFacts)
    }
}
