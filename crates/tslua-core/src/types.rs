//! The seam between the emitter and the external type checker. The checker
//! is an opaque, idempotent oracle: the emitter may ask the same question
//! any number of times and must see a stable answer.

use crate::ast::NodeId;

/// Decorator that suppresses the reopen guard on subclasses of the
/// decorated class.
pub const NO_CLASS_OR: &str = "NoClassOr";

/// The facts the emitter may ask of a type. Everything defaults to `false`
/// so checker implementations only answer what they know.
pub trait TypeFacts {
    fn is_string(&self) -> bool {
        false
    }

    fn is_string_literal(&self) -> bool {
        false
    }

    fn is_object(&self) -> bool {
        false
    }

    fn is_array(&self) -> bool {
        false
    }

    fn is_tuple(&self) -> bool {
        false
    }

    /// Enum whose members lower to free-standing constants with no
    /// enclosing table at runtime.
    fn is_members_only_enum(&self) -> bool {
        false
    }

    /// Class with no runtime presence; `extends` clauses naming it are
    /// dropped.
    fn is_pure_abstract_class(&self) -> bool {
        false
    }

    /// Class whose declaration adds members to an existing prototype
    /// instead of creating a table of its own.
    fn is_extension_class(&self) -> bool {
        false
    }

    fn has_decorator(&self, _name: &str) -> bool {
        false
    }
}

/// Maps a node to its type. `None` means the checker has no information
/// for that node, equivalent to a type answering `false` to every query.
pub trait TypeChecker {
    fn type_of(&self, node: NodeId) -> Option<&dyn TypeFacts>;
}

/// A checker with no type information; every lookup comes back empty.
/// Useful for callers that only need the syntax-directed lowerings.
#[derive(Debug, Default, Clone, Copy)]
pub struct UntypedChecker;

impl TypeChecker for UntypedChecker {
    fn type_of(&self, _node: NodeId) -> Option<&dyn TypeFacts> {
        None
    }
}
