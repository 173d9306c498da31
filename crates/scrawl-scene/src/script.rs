//! Scripting-layer contract -- instructions, operators, and the binding table.
//!
//! The event/scripting layer drives entities exclusively through named
//! bindings: **actions** (imperative, may mutate), **conditions** (boolean
//! predicates, side-effect free) and **expressions** (numeric reads). Each
//! binding is registered once at startup in an [`ExtensionRegistry`] under a
//! stable string identifier together with its positional parameter schema;
//! the evaluator holds the registry by reference and dispatches by id.
//! There is no global lookup table.
//!
//! Instruction parameters are positional and type-tagged ([`Param`]).
//! Numeric setup actions follow the scripting layer's comparison-and-modify
//! convention: a [`AssignOp`] operator plus an operand, supporting set, add,
//! subtract, multiply and divide semantics. Conditions carry a
//! [`Comparison`] operator instead.
//!
//! Malformed parameters never abort scene execution: accessors fall back to
//! neutral defaults and operators parse tolerantly.

use std::collections::BTreeMap;

use crate::images::ImageBank;
use crate::object::SceneObject;
use crate::SceneError;

// ---------------------------------------------------------------------------
// Param / Instruction
// ---------------------------------------------------------------------------

/// One positional, type-tagged instruction parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// A numeric operand.
    Number(f64),
    /// Free text (operator symbols, color strings, image names).
    Text(String),
    /// Names of objects the instruction applies to.
    Objects(Vec<String>),
}

/// One decoded scripting instruction: an ordered parameter list.
///
/// Accessors are tolerant: a missing or mistyped parameter reads as a
/// neutral default (`0.0`, `""`, empty list) rather than failing, matching
/// the scripting layer's general tolerance model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instruction {
    params: Vec<Param>,
}

impl Instruction {
    /// Build an instruction from its positional parameters.
    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }

    /// Numeric parameter at `index`, or `0.0`.
    pub fn number(&self, index: usize) -> f64 {
        match self.params.get(index) {
            Some(Param::Number(n)) => *n,
            _ => 0.0,
        }
    }

    /// Text parameter at `index`, or `""`.
    pub fn text(&self, index: usize) -> &str {
        match self.params.get(index) {
            Some(Param::Text(t)) => t,
            _ => "",
        }
    }

    /// Object-list parameter at `index`, or the empty list.
    pub fn objects(&self, index: usize) -> &[String] {
        match self.params.get(index) {
            Some(Param::Objects(names)) => names,
            _ => &[],
        }
    }

    /// Number of parameters supplied.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

// ---------------------------------------------------------------------------
// AssignOp
// ---------------------------------------------------------------------------

/// Assignment operator for numeric setup actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignOp {
    #[default]
    Set,
    Add,
    Sub,
    Mul,
    Div,
}

impl AssignOp {
    /// Parse an operator symbol; anything unrecognized reads as [`Set`](Self::Set).
    pub fn parse(symbol: &str) -> Self {
        match symbol.trim() {
            "+" => AssignOp::Add,
            "-" => AssignOp::Sub,
            "*" => AssignOp::Mul,
            "/" => AssignOp::Div,
            _ => AssignOp::Set,
        }
    }

    /// Combine the current value with the operand.
    ///
    /// Division by zero leaves the current value unchanged instead of
    /// producing a non-finite result.
    pub fn apply(self, current: f64, operand: f64) -> f64 {
        match self {
            AssignOp::Set => operand,
            AssignOp::Add => current + operand,
            AssignOp::Sub => current - operand,
            AssignOp::Mul => current * operand,
            AssignOp::Div => {
                if operand == 0.0 {
                    current
                } else {
                    current / operand
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Comparison operator for conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    #[default]
    Equal,
    NotEqual,
    Lower,
    Greater,
    LowerOrEqual,
    GreaterOrEqual,
}

impl Comparison {
    /// Parse a comparison symbol (ASCII or the Unicode forms); anything
    /// unrecognized reads as [`Equal`](Self::Equal).
    pub fn parse(symbol: &str) -> Self {
        match symbol.trim() {
            "!=" | "\u{2260}" => Comparison::NotEqual,
            "<" => Comparison::Lower,
            ">" => Comparison::Greater,
            "<=" | "\u{2264}" => Comparison::LowerOrEqual,
            ">=" | "\u{2265}" => Comparison::GreaterOrEqual,
            _ => Comparison::Equal,
        }
    }

    /// Evaluate `lhs <op> rhs`.
    pub fn evaluate(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::NotEqual => lhs != rhs,
            Comparison::Lower => lhs < rhs,
            Comparison::Greater => lhs > rhs,
            Comparison::LowerOrEqual => lhs <= rhs,
            Comparison::GreaterOrEqual => lhs >= rhs,
        }
    }
}

// ---------------------------------------------------------------------------
// ScriptContext
// ---------------------------------------------------------------------------

/// Per-frame runtime handle passed to every binding.
///
/// Carries the services bindings may touch besides their receiver object:
/// the scene's image bank and the elapsed time of the current frame (unused
/// by current bindings, reserved for animated styles).
pub struct ScriptContext<'a> {
    /// Named offscreen images owned by the scene.
    pub images: &'a mut ImageBank,
    /// Seconds elapsed since the previous frame.
    pub elapsed: f32,
}

// ---------------------------------------------------------------------------
// Handler types and descriptors
// ---------------------------------------------------------------------------

/// Parameter type tag for a binding's positional schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Text,
    Objects,
}

/// An action handler bound to a receiver object.
pub type ObjectActionFn = fn(&mut ScriptContext, &mut dyn SceneObject, &Instruction) -> bool;

/// An action handler with no receiver (registered in the same namespace).
pub type FreeActionFn = fn(&mut ScriptContext, &Instruction) -> bool;

/// A boolean predicate over a receiver object. Must not mutate.
pub type ConditionFn = fn(&ScriptContext, &dyn SceneObject, &Instruction) -> bool;

/// A numeric read over a receiver object. Must not mutate.
pub type ExpressionFn = fn(&ScriptContext, &dyn SceneObject, &Instruction) -> f64;

/// How an action is invoked.
#[derive(Clone, Copy)]
pub enum ActionHandler {
    /// Applies to each object the instruction concerns.
    Object(ObjectActionFn),
    /// Standalone utility with no receiver.
    Free(FreeActionFn),
}

/// A registered action: identifier, schema, handler.
pub struct ActionDescriptor {
    pub id: String,
    pub params: Vec<ParamKind>,
    pub handler: ActionHandler,
}

/// A registered condition.
pub struct ConditionDescriptor {
    pub id: String,
    pub params: Vec<ParamKind>,
    pub handler: ConditionFn,
}

/// A registered expression.
pub struct ExpressionDescriptor {
    pub id: String,
    pub params: Vec<ParamKind>,
    pub handler: ExpressionFn,
}

// ---------------------------------------------------------------------------
// ExtensionRegistry
// ---------------------------------------------------------------------------

/// The explicit binding table mapping identifier to operation descriptor.
///
/// Built once at startup by each extension's registration function, then
/// passed by reference to the scripting evaluator.
#[derive(Default)]
pub struct ExtensionRegistry {
    actions: BTreeMap<String, ActionDescriptor>,
    conditions: BTreeMap<String, ConditionDescriptor>,
    expressions: BTreeMap<String, ExpressionDescriptor>,
}

impl ExtensionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object-bound action.
    ///
    /// # Panics
    ///
    /// Panics if an action with the same identifier is already registered.
    pub fn register_action(&mut self, id: &str, params: Vec<ParamKind>, handler: ObjectActionFn) {
        self.insert_action(id, params, ActionHandler::Object(handler));
    }

    /// Register a free (receiver-less) action.
    ///
    /// # Panics
    ///
    /// Panics if an action with the same identifier is already registered.
    pub fn register_free_action(&mut self, id: &str, params: Vec<ParamKind>, handler: FreeActionFn) {
        self.insert_action(id, params, ActionHandler::Free(handler));
    }

    fn insert_action(&mut self, id: &str, params: Vec<ParamKind>, handler: ActionHandler) {
        assert!(
            !self.actions.contains_key(id),
            "duplicate action identifier: {id:?}"
        );
        self.actions.insert(
            id.to_owned(),
            ActionDescriptor {
                id: id.to_owned(),
                params,
                handler,
            },
        );
    }

    /// Register a condition.
    ///
    /// # Panics
    ///
    /// Panics if a condition with the same identifier is already registered.
    pub fn register_condition(&mut self, id: &str, params: Vec<ParamKind>, handler: ConditionFn) {
        assert!(
            !self.conditions.contains_key(id),
            "duplicate condition identifier: {id:?}"
        );
        self.conditions.insert(
            id.to_owned(),
            ConditionDescriptor {
                id: id.to_owned(),
                params,
                handler,
            },
        );
    }

    /// Register an expression.
    ///
    /// # Panics
    ///
    /// Panics if an expression with the same identifier is already registered.
    pub fn register_expression(&mut self, id: &str, params: Vec<ParamKind>, handler: ExpressionFn) {
        assert!(
            !self.expressions.contains_key(id),
            "duplicate expression identifier: {id:?}"
        );
        self.expressions.insert(
            id.to_owned(),
            ExpressionDescriptor {
                id: id.to_owned(),
                params,
                handler,
            },
        );
    }

    // -- dispatch ------------------------------------------------------------

    /// Invoke an action on a receiver object.
    ///
    /// Free actions registered under the same namespace simply ignore the
    /// receiver. Returns the action's success flag.
    pub fn run_action(
        &self,
        id: &str,
        ctx: &mut ScriptContext,
        object: &mut dyn SceneObject,
        instruction: &Instruction,
    ) -> Result<bool, SceneError> {
        let descriptor = self.actions.get(id).ok_or_else(|| SceneError::UnknownBinding {
            id: id.to_owned(),
        })?;
        Ok(match descriptor.handler {
            ActionHandler::Object(f) => f(ctx, object, instruction),
            ActionHandler::Free(f) => f(ctx, instruction),
        })
    }

    /// Invoke a free action (no receiver).
    ///
    /// Object-bound identifiers are reported as unknown here: without a
    /// receiver there is nothing valid to dispatch them on.
    pub fn run_free_action(
        &self,
        id: &str,
        ctx: &mut ScriptContext,
        instruction: &Instruction,
    ) -> Result<bool, SceneError> {
        match self.actions.get(id).map(|d| d.handler) {
            Some(ActionHandler::Free(f)) => Ok(f(ctx, instruction)),
            _ => Err(SceneError::UnknownBinding { id: id.to_owned() }),
        }
    }

    /// Evaluate a condition against a receiver object.
    pub fn eval_condition(
        &self,
        id: &str,
        ctx: &ScriptContext,
        object: &dyn SceneObject,
        instruction: &Instruction,
    ) -> Result<bool, SceneError> {
        let descriptor = self
            .conditions
            .get(id)
            .ok_or_else(|| SceneError::UnknownBinding { id: id.to_owned() })?;
        Ok((descriptor.handler)(ctx, object, instruction))
    }

    /// Evaluate an expression against a receiver object.
    pub fn eval_expression(
        &self,
        id: &str,
        ctx: &ScriptContext,
        object: &dyn SceneObject,
        instruction: &Instruction,
    ) -> Result<f64, SceneError> {
        let descriptor = self
            .expressions
            .get(id)
            .ok_or_else(|| SceneError::UnknownBinding { id: id.to_owned() })?;
        Ok((descriptor.handler)(ctx, object, instruction))
    }

    // -- introspection -------------------------------------------------------

    /// The registered action descriptor for `id`, if any.
    pub fn action(&self, id: &str) -> Option<&ActionDescriptor> {
        self.actions.get(id)
    }

    /// The registered condition descriptor for `id`, if any.
    pub fn condition(&self, id: &str) -> Option<&ConditionDescriptor> {
        self.conditions.get(id)
    }

    /// The registered expression descriptor for `id`, if any.
    pub fn expression(&self, id: &str) -> Option<&ExpressionDescriptor> {
        self.expressions.get(id)
    }

    /// Registered action identifiers, in sorted order.
    pub fn action_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.actions.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_op_semantics() {
        assert_eq!(AssignOp::parse("=").apply(10.0, 3.0), 3.0);
        assert_eq!(AssignOp::parse("+").apply(10.0, 3.0), 13.0);
        assert_eq!(AssignOp::parse("-").apply(10.0, 3.0), 7.0);
        assert_eq!(AssignOp::parse("*").apply(10.0, 3.0), 30.0);
        assert_eq!(AssignOp::parse("/").apply(10.0, 4.0), 2.5);
        // Unrecognized symbols fall back to plain assignment.
        assert_eq!(AssignOp::parse("??").apply(10.0, 3.0), 3.0);
    }

    #[test]
    fn division_by_zero_keeps_current_value() {
        assert_eq!(AssignOp::Div.apply(10.0, 0.0), 10.0);
    }

    #[test]
    fn comparison_semantics() {
        assert!(Comparison::parse(">=").evaluate(50.0, 50.0));
        assert!(!Comparison::parse(">=").evaluate(50.0, 51.0));
        assert!(Comparison::parse("<").evaluate(1.0, 2.0));
        assert!(Comparison::parse("!=").evaluate(1.0, 2.0));
        assert!(Comparison::parse("\u{2264}").evaluate(2.0, 2.0));
        // Unrecognized symbols fall back to equality.
        assert!(Comparison::parse("~").evaluate(2.0, 2.0));
    }

    #[test]
    fn instruction_accessors_are_tolerant() {
        let instr = Instruction::new(vec![
            Param::Number(4.5),
            Param::Text("+".to_owned()),
        ]);
        assert_eq!(instr.number(0), 4.5);
        assert_eq!(instr.text(1), "+");
        // Mistyped or missing parameters read as neutral defaults.
        assert_eq!(instr.text(0), "");
        assert_eq!(instr.number(7), 0.0);
        assert!(instr.objects(0).is_empty());
    }
}
