//! Tree-walking interpreter.

use std::rc::Rc;

use crate::ast::{Ast, BinOp, BodyForm, NodeKind, UnaryOp};
use crate::environment::Environment;
use crate::error::{Flow, RuntimeError};
use crate::value::{FunctionData, Value};

/// Maximum interpreter recursion depth before a [`RuntimeError::stack_overflow`] is raised,
/// checked on every recursive `eval` call and on every function invocation.
const MAX_CALL_DEPTH: usize = 512;

pub struct Interpreter {
    depth: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn evaluate(&mut self, ast: &Ast, env: &Environment) -> Result<Value, RuntimeError> {
        let flow = self.eval(ast, env)?;
        flow.into_value(&ast.span)
    }

    fn eval(&mut self, node: &Ast, env: &Environment) -> Result<Flow, RuntimeError> {
        self.depth += 1;
        if self.depth > MAX_CALL_DEPTH {
            self.depth -= 1;
            return Err(RuntimeError::stack_overflow(node.span.clone()));
        }
        let result = self.eval_inner(node, env);
        self.depth -= 1;
        result
    }

    fn eval_inner(&mut self, node: &Ast, env: &Environment) -> Result<Flow, RuntimeError> {
        match &node.kind {
            NodeKind::Int(v) => Ok(Flow::Value(Value::Integer(*v))),
            NodeKind::Float(v) => Ok(Flow::Value(Value::Float(*v))),
            NodeKind::Str(s) => Ok(Flow::Value(Value::str(s.clone()))),
            NodeKind::List(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for elem in elements {
                    values.push(self.eval_value(elem, env)?);
                }
                Ok(Flow::Value(Value::list(values)))
            }
            NodeKind::VarAccess(name) => Ok(Flow::Value(env.lookup(name, &node.span)?)),
            NodeKind::VarAssign(name, expr) => {
                let value = self.eval_value(expr, env)?;
                env.define(name.clone(), value.clone());
                Ok(Flow::Value(value))
            }
            NodeKind::BinOp(lhs, op, rhs) => self.eval_binop(*op, lhs, rhs, env, &node.span),
            NodeKind::UnaryOp(op, operand) => self.eval_unary(*op, operand, env, &node.span),
            NodeKind::If { cases, else_branch } => self.eval_if(cases, else_branch, env),
            NodeKind::For {
                var_name,
                start,
                end,
                step,
                body,
                body_form,
            } => self.eval_for(var_name, start, end, step.as_deref(), body, *body_form, env),
            NodeKind::While {
                condition,
                body,
                body_form,
            } => self.eval_while(condition, body, *body_form, env),
            NodeKind::FuncDef {
                name,
                arg_names,
                body,
                is_expression,
            } => {
                let func = Value::Function(Rc::new(FunctionData {
                    name: name.clone(),
                    arg_names: arg_names.clone(),
                    body: Rc::new((**body).clone()),
                    captured_env: env.clone(),
                    is_expression: *is_expression,
                }));
                if let Some(name) = name {
                    env.define(name.clone(), func.clone());
                }
                Ok(Flow::Value(func))
            }
            NodeKind::Call { callee, args } => self.eval_call(callee, args, env, &node.span),
            NodeKind::Return(expr) => {
                let value = match expr {
                    Some(e) => self.eval_value(e, env)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            }
            NodeKind::Continue => Ok(Flow::Continue),
            NodeKind::Break => Ok(Flow::Break),
            NodeKind::StatementList(statements) => self.eval_statement_list(statements, env),
            NodeKind::Program(statements) => self.eval_program(statements, env),
        }
    }

    /// Evaluates `node` and requires the result be a plain value (used everywhere a
    /// `return`/`break`/`continue` escaping from a subexpression would be nonsensical, e.g. as an
    /// operand of a binary operator).
    fn eval_value(&mut self, node: &Ast, env: &Environment) -> Result<Value, RuntimeError> {
        let flow = self.eval(node, env)?;
        flow.into_value(&node.span)
    }

    fn eval_program(&mut self, statements: &[Ast], env: &Environment) -> Result<Flow, RuntimeError> {
        if statements.is_empty() {
            return Ok(Flow::Value(Value::Null));
        }
        if statements.len() == 1 {
            return self.eval(&statements[0], env);
        }
        let mut results = Vec::with_capacity(statements.len());
        for stmt in statements {
            let flow = self.eval(stmt, env)?;
            match flow {
                Flow::Value(v) => results.push(v),
                other => return Ok(other),
            }
        }
        Ok(Flow::Value(Value::list(results)))
    }

    /// Block-form body: statements run for effect, value discarded; yields `Null` unless a
    /// `Return`/`Break`/`Continue` escapes, in which case it propagates unchanged.
    fn eval_statement_list(&mut self, statements: &[Ast], env: &Environment) -> Result<Flow, RuntimeError> {
        for stmt in statements {
            let flow = self.eval(stmt, env)?;
            match flow {
                Flow::Value(_) => continue,
                other => return Ok(other),
            }
        }
        Ok(Flow::Value(Value::Null))
    }

    fn eval_binop(
        &mut self,
        op: BinOp,
        lhs: &Ast,
        rhs: &Ast,
        env: &Environment,
        span: &crate::position::Span,
    ) -> Result<Flow, RuntimeError> {
        // `and`/`or` short-circuit and never evaluate the right operand unnecessarily.
        if op == BinOp::And {
            let l = self.eval_value(lhs, env)?;
            if !l.is_truthy() {
                return Ok(Flow::Value(Value::bool_value(false)));
            }
            let r = self.eval_value(rhs, env)?;
            return Ok(Flow::Value(Value::bool_value(r.is_truthy())));
        }
        if op == BinOp::Or {
            let l = self.eval_value(lhs, env)?;
            if l.is_truthy() {
                return Ok(Flow::Value(Value::bool_value(true)));
            }
            let r = self.eval_value(rhs, env)?;
            return Ok(Flow::Value(Value::bool_value(r.is_truthy())));
        }

        let l = self.eval_value(lhs, env)?;
        let r = self.eval_value(rhs, env)?;
        crate::ops::apply_binop(op, l, r, span).map(Flow::Value)
    }

    fn eval_unary(
        &mut self,
        op: UnaryOp,
        operand: &Ast,
        env: &Environment,
        span: &crate::position::Span,
    ) -> Result<Flow, RuntimeError> {
        let v = self.eval_value(operand, env)?;
        crate::ops::apply_unary(op, v, span).map(Flow::Value)
    }

    fn eval_if(
        &mut self,
        cases: &[crate::ast::IfCase],
        else_branch: &Option<(Box<Ast>, BodyForm)>,
        env: &Environment,
    ) -> Result<Flow, RuntimeError> {
        for case in cases {
            let cond = self.eval_value(&case.condition, env)?;
            if cond.is_truthy() {
                return self.eval(&case.body, env);
            }
        }
        if let Some((body, _)) = else_branch {
            return self.eval(body, env);
        }
        Ok(Flow::Value(Value::Null))
    }

    #[allow(clippy::too_many_arguments)]
    fn eval_for(
        &mut self,
        var_name: &str,
        start: &Ast,
        end: &Ast,
        step: Option<&Ast>,
        body: &Ast,
        body_form: BodyForm,
        env: &Environment,
    ) -> Result<Flow, RuntimeError> {
        let start_val = numeric_value(self.eval_value(start, env)?, &start.span)?;
        let end_val = numeric_value(self.eval_value(end, env)?, &end.span)?;
        let step_val = match step {
            Some(s) => numeric_value(self.eval_value(s, env)?, &s.span)?,
            None => 1.0,
        };
        if step_val == 0.0 {
            return Err(RuntimeError::zero_step(body.span.clone()));
        }

        let loop_env = env.child();
        let mut collected = Vec::new();
        let mut current = start_val;
        loop {
            if step_val > 0.0 {
                if current >= end_val {
                    break;
                }
            } else if current <= end_val {
                break;
            }

            loop_env.define(var_name.to_string(), numeric_to_value(current));
            match self.eval(body, &loop_env)? {
                Flow::Value(v) => {
                    if body_form == BodyForm::Expression {
                        collected.push(v);
                    }
                }
                Flow::Break => break,
                Flow::Continue => {}
                signal @ Flow::Return(_) => return Ok(signal),
            }
            current += step_val;
        }

        if body_form == BodyForm::Expression {
            Ok(Flow::Value(Value::list(collected)))
        } else {
            Ok(Flow::Value(Value::Null))
        }
    }

    fn eval_while(
        &mut self,
        condition: &Ast,
        body: &Ast,
        body_form: BodyForm,
        env: &Environment,
    ) -> Result<Flow, RuntimeError> {
        let mut collected = Vec::new();
        loop {
            let cond = self.eval_value(condition, env)?;
            if !cond.is_truthy() {
                break;
            }
            match self.eval(body, env)? {
                Flow::Value(v) => {
                    if body_form == BodyForm::Expression {
                        collected.push(v);
                    }
                }
                Flow::Break => break,
                Flow::Continue => {}
                signal @ Flow::Return(_) => return Ok(signal),
            }
        }
        if body_form == BodyForm::Expression {
            Ok(Flow::Value(Value::list(collected)))
        } else {
            Ok(Flow::Value(Value::Null))
        }
    }

    fn eval_call(
        &mut self,
        callee: &Ast,
        args: &[Ast],
        env: &Environment,
        span: &crate::position::Span,
    ) -> Result<Flow, RuntimeError> {
        let callee_val = self.eval_value(callee, env)?;
        let mut arg_values = Vec::with_capacity(args.len());
        for a in args {
            arg_values.push(self.eval_value(a, env)?);
        }

        match callee_val {
            Value::NativeFunction { func, .. } => func(&arg_values, env, span).map(Flow::Value),
            Value::Function(f) => self.call_user_function(&f, arg_values, span),
            other => Err(RuntimeError::not_callable(&other, span.clone())),
        }
    }

    fn call_user_function(
        &mut self,
        f: &FunctionData,
        arg_values: Vec<Value>,
        span: &crate::position::Span,
    ) -> Result<Flow, RuntimeError> {
        if arg_values.len() != f.arg_names.len() {
            return Err(RuntimeError::arity_mismatch(f.arg_names.len(), arg_values.len(), span.clone()));
        }
        let call_env = f.captured_env.child();
        for (name, value) in f.arg_names.iter().zip(arg_values) {
            call_env.define(name.clone(), value);
        }

        self.depth += 1;
        if self.depth > MAX_CALL_DEPTH {
            self.depth -= 1;
            return Err(RuntimeError::stack_overflow(span.clone()));
        }
        let result = if f.is_expression {
            self.eval(&f.body, &call_env)
        } else {
            match self.eval(&f.body, &call_env)? {
                Flow::Return(v) => Ok(Flow::Value(v)),
                Flow::Value(_) => Ok(Flow::Value(Value::Null)),
                Flow::Break => Err(RuntimeError::signal_outside_construct("break", span.clone())),
                Flow::Continue => Err(RuntimeError::signal_outside_construct("continue", span.clone())),
            }
        };
        self.depth -= 1;
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric_value(v: Value, span: &crate::position::Span) -> Result<f64, RuntimeError> {
    match v {
        Value::Integer(n) => Ok(n as f64),
        Value::Float(f) => Ok(f),
        other => Err(RuntimeError::new(
            format!("expected a number, found {}", other.type_name()),
            span.clone(),
        )),
    }
}

fn numeric_to_value(n: f64) -> Value {
    if n.fract() == 0.0 {
        Value::Integer(n as i64)
    } else {
        Value::Float(n)
    }
}
