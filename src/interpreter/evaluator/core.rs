use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{BinaryOperator, Expr, FunctionDef, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::eval_binary,
            environment::{Environment, SharedEnv},
            unary::eval_unary,
        },
        value::Value,
    },
};

/// The signal that unwinds evaluation.
///
/// `return` is ordinary control flow intercepted at the nearest call
/// boundary; everything else is a genuine error that aborts the current
/// run. Keeping both in one error channel lets `?` thread them through the
/// tree walk while the call site picks the returns back out.
#[derive(Debug)]
pub enum Unwind {
    /// A `return` statement in flight toward its call frame.
    Return {
        /// The returned value.
        value: Value,
        /// Line of the `return` keyword, for the escaped-to-top-level case.
        line:  usize,
    },
    /// A runtime error aborting the run.
    Failure(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(err: RuntimeError) -> Self {
        Self::Failure(err)
    }
}

/// Result type used inside the evaluator.
pub type EvalResult<T> = Result<T, Unwind>;

/// Owns all runtime state and walks statement forests.
///
/// The interpreter holds the global environment (created once), the
/// current-environment pointer threaded through blocks and calls, the
/// last-expression slot the interactive driver echoes, and every statement
/// forest it has ever executed — retention keeps the AST nodes behind live
/// function values valid for the interpreter's whole lifetime.
///
/// Program output goes through an injected writer so embedders and tests
/// can capture what `print` produces; the default is standard output.
pub struct Interpreter {
    globals:    SharedEnv,
    current:    SharedEnv,
    last_value: Option<Value>,
    programs:   Vec<Rc<Vec<Stmt>>>,
    out:        Box<dyn Write>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Creates an interpreter that prints to the given writer.
    #[must_use]
    pub fn with_output(out: Box<dyn Write>) -> Self {
        let globals = Environment::new();
        Self { current: Rc::clone(&globals),
               globals,
               last_value: None,
               programs: Vec::new(),
               out }
    }

    /// Executes a statement forest.
    ///
    /// The forest is retained for the interpreter's lifetime before any of
    /// it runs, so function values created from it can outlive this call
    /// (the interactive driver feeds many forests to one interpreter).
    ///
    /// # Errors
    /// The first runtime error aborts execution. A `return` that reaches
    /// the top level is reported as a runtime error at its keyword.
    pub fn interpret(&mut self, statements: Vec<Stmt>) -> Result<(), RuntimeError> {
        let program = Rc::new(statements);
        self.programs.push(Rc::clone(&program));

        for stmt in program.iter() {
            match self.execute(stmt) {
                Ok(()) => {},
                Err(Unwind::Return { line, .. }) => {
                    return Err(RuntimeError::ReturnOutsideFunction { line });
                },
                Err(Unwind::Failure(err)) => return Err(err),
            }
        }
        Ok(())
    }

    /// The value of the most recent expression statement, if any.
    ///
    /// Statements without an expression result (`print`, definitions,
    /// `assert`) clear the slot; the interactive driver echoes it when it
    /// is set and not `None`.
    #[must_use]
    pub const fn last_value(&self) -> Option<&Value> {
        self.last_value.as_ref()
    }

    /// Clears the last-expression slot before a fresh run.
    pub fn clear_last_value(&mut self) {
        self.last_value = None;
    }

    fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Expression { expr } => {
                let value = self.evaluate(expr)?;
                self.last_value = Some(value);
                Ok(())
            },
            Stmt::Print { expressions } => {
                for (index, expr) in expressions.iter().enumerate() {
                    let value = self.evaluate(expr)?;
                    if index > 0 {
                        let _ = write!(self.out, " ");
                    }
                    let _ = write!(self.out, "{value}");
                }
                let _ = writeln!(self.out);
                self.last_value = None;
                Ok(())
            },
            Stmt::Block { statements } => {
                let env = Environment::with_enclosing(Rc::clone(&self.current));
                self.execute_block(statements, env)
            },
            Stmt::If { condition,
                       then_branch,
                       elif_branches,
                       else_branch, } => {
                if self.evaluate(condition)?.is_truthy() {
                    return self.execute(then_branch);
                }
                for (elif_condition, branch) in elif_branches {
                    if self.evaluate(elif_condition)?.is_truthy() {
                        return self.execute(branch);
                    }
                }
                if let Some(branch) = else_branch {
                    return self.execute(branch);
                }
                Ok(())
            },
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            },
            Stmt::Function(def) => {
                self.current
                    .borrow_mut()
                    .define(&def.name, Value::Function(Rc::clone(def)));
                self.last_value = None;
                Ok(())
            },
            Stmt::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::None,
                };
                Err(Unwind::Return { value, line: *line })
            },
            Stmt::Assert { condition,
                           message,
                           line, } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.last_value = None;
                    return Ok(());
                }
                let rendered = match message {
                    Some(expr) => Some(self.evaluate(expr)?.to_string()),
                    None => None,
                };
                Err(RuntimeError::AssertionFailed { message: rendered,
                                                    line:    *line, }.into())
            },
        }
    }

    /// Runs `statements` with `env` as the current environment.
    ///
    /// The previous environment is restored on every exit path, including
    /// return unwinds and errors.
    fn execute_block(&mut self, statements: &[Stmt], env: SharedEnv) -> EvalResult<()> {
        let previous = Rc::clone(&self.current);
        self.current = env;

        let result = statements.iter().try_for_each(|stmt| self.execute(stmt));

        self.current = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => {
                self.current
                    .borrow()
                    .get(name)
                    .ok_or_else(|| {
                        Unwind::from(RuntimeError::UndefinedVariable { name: name.clone(),
                                                                       line: *line, })
                    })
            },
            Expr::Grouping { expr } => self.evaluate(expr),
            Expr::Unary { op, operand, line } => {
                let value = self.evaluate(operand)?;
                Ok(eval_unary(*op, &value, *line)?)
            },
            Expr::Binary { left, op, right, line } => match op {
                BinaryOperator::And => {
                    let left = self.evaluate(left)?;
                    if left.is_truthy() {
                        self.evaluate(right)
                    } else {
                        Ok(left)
                    }
                },
                BinaryOperator::Or => {
                    let left = self.evaluate(left)?;
                    if left.is_truthy() {
                        Ok(left)
                    } else {
                        self.evaluate(right)
                    }
                },
                _ => {
                    let left = self.evaluate(left)?;
                    let right = self.evaluate(right)?;
                    Ok(eval_binary(*op, &left, &right, *line)?)
                },
            },
            Expr::Assign { name, value, .. } => {
                let value = self.evaluate(value)?;
                Environment::assign(&self.current, name, value.clone());
                Ok(value)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => {
                let callee = self.evaluate(callee)?;

                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.evaluate(argument)?);
                }

                match callee {
                    Value::Function(def) => self.call_function(&def, args, *line),
                    _ => Err(RuntimeError::NotCallable { line: *line }.into()),
                }
            },
        }
    }

    /// Invokes a user-defined function.
    ///
    /// The call frame's parent is the *global* environment, not the
    /// caller's: calls are dynamic-global, there is no closure capture.
    /// Parameters bind to arguments in declaration order after an exact
    /// arity check. A `return` unwind is intercepted here; falling off the
    /// end of the body yields `None`.
    fn call_function(&mut self,
                     function: &Rc<FunctionDef>,
                     arguments: Vec<Value>,
                     line: usize)
                     -> EvalResult<Value> {
        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { expected: function.params.len(),
                                                     found:    arguments.len(),
                                                     line, }.into());
        }

        let env = Environment::with_enclosing(Rc::clone(&self.globals));
        for (param, argument) in function.params.iter().zip(arguments) {
            env.borrow_mut().define(param, argument);
        }

        match self.execute_block(&function.body, env) {
            Ok(()) => Ok(Value::None),
            Err(Unwind::Return { value, .. }) => Ok(value),
            Err(failure) => Err(failure),
        }
    }
}
