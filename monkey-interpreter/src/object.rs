use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hasher;
use std::rc::Rc;

use fnv::FnvHasher;
use gc::{Finalize, Gc, Trace};
use monkey_syntax::ast;
use thiserror::Error;

use crate::environment::Environment;

#[derive(Debug, PartialEq, Trace, Finalize)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Array(Vec<Gc<Object>>),
    Hash(HashMap<HashKey, (Gc<Object>, Gc<Object>)>),
    Function(Function),
    Builtin(Builtin),
    Null,
}

thread_local! {
    static NULL: Gc<Object> = Gc::new(Object::Null);
    static TRUE: Gc<Object> = Gc::new(Object::Boolean(true));
    static FALSE: Gc<Object> = Gc::new(Object::Boolean(false));
}

impl Object {
    pub fn null() -> Gc<Object> {
        NULL.with(|x| x.clone())
    }
    pub fn boolean(value: bool) -> Gc<Object> {
        if value {
            TRUE.with(|x| x.clone())
        } else {
            FALSE.with(|x| x.clone())
        }
    }
    pub fn integer(value: i64) -> Gc<Object> {
        Gc::new(Object::Integer(value))
    }
    pub fn string(value: String) -> Gc<Object> {
        Gc::new(Object::String(value))
    }
    pub fn array(elements: Vec<Gc<Object>>) -> Gc<Object> {
        Gc::new(Object::Array(elements))
    }
    pub fn hash(pairs: HashMap<HashKey, (Gc<Object>, Gc<Object>)>) -> Gc<Object> {
        Gc::new(Object::Hash(pairs))
    }
    pub fn function(
        parameters: Vec<ast::Identifier>,
        body: ast::BlockStatement,
        env: Environment,
    ) -> Gc<Object> {
        Gc::new(Object::Function(Function {
            parameters,
            body,
            env,
        }))
    }
    pub fn builtin(builtin: Builtin) -> Gc<Object> {
        Gc::new(Object::Builtin(builtin))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Null => "NULL",
        }
    }
}

// The REPL prints this form, so it is part of the public surface.
impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
            Object::Boolean(value) => write!(f, "{}", value),
            Object::String(value) => f.write_str(value),
            Object::Null => f.write_str("null"),
            Object::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Object::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.values().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Object::Function(function) => write!(f, "{}", function),
            Object::Builtin(_) => f.write_str("builtin function"),
        }
    }
}

/// The physical identity of a hash key: the hashable kind plus a 64-bit
/// digest. Integers hash to their own bits, booleans to 0 or 1, strings to
/// the FNV-1a digest of their bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Trace, Finalize)]
pub struct HashKey {
    kind: HashKind,
    value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Trace, Finalize)]
enum HashKind {
    Integer,
    Boolean,
    String,
}

pub fn object_to_key(object: &Gc<Object>) -> Result<HashKey, EvaluationError> {
    match object.as_ref() {
        Object::Integer(value) => Ok(HashKey {
            kind: HashKind::Integer,
            value: *value as u64,
        }),
        Object::Boolean(value) => Ok(HashKey {
            kind: HashKind::Boolean,
            value: *value as u64,
        }),
        Object::String(value) => {
            let mut hasher = FnvHasher::default();
            hasher.write(value.as_bytes());
            Ok(HashKey {
                kind: HashKind::String,
                value: hasher.finish(),
            })
        }
        other => Err(EvaluationError::UnusableHashKey(other.type_name())),
    }
}

#[derive(Trace, Finalize)]
pub struct Function {
    #[unsafe_ignore_trace]
    pub parameters: Vec<ast::Identifier>,
    #[unsafe_ignore_trace]
    pub body: ast::BlockStatement,
    pub env: Environment,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters
            && self.body == other.body
            && self.env.ptr_eq(&other.env)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("ptr", &(self as *const Function as usize))
            .finish()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fn({}) {}",
            self.parameters
                .iter()
                .map(|id| id.name.as_ref())
                .collect::<Box<[&str]>>()
                .join(", "),
            self.body
        )
    }
}

pub type BuiltinFn = fn(Vec<Gc<Object>>) -> Result<Gc<Object>, EvaluationError>;

#[derive(Clone, Trace, Finalize)]
pub struct Builtin {
    #[unsafe_ignore_trace]
    pub func: BuiltinFn,
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.func as usize == other.func as usize
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin")
            .field("ptr", &(self.func as usize))
            .finish()
    }
}

/// The `Err` side of every evaluation step. `return` and runtime errors
/// both unwind the walk through `?`; blocks pass them on untouched and the
/// call boundary unwraps `Return`.
#[derive(Debug, PartialEq)]
pub enum QuickReturn {
    Return(Gc<Object>),
    Error(EvaluationError),
}

impl From<EvaluationError> for QuickReturn {
    fn from(error: EvaluationError) -> Self {
        QuickReturn::Error(error)
    }
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvaluationError {
    #[error("identifier not found: {0}")]
    IdentifierNotFound(Rc<str>),
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: &'static str,
        operator: ast::InfixOperationKind,
        right: &'static str,
    },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        operator: ast::InfixOperationKind,
        right: &'static str,
    },
    #[error("unknown operator: {operator}{right}")]
    UnknownPrefixOperator {
        operator: ast::PrefixOperationKind,
        right: &'static str,
    },
    #[error("not a function: {0}")]
    NotAFunction(&'static str),
    #[error("index operator not supported: {0}")]
    IndexNotSupported(&'static str),
    #[error("unusable as hash key: {0}")]
    UnusableHashKey(&'static str),
    #[error("argument to `{builtin}` not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: &'static str,
    },
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongNumberOfArguments { got: usize, want: usize },
    #[error("division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_keys_are_content_based() {
        let hello1 = Object::string("Hello World".to_owned());
        let hello2 = Object::string("Hello World".to_owned());
        let diff1 = Object::string("My name is johnny".to_owned());
        let diff2 = Object::string("My name is johnny".to_owned());

        assert_eq!(
            object_to_key(&hello1).unwrap(),
            object_to_key(&hello2).unwrap()
        );
        assert_eq!(
            object_to_key(&diff1).unwrap(),
            object_to_key(&diff2).unwrap()
        );
        assert_ne!(
            object_to_key(&hello1).unwrap(),
            object_to_key(&diff1).unwrap()
        );
    }

    #[test]
    fn test_hash_keys_do_not_collide_across_kinds() {
        let one = Object::integer(1);
        let yes = Object::boolean(true);

        assert_ne!(object_to_key(&one).unwrap(), object_to_key(&yes).unwrap());
    }

    #[test]
    fn test_only_three_kinds_hash() {
        let array = Object::array(vec![]);
        assert_eq!(
            object_to_key(&array),
            Err(EvaluationError::UnusableHashKey("ARRAY"))
        );
        assert_eq!(
            object_to_key(&Object::null()),
            Err(EvaluationError::UnusableHashKey("NULL"))
        );
    }

    #[test]
    fn test_inspect_forms() {
        assert_eq!(Object::integer(-7).to_string(), "-7");
        assert_eq!(Object::boolean(true).to_string(), "true");
        assert_eq!(Object::string("foo bar".to_owned()).to_string(), "foo bar");
        assert_eq!(Object::null().to_string(), "null");
        assert_eq!(
            Object::array(vec![Object::integer(1), Object::integer(2)]).to_string(),
            "[1, 2]"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EvaluationError::IdentifierNotFound("foobar".into()).to_string(),
            "identifier not found: foobar"
        );
        assert_eq!(
            EvaluationError::TypeMismatch {
                left: "INTEGER",
                operator: ast::InfixOperationKind::Plus,
                right: "BOOLEAN",
            }
            .to_string(),
            "type mismatch: INTEGER + BOOLEAN"
        );
        assert_eq!(
            EvaluationError::UnknownPrefixOperator {
                operator: ast::PrefixOperationKind::Minus,
                right: "BOOLEAN",
            }
            .to_string(),
            "unknown operator: -BOOLEAN"
        );
        assert_eq!(
            EvaluationError::WrongNumberOfArguments { got: 2, want: 1 }.to_string(),
            "wrong number of arguments. got=2, want=1"
        );
    }
}
