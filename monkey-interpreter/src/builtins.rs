use gc::Gc;

use crate::object::{Builtin, BuiltinFn, EvaluationError, Object};

fn builtin_len(args: Vec<Gc<Object>>) -> Result<Gc<Object>, EvaluationError> {
    if args.len() != 1 {
        return Err(EvaluationError::WrongNumberOfArguments {
            got: args.len(),
            want: 1,
        });
    }
    match args[0].as_ref() {
        // byte length, not code points
        Object::String(value) => Ok(Object::integer(value.len() as i64)),
        Object::Array(elements) => Ok(Object::integer(elements.len() as i64)),
        other => Err(EvaluationError::UnsupportedArgument {
            builtin: "len",
            got: other.type_name(),
        }),
    }
}

fn builtin_first(args: Vec<Gc<Object>>) -> Result<Gc<Object>, EvaluationError> {
    if args.len() != 1 {
        return Err(EvaluationError::WrongNumberOfArguments {
            got: args.len(),
            want: 1,
        });
    }
    match args[0].as_ref() {
        Object::Array(elements) => Ok(elements.first().cloned().unwrap_or_else(Object::null)),
        other => Err(EvaluationError::UnsupportedArgument {
            builtin: "first",
            got: other.type_name(),
        }),
    }
}

fn builtin_last(args: Vec<Gc<Object>>) -> Result<Gc<Object>, EvaluationError> {
    if args.len() != 1 {
        return Err(EvaluationError::WrongNumberOfArguments {
            got: args.len(),
            want: 1,
        });
    }
    match args[0].as_ref() {
        Object::Array(elements) => Ok(elements.last().cloned().unwrap_or_else(Object::null)),
        other => Err(EvaluationError::UnsupportedArgument {
            builtin: "last",
            got: other.type_name(),
        }),
    }
}

fn builtin_rest(args: Vec<Gc<Object>>) -> Result<Gc<Object>, EvaluationError> {
    if args.len() != 1 {
        return Err(EvaluationError::WrongNumberOfArguments {
            got: args.len(),
            want: 1,
        });
    }
    match args[0].as_ref() {
        Object::Array(elements) => {
            if elements.is_empty() {
                return Ok(Object::null());
            }
            Ok(Object::array(elements[1..].to_vec()))
        }
        other => Err(EvaluationError::UnsupportedArgument {
            builtin: "rest",
            got: other.type_name(),
        }),
    }
}

fn builtin_push(args: Vec<Gc<Object>>) -> Result<Gc<Object>, EvaluationError> {
    if args.len() != 2 {
        return Err(EvaluationError::WrongNumberOfArguments {
            got: args.len(),
            want: 2,
        });
    }
    match args[0].as_ref() {
        Object::Array(elements) => {
            let mut new_elements = elements.clone();
            new_elements.push(args[1].clone());
            Ok(Object::array(new_elements))
        }
        other => Err(EvaluationError::UnsupportedArgument {
            builtin: "push",
            got: other.type_name(),
        }),
    }
}

fn builtin_puts(args: Vec<Gc<Object>>) -> Result<Gc<Object>, EvaluationError> {
    for argument in &args {
        println!("{}", argument);
    }
    Ok(Object::null())
}

pub fn map_builtins(name: &str) -> Option<Builtin> {
    let func = match name {
        "len" => builtin_len as BuiltinFn,
        "first" => builtin_first,
        "last" => builtin_last,
        "rest" => builtin_rest,
        "push" => builtin_push,
        "puts" => builtin_puts,
        _ => return None,
    };
    Some(Builtin { func })
}
