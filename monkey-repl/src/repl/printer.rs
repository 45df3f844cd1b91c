use gc::Gc;
use monkey_interpreter::object::{EvaluationError, Object};

/// Null results stay silent; everything else prints its inspect form.
pub(crate) fn print(result: Result<Gc<Object>, EvaluationError>) {
    match result {
        Ok(object) => {
            if !matches!(object.as_ref(), Object::Null) {
                println!("{}", object);
            }
        }
        Err(error) => println!("ERROR: {}", error),
    }
}
