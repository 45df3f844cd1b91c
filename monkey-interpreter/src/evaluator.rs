use std::collections::HashMap;

use gc::Gc;
use monkey_syntax::ast;
use monkey_syntax::ast::Expression;

use crate::builtins;
use crate::environment::Environment;
use crate::object::{object_to_key, EvaluationError, Function, Object, QuickReturn};

/// Evaluates a whole program. A terminal `return` is unwrapped here, so the
/// caller always sees an ordinary value or the first error.
pub fn eval_program(
    program: &ast::Program,
    environment: &mut Environment,
) -> Result<Gc<Object>, EvaluationError> {
    let mut output = Object::null();
    for statement in &program.statements {
        let result = eval_statement(statement, environment);

        match result {
            Err(QuickReturn::Return(value)) => return Ok(value),
            Err(QuickReturn::Error(error)) => return Err(error),
            Ok(object) => output = object,
        };
    }
    Ok(output)
}

fn eval_statement(
    statement: &ast::Statement,
    environment: &mut Environment,
) -> Result<Gc<Object>, QuickReturn> {
    match statement {
        ast::Statement::Expression(expression) => eval_expression(expression, environment),
        ast::Statement::Return(statement) => eval_return_statement(statement, environment),
        ast::Statement::Let(statement) => eval_let_statement(statement, environment),
    }
}

fn eval_let_statement(
    statement: &ast::LetStatement,
    environment: &mut Environment,
) -> Result<Gc<Object>, QuickReturn> {
    let value = eval_expression(&statement.value, environment)?;
    environment.set(&statement.identifier.name, value);
    Ok(Object::null())
}

fn eval_return_statement(
    statement: &ast::ReturnStatement,
    environment: &mut Environment,
) -> Result<Gc<Object>, QuickReturn> {
    let value = eval_expression(&statement.value, environment)?;
    Err(QuickReturn::Return(value))
}

fn eval_expression(
    expression: &Expression,
    environment: &mut Environment,
) -> Result<Gc<Object>, QuickReturn> {
    match expression {
        Expression::IntegerLiteral(value) => Ok(Object::integer(*value)),
        Expression::BooleanLiteral(value) => Ok(Object::boolean(*value)),
        Expression::StringLiteral(value) => Ok(Object::string(value.clone())),
        Expression::ArrayLiteral(array) => Ok(Object::array(
            array
                .iter()
                .map(|expression| eval_expression(expression, environment))
                .collect::<Result<Vec<_>, _>>()?,
        )),
        Expression::HashLiteral(literal) => {
            let mut pairs = HashMap::new();
            for (key_expression, value_expression) in literal {
                let key = eval_expression(key_expression, environment)?;
                let value = eval_expression(value_expression, environment)?;
                let hashed_key = object_to_key(&key)?;
                // duplicate keys: the last one wins
                pairs.insert(hashed_key, (key, value));
            }
            Ok(Object::hash(pairs))
        }
        Expression::Identifier(identifier) => match environment.get(&identifier.name) {
            Some(value) => Ok(value),
            None => match builtins::map_builtins(&identifier.name) {
                Some(builtin) => Ok(Object::builtin(builtin)),
                None => Err(QuickReturn::Error(EvaluationError::IdentifierNotFound(
                    identifier.name.clone(),
                ))),
            },
        },
        Expression::PrefixOperation(kind, expression) => {
            let right = eval_expression(expression, environment)?;
            eval_prefix_operation(kind, right)
        }
        Expression::InfixOperation(kind, left, right) => {
            let left = eval_expression(left, environment)?;
            let right = eval_expression(right, environment)?;
            eval_infix_operation(kind, left, right)
        }
        Expression::IfExpression {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expression(condition, environment)?;
            if is_truthy(&condition) {
                eval_block_statement(consequence, environment)
            } else if let Some(alternative) = alternative {
                eval_block_statement(alternative, environment)
            } else {
                Ok(Object::null())
            }
        }
        Expression::FunctionLiteral { parameters, body } => Ok(Object::function(
            parameters.clone(),
            body.clone(),
            environment.clone(),
        )),
        Expression::CallExpression {
            function,
            arguments,
        } => {
            let function = eval_expression(function, environment)?;
            let arguments = eval_expressions(arguments, environment)?;
            match function.as_ref() {
                Object::Function(function) => eval_call_function(function, arguments),
                Object::Builtin(builtin) => {
                    (builtin.func)(arguments).map_err(QuickReturn::Error)
                }
                other => Err(QuickReturn::Error(EvaluationError::NotAFunction(
                    other.type_name(),
                ))),
            }
        }
        Expression::IndexExpression { left, index } => {
            let left = eval_expression(left, environment)?;
            let index = eval_expression(index, environment)?;
            eval_index_expression(left, index)
        }
    }
}

fn eval_call_function(
    function: &Function,
    arguments: Vec<Gc<Object>>,
) -> Result<Gc<Object>, QuickReturn> {
    if function.parameters.len() != arguments.len() {
        return Err(QuickReturn::Error(EvaluationError::WrongNumberOfArguments {
            got: arguments.len(),
            want: function.parameters.len(),
        }));
    }
    let mut call_environment = Environment::new_enclosed(function.env.clone());
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        call_environment.set(&parameter.name, argument);
    }
    // a `return` unwinds no further than the call boundary
    match eval_block_statement(&function.body, &mut call_environment) {
        Err(QuickReturn::Return(value)) => Ok(value),
        other => other,
    }
}

fn eval_expressions(
    arguments: &[Expression],
    environment: &mut Environment,
) -> Result<Vec<Gc<Object>>, QuickReturn> {
    let mut result = Vec::new();
    for argument in arguments {
        result.push(eval_expression(argument, environment)?);
    }
    Ok(result)
}

fn eval_block_statement(
    block: &ast::BlockStatement,
    environment: &mut Environment,
) -> Result<Gc<Object>, QuickReturn> {
    // Unlike eval_program this does not unwrap `Return`, so `return`
    // propagates through nested blocks.
    let mut result = Object::null();
    for statement in &block.statements {
        result = eval_statement(statement, environment)?;
    }
    Ok(result)
}

// Everything except `false` and `null` is truthy.
fn is_truthy(object: &Object) -> bool {
    !matches!(object, Object::Boolean(false) | Object::Null)
}

fn eval_prefix_operation(
    kind: &ast::PrefixOperationKind,
    right: Gc<Object>,
) -> Result<Gc<Object>, QuickReturn> {
    match kind {
        ast::PrefixOperationKind::Bang => Ok(Object::boolean(!is_truthy(&right))),
        ast::PrefixOperationKind::Minus => match right.as_ref() {
            Object::Integer(value) => Ok(Object::integer(value.wrapping_neg())),
            other => Err(QuickReturn::Error(EvaluationError::UnknownPrefixOperator {
                operator: kind.clone(),
                right: other.type_name(),
            })),
        },
    }
}

fn eval_infix_operation(
    kind: &ast::InfixOperationKind,
    left: Gc<Object>,
    right: Gc<Object>,
) -> Result<Gc<Object>, QuickReturn> {
    use ast::InfixOperationKind;

    match (kind, left.as_ref(), right.as_ref()) {
        (_, Object::Integer(left), Object::Integer(right)) => {
            eval_integer_infix_operation(kind, *left, *right)
        }
        (InfixOperationKind::Plus, Object::String(left), Object::String(right)) => {
            Ok(Object::string(format!("{}{}", left, right)))
        }
        (InfixOperationKind::Equal, Object::Boolean(left), Object::Boolean(right)) => {
            Ok(Object::boolean(left == right))
        }
        (InfixOperationKind::NotEqual, Object::Boolean(left), Object::Boolean(right)) => {
            Ok(Object::boolean(left != right))
        }
        _ if left.type_name() != right.type_name() => {
            Err(QuickReturn::Error(EvaluationError::TypeMismatch {
                left: left.type_name(),
                operator: kind.clone(),
                right: right.type_name(),
            }))
        }
        _ => Err(QuickReturn::Error(EvaluationError::UnknownInfixOperator {
            left: left.type_name(),
            operator: kind.clone(),
            right: right.type_name(),
        })),
    }
}

// Arithmetic wraps on overflow; division truncates toward zero.
fn eval_integer_infix_operation(
    kind: &ast::InfixOperationKind,
    left: i64,
    right: i64,
) -> Result<Gc<Object>, QuickReturn> {
    use ast::InfixOperationKind::*;

    match kind {
        Plus => Ok(Object::integer(left.wrapping_add(right))),
        Minus => Ok(Object::integer(left.wrapping_sub(right))),
        Multiply => Ok(Object::integer(left.wrapping_mul(right))),
        Divide => {
            if right == 0 {
                return Err(QuickReturn::Error(EvaluationError::DivisionByZero));
            }
            Ok(Object::integer(left.wrapping_div(right)))
        }
        LessThan => Ok(Object::boolean(left < right)),
        GreaterThan => Ok(Object::boolean(left > right)),
        Equal => Ok(Object::boolean(left == right)),
        NotEqual => Ok(Object::boolean(left != right)),
    }
}

fn eval_index_expression(
    left: Gc<Object>,
    index: Gc<Object>,
) -> Result<Gc<Object>, QuickReturn> {
    match (left.as_ref(), index.as_ref()) {
        (Object::Array(elements), Object::Integer(idx)) => Ok(usize::try_from(*idx)
            .ok()
            .and_then(|idx| elements.get(idx).cloned())
            .unwrap_or_else(Object::null)),
        (Object::Hash(pairs), _) => {
            let key = object_to_key(&index)?;
            Ok(pairs
                .get(&key)
                .map(|(_, value)| value.clone())
                .unwrap_or_else(Object::null))
        }
        _ => Err(QuickReturn::Error(EvaluationError::IndexNotSupported(
            left.type_name(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use gc::Gc;
    use monkey_syntax::ast::{InfixOperationKind, PrefixOperationKind};
    use monkey_syntax::lexer::Tokenizer;
    use monkey_syntax::parser::Parser;

    use super::eval_program;
    use crate::environment::Environment;
    use crate::object::{EvaluationError, Object};

    fn evaluate(input: &str) -> Result<Gc<Object>, EvaluationError> {
        let tokenizer = Tokenizer::new(input);
        let mut parser = Parser::new(tokenizer);
        let ast = parser.parse_program().unwrap();
        eval_program(&ast, &mut Environment::new())
    }

    fn test_evaluation(inputs: Vec<(&str, Result<Gc<Object>, EvaluationError>)>) {
        for (input, output) in inputs {
            assert_eq!(evaluate(input), output, "input: {}", input);
        }
    }

    #[test]
    fn test_literals() {
        let inputs = vec![
            ("5;", Ok(Object::integer(5))),
            ("true;", Ok(Object::boolean(true))),
            ("false;", Ok(Object::boolean(false))),
            ("\"hello\";", Ok(Object::string("hello".to_owned()))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_prefix_operations() {
        let inputs = vec![
            ("-10;", Ok(Object::integer(-10))),
            ("--5;", Ok(Object::integer(5))),
            ("!true;", Ok(Object::boolean(false))),
            ("!false;", Ok(Object::boolean(true))),
            ("!!true;", Ok(Object::boolean(true))),
            // everything but false and null is truthy, zero included
            ("!5;", Ok(Object::boolean(false))),
            ("!0;", Ok(Object::boolean(false))),
            ("!!\"\";", Ok(Object::boolean(true))),
            (
                "-true;",
                Err(EvaluationError::UnknownPrefixOperator {
                    operator: PrefixOperationKind::Minus,
                    right: "BOOLEAN",
                }),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_integer_arithmetic() {
        let inputs = vec![
            ("5 + 5 + 5 + 5 - 10;", Ok(Object::integer(10))),
            ("2 * 2 * 2 * 2 * 2;", Ok(Object::integer(32))),
            ("-50 + 100 + -50;", Ok(Object::integer(0))),
            ("5 * 2 + 10;", Ok(Object::integer(20))),
            ("5 + 2 * 10;", Ok(Object::integer(25))),
            ("20 + 2 * -10;", Ok(Object::integer(0))),
            ("50 / 2 * 2 + 10;", Ok(Object::integer(60))),
            ("2 * (5 + 10);", Ok(Object::integer(30))),
            ("3 * 3 * 3 + 10;", Ok(Object::integer(37))),
            ("3 * (3 * 3) + 10;", Ok(Object::integer(37))),
            ("(5 + 10 * 2 + 15 / 3) * 2 + -10;", Ok(Object::integer(50))),
            // division truncates toward zero
            ("7 / 2;", Ok(Object::integer(3))),
            ("-7 / 2;", Ok(Object::integer(-3))),
            // overflow wraps
            (
                "9223372036854775807 + 1;",
                Ok(Object::integer(i64::MIN)),
            ),
            ("5 / 0;", Err(EvaluationError::DivisionByZero)),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_boolean_expressions() {
        let inputs = vec![
            ("1 < 2;", Ok(Object::boolean(true))),
            ("1 > 2;", Ok(Object::boolean(false))),
            ("1 == 1;", Ok(Object::boolean(true))),
            ("1 != 1;", Ok(Object::boolean(false))),
            ("1 == 2;", Ok(Object::boolean(false))),
            ("true == true;", Ok(Object::boolean(true))),
            ("false == false;", Ok(Object::boolean(true))),
            ("true == false;", Ok(Object::boolean(false))),
            ("true != false;", Ok(Object::boolean(true))),
            ("(1 < 2) == true;", Ok(Object::boolean(true))),
            ("(1 > 2) == true;", Ok(Object::boolean(false))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_strings() {
        let inputs = vec![
            (
                "\"Hello\" + \" \" + \"World!\";",
                Ok(Object::string("Hello World!".to_owned())),
            ),
            (
                "\"foo\" - \"bar\";",
                Err(EvaluationError::UnknownInfixOperator {
                    left: "STRING",
                    operator: InfixOperationKind::Minus,
                    right: "STRING",
                }),
            ),
            // only + is defined on strings
            (
                "\"a\" == \"a\";",
                Err(EvaluationError::UnknownInfixOperator {
                    left: "STRING",
                    operator: InfixOperationKind::Equal,
                    right: "STRING",
                }),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_conditionals() {
        let inputs = vec![
            ("if (true) { 10 };", Ok(Object::integer(10))),
            ("if (false) { 10 };", Ok(Object::null())),
            ("if (1) { 10 };", Ok(Object::integer(10))),
            ("if (0) { 10 };", Ok(Object::integer(10))),
            ("if (\"\") { 10 };", Ok(Object::integer(10))),
            ("if (1 < 2) { 10 };", Ok(Object::integer(10))),
            ("if (1 > 2) { 10 };", Ok(Object::null())),
            ("if (1 > 2) { 10 } else { 20 };", Ok(Object::integer(20))),
            ("if (1 < 2) { 10 } else { 20 };", Ok(Object::integer(10))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_return_statements() {
        let inputs = vec![
            ("return 10;", Ok(Object::integer(10))),
            ("return 10; 9;", Ok(Object::integer(10))),
            ("return 2 * 5; 9;", Ok(Object::integer(10))),
            ("9; return 2 * 5; 9;", Ok(Object::integer(10))),
            (
                "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
                Ok(Object::integer(10)),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_error_propagation() {
        let int_plus_bool = EvaluationError::TypeMismatch {
            left: "INTEGER",
            operator: InfixOperationKind::Plus,
            right: "BOOLEAN",
        };
        let bool_plus_bool = EvaluationError::UnknownInfixOperator {
            left: "BOOLEAN",
            operator: InfixOperationKind::Plus,
            right: "BOOLEAN",
        };
        let inputs = vec![
            ("5 + true;", Err(int_plus_bool.clone())),
            ("5 + true; 5;", Err(int_plus_bool)),
            ("true + false;", Err(bool_plus_bool.clone())),
            ("5; true + false; 5;", Err(bool_plus_bool.clone())),
            (
                "if (10 > 1) { true + false; }",
                Err(bool_plus_bool),
            ),
            (
                "foobar;",
                Err(EvaluationError::IdentifierNotFound("foobar".into())),
            ),
            (
                "let x = foo;",
                Err(EvaluationError::IdentifierNotFound("foo".into())),
            ),
            (
                "[1, foo];",
                Err(EvaluationError::IdentifierNotFound("foo".into())),
            ),
            (
                "{\"a\": foo};",
                Err(EvaluationError::IdentifierNotFound("foo".into())),
            ),
            (
                "len(foo);",
                Err(EvaluationError::IdentifierNotFound("foo".into())),
            ),
            ("5(1);", Err(EvaluationError::NotAFunction("INTEGER"))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_let_statements() {
        let inputs = vec![
            ("let a = 5; a;", Ok(Object::integer(5))),
            ("let a = 5 * 5; a;", Ok(Object::integer(25))),
            ("let a = 5; let b = a; b;", Ok(Object::integer(5))),
            (
                "let a = 5; let b = a; let c = a + b + 5; c;",
                Ok(Object::integer(15)),
            ),
            // a let itself evaluates to null
            ("let a = 5;", Ok(Object::null())),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_function_application() {
        let inputs = vec![
            (
                "let identity = fn(x) { x }; identity(5);",
                Ok(Object::integer(5)),
            ),
            (
                "let identity = fn(x) { return x; }; identity(5);",
                Ok(Object::integer(5)),
            ),
            (
                "let double = fn(x) { x * 2 }; double(5);",
                Ok(Object::integer(10)),
            ),
            (
                "let add = fn(x, y) { x + y }; add(5, 5);",
                Ok(Object::integer(10)),
            ),
            (
                "let add = fn(x, y) { x + y }; add(5 + 5, add(5, 5));",
                Ok(Object::integer(20)),
            ),
            ("fn(x) { x }(5)", Ok(Object::integer(5))),
            (
                "let factorial = fn(n) {
                    if (n < 2) { 1 }
                    else { factorial(n - 1) * n }
                };
                factorial(3);",
                Ok(Object::integer(6)),
            ),
            (
                "fn(x) { x }();",
                Err(EvaluationError::WrongNumberOfArguments { got: 0, want: 1 }),
            ),
            (
                "fn() { 1 }(2);",
                Err(EvaluationError::WrongNumberOfArguments { got: 1, want: 0 }),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_closures() {
        let inputs = vec![
            (
                "let newAdder = fn(x) { fn(y) { x + y }; };
                let addTwo = newAdder(2);
                addTwo(3);",
                Ok(Object::integer(5)),
            ),
            (
                "let func = fn(a) { fn(b) { a + b } };
                func(5)(10);",
                Ok(Object::integer(15)),
            ),
            (
                "let fa = fn() {
                    let x = 5;
                    let fb = fn() { x };
                    fb
                };
                let temp = fa();
                temp();",
                Ok(Object::integer(5)),
            ),
            (
                "let fa = fn() {
                    let x = 5;
                    let fb = fn() { fn() { x } };
                    fb
                };
                let temp = fa();
                let temp_ = temp();
                temp_();",
                Ok(Object::integer(5)),
            ),
            // closures over the same frame see bindings made after capture
            (
                "let fa = fn() {
                    let is_even = fn(x) {
                        if (x == 0) { true } else { is_odd(x - 1) }
                    };
                    let is_odd = fn(x) {
                        if (x == 0) { false } else { is_even(x - 1) }
                    };
                    is_even
                };
                let temp = fa();
                temp(3);",
                Ok(Object::boolean(false)),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_arrays() {
        let inputs = vec![
            (
                "[1, 2 * 2, 3 + 3];",
                Ok(Object::array(vec![
                    Object::integer(1),
                    Object::integer(4),
                    Object::integer(6),
                ])),
            ),
            ("[1, 2, 3][0];", Ok(Object::integer(1))),
            ("[1, 2, 3][1 + 1];", Ok(Object::integer(3))),
            ("let myArray = [1, 2, 3]; myArray[2];", Ok(Object::integer(3))),
            // out of range and negative indices are null, not errors
            ("[1, 2, 3][3];", Ok(Object::null())),
            ("[1, 2, 3][-1];", Ok(Object::null())),
            ("5[0];", Err(EvaluationError::IndexNotSupported("INTEGER"))),
            (
                "[1][\"a\"];",
                Err(EvaluationError::IndexNotSupported("ARRAY")),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_hash_literals_and_lookups() {
        let hash_source = "let two = \"two\";
            let h = {\"one\": 10 - 9, two: 1 + 1, \"thr\" + \"ee\": 6 / 2, 4: 4, true: 5, false: 6};";
        let lookups = vec![
            ("h[\"one\"];", Ok(Object::integer(1))),
            ("h[\"two\"];", Ok(Object::integer(2))),
            ("h[\"three\"];", Ok(Object::integer(3))),
            ("h[4];", Ok(Object::integer(4))),
            ("h[true];", Ok(Object::integer(5))),
            ("h[false];", Ok(Object::integer(6))),
            // missing keys are null, not errors
            ("h[\"four\"];", Ok(Object::null())),
        ];
        for (lookup, expected) in lookups {
            let input = format!("{} {}", hash_source, lookup);
            assert_eq!(evaluate(&input), expected, "input: {}", input);
        }

        let inputs = vec![
            ("{}[\"foo\"];", Ok(Object::null())),
            // duplicate keys: the last one wins
            ("{1: \"a\", 1: \"b\"}[1];", Ok(Object::string("b".to_owned()))),
            (
                "{\"name\": \"Monkey\"}[fn(x) { x }];",
                Err(EvaluationError::UnusableHashKey("FUNCTION")),
            ),
            (
                "{[1, 2]: \"no\"};",
                Err(EvaluationError::UnusableHashKey("ARRAY")),
            ),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_builtin_functions() {
        let inputs = vec![
            ("len(\"\");", Ok(Object::integer(0))),
            ("len(\"four\");", Ok(Object::integer(4))),
            ("len(\"hello world\");", Ok(Object::integer(11))),
            ("len(\"foo\" + \"bar\");", Ok(Object::integer(6))),
            // bytes, not code points
            ("len(\"héllo\");", Ok(Object::integer(6))),
            ("len([1, 2, 3]);", Ok(Object::integer(3))),
            (
                "len(1);",
                Err(EvaluationError::UnsupportedArgument {
                    builtin: "len",
                    got: "INTEGER",
                }),
            ),
            (
                "len(\"one\", \"two\");",
                Err(EvaluationError::WrongNumberOfArguments { got: 2, want: 1 }),
            ),
            ("first([1, 2]);", Ok(Object::integer(1))),
            ("last([1, 2]);", Ok(Object::integer(2))),
            (
                "rest([1, 2, 3]);",
                Ok(Object::array(vec![Object::integer(2), Object::integer(3)])),
            ),
            ("rest([]);", Ok(Object::null())),
            (
                "push([1], 2);",
                Ok(Object::array(vec![Object::integer(1), Object::integer(2)])),
            ),
            ("puts(\"hello\");", Ok(Object::null())),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_push_leaves_its_argument_alone() {
        let inputs = vec![
            ("let a = [1, 2]; push(a, 3); len(a);", Ok(Object::integer(2))),
            ("let a = [1, 2]; first(push(a, 3));", Ok(Object::integer(1))),
            ("first(push([], 9));", Ok(Object::integer(9))),
        ];

        test_evaluation(inputs);
    }

    #[test]
    fn test_higher_order_map() {
        let input = "let map = fn(arr, f) {
            let iter = fn(a, acc) {
                if (len(a) == 0) { acc }
                else { iter(rest(a), push(acc, f(first(a)))); }
            };
            iter(arr, []);
        };
        map([1, 2, 3], fn(x) { x * 2 });";

        assert_eq!(
            evaluate(input),
            Ok(Object::array(vec![
                Object::integer(2),
                Object::integer(4),
                Object::integer(6),
            ]))
        );
    }

    #[test]
    fn test_program_wide_flow() {
        let input =
            "let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };";

        assert_eq!(evaluate(input), Ok(Object::integer(10)));
    }

    #[test]
    fn test_function_inspect_form() {
        let result = evaluate("fn(x) { x + 2; };").unwrap();

        assert_eq!(result.to_string(), "fn(x) {\n  (x + 2);\n}");
    }

    #[test]
    fn test_builtin_inspect_form() {
        let result = evaluate("len;").unwrap();

        assert_eq!(result.to_string(), "builtin function");
    }
}
