use monkey_interpreter::environment::Environment;
use monkey_interpreter::evaluator;
use monkey_syntax::lexer::Tokenizer;
use monkey_syntax::parser::Parser;

use crate::repl::printer;

pub fn execute(source: &str) {
    let tokenizer = Tokenizer::new(source);
    let mut parser = Parser::new(tokenizer);
    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(errors) => {
            eprintln!("parser errors:");
            for error in errors {
                eprintln!("\t{}", error);
            }
            return;
        }
    };

    let mut environment = Environment::new();
    printer::print(evaluator::eval_program(&program, &mut environment));
}
