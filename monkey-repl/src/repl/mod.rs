pub(crate) mod printer;
mod reader;

use monkey_interpreter::environment::Environment;
use monkey_interpreter::evaluator;
use rustyline::DefaultEditor;

use reader::{ReadOutput, Reader};

/// Runs the interactive session. The environment persists across inputs, so
/// bindings from earlier lines stay visible.
pub fn start() {
    let rl = DefaultEditor::new().expect("could not open the terminal");
    let mut reader = Reader::new(rl);
    let mut environment = Environment::new();

    loop {
        match reader.read() {
            ReadOutput::Exit => break,
            ReadOutput::Clear => continue,
            ReadOutput::Value(program) => {
                printer::print(evaluator::eval_program(&program, &mut environment));
            }
        }
    }
}
