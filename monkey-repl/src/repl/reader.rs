use monkey_syntax::ast::Program;
use monkey_syntax::lexer::Tokenizer;
use monkey_syntax::parser::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

const PROMPT: &str = ">> ";

pub enum ReadOutput {
    Exit,
    Clear,
    Value(Program),
}

pub struct Reader {
    rl: Editor<(), DefaultHistory>,
}

impl Reader {
    pub fn new(rl: Editor<(), DefaultHistory>) -> Self {
        Self { rl }
    }

    pub fn read(&mut self) -> ReadOutput {
        let readline = self.rl.readline(PROMPT);

        let line = match readline {
            Err(ReadlineError::Interrupted) => {
                return ReadOutput::Clear;
            }
            Err(ReadlineError::Eof) => {
                return ReadOutput::Exit;
            }
            Err(err) => {
                println!("error reading input: {:?}", err);
                return ReadOutput::Exit;
            }
            Ok(line) => {
                if line.trim().is_empty() {
                    return ReadOutput::Clear;
                }
                let _ = self.rl.add_history_entry(&line);
                line
            }
        };

        let tokenizer = Tokenizer::new(&line);
        let program = Parser::new(tokenizer).parse_program();

        match program {
            Ok(value) => ReadOutput::Value(value),
            Err(errors) => {
                println!("parser errors:");
                for error in errors {
                    println!("\t{}", error);
                }
                ReadOutput::Clear
            }
        }
    }
}
