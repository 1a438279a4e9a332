use log::error;
use rustyline::{error::ReadlineError, DefaultEditor};

/// Front end the application talks to: questions in, notices out.
#[mockall::automock]
pub trait Console {
    /// Ask a question, `None` once the user closes the input.
    fn ask(&mut self, prompt: &str) -> Option<String>;
    fn show(&mut self, title: &str, message: &str);
}

pub struct RustylineConsole {
    editor: DefaultEditor,
}

impl RustylineConsole {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Console for RustylineConsole {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        // Only the last line of a prompt can be edited on
        let (header, question) = prompt.rsplit_once('\n').unwrap_or(("", prompt));
        if !header.is_empty() {
            println!("{}", header);
        }

        match self.editor.readline(&format!("{} ", question)) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Some(line)
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(e) => {
                error!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn show(&mut self, title: &str, message: &str) {
        println!("\n== {} ==\n{}\n", title, message.trim_end());
    }
}
