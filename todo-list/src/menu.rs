use crate::config::DisplayConfig;
use crate::input::{self, InputError};
use crate::repository::TodoRepository;
use crate::todo::{DESCRIPTION_MAX_LEN, TITLE_MAX_LEN, Todo};
use log::{info, warn};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Choice {
    Add,
    Delete,
    FindByIndex,
    PrintAll,
    Exit,
}

impl TryFrom<i64> for Choice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Choice::Add),
            2 => Ok(Choice::Delete),
            3 => Ok(Choice::FindByIndex),
            4 => Ok(Choice::PrintAll),
            5 => Ok(Choice::Exit),
            other => Err(other),
        }
    }
}

/// Interactive loop that owns the todo list for the lifetime of a session.
pub struct Menu<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    display: DisplayConfig,
    repository: TodoRepository,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(reader: R, writer: W, display: DisplayConfig) -> Self {
        Self {
            reader,
            writer,
            display,
            repository: TodoRepository::new(),
        }
    }

    pub fn repository(&self) -> &TodoRepository {
        &self.repository
    }

    /// Runs until the user exits or the menu choice cannot be read.
    ///
    /// Only failures to write to the console or to store a todo end the loop with an
    /// error; everything the user types wrong is reported and recovered from.
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("Starting todo menu");
        loop {
            self.show_menu()?;
            let choice = match input::read_number::<_, i64>(&mut self.reader) {
                Ok(choice) => choice,
                Err(e) => {
                    warn!("Unreadable menu choice: {}", e);
                    writeln!(self.writer, "Invalid input. Exiting.")?;
                    return Ok(());
                }
            };

            match Choice::try_from(choice) {
                Ok(Choice::Add) => self.add()?,
                Ok(Choice::Delete) => self.delete()?,
                Ok(Choice::FindByIndex) => self.find_by_index()?,
                Ok(Choice::PrintAll) => self.print_all()?,
                Ok(Choice::Exit) => {
                    let released = self.repository.clear();
                    info!("Exiting, released {} todos", released);
                    writeln!(self.writer, "Exiting program. bye!")?;
                    return Ok(());
                }
                Err(unknown) => {
                    warn!("Unknown menu choice {}", unknown);
                    writeln!(
                        self.writer,
                        "Oops! You select Invalid option. Please try again."
                    )?;
                }
            }
        }
    }

    fn show_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "------ TODO MENU ------")?;
        writeln!(self.writer, "1. Add Todo")?;
        writeln!(self.writer, "2. Delete Todo")?;
        writeln!(self.writer, "3. Find Todo by Index")?;
        writeln!(self.writer, "4. Print All Todos")?;
        writeln!(self.writer, "5. Exit")?;
        self.prompt("Please enter your choice: ")
    }

    fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    fn add(&mut self) -> anyhow::Result<()> {
        self.prompt("Enter Todo ID: ")?;
        let id = match input::read_number::<_, i32>(&mut self.reader) {
            Ok(id) => id,
            Err(e) => return self.reject(e),
        };

        self.prompt("Enter Title: ")?;
        let Ok(title) = input::read_line(&mut self.reader, TITLE_MAX_LEN) else {
            writeln!(self.writer, "Error reading title.")?;
            return Ok(());
        };

        self.prompt("Enter Description: ")?;
        let Ok(description) = input::read_line(&mut self.reader, DESCRIPTION_MAX_LEN) else {
            writeln!(self.writer, "Error reading description.")?;
            return Ok(());
        };

        if let Err(e) = self.repository.add(Todo::new(id, &title, &description)) {
            writeln!(self.writer, "No memory!")?;
            return Err(e.into());
        }
        Ok(())
    }

    fn delete(&mut self) -> anyhow::Result<()> {
        self.prompt("Enter Todo ID to delete: ")?;
        let id = match input::read_number::<_, i32>(&mut self.reader) {
            Ok(id) => id,
            Err(e) => return self.reject(e),
        };

        match self.repository.delete_by_id(id) {
            Some(_) => writeln!(self.writer, "Todo ID {} deleted successfully.", id)?,
            None => writeln!(self.writer, "Todo ID {} not found.", id)?,
        }
        Ok(())
    }

    fn find_by_index(&mut self) -> anyhow::Result<()> {
        self.prompt("Enter index (starting from 0): ")?;
        let index = match input::read_number::<_, i64>(&mut self.reader) {
            Ok(index) => index,
            Err(e) => return self.reject(e),
        };

        match self.repository.find_by_index(index) {
            Some(todo) => {
                writeln!(self.writer, "Found Todo:")?;
                writeln!(self.writer, "{}", todo)?;
            }
            None => writeln!(self.writer, "Todo not found at index {}.", index)?,
        }
        Ok(())
    }

    fn print_all(&mut self) -> anyhow::Result<()> {
        if self.repository.is_empty() {
            writeln!(self.writer, "No todo items found.")?;
            return Ok(());
        }

        for (index, todo) in self.repository.iter().enumerate() {
            if self.display.show_index {
                writeln!(self.writer, "Index: {}", index)?;
            }
            writeln!(self.writer, "{}", todo)?;
            writeln!(self.writer, "{}", self.display.separator)?;
        }
        Ok(())
    }

    fn reject(&mut self, error: InputError) -> anyhow::Result<()> {
        warn!("Rejected input: {}", error);
        writeln!(self.writer, "Invalid input.")?;
        Ok(())
    }
}
