use std::fmt::{Display, Formatter};

/// Longest title a todo can hold, in characters.
pub const TITLE_MAX_LEN: usize = 99;
/// Longest description a todo can hold, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 249;

#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Todo {
    id: i32,
    title: String,
    description: String,
}

impl Todo {
    /// Creates a todo, keeping at most [`TITLE_MAX_LEN`] characters of the title and
    /// [`DESCRIPTION_MAX_LEN`] characters of the description.
    pub fn new(id: i32, title: &str, description: &str) -> Self {
        Self {
            id,
            title: truncate(title, TITLE_MAX_LEN),
            description: truncate(description, DESCRIPTION_MAX_LEN),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        write!(f, "Description: {}", self.description)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
