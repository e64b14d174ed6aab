use crate::todo::Todo;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no memory left to store todo {0}")]
    OutOfMemory(i32, #[source] std::collections::TryReserveError),
}

/// Todos in the order they were added.
///
/// Ids are not required to be unique. Lookups by id always resolve to the
/// earliest todo carrying that id.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct TodoRepository {
    todos: Vec<Todo>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self { todos: vec![] }
    }

    /// Appends a todo after every todo already stored.
    ///
    /// Fails only when the storage for one more todo cannot be allocated, in which
    /// case the repository is left as it was.
    pub fn add(&mut self, todo: Todo) -> Result<(), RepositoryError> {
        self.todos
            .try_reserve(1)
            .map_err(|e| RepositoryError::OutOfMemory(todo.id(), e))?;
        debug!("Adding todo {} at index {}", todo.id(), self.todos.len());
        self.todos.push(todo);
        Ok(())
    }

    /// Removes the first todo with the given id and hands it back.
    ///
    /// Returns `None` and leaves the repository untouched if no todo has that id.
    pub fn delete_by_id(&mut self, id: i32) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id() == id)?;
        debug!("Deleting todo {} at index {}", id, index);
        Some(self.todos.remove(index))
    }

    /// Zero-based positional lookup. Negative indices never match.
    pub fn find_by_index(&self, index: i64) -> Option<&Todo> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.todos.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Drops every todo, first to last, and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let released = self.todos.drain(..).count();
        debug!("Released {} todos", released);
        released
    }
}

impl<'a> IntoIterator for &'a TodoRepository {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
