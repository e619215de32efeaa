// src/services/transcript.rs
use std::collections::HashMap;
use std::fmt;

/// Stable handle for a turn. Ids grow monotonically within a transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnId(u64);

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    pub id: TurnId,
    pub role: Role,
    pub content: String,
}

/// Append-only list of turns. Content edits go through the turn's id so a
/// late writer can never land on whatever happens to be last.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: HashMap<TurnId, ChatTurn>,
    order: Vec<TurnId>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    // Append a turn and return its id.
    pub fn push(&mut self, role: Role, content: impl Into<String>) -> TurnId {
        let id = TurnId(self.next_id);
        self.next_id += 1;
        self.turns.insert(id, ChatTurn { id, role, content: content.into() });
        self.order.push(id);
        id
    }

    /// Replace the content of an existing turn. Returns false for unknown ids.
    pub fn set_content(&mut self, id: TurnId, content: impl Into<String>) -> bool {
        match self.turns.get_mut(&id) {
            Some(turn) => {
                turn.content = content.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: TurnId) -> Option<&ChatTurn> {
        self.turns.get(&id)
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.order.last().and_then(|id| self.turns.get(id))
    }

    /// Turns in append order.
    pub fn iter(&self) -> impl Iterator<Item = &ChatTurn> {
        self.order.iter().filter_map(|id| self.turns.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
