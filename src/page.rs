//! The page surface the client writes to.
//!
//! Instead of looking elements up by id, every operation receives a
//! `PageSurface` exposing the named slots it is allowed to touch.

use crate::error::{PortfolioError, Result};
use crate::models::TextStyle;
use std::collections::HashMap;

// ============================================================================
// Slots and Inputs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Greeting,
    RandomFact,
    Locations,
    /// Comment entry form, hidden until the login check passes.
    CommentForm,
    CommentsList,
    History,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Greeting,
        Slot::RandomFact,
        Slot::Locations,
        Slot::CommentForm,
        Slot::CommentsList,
        Slot::History,
    ];

    /// Element id of the slot in the page markup.
    pub fn element_id(self) -> &'static str {
        match self {
            Slot::Greeting => "greeting-container",
            Slot::RandomFact => "random-fact-container",
            Slot::Locations => "locations-container",
            Slot::CommentForm => "comments-container",
            Slot::CommentsList => "comments-list",
            Slot::History => "history",
        }
    }

    fn visible_by_default(self) -> bool {
        !matches!(self, Slot::CommentForm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    CommentLimit,
}

impl Input {
    pub fn element_id(self) -> &'static str {
        match self {
            Input::CommentLimit => "comment-limit",
        }
    }
}

// ============================================================================
// Page Surface
// ============================================================================

pub trait PageSurface {
    /// Replace the text content of a slot.
    fn set_text(&mut self, slot: Slot, text: &str) -> Result<()>;

    fn set_style(&mut self, slot: Slot, style: TextStyle) -> Result<()>;

    /// Remove all text and list items from a slot.
    fn clear(&mut self, slot: Slot) -> Result<()>;

    /// Append one list item to a slot.
    fn append_item(&mut self, slot: Slot, text: &str) -> Result<()>;

    fn set_visible(&mut self, slot: Slot, visible: bool) -> Result<()>;

    /// Current value of a form input.
    fn read_input(&self, input: Input) -> Result<String>;
}

// ============================================================================
// In-memory Page
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SlotState {
    pub text: Option<String>,
    pub items: Vec<String>,
    pub style: Option<TextStyle>,
    pub visible: bool,
}

impl SlotState {
    fn new(slot: Slot) -> Self {
        Self {
            text: None,
            items: Vec::new(),
            style: None,
            visible: slot.visible_by_default(),
        }
    }
}

/// One write made to a `MemoryPage`, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetText(Slot, String),
    SetStyle(Slot, TextStyle),
    Clear(Slot),
    AppendItem(Slot, String),
    SetVisible(Slot, bool),
}

impl Mutation {
    pub fn slot(&self) -> Slot {
        match self {
            Mutation::SetText(slot, _)
            | Mutation::SetStyle(slot, _)
            | Mutation::Clear(slot)
            | Mutation::AppendItem(slot, _)
            | Mutation::SetVisible(slot, _) => *slot,
        }
    }
}

/// Page surface held entirely in memory. Backs the CLI and the tests.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    slots: HashMap<Slot, SlotState>,
    inputs: HashMap<Input, String>,
    log: Vec<Mutation>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self {
            slots: Slot::ALL.iter().map(|s| (*s, SlotState::new(*s))).collect(),
            inputs: HashMap::new(),
            log: Vec::new(),
        }
    }

    /// Set a form input as if the visitor had typed into it.
    pub fn set_input(&mut self, input: Input, value: impl Into<String>) {
        self.inputs.insert(input, value.into());
    }

    pub fn slot(&self, slot: Slot) -> &SlotState {
        // Every slot is inserted by `new`
        &self.slots[&slot]
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.slot(slot).text.as_deref()
    }

    pub fn items(&self, slot: Slot) -> &[String] {
        &self.slot(slot).items
    }

    pub fn is_visible(&self, slot: Slot) -> bool {
        self.slot(slot).visible
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    fn state_mut(&mut self, slot: Slot) -> &mut SlotState {
        self.slots.entry(slot).or_insert_with(|| SlotState::new(slot))
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSurface for MemoryPage {
    fn set_text(&mut self, slot: Slot, text: &str) -> Result<()> {
        self.state_mut(slot).text = Some(text.to_string());
        self.log.push(Mutation::SetText(slot, text.to_string()));
        Ok(())
    }

    fn set_style(&mut self, slot: Slot, style: TextStyle) -> Result<()> {
        self.state_mut(slot).style = Some(style);
        self.log.push(Mutation::SetStyle(slot, style));
        Ok(())
    }

    fn clear(&mut self, slot: Slot) -> Result<()> {
        let state = self.state_mut(slot);
        state.text = None;
        state.items.clear();
        self.log.push(Mutation::Clear(slot));
        Ok(())
    }

    fn append_item(&mut self, slot: Slot, text: &str) -> Result<()> {
        self.state_mut(slot).items.push(text.to_string());
        self.log.push(Mutation::AppendItem(slot, text.to_string()));
        Ok(())
    }

    fn set_visible(&mut self, slot: Slot, visible: bool) -> Result<()> {
        self.state_mut(slot).visible = visible;
        self.log.push(Mutation::SetVisible(slot, visible));
        Ok(())
    }

    fn read_input(&self, input: Input) -> Result<String> {
        self.inputs
            .get(&input)
            .cloned()
            .ok_or(PortfolioError::MissingElement(input.element_id()))
    }
}
