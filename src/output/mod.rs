//! The output accumulator: pipes contribute typed fragments here during a
//! render pass, and the renderer merges them into one string afterwards.
//!
//! The reuse-or-new distinction lets adjacent pipes grow one shared table
//! without knowing about each other, while a pipe that wants a visual break
//! can seal its fragment so the next contributor starts fresh.

mod data;
mod table;
mod text;

pub use data::Data;
pub use table::{RowContent, Table};
pub use text::Text;

use serde_json::{Map, Value};

use crate::error::Error;

/// One accumulated piece of renderable output.
#[derive(Debug, Clone)]
pub enum Fragment {
    Table(Table),
    Text(Text),
    Data(Data),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FragmentKind {
    Table,
    Text,
    Data,
}

#[derive(Debug, Clone, Copy)]
struct LastFragment {
    index: usize,
    kind: FragmentKind,
}

/// Refers back to a table fragment reserved earlier in the pass.
#[derive(Debug, Clone, Copy)]
pub struct TableSlot(usize);

/// Refers back to a text fragment reserved earlier in the pass.
#[derive(Debug, Clone, Copy)]
pub struct TextSlot(usize);

/// Scoped to one render pass; fragments are append-only for its duration.
#[derive(Debug, Default)]
pub struct ReportOutput {
    fragments: Vec<Fragment>,
    /// The reuse candidate — index plus kind tag, so reuse checks never
    /// need to re-inspect the stored fragment.
    last: Option<LastFragment>,
}

impl ReportOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Always starts a new table; `reusable_after` decides whether a later
    /// reuse call may pick it up.
    pub fn new_table(&mut self, reusable_after: bool) -> &mut Table {
        let index = self.push(Fragment::Table(Table::new()), FragmentKind::Table, reusable_after);
        match &mut self.fragments[index] {
            Fragment::Table(table) => table,
            _ => unreachable!("fragment {index} allocated as a table"),
        }
    }

    /// Continues the previous fragment when it is a reusable table, else
    /// starts a new one.
    pub fn reuse_table_or_new(&mut self, reusable_after: bool) -> &mut Table {
        let index = self.reuse_or_push(
            FragmentKind::Table,
            || Fragment::Table(Table::new()),
            reusable_after,
        );
        match &mut self.fragments[index] {
            Fragment::Table(table) => table,
            _ => unreachable!("fragment {index} tracked as a table"),
        }
    }

    pub fn new_text(&mut self, reusable_after: bool) -> &mut Text {
        let index = self.push(Fragment::Text(Text::new()), FragmentKind::Text, reusable_after);
        match &mut self.fragments[index] {
            Fragment::Text(text) => text,
            _ => unreachable!("fragment {index} allocated as text"),
        }
    }

    pub fn reuse_text_or_new(&mut self, reusable_after: bool) -> &mut Text {
        let index = self.reuse_or_push(
            FragmentKind::Text,
            || Fragment::Text(Text::new()),
            reusable_after,
        );
        match &mut self.fragments[index] {
            Fragment::Text(text) => text,
            _ => unreachable!("fragment {index} tracked as text"),
        }
    }

    pub fn new_data(&mut self, reusable_after: bool) -> &mut Data {
        let index = self.push(Fragment::Data(Data::new()), FragmentKind::Data, reusable_after);
        match &mut self.fragments[index] {
            Fragment::Data(data) => data,
            _ => unreachable!("fragment {index} allocated as data"),
        }
    }

    /// Reserves a table spot now so it can be filled during the
    /// notification pass, after the outcome of the first pass is known.
    pub fn reserve_table(&mut self) -> TableSlot {
        TableSlot(self.push(Fragment::Table(Table::new()), FragmentKind::Table, true))
    }

    /// Reserves a text spot now, to be filled during the notification pass.
    pub fn reserve_text(&mut self) -> TextSlot {
        TextSlot(self.push(Fragment::Text(Text::new()), FragmentKind::Text, true))
    }

    /// Re-borrows a reserved table fragment.
    pub fn table_at(&mut self, slot: TableSlot) -> Option<&mut Table> {
        match self.fragments.get_mut(slot.0) {
            Some(Fragment::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// Re-borrows a reserved text fragment.
    pub fn text_at(&mut self, slot: TextSlot) -> Option<&mut Text> {
        match self.fragments.get_mut(slot.0) {
            Some(Fragment::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Number of fragments created so far — used to observe reuse semantics.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    fn push(&mut self, fragment: Fragment, kind: FragmentKind, reusable_after: bool) -> usize {
        let index = self.fragments.len();
        self.fragments.push(fragment);
        self.last = reusable_after.then_some(LastFragment { index, kind });
        index
    }

    fn reuse_or_push(
        &mut self,
        kind: FragmentKind,
        make: impl FnOnce() -> Fragment,
        reusable_after: bool,
    ) -> usize {
        // reusing an existing fragment leaves its reusability as-is
        if let Some(last) = self.last {
            if last.kind == kind {
                return last.index;
            }
        }
        self.push(make(), kind, reusable_after)
    }

    /// Merges every fragment's render into one string.
    ///
    /// Fragments that render to nothing are dropped. All surviving renders
    /// must share one kind: text-like renders join with a blank line, data
    /// renders merge into one object and serialize as JSON.
    ///
    /// # Errors
    /// `MixedOutputKinds` when both text-like and data renders survive.
    pub fn combined(&self) -> Result<String, Error> {
        let mut texts: Vec<String> = Vec::new();
        let mut maps: Vec<Map<String, Value>> = Vec::new();
        let mut kinds: Vec<&'static str> = Vec::new();

        for fragment in &self.fragments {
            match fragment {
                Fragment::Table(table) => {
                    let rendered = table.render();
                    if rendered.is_empty() {
                        continue;
                    }
                    texts.push(rendered);
                    if !kinds.contains(&"text") {
                        kinds.push("text");
                    }
                }
                Fragment::Text(text) => {
                    let rendered = text.render();
                    if rendered.is_empty() {
                        continue;
                    }
                    texts.push(rendered);
                    if !kinds.contains(&"text") {
                        kinds.push("text");
                    }
                }
                Fragment::Data(data) => {
                    let rendered = data.render();
                    if rendered.is_empty() {
                        continue;
                    }
                    maps.push(rendered);
                    if !kinds.contains(&"data") {
                        kinds.push("data");
                    }
                }
            }
        }

        if kinds.len() > 1 {
            return Err(Error::MixedOutputKinds(kinds));
        }

        if !texts.is_empty() {
            return Ok(texts.join("\n\n"));
        }

        if !maps.is_empty() {
            let mut merged = Map::new();
            for map in maps {
                merged.extend(map);
            }
            return Ok(serde_json::to_string(&Value::Object(merged)).unwrap_or_default());
        }

        Ok(String::new())
    }
}
