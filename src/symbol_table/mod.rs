pub mod data_type;

use ordermap::OrderMap;

pub use data_type::DataType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTableEntry {
    pub name: String,
    pub data_type: DataType,
    pub size: usize,
    pub dimension: usize,
    pub declaration_line: usize,
    pub usage_lines: Vec<usize>,
}

/// Flat, global table of every name seen during a parse run.
///
/// Entries keep their insertion order and are never removed; a name maps to
/// at most one entry.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: OrderMap<String, SymbolTableEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            entries: OrderMap::new(),
        }
    }

    /// Adds `name` unless it is already present. Returns whether an entry was
    /// created; an existing entry is left untouched.
    pub fn insert(
        &mut self,
        name: &str,
        data_type: DataType,
        size: usize,
        dimension: usize,
        declaration_line: usize,
    ) -> bool {
        if self.search(name).is_some() {
            return false;
        }

        self.entries.insert(
            name.to_string(),
            SymbolTableEntry {
                name: name.to_string(),
                data_type,
                size,
                dimension,
                declaration_line,
                usage_lines: Vec::new(),
            },
        );
        true
    }

    /// Position of `name` in insertion order.
    pub fn search(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    pub fn get(&self, name: &str) -> Option<&SymbolTableEntry> {
        self.entries.get(name)
    }

    pub fn get_index(&self, position: usize) -> Option<&SymbolTableEntry> {
        self.entries.get_index(position).map(|(_, entry)| entry)
    }

    pub fn add_line_of_usage(&mut self, name: &str, line: usize) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.usage_lines.push(line);
        }
    }

    pub fn update_data_type(&mut self, name: &str, data_type: DataType) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.data_type = data_type;
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &SymbolTableEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
