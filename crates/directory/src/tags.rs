/// What the tag form's Add button should offer for the current input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddPrompt {
    /// Empty input: keep the button hidden.
    Hidden,
    /// Input matches a tag that already exists in the directory.
    AddExisting,
    /// Input names a tag not seen before.
    AddNew,
}

/// Selection model behind the project form's tag field.
///
/// The selection mirrors into a hidden form field as a `|`-joined list; the
/// literal `None` (or an empty string) means no prior selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagPicker {
    known: Vec<String>,
    selected: Vec<String>,
}

impl TagPicker {
    pub fn new(known: Vec<String>) -> Self {
        Self {
            known,
            selected: Vec::new(),
        }
    }

    /// Rebuilds a selection from a previously submitted hidden-field value.
    pub fn from_field(known: Vec<String>, field: &str) -> Self {
        let mut picker = Self::new(known);
        if field.is_empty() || field == "None" {
            return picker;
        }
        for name in field.split('|') {
            picker.add(name);
        }
        picker
    }

    pub fn prompt_for(&self, input: &str) -> AddPrompt {
        if input.is_empty() {
            AddPrompt::Hidden
        } else if self.known.iter().any(|t| t == input) {
            AddPrompt::AddExisting
        } else {
            AddPrompt::AddNew
        }
    }

    /// Selects a tag. Returns `false` when it was already selected.
    /// A genuinely new name also joins the known list.
    pub fn add(&mut self, name: &str) -> bool {
        if self.selected.iter().any(|t| t == name) {
            return false;
        }
        if !self.known.iter().any(|t| t == name) {
            self.known.push(name.to_string());
        }
        self.selected.push(name.to_string());
        true
    }

    /// Drops a tag from the selection. Returns `false` when it was absent.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|t| t != name);
        self.selected.len() != before
    }

    /// The hidden-field encoding of the current selection.
    pub fn field_value(&self) -> String {
        self.selected.join("|")
    }

    pub fn known(&self) -> &[String] {
        &self.known
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::{AddPrompt, TagPicker};

    fn known() -> Vec<String> {
        vec!["glass art".to_string(), "green living".to_string()]
    }

    #[test]
    fn prompt_hides_button_for_empty_input() {
        let picker = TagPicker::new(known());
        assert_eq!(picker.prompt_for(""), AddPrompt::Hidden);
    }

    #[test]
    fn prompt_distinguishes_existing_from_new() {
        let picker = TagPicker::new(known());
        assert_eq!(picker.prompt_for("glass art"), AddPrompt::AddExisting);
        assert_eq!(picker.prompt_for("hardware"), AddPrompt::AddNew);
    }

    #[test]
    fn add_dedups_selection() {
        let mut picker = TagPicker::new(known());
        assert!(picker.add("glass art"));
        assert!(!picker.add("glass art"));
        assert_eq!(picker.selected(), ["glass art".to_string()]);
    }

    #[test]
    fn new_tag_joins_known_list() {
        let mut picker = TagPicker::new(known());
        picker.add("hardware");
        assert_eq!(picker.prompt_for("hardware"), AddPrompt::AddExisting);
    }

    #[test]
    fn field_value_round_trips() {
        let mut picker = TagPicker::new(known());
        picker.add("glass art");
        picker.add("hardware");
        assert_eq!(picker.field_value(), "glass art|hardware");

        let rebuilt = TagPicker::from_field(known(), &picker.field_value());
        assert_eq!(rebuilt.selected(), picker.selected());
    }

    #[test]
    fn none_sentinel_means_no_selection() {
        let picker = TagPicker::from_field(known(), "None");
        assert!(picker.selected().is_empty());
        let picker = TagPicker::from_field(known(), "");
        assert!(picker.selected().is_empty());
    }

    #[test]
    fn remove_drops_tag_and_reencodes() {
        let mut picker = TagPicker::from_field(known(), "glass art|green living");
        assert!(picker.remove("glass art"));
        assert!(!picker.remove("glass art"));
        assert_eq!(picker.field_value(), "green living");
    }
}
