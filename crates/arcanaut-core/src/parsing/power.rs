use crate::model::Power;

/// Buffers the continuation fragments of the power entry currently being
/// read. The split into name/description only happens at flush time, once
/// all fragments for the entry are known.
#[derive(Debug, Default)]
pub struct PowerBuffer {
    fragments: Vec<String>,
}

impl PowerBuffer {
    pub fn new() -> Self {
        PowerBuffer::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn push(&mut self, fragment: &str) {
        self.fragments.push(fragment.to_string());
    }

    /// Join the buffered fragments and split them into a named power.
    ///
    /// The name is everything before the first period; the description is
    /// everything after it. When no period exists (or the text starts with
    /// one), the first whitespace-delimited token becomes the name.
    /// Returns None and leaves the buffer untouched-and-empty when nothing
    /// was buffered.
    pub fn flush(&mut self) -> Option<Power> {
        if self.fragments.is_empty() {
            return None;
        }
        let text = self.fragments.join(" ").trim().to_string();
        self.fragments.clear();

        let (name, description) = match text.find('.') {
            Some(pos) if pos > 0 => (text[..pos].trim(), text[pos + 1..].trim()),
            _ => match text.split_once(' ') {
                Some((head, rest)) => (head, rest),
                None => (text.as_str(), ""),
            },
        };

        Some(Power {
            name: name.to_string(),
            description: description.to_string(),
        })
    }
}
