use super::*;

const ALIGNMENT_CLASSES: &[(&str, &str)] = &[
  ("align-center", "text-align-center"),
  ("align-left", "align-left"),
  ("align-right", "align-right"),
];

/// Ordered element attributes with the `class` attribute held separately as
/// a token list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
  classes: ClassList,
  values: IndexMap<String, String>,
}

impl AttributeMap {
  pub fn classes(&self) -> &ClassList {
    &self.classes
  }

  pub fn classes_mut(&mut self) -> &mut ClassList {
    &mut self.classes
  }

  pub(crate) fn from_element(element: &Element, exclude: &[&str]) -> Self {
    let mut attributes = Self::default();

    for (name, value) in &element.attrs {
      let name = name.local.as_ref();

      if exclude.contains(&name) {
        continue;
      }

      attributes.set(name, &value[..]);
    }

    attributes
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.values.get(name).map(String::as_str)
  }

  /// Iterates over every attribute except `class`, in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .values
      .iter()
      .map(|(name, value)| (name.as_str(), value.as_str()))
  }

  pub fn new() -> Self {
    Self::default()
  }

  pub fn set(&mut self, name: &str, value: &str) {
    if name == "class" {
      self.classes = ClassList::parse(value);
    } else {
      self.values.insert(name.to_string(), value.to_string());
    }
  }
}

/// An ordered, duplicate-free list of class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
  tokens: Vec<String>,
}

impl ClassList {
  pub fn contains(&self, token: &str) -> bool {
    self.tokens.iter().any(|existing| existing == token)
  }

  pub fn insert(&mut self, token: &str) {
    if !self.contains(token) {
      self.tokens.push(token.to_string());
    }
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.tokens.iter().map(String::as_str)
  }

  pub fn parse(value: &str) -> Self {
    let mut list = Self::default();

    for token in value.split_whitespace() {
      list.insert(token);
    }

    list
  }

  pub fn remove(&mut self, token: &str) -> bool {
    let before = self.tokens.len();

    self.tokens.retain(|existing| existing != token);

    before != self.tokens.len()
  }

  /// Removes every alignment token and reports the class the wrapper
  /// element should carry for the first one found.
  pub(crate) fn take_alignment(&mut self) -> Option<&'static str> {
    let mut alignment = None;

    self.tokens.retain(|token| {
      let mapped = ALIGNMENT_CLASSES
        .iter()
        .find(|(name, _)| *name == token.as_str())
        .map(|(_, wrapper_class)| *wrapper_class);

      match mapped {
        Some(wrapper_class) => {
          alignment.get_or_insert(wrapper_class);
          false
        }
        None => true,
      }
    });

    alignment
  }

  pub fn value(&self) -> String {
    self.tokens.join(" ")
  }
}
