use super::*;

const EDITOR_UUID_ATTRIBUTE: &str = "data-editor-file-uuid";
const ENTITY_TYPE_ATTRIBUTE: &str = "data-entity-type";
const ENTITY_UUID_ATTRIBUTE: &str = "data-entity-uuid";

const EXCLUDED_ATTRIBUTES: &[&str] = &[
  "src",
  EDITOR_UUID_ATTRIBUTE,
  ENTITY_TYPE_ATTRIBUTE,
  ENTITY_UUID_ATTRIBUTE,
];

/// An editor-inserted `<img>` tag that references a stored file by unique
/// id instead of by URL.
#[derive(Debug, Clone)]
pub(crate) struct Placeholder {
  pub(crate) attributes: AttributeMap,
  pub(crate) uuid: String,
}

impl Placeholder {
  pub(crate) fn from_element(element: &Element) -> Option<Self> {
    if element.name() != "img" {
      return None;
    }

    let uuid = Self::uuid(element)?;

    Some(Self {
      attributes: AttributeMap::from_element(element, EXCLUDED_ATTRIBUTES),
      uuid,
    })
  }

  fn uuid(element: &Element) -> Option<String> {
    if let Some(uuid) = element.attr(EDITOR_UUID_ATTRIBUTE)
      && !uuid.trim().is_empty()
    {
      return Some(uuid.to_string());
    }

    if element.attr(ENTITY_TYPE_ATTRIBUTE) == Some("file")
      && let Some(uuid) = element.attr(ENTITY_UUID_ATTRIBUTE)
      && !uuid.trim().is_empty()
    {
      return Some(uuid.to_string());
    }

    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn first_element(html: &str) -> Element {
    let html = Html::parse_fragment(html);

    let node = html
      .tree
      .root()
      .descendants()
      .find(|node| matches!(node.value(), Node::Element(element) if element.name() != "html"))
      .expect("fragment should contain an element");

    let Node::Element(element) = node.value() else {
      unreachable!()
    };

    element.clone()
  }

  #[test]
  fn editor_uuid_convention_is_recognized() {
    let element =
      first_element(r#"<img data-editor-file-uuid="abc" class="x">"#);

    let placeholder = Placeholder::from_element(&element)
      .expect("placeholder should be recognized");

    assert_eq!(placeholder.uuid, "abc");
    assert_eq!(placeholder.attributes.classes().value(), "x");
  }

  #[test]
  fn entity_uuid_convention_requires_file_type() {
    let element = first_element(
      r#"<img data-entity-type="file" data-entity-uuid="abc">"#,
    );

    assert!(Placeholder::from_element(&element).is_some());

    let element = first_element(
      r#"<img data-entity-type="node" data-entity-uuid="abc">"#,
    );

    assert!(Placeholder::from_element(&element).is_none());
  }

  #[test]
  fn editor_uuid_wins_over_entity_uuid() {
    let element = first_element(
      r#"<img data-editor-file-uuid="abc" data-entity-type="file" data-entity-uuid="def">"#,
    );

    let placeholder = Placeholder::from_element(&element)
      .expect("placeholder should be recognized");

    assert_eq!(placeholder.uuid, "abc");
  }

  #[test]
  fn empty_uuid_is_not_a_placeholder() {
    let element = first_element(r#"<img data-editor-file-uuid="">"#);

    assert!(Placeholder::from_element(&element).is_none());

    let element = first_element(r#"<img data-editor-file-uuid="  ">"#);

    assert!(Placeholder::from_element(&element).is_none());
  }

  #[test]
  fn non_image_elements_are_ignored() {
    let element = first_element(r#"<div data-editor-file-uuid="abc"></div>"#);

    assert!(Placeholder::from_element(&element).is_none());
  }

  #[test]
  fn identifier_machinery_is_excluded_from_attributes() {
    let element = first_element(
      r#"<img src="cat.jpg" data-editor-file-uuid="abc" alt="A cat">"#,
    );

    let placeholder = Placeholder::from_element(&element)
      .expect("placeholder should be recognized");

    assert_eq!(
      placeholder.attributes.iter().collect::<Vec<(&str, &str)>>(),
      vec![("alt", "A cat")]
    );
  }
}
