use super::*;

/// Markup produced by an [`ImageRenderer`], reparsed so its element nodes
/// can be spliced into the document being filtered.
pub(crate) struct RenderedFragment {
  html: Html,
}

impl RenderedFragment {
  pub(crate) fn from_markup(markup: &str) -> Self {
    Self {
      html: Html::parse_fragment(markup),
    }
  }

  /// Deep-copies every significant node under `parent`, preserving order.
  pub(crate) fn import_into(&self, tree: &mut Tree<Node>, parent: NodeId) {
    for id in self.significant_nodes() {
      if let Some(node) = self.html.tree.get(id) {
        import_node(tree, parent, node);
      }
    }
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.significant_nodes().is_empty()
  }

  /// Top-level element nodes of the fragment; surrounding text and comment
  /// nodes are insignificant.
  fn significant_nodes(&self) -> Vec<NodeId> {
    let Some(root) = self
      .html
      .tree
      .root()
      .children()
      .find(|node| matches!(node.value(), Node::Element(_)))
    else {
      return Vec::new();
    };

    root
      .children()
      .filter(|node| matches!(node.value(), Node::Element(_)))
      .map(|node| node.id())
      .collect()
  }
}

pub(crate) fn element_with_class(tag: &str, class: &str) -> Node {
  let mut node = Node::Element(Element::new(
    QualName::new(None, ns!(html), LocalName::from(tag)),
    Vec::new(),
  ));

  if let Node::Element(ref mut element) = node {
    let mut value = StrTendril::new();
    value.push_slice(class);

    element
      .attrs
      .insert(QualName::new(None, ns!(), LocalName::from("class")), value);
  }

  node
}

fn import_node(tree: &mut Tree<Node>, parent: NodeId, source: NodeRef<'_, Node>) {
  let id = match tree.get_mut(parent) {
    Some(mut parent) => parent.append(source.value().clone()).id(),
    None => return,
  };

  for child in source.children() {
    import_node(tree, id, child);
  }
}

#[cfg(test)]
mod tests {
  use {super::*, scraper::ElementRef};

  fn serialized_children(html: &Html, id: NodeId) -> String {
    html
      .tree
      .get(id)
      .and_then(ElementRef::wrap)
      .map(|element| element.inner_html())
      .unwrap_or_default()
  }

  #[test]
  fn surrounding_text_and_comments_are_insignificant() {
    let fragment = RenderedFragment::from_markup(
      "\n  <!-- themed output --> <img src=\"cat.jpg\"> \n",
    );

    assert!(!fragment.is_empty());
    assert_eq!(fragment.significant_nodes().len(), 1);
  }

  #[test]
  fn fragment_without_elements_is_empty() {
    assert!(RenderedFragment::from_markup("").is_empty());
    assert!(RenderedFragment::from_markup("plain text").is_empty());
    assert!(RenderedFragment::from_markup("<!-- comment -->").is_empty());
  }

  #[test]
  fn import_preserves_nesting_and_order() {
    let fragment = RenderedFragment::from_markup(
      r#"<a href="x"><img src="cat.jpg"></a><span>after</span>"#,
    );

    let mut destination = Html::parse_fragment("<div></div>");

    let parent = destination
      .tree
      .root()
      .descendants()
      .find(|node| {
        matches!(node.value(), Node::Element(element) if element.name() == "div")
      })
      .map(|node| node.id())
      .expect("destination should contain a div");

    fragment.import_into(&mut destination.tree, parent);

    assert_eq!(
      serialized_children(&destination, parent),
      r#"<a href="x"><img src="cat.jpg"></a><span>after</span>"#
    );
  }

  #[test]
  fn element_with_class_builds_a_classed_node() {
    let node = element_with_class("div", "field-type-image inline-image");

    let Node::Element(element) = node else {
      unreachable!()
    };

    assert_eq!(element.name(), "div");
    assert_eq!(element.attr("class"), Some("field-type-image inline-image"));
  }
}
