//! A small in-memory element tree.
//!
//! [`Document`] is the rendering substrate the board is drawn into. It
//! models the handful of DOM features the board needs: elements with a
//! tag, an optional unique id, classes, `data-*` attributes, plain
//! attributes, text, a form value and a `display` style.
//!
//! Elements live in an arena and are addressed by [`NodeId`]. Ids carry a
//! generation, so a handle to a removed element never aliases a newer one.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

/// Handle to an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// The `display` style of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No explicit style; the element is visible.
    #[default]
    Unset,
    /// `display: block`.
    Block,
    /// `display: none`.
    Hidden,
}

impl Display {
    /// Returns `true` unless the element is explicitly hidden.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }

    fn as_css(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Block => Some("block"),
            Self::Hidden => Some("none"),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    data: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    display: Display,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// An element tree rooted at a `body` element.
///
/// # Examples
///
/// ```
/// use taskboard_ui::dom::Document;
///
/// let mut doc = Document::new();
/// let list = doc.create_element("div");
/// doc.set_id(list, "list");
/// doc.append_child(doc.body(), list);
///
/// let item = doc.create_element("button");
/// doc.add_class(item, "board-btn");
/// doc.set_text(item, "Roadmap");
/// doc.append_child(list, item);
///
/// assert_eq!(doc.get_element_by_id("list"), Some(list));
/// assert_eq!(doc.query_by_class("board-btn"), vec![item]);
/// assert_eq!(doc.text_content(list), "Roadmap");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    ids: HashMap<String, NodeId>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document containing only an empty `body`.
    #[must_use]
    pub fn new() -> Self {
        let body = NodeId {
            index: 0,
            generation: 0,
        };
        Self {
            slots: vec![Slot {
                generation: 0,
                element: Some(Element {
                    tag: "body".to_string(),
                    ..Element::default()
                }),
            }],
            free: Vec::new(),
            ids: HashMap::new(),
            body,
        }
    }

    /// Returns the `body` element.
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let element = Element {
            tag: tag.to_string(),
            ..Element::default()
        };

        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.generation += 1;
                slot.element = Some(element);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    element: Some(element),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Returns `true` if `node` refers to a live element.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Appends `child` to `parent`, detaching it from any previous parent.
    ///
    /// Appending an element under itself or one of its descendants is
    /// ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent)
            || !self.contains(child)
            || self.is_inclusive_ancestor(child, parent)
        {
            return;
        }
        self.detach(child);
        if let Some(element) = self.get_mut(child) {
            element.parent = Some(parent);
        }
        if let Some(element) = self.get_mut(parent) {
            element.children.push(child);
        }
    }

    /// Removes every descendant of `node`.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = match self.get_mut(node) {
            Some(element) => std::mem::take(&mut element.children),
            None => return,
        };
        for child in children {
            self.free_subtree(child);
        }
    }

    /// Removes `node` and its descendants from the document.
    ///
    /// The body cannot be removed.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.body || !self.contains(node) {
            return;
        }
        self.detach(node);
        self.free_subtree(node);
    }

    /// Returns the element registered under `id`.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied().filter(|node| self.contains(*node))
    }

    /// Gives `node` a unique id, replacing any element previously holding it.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        let Some(element) = self.get_mut(node) else {
            return;
        };
        let old = element.id.replace(id.to_string());
        if let Some(old) = old {
            self.ids.remove(&old);
        }
        if let Some(previous) = self.ids.insert(id.to_string(), node)
            && previous != node
            && let Some(element) = self.get_mut(previous)
        {
            element.id = None;
        }
    }

    /// Returns the id of `node`, if it has one.
    #[must_use]
    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        self.get(node).and_then(|e| e.id.as_deref())
    }

    /// Returns the tag name of `node`.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|e| e.tag.as_str())
    }

    /// Returns the parent of `node`.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|e| e.parent)
    }

    /// Returns the children of `node` in order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }

    /// Returns every element under the body carrying `class`, in document
    /// order.
    #[must_use]
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_by_class_within(self.body, class)
    }

    /// Returns every descendant of `root` carrying `class`, in document
    /// order. `root` itself is not included.
    #[must_use]
    pub fn query_by_class_within(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if self.has_class(node, class) {
                found.push(node);
            }
            stack.extend(self.children(node).iter().rev().copied());
        }
        found
    }

    /// Returns the first element with `class` whose `data-<key>` equals
    /// `value`.
    #[must_use]
    pub fn query_one(&self, class: &str, key: &str, value: &str) -> Option<NodeId> {
        self.query_by_class(class)
            .into_iter()
            .find(|node| self.data(*node, key) == Some(value))
    }

    /// Adds `class` to `node` if absent.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node)
            && !element.classes.iter().any(|c| c == class)
        {
            element.classes.push(class.to_string());
        }
    }

    /// Removes `class` from `node`.
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    /// Adds or removes `class`; with `force`, sets it to that state.
    ///
    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or(!self.has_class(node, class));
        if present {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
        present
    }

    /// Returns `true` if `node` carries `class`.
    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    /// Returns the `data-<key>` attribute of `node`.
    #[must_use]
    pub fn data(&self, node: NodeId, key: &str) -> Option<&str> {
        self.get(node).and_then(|e| e.data.get(key).map(String::as_str))
    }

    /// Sets the `data-<key>` attribute of `node`.
    pub fn set_data(&mut self, node: NodeId, key: &str, value: &str) {
        if let Some(element) = self.get_mut(node) {
            element.data.insert(key.to_string(), value.to_string());
        }
    }

    /// Returns a plain attribute such as `src` or `type`.
    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node)
            .and_then(|e| e.attributes.get(name).map(String::as_str))
    }

    /// Sets a plain attribute.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.get_mut(node) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Removes a plain attribute.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.get_mut(node) {
            element.attributes.remove(name);
        }
    }

    /// Returns the element's own text, excluding children.
    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        self.get(node).map_or("", |e| e.text.as_str())
    }

    /// Sets the element's own text.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.get_mut(node) {
            element.text = text.to_string();
        }
    }

    /// Returns the concatenated text of `node` and all its descendants.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = self.text(node).to_string();
        for child in self.children(node) {
            out.push_str(&self.text_content(*child));
        }
        out
    }

    /// Returns the form value of an input, textarea or select.
    #[must_use]
    pub fn value(&self, node: NodeId) -> &str {
        self.get(node).map_or("", |e| e.value.as_str())
    }

    /// Sets the form value.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(element) = self.get_mut(node) {
            element.value = value.to_string();
        }
    }

    /// Returns the `display` style of `node`.
    #[must_use]
    pub fn display(&self, node: NodeId) -> Display {
        self.get(node).map_or(Display::Unset, |e| e.display)
    }

    /// Sets the `display` style of `node`.
    pub fn set_display(&mut self, node: NodeId, display: Display) {
        if let Some(element) = self.get_mut(node) {
            element.display = display;
        }
    }

    /// Returns `true` if `node` and all its ancestors are visible.
    #[must_use]
    pub fn is_rendered(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if !self.contains(n) || !self.display(n).is_visible() {
                return false;
            }
            current = self.parent(n);
        }
        true
    }

    /// Serializes the whole document as indented markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.markup(self.body)
    }

    /// Serializes the subtree rooted at `node` as indented markup.
    #[must_use]
    pub fn markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(node, 0, &mut out);
        out
    }

    fn write_markup(&self, node: NodeId, depth: usize, out: &mut String) {
        let Some(element) = self.get(node) else {
            return;
        };
        let indent = "  ".repeat(depth);

        let _ = write!(out, "{indent}<{}", element.tag);
        if let Some(id) = &element.id {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        if !element.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&element.classes.join(" ")));
        }
        for (key, value) in &element.data {
            let _ = write!(out, " data-{key}=\"{}\"", escape(value));
        }
        for (name, value) in &element.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        if !element.value.is_empty() {
            let _ = write!(out, " value=\"{}\"", escape(&element.value));
        }
        if let Some(css) = element.display.as_css() {
            let _ = write!(out, " style=\"display: {css}\"");
        }
        out.push('>');

        if element.children.is_empty() {
            let _ = writeln!(out, "{}</{}>", escape(&element.text), element.tag);
            return;
        }

        out.push('\n');
        if !element.text.is_empty() {
            let _ = writeln!(out, "{indent}  {}", escape(&element.text));
        }
        for child in &element.children {
            self.write_markup(*child, depth + 1, out);
        }
        let _ = writeln!(out, "{indent}</{}>", element.tag);
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    fn get(&self, node: NodeId) -> Option<&Element> {
        self.slots
            .get(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.slots
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(element) = self.get_mut(parent) {
            element.children.retain(|c| *c != node);
        }
        if let Some(element) = self.get_mut(node) {
            element.parent = None;
        }
    }

    fn free_subtree(&mut self, node: NodeId) {
        let Some(element) = self
            .slots
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.take())
        else {
            return;
        };

        if let Some(id) = element.id
            && self.ids.get(&id) == Some(&node)
        {
            self.ids.remove(&id);
        }
        self.free.push(node.index);

        for child in element.children {
            self.free_subtree(child);
        }
    }
}

/// Escapes text for use in markup text and double-quoted attributes.
fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_doc() -> (Document, NodeId) {
        let mut doc = Document::new();
        let list = doc.create_element("div");
        doc.set_id(list, "list");
        doc.append_child(doc.body(), list);
        (doc, list)
    }

    #[test]
    fn query_by_class_is_document_order() {
        let (mut doc, list) = list_doc();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let nested = doc.create_element("span");
        for node in [a, b, nested] {
            doc.add_class(node, "item");
        }
        doc.append_child(list, a);
        doc.append_child(a, nested);
        doc.append_child(list, b);

        assert_eq!(doc.query_by_class("item"), vec![a, nested, b]);
        assert_eq!(doc.query_by_class_within(a, "item"), vec![nested]);
    }

    #[test]
    fn clear_children_frees_descendants_and_ids() {
        let (mut doc, list) = list_doc();
        let child = doc.create_element("p");
        doc.set_id(child, "child");
        doc.append_child(list, child);

        doc.clear_children(list);

        assert!(doc.children(list).is_empty());
        assert!(!doc.contains(child));
        assert_eq!(doc.get_element_by_id("child"), None);
    }

    #[test]
    fn stale_handles_do_not_alias_new_elements() {
        let (mut doc, list) = list_doc();
        let old = doc.create_element("p");
        doc.append_child(list, old);
        doc.clear_children(list);

        let new = doc.create_element("p");
        doc.set_text(new, "fresh");

        assert_ne!(old, new);
        assert_eq!(doc.text(old), "");
        assert_eq!(doc.text(new), "fresh");
    }

    #[test]
    fn remove_detaches_from_parent() {
        let (mut doc, list) = list_doc();
        doc.remove(list);
        assert!(doc.children(doc.body()).is_empty());
        assert_eq!(doc.get_element_by_id("list"), None);

        doc.remove(doc.body());
        assert!(doc.contains(doc.body()));
    }

    #[test]
    fn append_child_moves_between_parents() {
        let (mut doc, list) = list_doc();
        let other = doc.create_element("div");
        doc.append_child(doc.body(), other);
        let item = doc.create_element("span");

        doc.append_child(list, item);
        doc.append_child(other, item);

        assert!(doc.children(list).is_empty());
        assert_eq!(doc.children(other), &[item]);
        assert_eq!(doc.parent(item), Some(other));
    }

    #[test]
    fn append_child_refuses_cycles() {
        let (mut doc, list) = list_doc();
        let item = doc.create_element("li");
        doc.append_child(list, item);

        doc.append_child(item, list);
        doc.append_child(item, doc.body());
        doc.append_child(list, list);

        assert_eq!(doc.parent(list), Some(doc.body()));
        assert_eq!(doc.parent(item), Some(list));
        assert!(doc.children(item).is_empty());
        assert!(doc.is_rendered(item));
    }

    #[test]
    fn markup_escapes_text_and_attributes() {
        let (mut doc, list) = list_doc();
        doc.set_data(list, "title", "say \"hi\"");
        doc.set_text(list, "a < b & c > d");
        assert_eq!(
            doc.markup(list),
            "<div id=\"list\" data-title=\"say &quot;hi&quot;\">a &lt; b &amp; c &gt; d</div>\n"
        );
    }

    #[test]
    fn toggle_class_with_and_without_force() {
        let (mut doc, list) = list_doc();
        assert!(doc.toggle_class(list, "active", None));
        assert!(!doc.toggle_class(list, "active", None));
        assert!(doc.toggle_class(list, "active", Some(true)));
        assert!(doc.toggle_class(list, "active", Some(true)));
        assert!(doc.has_class(list, "active"));
        doc.add_class(list, "active");
        assert_eq!(doc.markup(list), "<div id=\"list\" class=\"active\"></div>\n");
    }

    #[test]
    fn query_one_matches_data_attribute() {
        let (mut doc, list) = list_doc();
        let todo = doc.create_element("div");
        let done = doc.create_element("div");
        doc.add_class(todo, "column-div");
        doc.add_class(done, "column-div");
        doc.set_data(todo, "status", "todo");
        doc.set_data(done, "status", "done");
        doc.append_child(list, todo);
        doc.append_child(list, done);

        assert_eq!(doc.query_one("column-div", "status", "done"), Some(done));
        assert_eq!(doc.query_one("column-div", "status", "doing"), None);
    }

    #[test]
    fn hidden_ancestor_hides_descendants() {
        let (mut doc, list) = list_doc();
        let item = doc.create_element("span");
        doc.append_child(list, item);
        assert!(doc.is_rendered(item));

        doc.set_display(list, Display::Hidden);
        assert!(!doc.is_rendered(item));
        assert!(doc.display(item).is_visible());
    }

    #[test]
    fn markup_snapshot() {
        let (mut doc, list) = list_doc();
        doc.set_text(list, "Boards");
        doc.set_display(list, Display::Block);
        let button = doc.create_element("button");
        doc.add_class(button, "board-btn");
        doc.set_data(button, "board", "Roadmap");
        doc.set_text(button, "Roadmap");
        doc.append_child(list, button);

        insta::assert_snapshot!(doc.to_markup(), @r#"
        <body>
          <div id="list" style="display: block">
            Boards
            <button class="board-btn" data-board="Roadmap">Roadmap</button>
          </div>
        </body>
        "#);
    }
}
