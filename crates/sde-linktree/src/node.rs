//! Link tree nodes.
//!
//! Nodes own their children; a node never refers back to its parent.
//! Trees are assembled bottom-up and handed to a [`PageRenderer`] as a
//! slice of top-level nodes.
//!
//! [`PageRenderer`]: crate::PageRenderer

/// Class marking the selected project section and ancestors of the page.
pub const CURRENT: &str = "current";

/// Class marking the item that links to the page being rendered.
pub const CURRENT_PAGE: &str = "current-page";

/// A node of a link tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Heading shown above the lists that follow it.
    Caption(String),
    /// Bullet list of items.
    List(BulletList),
    /// A single linked entry.
    Item(ListItem),
}

impl Node {
    /// Caption node.
    pub fn caption(text: impl Into<String>) -> Self {
        Self::Caption(text.into())
    }

    /// Unclassed bullet list holding `items`.
    pub fn list(items: impl IntoIterator<Item = ListItem>) -> Self {
        Self::List(BulletList {
            classes: Vec::new(),
            children: items.into_iter().map(Node::Item).collect(),
        })
    }

    /// Number of nodes in this subtree carrying `class`.
    pub fn count_class(&self, class: &str) -> usize {
        match self {
            Self::Caption(_) => 0,
            Self::List(list) => {
                usize::from(list.has_class(class))
                    + list.children.iter().map(|n| n.count_class(class)).sum::<usize>()
            }
            Self::Item(item) => {
                usize::from(item.has_class(class))
                    + item.children.iter().map(|n| n.count_class(class)).sum::<usize>()
            }
        }
    }
}

impl From<ListItem> for Node {
    fn from(item: ListItem) -> Self {
        Self::Item(item)
    }
}

impl From<BulletList> for Node {
    fn from(list: BulletList) -> Self {
        Self::List(list)
    }
}

/// `<ul>` container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulletList {
    pub classes: Vec<String>,
    pub children: Vec<Node>,
}

impl BulletList {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Link target and label of an item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Link {
    /// `None` when no page context was available to compute it.
    pub uri: Option<String>,
    /// `None` when no label could be derived.
    pub label: Option<String>,
    pub internal: bool,
}

/// `<li>` entry at a nesting level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    /// Nesting depth, 1 for top-level entries.
    pub level: u32,
    /// Presentation classes in addition to the level class.
    pub classes: Vec<String>,
    pub link: Link,
    pub children: Vec<Node>,
}

impl ListItem {
    /// Item at level 2, the level of entries inside a project section.
    pub fn new(link: Link) -> Self {
        Self {
            level: 2,
            classes: Vec::new(),
            link,
            children: Vec::new(),
        }
    }

    /// Move the item to another nesting level. Levels below 1 become 1.
    #[must_use]
    pub fn at_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    /// Add a presentation class unless already present.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// All classes in output order: `toctree-l<level>` first.
    pub fn effective_classes(&self) -> Vec<String> {
        let mut classes = Vec::with_capacity(self.classes.len() + 1);
        classes.push(format!("toctree-l{}", self.level));
        classes.extend(self.classes.iter().cloned());
        classes
    }
}
