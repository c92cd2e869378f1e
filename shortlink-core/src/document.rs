//! Document tree built from a pulldown-cmark event stream.
//!
//! pulldown-cmark produces a flat sequence of `Start`/`End`/leaf events. The
//! shortcut rewriter needs to see a link together with its inline content, so
//! the stream is folded into a tree where every `Start`..`End` pair becomes an
//! [`Node::Element`] and every other event a [`Node::Leaf`].

use pulldown_cmark::{CowStr, Event, LinkType, Tag, TagEnd};

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    Element {
        tag: Tag<'a>,
        /// Closing tag; `None` when the stream ended before the element closed.
        end: Option<TagEnd>,
        children: Vec<Node<'a>>,
    },
    Leaf(Event<'a>),
}

impl<'a> Node<'a> {
    /// Text of a plain-text run, if this node is one.
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            Node::Leaf(Event::Text(text)) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Concatenated text and inline code beneath this node.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Leaf(Event::Text(text)) | Node::Leaf(Event::Code(text)) => out.push_str(text),
            Node::Leaf(_) => {}
            Node::Element { children, .. } => {
                for child in children {
                    child.push_text(out);
                }
            }
        }
    }

    /// Mutable view of this node if it is a link.
    pub fn as_link_mut(&mut self) -> Option<LinkMut<'_, 'a>> {
        match self {
            Node::Element {
                tag:
                    Tag::Link {
                        link_type,
                        dest_url,
                        title,
                        id,
                    },
                children,
                ..
            } => Some(LinkMut {
                link_type: *link_type,
                id,
                content: children.as_slice(),
                dest_url,
                title,
            }),
            _ => None,
        }
    }

    fn push_events(self, out: &mut Vec<Event<'a>>) {
        match self {
            Node::Leaf(event) => out.push(event),
            Node::Element { tag, end, children } => {
                out.push(Event::Start(tag));
                for child in children {
                    child.push_events(out);
                }
                if let Some(end) = end {
                    out.push(Event::End(end));
                }
            }
        }
    }
}

/// A link node as seen by link visitors.
///
/// Only the destination URL is writable: attributes, inline content and title
/// pass through the rewrite untouched.
pub struct LinkMut<'n, 'a> {
    pub link_type: LinkType,
    pub id: &'n CowStr<'a>,
    pub content: &'n [Node<'a>],
    pub dest_url: &'n mut CowStr<'a>,
    pub title: &'n CowStr<'a>,
}

impl<'n, 'a> LinkMut<'n, 'a> {
    pub fn url(&self) -> &str {
        &**self.dest_url
    }

    pub fn set_url(&mut self, url: String) {
        *self.dest_url = CowStr::from(url);
    }
}

/// A parsed markdown document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document<'a> {
    pub nodes: Vec<Node<'a>>,
}

impl<'a> Document<'a> {
    /// Fold an event stream into a tree.
    ///
    /// Adjacent text events are merged into one plain-text run, so a link
    /// whose label pulldown-cmark happened to split still has a single text
    /// child. A stray `End` with no open element is kept as a leaf.
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        let mut root: Vec<Node<'a>> = Vec::new();
        let mut open: Vec<(Tag<'a>, Vec<Node<'a>>)> = Vec::new();

        for event in events {
            match event {
                Event::Start(tag) => open.push((tag, Vec::new())),
                Event::End(end) => match open.pop() {
                    Some((tag, children)) => {
                        let node = Node::Element {
                            tag,
                            end: Some(end),
                            children,
                        };
                        push_node(current(&mut open, &mut root), node);
                    }
                    None => root.push(Node::Leaf(Event::End(end))),
                },
                other => push_node(current(&mut open, &mut root), Node::Leaf(other)),
            }
        }

        while let Some((tag, children)) = open.pop() {
            let node = Node::Element {
                tag,
                end: None,
                children,
            };
            push_node(current(&mut open, &mut root), node);
        }

        Self { nodes: root }
    }

    /// Flatten the tree back into an event stream.
    pub fn into_events(self) -> Vec<Event<'a>> {
        let mut out = Vec::new();
        for node in self.nodes {
            node.push_events(&mut out);
        }
        out
    }

    /// Visit every node bottom-up: children before their parent, siblings in
    /// reading order.
    pub fn walk_mut<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Node<'a>),
    {
        walk_nodes_mut(&mut self.nodes, visit);
    }

    /// Visit every link node bottom-up.
    ///
    /// A link nested inside another link's content (for instance through an
    /// image) is visited before the enclosing link.
    pub fn walk_links_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(LinkMut<'_, 'a>),
    {
        self.walk_mut(&mut |node: &mut Node<'a>| {
            if let Some(link) = node.as_link_mut() {
                visit(link);
            }
        });
    }

    /// Destination URLs of every link, in visiting order.
    pub fn link_targets(&self) -> Vec<String> {
        let mut targets = Vec::new();
        collect_targets(&self.nodes, &mut targets);
        targets
    }
}

fn current<'v, 'a>(
    open: &'v mut [(Tag<'a>, Vec<Node<'a>>)],
    root: &'v mut Vec<Node<'a>>,
) -> &'v mut Vec<Node<'a>> {
    match open.last_mut() {
        Some((_, children)) => children,
        None => root,
    }
}

fn push_node<'a>(siblings: &mut Vec<Node<'a>>, node: Node<'a>) {
    if let (Some(Node::Leaf(Event::Text(prev))), Node::Leaf(Event::Text(next))) =
        (siblings.last_mut(), &node)
    {
        let merged = format!("{}{}", &**prev, &**next);
        *prev = CowStr::from(merged);
        return;
    }
    siblings.push(node);
}

fn walk_nodes_mut<'a, F>(nodes: &mut [Node<'a>], visit: &mut F)
where
    F: FnMut(&mut Node<'a>),
{
    for node in nodes.iter_mut() {
        if let Node::Element { children, .. } = node {
            walk_nodes_mut(children, visit);
        }
        visit(node);
    }
}

fn collect_targets(nodes: &[Node<'_>], out: &mut Vec<String>) {
    for node in nodes {
        if let Node::Element { tag, children, .. } = node {
            collect_targets(children, out);
            if let Tag::Link { dest_url, .. } = tag {
                out.push(dest_url.to_string());
            }
        }
    }
}
