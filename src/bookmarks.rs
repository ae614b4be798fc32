use crate::pdf::OutlineNode;

/// A flattened outline entry: a title and the zero-based page it starts on.
///
/// Bookmarks are emitted in outline traversal order. That order is what
/// end-page inference relies on, so it is preserved exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub title: String,
    pub start_page: u32,
}

impl Bookmark {
    /// One line of `--list` output.
    pub fn list_line(&self) -> String {
        format!("{} - {}", self.title, self.start_page)
    }
}

/// Flatten an outline tree into an ordered bookmark list, limited by depth.
///
/// Depth semantics:
/// - `-1`: unlimited, every leaf at every nesting level is included
/// - `0`: leaves at the current level only, nested groups are skipped
/// - `d > 0`: descend `d` group levels, decrementing; leaves are only
///   collected once the counter has reached 0
pub fn flatten_outline(nodes: &[OutlineNode], depth: i32) -> Vec<Bookmark> {
    let mut bookmarks = Vec::new();
    flatten_into(nodes, depth, &mut bookmarks);
    bookmarks
}

fn flatten_into(nodes: &[OutlineNode], depth: i32, out: &mut Vec<Bookmark>) {
    for node in nodes {
        match node {
            OutlineNode::Group(children) => {
                if depth > 0 {
                    flatten_into(children, depth - 1, out);
                } else if depth == -1 {
                    flatten_into(children, depth, out);
                }
                // depth == 0: the whole group is skipped
            }
            OutlineNode::Leaf { title, page } => {
                if depth < 1 {
                    out.push(Bookmark {
                        title: title.clone(),
                        start_page: *page,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(title: &str, page: u32) -> OutlineNode {
        OutlineNode::Leaf {
            title: title.to_string(),
            page,
        }
    }

    /// Two top-level chapters; the first has two nested sections, of
    /// which the first has a nested subsection.
    fn fixture() -> Vec<OutlineNode> {
        vec![
            leaf("Chapter 1", 0),
            OutlineNode::Group(vec![
                leaf("Section 1.1", 2),
                OutlineNode::Group(vec![leaf("Subsection 1.1.1", 3)]),
                leaf("Section 1.2", 5),
            ]),
            leaf("Chapter 2", 8),
        ]
    }

    fn titles(bookmarks: &[Bookmark]) -> Vec<&str> {
        bookmarks.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_unlimited_depth_includes_every_leaf() {
        let flat = flatten_outline(&fixture(), -1);
        assert_eq!(
            titles(&flat),
            vec![
                "Chapter 1",
                "Section 1.1",
                "Subsection 1.1.1",
                "Section 1.2",
                "Chapter 2"
            ]
        );
    }

    #[test]
    fn test_depth_zero_skips_nested_groups() {
        let flat = flatten_outline(&fixture(), 0);
        assert_eq!(titles(&flat), vec!["Chapter 1", "Chapter 2"]);
        assert_eq!(flat[0].start_page, 0);
        assert_eq!(flat[1].start_page, 8);
    }

    #[test]
    fn test_depth_one_descends_one_level() {
        let flat = flatten_outline(&fixture(), 1);
        // Top-level leaves are not collected while the counter is still 1;
        // the nested sections are, their own subgroup is not.
        assert_eq!(titles(&flat), vec!["Section 1.1", "Section 1.2"]);
    }

    #[test]
    fn test_depth_two_reaches_subsections() {
        let flat = flatten_outline(&fixture(), 2);
        assert_eq!(titles(&flat), vec!["Subsection 1.1.1"]);
    }

    #[test]
    fn test_traversal_order_is_document_order() {
        let flat = flatten_outline(&fixture(), -1);
        let pages: Vec<u32> = flat.iter().map(|b| b.start_page).collect();
        assert_eq!(pages, vec![0, 2, 3, 5, 8]);
    }

    #[test]
    fn test_empty_outline() {
        assert!(flatten_outline(&[], -1).is_empty());
    }

    #[test]
    fn test_list_line_format() {
        let bookmark = Bookmark {
            title: "Chapter 1".to_string(),
            start_page: 3,
        };
        assert_eq!(bookmark.list_line(), "Chapter 1 - 3");
    }
}
