use super::TreeNode;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const SPACER: &str = "    ";

/// Renders one invocation's worth of trees, one block per root, joined with
/// newlines. Pure text transform; performs no I/O.
pub fn format_forest(roots: &[TreeNode]) -> String {
    roots
        .iter()
        .map(format_tree)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a single tree depth-first, one `path  fq_name` line per node,
/// descendants indented with the usual branch glyphs.
pub fn format_tree(root: &TreeNode) -> String {
    let mut out = root.label();
    write_children(&mut out, &root.children, "");
    out
}

fn write_children(out: &mut String, children: &[TreeNode], prefix: &str) {
    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        out.push('\n');
        out.push_str(prefix);
        out.push_str(if last { LAST_BRANCH } else { BRANCH });
        out.push_str(&child.label());
        let nested = format!("{prefix}{}", if last { SPACER } else { CONTINUATION });
        write_children(out, &child.children, &nested);
    }
}
