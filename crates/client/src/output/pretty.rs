//! Pretty output formatting.

use todoboard_core::board::{ClipboardSummary, Item};

/// Format a clipboard for display.
pub fn format_clipboard(clipboard: &ClipboardSummary) -> String {
    format!("{}\n  ID: {}", clipboard.name, clipboard.id)
}

/// Format clipboards for display.
pub fn format_clipboards(clipboards: &[ClipboardSummary]) -> String {
    if clipboards.is_empty() {
        return "No clipboards found.".to_string();
    }
    let mut output = format!("CLIPBOARDS ({})\n", clipboards.len());
    output.push_str(&"-".repeat(40));
    for clipboard in clipboards {
        output.push_str(&format!("\n{}", format_clipboard(clipboard)));
        output.push('\n');
    }
    output
}

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let check = if item.is_complete { "x" } else { " " };
    format!(
        "[{}] {}\n  ID: {}\n  Clipboard: {}",
        check, item.name, item.id, item.clipboard_id
    )
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let done = items.iter().filter(|i| i.is_complete).count();
    let mut output = format!("ITEMS ({}, {} done)\n", items.len(), done);
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_item_marks_completion() {
        let item = Item::new(7, 1, "Milk").with_complete(true);
        assert_eq!(format_item(&item), "[x] Milk\n  ID: 7\n  Clipboard: 1");
    }

    #[test]
    fn test_format_items_counts_done() {
        let items = vec![
            Item::new(1, 1, "Milk").with_complete(true),
            Item::new(2, 1, "Eggs"),
        ];
        assert!(format_items(&items).starts_with("ITEMS (2, 1 done)"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_clipboards(&[]), "No clipboards found.");
        assert_eq!(format_items(&[]), "No items found.");
    }
}
