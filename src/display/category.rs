//! Category display formatting

use crate::models::{CategoryAddOutcome, CategorySet};

/// Format the category list shown before the category prompt
pub fn format_category_list(categories: &CategorySet) -> String {
    let mut output = String::from("Available categories:\n");
    for name in categories.list() {
        output.push_str(name);
        output.push('\n');
    }
    output
}

/// Message for the result of adding a category
pub fn format_category_added(name: &str, outcome: CategoryAddOutcome) -> String {
    match outcome {
        CategoryAddOutcome::Added => format!("Category {} added.\n", name),
        CategoryAddOutcome::AlreadyExists => format!("Category {} already exists.\n", name),
        CategoryAddOutcome::Blank => "Invalid category name.\n".to_string(),
    }
}
