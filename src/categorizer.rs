use crate::models::{Category, EntryType};

/// Keyword rules, checked top to bottom. The first keyword found anywhere in
/// the text decides the category, so the order here is significant.
pub const KEYWORD_RULES: &[(&str, Category)] = &[
    // Food
    ("lunch", Category::Food),
    ("dinner", Category::Food),
    ("grocery", Category::Food),
    ("groceries", Category::Food),
    ("coffee", Category::Food),
    ("cafe", Category::Food),
    // Transport
    ("uber", Category::Transport),
    ("taxi", Category::Transport),
    ("bus", Category::Transport),
    ("train", Category::Transport),
    ("gas", Category::Transport),
    ("fuel", Category::Transport),
    // Shopping
    ("clothes", Category::Shopping),
    ("amazon", Category::Shopping),
    ("shoes", Category::Shopping),
    // Bills
    ("rent", Category::Bills),
    ("internet", Category::Bills),
    ("electricity", Category::Bills),
    ("water", Category::Bills),
    ("phone", Category::Bills),
    // Entertainment
    ("movie", Category::Entertainment),
    ("netflix", Category::Entertainment),
    ("spotify", Category::Entertainment),
    ("game", Category::Entertainment),
    // Health
    ("doctor", Category::Health),
    ("pharmacy", Category::Health),
    ("gym", Category::Health),
    // Income
    ("salary", Category::Income),
    ("bonus", Category::Income),
    ("refund", Category::Income),
];

fn matches(text_lower: &str, keyword: &str) -> bool {
    text_lower.contains(keyword)
}

/// Case-insensitive substring match against [`KEYWORD_RULES`].
pub fn infer_category(text: &str) -> Option<Category> {
    let lower = text.to_lowercase();
    let hit = KEYWORD_RULES
        .iter()
        .find(|(keyword, _)| matches(&lower, keyword));
    if let Some((keyword, category)) = hit {
        tracing::debug!(keyword, %category, "keyword rule matched");
    }
    hit.map(|(_, category)| *category)
}

/// Income category means an income entry; anything else (or nothing) is an expense.
pub fn entry_type_for(category: Option<Category>) -> EntryType {
    match category {
        Some(Category::Income) => EntryType::Income,
        _ => EntryType::Expense,
    }
}
