use chrono::Utc;

use crate::topic::application::ports::outgoing::{PageRequest, PageResult, TopicRecord};

pub fn sample_record(id: i32, title: &str, category: &str) -> TopicRecord {
    TopicRecord {
        id,
        title: title.to_string(),
        description: format!("Description for {}", title),
        category: category.to_string(),
        ai_suggestions: None,
        created_at: Utc::now(),
    }
}

pub fn empty_page_result() -> PageResult<TopicRecord> {
    PageResult::new(vec![], 0, &PageRequest::default())
}

pub fn page_of(items: Vec<TopicRecord>) -> PageResult<TopicRecord> {
    let total = items.len() as u64;
    PageResult::new(items, total, &PageRequest::default())
}
