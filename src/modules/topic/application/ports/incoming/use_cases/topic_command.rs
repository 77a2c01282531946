use crate::topic::application::ports::outgoing::NewTopicData;

//
// ──────────────────────────────────────────────────────────
// Category Type
// ──────────────────────────────────────────────────────────
//

/// Tells the form whether the category came from the existing set or was
/// typed in fresh. Validated on input but never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryType {
    Existing,
    New,
}

impl CategoryType {
    pub fn parse(raw: Option<&str>) -> Result<Self, TopicCommandError> {
        match raw {
            Some("existing") => Ok(CategoryType::Existing),
            Some("new") => Ok(CategoryType::New),
            _ => Err(TopicCommandError::InvalidCategoryType),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Topic Command
// ──────────────────────────────────────────────────────────
//

/// Validated payload shared by topic create and full update.
#[derive(Debug, Clone)]
pub struct TopicCommand {
    title: String,
    description: String,
    category: String,
    category_type: CategoryType,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicCommandError {
    #[error("Title must be between 3 and 100 characters")]
    InvalidTitle,

    #[error("Description must be between 10 and 500 characters")]
    InvalidDescription,

    #[error("Category must be between 2 and 50 characters")]
    InvalidCategory,

    #[error("Please select whether to use an existing category or add a new one")]
    InvalidCategoryType,
}

impl TopicCommand {
    pub fn new(
        title: String,
        description: String,
        category: String,
        category_type: Option<String>,
    ) -> Result<Self, TopicCommandError> {
        if !(3..=100).contains(&title.chars().count()) {
            return Err(TopicCommandError::InvalidTitle);
        }

        if !(10..=500).contains(&description.chars().count()) {
            return Err(TopicCommandError::InvalidDescription);
        }

        if !(2..=50).contains(&category.chars().count()) {
            return Err(TopicCommandError::InvalidCategory);
        }

        let category_type = CategoryType::parse(category_type.as_deref())?;

        Ok(Self {
            title,
            description,
            category,
            category_type,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn category_type(&self) -> CategoryType {
        self.category_type
    }

    pub fn into_data(self) -> NewTopicData {
        NewTopicData {
            title: self.title,
            description: self.description,
            category: self.category,
        }
    }
}
