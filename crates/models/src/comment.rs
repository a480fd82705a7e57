use serde::{Deserialize, Serialize};

use crate::validation::{required, FieldViolation, Validate};

/// A reply attached to an item, or to another comment, through `parent_id`.
///
/// The parent is not checked for existence at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub parent_id: String,
    #[serde(rename = "comment")]
    pub value: String,
    pub votes: i32,
}

impl Validate for Comment {
    fn violations(&self) -> Vec<FieldViolation> {
        required(&[
            ("AuthorId", self.author_id.as_str(), "Author Identity must be provided"),
            ("ParentId", self.parent_id.as_str(), "Parent Identity must be provided"),
            ("Value", self.value.as_str(), "Comments must have a text value"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_travels_as_comment() {
        let c: Comment = serde_json::from_str(r#"{"authorId":"a","parentId":"p","comment":"hi","votes":-2}"#).unwrap();
        assert_eq!(c.value, "hi");
        assert_eq!(c.votes, -2);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn parent_checked_after_author() {
        let c = Comment { value: "text".into(), ..Default::default() };
        let fields: Vec<_> = c.violations().into_iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["AuthorId", "ParentId"]);
    }
}
