use serde::{Deserialize, Serialize};

use crate::validation::{required, FieldViolation, Validate};

/// A top-level posted topic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub author: String,
    pub hide_author: bool,
    pub title: String,
    pub description: String,
    pub votes: i32,
}

impl Validate for Item {
    fn violations(&self) -> Vec<FieldViolation> {
        required(&[
            ("Author", self.author.as_str(), "Author is required"),
            ("Title", self.title.as_str(), "Title is required"),
            ("Description", self.description.as_str(), "Description must not be blank"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item() -> Item {
        Item {
            author: "Max Power".into(),
            title: "Add search feature".into(),
            description: "Search existing items rather than duplicate things".into(),
            votes: 10,
            ..Default::default()
        }
    }

    #[rstest]
    #[case(Item { author: String::new(), ..item() }, "Author")]
    #[case(Item { title: " ".into(), ..item() }, "Title")]
    #[case(Item { description: String::new(), ..item() }, "Description")]
    #[case(Item { author: String::new(), title: String::new(), description: String::new(), ..item() }, "Author")]
    #[case(Item { title: String::new(), description: String::new(), ..item() }, "Title")]
    fn reports_first_missing_field(#[case] item: Item, #[case] expected: &str) {
        assert_eq!(item.validate().unwrap_err().field(), expected);
    }

    #[test]
    fn collects_every_violation() {
        let empty = Item::default();
        assert_eq!(empty.violations().len(), 3);
        assert!(item().violations().is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(Item { hide_author: true, ..item() }).unwrap();
        assert_eq!(json["hideAuthor"], true);
        assert_eq!(json["votes"], 10);
    }
}
