//! Book record and its two views

use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;

/// Integer field that also accepts integral floats and numeric strings,
/// e.g. `3`, `3.0` and `"3"`.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        Raw::Float(f) => Err(de::Error::custom(format!(
            "expected a valid integer, got {}",
            f
        ))),
        Raw::Text(s) => s.trim().parse().map_err(|_| {
            de::Error::custom(format!("expected a valid integer, unable to parse {:?}", s))
        }),
    }
}

/// Stored book. The id is supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[schema(example = 1)]
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    #[schema(example = "1984")]
    pub title: String,
    #[schema(example = "George Orwell")]
    pub author: String,
    #[schema(example = "Dystopian novel.")]
    pub description: String,
    #[schema(example = 1949)]
    #[serde(deserialize_with = "lenient_i64")]
    pub year: i64,
}

impl Book {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        year: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            description: description.into(),
            year,
        }
    }
}

/// List view: title and author only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
}

/// Single-book view: every field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookDetail {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub year: i64,
}

impl From<&Book> for BookSummary {
    fn from(b: &Book) -> Self {
        Self {
            title: b.title.clone(),
            author: b.author.clone(),
        }
    }
}

impl From<Book> for BookDetail {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            description: b.description,
            year: b.year,
        }
    }
}

/// Books present on every fresh start
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "1984", "George Orwell", "Dystopian novel.", 1949),
        Book::new(2, "The Hobbit", "J.R.R. Tolkien", "Fantasy adventure.", 1937),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_omits_id_description_year() {
        let summary = BookSummary::from(&seed_books()[0]);
        let json = serde_json::to_value(&summary).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["title"], "1984");
        assert_eq!(obj["author"], "George Orwell");
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("year"));
    }

    #[test]
    fn test_book_requires_every_field() {
        let missing_year = r#"{"id":3,"title":"t","author":"a","description":"d"}"#;
        assert!(serde_json::from_str::<Book>(missing_year).is_err());

        let wrong_type = r#"{"id":"x","title":"t","author":"a","description":"d","year":1}"#;
        assert!(serde_json::from_str::<Book>(wrong_type).is_err());
    }

    #[test]
    fn test_book_integers_accept_numeric_strings() {
        let raw = r#"{"id":"3","title":"t","author":"a","description":"d","year":" 1965 "}"#;
        let book: Book = serde_json::from_str(raw).unwrap();
        assert_eq!(book.id, 3);
        assert_eq!(book.year, 1965);

        let float = r#"{"id":4.0,"title":"t","author":"a","description":"d","year":1965}"#;
        assert_eq!(serde_json::from_str::<Book>(float).unwrap().id, 4);

        for bad in [r#""abc""#, "4.5", r#""""#, "true", "null"] {
            let raw = format!(
                r#"{{"id":1,"title":"t","author":"a","description":"d","year":{}}}"#,
                bad
            );
            assert!(serde_json::from_str::<Book>(&raw).is_err(), "{}", bad);
        }
    }
}
