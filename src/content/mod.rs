pub mod front_matter;
pub mod markdown;

use crate::content::front_matter::FrontMatter;

#[derive(Debug)]
pub struct Post {
    pub slug: String,
    pub front_matter: FrontMatter,
    pub body: String,
}

/// Example of post
/// ```text
/// +++
/// title = "What I learned after 20+ years of software development"
/// date = "2022-04-02"
/// description = "How to be a great software engineer?"
/// +++
///
/// Someone asked me this question today...
/// ```
impl Post {
    pub fn from_string(slug: &str, raw: &str) -> Post {
        let (front_matter, body) = front_matter::split(raw);

        Post {
            slug: slug.to_string(),
            front_matter,
            body: body.to_string(),
        }
    }

    pub fn summary(&self) -> PostSummary {
        PostSummary {
            slug: self.slug.clone(),
            title: self.front_matter.title.clone().unwrap_or_default(),
            date: self.front_matter.date.clone().unwrap_or_default(),
            description: self.front_matter.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub description: String,
}

pub fn sorted_summaries(posts: &[Post]) -> Vec<PostSummary> {
    let mut summaries: Vec<PostSummary> = posts.iter().map(|p| p.summary()).collect();

    // Newest first. Dates are compared as raw strings, so posts without a
    // date end up last.
    summaries.sort_by(|a, b| b.date.cmp(&a.date));
    summaries
}

pub fn latest(summaries: &[PostSummary]) -> Option<&PostSummary> {
    summaries.first()
}

#[cfg(test)]
mod tests {
    use crate::test_data::{POST_DATA, POST_DATA_NO_HEADER};

    use super::*;

    fn post(slug: &str, date: &str) -> Post {
        let raw = format!("+++\ntitle = \"{}\"\ndate = \"{}\"\n+++\n\nBody.\n", slug, date);
        Post::from_string(slug, &raw)
    }

    #[test]
    fn test_from_string() {
        let post = Post::from_string("what-i-learned", &POST_DATA.to_string());
        assert_eq!(post.slug, "what-i-learned");
        assert_eq!(post.front_matter.title.as_deref(), Some("What I learned after 20+ years of software development"));
        assert_eq!(post.front_matter.date.as_deref(), Some("2022-04-02"));
        assert!(post.body.starts_with("How to be a great software engineer?"));
    }

    #[test]
    fn test_from_string_without_header() {
        let post = Post::from_string("raw-notes", &POST_DATA_NO_HEADER.to_string());
        assert_eq!(post.front_matter, Default::default());
        assert!(post.body.contains("# Raw notes"));
    }

    #[test]
    fn test_summary_fills_missing_fields() {
        let post = Post::from_string("raw-notes", &POST_DATA_NO_HEADER.to_string());
        let summary = post.summary();
        assert_eq!(summary.slug, "raw-notes");
        assert_eq!(summary.title, "");
        assert_eq!(summary.date, "");
        assert_eq!(summary.description, "");
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let posts = vec![
            post("a", "2024-01-01"),
            post("b", "2024-06-01"),
            post("c", "2023-12-31"),
        ];
        let summaries = sorted_summaries(&posts);
        let dates: Vec<&str> = summaries.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, ["2024-06-01", "2024-01-01", "2023-12-31"]);
    }

    #[test]
    fn test_undated_posts_sort_last() {
        let posts = vec![
            Post::from_string("undated", "Body only.\n"),
            post("dated", "2024-01-01"),
        ];
        let summaries = sorted_summaries(&posts);
        assert_eq!(summaries[0].slug, "dated");
        assert_eq!(summaries[1].slug, "undated");
    }

    #[test]
    fn test_latest_of_empty_store() {
        let summaries = sorted_summaries(&[]);
        assert!(latest(&summaries).is_none());
    }

    #[test]
    fn test_latest_is_first_of_sorted() {
        let posts = vec![post("old", "2023-12-31"), post("new", "2024-06-01")];
        let summaries = sorted_summaries(&posts);
        assert_eq!(latest(&summaries).unwrap().slug, "new");
    }
}
