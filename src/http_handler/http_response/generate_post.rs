use chrono::NaiveDateTime;

/// Response type for the /api/v1/generate-post endpoint.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct GeneratePostResponse {
    /// The topic the post was generated for.
    pub topic: String,
    /// URLs of the news articles the post is based on.
    #[serde(default)]
    pub news_sources: Vec<String>,
    /// The generated post text.
    pub linkedin_post: String,
    /// Optional description of an image to accompany the post.
    #[serde(default)]
    pub image_suggestion: Option<String>,
    /// Generation time as reported by the backend (UTC, no offset).
    pub generated_at: NaiveDateTime,
}
