use na_core::Article;

/// Build the scoring prompt. The model must answer with exactly one
/// `CONFIDENCE:` line and one `REASON:` line; `response::parse_analysis`
/// is the counterpart that reads the answer back.
pub fn build_prompt(article: &Article, preference: &str) -> String {
    format!(
        "You are analyzing news articles for a user who likes: {preference}\n\
         \n\
         News Article:\n\
         Title: {title}\n\
         Description: {description}\n\
         \n\
         Based on the user's preference for \"{preference}\", analyze how much they would like this news article.\n\
         \n\
         Provide your response in exactly this format:\n\
         CONFIDENCE: [number 0-100]\n\
         REASON: [explanation why you gave this confidence score]\n\
         \n\
         Example:\n\
         CONFIDENCE: 85\n\
         REASON: This article about meditation directly relates to mental health, which is a core aspect of health and wellness that would interest someone focused on health topics.",
        preference = preference,
        title = article.title,
        description = article.description,
    )
}
