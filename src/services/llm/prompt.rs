use super::types::{ReviewRequest, StarRating};

pub fn sentiment_guide(rating: StarRating) -> &'static str {
    match rating.stars() {
        1 => "Very negative, expressing frustration and dissatisfaction with specific issues",
        2 => "Below average experience, mentioning problems but being constructive",
        3 => "Mixed or neutral review with both positive and negative aspects",
        4 => "Positive experience with good aspects, maybe one small downside",
        _ => "Enthusiastic and praise-worthy, fully satisfied customer",
    }
}

/// PURE FUNCTION: Completion prompt asking for one customer review.
pub fn build_review_prompt(request: &ReviewRequest) -> String {
    let kind = if request.kind.trim().is_empty() { "business" } else { request.kind.trim() };
    let category = if request.category.trim().is_empty() { "general" } else { request.category.trim() };
    let stars = request.rating.stars();

    let mut prompt = format!(
        "Generate a realistic Google review for \"{}\" which is a {} in the {} category.\n\n\
         Star Rating: {}\n\
         Sentiment: {}\n",
        request.business_name,
        kind,
        category,
        request.rating,
        sentiment_guide(request.rating),
    );

    if let Some(highlights) = &request.highlights {
        prompt.push_str(&format!("Customer highlights: {}\n", highlights));
    }

    prompt.push_str("\nRequirements:\n");
    prompt.push_str("- Write 2-5 sentences maximum\n");
    prompt.push_str("- Sound natural and human-like\n");
    prompt.push_str(&format!("- Match the {}-star sentiment exactly\n", stars));
    prompt.push_str(&format!("- Be specific to the business type ({})\n", kind));
    prompt.push_str("- Use realistic customer language\n");
    prompt.push_str("- No fake exaggeration, keep it credible\n");
    prompt.push_str("- Don't mention the star rating in the text\n");
    if let Some(highlights) = &request.highlights {
        prompt.push_str(&format!("- Try to incorporate these highlights naturally: {}\n", highlights));
    }
    prompt.push_str("\nReturn only the review text, no quotes or extra formatting.");

    prompt
}

/// Static review used when the model cannot be reached.
pub fn fallback_review(business_name: &str, rating: StarRating) -> String {
    match rating.stars() {
        1 => format!(
            "Had a disappointing experience at {}. The service was below expectations and several issues weren't addressed properly.",
            business_name
        ),
        2 => format!(
            "{} was okay but had some problems. The staff tried to help but there's definitely room for improvement.",
            business_name
        ),
        3 => format!(
            "Mixed experience at {}. Some things were good, others could be better. Average overall.",
            business_name
        ),
        4 => format!(
            "Good experience at {}. Professional service and quality work, just a minor wait time.",
            business_name
        ),
        _ => format!(
            "Excellent experience at {}! Outstanding service, professional team, and exceeded expectations. Highly recommended!",
            business_name
        ),
    }
}
