use crate::dto::response::{SearchItem, SearchResponse};

const RESULT_TEMPLATES: [(&str, &str, &str); 5] = [
    (
        "Creative {q} Design Example 1",
        "https://example.com/design1",
        "A beautiful design example that matches your query.",
    ),
    (
        "Inspirational {q} Design Reference",
        "https://example.com/design2",
        "Check out this inspirational design reference.",
    ),
    (
        "Professional {q} Design Sample",
        "https://example.com/design3",
        "A professional design sample that aligns with your needs.",
    ),
    (
        "Modern {q} Design Inspiration",
        "https://example.com/design4",
        "Get inspired by this modern design approach.",
    ),
    (
        "Trending {q} Design Ideas",
        "https://example.com/design5",
        "Explore the latest trending design ideas for your project.",
    ),
];

/// Canned design references for `query`. Stands in for a web search provider.
pub fn search_designs(query: &str) -> SearchResponse {
    SearchResponse {
        items: RESULT_TEMPLATES
            .iter()
            .map(|(title, link, snippet)| SearchItem {
                title: title.replacen("{q}", query, 1),
                link: link.to_string(),
                snippet: snippet.to_string(),
            })
            .collect(),
    }
}
