use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeImageSource {
    pub site: String,
    pub search_keywords: String,
    pub url: String,
}

impl FreeImageSource {
    fn new(site: &str, search_keywords: &str, url: &str) -> Self {
        Self {
            site: site.to_string(),
            search_keywords: search_keywords.to_string(),
            url: url.to_string(),
        }
    }

    /// Substituted wholesale when a detail response carries anything other
    /// than exactly three sources.
    pub fn fallback_sources() -> Vec<FreeImageSource> {
        vec![
            FreeImageSource::new(
                "Pixabay",
                "education, learning",
                "https://pixabay.com/images/search/education/",
            ),
            FreeImageSource::new(
                "Unsplash",
                "learning materials",
                "https://unsplash.com/s/photos/education",
            ),
            FreeImageSource::new(
                "Pexels",
                "education tools",
                "https://www.pexels.com/search/education/",
            ),
        ]
    }
}
