pub const FULL_SEED_TEMPLATE: &str = r#"### Instructions
Analyze the vocabulary-learning passage below and produce, as JSON, the
suitability of each of the five visual aid types plus a detailed
recommendation for every type, following the output format exactly.

### Writing Guidelines
1. Overall structure
- Output pure JSON (UTF-8) only.
- Never output prose, explanations or comments outside the JSON.
- The two top-level keys are **visualTypeSuitability** and **visualRecommendations**, in that fixed order.
- Every key and sub-field must be present; write the single string "-" for any value that cannot be determined.

2. Required fields and value rules
(1) **visualTypeSuitability**
- Score each of the five visual types as an **integer between 0 and 100**
- Adjust the scores so the five percentages sum to exactly **100**
- Weigh the passage content, subject and grade together

(2) **visualRecommendations**
- Include **all 5 visual types** (illustration, photo, flowchart, graph, table)
- Sort the array by suitability, highest first
- Every sub-field of every entry is mandatory

3. Field criteria
(1) **reason**: why this visual type fits, grounded in its educational value (under 100 characters)
(2) **composition**: concrete elements, layout and design direction (under 200 characters)
(3) **implementation**: production tools, technical considerations and pitfalls (under 150 characters)
(4) **freeImageSources**:
- Provide **exactly 3 sites**: Pixabay, Unsplash, Pexels
- Each entry must carry **site, searchKeywords, url**
- **searchKeywords**: 2-4 English keywords, comma separated (e.g. "science, physics, light")
- **url**: a complete, reachable search URL with the keywords URL-encoded
  * Pixabay: https://pixabay.com/images/search/{encoded keywords}/
  * Unsplash: https://unsplash.com/s/photos/{encoded keywords}
  * Pexels: https://www.pexels.com/search/{encoded keywords}/
- Pick keywords specific to the passage content and the visual type
(5) **aiPrompt**:
- Written in English, optimized for image generation tools
- Concrete and detailed
- State the educational, learning-material purpose explicitly

4. Per-type analysis criteria
- **illustration**: makes abstract concepts concrete, sparks imagination, invites interest
- **photo**: real-world connection, actual cases, vivid first-hand impressions
- **flowchart**: processes, procedures and cause-effect chains, logical thinking
- **graph**: numeric data visualization, comparison, quantitative understanding
- **table**: systematic organization, item-by-item comparison, summary

5. Validation rules
- visualRecommendations contains exactly **5 elements**
- the suitability percentages sum to exactly **100**
- every URL is a **reachable address**
- escape special characters so the JSON parses without errors
- strip whitespace and line breaks around every string value

### Required Output Format (follow this JSON structure exactly)

{
  "visualTypeSuitability": {
    "illustration": [integer 0-100],
    "photo": [integer 0-100],
    "flowchart": [integer 0-100],
    "graph": [integer 0-100],
    "table": [integer 0-100]
  },
  "visualRecommendations": [
    {
      "type": "illustration",
      "suitabilityPercent": [its percentage],
      "reason": "[reason under 100 characters]",
      "composition": "[composition under 200 characters]",
      "implementation": "[implementation notes under 150 characters]",
      "freeImageSources": [
        {
          "site": "Pixabay",
          "searchKeywords": "[English keywords, comma separated]",
          "url": "https://pixabay.com/images/search/[encoded keywords]/"
        },
        {
          "site": "Unsplash",
          "searchKeywords": "[English keywords, comma separated]",
          "url": "https://unsplash.com/s/photos/[encoded keywords]"
        },
        {
          "site": "Pexels",
          "searchKeywords": "[English keywords, comma separated]",
          "url": "https://www.pexels.com/search/[encoded keywords]/"
        }
      ],
      "aiPrompt": "[English image generation prompt]"
    },
    { "type": "photo", "...": "same sub-fields as above" },
    { "type": "flowchart", "...": "same sub-fields as above" },
    { "type": "graph", "...": "same sub-fields as above" },
    { "type": "table", "...": "same sub-fields as above" }
  ]
}

**Important**:
1. Follow the JSON structure above exactly, replacing the bracketed descriptions with real values.
2. Sort the visualRecommendations array by suitability, highest first.
3. Make the five percentages sum to 100.
4. Always include all 3 freeImageSources sites.
5. Output pure JSON only, with no other text.
"#;
