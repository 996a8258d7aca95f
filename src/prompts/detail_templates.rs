// Second-pass templates. All five share the same output contract: exactly
// three free image sources plus a four-field imageGenerationPrompt block.

pub const ILLUSTRATION_SEED_TEMPLATE: &str = r#"### Instructions
For the passage below, produce as JSON the image generation prompt and
royalty-free image sources for an **illustration** visual aid.

### Illustration Criteria
- Turns abstract concepts into concrete visuals
- Sparks imagination and learning interest
- Simplifies complex ideas
- Supports learner comprehension
- Creative, intuitive presentation

### Output Format
Answer with JSON only. Do not include any other text.

```json
{
  "type": "illustration",
  "freeImageSources": [
    {
      "site": "Pixabay",
      "searchKeywords": "keyword1, keyword2",
      "url": "https://pixabay.com/images/search/keywords/"
    },
    {
      "site": "Unsplash",
      "searchKeywords": "keyword3, keyword4",
      "url": "https://unsplash.com/s/photos/keywords"
    },
    {
      "site": "Pexels",
      "searchKeywords": "keyword5, keyword6",
      "url": "https://www.pexels.com/search/keywords/"
    }
  ],
  "imageGenerationPrompt": {
    "purpose": "Learning material for primary and middle school (grade 6, social studies)",
    "conditions": "16:9 ratio, 1920x1080 resolution, illustration style",
    "composition": "Elements: place a character or object representing the key concept at the center. Layout: logical left-to-right flow. Color and style: bright, friendly pastel tones with simple clear linework. Text: key terms in speech bubbles or labels. Approach: intuitive visual metaphors.",
    "precautions": "Keep every element clearly distinguishable and avoid ambiguous imagery that could confuse learners. Keep the imagery friendly, safe and age-appropriate."
  }
}
```

### Mandatory Validation Rules
1. freeImageSources must contain exactly 3 sites.
2. Every URL must be a reachable address.
3. Fill all four imageGenerationPrompt fields (purpose, conditions, composition, precautions).
4. State the grade and subject concretely in purpose.
5. Cover elements, layout, color and style, text and approach in composition.
6. Follow the JSON format exactly so the response parses without errors.
"#;

pub const PHOTO_SEED_TEMPLATE: &str = r#"### Instructions
For the passage below, produce as JSON the image generation prompt and
royalty-free image sources for a **photo** visual aid.

### Photo Criteria
- Connects the content to the real world with actual cases
- Conveys vivid, first-hand impressions
- Concrete, unambiguous visual information
- Shows the learning content applied in practice
- Realistic, trustworthy material

### Output Format
Answer with JSON only. Do not include any other text.

```json
{
  "type": "photo",
  "freeImageSources": [
    {
      "site": "Pixabay",
      "searchKeywords": "keyword1, keyword2",
      "url": "https://pixabay.com/photos/search/keywords/"
    },
    {
      "site": "Unsplash",
      "searchKeywords": "keyword3, keyword4",
      "url": "https://unsplash.com/s/photos/keywords"
    },
    {
      "site": "Pexels",
      "searchKeywords": "keyword5, keyword6",
      "url": "https://www.pexels.com/search/keywords/"
    }
  ],
  "imageGenerationPrompt": {
    "purpose": "Learning material for primary and middle school (grade 6, social studies)",
    "conditions": "16:9 ratio, 1920x1080 resolution, realistic photographic style",
    "composition": "Elements: place the real object or situation showing the key concept at the center. Layout: natural depth from foreground to background. Color and style: natural colors, sharp clean rendering. Text: explanatory labels or captions where needed. Approach: realistic, intuitive visual information.",
    "precautions": "Stay faithful to the real situation; avoid exaggerated or distorted imagery learners could misread. Keep the imagery educationally appropriate and safe."
  }
}
```

### Mandatory Validation Rules
1. freeImageSources must contain exactly 3 sites.
2. Every URL must be a reachable address.
3. Fill all four imageGenerationPrompt fields (purpose, conditions, composition, precautions).
4. State the grade and subject concretely in purpose.
5. Cover elements, layout, color and style, text and approach in composition.
6. Follow the JSON format exactly so the response parses without errors.
"#;

pub const FLOWCHART_SEED_TEMPLATE: &str = r#"### Instructions
For the passage below, produce as JSON the image generation prompt and
royalty-free image sources for a **flowchart** visual aid.

### Flowchart Criteria
- Clear expression of processes, procedures and cause-effect chains
- Encourages logical thinking and step-by-step understanding
- Organizes a complex process systematically
- Visualizes temporal order or logical flow
- Structures a problem-solving sequence

### Output Format
Answer with JSON only. Do not include any other text.

```json
{
  "type": "flowchart",
  "freeImageSources": [
    {
      "site": "Pixabay",
      "searchKeywords": "keyword1, keyword2",
      "url": "https://pixabay.com/images/search/keywords/"
    },
    {
      "site": "Unsplash",
      "searchKeywords": "keyword3, keyword4",
      "url": "https://unsplash.com/s/photos/keywords"
    },
    {
      "site": "Pexels",
      "searchKeywords": "keyword5, keyword6",
      "url": "https://www.pexels.com/search/keywords/"
    }
  ],
  "imageGenerationPrompt": {
    "purpose": "Learning material for primary and middle school (grade 6, social studies)",
    "conditions": "16:9 ratio, 1920x1080 resolution, flowchart style",
    "composition": "Elements: shapes and arrows laid out systematically for each step of the process. Layout: logical top-to-bottom or left-to-right flow. Color and style: color coding for clear separation, clean shapes and lines. Text: the key content of each step, kept short. Approach: stepwise, intuitive visualization of the process.",
    "precautions": "Keep each step clearly separated and the flow simple; avoid branching that is hard to follow. Preserve a logical order learners can trace."
  }
}
```

### Mandatory Validation Rules
1. freeImageSources must contain exactly 3 sites.
2. Every URL must be a reachable address.
3. Fill all four imageGenerationPrompt fields (purpose, conditions, composition, precautions).
4. State the grade and subject concretely in purpose.
5. Cover elements, layout, color and style, text and approach in composition.
6. Follow the JSON format exactly so the response parses without errors.
"#;

pub const GRAPH_SEED_TEMPLATE: &str = r#"### Instructions
For the passage below, produce as JSON the image generation prompt and
royalty-free image sources for a **graph** visual aid.

### Graph Criteria
- Effective visualization of numeric data
- Supports comparison and trend reading
- Builds quantitative understanding and data literacy
- Makes change and relationships explicit
- Encourages statistical thinking

### Output Format
Answer with JSON only. Do not include any other text.

```json
{
  "type": "graph",
  "freeImageSources": [
    {
      "site": "Pixabay",
      "searchKeywords": "keyword1, keyword2",
      "url": "https://pixabay.com/images/search/keywords/"
    },
    {
      "site": "Unsplash",
      "searchKeywords": "keyword3, keyword4",
      "url": "https://unsplash.com/s/photos/keywords"
    },
    {
      "site": "Pexels",
      "searchKeywords": "keyword5, keyword6",
      "url": "https://www.pexels.com/search/keywords/"
    }
  ],
  "imageGenerationPrompt": {
    "purpose": "Learning material for primary and middle school (grade 6, social studies)",
    "conditions": "16:9 ratio, 1920x1080 resolution, graph style",
    "composition": "Elements: a finished graph with clear axes, data points and a legend. Layout: standard form with the origin at the bottom left. Color and style: distinct colors per series, clean grid and axes. Text: axis labels, a title and value markings. Approach: a visual form that makes the change or relationship in the data obvious.",
    "precautions": "Keep the values accurate and readable, with tick marks and the legend clearly visible. Aim for a graph learners can interpret at a glance."
  }
}
```

### Mandatory Validation Rules
1. freeImageSources must contain exactly 3 sites.
2. Every URL must be a reachable address.
3. Fill all four imageGenerationPrompt fields (purpose, conditions, composition, precautions).
4. State the grade and subject concretely in purpose.
5. Cover elements, layout, color and style, text and approach in composition.
6. Follow the JSON format exactly so the response parses without errors.
"#;

pub const TABLE_SEED_TEMPLATE: &str = r#"### Instructions
For the passage below, produce as JSON the image generation prompt and
royalty-free image sources for a **table** visual aid.

### Table Criteria
- Systematic organization and structuring of information
- Easy item-by-item comparison and classification
- Summarizes complex information
- Presents related data side by side
- Builds systematic thinking and organization skills

### Output Format
Answer with JSON only. Do not include any other text.

```json
{
  "type": "table",
  "freeImageSources": [
    {
      "site": "Pixabay",
      "searchKeywords": "keyword1, keyword2",
      "url": "https://pixabay.com/images/search/keywords/"
    },
    {
      "site": "Unsplash",
      "searchKeywords": "keyword3, keyword4",
      "url": "https://unsplash.com/s/photos/keywords"
    },
    {
      "site": "Pexels",
      "searchKeywords": "keyword5, keyword6",
      "url": "https://www.pexels.com/search/keywords/"
    }
  ],
  "imageGenerationPrompt": {
    "purpose": "Learning material for primary and middle school (grade 6, social studies)",
    "conditions": "16:9 ratio, 1920x1080 resolution, table style",
    "composition": "Elements: a finished table with clear headers and row/column structure. Layout: grid starting from the top left. Color and style: header separated from body by color, easy-to-read borders. Text: appropriate content and labels in every cell. Approach: classify and organize the information as a table.",
    "precautions": "Place every item where it belongs and keep rows and columns clearly separated. Aim for a structure learners can scan and compare easily."
  }
}
```

### Mandatory Validation Rules
1. freeImageSources must contain exactly 3 sites.
2. Every URL must be a reachable address.
3. Fill all four imageGenerationPrompt fields (purpose, conditions, composition, precautions).
4. State the grade and subject concretely in purpose.
5. Cover elements, layout, color and style, text and approach in composition.
6. Follow the JSON format exactly so the response parses without errors.
"#;
