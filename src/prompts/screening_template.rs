pub const SCREENING_SEED_TEMPLATE: &str = r#"### Instructions
Analyze the vocabulary-learning passage below and produce, as JSON only, the
suitability of each of the five visual aid types together with a short reason
per type.

### Analysis Criteria
1. **illustration**: makes abstract concepts concrete, sparks imagination and interest, improves learner comprehension
2. **photo**: connects to the real world, shows actual cases, provides vivid first-hand impressions
3. **flowchart**: expresses processes, procedures and cause-effect chains, supports step-by-step logical thinking
4. **graph**: visualizes numeric data, supports comparison, builds quantitative understanding
5. **table**: organizes information systematically, eases item-by-item comparison and summary

### Output Format
Answer with JSON only. Do not include any other text.

```json
{
  "visualTypeSuitability": {
    "illustration": 25,
    "photo": 20,
    "flowchart": 30,
    "graph": 15,
    "table": 10
  },
  "reasonSummary": [
    {
      "type": "illustration",
      "reason": "Turns the abstract concept into a concrete image that helps learners grasp it."
    },
    {
      "type": "photo",
      "reason": "Shows the real phenomenon or case, strengthening the link to everyday experience."
    },
    {
      "type": "flowchart",
      "reason": "Lays the process out step by step, encouraging logical reasoning."
    },
    {
      "type": "graph",
      "reason": "Expresses numeric change visually and supports quantitative understanding."
    },
    {
      "type": "table",
      "reason": "Organizes the related facts so they can be compared and summarized item by item."
    }
  ]
}
```

### Mandatory Validation Rules
1. The visualTypeSuitability values must sum to exactly 100.
2. The reasonSummary array must contain exactly 5 elements.
3. Keep every reason under 100 characters.
4. Base each suitability score on the passage content, subject and grade.
5. Follow the JSON format exactly so the response parses without errors.
"#;
