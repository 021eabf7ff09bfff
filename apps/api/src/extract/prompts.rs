// Field-extraction prompt template.
// The `{resume_text}` placeholder is substituted with normalized resume text.

pub const RESUME_PARSE_PROMPT: &str = r#"Extract the following information from the resume in JSON format only:
{
    "Name": "<Name>",
    "Email": "<Email>",
    "Phone": "<Phone>",
    "College": "<College>",
    "City": "<City>",
    "Total Experience in years": "<Total Experience in years (include full time only and not part time/ internship)>",
    "Domain of Work": "<Domain of Work>",
    "Top Skills": "<Skill1>, <Skill2>, <Skill3>, <Skill4>, <Skill5>, <Skill6>, <Skill7>, <Skill8>, <Skill9>, <Skill10>",
    "Experience": "<CompanyName1 : Position Only>, <CompanyName2 : Position Only>",
    "Summary": "<Summary of candidate and experience>"
}

Rules:
1. If any field is unavailable, use 'NA'
2. Only return valid JSON, no additional text
3. Ensure all values are properly escaped for JSON
4. The output must be parseable as strict JSON
5. For Experience field, list companies in reverse chronological order (newest first)
6. For Total Experience in years, calculate and provide a single number (e.g., "5.5")
7. For Top Skills, provide exactly 10 skills as a comma-separated string
8. If there is no professional experience, set Experience to "Fresher" and Total Experience in years to "0"

Resume text:
{resume_text}"#;
