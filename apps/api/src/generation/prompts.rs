// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt persona for skill extraction from resumes.
/// Composed with `llm_client::prompts::LIST_ONLY_SYSTEM` at the call site.
pub const CV_SKILLS_SYSTEM: &str =
    "You are an expert NLP assistant and HR analyst extracting professional \
    skills from resumes.";

/// CV skill extraction prompt template. Replace `{cv_text}` before sending;
/// append [`CV_SKILLS_JOB_CONTEXT_TEMPLATE`] when a job description is available.
pub const CV_SKILLS_PROMPT_TEMPLATE: &str = r#"Extract a clean list of professional skills from the resume text below.

Instructions:
- Focus ONLY on hard/technical and domain-specific skills (e.g., "Python", "Data Analysis", "Project Management", "TensorFlow", "AutoCAD", "SEO").
- Ignore soft skills (like communication, leadership, teamwork) and generic words (like motivated, dedicated).
- Do NOT invent or infer skills. Extract only those explicitly mentioned.
- Do NOT include duplicates or explanations.
- Be as precise and concise as possible.
- IMPORTANT: Return the result as a valid JSON array of strings in one line only (e.g., ["Python", "Pandas", "AWS"]).
- Do not add any explanation or introduction. Just output the array directly.

Resume Text:
{cv_text}"#;

/// Appended to the CV extraction prompt when the caller supplies a JD.
/// Replace `{job_desc}` before sending.
pub const CV_SKILLS_JOB_CONTEXT_TEMPLATE: &str = r#"

Optional Context, the target job description:
{job_desc}

Use this job description to:
- Prioritize skills that are most relevant to the role.
- Map and standardize skill names from the resume to match how they appear in the job description.
- Example: if the resume says "Jupyter Notebooks" and the job says "Jupyter", return "Jupyter"."#;

/// System prompt persona for skill extraction from job descriptions.
/// Composed with `llm_client::prompts::LIST_ONLY_SYSTEM` at the call site.
pub const JOB_SKILLS_SYSTEM: &str =
    "You are an expert in Natural Language Processing and recruitment analysis.";

/// JD skill extraction prompt template. Replace `{job_desc}` before sending.
/// JD wording is the reference naming format for later comparison.
pub const JOB_SKILLS_PROMPT_TEMPLATE: &str = r#"Extract a list of hard or technical skills mentioned in the following job description.

Instructions:
- Only include specific tools, technologies, programming languages, frameworks, platforms, and professional domain skills.
- Do NOT include soft skills (like leadership, communication, time management).
- Do NOT invent or infer skills. Only extract those explicitly mentioned.
- Avoid duplicates, be precise.
- The extracted skills will be used as the reference naming format for comparison against resumes. Avoid variations or synonyms; use the exact wording from the job description.
- IMPORTANT: Return the result as a valid JSON array of strings in one line only (e.g., ["Java", "Spring Boot", "REST APIs"]).
- Do not add any explanation or introduction. Just output the array directly.

Job Description:
{job_desc}"#;

/// System prompt for cover letter generation.
pub const COVER_LETTER_SYSTEM: &str =
    "You are a professional career advisor and expert in writing compelling \
    cover letters.";

/// Cover letter prompt template.
/// Replace: {language}, {cv_text}, {job_desc}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Using ONLY the information extracted from the following resume and job description, write a well-formatted, tailored, and impactful cover letter in {language}:

Resume:
{cv_text}

Job Description:
{job_desc}

Instructions:
- Extract the candidate's name, email, phone number, education, skills, projects, and certifications from the resume (do NOT make up anything).
- Start with 'Dear [Hiring Manager's Name],' if the name is available in the job description. Otherwise, use 'Dear Hiring Manager,'.
- Use a creative and varied introduction: a thought-provoking question, a bold statement about the candidate's mission or achievement, or a connection to the company's mission.
- Avoid repeating generic templates or common phrases across multiple letters.
- Organize the letter into clear paragraphs, separated by extra line breaks for readability.
- Highlight relevant technical experience and academic projects aligned with the job.
- Use a professional and enthusiastic tone.
- End with a polite closing, including the applicant's name and contact information as found in the resume.
- Do NOT use any placeholders like [Your Name] or [Email].

The final output must look like a complete, high-quality cover letter suitable for submission."#;

/// System prompt persona for structured CV evaluation.
/// Composed with `llm_client::prompts::JSON_ONLY_SYSTEM` at the call site.
pub const CV_EVALUATION_SYSTEM: &str =
    "You are a professional career coach and hiring manager with 15+ years of \
    experience.";

/// CV evaluation prompt template.
/// Replace: {job_title_line} (empty or "Target Job Title: ..."), {cv_text}
pub const CV_EVALUATION_PROMPT_TEMPLATE: &str = r#"{job_title_line}Analyze the following resume in depth and return a complete structured evaluation.

Return a JSON object with this EXACT schema (no extra fields):
{
  "overall_rating": 7.5,
  "summary": "brief summary of the resume's effectiveness",
  "fit_for_role": "assessment of how well this CV aligns with the target role",
  "evaluation": {
    "structure": "comment on formatting, logical flow, and sections",
    "clarity": "comment on how clearly the candidate communicates ideas and experience",
    "language_quality": "comment on grammar, tone, and vocabulary",
    "length": "too long/short or appropriate",
    "consistency": "comment on how consistent formatting and content are"
  },
  "section_feedback": {
    "Header": "name, contact info, layout",
    "Education": "relevance, structure, detail",
    "Experience": "impact, clarity, action verbs, metrics",
    "Skills": "relevance, specificity"
  },
  "strengths": ["bullet point"],
  "weaknesses": ["bullet point"],
  "recommendations": ["concrete suggestion for improvement"]
}

Rules:
- "overall_rating" is a number between 0.0 and 10.0.
- "section_feedback" keys cover the sections actually present in the resume (Header, Summary, Education, Experience, Skills, Projects, Certifications, Extras).
- "strengths", "weaknesses", and "recommendations" are arrays of short bullet strings.

Resume Text:
{cv_text}"#;
