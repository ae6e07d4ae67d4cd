// All LLM prompt constants for the Mock Interview module.

/// System prompt for interview question generation.
pub const QUESTIONS_SYSTEM: &str =
    "You are a professional career coach and technical interviewer with \
    expertise in assessing candidates based on their resumes and job roles.";

/// Question generation prompt template.
/// Replace: {language}, {job_title}, {cv_text}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate a set of realistic, innovative, challenging, and role-specific mock interview questions in {language} based ONLY on the following:

1. The job title: "{job_title}"
2. The resume content below.

Resume:
{cv_text}

=== GUIDELINES ===
- Provide a mix of technical, situational, and behavioral questions.
- Tailor the questions to the job title itself (core technologies, system design, algorithms, role-specific deep technical skills) and to the skills, projects, and experiences found in the resume.
- Include at least 2 strong technical questions based purely on the job title, even if not mentioned in the resume.
- Prioritize core technical concepts, real-world problem solving, communication and teamwork, and project impact.
- Avoid repeating question themes or rewording the same concept.
- Each question should be concise but meaningful.
- Ask 10 to 12 questions max.

=== FORMAT ===
Output a numbered list like the following:
1. ...
2. ...
3. ...

Do NOT use any placeholders like [Candidate Name] or [Company Name].
Only return the final list of questions in plain text."#;

/// System prompt for interview answer evaluation.
pub const EVALUATION_SYSTEM: &str =
    "You are a senior technical recruiter and interview coach rigorously \
    evaluating a candidate's mock interview performance.";

/// Answer evaluation prompt template.
/// Replace: {cv_text}, {job_title}, {qa_block}, {language}
/// Invalid answers in the transcript already carry the sentinel
/// "No valid answer was provided."
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate the candidate's mock interview performance based on their resume, the job title, and their answers below.

For each question-answer pair, follow this strict process:

1. First, verify the answer is relevant to the specific question asked.
   - If the transcript already says "No valid answer was provided.", or the answer is off-topic, too short (less than 10 words), blank, or nonsensical, do NOT analyze it. Use this format:

**Q[n]: [The question]**
**A[n]: [The answer]**
Invalid Answer
**Score: 0/10**
**Reason:** No valid answer was provided. The response was either too short, irrelevant, or nonsensical.

2. If the answer is relevant, evaluate it on: technical relevance (30%), communication and clarity (25%), confidence and structure (20%), fit for the role (25%). Use this format:

**Q[n]: [The question]**
**A[n]: [The answer]**
**Score: x/10**
**Evaluation:** [Brief evaluation, strengths and weaknesses]
**Suggested Improvements:** [Specific, practical advice if applicable]

Additional rules:
- Do NOT guess what the candidate "meant" or evaluate unrelated content.
- Do NOT hallucinate or infer missing meaning.
- Do NOT provide a score unless the answer meets the criteria.

Finally, include:
- A total average score (excluding invalid answers)
- A concise, professional summary of the candidate's overall performance
- A final hiring recommendation: Strong Candidate, Needs Improvement, or Not Ready

Resume:
{cv_text}

Job Title:
{job_title}

Interview Responses:
{qa_block}

Your response should be in {language}, clear, objective, and professional."#;
