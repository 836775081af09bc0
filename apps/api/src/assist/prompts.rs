// All LLM prompt templates for the assist use cases.
// Placeholders are `{fieldName}` and must match the use case's input schema exactly.
// Reply-shape instructions are added by llm_client::prompts, not here.

/// Project description generation. Replace: {projectName}, {projectDescription},
/// {skillsUsed}, {achievements}
pub const GENERATE_DESCRIPTION_TEMPLATE: &str = r#"You are an AI assistant helping users create compelling project descriptions for their portfolios.

Based on the project's details, create a project description that is engaging, highlights key skills, and showcases the project's achievements.

Project Name: {projectName}
Brief Project Description: {projectDescription}
Skills Used (comma-separated): {skillsUsed}
Achievements (comma-separated): {achievements}

Write a description that is approximately 150-200 words long."#;

/// Keyword suggestion. Replace: {projectName}, {projectDescription}
pub const SUGGEST_KEYWORDS_TEMPLATE: &str = r#"You are an AI assistant designed to improve project descriptions and suggest relevant keywords for better visibility and SEO.

Project Name: {projectName}

Current Project Description: {projectDescription}

Instructions:
1. Analyze the current project description provided.
2. Identify the core technologies, skills, and concepts demonstrated in the project.
3. Suggest an improved description that highlights these aspects more effectively.
4. Generate an array of keywords that are relevant to the project, which will improve its visibility and SEO."#;

/// Tone optimization. Replace: {description}
pub const OPTIMIZE_TONE_TEMPLATE: &str = r#"You are an AI assistant designed to optimize project descriptions for professional portfolios. You will be given a project description, and you will return an optimized version of the description, a list of keywords, and an analysis of the original and optimized tone.

Project Description: {description}

Optimize the description to be more engaging and highlight relevant skills. Extract keywords that would be relevant for someone searching for this project or the skills demonstrated in it. Analyze the tone of the original description and the optimized description."#;
