//! Built-in portfolio content, served when no content file is configured.

use crate::content::models::{ContentFile, Profile, ProjectRecord, SocialLinks};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/1200x800.png";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    long_description: &str,
    image_hint: &str,
    skills: &[&str],
    achievements: &[&str],
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        long_description: long_description.to_string(),
        image_url: PLACEHOLDER_IMAGE.to_string(),
        image_hint: image_hint.to_string(),
        project_url: Some("#".to_string()),
        github_url: Some("#".to_string()),
        skills: strings(skills),
        achievements: strings(achievements),
    }
}

pub fn default_content() -> ContentFile {
    ContentFile {
        profile: Profile {
            headline: "I Craft Digital Experiences".to_string(),
            bio: "As a dedicated developer and designer, I specialize in building accessible, \
                  high-quality web applications. My passion lies in creating elegant solutions \
                  to complex problems, always with a focus on user experience and performance."
                .to_string(),
            skills: strings(&[
                "React",
                "Next.js",
                "TypeScript",
                "JavaScript",
                "Node.js",
                "GraphQL",
                "PostgreSQL",
                "Tailwind CSS",
                "Figma",
                "Firebase",
                "Genkit AI",
            ]),
            social_links: SocialLinks {
                github: "https://github.com".to_string(),
                linkedin: "https://linkedin.com/in".to_string(),
                email: "mailto:hello@example.com".to_string(),
            },
        },
        projects: vec![
            project(
                "project-1",
                "E-commerce Platform",
                "A full-stack e-commerce website with a modern, clean design.",
                "Developed a feature-rich e-commerce platform using Next.js for the frontend and \
                 Node.js for the backend. Integrated Stripe for secure payments and implemented a \
                 custom CMS for managing products. The user interface is fully responsive, \
                 providing an optimal shopping experience on all devices.",
                "online store",
                &["Next.js", "React", "Node.js", "Stripe", "Tailwind CSS"],
                &[
                    "Processed over 1,000 transactions in the first month",
                    "Achieved a 95+ score on Google PageSpeed Insights",
                    "Reduced bounce rate by 30% through UI/UX improvements",
                ],
            ),
            project(
                "project-2",
                "AI-Powered Task Manager",
                "A smart task management app that helps you prioritize your work.",
                "This application leverages Genkit AI to provide smart suggestions and automate \
                 task organization. Built with React and Firebase, it offers real-time \
                 collaboration features, customizable workflows, and a beautiful, intuitive \
                 interface. The AI helps users break down large tasks and estimate completion times.",
                "task manager",
                &["React", "Firebase", "Genkit AI", "TypeScript", "Figma"],
                &[
                    "Increased user productivity by an average of 25%",
                    "Featured on a popular tech blog for its innovative use of AI",
                    "Grew to 10,000 active users within three months",
                ],
            ),
            project(
                "project-3",
                "Data Visualization Dashboard",
                "A dashboard for visualizing complex datasets with interactive charts.",
                "Created a powerful data visualization tool using D3.js and React. The dashboard \
                 allows users to upload their own datasets, generate various types of interactive \
                 charts and graphs, and export their visualizations. It is designed to handle \
                 large volumes of data efficiently, providing a smooth and responsive user experience.",
                "data dashboard",
                &["React", "D3.js", "JavaScript", "Data Visualization"],
                &[
                    "Adopted by a financial services company for internal data analysis",
                    "Praised for its intuitive interface and powerful features",
                    "Successfully visualized datasets with over 1 million data points",
                ],
            ),
        ],
    }
}
