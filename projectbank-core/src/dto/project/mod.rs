//! Project DTOs

use crate::domain::project::Project;
use serde::{Deserialize, Serialize};

/// Full read projection of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub author_id: i32,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        ProjectDto {
            id: project.id,
            name: project.name,
            description: project.description,
            author_id: project.author_id,
        }
    }
}

/// Simplified projection used by listing endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i32,
    pub name: String,
}

/// Request to create a new project posting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub author_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_converts_to_dto() {
        let project = Project {
            id: 1,
            name: "Project".to_string(),
            description: "Body of project".to_string(),
            author_id: 2,
        };

        let dto: ProjectDto = project.into();

        assert_eq!(
            dto,
            ProjectDto {
                id: 1,
                name: "Project".to_string(),
                description: "Body of project".to_string(),
                author_id: 2,
            }
        );
    }
}
