//! Teacher form input and the request sent to the service

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Labels;

/// Form fields entered by the teacher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeacherInput {
    pub topic: String,
    pub objective: String,
    pub grade_level: String,
    pub name: String,
    pub student_submission: String,
}

impl TeacherInput {
    /// A student name or submission was given, so evaluation is requested
    pub fn has_student_info(&self) -> bool {
        !self.name.trim().is_empty() || !self.student_submission.trim().is_empty()
    }

    /// Grade level with the locale suffix, empty when no grade was entered
    pub fn grade_display(&self, labels: &Labels) -> String {
        if self.grade_level.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.grade_level, labels.grade_suffix)
        }
    }

    /// Build the free-text prompt block the service expects
    pub fn to_prompt(&self, labels: &Labels) -> String {
        let mut prompt = format!(
            "topic: {}\nobjective: {}\ngrade_level: {}",
            self.topic,
            self.objective,
            self.grade_display(labels)
        );

        if self.has_student_info() {
            let name = self.name.trim();
            let name = if name.is_empty() {
                labels.anonymous.as_str()
            } else {
                name
            };
            prompt.push_str("\nname: ");
            prompt.push_str(name);
            prompt.push_str("\nstudent_submission: ");
            prompt.push_str(self.student_submission.trim());
        }

        prompt
    }
}

/// Body of `POST {api}/rubric`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricRequest {
    pub teacher_input: String,
    pub thread_id: String,
}

impl RubricRequest {
    /// Build a request with a fresh thread id
    pub fn new(input: &TeacherInput, labels: &Labels) -> Self {
        Self::with_thread_id(input, labels, new_thread_id())
    }

    pub fn with_thread_id(input: &TeacherInput, labels: &Labels, thread_id: String) -> Self {
        Self {
            teacher_input: input.to_prompt(labels),
            thread_id,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Generate an opaque conversation id for the service
pub fn new_thread_id() -> String {
    Uuid::new_v4().simple().to_string()
}
