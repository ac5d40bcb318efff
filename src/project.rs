use crate::result::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OutputDescriptor {
    pub dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum OutputSection {
    Single(OutputDescriptor),
    Multiple(Vec<OutputDescriptor>),
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Project {
    pub name: String,
    pub output: Option<OutputSection>,
    pub build_steps: Option<Vec<String>>,
}

impl Project {
    pub fn load(path: &str) -> Result<Project> {
        let json = std::fs::read_to_string(path)?;
        let project: Project = serde_json::from_str(&json)?;
        Ok(project)
    }

    pub fn output_directories(&self) -> Vec<String> {
        let descriptors = match &self.output {
            Some(OutputSection::Single(descriptor)) => std::slice::from_ref(descriptor),
            Some(OutputSection::Multiple(descriptors)) => descriptors.as_slice(),
            None => &[],
        };

        descriptors
            .iter()
            .filter_map(|descriptor| descriptor.dir.as_deref())
            .filter(|dir| !dir.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Project {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn single_output_object_yields_one_directory() {
        let project = parse(r#"{"name": "demo", "output": {"dir": "lib"}}"#);
        assert_eq!(project.output_directories(), vec!["lib"]);
    }

    #[test]
    fn output_array_preserves_declaration_order() {
        let project = parse(r#"{"name": "demo", "output": [{"dir": "lib"}, {"dir": "dist"}]}"#);
        assert_eq!(project.output_directories(), vec!["lib", "dist"]);
    }

    #[test]
    fn missing_output_section_yields_no_directories() {
        let project = parse(r#"{"name": "demo"}"#);
        assert!(project.output_directories().is_empty());
    }

    #[test]
    fn empty_and_absent_dir_attributes_are_discarded() {
        let project = parse(r#"{"name": "demo", "output": [{"dir": ""}, {}, {"dir": "dist"}]}"#);
        assert_eq!(project.output_directories(), vec!["dist"]);
    }

    #[test]
    fn null_dir_attribute_is_discarded() {
        let project = parse(r#"{"name": "demo", "output": {"dir": null}}"#);
        assert!(project.output_directories().is_empty());
    }

    #[test]
    fn duplicate_directories_are_kept_verbatim() {
        let project = parse(r#"{"name": "demo", "output": [{"dir": "lib"}, {"dir": "lib"}]}"#);
        assert_eq!(project.output_directories(), vec!["lib", "lib"]);
    }

    #[test]
    fn build_steps_are_optional() {
        let project = parse(r#"{"name": "demo", "output": {"dir": "lib"}}"#);
        assert!(project.build_steps.is_none());
    }
}
