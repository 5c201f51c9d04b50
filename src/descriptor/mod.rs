//! Generated build descriptor, viewed as ordered lines

pub mod file;
pub mod variable;

pub use file::DescriptorFile;
pub use variable::{Variable, VariableDefinition};

/// Ordered lines of a descriptor. Each line keeps its own terminator
/// (`\n`, `\r\n`, or none for an unterminated last line).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildDescriptor {
    lines: Vec<String>,
}

impl BuildDescriptor {
    pub fn parse(text: &str) -> Self {
        BuildDescriptor {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

impl FromIterator<String> for BuildDescriptor {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        BuildDescriptor {
            lines: iter.into_iter().collect(),
        }
    }
}
