use std::fmt;

/// Variables the patcher is allowed to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Objs,
    Hdrs,
}

impl Variable {
    pub const ALL: [Variable; 2] = [Variable::Objs, Variable::Hdrs];

    pub fn name(&self) -> &'static str {
        match self {
            Variable::Objs => "OBJS",
            Variable::Hdrs => "HDRS",
        }
    }

    /// Literal line prefix, matched at column 0 only.
    pub fn prefix(&self) -> &'static str {
        match self {
            Variable::Objs => "OBJS = ",
            Variable::Hdrs => "HDRS = ",
        }
    }

    /// Probe artifact injected into this variable's token list.
    pub fn probe_artifact(&self) -> &'static str {
        match self {
            Variable::Objs => "probes.o",
            Variable::Hdrs => "probes.h",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A descriptor line of the form `NAME = token token ...`.
///
/// Borrowed from the line it was parsed from; `rest` still carries the
/// line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableDefinition<'a> {
    variable: Variable,
    rest: &'a str,
}

impl<'a> VariableDefinition<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        Variable::ALL.iter().find_map(|&variable| {
            line.strip_prefix(variable.prefix())
                .map(|rest| VariableDefinition { variable, rest })
        })
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'a str> {
        self.rest.split_whitespace()
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens().any(|t| t == token)
    }

    /// The full line with `token` inserted directly after the prefix.
    pub fn with_leading_token(&self, token: &str) -> String {
        let prefix = self.variable.prefix();
        let mut line = String::with_capacity(prefix.len() + token.len() + 1 + self.rest.len());
        line.push_str(prefix);
        line.push_str(token);
        line.push(' ');
        line.push_str(self.rest);
        line
    }
}
