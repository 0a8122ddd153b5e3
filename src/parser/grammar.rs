//! Line patterns of the pipeline language

use crate::core::{Input, Step};
use rand::{distributions::Alphanumeric, Rng};
use regex::Regex;

/// Identifier: ASCII letters, digits and underscore
const IDENT: &str = "[A-Za-z0-9_]+";

/// A line accepted in the declaration section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `use <name>`
    Use(String),
    /// `rand <name>`
    Rand(String),
    /// `read <name> ["default"]`
    Read(Input),
    /// `begin`
    Begin,
}

/// Compiled patterns for every line form
#[derive(Debug, Clone)]
pub struct Grammar {
    definition: Regex,
    use_decl: Regex,
    rand_decl: Regex,
    read_decl: Regex,
    exec_assign: Regex,
    assign: Regex,
    exec: Regex,
    end: Regex,
}

impl Grammar {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            definition: Regex::new(&format!(r"^pipeline\s+({IDENT})$"))?,
            use_decl: Regex::new(&format!(r"^use\s+({IDENT})$"))?,
            rand_decl: Regex::new(&format!(r"^rand\s+({IDENT})$"))?,
            read_decl: Regex::new(&format!(r#"^read\s+({IDENT})(?:\s+"(.*)")?$"#))?,
            exec_assign: Regex::new(&format!(r"^({IDENT})\s*=\s*\((.+)\)$"))?,
            assign: Regex::new(&format!(r"^({IDENT})\s*=\s*({IDENT})$"))?,
            exec: Regex::new(r"^\((.+)\)$")?,
            end: Regex::new(&format!(r"^end(?:\s+({IDENT}))?$"))?,
        })
    }

    /// `pipeline <name>`
    pub fn definition(&self, line: &str) -> Option<String> {
        self.definition.captures(line).map(|caps| caps[1].to_string())
    }

    pub fn declaration(&self, line: &str) -> Option<Declaration> {
        if line == "begin" {
            return Some(Declaration::Begin);
        }
        if let Some(caps) = self.use_decl.captures(line) {
            return Some(Declaration::Use(caps[1].to_string()));
        }
        if let Some(caps) = self.rand_decl.captures(line) {
            return Some(Declaration::Rand(caps[1].to_string()));
        }
        self.read_decl.captures(line).map(|caps| {
            Declaration::Read(Input {
                name: caps[1].to_string(),
                default: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
            })
        })
    }

    /// A step line, tried as exec-assign, then assign, then bare exec
    pub fn step(&self, line: &str) -> Option<Step> {
        if let Some(caps) = self.exec_assign.captures(line) {
            return Some(Step::ExecAssign {
                target: caps[1].to_string(),
                command: caps[2].to_string(),
            });
        }
        if let Some(caps) = self.assign.captures(line) {
            return Some(Step::Assign {
                target: caps[1].to_string(),
                source: caps[2].to_string(),
            });
        }
        self.exec.captures(line).map(|caps| Step::Exec {
            command: caps[1].to_string(),
        })
    }

    /// `end` or `end <name>`; the inner option is the output variable
    pub fn end(&self, line: &str) -> Option<Option<String>> {
        self.end
            .captures(line)
            .map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
    }
}

/// Draw a random alphanumeric token
pub fn random_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
