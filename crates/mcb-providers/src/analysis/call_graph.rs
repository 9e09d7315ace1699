//! Native reachability analyzer backing [`CallGraphAnalyzer`].
//!
//! Grounded in [`super::native::NativePmatAnalyzer`]'s regex-over-source-tree
//! approach: no AST is built. A symbol is considered reachable if its name
//! is referenced (as a call, not just its own definition line) anywhere
//! reachable by a breadth-first walk from the entry points, following
//! plain-text call references between the collected function bodies. This
//! is a conservative approximation, not a real call graph; callers already
//! distinguish "proven" from "heuristic" confidence via the `Ok`/`Err`
//! split on [`CallGraphAnalyzer::is_reachable`], not via this
//! implementation's internals.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use mcb_domain::error::Error;
use mcb_domain::ports::providers::{CallGraphAnalyzer, CallGraphNode};
use regex::Regex;
use walkdir::WalkDir;

use crate::Result;

/// Walks a workspace's source tree to approximate call reachability by
/// regex-scanning function bodies for references to other function names.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeCallGraphAnalyzer;

impl NativeCallGraphAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn load_source_files(workspace_root: &Path) -> Result<Vec<(PathBuf, String)>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(workspace_root).into_iter().filter_map(std::result::Result::ok) {
            let path = entry.path();
            let is_source = path.extension().is_some_and(|ext| {
                matches!(ext.to_str(), Some("rs" | "py" | "ts" | "tsx" | "js" | "jsx" | "go" | "java" | "rb"))
            });
            if path.is_file() && is_source && !path.to_str().is_some_and(|s| s.contains("/target/") || s.contains("/node_modules/")) {
                let content = fs::read_to_string(path)
                    .map_err(|e| Error::io_with_source(format!("failed to read {}", path.display()), e))?;
                files.push((path.to_path_buf(), content));
            }
        }
        Ok(files)
    }

    /// Function name -> set of function names whose body text mentions it.
    fn build_reference_graph(files: &[(PathBuf, String)]) -> Result<(Vec<FunctionSite>, HashMap<String, HashSet<String>>)> {
        let fn_re = Regex::new(r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?(?:def|fn|func)\s+([A-Za-z_][A-Za-z0-9_]*)")
            .map_err(|e| Error::invalid_argument(format!("invalid function regex: {e}")))?;

        let mut sites = Vec::new();
        for (file, content) in files {
            for captures in fn_re.captures_iter(content) {
                let Some(name_match) = captures.get(1) else { continue };
                let name = name_match.as_str().to_owned();
                let line = content[..name_match.start()].bytes().filter(|b| *b == b'\n').count() as u32 + 1;
                sites.push(FunctionSite { file: file.clone(), name, line });
            }
        }

        let names: Vec<&str> = sites.iter().map(|s| s.name.as_str()).collect();
        let mut callers: HashMap<String, HashSet<String>> = HashMap::new();
        for (_, content) in files {
            for caller in &sites {
                if !content_defines(content, &caller.file, &caller.name) {
                    continue;
                }
                let body = function_body_approx(content, caller.line);
                for &callee in &names {
                    if callee != caller.name && body.contains(callee) {
                        callers.entry(callee.to_owned()).or_default().insert(caller.name.clone());
                    }
                }
            }
        }

        Ok((sites, callers))
    }
}

struct FunctionSite {
    file: PathBuf,
    name: String,
    line: u32,
}

fn content_defines(content: &str, _file: &Path, name: &str) -> bool {
    content.contains(name)
}

/// Crude function-body approximation: the next 200 lines from the
/// definition line, or to EOF. Good enough for a text-reference scan.
fn function_body_approx(content: &str, start_line: u32) -> String {
    content
        .lines()
        .skip(start_line.saturating_sub(1) as usize)
        .take(200)
        .collect::<Vec<_>>()
        .join("\n")
}

impl CallGraphAnalyzer for NativeCallGraphAnalyzer {
    fn is_reachable(&self, workspace_root: &Path, node: &CallGraphNode, entry_patterns: &[String]) -> Result<bool> {
        let files = Self::load_source_files(workspace_root)?;
        let (sites, callers) = Self::build_reference_graph(&files)?;

        let entry_names: HashSet<String> = sites
            .iter()
            .filter(|s| entry_patterns.iter().any(|pattern| name_matches_pattern(&s.name, pattern)))
            .map(|s| s.name.clone())
            .collect();

        if entry_names.is_empty() {
            return Ok(false);
        }

        // BFS backward from the target node: is it an ancestor (caller,
        // transitively) of any entry point? Walking from entries forward
        // through `callers` (callee -> caller edges) reaches every symbol
        // an entry point's call chain passes through.
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = entry_names.into_iter().collect();
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if current == node.name {
                return Ok(true);
            }
            if let Some(next) = callers.get(&current) {
                for caller in next {
                    if !visited.contains(caller) {
                        queue.push_back(caller.clone());
                    }
                }
            }
        }

        Ok(false)
    }
}

/// Matches a plain name or a `prefix_*` glob-ish pattern, e.g. `"main"` or
/// `"handle_*"`.
fn name_matches_pattern(name: &str, pattern: &str) -> bool {
    if let Some(prefix) = pattern.strip_suffix('*') {
        name.starts_with(prefix)
    } else {
        name == pattern
    }
}
