//! Regex + brace/indentation-depth chunker.
//!
//! No AST is built. Top-level definitions are found with a per-language
//! regex table; a definition's extent is then approximated by tracking
//! brace depth (C-family languages), indentation depth (Python), or
//! `def`/`end` keyword depth (Ruby) line by line from the match onward
//! until the enclosing scope closes. Strings and comments are not
//! excluded from the depth count, so a brace inside a string literal can
//! throw off an individual chunk's boundary; this is a deliberate
//! line-level approximation, not a parser.

use std::path::Path;

use mcb_domain::entities::CodeChunk;
use mcb_domain::ports::providers::LanguageChunkingProvider;
use mcb_domain::error::Result;
use regex::Regex;
use serde_json::json;

const SUPPORTED: &[&str] = &["rust", "python", "typescript", "javascript", "go", "java", "ruby", "c", "cpp"];

/// Depth-tracking strategy a language's definitions close with.
#[derive(Clone, Copy)]
enum Engine {
    Brace,
    Indent,
    Keyword,
}

struct LangRules {
    engine: Engine,
    class_re: Option<Regex>,
    fn_re: Regex,
}

fn rules_for(language: &str) -> Option<LangRules> {
    match language {
        "rust" => Some(LangRules {
            engine: Engine::Brace,
            class_re: Regex::new(r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:struct|enum|trait)\s+([A-Za-z_][A-Za-z0-9_]*)").ok(),
            fn_re: Regex::new(r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?(?:unsafe\s+)?fn\s+([A-Za-z_][A-Za-z0-9_]*)").ok()?,
        }),
        "python" => Some(LangRules {
            engine: Engine::Indent,
            class_re: Regex::new(r"^(\s*)class\s+([A-Za-z_][A-Za-z0-9_]*)").ok(),
            fn_re: Regex::new(r"^(\s*)def\s+([A-Za-z_][A-Za-z0-9_]*)").ok()?,
        }),
        "typescript" | "javascript" => Some(LangRules {
            engine: Engine::Brace,
            class_re: Regex::new(r"^\s*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_][A-Za-z0-9_]*)").ok(),
            fn_re: Regex::new(r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s+([A-Za-z_][A-Za-z0-9_]*)").ok()?,
        }),
        "go" => Some(LangRules {
            engine: Engine::Brace,
            class_re: Regex::new(r"^\s*type\s+([A-Za-z_][A-Za-z0-9_]*)\s+struct").ok(),
            fn_re: Regex::new(r"^\s*func\s+(?:\([^)]*\)\s*)?([A-Za-z_][A-Za-z0-9_]*)").ok()?,
        }),
        "java" => Some(LangRules {
            engine: Engine::Brace,
            class_re: Regex::new(r"^\s*(?:public|private|protected)?\s*(?:static\s+)?(?:abstract\s+)?(?:final\s+)?class\s+([A-Za-z_][A-Za-z0-9_]*)").ok(),
            fn_re: Regex::new(
                r"^\s*(?:public|private|protected)?\s*(?:static\s+)?(?:final\s+)?[A-Za-z_][\w<>\[\],\s]*\s+([A-Za-z_][A-Za-z0-9_]*)\s*\([^;]*\)\s*\{?\s*$",
            )
            .ok()?,
        }),
        "ruby" => Some(LangRules {
            engine: Engine::Keyword,
            class_re: Regex::new(r"^\s*class\s+([A-Za-z_][A-Za-z0-9_]*)").ok(),
            fn_re: Regex::new(r"^\s*def\s+([A-Za-z_][A-Za-z0-9_!?=]*)").ok()?,
        }),
        "c" | "cpp" => Some(LangRules {
            engine: Engine::Brace,
            class_re: if language == "cpp" {
                Regex::new(r"^\s*class\s+([A-Za-z_][A-Za-z0-9_]*)").ok()
            } else {
                None
            },
            fn_re: Regex::new(r"^\s*[A-Za-z_][\w<>\[\],\*\s]*\s+([A-Za-z_][A-Za-z0-9_]*)\s*\([^;]*\)\s*\{?\s*$").ok()?,
        }),
        _ => None,
    }
}

#[derive(Debug, Clone)]
struct Span {
    name: String,
    is_class: bool,
    start_line: u32,
    end_line: u32,
}

fn brace_depths(lines: &[&str]) -> (Vec<i64>, Vec<i64>) {
    let mut before = Vec::with_capacity(lines.len());
    let mut after = Vec::with_capacity(lines.len());
    let mut depth: i64 = 0;
    for line in lines {
        before.push(depth);
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        depth += opens - closes;
        after.push(depth);
    }
    (before, after)
}

fn find_brace_end(after: &[i64], start_idx: usize, base_depth: i64) -> usize {
    for (j, &d) in after.iter().enumerate().skip(start_idx) {
        if d <= base_depth {
            return j;
        }
    }
    after.len().saturating_sub(1)
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn find_indent_end(lines: &[&str], start_idx: usize, base_indent: usize) -> usize {
    let mut last_nonblank = start_idx;
    for (j, line) in lines.iter().enumerate().skip(start_idx + 1) {
        if line.trim().is_empty() {
            continue;
        }
        if indent_of(line) <= base_indent {
            return last_nonblank;
        }
        last_nonblank = j;
    }
    lines.len().saturating_sub(1)
}

fn keyword_depths(lines: &[&str]) -> Vec<i64> {
    const OPENERS: &[&str] = &["def ", "class ", "module ", "do", "if ", "unless ", "while ", "until ", "case ", "begin"];
    let mut depth: i64 = 0;
    let mut depths = Vec::with_capacity(lines.len());
    for line in lines {
        let trimmed = line.trim();
        depths.push(depth);
        if trimmed == "end" || trimmed.starts_with("end ") || trimmed.starts_with("end.") {
            depth -= 1;
        } else if OPENERS.iter().any(|kw| trimmed == kw.trim_end() || trimmed.starts_with(kw)) {
            depth += 1;
        }
    }
    depths
}

fn find_keyword_end(depths: &[i64], start_idx: usize, base_depth: i64) -> usize {
    for (j, &d) in depths.iter().enumerate().skip(start_idx + 1) {
        if d <= base_depth {
            return j.saturating_sub(1).max(start_idx);
        }
    }
    depths.len().saturating_sub(1)
}

fn collect_spans(lines: &[&str], re: &Regex, engine: Engine, brace: &(Vec<i64>, Vec<i64>), kw_depths: &[i64]) -> Vec<Span> {
    let mut spans = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = re.captures(line) else { continue };
        let name_idx = if caps.len() > 2 { 2 } else { 1 };
        let Some(name) = caps.get(name_idx).or_else(|| caps.get(1)).map(|m| m.as_str().to_owned()) else { continue };

        let end_idx = match engine {
            Engine::Brace => find_brace_end(&brace.1, i, brace.0[i]),
            Engine::Indent => find_indent_end(lines, i, indent_of(line)),
            Engine::Keyword => find_keyword_end(kw_depths, i, kw_depths[i]),
        };
        spans.push(Span { name, is_class: false, start_line: i as u32 + 1, end_line: end_idx as u32 + 1 });
    }
    spans
}

/// Regex-driven [`LanguageChunkingProvider`] shared by every language this
/// workspace recognizes (see [`SUPPORTED`]).
#[derive(Debug, Default, Clone, Copy)]
pub struct UniversalChunker;

impl UniversalChunker {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LanguageChunkingProvider for UniversalChunker {
    fn chunk_file(&self, path: &Path, content: &str, language: &str) -> Result<Vec<CodeChunk>> {
        let Some(rules) = rules_for(language) else { return Ok(Vec::new()) };
        let lines: Vec<&str> = content.lines().collect();
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let brace = brace_depths(&lines);
        let kw_depths = keyword_depths(&lines);

        let mut classes = rules
            .class_re
            .as_ref()
            .map(|re| collect_spans(&lines, re, rules.engine, &brace, &kw_depths))
            .unwrap_or_default();
        for c in &mut classes {
            c.is_class = true;
        }

        let functions = collect_spans(&lines, &rules.fn_re, rules.engine, &brace, &kw_depths);

        let file_path = path.to_string_lossy().into_owned();
        let mut chunks = Vec::new();

        for class in &classes {
            let text: String = lines[(class.start_line - 1) as usize..=(class.end_line - 1).min(lines.len() as u32 - 1) as usize].join("\n");
            chunks.push(CodeChunk {
                id: format!("{file_path}:{}:{}", class.start_line, class.name),
                content: text,
                file_path: file_path.clone(),
                start_line: class.start_line,
                end_line: class.end_line,
                language: language.to_owned(),
                metadata: json!({ "kind": "class", "name": class.name }),
            });
        }

        for function in &functions {
            let parent = classes
                .iter()
                .filter(|c| c.start_line <= function.start_line && function.end_line <= c.end_line)
                .min_by_key(|c| function.start_line - c.start_line);
            let kind = if parent.is_some() { "method" } else { "function" };
            let end = function.end_line.min(lines.len() as u32);
            let text: String = lines[(function.start_line - 1) as usize..=(end - 1) as usize].join("\n");

            let mut metadata = json!({ "kind": kind, "name": function.name });
            if let Some(parent) = parent {
                metadata["parent_name"] = json!(parent.name);
            }

            chunks.push(CodeChunk {
                id: format!("{file_path}:{}:{}", function.start_line, function.name),
                content: text,
                file_path: file_path.clone(),
                start_line: function.start_line,
                end_line: end,
                language: language.to_owned(),
                metadata,
            });
        }

        chunks.sort_by_key(|c| c.start_line);
        Ok(chunks)
    }

    fn supported_languages(&self) -> &[&str] {
        SUPPORTED
    }
}

use std::sync::Arc;

use mcb_domain::registry::language::{LANGUAGE_PROVIDERS, LanguageProviderConfig, LanguageProviderEntry};

fn universal_chunker_factory(_config: &LanguageProviderConfig) -> std::result::Result<Arc<dyn LanguageChunkingProvider>, String> {
    Ok(Arc::new(UniversalChunker::new()))
}

#[linkme::distributed_slice(LANGUAGE_PROVIDERS)]
static UNIVERSAL_PROVIDER: LanguageProviderEntry = LanguageProviderEntry {
    name: "universal",
    description: "Regex-driven chunker covering rust/python/js/ts/go/java/ruby/c/cpp",
    build: universal_chunker_factory,
};
