//! URL pattern compilation and matching.
//!
//! A test case's URL pattern is either a literal path or a template whose
//! `:name` segments bind exactly one path segment. A trailing `*` segment
//! binds the rest of the path. Templates are compiled into a radix-trie
//! router once per test case.

use matchit::Router;
use tracing::warn;

/// Compiled URL pattern for repeated evaluation against observed URLs.
#[derive(Debug, Clone)]
pub struct CompiledUrlPattern {
    pattern: String,
    /// `None` for literal patterns and for templates that failed to compile.
    router: Option<Router<()>>,
}

impl CompiledUrlPattern {
    /// Compile a URL pattern.
    ///
    /// A template the router rejects degrades to exact comparison only.
    pub fn compile(pattern: &str) -> Self {
        let router = to_route(pattern).and_then(|route| {
            let mut router = Router::new();
            match router.insert(route.as_str(), ()) {
                Ok(()) => Some(router),
                Err(e) => {
                    warn!("URL pattern {pattern:?} is not a valid template ({e}); using exact match");
                    None
                }
            }
        });

        Self {
            pattern: pattern.to_string(),
            router,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_template(&self) -> bool {
        self.router.is_some()
    }

    /// Check whether `url` satisfies this pattern.
    pub fn matches(&self, url: &str) -> bool {
        if url == self.pattern {
            return true;
        }

        self.router
            .as_ref()
            .is_some_and(|router| router.at(url).is_ok())
    }

    /// Segment bindings of a templated match, in pattern order.
    ///
    /// An exact match binds nothing and yields an empty list.
    pub fn captures(&self, url: &str) -> Option<Vec<(String, String)>> {
        if url == self.pattern {
            return Some(Vec::new());
        }

        let router = self.router.as_ref()?;
        let matched = router.at(url).ok()?;
        Some(
            matched
                .params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Check whether `observed_url` satisfies `pattern`, compiling on the fly.
///
/// Exact equality short-circuits before any template is compiled.
pub fn url_matches(observed_url: &str, pattern: &str) -> bool {
    observed_url == pattern || CompiledUrlPattern::compile(pattern).matches(observed_url)
}

/// Translate a `:name` template into router syntax.
///
/// Returns `None` when the pattern has no bindings.
fn to_route(pattern: &str) -> Option<String> {
    let segments: Vec<&str> = pattern.split('/').collect();
    let last = segments.len() - 1;
    let mut templated = false;

    let route: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| match segment.strip_prefix(':') {
            Some(name) if !name.is_empty() => {
                templated = true;
                format!("{{{name}}}")
            }
            _ if *segment == "*" && i == last => {
                templated = true;
                "{*rest}".to_string()
            }
            _ => segment.replace('{', "{{").replace('}', "}}"),
        })
        .collect();

    templated.then(|| route.join("/"))
}
