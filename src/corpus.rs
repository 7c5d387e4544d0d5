use algograph::graph::*;
use regex::Regex;
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    io,
    path::Path,
};

/// An immutable corpus of linked documents: the link graph plus the
/// page-name table the estimators' `VertexId`s map back to.
///
/// Construction enforces what the estimators assume: links to pages
/// outside the corpus and links from a page to itself are dropped.
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    vertices: BTreeMap<String, VertexId>,
    pages: HashMap<VertexId, String, ahash::RandomState>,
}

impl Corpus {
    /// Builds a corpus from page names and the raw link targets found in
    /// each page.
    pub fn from_links(links: BTreeMap<String, HashSet<String, ahash::RandomState>>) -> Self {
        let mut graph = directed::TreeBackedGraph::new();
        let mut vertices = BTreeMap::new();
        let mut pages = HashMap::with_hasher(ahash::RandomState::new());
        for name in links.keys() {
            let v = graph.add_vertex();
            vertices.insert(name.clone(), v);
            pages.insert(v, name.clone());
        }
        for (name, targets) in links.iter() {
            let u = *vertices.get(name).unwrap();
            for target in targets.iter() {
                if target == name {
                    continue;
                }
                let Some(v) = vertices.get(target) else {
                    continue;
                };
                graph.add_edge(u, *v);
            }
        }
        Self {
            graph,
            vertices,
            pages,
        }
    }

    /// Reads every `.html` file in `dir` and extracts its `href` targets.
    /// Non-HTML files are ignored.
    pub fn crawl(dir: &Path) -> io::Result<Self> {
        let href = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
        let mut links = BTreeMap::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(".html") {
                continue;
            }
            let contents = std::fs::read_to_string(entry.path())?;
            let targets: HashSet<String, ahash::RandomState> = href
                .captures_iter(&contents)
                .map(|c| c[1].to_string())
                .collect();
            links.insert(name, targets);
        }
        Ok(Self::from_links(links))
    }

    pub fn graph(&self) -> &directed::TreeBackedGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, page: &str) -> Option<VertexId> {
        self.vertices.get(page).copied()
    }

    pub fn page(&self, v: VertexId) -> Option<&str> {
        self.pages.get(&v).map(|name| name.as_str())
    }

    /// Pairs a rank mapping with page names, sorted by page name.
    pub fn named<'a>(
        &'a self,
        ranks: &HashMap<VertexId, f64, ahash::RandomState>,
    ) -> Vec<(&'a str, f64)> {
        self.vertices
            .iter()
            .map(|(name, v)| (name.as_str(), *ranks.get(v).unwrap()))
            .collect()
    }
}
