//! Dashboard URL paths.
//!
//! Paths have the shape `/<section>/<country>/<rest...>`, e.g.
//! `/connectivity/Burkina+Faso/summary`.

use std::fmt;

/// Dashboard page named by the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Connectivity,
    Freedom,
    Gender,
    About,
    NotFound,
}

impl Section {
    /// Map a first path segment to its page. Empty falls back to connectivity.
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "" | "connectivity" => Section::Connectivity,
            "freedom" => Section::Freedom,
            "gender" => Section::Gender,
            "about" => Section::About,
            _ => Section::NotFound,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Connectivity => "connectivity",
            Section::Freedom => "freedom",
            Section::Gender => "gender",
            Section::About => "about",
            Section::NotFound => "404",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed dashboard path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPath {
    pub section: Section,
    /// Country as displayed (URL separators decoded to spaces)
    pub country: Option<String>,
    pub rest: Vec<String>,
}

impl DashboardPath {
    pub fn parse(path: &str) -> Self {
        let mut segments = path.split('/').skip(1);
        let section = Section::from_segment(segments.next().unwrap_or(""));
        let country = segments
            .next()
            .filter(|s| !s.is_empty())
            .map(decode_separators);
        let rest = segments.map(str::to_string).collect();

        Self {
            section,
            country,
            rest,
        }
    }
}

/// Read `+` as a space and undo percent-encoding, as browsers report
/// `location.pathname` encoded (`C%C3%B4te+d'Ivoire`). Malformed escapes are
/// left as they are.
pub fn decode_separators(s: &str) -> String {
    let plus_decoded = s.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}

/// Write every space as `+`.
pub fn encode_separators(s: &str) -> String {
    s.replace(' ', "+")
}
