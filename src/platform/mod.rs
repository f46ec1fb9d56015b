//! Retail platform detection and product identifier extraction
//!
//! Every supported retailer is one row in [`PLATFORMS`]: a detection keyword,
//! the numeric code the price API expects, and the ordered list of patterns
//! used to pull the product identifier out of a URL. Adding a platform is a
//! table entry, not a new branch.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Code sent upstream when no platform-specific code applies
pub const DEFAULT_CODE: &str = "2";

/// Display name for URLs that match no known platform
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// Supported retail platforms, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Amazon,
    Flipkart,
    Myntra,
    Ajio,
    Nykaa,
}

/// Static description of a platform
pub struct PlatformSpec {
    pub platform: Platform,
    pub name: &'static str,
    /// Lowercase substring that identifies the platform in a URL
    pub keyword: &'static str,
    /// Retailer selector understood by the price API (`pos` parameter)
    pub code: &'static str,
    /// Identifier patterns, tried in order; capture group 1 is the identifier.
    /// Case folding is ASCII-only (`(?i-u)`), so `ſ` or the Kelvin sign never
    /// pass for `s` or `K`.
    patterns: &'static [&'static str],
}

/// Platform table. Detection walks it top to bottom and the first keyword hit wins.
pub static PLATFORMS: [PlatformSpec; 5] = [
    PlatformSpec {
        platform: Platform::Amazon,
        name: "Amazon",
        keyword: "amazon",
        code: "63",
        patterns: &[r"(?i-u)/(?:dp|gp/product)/([A-Z0-9]{10})"],
    },
    PlatformSpec {
        platform: Platform::Flipkart,
        name: "Flipkart",
        keyword: "flipkart",
        code: "2",
        patterns: &[r"(?i-u)[?&]pid=([A-Z0-9]+)", r"(?i-u)/p/(itm[A-Za-z0-9]+)"],
    },
    PlatformSpec {
        platform: Platform::Myntra,
        name: "Myntra",
        keyword: "myntra",
        code: "111",
        patterns: &[r"(?i-u)/([0-9]{6,10})(?:/buy|$|\?)"],
    },
    PlatformSpec {
        platform: Platform::Ajio,
        name: "Ajio",
        keyword: "ajio",
        code: "2191",
        patterns: &[
            r"(?i-u)/p/([A-Za-z0-9_-]+)",
            r"(?i-u)/([A-Za-z0-9_-]{6,})(?:/|\?|$)",
        ],
    },
    PlatformSpec {
        platform: Platform::Nykaa,
        name: "Nykaa",
        keyword: "nykaa",
        code: "6068",
        patterns: &[r"(?i-u)/p/([0-9]+)", r"(?i-u)/([0-9]{6,12})(?:/|\?|$)"],
    },
];

/// Compiled patterns, indexed like [`PLATFORMS`]
static MATCHERS: LazyLock<Vec<Vec<Regex>>> = LazyLock::new(|| {
    PLATFORMS
        .iter()
        .map(|spec| {
            spec.patterns
                .iter()
                .map(|p| Regex::new(p).expect("platform pattern must compile"))
                .collect()
        })
        .collect()
});

impl Platform {
    pub fn spec(self) -> &'static PlatformSpec {
        &PLATFORMS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn code(self) -> &'static str {
        self.spec().code
    }

    const fn index(self) -> usize {
        match self {
            Self::Amazon => 0,
            Self::Flipkart => 1,
            Self::Myntra => 2,
            Self::Ajio => 3,
            Self::Nykaa => 4,
        }
    }

    fn matchers(self) -> &'static [Regex] {
        &MATCHERS[self.index()]
    }

    /// Try each identifier pattern in order and return the first capture
    fn find_product_id(self, url: &str) -> Option<String> {
        self.matchers()
            .iter()
            .find_map(|re| re.captures(url))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|id| !id.is_empty())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of running the extractor over one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found {
        platform: Platform,
        product_id: String,
    },
    NotFound {
        platform: Option<Platform>,
    },
}

impl Extraction {
    /// Detected platform, if any (also set when no identifier was found)
    pub const fn platform(&self) -> Option<Platform> {
        match self {
            Self::Found { platform, .. } => Some(*platform),
            Self::NotFound { platform } => *platform,
        }
    }

    pub fn platform_name(&self) -> &'static str {
        self.platform().map_or(UNKNOWN_PLATFORM, Platform::name)
    }

    pub fn product_id(&self) -> Option<&str> {
        match self {
            Self::Found { product_id, .. } => Some(product_id),
            Self::NotFound { .. } => None,
        }
    }

    /// Upstream `pos` value: the platform code on success, [`DEFAULT_CODE`] otherwise
    pub fn code(&self) -> &'static str {
        match self {
            Self::Found { platform, .. } => platform.code(),
            Self::NotFound { .. } => DEFAULT_CODE,
        }
    }
}

/// Classify a URL by case-insensitive keyword match; first table entry wins
pub fn detect(url: &str) -> Option<Platform> {
    let lower = url.to_lowercase();
    PLATFORMS
        .iter()
        .find(|spec| lower.contains(spec.keyword))
        .map(|spec| spec.platform)
}

/// Detect the platform and extract its product identifier
pub fn extract(url: &str) -> Extraction {
    let Some(platform) = detect(url) else {
        return Extraction::NotFound { platform: None };
    };

    match platform.find_product_id(url) {
        Some(product_id) => Extraction::Found {
            platform,
            product_id,
        },
        None => Extraction::NotFound {
            platform: Some(platform),
        },
    }
}

/// One-line summary of supported platforms, e.g. `Amazon (pos=63), Flipkart (pos=2)`
pub fn supported_summary() -> String {
    PLATFORMS
        .iter()
        .map(|spec| format!("{} (pos={})", spec.name, spec.code))
        .collect::<Vec<_>>()
        .join(", ")
}
