//! Static filter catalogs.

use crate::types::LicenseInfo;

/// Language suggestions for filter pickers. The search endpoint accepts
/// any language name; this list only seeds the UI.
pub const LANGUAGES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Go",
    "PHP",
    "Ruby",
    "Swift",
    "Kotlin",
    "Rust",
];

/// Minimal license list used when the catalog endpoint is unreachable.
pub fn fallback_licenses() -> Vec<LicenseInfo> {
    [
        ("mit", "MIT License", "MIT"),
        ("apache-2.0", "Apache License 2.0", "Apache-2.0"),
        ("gpl-3.0", "GNU General Public License v3.0", "GPL-3.0"),
        ("bsd-3-clause", "BSD 3-Clause License", "BSD-3-Clause"),
    ]
    .iter()
    .map(|(key, name, spdx)| LicenseInfo {
        key: key.to_string(),
        name: name.to_string(),
        spdx_id: Some(spdx.to_string()),
    })
    .collect()
}
