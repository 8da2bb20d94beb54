/// Derives a URL slug: lowercase ASCII alphanumerics separated by single dashes.
///
/// Returns `"company"` when nothing usable remains.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "company".to_string()
    } else {
        slug
    }
}

/// Makes an uploaded file name safe to embed in a storage key.
///
/// Keeps ASCII alphanumerics, `.`, `-` and `_`, replaces everything else with `_`,
/// strips leading dots and caps the length at 100 characters.
pub fn sanitize_file_name(name: &str) -> String {
    // Browsers may send a full client path
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    let cleaned: String = cleaned.chars().take(100).collect();

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

/// Trims an optional form value, mapping blank strings to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_company_names() {
        assert_eq!(slugify("Acme Property Management"), "acme-property-management");
        assert_eq!(slugify("  Müller & Söhne GmbH  "), "m-ller-s-hne-gmbh");
        assert_eq!(slugify("--Rent!!Desk--"), "rent-desk");
        assert_eq!(slugify("!!!"), "company");
    }

    #[test]
    fn sanitizes_file_names() {
        assert_eq!(sanitize_file_name("lease contract.pdf"), "lease_contract.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\scan 1.png"), "scan_1.png");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
        assert_eq!(sanitize_file_name(""), "file");
    }

    #[test]
    fn caps_file_name_length() {
        let long = "a".repeat(300);
        assert_eq!(sanitize_file_name(&long).len(), 100);
    }
}
