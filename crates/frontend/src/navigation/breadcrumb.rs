//! Breadcrumb trail derivation from the current path.
//!
//! Label resolution falls through three tiers: kebab-case segment converted to
//! a camelCase dictionary key, the dictionary value when non-empty, otherwise
//! the raw segment capitalized with hyphens replaced by spaces. The fallback
//! is what keeps untranslated routes from rendering raw slugs.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub path: String,
}

/// Build the trail for `path`. `resolve` is the injected translation lookup
/// (`key -> Some(label)` when a translation exists). The root path yields an
/// empty trail and the caller renders nothing.
pub fn build<F>(path: &str, resolve: F) -> Vec<Crumb>
where
    F: Fn(&str) -> Option<String>,
{
    let mut crumbs = Vec::new();
    let mut prefix = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        prefix.push('/');
        prefix.push_str(segment);
        let key = kebab_to_camel(segment);
        let label = match resolve(&key) {
            Some(translated) if !translated.is_empty() => translated,
            _ => prettify(segment),
        };
        crumbs.push(Crumb {
            label,
            path: prefix.clone(),
        });
    }
    crumbs
}

/// `access-control` -> `accessControl`
fn kebab_to_camel(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut upper_next = false;
    for ch in segment.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// `access-control` -> `Access control`
fn prettify(segment: &str) -> String {
    let spaced = segment.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_translations(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn root_path_yields_empty_trail() {
        assert!(build("/", no_translations).is_empty());
        assert!(build("", no_translations).is_empty());
    }

    #[test]
    fn untranslated_segment_falls_back_to_prettified_slug() {
        let crumbs = build("/dashboard/access-control", no_translations);
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].label, "Dashboard");
        assert_eq!(crumbs[0].path, "/dashboard");
        assert_eq!(crumbs[1].label, "Access control");
        assert_eq!(crumbs[1].path, "/dashboard/access-control");
    }

    #[test]
    fn translated_segment_is_used_verbatim() {
        let crumbs = build("/dashboard/access-control", |key| {
            (key == "accessControl").then(|| "Access Control".to_string())
        });
        assert_eq!(crumbs[1].label, "Access Control");
    }

    #[test]
    fn empty_translation_falls_through() {
        let crumbs = build("/dashboard", |_| Some(String::new()));
        assert_eq!(crumbs[0].label, "Dashboard");
    }

    #[test]
    fn kebab_key_conversion() {
        assert_eq!(kebab_to_camel("access-control"), "accessControl");
        assert_eq!(kebab_to_camel("check-ins"), "checkIns");
        assert_eq!(kebab_to_camel("dashboard"), "dashboard");
    }
}
